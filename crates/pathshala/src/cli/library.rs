//! Saved lesson command handlers.

use super::commands::LibraryCommands;
use super::render::{print_record, print_records};
use pathshala::{JsonFileLessonRepository, LessonRepository, PathshalaConfig, PathshalaResult};

/// The configured on-disk lesson collection.
pub fn repository(config: &PathshalaConfig) -> PathshalaResult<JsonFileLessonRepository> {
    JsonFileLessonRepository::from_config(config.storage())
}

/// Handle saved lesson commands.
pub async fn handle_library_command(
    config: &PathshalaConfig,
    cmd: LibraryCommands,
) -> PathshalaResult<()> {
    let repo = repository(config)?;
    match cmd {
        LibraryCommands::List { format } => print_records(&repo.list().await?, format),
        LibraryCommands::Show { id, format } => print_record(&repo.get(&id).await?, format),
        LibraryCommands::Delete { id } => {
            repo.delete(&id).await?;
            println!("Deleted {}", id);
            Ok(())
        }
    }
}

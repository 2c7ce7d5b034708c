//! Pathshala CLI binary.
//!
//! This binary provides command-line access to Pathshala's functionality:
//! - Generate lessons and board-exam question papers
//! - Turn lessons into slide decks
//! - Adapt and manage saved lessons

use clap::Parser;
use pathshala::{LoggingConfig, PathshalaConfig, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, handle_adapt, handle_lesson, handle_library_command,
        handle_question_paper, handle_slides,
    };

    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(&LoggingConfig::new(cli.verbose).with_json_logs(cli.json_logs))?;

    let config = PathshalaConfig::load()?;

    match cli.command {
        Commands::Lesson {
            topic,
            grade,
            methods,
            save,
            format,
        } => {
            handle_lesson(&config, topic, grade, methods, save, format).await?;
        }

        Commands::QuestionPaper {
            subject,
            kind,
            save,
            format,
        } => {
            handle_question_paper(&config, subject, kind, save, format).await?;
        }

        Commands::Slides {
            source,
            topic,
            grade,
            language,
            format,
        } => {
            handle_slides(&config, source, topic, grade, language, format).await?;
        }

        Commands::Adapt {
            id,
            grade,
            methods,
            format,
        } => {
            handle_adapt(&config, id, grade, methods, format).await?;
        }

        Commands::Library(library_cmd) => {
            handle_library_command(&config, library_cmd).await?;
        }
    }

    Ok(())
}

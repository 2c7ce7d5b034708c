//! Tests for the saved lesson repositories.

use pathshala_core::{LessonContentBundle, LessonContentBundleBuilder};
use pathshala_error::{PathshalaErrorKind, StorageErrorKind};
use pathshala_interface::LessonRepository;
use pathshala_storage::{InMemoryLessonRepository, JsonFileLessonRepository};
use tempfile::TempDir;

fn bundle(english: &str) -> LessonContentBundle {
    LessonContentBundleBuilder::default()
        .english_content(english)
        .kannada_content("ಕನ್ನಡ")
        .urdu_content("اردو")
        .question_paper_english("")
        .build()
        .unwrap()
}

fn is_not_found(err: &pathshala_error::PathshalaError) -> bool {
    matches!(
        err.kind(),
        PathshalaErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::NotFound(_))
    )
}

async fn exercise(repo: &dyn LessonRepository) -> anyhow::Result<()> {
    assert!(repo.list().await?.is_empty());

    let first = repo.insert("Photosynthesis", bundle("first")).await?;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = repo.insert("Gravity", bundle("second")).await?;

    let listed = repo.list().await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id(), second.id());
    assert_eq!(listed[1].id(), first.id());
    assert!(listed[0].saved_at() >= listed[1].saved_at());

    let loaded = repo.get(first.id()).await?;
    assert_eq!(loaded, first);
    assert_eq!(loaded.lesson_content().english_content(), "first");

    repo.delete(first.id()).await?;
    let listed = repo.list().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), second.id());

    let err = repo.delete(first.id()).await.unwrap_err();
    assert!(is_not_found(&err));
    let err = repo.get("no-such-id").await.unwrap_err();
    assert!(is_not_found(&err));
    Ok(())
}

#[tokio::test]
async fn in_memory_repository_contract() -> anyhow::Result<()> {
    let repo = InMemoryLessonRepository::new();
    exercise(&repo).await?;
    assert_eq!(repo.len().await, 1);
    repo.clear().await;
    assert!(repo.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn json_file_repository_contract() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = JsonFileLessonRepository::new(temp_dir.path(), "savedLessons")?;
    exercise(&repo).await?;
    assert_eq!(repo.path(), temp_dir.path().join("savedLessons.json"));
    Ok(())
}

#[tokio::test]
async fn records_survive_reopen() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let saved = {
        let repo = JsonFileLessonRepository::new(temp_dir.path(), "savedLessons")?;
        repo.insert("Photosynthesis", bundle("kept")).await?
    };

    let reopened = JsonFileLessonRepository::new(temp_dir.path(), "savedLessons")?;
    let listed = reopened.list().await?;
    assert_eq!(listed, vec![saved]);
    assert_eq!(
        listed[0].lesson_content().question_paper_english().as_deref(),
        Some("")
    );
    Ok(())
}

#[tokio::test]
async fn file_uses_camel_case_records() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = JsonFileLessonRepository::new(temp_dir.path(), "savedLessons")?;
    repo.insert("Photosynthesis", bundle("en")).await?;

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(repo.path())?)?;
    let record = &raw.as_array().expect("array")[0];
    assert!(record.get("savedAt").is_some());
    assert_eq!(record["lessonContent"]["englishContent"], "en");
    assert!(!temp_dir.path().join("savedLessons.json.tmp").exists());
    Ok(())
}

#[tokio::test]
async fn corrupt_collection_is_reported() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("savedLessons.json"), "{not json")?;
    let repo = JsonFileLessonRepository::new(temp_dir.path(), "savedLessons")?;

    let err = repo.list().await.unwrap_err();
    assert!(matches!(
        err.kind(),
        PathshalaErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::Corrupt(_))
    ));
    Ok(())
}

#[test]
fn collection_name_must_be_plain() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["", "..", "../escape", "nested/name"] {
        assert!(JsonFileLessonRepository::new(temp_dir.path(), name).is_err());
    }
}

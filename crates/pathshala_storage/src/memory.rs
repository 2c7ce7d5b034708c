//! In-memory lesson repository.

use crate::newest_first;
use async_trait::async_trait;
use pathshala_core::{LessonContentBundle, SavedLessonRecord};
use pathshala_error::{PathshalaResult, StorageError, StorageErrorKind};
use pathshala_interface::LessonRepository;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Repository that keeps records in a vector behind an `RwLock`.
///
/// Clones share the same records. Everything is lost when the last clone
/// is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLessonRepository {
    records: Arc<RwLock<Vec<SavedLessonRecord>>>,
}

impl InMemoryLessonRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Check if the repository is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Remove every record.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl LessonRepository for InMemoryLessonRepository {
    async fn list(&self) -> PathshalaResult<Vec<SavedLessonRecord>> {
        Ok(newest_first(&self.records.read().await))
    }

    #[tracing::instrument(skip(self, lesson_content))]
    async fn insert(
        &self,
        topic: &str,
        lesson_content: LessonContentBundle,
    ) -> PathshalaResult<SavedLessonRecord> {
        let record = SavedLessonRecord::new(topic, lesson_content);
        self.records.write().await.push(record.clone());
        tracing::debug!(id = %record.id(), "Saved lesson in memory");
        Ok(record)
    }

    async fn get(&self, id: &str) -> PathshalaResult<SavedLessonRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(id.to_string())).into())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &str) -> PathshalaResult<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(StorageError::new(StorageErrorKind::NotFound(id.to_string())).into());
        }
        Ok(())
    }
}

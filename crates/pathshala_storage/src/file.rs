//! JSON-file lesson repository.

use crate::newest_first;
use async_trait::async_trait;
use pathshala_config::StorageConfig;
use pathshala_core::{LessonContentBundle, SavedLessonRecord};
use pathshala_error::{PathshalaResult, StorageError, StorageErrorKind};
use pathshala_interface::LessonRepository;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Repository backed by one JSON array file per collection.
///
/// Layout: `{data_dir}/{collection}.json`, holding records in insertion
/// order. Every change reads the whole collection, modifies it and writes it
/// back through a temp file + rename. The mutex serializes changes within
/// one process only; two processes sharing a data directory can lose writes.
///
/// A missing file is an empty collection.
#[derive(Debug)]
pub struct JsonFileLessonRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileLessonRepository {
    /// Open (or prepare) a collection under `data_dir`.
    ///
    /// Creates the data directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the collection name is not a plain file stem or the
    /// directory cannot be created.
    #[tracing::instrument(skip(data_dir))]
    pub fn new(data_dir: impl Into<PathBuf>, collection: &str) -> PathshalaResult<Self> {
        let data_dir = data_dir.into();

        let plain = !collection.is_empty()
            && collection != "."
            && collection != ".."
            && !collection.contains(['/', '\\']);
        if !plain {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(format!(
                "collection name '{}'",
                collection
            )))
            .into());
        }

        std::fs::create_dir_all(&data_dir).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                data_dir.display(),
                e
            )))
        })?;

        let path = data_dir.join(format!("{}.json", collection));
        tracing::info!(path = %path.display(), "Opened lesson collection");
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Open the collection named by the storage settings.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &StorageConfig) -> PathshalaResult<Self> {
        Self::new(config.resolved_data_dir(), config.collection())
    }

    /// Path of the collection file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> PathshalaResult<Vec<SavedLessonRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "Collection is not a record array"
            );
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
            .into()
        })
    }

    async fn write_all(&self, records: &[SavedLessonRecord]) -> PathshalaResult<()> {
        let data = serde_json::to_vec_pretty(records).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;
        Ok(())
    }
}

#[async_trait]
impl LessonRepository for JsonFileLessonRepository {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn list(&self) -> PathshalaResult<Vec<SavedLessonRecord>> {
        let _guard = self.lock.lock().await;
        let records = self.read_all().await?;
        tracing::debug!(count = records.len(), "Listed saved lessons");
        Ok(newest_first(&records))
    }

    #[tracing::instrument(skip(self, lesson_content), fields(path = %self.path.display()))]
    async fn insert(
        &self,
        topic: &str,
        lesson_content: LessonContentBundle,
    ) -> PathshalaResult<SavedLessonRecord> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;
        let record = SavedLessonRecord::new(topic, lesson_content);
        records.push(record.clone());
        self.write_all(&records).await?;

        tracing::info!(id = %record.id(), total = records.len(), "Saved lesson");
        Ok(record)
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn get(&self, id: &str) -> PathshalaResult<SavedLessonRecord> {
        let _guard = self.lock.lock().await;
        self.read_all()
            .await?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(id.to_string())).into())
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn delete(&self, id: &str) -> PathshalaResult<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            tracing::warn!(id, "No saved lesson with this id");
            return Err(StorageError::new(StorageErrorKind::NotFound(id.to_string())).into());
        }
        self.write_all(&records).await?;

        tracing::info!(id, remaining = records.len(), "Deleted lesson");
        Ok(())
    }
}

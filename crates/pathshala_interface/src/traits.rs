//! Trait definitions for drivers, capabilities and storage.

use async_trait::async_trait;
use pathshala_core::{GenerateRequest, GenerateResponse, LessonContentBundle, SavedLessonRecord};
use pathshala_error::PathshalaResult;

/// Core trait every generation backend implements.
///
/// One call is one request/response exchange with the service. Tool rounds,
/// when the backend supports them, happen inside that exchange and are not
/// visible to the caller.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate structured output for the request.
    async fn generate(&self, req: &GenerateRequest) -> PathshalaResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;
}

/// Web search offered to the model as a callable tool.
///
/// Implementations take a free-text query and return free text the model can
/// read. Tests substitute a deterministic stub.
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Run a query and return readable text.
    async fn search(&self, query: &str) -> PathshalaResult<String>;
}

/// Storage for saved lessons.
///
/// Records are immutable once inserted. Listing returns newest first.
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// All saved lessons, newest first.
    async fn list(&self) -> PathshalaResult<Vec<SavedLessonRecord>>;

    /// Save a lesson and return the stored record.
    async fn insert(
        &self,
        topic: &str,
        lesson_content: LessonContentBundle,
    ) -> PathshalaResult<SavedLessonRecord>;

    /// Load one saved lesson.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` with `NotFound` when no record has the id.
    async fn get(&self, id: &str) -> PathshalaResult<SavedLessonRecord>;

    /// Remove a saved lesson.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` with `NotFound` when no record has the id.
    async fn delete(&self, id: &str) -> PathshalaResult<()>;
}

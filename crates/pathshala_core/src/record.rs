//! Saved lesson records.

use crate::LessonContentBundle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lesson the user chose to keep.
///
/// Records are created on save and removed on delete; they are never edited.
///
/// # Examples
///
/// ```
/// use pathshala_core::{LessonContentBundleBuilder, SavedLessonRecord};
///
/// let bundle = LessonContentBundleBuilder::default()
///     .english_content("en")
///     .kannada_content("kn")
///     .urdu_content("ur")
///     .build()
///     .unwrap();
/// let record = SavedLessonRecord::new("Photosynthesis", bundle);
/// assert_eq!(record.topic(), "Photosynthesis");
/// assert!(!record.id().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct SavedLessonRecord {
    /// Unique record id (UUID v4)
    id: String,
    /// Lesson topic
    topic: String,
    /// When the record was saved
    saved_at: DateTime<Utc>,
    /// The saved bundle
    lesson_content: LessonContentBundle,
}

impl SavedLessonRecord {
    /// Stamp a new record with a fresh id and the current time.
    pub fn new(topic: impl Into<String>, lesson_content: LessonContentBundle) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            topic: topic.into(),
            saved_at: Utc::now(),
            lesson_content,
        }
    }
}

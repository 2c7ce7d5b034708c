//! Saved lesson storage for Pathshala.
//!
//! Two [`LessonRepository`](pathshala_interface::LessonRepository) backends:
//!
//! - [`JsonFileLessonRepository`] keeps the `savedLessons` collection as one
//!   JSON array on disk, rewritten atomically on every change
//! - [`InMemoryLessonRepository`] keeps records in memory for tests
//!
//! # Example
//!
//! ```rust
//! use pathshala_core::LessonContentBundleBuilder;
//! use pathshala_interface::LessonRepository;
//! use pathshala_storage::JsonFileLessonRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = JsonFileLessonRepository::new("/tmp/pathshala", "savedLessons")?;
//! let bundle = LessonContentBundleBuilder::default()
//!     .english_content("Plants make food.")
//!     .kannada_content("ಸಸ್ಯಗಳು ಆಹಾರ ತಯಾರಿಸುತ್ತವೆ.")
//!     .urdu_content("پودے خوراک بناتے ہیں۔")
//!     .build()?;
//!
//! let record = repo.insert("Photosynthesis", bundle).await?;
//! assert_eq!(repo.list().await?[0].id(), record.id());
//! repo.delete(record.id()).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file;
mod memory;

pub use file::JsonFileLessonRepository;
pub use memory::InMemoryLessonRepository;

use pathshala_core::SavedLessonRecord;

/// Newest first; records saved in the same instant keep reverse insertion order.
pub(crate) fn newest_first(records: &[SavedLessonRecord]) -> Vec<SavedLessonRecord> {
    let mut listed: Vec<SavedLessonRecord> = records.iter().rev().cloned().collect();
    listed.sort_by(|a, b| b.saved_at().cmp(a.saved_at()));
    listed
}

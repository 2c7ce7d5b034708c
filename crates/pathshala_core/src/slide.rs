//! Slide deck types.

use serde::{Deserialize, Serialize};

/// Fewest slides an accepted deck may contain.
pub const MIN_SLIDES: usize = 5;
/// Most slides an accepted deck may contain.
pub const MAX_SLIDES: usize = 10;

/// A single presentation slide.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Slide heading
    title: String,
    /// Markdown body, usually bullet points
    content: String,
    /// Notes for the presenter
    speaker_notes: String,
}

/// Ordered slides produced from one lesson.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

//! Adapted lesson content.

use crate::Language;
use serde::{Deserialize, Serialize};

/// Lesson content rewritten for a different set of teaching methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct AdaptedContent {
    adapted_content_english: String,
    adapted_content_kannada: String,
    adapted_content_urdu: String,
}

impl AdaptedContent {
    /// Adapted content for one language.
    pub fn content(&self, language: Language) -> &str {
        match language {
            Language::English => &self.adapted_content_english,
            Language::Kannada => &self.adapted_content_kannada,
            Language::Urdu => &self.adapted_content_urdu,
        }
    }
}

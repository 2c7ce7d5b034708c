//! Output languages.

use serde::{Deserialize, Serialize};

/// A language every lesson is produced in.
///
/// Field names in the content bundle are derived from the language: primary
/// content is prefixed (`englishContent`), every other section is suffixed
/// (`questionPaperEnglish`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Language {
    /// English
    English,
    /// Kannada
    Kannada,
    /// Urdu
    Urdu,
}

impl Language {
    /// Languages in bundle order.
    pub const ALL: [Language; 3] = [Language::English, Language::Kannada, Language::Urdu];

    /// Lowercase prefix used by the primary content field.
    pub fn prefix(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Kannada => "kannada",
            Language::Urdu => "urdu",
        }
    }

    /// Name of the primary content field, e.g. `kannadaContent`.
    pub fn content_field(&self) -> String {
        format!("{}Content", self.prefix())
    }

    /// Name of a suffixed section field, e.g. `answerKeyUrdu`.
    pub fn suffixed(&self, section: &str) -> String {
        format!("{}{}", section, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_follow_bundle_convention() {
        assert_eq!(Language::English.content_field(), "englishContent");
        assert_eq!(Language::Urdu.suffixed("answerKey"), "answerKeyUrdu");
        assert_eq!(
            Language::Kannada.suffixed("repeatedQuestions"),
            "repeatedQuestionsKannada"
        );
    }
}

//! The multilingual lesson content bundle.

use crate::Language;
use serde::{Deserialize, Serialize};

/// Full validated output of one lesson generation call.
///
/// The three primary-content fields are always present. Every other section
/// is optional at the type level. An empty string is a real value meaning
/// "present but not applicable" and is kept distinct from `None`.
///
/// Wire names are camelCase (`englishContent`, `questionPaperKannada`,
/// `repeatedAnswersUrdu`).
///
/// # Examples
///
/// ```
/// use pathshala_core::{Language, LessonContentBundleBuilder};
///
/// let bundle = LessonContentBundleBuilder::default()
///     .english_content("Plants make food from light.")
///     .kannada_content("ಸಸ್ಯಗಳು ಬೆಳಕಿನಿಂದ ಆಹಾರ ತಯಾರಿಸುತ್ತವೆ.")
///     .urdu_content("پودے روشنی سے خوراک بناتے ہیں۔")
///     .question_paper_english("")
///     .build()
///     .unwrap();
///
/// assert_eq!(bundle.content(Language::English), "Plants make food from light.");
/// assert_eq!(bundle.question_paper(Language::English), Some(""));
/// assert_eq!(bundle.question_paper(Language::Urdu), None);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct LessonContentBundle {
    english_content: String,
    kannada_content: String,
    urdu_content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    question_paper_english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    question_paper_kannada: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    question_paper_urdu: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    answer_key_english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    answer_key_kannada: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    answer_key_urdu: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    repeated_questions_english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    repeated_questions_kannada: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    repeated_questions_urdu: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    repeated_answers_english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    repeated_answers_kannada: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    repeated_answers_urdu: Option<String>,
}

impl LessonContentBundle {
    /// Section prefixes of the optional suffixed fields, in bundle order.
    pub const OPTIONAL_SECTIONS: [&'static str; 4] = [
        "questionPaper",
        "answerKey",
        "repeatedQuestions",
        "repeatedAnswers",
    ];

    /// Primary content for a language.
    pub fn content(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english_content,
            Language::Kannada => &self.kannada_content,
            Language::Urdu => &self.urdu_content,
        }
    }

    /// Question paper for a language, if the field was present.
    pub fn question_paper(&self, language: Language) -> Option<&str> {
        match language {
            Language::English => self.question_paper_english.as_deref(),
            Language::Kannada => self.question_paper_kannada.as_deref(),
            Language::Urdu => self.question_paper_urdu.as_deref(),
        }
    }

    /// Answer key for a language, if the field was present.
    pub fn answer_key(&self, language: Language) -> Option<&str> {
        match language {
            Language::English => self.answer_key_english.as_deref(),
            Language::Kannada => self.answer_key_kannada.as_deref(),
            Language::Urdu => self.answer_key_urdu.as_deref(),
        }
    }

    /// Teacher-only repeated questions for a language.
    pub fn repeated_questions(&self, language: Language) -> Option<&str> {
        match language {
            Language::English => self.repeated_questions_english.as_deref(),
            Language::Kannada => self.repeated_questions_kannada.as_deref(),
            Language::Urdu => self.repeated_questions_urdu.as_deref(),
        }
    }

    /// Teacher-only answers to the repeated questions for a language.
    pub fn repeated_answers(&self, language: Language) -> Option<&str> {
        match language {
            Language::English => self.repeated_answers_english.as_deref(),
            Language::Kannada => self.repeated_answers_kannada.as_deref(),
            Language::Urdu => self.repeated_answers_urdu.as_deref(),
        }
    }

    /// True when any language carries a non-empty question paper.
    pub fn has_question_paper(&self) -> bool {
        Language::ALL
            .iter()
            .any(|lang| self.question_paper(*lang).is_some_and(|s| !s.trim().is_empty()))
    }

    /// Student-facing text for one language: primary content followed by
    /// the question paper when one is present. Teacher-only sections and
    /// answer keys are left out.
    pub fn student_text(&self, language: Language) -> String {
        let mut text = self.content(language).trim().to_string();
        let paper = self.question_paper(language).map(str::trim).unwrap_or_default();
        if !paper.is_empty() {
            if !text.is_empty() {
                text.push_str("\n\n");
            }
            text.push_str(paper);
        }
        text
    }
}

//! Teaching method tags.

use serde::{Deserialize, Serialize};

/// Pedagogical approach selected by the requester.
///
/// Labels are the human-facing names, so `Question Paper` and `AI Summary`
/// keep their spaces on the wire.
///
/// # Examples
///
/// ```
/// use pathshala_core::TeachingMethod;
///
/// let method: TeachingMethod = "question paper".parse().unwrap();
/// assert_eq!(method, TeachingMethod::QuestionPaper);
/// assert_eq!(method.to_string(), "Question Paper");
/// ```
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
pub enum TeachingMethod {
    /// Explain through comparison with something familiar
    Analogy,
    /// Wrap the material in a narrative
    Story,
    /// Memory aids
    Mnemonic,
    /// Practice exercises
    Worksheet,
    /// Short assessment
    Quiz,
    /// Printable exam with answer key
    #[serde(rename = "Question Paper")]
    #[display("Question Paper")]
    QuestionPaper,
    /// Condensed summary
    #[serde(rename = "AI Summary")]
    #[display("AI Summary")]
    AiSummary,
}

impl TeachingMethod {
    /// Human-facing label, identical to `Display`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TeachingMethod::Analogy => "Analogy",
            TeachingMethod::Story => "Story",
            TeachingMethod::Mnemonic => "Mnemonic",
            TeachingMethod::Worksheet => "Worksheet",
            TeachingMethod::Quiz => "Quiz",
            TeachingMethod::QuestionPaper => "Question Paper",
            TeachingMethod::AiSummary => "AI Summary",
        }
    }

    /// One-line guidance used when shaping non-exam lesson content.
    pub fn guidance(&self) -> &'static str {
        match self {
            TeachingMethod::Analogy => {
                "explain the key ideas through analogies drawn from the students' everyday life"
            }
            TeachingMethod::Story => {
                "present the material as an engaging story with characters and a clear arc"
            }
            TeachingMethod::Mnemonic => {
                "include memorable mnemonics for the facts students must recall"
            }
            TeachingMethod::Worksheet => {
                "include a worksheet of practice exercises students can complete on paper"
            }
            TeachingMethod::Quiz => "end with a short quiz that checks understanding",
            TeachingMethod::QuestionPaper => {
                "produce a complete printable question paper with a matching answer key"
            }
            TeachingMethod::AiSummary => {
                "provide a concise summary of the essential points of the topic"
            }
        }
    }
}

impl std::str::FromStr for TeachingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "analogy" => Ok(TeachingMethod::Analogy),
            "story" => Ok(TeachingMethod::Story),
            "mnemonic" => Ok(TeachingMethod::Mnemonic),
            "worksheet" => Ok(TeachingMethod::Worksheet),
            "quiz" => Ok(TeachingMethod::Quiz),
            "questionpaper" => Ok(TeachingMethod::QuestionPaper),
            "aisummary" => Ok(TeachingMethod::AiSummary),
            _ => Err(format!("Unknown teaching method: {}", s)),
        }
    }
}

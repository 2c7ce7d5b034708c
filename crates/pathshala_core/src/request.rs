//! Validated request types for every generation flow.

use crate::{Language, LessonContentBundle, TeachingMethod};
use pathshala_error::{ValidationError, ValidationErrorKind};
use serde::Serialize;

/// Shortest accepted topic, counted in characters after trimming.
pub const MIN_TOPIC_CHARS: usize = 2;

/// A lesson request that has passed validation.
///
/// Only [`LessonRequestBuilder::build`] produces one, so holding a
/// `LessonRequest` means the topic and grade are non-blank and the
/// teaching methods are a non-empty, duplicate-free, ordered list.
///
/// # Examples
///
/// ```
/// use pathshala_core::{LessonRequestBuilder, TeachingMethod};
///
/// let request = LessonRequestBuilder::default()
///     .topic("Photosynthesis")
///     .grade_level("Grade 6")
///     .teaching_methods(vec![TeachingMethod::Story])
///     .build()
///     .unwrap();
///
/// assert!(!request.is_question_paper());
/// assert_eq!(request.methods_label(), "Story");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct LessonRequest {
    /// Subject of the lesson
    topic: String,
    /// Grade label, e.g. `Grade 6`
    grade_level: String,
    /// Requested methods, in request order
    teaching_methods: Vec<TeachingMethod>,
}

impl LessonRequestBuilder {
    /// Build the request, rejecting the first rule it breaks.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the missing field, the short
    /// topic, the empty method list or the duplicated method.
    #[track_caller]
    pub fn build(&self) -> Result<LessonRequest, ValidationError> {
        let built = self.build_internal().map_err(|e| match e {
            LessonRequestBuilderError::UninitializedField(field) => {
                ValidationError::new(ValidationErrorKind::MissingField(wire_name(field)))
            }
            LessonRequestBuilderError::ValidationError(message) => {
                ValidationError::new(ValidationErrorKind::Invalid(message))
            }
        })?;

        let topic = built.topic.trim().to_string();
        if topic.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingField(
                "topic".to_string(),
            )));
        }
        let actual = topic.chars().count();
        if actual < MIN_TOPIC_CHARS {
            return Err(ValidationError::new(ValidationErrorKind::TopicTooShort {
                min: MIN_TOPIC_CHARS,
                actual,
            }));
        }

        let grade_level = built.grade_level.trim().to_string();
        if grade_level.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingField(
                "gradeLevel".to_string(),
            )));
        }

        if built.teaching_methods.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::NoTeachingMethods));
        }
        for (i, method) in built.teaching_methods.iter().enumerate() {
            if built.teaching_methods[..i].contains(method) {
                return Err(ValidationError::new(
                    ValidationErrorKind::DuplicateTeachingMethod(method.to_string()),
                ));
            }
        }

        Ok(LessonRequest {
            topic,
            grade_level,
            teaching_methods: built.teaching_methods,
        })
    }
}

fn wire_name(field: &str) -> String {
    match field {
        "grade_level" => "gradeLevel".to_string(),
        "teaching_methods" => "teachingMethods".to_string(),
        other => other.to_string(),
    }
}

impl LessonRequest {
    /// True when `Question Paper` is among the requested methods.
    pub fn is_question_paper(&self) -> bool {
        self.teaching_methods.contains(&TeachingMethod::QuestionPaper)
    }

    /// Methods joined with `", "` in request order.
    pub fn methods_label(&self) -> String {
        self.teaching_methods
            .iter()
            .map(TeachingMethod::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Which sitting a question paper is prepared for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::EnumIter, derive_more::Display,
)]
pub enum QuestionPaperKind {
    /// End-of-year examination
    Annual,
    /// Re-sit examination
    Supplementary,
}

impl std::str::FromStr for QuestionPaperKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "annual" => Ok(QuestionPaperKind::Annual),
            "supplementary" => Ok(QuestionPaperKind::Supplementary),
            _ => Err(format!("Unknown question paper kind: {}", s)),
        }
    }
}

/// Request for a standalone board-exam question paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters, derive_new::new)]
pub struct QuestionPaperRequest {
    /// Exam subject, e.g. `Science`
    subject: String,
    /// Annual or supplementary sitting
    kind: QuestionPaperKind,
}

impl QuestionPaperRequest {
    /// Grade every standalone question paper targets.
    pub const GRADE_LEVEL: &'static str = "Grade 10";

    /// Topic line, e.g. `Science - Annual Question Paper`.
    pub fn topic(&self) -> String {
        format!("{} - {} Question Paper", self.subject.trim(), self.kind)
    }

    /// Expand into the equivalent lesson request.
    ///
    /// # Errors
    ///
    /// Fails when the subject is blank.
    #[track_caller]
    pub fn to_lesson_request(&self) -> Result<LessonRequest, ValidationError> {
        if self.subject.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingField(
                "subject".to_string(),
            )));
        }
        LessonRequestBuilder::default()
            .topic(self.topic())
            .grade_level(Self::GRADE_LEVEL)
            .teaching_methods(vec![TeachingMethod::QuestionPaper])
            .build()
    }
}

/// Request to rewrite existing lesson content for different methods.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct AdaptationRequest {
    /// Topic, grade and the methods to adapt towards
    request: LessonRequest,
    /// Existing English content
    content_english: String,
    /// Existing Kannada content
    content_kannada: String,
    /// Existing Urdu content
    content_urdu: String,
}

impl AdaptationRequest {
    /// Pair a validated request with the primary content of a bundle.
    pub fn from_bundle(request: LessonRequest, bundle: &LessonContentBundle) -> Self {
        Self {
            request,
            content_english: bundle.content(Language::English).to_string(),
            content_kannada: bundle.content(Language::Kannada).to_string(),
            content_urdu: bundle.content(Language::Urdu).to_string(),
        }
    }

    /// Existing content for one language.
    pub fn content(&self, language: Language) -> &str {
        match language {
            Language::English => &self.content_english,
            Language::Kannada => &self.content_kannada,
            Language::Urdu => &self.content_urdu,
        }
    }
}

/// Input to slide decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct SlideRequest {
    /// Finished lesson text to split into slides
    lesson_content: String,
    /// Lesson topic
    topic: String,
    /// Grade label
    grade_level: String,
}

impl SlideRequest {
    /// Build a slide request from the student-facing text of one language.
    pub fn from_bundle(
        topic: impl Into<String>,
        grade_level: impl Into<String>,
        bundle: &LessonContentBundle,
        language: Language,
    ) -> Self {
        Self {
            lesson_content: bundle.student_text(language),
            topic: topic.into(),
            grade_level: grade_level.into(),
        }
    }
}

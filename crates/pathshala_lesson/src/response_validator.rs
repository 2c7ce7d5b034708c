//! Structural validation of generation output.

use crate::extraction::extract_json;
use crate::schema::{
    adapted_content_schema, check_conformance, lesson_bundle_schema, slide_deck_schema,
};
use pathshala_core::{
    AdaptedContent, Language, LessonContentBundle, MAX_SLIDES, MIN_SLIDES, Output, SlideDeck,
};
use pathshala_error::{SchemaError, SchemaErrorKind};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

fn to_value(output: &Output) -> Result<Value, SchemaError> {
    match output {
        Output::Json(value) => Ok(value.clone()),
        Output::Text(text) => extract_json(text),
    }
}

#[track_caller]
fn decode<T: DeserializeOwned>(value: Value) -> Result<T, SchemaError> {
    serde_json::from_value(value)
        .map_err(|e| SchemaError::new(SchemaErrorKind::NotJson(e.to_string())))
}

fn require_text(value: &Value, field: &str) -> Result<(), SchemaError> {
    let blank = value
        .get(field)
        .and_then(Value::as_str)
        .is_none_or(|s| s.trim().is_empty());
    if blank {
        return Err(SchemaError::new(SchemaErrorKind::EmptyField(format!(
            "$.{}",
            field
        ))));
    }
    Ok(())
}

/// Validate a lesson generation result against the bundle contract.
///
/// Required fields must be present strings; an empty string is a valid
/// value and is kept as is. Question-paper requests additionally require the
/// question paper and answer key of every language. Otherwise suffixed
/// sections may be absent.
///
/// Validation is pure: running it twice on the same output gives the same
/// verdict.
///
/// # Errors
///
/// Returns a [`SchemaError`] whose path names the first violating field.
#[instrument(skip(output))]
pub fn validate_bundle(
    output: &Output,
    is_question_paper: bool,
) -> Result<LessonContentBundle, SchemaError> {
    let result = check_bundle(output, is_question_paper);
    match &result {
        Ok(_) => debug!("Lesson bundle accepted"),
        Err(e) => warn!(error = %e, path = ?e.path(), "Lesson bundle rejected"),
    }
    result
}

fn check_bundle(
    output: &Output,
    is_question_paper: bool,
) -> Result<LessonContentBundle, SchemaError> {
    let value = to_value(output)?;
    check_conformance(&lesson_bundle_schema(is_question_paper), &value)?;
    decode(value)
}

/// Validate a slide decomposition result.
///
/// # Errors
///
/// Fails on schema violations, on a deck outside the accepted size range and
/// on any slide with a blank title or body.
#[instrument(skip(output))]
pub fn validate_slides(output: &Output) -> Result<SlideDeck, SchemaError> {
    let value = to_value(output)?;
    check_conformance(&slide_deck_schema(), &value)?;
    let deck: SlideDeck = decode(value)?;

    if !(MIN_SLIDES..=MAX_SLIDES).contains(&deck.len()) {
        warn!(count = deck.len(), "Slide deck size out of range");
        return Err(SchemaError::new(SchemaErrorKind::SlideCount {
            count: deck.len(),
            min: MIN_SLIDES,
            max: MAX_SLIDES,
        }));
    }
    for (i, slide) in deck.slides().iter().enumerate() {
        if slide.title().trim().is_empty() {
            return Err(SchemaError::new(SchemaErrorKind::EmptyField(format!(
                "$.slides[{}].title",
                i
            ))));
        }
        if slide.content().trim().is_empty() {
            return Err(SchemaError::new(SchemaErrorKind::EmptyField(format!(
                "$.slides[{}].content",
                i
            ))));
        }
    }

    debug!(slides = deck.len(), "Slide deck accepted");
    Ok(deck)
}

/// Validate an adaptation result.
///
/// # Errors
///
/// Fails when any adapted field is missing, mistyped or blank.
#[instrument(skip(output))]
pub fn validate_adapted(output: &Output) -> Result<AdaptedContent, SchemaError> {
    let value = to_value(output)?;
    check_conformance(&adapted_content_schema(), &value)?;
    for lang in Language::ALL {
        require_text(&value, &format!("adaptedContent{}", lang))?;
    }
    decode(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lesson_json() -> Value {
        json!({
            "englishContent": "Plants make food.",
            "kannadaContent": "ಸಸ್ಯಗಳು ಆಹಾರ ತಯಾರಿಸುತ್ತವೆ.",
            "urduContent": "پودے خوراک بناتے ہیں۔",
            "questionPaperEnglish": "",
            "questionPaperKannada": "",
            "questionPaperUrdu": "",
            "answerKeyEnglish": "",
            "answerKeyKannada": "",
            "answerKeyUrdu": ""
        })
    }

    fn slides(n: usize) -> Value {
        let slides: Vec<Value> = (0..n)
            .map(|i| {
                json!({
                    "title": format!("Slide {}", i),
                    "content": "- point",
                    "speakerNotes": "say"
                })
            })
            .collect();
        json!({ "slides": slides })
    }

    #[test]
    fn empty_optional_sections_are_kept() {
        let bundle = validate_bundle(&Output::Json(lesson_json()), false).unwrap();
        assert_eq!(bundle.question_paper(Language::Kannada), Some(""));
        assert_eq!(bundle.repeated_questions(Language::English), None);
    }

    #[test]
    fn empty_primary_content_is_accepted() {
        let mut value = lesson_json();
        value["englishContent"] = json!("");
        let bundle = validate_bundle(&Output::Json(value), false).unwrap();
        assert_eq!(bundle.content(Language::English), "");
        assert_eq!(bundle.content(Language::Urdu), "پودے خوراک بناتے ہیں۔");
    }

    #[test]
    fn missing_primary_content_is_rejected() {
        let mut value = lesson_json();
        value.as_object_mut().unwrap().remove("urduContent");
        let err = validate_bundle(&Output::Json(value), false).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::MissingField("$.urduContent".into()));
    }

    #[test]
    fn question_paper_sections_are_required_in_exam_mode() {
        let mut value = lesson_json();
        value.as_object_mut().unwrap().remove("answerKeyKannada");
        let err = validate_bundle(&Output::Json(value.clone()), true).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::MissingField("$.answerKeyKannada".into()));
        assert!(validate_bundle(&Output::Json(value), false).is_ok());
    }

    #[test]
    fn empty_question_paper_is_kept_in_exam_mode() {
        let mut value = lesson_json();
        value["englishContent"] = json!("");
        let bundle = validate_bundle(&Output::Json(value), true).unwrap();
        assert_eq!(bundle.question_paper(Language::English), Some(""));
        assert_eq!(bundle.answer_key(Language::Urdu), Some(""));
    }

    #[test]
    fn wrong_type_reports_field() {
        let mut value = lesson_json();
        value["answerKeyUrdu"] = json!(7);
        let err = validate_bundle(&Output::Json(value), false).unwrap_err();
        assert_eq!(err.path(), Some("$.answerKeyUrdu"));
    }

    #[test]
    fn text_output_is_extracted() {
        let text = format!("```json\n{}\n```", lesson_json());
        assert!(validate_bundle(&Output::Text(text), false).is_ok());
    }

    #[test]
    fn validation_is_idempotent() {
        let output = Output::Json(lesson_json());
        assert_eq!(
            validate_bundle(&output, false).unwrap(),
            validate_bundle(&output, false).unwrap()
        );
        let bad = Output::Json(json!({"englishContent": "x"}));
        let first = validate_bundle(&bad, false).unwrap_err();
        let second = validate_bundle(&bad, false).unwrap_err();
        assert_eq!(first.kind, second.kind);
    }

    #[test]
    fn serialized_bundle_validates_to_itself() {
        let mut exam = lesson_json();
        for lang in Language::ALL {
            exam[lang.suffixed("questionPaper")] = json!(format!("Q1. ({})", lang));
            exam[lang.suffixed("answerKey")] = json!(format!("A1. ({})", lang));
        }
        let mut lesson = lesson_json();
        lesson["repeatedQuestionsEnglish"] = json!("1. Define photosynthesis.");

        for (value, is_question_paper) in [(lesson, false), (exam, true)] {
            let bundle = validate_bundle(&Output::Json(value), is_question_paper).unwrap();
            let reserialized = serde_json::to_value(&bundle).unwrap();
            let again = validate_bundle(&Output::Json(reserialized), is_question_paper).unwrap();
            assert_eq!(bundle, again);
        }
    }

    #[test]
    fn slide_bounds_are_enforced() {
        assert_eq!(validate_slides(&Output::Json(slides(5))).unwrap().len(), 5);
        assert_eq!(validate_slides(&Output::Json(slides(10))).unwrap().len(), 10);
        for n in [4, 11] {
            let err = validate_slides(&Output::Json(slides(n))).unwrap_err();
            assert!(matches!(err.kind, SchemaErrorKind::SlideCount { count, .. } if count == n));
        }
    }

    #[test]
    fn blank_slide_title_is_located() {
        let mut value = slides(6);
        value["slides"][3]["title"] = json!("");
        let err = validate_slides(&Output::Json(value)).unwrap_err();
        assert_eq!(err.path(), Some("$.slides[3].title"));
    }

    #[test]
    fn adapted_content_requires_every_language() {
        let output = Output::Json(json!({
            "adaptedContentEnglish": "Like a kitchen.",
            "adaptedContentKannada": "ಅಡುಗೆಮನೆಯಂತೆ.",
        }));
        let err = validate_adapted(&output).unwrap_err();
        assert_eq!(err.path(), Some("$.adaptedContentUrdu"));
    }
}

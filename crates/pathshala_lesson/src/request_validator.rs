//! Gatekeeping for untyped lesson requests.

use pathshala_core::{LessonRequest, LessonRequestBuilder, TeachingMethod};
use pathshala_error::{ValidationError, ValidationErrorKind};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Validate a LessonRequest-shaped JSON value.
///
/// Side-effect free. The first broken rule is reported; fields are checked
/// in the order `topic`, `gradeLevel`, `teachingMethods`.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the first violation.
///
/// # Examples
///
/// ```
/// use pathshala_lesson::validate_request;
/// use serde_json::json;
///
/// let request = validate_request(&json!({
///     "topic": "Photosynthesis",
///     "gradeLevel": "Grade 6",
///     "teachingMethods": ["Story"]
/// }))
/// .unwrap();
/// assert_eq!(request.topic(), "Photosynthesis");
///
/// assert!(validate_request(&json!({"topic": "Photosynthesis"})).is_err());
/// ```
#[instrument(skip(candidate))]
pub fn validate_request(candidate: &Value) -> Result<LessonRequest, ValidationError> {
    let result = parse_candidate(candidate);
    match &result {
        Ok(request) => debug!(
            topic = %request.topic(),
            methods = request.teaching_methods().len(),
            "Lesson request accepted"
        ),
        Err(e) => warn!(reason = %e.kind, "Lesson request rejected"),
    }
    result
}

fn parse_candidate(candidate: &Value) -> Result<LessonRequest, ValidationError> {
    let object = candidate.as_object().ok_or_else(|| {
        ValidationError::new(ValidationErrorKind::Invalid(
            "request must be a JSON object".to_string(),
        ))
    })?;

    let topic = required_string(object.get("topic"), "topic")?;
    let grade_level = required_string(object.get("gradeLevel"), "gradeLevel")?;

    let methods = match object.get("teachingMethods") {
        None | Some(Value::Null) => {
            return Err(ValidationError::new(ValidationErrorKind::MissingField(
                "teachingMethods".to_string(),
            )));
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ValidationError::new(ValidationErrorKind::WrongType {
                field: "teachingMethods".to_string(),
                expected: "an array of strings".to_string(),
            }));
        }
    };

    let teaching_methods = methods
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let label = item.as_str().ok_or_else(|| {
                ValidationError::new(ValidationErrorKind::WrongType {
                    field: format!("teachingMethods[{}]", i),
                    expected: "a string".to_string(),
                })
            })?;
            label.parse::<TeachingMethod>().map_err(|_| {
                ValidationError::new(ValidationErrorKind::UnknownTeachingMethod(label.to_string()))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    LessonRequestBuilder::default()
        .topic(topic)
        .grade_level(grade_level)
        .teaching_methods(teaching_methods)
        .build()
}

fn required_string<'a>(value: Option<&'a Value>, field: &str) -> Result<&'a str, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::new(ValidationErrorKind::MissingField(
            field.to_string(),
        ))),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationError::new(ValidationErrorKind::WrongType {
            field: field.to_string(),
            expected: "a string".to_string(),
        })),
    }
}

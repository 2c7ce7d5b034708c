//! Output schema descriptors and the conformance check behind them.
//!
//! Descriptors are plain JSON Schema subsets (`type`, `properties`,
//! `required`, `items`, `description`). The same value is sent to the
//! generation service and used here to check its answer, so what the model
//! is told and what is enforced cannot drift apart.

use pathshala_core::{Language, LessonContentBundle};
use pathshala_error::{SchemaError, SchemaErrorKind};
use serde_json::{Map, Value, json};

fn text(description: impl Into<String>) -> Value {
    json!({ "type": "string", "description": description.into() })
}

/// Descriptor for [`LessonContentBundle`].
///
/// Primary content is always required. For question-paper requests the
/// question paper and answer key of every language are required as well;
/// otherwise every suffixed section is optional and may be an empty string.
pub fn lesson_bundle_schema(is_question_paper: bool) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for lang in Language::ALL {
        let field = lang.content_field();
        let description = if is_question_paper {
            format!("Brief introduction or summary of the question paper, in {} only.", lang)
        } else {
            format!("The full lesson content, in {} only.", lang)
        };
        properties.insert(field.clone(), text(description));
        required.push(Value::String(field));
    }

    for section in LessonContentBundle::OPTIONAL_SECTIONS {
        for lang in Language::ALL {
            let field = lang.suffixed(section);
            let description = match section {
                "questionPaper" if is_question_paper => {
                    format!("The complete printable question paper, in {} only.", lang)
                }
                "answerKey" if is_question_paper => format!(
                    "Detailed answer key matching the question paper numbering, in {} only.",
                    lang
                ),
                "questionPaper" | "answerKey" => {
                    "Empty string: this request is not a question paper.".to_string()
                }
                "repeatedQuestions" => format!(
                    "At least ten frequently repeated exam questions for the teacher, in {} only.",
                    lang
                ),
                _ => format!(
                    "Detailed answers to the repeated questions, numbered to match, in {} only.",
                    lang
                ),
            };
            if is_question_paper && matches!(section, "questionPaper" | "answerKey") {
                required.push(Value::String(field.clone()));
            }
            properties.insert(field, text(description));
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Descriptor for a slide deck: `{"slides": [{title, content, speakerNotes}]}`.
pub fn slide_deck_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "slides": {
                "type": "array",
                "description": "The slides in presentation order, title slide first.",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": text("Short slide title."),
                        "content": text("Slide body as markdown bullet points."),
                        "speakerNotes": text("Notes the presenter reads aloud."),
                    },
                    "required": ["title", "content", "speakerNotes"]
                }
            }
        },
        "required": ["slides"]
    })
}

/// Descriptor for adapted lesson content.
pub fn adapted_content_schema() -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for lang in Language::ALL {
        let field = format!("adaptedContent{}", lang);
        properties.insert(
            field.clone(),
            text(format!("The adapted lesson content, in {} only.", lang)),
        );
        required.push(Value::String(field));
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Check `value` against a descriptor.
///
/// Reports the first violation with its path, e.g. `$.slides[2].title`.
/// Properties that are not required may be absent or `null`; properties the
/// descriptor does not mention are ignored.
///
/// # Errors
///
/// Returns `MissingField` or `WrongType` naming the offending path.
pub fn check_conformance(schema: &Value, value: &Value) -> Result<(), SchemaError> {
    check_at(schema, value, "$")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_matches(expected: &str, value: &Value) -> bool {
    match expected {
        "number" => value.is_number(),
        other => type_name(value) == other,
    }
}

#[track_caller]
fn wrong_type(path: &str, expected: &str, value: &Value) -> SchemaError {
    SchemaError::new(SchemaErrorKind::WrongType {
        path: path.to_string(),
        expected: expected.to_string(),
        found: type_name(value).to_string(),
    })
}

fn check_at(schema: &Value, value: &Value, path: &str) -> Result<(), SchemaError> {
    if let Some(expected) = schema.get("type").and_then(Value::as_str) {
        if !type_matches(expected, value) {
            return Err(wrong_type(path, expected, value));
        }
    }

    if let Some(object) = value.as_object() {
        let required = schema
            .get("required")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for key in required.iter().filter_map(Value::as_str) {
            if !object.contains_key(key) {
                return Err(SchemaError::new(SchemaErrorKind::MissingField(format!(
                    "{}.{}",
                    path, key
                ))));
            }
        }

        if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
            for (key, sub_schema) in properties {
                let Some(sub_value) = object.get(key) else {
                    continue;
                };
                let is_required = required.iter().any(|r| r.as_str() == Some(key.as_str()));
                if sub_value.is_null() && !is_required {
                    continue;
                }
                check_at(sub_schema, sub_value, &format!("{}.{}", path, key))?;
            }
        }
    }

    if let (Some(items), Some(array)) = (schema.get("items"), value.as_array()) {
        for (i, item) in array.iter().enumerate() {
            check_at(items, item, &format!("{}[{}]", path, i))?;
        }
    }

    Ok(())
}

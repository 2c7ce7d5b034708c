//! Recovering a JSON document from a model response.
//!
//! JSON-mode answers are usually clean, but answers produced alongside tool
//! calls often arrive wrapped in markdown fences or surrounded by prose.

use pathshala_error::{SchemaError, SchemaErrorKind};
use serde_json::Value;

/// Extract the first JSON object or array from a response.
///
/// Candidates are tried in order and the first that parses wins:
/// 1. The whole response
/// 2. A ```` ```json ```` fenced block, then any fenced block
/// 3. Balanced braces `{ ... }` or brackets `[ ... ]`, whichever opens first
///
/// Trying the whole response first matters because lesson text routinely
/// contains fenced code inside JSON string values.
///
/// # Errors
///
/// Returns `SchemaErrorKind::NotJson` if no candidate parses.
///
/// # Examples
///
/// ```
/// use pathshala_lesson::extract_json;
///
/// let response = "Here is the lesson:\n```json\n{\"englishContent\": \"...\"}\n```\n";
/// let value = extract_json(response).unwrap();
/// assert!(value.get("englishContent").is_some());
/// ```
pub fn extract_json(response: &str) -> Result<Value, SchemaError> {
    let trimmed = response.trim();
    if let Some(value) = parse_structured(trimmed) {
        return Ok(value);
    }

    let fenced = [
        extract_from_code_block(response, "json"),
        extract_from_code_block(response, ""),
    ];
    if let Some(value) = fenced.iter().flatten().find_map(|c| parse_structured(c)) {
        return Ok(value);
    }

    let bracket_pos = response.find('[');
    let brace_pos = response.find('{');
    let order = match (bracket_pos, brace_pos) {
        (Some(b), Some(c)) if b < c => [('[', ']'), ('{', '}')],
        _ => [('{', '}'), ('[', ']')],
    };
    for (open, close) in order {
        if let Some(value) = extract_balanced(response, open, close)
            .as_deref()
            .and_then(parse_structured)
        {
            return Ok(value);
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in model response"
    );

    let preview: String = trimmed.chars().take(80).collect();
    Err(SchemaError::new(SchemaErrorKind::NotJson(format!(
        "no JSON object in {} bytes (starts with {:?})",
        response.len(),
        preview
    ))))
}

fn parse_structured(candidate: &str) -> Option<Value> {
    serde_json::from_str::<Value>(candidate)
        .ok()
        .filter(|value| value.is_object() || value.is_array())
}

/// Content of the first fenced block tagged with `language`.
///
/// An empty `language` matches any fence. A missing closing fence (a
/// truncated response) yields everything after the opening line.
fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    let pattern = format!("```{}", language);
    let start = response.find(&pattern)?;
    let after_tag = start + pattern.len();
    let content_start = response[after_tag..]
        .find('\n')
        .map(|n| after_tag + n + 1)
        .unwrap_or(after_tag);

    match response[content_start..].find("```") {
        Some(end) => Some(response[content_start..content_start + end].trim().to_string()),
        None => Some(response[content_start..].trim().to_string()),
    }
}

/// Content between balanced delimiters, skipping delimiters inside strings.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_code_block() {
        let response = r#"
Here's the JSON you requested:

```json
{
  "id": 123,
  "name": "Test"
}
```

Hope this helps!
"#;
        let value = extract_json(response).unwrap();
        assert_eq!(value["id"], 123);
    }

    #[test]
    fn whole_response_wins_over_inner_fences() {
        let response = r#"{"englishContent": "Example:\n```json\n{\"x\": 1}\n```"}"#;
        let value = extract_json(response).unwrap();
        assert!(value.get("englishContent").is_some());
    }

    #[test]
    fn extracts_balanced_braces_from_prose() {
        let response = r#"Sure! Here it is: {"id": 456, "nested": {"value": "a } b"}} Thanks."#;
        let value = extract_json(response).unwrap();
        assert_eq!(value["nested"]["value"], "a } b");
    }

    #[test]
    fn extracts_array() {
        let response = "Items:\n[\n  {\"id\": 1},\n  {\"id\": 2}\n]\n";
        let value = extract_json(response).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn handles_escaped_quotes() {
        let response = r#"prefix {"text": "She said \"hello\""} suffix"#;
        let value = extract_json(response).unwrap();
        assert_eq!(value["text"], "She said \"hello\"");
    }

    #[test]
    fn plain_text_is_not_json() {
        let err = extract_json("This is just plain text with no JSON").unwrap_err();
        assert!(matches!(err.kind, SchemaErrorKind::NotJson(_)));
    }

    #[test]
    fn bare_scalars_are_rejected() {
        assert!(extract_json("42").is_err());
    }
}

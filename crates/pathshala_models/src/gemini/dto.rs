//! Gemini `generateContent` REST wire types.

use derive_getters::Getters;
use pathshala_interface::ToolDefinition;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation so far, oldest first
    contents: Vec<Content>,
    /// Functions the model may call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
    /// Sampling and output format settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GeminiRequest {
    /// Assemble a request.
    pub fn new(
        contents: Vec<Content>,
        tools: Option<Vec<Tool>>,
        generation_config: Option<GenerationConfig>,
    ) -> Self {
        Self {
            contents,
            tools,
            generation_config,
        }
    }

    /// Append a turn to the conversation.
    pub fn push(&mut self, content: Content) {
        self.contents.push(content);
    }
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Content {
    /// `user` or `model`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Turn contents
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    /// A user turn holding plain text.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
        }
    }

    /// A model turn.
    pub fn model(parts: Vec<Part>) -> Self {
        Self {
            role: Some("model".to_string()),
            parts,
        }
    }

    /// A user turn answering function calls.
    pub fn function_responses(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    /// Text of every text part, concatenated.
    pub fn joined_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Function calls in this turn, in order.
    pub fn function_calls(&self) -> Vec<&FunctionCall> {
        self.parts
            .iter()
            .filter_map(|part| part.function_call.as_ref())
            .collect()
    }
}

/// A piece of a turn: text, a function call or a function response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    function_call: Option<FunctionCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    function_response: Option<FunctionResponse>,
}

impl Part {
    /// A text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// A function call part.
    pub fn function_call(name: impl Into<String>, args: Value) -> Self {
        Self {
            function_call: Some(FunctionCall {
                name: name.into(),
                args,
            }),
            ..Default::default()
        }
    }

    /// A function response part.
    pub fn function_response(name: impl Into<String>, response: Value) -> Self {
        Self {
            function_response: Some(FunctionResponse {
                name: name.into(),
                response,
            }),
            ..Default::default()
        }
    }
}

/// A function call requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct FunctionCall {
    /// Declared function name
    name: String,
    /// Call arguments
    #[serde(default)]
    args: Value,
}

/// The result of a function call, sent back to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct FunctionResponse {
    /// Function name the response answers
    name: String,
    /// Result payload
    response: Value,
}

/// A group of function declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    function_declarations: Vec<FunctionDeclaration>,
}

impl From<ToolDefinition> for Tool {
    fn from(def: ToolDefinition) -> Self {
        Self {
            function_declarations: vec![FunctionDeclaration {
                name: def.name,
                description: def.description,
                parameters: to_gemini_schema(&def.parameters),
            }],
        }
    }
}

/// A callable function as Gemini expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct FunctionDeclaration {
    name: String,
    description: String,
    parameters: Value,
}

/// Sampling and output format settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

impl GenerationConfig {
    /// Sampling settings without a structured output constraint.
    pub fn sampling(temperature: Option<f32>, max_output_tokens: Option<u32>) -> Self {
        Self {
            temperature,
            max_output_tokens,
            ..Default::default()
        }
    }

    /// Constrain output to JSON matching `schema`.
    pub fn with_json_schema(mut self, schema: &Value) -> Self {
        self.response_mime_type = Some("application/json".to_string());
        self.response_schema = Some(to_gemini_schema(schema));
        self
    }
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

impl GeminiResponse {
    /// A response with one candidate turn.
    pub fn from_content(content: Content) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(content),
                finish_reason: Some("STOP".to_string()),
            }],
            ..Default::default()
        }
    }
}

/// One candidate answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Why the prompt itself was refused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Token accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    candidates_token_count: Option<u32>,
    #[serde(default)]
    total_token_count: Option<u32>,
}

/// Rewrite a JSON Schema descriptor into Gemini's OpenAPI subset.
///
/// Type names are upper-cased and keywords Gemini rejects
/// (`$schema`, `additionalProperties`, `title`) are dropped.
pub fn to_gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => {
            let mut out = serde_json::Map::new();
            for (key, value) in map {
                match key.as_str() {
                    "$schema" | "additionalProperties" | "title" => {}
                    "type" => {
                        let upper = value
                            .as_str()
                            .map(|t| Value::String(t.to_uppercase()))
                            .unwrap_or_else(|| value.clone());
                        out.insert(key.clone(), upper);
                    }
                    "properties" => {
                        let props = value
                            .as_object()
                            .map(|props| {
                                props
                                    .iter()
                                    .map(|(name, sub)| (name.clone(), to_gemini_schema(sub)))
                                    .collect()
                            })
                            .unwrap_or_default();
                        out.insert(key.clone(), Value::Object(props));
                    }
                    _ => {
                        out.insert(key.clone(), to_gemini_schema(value));
                    }
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(to_gemini_schema).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_types_are_upper_cased() {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "slides": {"type": "array", "items": {"type": "string"}},
                "type": {"type": "string"}
            },
            "required": ["slides"]
        });
        let converted = to_gemini_schema(&schema);
        assert_eq!(
            converted,
            json!({
                "type": "OBJECT",
                "properties": {
                    "slides": {"type": "ARRAY", "items": {"type": "STRING"}},
                    "type": {"type": "STRING"}
                },
                "required": ["slides"]
            })
        );
    }

    #[test]
    fn request_serializes_camel_case() {
        let request = GeminiRequest::new(
            vec![Content::user_text("hi")],
            None,
            Some(
                GenerationConfig::sampling(Some(0.5), Some(100))
                    .with_json_schema(&json!({"type": "object"})),
            ),
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 100);
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert!(value.get("tools").is_none());
    }

    #[test]
    fn response_parses_function_call() {
        let body = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"functionCall": {"name": "searchWeb", "args": {"query": "Kuvempu"}}}]
                },
                "finishReason": "STOP"
            }]
        });
        let response: GeminiResponse = serde_json::from_value(body).unwrap();
        let content = response.candidates()[0].content().as_ref().unwrap();
        let calls = content.function_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name(), "searchWeb");
        assert_eq!(calls[0].args()["query"], "Kuvempu");
    }
}

//! Provider-neutral generation request and response types.

use serde::{Deserialize, Serialize};

/// One structured-output generation call.
///
/// # Examples
///
/// ```
/// use pathshala_core::GenerateRequestBuilder;
/// use serde_json::json;
///
/// let request = GenerateRequestBuilder::default()
///     .instruction("Describe photosynthesis as JSON.")
///     .response_schema(json!({"type": "object"}))
///     .web_search(true)
///     .build()
///     .unwrap();
///
/// assert!(request.web_search());
/// assert_eq!(*request.temperature(), None);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Full natural-language instruction document
    instruction: String,
    /// Output schema descriptor the answer must satisfy
    #[builder(default, setter(into, strip_option))]
    response_schema: Option<serde_json::Value>,
    /// Offer the web-search capability to the model
    #[builder(default)]
    #[getter(skip)]
    web_search: bool,
    /// Sampling temperature
    #[builder(default, setter(into, strip_option))]
    temperature: Option<f32>,
    /// Output token ceiling
    #[builder(default, setter(into, strip_option))]
    max_output_tokens: Option<u32>,
    /// Model override for this call
    #[builder(default, setter(into, strip_option))]
    model: Option<String>,
}

impl GenerateRequest {
    /// Whether the web-search capability should be offered.
    pub fn web_search(&self) -> bool {
        self.web_search
    }
}

/// What the service answered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Free text, possibly wrapping a JSON document
    Text(String),
    /// Structured JSON output
    Json(serde_json::Value),
}

/// The result of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_new::new)]
pub struct GenerateResponse {
    /// Final model output after any tool rounds
    output: Output,
    /// Number of tool calls the model made along the way
    tool_calls: usize,
}

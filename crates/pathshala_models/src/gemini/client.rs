//! Gemini REST driver with an optional web-search tool loop.

use super::dto::{Content, GeminiRequest, GeminiResponse, GenerationConfig, Part, Tool};
use async_trait::async_trait;
use pathshala_config::ModelConfig;
use pathshala_core::{GenerateRequest, GenerateResponse, Output};
use pathshala_error::{
    GenerationError, GenerationErrorKind, HttpError, HttpErrorKind, PathshalaResult,
};
use pathshala_interface::{GenerationDriver, SEARCH_WEB_TOOL, WebSearch, search_web_tool};
use reqwest::Client;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Sends one `generateContent` call.
///
/// The HTTP implementation is the only one used outside tests; the seam lets
/// the tool loop be exercised against scripted responses.
#[async_trait]
pub(crate) trait GeminiTransport: Send + Sync + std::fmt::Debug {
    async fn send(&self, model: &str, request: &GeminiRequest) -> PathshalaResult<GeminiResponse>;
}

#[derive(Debug, Clone)]
struct HttpTransport {
    client: Client,
    api_key: String,
    base_url: String,
}

#[async_trait]
impl GeminiTransport for HttpTransport {
    #[instrument(skip(self, request), fields(turns = request.contents().len()))]
    async fn send(&self, model: &str, request: &GeminiRequest) -> PathshalaResult<GeminiResponse> {
        let url = format!("{}/{}:generateContent", self.base_url, model);
        debug!(url = %url, "Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                GenerationError::new(GenerationErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API returned error");
            return Err(GenerationError::new(GenerationErrorKind::Http {
                status_code: status.as_u16(),
                message: body,
            })
            .into());
        }

        response.json::<GeminiResponse>().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            GenerationError::new(GenerationErrorKind::Transport(format!(
                "Failed to parse response: {}",
                e
            )))
            .into()
        })
    }
}

/// Gemini driver.
///
/// Structured output uses Gemini's JSON mode when no tool is offered. JSON
/// mode and function calling cannot be combined, so when the web-search
/// capability is offered the schema travels inside the instruction instead
/// and the final answer comes back as text.
#[derive(Clone)]
pub struct GeminiClient {
    transport: Arc<dyn GeminiTransport>,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
    max_tool_rounds: usize,
    search: Option<Arc<dyn WebSearch>>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("max_tool_rounds", &self.max_tool_rounds)
            .field("web_search", &self.search.is_some())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a client from configuration, reading the API key from the
    /// environment variable named by `api_key_env`.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when the variable is unset or blank.
    #[instrument(skip(config), fields(model = %config.name()))]
    pub fn new(config: &ModelConfig) -> PathshalaResult<Self> {
        let api_key = std::env::var(config.api_key_env())
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GenerationError::new(GenerationErrorKind::MissingApiKey(
                    config.api_key_env().clone(),
                ))
            })?;
        Self::with_api_key(api_key, config)
    }

    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an `HttpError` if the HTTP client cannot be built.
    #[instrument(skip(api_key, config), fields(model = %config.name()))]
    pub fn with_api_key(api_key: impl Into<String>, config: &ModelConfig) -> PathshalaResult<Self> {
        let mut builder = Client::builder();
        if *config.timeout_secs() > 0 {
            builder = builder.timeout(Duration::from_secs(*config.timeout_secs()));
        }
        let client = builder
            .build()
            .map_err(|e| HttpError::new("gemini", HttpErrorKind::ClientSetup(e.to_string())))?;

        debug!("Created Gemini client");

        let transport = HttpTransport {
            client,
            api_key: api_key.into(),
            base_url: config.base_url().trim_end_matches('/').to_string(),
        };
        Ok(Self::from_transport(Arc::new(transport), config))
    }

    pub(crate) fn from_transport(
        transport: Arc<dyn GeminiTransport>,
        config: &ModelConfig,
    ) -> Self {
        Self {
            transport,
            model: config.name().clone(),
            temperature: *config.temperature(),
            max_output_tokens: *config.max_output_tokens(),
            max_tool_rounds: *config.max_tool_rounds(),
            search: None,
        }
    }

    /// Offer a web-search capability to the model on requests that ask for it.
    pub fn with_web_search(mut self, search: Arc<dyn WebSearch>) -> Self {
        self.search = Some(search);
        self
    }

    /// True when a web-search capability is installed.
    pub fn has_web_search(&self) -> bool {
        self.search.is_some()
    }

    fn build_request(&self, req: &GenerateRequest, with_tools: bool) -> GeminiRequest {
        let sampling = GenerationConfig::sampling(
            Some(req.temperature().unwrap_or(self.temperature)),
            Some(req.max_output_tokens().unwrap_or(self.max_output_tokens)),
        );

        let (instruction, generation_config, tools) = match (req.response_schema(), with_tools) {
            (Some(schema), false) => (
                req.instruction().clone(),
                sampling.with_json_schema(schema),
                None,
            ),
            (Some(schema), true) => (
                format!(
                    "{}\n\nRespond with a single JSON object and nothing else. \
                     It must conform to this JSON Schema:\n{}",
                    req.instruction(),
                    serde_json::to_string_pretty(schema).unwrap_or_else(|_| schema.to_string())
                ),
                sampling,
                Some(vec![Tool::from(search_web_tool())]),
            ),
            (None, true) => (
                req.instruction().clone(),
                sampling,
                Some(vec![Tool::from(search_web_tool())]),
            ),
            (None, false) => (req.instruction().clone(), sampling, None),
        };

        GeminiRequest::new(
            vec![Content::user_text(instruction)],
            tools,
            Some(generation_config),
        )
    }

    /// Answer every function call in a model turn.
    async fn answer_calls(&self, turn: &Content) -> PathshalaResult<Vec<Part>> {
        let mut parts = Vec::new();
        for call in turn.function_calls() {
            if call.name() != SEARCH_WEB_TOOL {
                warn!(tool = %call.name(), "Model requested an undeclared tool");
                return Err(
                    GenerationError::new(GenerationErrorKind::UnknownTool(call.name().clone()))
                        .into(),
                );
            }
            let search = self.search.as_ref().ok_or_else(|| {
                GenerationError::new(GenerationErrorKind::UnknownTool(call.name().clone()))
            })?;
            let query = call.args().get("query").and_then(Value::as_str).ok_or_else(|| {
                GenerationError::new(GenerationErrorKind::Tool {
                    tool: SEARCH_WEB_TOOL.to_string(),
                    message: "missing string argument 'query'".to_string(),
                })
            })?;

            debug!(query, "Answering searchWeb call");
            let result = search.search(query).await.map_err(|e| {
                GenerationError::new(GenerationErrorKind::Tool {
                    tool: SEARCH_WEB_TOOL.to_string(),
                    message: e.to_string(),
                })
            })?;
            parts.push(Part::function_response(
                SEARCH_WEB_TOOL,
                json!({ "result": result }),
            ));
        }
        Ok(parts)
    }
}

/// First candidate turn of a response, or the reason there is none.
fn first_turn(response: &GeminiResponse) -> Result<Content, GenerationError> {
    if let Some(reason) = response
        .prompt_feedback()
        .as_ref()
        .and_then(|feedback| feedback.block_reason().clone())
    {
        return Err(GenerationError::new(GenerationErrorKind::Blocked(reason)));
    }

    let candidate = response
        .candidates()
        .first()
        .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))?;

    match candidate.content() {
        Some(content) if !content.parts().is_empty() => Ok(content.clone()),
        _ => match candidate.finish_reason().as_deref() {
            Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => Err(
                GenerationError::new(GenerationErrorKind::Blocked(reason.to_string())),
            ),
            _ => Err(GenerationError::new(GenerationErrorKind::EmptyResponse)),
        },
    }
}

fn to_output(text: String) -> Output {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(value) if value.is_object() || value.is_array() => Output::Json(value),
        _ => Output::Text(text),
    }
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    #[instrument(
        skip(self, req),
        fields(
            model = %req.model().as_deref().unwrap_or(&self.model),
            instruction_len = req.instruction().len(),
            web_search = req.web_search()
        )
    )]
    async fn generate(&self, req: &GenerateRequest) -> PathshalaResult<GenerateResponse> {
        let model = req.model().clone().unwrap_or_else(|| self.model.clone());
        let with_tools = req.web_search() && self.search.is_some();
        let mut request = self.build_request(req, with_tools);
        let mut tool_calls = 0usize;

        for round in 0..=self.max_tool_rounds {
            let response = self.transport.send(&model, &request).await?;
            if let Some(usage) = response.usage_metadata() {
                debug!(
                    prompt_tokens = ?usage.prompt_token_count(),
                    output_tokens = ?usage.candidates_token_count(),
                    round,
                    "Gemini usage"
                );
            }

            let turn = first_turn(&response)?;
            if turn.function_calls().is_empty() {
                let text = turn.joined_text();
                if text.trim().is_empty() {
                    return Err(GenerationError::new(GenerationErrorKind::EmptyResponse).into());
                }
                info!(rounds = round + 1, tool_calls, "Generation complete");
                return Ok(GenerateResponse::new(to_output(text), tool_calls));
            }

            if !with_tools {
                warn!("Model called a tool that was not offered");
                let name = turn
                    .function_calls()
                    .first()
                    .map(|call| call.name().clone())
                    .unwrap_or_default();
                return Err(GenerationError::new(GenerationErrorKind::UnknownTool(name)).into());
            }
            if round == self.max_tool_rounds {
                break;
            }

            tool_calls += turn.function_calls().len();
            let answers = self.answer_calls(&turn).await?;
            request.push(turn);
            request.push(Content::function_responses(answers));
        }

        error!(max_rounds = self.max_tool_rounds, "Tool loop did not converge");
        Err(GenerationError::new(GenerationErrorKind::ToolLoop(self.max_tool_rounds)).into())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

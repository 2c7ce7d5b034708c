//! Google Gemini REST client.
//!
//! [`GeminiClient`] implements `GenerationDriver` over the `generateContent`
//! endpoint. It supports structured JSON output and, when a `WebSearch`
//! capability is installed, a bounded function-calling loop for `searchWeb`.

mod client;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Candidate, Content, FunctionCall, FunctionDeclaration, FunctionResponse, GeminiRequest,
    GeminiResponse, GenerationConfig, Part, PromptFeedback, Tool, UsageMetadata,
    to_gemini_schema,
};

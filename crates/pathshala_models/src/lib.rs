//! Generation service and web-search integrations for Pathshala.
//!
//! # Example
//!
//! ```no_run
//! use pathshala_config::PathshalaConfig;
//! use pathshala_core::GenerateRequestBuilder;
//! use pathshala_interface::GenerationDriver;
//! use pathshala_models::{GeminiClient, PlaceholderSearch};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PathshalaConfig::load()?;
//! let client = GeminiClient::new(config.model())?.with_web_search(Arc::new(PlaceholderSearch));
//! let request = GenerateRequestBuilder::default()
//!     .instruction("Summarise photosynthesis for Grade 6 as JSON.")
//!     .web_search(true)
//!     .build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod search;

pub use gemini::{
    Candidate, Content, FunctionCall, FunctionDeclaration, FunctionResponse, GeminiClient,
    GeminiRequest, GeminiResponse, GenerationConfig, Part, PromptFeedback, Tool, UsageMetadata,
    to_gemini_schema,
};
pub use search::{CustomSearchClient, PlaceholderSearch, search_from_config};

//! Offline stand-in for web search.

use async_trait::async_trait;
use pathshala_error::PathshalaResult;
use pathshala_interface::WebSearch;
use tracing::debug;

/// Returns a fixed briefing built from the query.
///
/// The text nudges the model to answer from its own knowledge, which keeps
/// the tool loop working without any search credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSearch;

#[async_trait]
impl WebSearch for PlaceholderSearch {
    async fn search(&self, query: &str) -> PathshalaResult<String> {
        debug!(query, "Placeholder search");
        Ok(format!(
            "You are an expert on {}. Provide a detailed, accurate, and up-to-date explanation. \
             Please include key concepts, important facts, and a brief overview of the topic. \
             Ensure the information is suitable for the specified grade level.",
            query
        ))
    }
}

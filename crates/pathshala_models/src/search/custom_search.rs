//! Google Programmable Search client.

use async_trait::async_trait;
use pathshala_config::SearchConfig;
use pathshala_error::{ConfigError, ConfigErrorKind, HttpError, HttpErrorKind, PathshalaResult};
use pathshala_interface::WebSearch;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument};

const SERVICE: &str = "custom_search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}

/// Web search over the Custom Search JSON API.
#[derive(Debug, Clone)]
pub struct CustomSearchClient {
    client: Client,
    api_key: String,
    engine_id: String,
    base_url: String,
    max_results: u32,
}

impl CustomSearchClient {
    /// Creates a client, reading the API key from the configured variable.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the key or engine id is missing.
    pub fn new(config: &SearchConfig) -> PathshalaResult<Self> {
        let api_key = std::env::var(config.api_key_env())
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::new(ConfigErrorKind::MissingSecret(config.api_key_env().clone()))
            })?;
        let engine_id = config
            .engine_id()
            .clone()
            .ok_or_else(|| {
                ConfigError::invalid("search.engine_id", "is required for custom_search")
            })?;

        Ok(Self {
            client: Client::new(),
            api_key,
            engine_id,
            base_url: config.base_url().clone(),
            // The API serves at most 10 results per page
            max_results: (*config.max_results()).clamp(1, 10),
        })
    }
}

/// Fold search hits into numbered plain text.
fn render_items(query: &str, items: &[SearchItem]) -> String {
    if items.is_empty() {
        return format!("No web results found for \"{}\".", query);
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "{}. {}\n   {}\n   {}",
                i + 1,
                item.title,
                item.snippet,
                item.link
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl WebSearch for CustomSearchClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> PathshalaResult<String> {
        let num = self.max_results.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Search request failed");
                HttpError::new(SERVICE, HttpErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Search API returned error");
            let kind = HttpErrorKind::Status {
                status: status.as_u16(),
                body,
            };
            return Err(HttpError::new(SERVICE, kind).into());
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| HttpError::new(SERVICE, HttpErrorKind::Body(e.to_string())))?;
        debug!(hits = body.items.len(), "Search complete");
        Ok(render_items(query, &body.items))
    }
}

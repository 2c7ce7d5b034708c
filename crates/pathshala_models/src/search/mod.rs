//! Web-search capabilities offered to the model.

mod custom_search;
mod placeholder;

pub use custom_search::CustomSearchClient;
pub use placeholder::PlaceholderSearch;

use pathshala_config::{SearchConfig, SearchMode};
use pathshala_error::PathshalaResult;
use pathshala_interface::WebSearch;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Build the capability selected by configuration.
///
/// Returns `None` when search is disabled.
///
/// # Errors
///
/// Fails when `custom_search` is selected but its API key or engine id is
/// missing.
#[instrument(skip(config), fields(mode = ?config.mode()))]
pub fn search_from_config(config: &SearchConfig) -> PathshalaResult<Option<Arc<dyn WebSearch>>> {
    let search: Option<Arc<dyn WebSearch>> = match config.mode() {
        SearchMode::Disabled => None,
        SearchMode::Placeholder => Some(Arc::new(PlaceholderSearch)),
        SearchMode::CustomSearch => Some(Arc::new(CustomSearchClient::new(config)?)),
    };
    debug!(enabled = search.is_some(), "Configured web search");
    Ok(search)
}

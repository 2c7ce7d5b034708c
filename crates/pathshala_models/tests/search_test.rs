//! Web-search capability tests (no network).

use pathshala_config::PathshalaConfig;
use pathshala_interface::WebSearch;
use pathshala_models::{PlaceholderSearch, search_from_config};

#[tokio::test]
async fn placeholder_mentions_query() -> anyhow::Result<()> {
    let text = PlaceholderSearch.search("Kuvempu").await?;
    assert!(text.starts_with("You are an expert on Kuvempu."));
    assert!(text.contains("grade level"));
    Ok(())
}

#[tokio::test]
async fn default_config_installs_placeholder() -> anyhow::Result<()> {
    let config = PathshalaConfig::defaults()?;
    let search = search_from_config(config.search())?.expect("search enabled by default");
    let text = search.search("photosynthesis").await?;
    assert!(text.contains("photosynthesis"));
    Ok(())
}

#[cfg(feature = "api")]
#[tokio::test]
async fn live_gemini_round_trip() -> anyhow::Result<()> {
    use pathshala_core::GenerateRequestBuilder;
    use pathshala_interface::GenerationDriver;
    use pathshala_models::GeminiClient;
    use serde_json::json;
    use std::sync::Arc;

    dotenvy::dotenv().ok();
    let config = PathshalaConfig::defaults()?;
    let client = GeminiClient::new(config.model())?.with_web_search(Arc::new(PlaceholderSearch));
    let request = GenerateRequestBuilder::default()
        .instruction("Return a JSON object with a single field `answer` holding the word yes.")
        .response_schema(json!({
            "type": "object",
            "properties": {"answer": {"type": "string"}},
            "required": ["answer"]
        }))
        .build()?;
    let response = client.generate(&request).await?;
    println!("{:?}", response.output());
    Ok(())
}

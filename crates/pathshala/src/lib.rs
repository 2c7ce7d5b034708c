//! Pathshala - multilingual lesson generation for classroom teachers.
//!
//! Pathshala turns a topic, a grade and a set of teaching methods into lesson
//! content in English, Kannada and Urdu, using a hosted language model with
//! optional web search. It can also produce board-exam question papers,
//! adapt saved lessons to new methods and split a lesson into slides.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pathshala::{GeminiClient, LessonPipeline, PathshalaConfig, validate_request};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PathshalaConfig::load()?;
//!     let pipeline = LessonPipeline::new(GeminiClient::new(config.model())?);
//!
//!     let bundle = pipeline
//!         .run_candidate(&json!({
//!             "topic": "Photosynthesis",
//!             "gradeLevel": "Grade 6",
//!             "teachingMethods": ["Story"]
//!         }))
//!         .await?;
//!     println!("{}", bundle.english_content());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `pathshala_error` - Error types
//! - `pathshala_core` - Request, bundle, slide and record types
//! - `pathshala_interface` - Driver, web-search and repository traits
//! - `pathshala_config` - Layered configuration
//! - `pathshala_lesson` - Validators, prompt assembly and pipelines
//! - `pathshala_models` - Gemini driver and web-search backends
//! - `pathshala_storage` - Saved lesson repositories
//!
//! This crate re-exports everything for convenience.

pub use pathshala_config::*;
pub use pathshala_core::*;
pub use pathshala_error::*;
pub use pathshala_interface::*;
pub use pathshala_lesson::*;
pub use pathshala_models::{
    CustomSearchClient, GeminiClient, PlaceholderSearch, search_from_config,
};
pub use pathshala_storage::{InMemoryLessonRepository, JsonFileLessonRepository};

mod logging;

pub use logging::{LoggingConfig, init_logging};

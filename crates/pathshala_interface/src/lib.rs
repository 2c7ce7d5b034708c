//! Trait definitions for the Pathshala lesson generation pipeline.
//!
//! Three seams keep the pipelines testable without a network:
//! - [`GenerationDriver`] is the external language model
//! - [`WebSearch`] is the capability a driver may offer to that model
//! - [`LessonRepository`] is where saved lessons live

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{GenerationDriver, LessonRepository, WebSearch};
pub use types::{SEARCH_WEB_TOOL, ToolDefinition, search_web_tool};

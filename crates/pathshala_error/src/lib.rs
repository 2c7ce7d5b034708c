//! Error types for the Pathshala workspace.
//!
//! Every concern gets the same two-part shape:
//! - a `*ErrorKind` enum naming the specific condition
//! - a `*Error` struct wrapping the kind with the source location
//!
//! Locations are captured with `#[track_caller]`, so constructing an error
//! inside a helper reports the helper's caller.
//!
//! # Examples
//!
//! ```
//! use pathshala_error::{PathshalaResult, ValidationError, ValidationErrorKind};
//!
//! fn check_topic(topic: &str) -> PathshalaResult<()> {
//!     if topic.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::MissingField("topic".into())))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_topic("").is_err());
//! assert!(check_topic("Photosynthesis").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod generation;
mod http;
mod json;
mod schema;
mod storage;
mod validation;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{PathshalaError, PathshalaErrorKind, PathshalaResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use http::{HttpError, HttpErrorKind};
pub use json::{JsonError, JsonErrorKind};
pub use schema::{SchemaError, SchemaErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

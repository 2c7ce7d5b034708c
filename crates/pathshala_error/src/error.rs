//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, GenerationError, HttpError, JsonError, SchemaError, StorageError,
    ValidationError,
};

/// Every error the workspace can produce.
///
/// # Examples
///
/// ```
/// use pathshala_error::{HttpError, HttpErrorKind, PathshalaError};
///
/// let http_err = HttpError::new("gemini", HttpErrorKind::Request("Connection failed".into()));
/// let err: PathshalaError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PathshalaErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Lesson request rejected before any external call
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Generation service or transport failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Model output did not match its schema
    #[from(SchemaError)]
    Schema(SchemaError),
    /// Saved lesson repository failure
    #[from(StorageError)]
    Storage(StorageError),
}

/// Pathshala error with kind discrimination.
///
/// # Examples
///
/// ```
/// use pathshala_error::{ConfigError, PathshalaResult};
///
/// fn might_fail() -> PathshalaResult<()> {
///     Err(ConfigError::invalid("storage.collection", "must not be empty"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Pathshala Error: {}", _0)]
pub struct PathshalaError(Box<PathshalaErrorKind>);

impl PathshalaError {
    /// Create a new error from a kind.
    pub fn new(kind: PathshalaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PathshalaErrorKind {
        &self.0
    }

    /// True when the request never left the process.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), PathshalaErrorKind::Validation(_))
    }

    /// True when the model answered but the answer was rejected.
    pub fn is_schema(&self) -> bool {
        matches!(self.kind(), PathshalaErrorKind::Schema(_))
    }
}

// Generic From implementation for any type that converts to PathshalaErrorKind
impl<T> From<T> for PathshalaError
where
    T: Into<PathshalaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Pathshala operations.
pub type PathshalaResult<T> = std::result::Result<T, PathshalaError>;

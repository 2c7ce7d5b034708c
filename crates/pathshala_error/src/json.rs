//! Lesson documents that could not be read or written as JSON.

/// What went wrong with a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum JsonErrorKind {
    /// A file given as a lesson bundle did not decode as one
    #[display("{} is not a lesson bundle: {}", path, reason)]
    BundleFile {
        /// The file that was read
        path: String,
        /// Decoder message
        reason: String,
    },
    /// A result could not be printed as JSON
    #[display("Failed to encode output: {}", _0)]
    Encode(String),
}

/// JSON document failure with source location.
///
/// # Examples
///
/// ```
/// use pathshala_error::{JsonError, JsonErrorKind};
///
/// let err = JsonError::new(JsonErrorKind::BundleFile {
///     path: "lesson.json".to_string(),
///     reason: "missing field `urduContent`".to_string(),
/// });
/// assert!(err.to_string().contains("lesson.json is not a lesson bundle"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", kind, line, file)]
pub struct JsonError {
    /// The kind of error that occurred
    pub kind: JsonErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError at the current location.
    #[track_caller]
    pub fn new(kind: JsonErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

//! Generation service errors.

/// Failures talking to the external generation service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// API key not found in the configured environment variable
    #[display("API key environment variable {} not set", _0)]
    MissingApiKey(String),
    /// Request could not be sent or the connection failed
    #[display("Generation request failed: {}", _0)]
    Transport(String),
    /// Service answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error body or reason phrase
        message: String,
    },
    /// Service answered but produced no candidate output
    #[display("Generation service returned no content")]
    EmptyResponse,
    /// Service refused to answer
    #[display("Generation blocked: {}", _0)]
    Blocked(String),
    /// The model kept calling tools past the configured bound
    #[display("Tool loop exceeded {} rounds", _0)]
    ToolLoop(usize),
    /// The model called a tool that was not offered
    #[display("Unknown tool requested: {}", _0)]
    UnknownTool(String),
    /// An offered tool failed while answering the model
    #[display("Tool '{}' failed: {}", tool, message)]
    Tool {
        /// Tool name
        tool: String,
        /// Failure description
        message: String,
    },
}

/// Generation failure with source location tracking.
///
/// # Examples
///
/// ```
/// use pathshala_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::MissingApiKey("GEMINI_API_KEY".into()));
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

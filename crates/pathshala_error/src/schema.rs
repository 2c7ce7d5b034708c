//! Output schema conformance errors.

/// Ways a model response can fail to match its output schema.
///
/// Paths use JSONPath-like notation rooted at `$`, e.g. `$.slides[2].title`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SchemaErrorKind {
    /// No JSON document could be recovered from the response
    #[display("Response is not JSON: {}", _0)]
    NotJson(String),
    /// A required field was absent
    #[display("Missing required field at {}", _0)]
    MissingField(String),
    /// A field had the wrong JSON type
    #[display("Expected {} at {}, found {}", expected, path, found)]
    WrongType {
        /// Path of the offending value
        path: String,
        /// Type the schema requires
        expected: String,
        /// Type actually present
        found: String,
    },
    /// A field that must carry text was blank
    #[display("Field at {} must not be empty", _0)]
    EmptyField(String),
    /// A slide deck outside the accepted size range
    #[display("Slide deck has {} slides, expected {} to {}", count, min, max)]
    SlideCount {
        /// Number of slides returned
        count: usize,
        /// Lower bound, inclusive
        min: usize,
        /// Upper bound, inclusive
        max: usize,
    },
}

/// Schema conformance failure with location tracking.
///
/// # Examples
///
/// ```
/// use pathshala_error::{SchemaError, SchemaErrorKind};
///
/// let err = SchemaError::new(SchemaErrorKind::MissingField("$.englishContent".into()));
/// assert!(format!("{}", err).contains("$.englishContent"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schema Error: {} at line {} in {}", kind, line, file)]
pub struct SchemaError {
    /// What did not conform
    pub kind: SchemaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SchemaError {
    /// Create a new SchemaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SchemaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Path of the offending field, when the failure names one.
    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            SchemaErrorKind::MissingField(path) | SchemaErrorKind::EmptyField(path) => Some(path),
            SchemaErrorKind::WrongType { path, .. } => Some(path),
            SchemaErrorKind::NotJson(_) | SchemaErrorKind::SlideCount { .. } => None,
        }
    }
}

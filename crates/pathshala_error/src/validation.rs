//! Lesson request validation errors.

/// The first rule a candidate lesson request broke.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// A required field was absent or blank
    #[display("Missing required field: {}", _0)]
    MissingField(String),
    /// A field was present with the wrong JSON type
    #[display("Field '{}' must be {}", field, expected)]
    WrongType {
        /// The offending field
        field: String,
        /// Human-readable expected type
        expected: String,
    },
    /// Topic shorter than the minimum length
    #[display("Topic must be at least {} characters, got {}", min, actual)]
    TopicTooShort {
        /// Minimum accepted character count
        min: usize,
        /// Character count after trimming
        actual: usize,
    },
    /// The teaching method list was empty
    #[display("At least one teaching method is required")]
    NoTeachingMethods,
    /// A teaching method label was not recognised
    #[display("Unknown teaching method: {}", _0)]
    UnknownTeachingMethod(String),
    /// The same teaching method appeared twice
    #[display("Duplicate teaching method: {}", _0)]
    DuplicateTeachingMethod(String),
    /// Any other input rejection
    #[display("{}", _0)]
    Invalid(String),
}

/// Request validation failure with location tracking.
///
/// # Examples
///
/// ```
/// use pathshala_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::NoTeachingMethods);
/// assert!(format!("{}", err).contains("teaching method"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The rule that failed
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

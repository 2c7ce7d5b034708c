//! Configuration error types.

/// Why the configuration could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Layers could not be merged or deserialized
    #[display("Failed to load configuration: {}", _0)]
    Load(String),
    /// A key holds a value no pipeline can run with
    #[display("{}: {}", key, reason)]
    Invalid {
        /// Dotted key, e.g. `model.temperature`
        key: &'static str,
        /// What is wrong with it
        reason: String,
    },
    /// A secret expected in the environment is unset or blank
    #[display("{} must be set", _0)]
    MissingSecret(String),
}

/// Configuration failure with source location.
///
/// # Examples
///
/// ```
/// use pathshala_error::ConfigError;
///
/// let err = ConfigError::invalid("model.name", "must not be empty");
/// assert_eq!(err.key(), Some("model.name"));
/// assert!(err.to_string().contains("model.name: must not be empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an [`ConfigErrorKind::Invalid`] key.
    #[track_caller]
    pub fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid {
            key,
            reason: reason.into(),
        })
    }

    /// The offending key, when one is known.
    pub fn key(&self) -> Option<&'static str> {
        match self.kind {
            ConfigErrorKind::Invalid { key, .. } => Some(key),
            _ => None,
        }
    }
}

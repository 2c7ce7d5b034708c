//! Transport failures talking to the generation and search services.

/// Where in the exchange the request failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpErrorKind {
    /// The HTTP client could not be configured
    #[display("client setup failed: {}", _0)]
    ClientSetup(String),
    /// The request never got an answer
    #[display("request failed: {}", _0)]
    Request(String),
    /// The service answered with a non-success status
    #[display("status {}: {}", status, body)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },
    /// The answer body did not decode
    #[display("unreadable response: {}", _0)]
    Body(String),
}

/// HTTP failure tagged with the service it came from.
///
/// # Examples
///
/// ```
/// use pathshala_error::{HttpError, HttpErrorKind};
///
/// let err = HttpError::new("custom_search", HttpErrorKind::Status {
///     status: 429,
///     body: "quota exceeded".to_string(),
/// });
/// assert_eq!(err.service(), "custom_search");
/// assert!(err.is_rate_limited());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error ({}): {} at line {} in {}", service, kind, line, file)]
pub struct HttpError {
    service: &'static str,
    kind: HttpErrorKind,
    line: u32,
    file: &'static str,
}

impl HttpError {
    /// Create a new HttpError at the current location.
    #[track_caller]
    pub fn new(service: &'static str, kind: HttpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            service,
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The service that was being called.
    pub fn service(&self) -> &'static str {
        self.service
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HttpErrorKind {
        &self.kind
    }

    /// True when the service refused for quota reasons.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.kind, HttpErrorKind::Status { status: 429, .. })
    }
}

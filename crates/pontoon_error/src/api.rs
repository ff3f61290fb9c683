//! Upstream API error types.

/// Error returned when the Bridge API answers with a non-2xx status.
///
/// The raw response body is carried verbatim so callers can surface it to
/// the operator; no retry is attempted anywhere in the system.
///
/// # Examples
///
/// ```
/// use pontoon_error::ApiError;
///
/// let err = ApiError::new(404, "{\"message\":\"not found\"}");
/// assert_eq!(err.status, 404);
/// assert!(format!("{}", err).contains("404"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("API Error: status {} body {} at line {} in {}", status, body, line, file)]
pub struct ApiError {
    /// HTTP status code returned by the upstream API
    pub status: u16,
    /// Raw response body
    pub body: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ApiError {
    /// Create a new ApiError with automatic location tracking.
    #[track_caller]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            status,
            body: body.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

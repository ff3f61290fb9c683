//! Input validation error types.

/// Validation error raised before any I/O is attempted.
///
/// Carries the name of the offending field so screens and the CLI can report
/// exactly which input was missing or malformed.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: field '{}': {} at line {} in {}", field, message, line, file)]
pub struct ValidationError {
    /// Name of the field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError for a named field at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontoon_error::ValidationError;
    ///
    /// let err = ValidationError::new("amount", "is required");
    /// assert_eq!(err.field, "amount");
    /// ```
    #[track_caller]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            field: field.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for the common "field is required" case.
    #[track_caller]
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, "is required")
    }
}

//! Export and operation-log error types.

/// Kinds of export errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExportErrorKind {
    /// Response body could not be parsed as JSON
    #[display("Malformed JSON: {}", _0)]
    MalformedJson(String),
    /// Response contained no exportable records
    #[display("No records found in response")]
    NoRecords,
    /// Failed to write the output file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read the log file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
}

/// Export error with location tracking.
///
/// # Examples
///
/// ```
/// use pontoon_error::{ExportError, ExportErrorKind};
///
/// let err = ExportError::new(ExportErrorKind::NoRecords);
/// assert!(format!("{}", err).contains("No records"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The kind of error that occurred
    pub kind: ExportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExportError {
    /// Create a new export error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

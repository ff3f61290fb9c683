//! Top-level error wrapper types.

use crate::{ApiError, ConfigError, ExportError, HttpError, JsonError, ValidationError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// This is the foundation error enum covering every failure domain in the
/// workspace: input validation, upstream API responses, HTTP transport,
/// persistence, configuration, and file exports.
///
/// # Examples
///
/// ```
/// use pontoon_error::{PontoonError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: PontoonError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PontoonErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// Upstream API returned a non-2xx status
    #[from(ApiError)]
    Api(ApiError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Export or operation-log error
    #[from(ExportError)]
    Export(ExportError),
}

/// Pontoon error with kind discrimination.
///
/// # Examples
///
/// ```
/// use pontoon_error::{PontoonResult, ValidationError};
///
/// fn might_fail() -> PontoonResult<()> {
///     Err(ValidationError::required("customer_id"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Pontoon Error: {}", _0)]
pub struct PontoonError(Box<PontoonErrorKind>);

impl PontoonError {
    /// Create a new error from a kind.
    pub fn new(kind: PontoonErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PontoonErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PontoonErrorKind
impl<T> From<T> for PontoonError
where
    T: Into<PontoonErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Pontoon operations.
///
/// # Examples
///
/// ```
/// use pontoon_error::{PontoonResult, ApiError};
///
/// fn fetch_data() -> PontoonResult<String> {
///     Err(ApiError::new(404, "Not Found"))?
/// }
/// ```
pub type PontoonResult<T> = std::result::Result<T, PontoonError>;

//! Error types for the Pontoon toolkit.
//!
//! This crate provides the foundation error types used throughout the Pontoon
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use pontoon_error::{PontoonResult, HttpError};
//!
//! fn fetch_data() -> PontoonResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod export;
mod http;
mod json;
mod validation;

pub use api::ApiError;
pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{PontoonError, PontoonErrorKind, PontoonResult};
pub use export::{ExportError, ExportErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use validation::ValidationError;

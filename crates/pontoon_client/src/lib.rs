//! Async Bridge API client.
//!
//! This crate wraps the Bridge REST endpoints the operations toolkit
//! consumes: customer lookup, liquidation-address search and fee updates,
//! virtual account creation, transfer submission and inspection, and the
//! drains feed behind the CSV exporter.
//!
//! Mutating calls return an [`ApiOutcome`] carrying the upstream status and
//! raw body, so non-2xx answers reach the operator as data instead of
//! panics. Nothing here retries; an idempotency key makes an explicit
//! resubmission safe instead.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod outcome;

pub use client::BridgeClient;
pub use config::BridgeConfig;
pub use outcome::ApiOutcome;

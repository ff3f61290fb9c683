//! Pontoon - Bridge operations toolkit
//!
//! Pontoon wraps the Bridge payments API for an internal operations team:
//! developer-fee management on liquidation addresses and transfers, virtual
//! account creation, transfer submission across crypto/fiat rails, CSV
//! exports, wire-confirmation document assembly, and persistence of API
//! payloads into flat Postgres tables.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pontoon::{BridgeClient, BridgeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BridgeClient::new(&BridgeConfig::load()?);
//!     let transfer = client.transfer("transfer_123").await?;
//!     println!("state: {:?}", transfer.state);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Pontoon is organized as a workspace with focused crates:
//!
//! - `pontoon_core` - Domain types, flattener, confirmation document model
//! - `pontoon_error` - Error types
//! - `pontoon_client` - Async Bridge API client
//! - `pontoon_database` - Postgres upserts, schema, row queries
//! - `pontoon_export` - CSV export and operation logs
//!
//! This crate (`pontoon`) re-exports everything for convenience and carries
//! the `pontoon` CLI binary.

#![forbid(unsafe_code)]

pub use pontoon_client::{ApiOutcome, BridgeClient, BridgeConfig};
pub use pontoon_core::{
    Capabilities, Currency, Customer, DepositInstructions, DeveloperFee, FlatRecord,
    LabeledRow, LiquidationAddress, Page, PaymentRail, PostalAddress, RawRecord, Receipt,
    Section, Transfer, TransferFeatures, TransferForm, TransferKind, TransferLeg,
    TransferRequest, UpdateLiquidationFee, UpdateTransferFee, VirtualAccountRequest,
    WireConfirmation, flatten, flatten_deep, transfer_key, virtual_account_key,
};
pub use pontoon_database::{
    BRIDGE_TRANSFERS, ColumnSpec, ColumnType, TableMapping, USERS, establish_connection,
    normalize, provision, recent_rows, upsert_record,
};
pub use pontoon_error::{
    ApiError, ConfigError, DatabaseError, DatabaseErrorKind, ExportError, ExportErrorKind,
    HttpError, JsonError, PontoonError, PontoonErrorKind, PontoonResult, ValidationError,
};
pub use pontoon_export::{
    FeeLogEntry, OperationLog, TransferLogEntry, csv_from_json_str, export_csv,
    records_from_response, write_csv_file,
};

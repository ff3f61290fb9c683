//! Core data types for the Pontoon Bridge operations toolkit.
//!
//! This crate provides the foundation data types used across the Pontoon
//! workspace: the JSON flattener shared by the persistence and export paths,
//! typed request/response records for every Bridge endpoint, payment-rail and
//! currency vocabularies, idempotency-key derivation, and the wire-transfer
//! confirmation document model.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod confirmation;
mod customer;
mod flatten;
mod idempotency;
mod liquidation;
mod rail;
mod transfer;
mod virtual_account;

pub use confirmation::{LabeledRow, Section, WireConfirmation, format_date, format_money};
pub use customer::{Capabilities, Customer, PostalAddress};
pub use flatten::{
    DEFAULT_SEPARATOR, FlatRecord, RawRecord, flatten, flatten_deep, flatten_deep_with_separator,
    flatten_with_separator,
};
pub use idempotency::{transfer_key, virtual_account_key};
pub use liquidation::{DeveloperFee, LiquidationAddress, Page, UpdateLiquidationFee};
pub use rail::{Currency, PaymentRail};
pub use transfer::{
    DepositInstructions, Receipt, Transfer, TransferFeatures, TransferForm, TransferFormBuilder,
    TransferKind, TransferLeg, TransferRequest, TransferRequestEndpoint, UpdateTransferFee,
};
pub use virtual_account::{
    VirtualAccountDestination, VirtualAccountRequest, VirtualAccountRequestBuilder,
    VirtualAccountSource,
};

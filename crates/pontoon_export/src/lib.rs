//! File artifacts: CSV export of API responses and append-only operation
//! logs.
//!
//! The exporter deep-flattens whatever envelope the API returned and writes
//! one column per flattened field name, sorted, with missing fields as empty
//! cells. The operation logs record every fee modification and transfer
//! submission with the upstream status, owning their header row once at open
//! time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod csv;
mod oplog;

pub use csv::{csv_from_json_str, export_csv, records_from_response, write_csv_file};
pub use oplog::{FeeLogEntry, LogRecord, OperationLog, TransferLogEntry};

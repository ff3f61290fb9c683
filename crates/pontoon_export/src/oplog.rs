//! Append-only operation logs.
//!
//! Every fee modification and transfer submission is recorded with the
//! upstream status, successful or not. The writer owns header
//! initialization: the header row is written exactly once, decided by an
//! existence check when the file is opened, never per write.

use crate::csv::escape_cell;
use chrono::Utc;
use pontoon_error::{ExportError, ExportErrorKind};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// A record type that knows its own log columns.
pub trait LogRecord: Sized {
    /// Column names, in write order.
    const HEADERS: &'static [&'static str];

    /// Field values, parallel to [`Self::HEADERS`].
    fn fields(&self) -> Vec<String>;

    /// Rebuild a record from parsed field values.
    fn from_fields(fields: &[String]) -> Option<Self>;
}

/// One fee-modification attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeLogEntry {
    /// UTC timestamp of the attempt
    pub timestamp: String,
    /// Customer the liquidation address belongs to
    pub customer_id: String,
    /// Wallet address whose fee was modified
    pub liq_address: String,
    /// Requested fee value
    pub fee_val: String,
    /// Upstream status code; 0 when the request never completed
    pub status_code: u16,
    /// Raw response body
    pub response: String,
}

impl FeeLogEntry {
    /// Stamp a new entry with the current UTC time.
    pub fn new(
        customer_id: impl Into<String>,
        liq_address: impl Into<String>,
        fee_val: impl Into<String>,
        status_code: u16,
        response: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            customer_id: customer_id.into(),
            liq_address: liq_address.into(),
            fee_val: fee_val.into(),
            status_code,
            response: response.into(),
        }
    }
}

impl LogRecord for FeeLogEntry {
    const HEADERS: &'static [&'static str] = &[
        "timestamp",
        "customer_id",
        "liq_address",
        "fee_val",
        "status_code",
        "response",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.customer_id.clone(),
            self.liq_address.clone(),
            self.fee_val.clone(),
            self.status_code.to_string(),
            self.response.clone(),
        ]
    }

    fn from_fields(fields: &[String]) -> Option<Self> {
        let [timestamp, customer_id, liq_address, fee_val, status_code, response] = fields
        else {
            return None;
        };
        Some(Self {
            timestamp: timestamp.clone(),
            customer_id: customer_id.clone(),
            liq_address: liq_address.clone(),
            fee_val: fee_val.clone(),
            status_code: status_code.parse().unwrap_or(0),
            response: response.clone(),
        })
    }
}

/// One transfer submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferLogEntry {
    /// UTC timestamp of the submission
    pub timestamp: String,
    /// Movement shape, e.g. `crypto_to_fiat`
    pub transfer_type: String,
    /// Submitted amount
    pub amount: String,
    /// Source rail
    pub source_rail: String,
    /// Source currency
    pub source_currency: String,
    /// Destination rail
    pub destination_rail: String,
    /// Destination currency
    pub destination_currency: String,
    /// Upstream status code; 0 when the request never completed
    pub status_code: u16,
    /// Whether the upstream answered 2xx
    pub success: bool,
    /// Transfer id from the response body, when one came back
    pub response_id: String,
    /// Error message, when the submission failed
    pub error_message: String,
}

impl LogRecord for TransferLogEntry {
    const HEADERS: &'static [&'static str] = &[
        "timestamp",
        "transfer_type",
        "amount",
        "source_rail",
        "source_currency",
        "destination_rail",
        "destination_currency",
        "status_code",
        "success",
        "response_id",
        "error_message",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.transfer_type.clone(),
            self.amount.clone(),
            self.source_rail.clone(),
            self.source_currency.clone(),
            self.destination_rail.clone(),
            self.destination_currency.clone(),
            self.status_code.to_string(),
            self.success.to_string(),
            self.response_id.clone(),
            self.error_message.clone(),
        ]
    }

    fn from_fields(fields: &[String]) -> Option<Self> {
        let [
            timestamp,
            transfer_type,
            amount,
            source_rail,
            source_currency,
            destination_rail,
            destination_currency,
            status_code,
            success,
            response_id,
            error_message,
        ] = fields
        else {
            return None;
        };
        Some(Self {
            timestamp: timestamp.clone(),
            transfer_type: transfer_type.clone(),
            amount: amount.clone(),
            source_rail: source_rail.clone(),
            source_currency: source_currency.clone(),
            destination_rail: destination_rail.clone(),
            destination_currency: destination_currency.clone(),
            status_code: status_code.parse().unwrap_or(0),
            success: success == "true",
            response_id: response_id.clone(),
            error_message: error_message.clone(),
        })
    }
}

/// An append-only CSV log of one record type.
#[derive(Debug, Clone)]
pub struct OperationLog<R> {
    path: PathBuf,
    _record: PhantomData<R>,
}

impl<R: LogRecord> OperationLog<R> {
    /// A log stored at the given path. Nothing is created until the first
    /// append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Where this log lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header first iff the file is new.
    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    pub fn append(&self, record: &R) -> Result<(), ExportError> {
        let is_new = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ExportError::new(ExportErrorKind::FileWrite(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            })?;

        let mut lines = String::new();
        if is_new {
            lines.push_str(&R::HEADERS.join(","));
            lines.push('\n');
        }
        lines.push_str(
            &record
                .fields()
                .iter()
                .map(|field| escape_cell(field))
                .collect::<Vec<_>>()
                .join(","),
        );
        lines.push('\n');

        file.write_all(lines.as_bytes()).map_err(|e| {
            ExportError::new(ExportErrorKind::FileWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;
        debug!("Appended log entry");
        Ok(())
    }

    /// The last `limit` records, oldest first. A missing file reads as
    /// empty; rows that no longer match the schema are skipped.
    pub fn tail(&self, limit: usize) -> Result<Vec<R>, ExportError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            ExportError::new(ExportErrorKind::FileRead(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        let mut rows = parse_csv(&raw);
        if !rows.is_empty() {
            rows.remove(0); // header
        }
        let skip = rows.len().saturating_sub(limit);
        Ok(rows[skip..]
            .iter()
            .filter_map(|fields| R::from_fields(fields))
            .collect())
    }
}

/// Minimal CSV reader for the log files: quoted fields may contain commas,
/// doubled quotes, and newlines.
fn parse_csv(raw: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                other => field.push(other),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                '\r' => {}
                other => field.push(other),
            }
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log() -> (tempfile::TempDir, OperationLog<FeeLogEntry>) {
        let dir = tempfile::tempdir().unwrap();
        let log = OperationLog::new(dir.path().join("registro_fees.csv"));
        (dir, log)
    }

    #[test]
    fn header_is_written_exactly_once() {
        let (_dir, log) = temp_log();
        log.append(&FeeLogEntry::new("cust_1", "0xabc", "2.5", 200, "{}"))
            .unwrap();
        log.append(&FeeLogEntry::new("cust_1", "0xabc", "3.0", 200, "{}"))
            .unwrap();

        let raw = std::fs::read_to_string(log.path()).unwrap();
        let headers = raw
            .lines()
            .filter(|line| line.starts_with("timestamp,"))
            .count();
        assert_eq!(headers, 1);
        assert_eq!(raw.lines().count(), 3);
    }

    #[test]
    fn tail_returns_the_most_recent_entries_oldest_first() {
        let (_dir, log) = temp_log();
        for fee in ["1.0", "2.0", "3.0"] {
            log.append(&FeeLogEntry::new("cust_1", "0xabc", fee, 200, "ok"))
                .unwrap();
        }
        let entries = log.tail(2).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].fee_val, "2.0");
        assert_eq!(entries[1].fee_val, "3.0");
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (_dir, log) = temp_log();
        assert!(log.tail(10).unwrap().is_empty());
    }

    #[test]
    fn response_bodies_with_commas_quotes_and_newlines_round_trip() {
        let (_dir, log) = temp_log();
        let body = "{\"message\":\"invalid, \\\"fee\\\"\",\n\"code\":422}";
        log.append(&FeeLogEntry::new("cust_1", "0xabc", "2.5", 422, body))
            .unwrap();
        let entries = log.tail(1).unwrap();
        assert_eq!(entries[0].response, body);
        assert_eq!(entries[0].status_code, 422);
    }

    #[test]
    fn transfer_entries_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let log: OperationLog<TransferLogEntry> =
            OperationLog::new(dir.path().join("registro_transfers.csv"));
        let entry = TransferLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            transfer_type: "crypto_to_fiat".into(),
            amount: "250.00".into(),
            source_rail: "base".into(),
            source_currency: "usdc".into(),
            destination_rail: "wire".into(),
            destination_currency: "usd".into(),
            status_code: 201,
            success: true,
            response_id: "transfer_9".into(),
            error_message: String::new(),
        };
        log.append(&entry).unwrap();
        assert_eq!(log.tail(5).unwrap(), vec![entry]);
    }
}

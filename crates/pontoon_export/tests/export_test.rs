//! Tests for CSV export and the operation logs against realistic payloads.

use pontoon_export::{FeeLogEntry, OperationLog, csv_from_json_str, export_csv, records_from_response};
use serde_json::json;

#[test]
fn drains_feed_exports_with_a_sorted_union_header() {
    let response = json!({
        "count": 2,
        "data": [
            {
                "id": "drain_1",
                "amount": "5.0",
                "destination": { "payment_rail": "wire" }
            },
            {
                "id": "drain_2",
                "amount": "7.5",
                "receipt": { "url": "https://example.test/r/2" }
            }
        ]
    });
    let records = records_from_response(&response).unwrap();
    let csv = export_csv(&records);
    let mut lines = csv.lines();

    assert_eq!(
        lines.next(),
        Some("amount,destination_payment_rail,id,receipt_url")
    );
    assert_eq!(lines.next(), Some("5.0,wire,drain_1,"));
    assert_eq!(lines.next(), Some("7.5,,drain_2,https://example.test/r/2"));
}

#[test]
fn virtual_accounts_download_round_trips_from_a_body_string() {
    let body = r#"{
        "data": [
            {
                "id": "va_1",
                "source_deposit_instructions": {
                    "bank_name": "First, Federal",
                    "currency": "usd"
                }
            }
        ]
    }"#;
    let bytes = csv_from_json_str(body).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with(
        "id,source_deposit_instructions_bank_name,source_deposit_instructions_currency\n"
    ));
    assert!(text.contains("va_1,\"First, Federal\",usd"));
}

#[test]
fn malformed_body_is_an_error_not_a_panic() {
    assert!(csv_from_json_str("<html>rate limited</html>").is_err());
    assert!(records_from_response(&json!({ "data": [] })).is_err());
}

#[test]
fn log_header_survives_writer_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registro_fees.csv");

    // Two separate writer instances against the same file: the existence
    // check at open time keeps the header to the first open only.
    OperationLog::<FeeLogEntry>::new(&path)
        .append(&FeeLogEntry::new("cust_1", "0xabc", "2.5", 200, "ok"))
        .unwrap();
    OperationLog::<FeeLogEntry>::new(&path)
        .append(&FeeLogEntry::new("cust_1", "0xabc", "3.0", 422, "bad fee"))
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        raw.lines().filter(|line| line.starts_with("timestamp,")).count(),
        1
    );

    let entries = OperationLog::<FeeLogEntry>::new(&path).tail(10).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].status_code, 422);
    assert_eq!(entries[1].response, "bad fee");
}

//! Tests for the flatten → normalize → map pipeline over realistic payloads.
//!
//! Everything here runs against the connectionless half of the pipeline; the
//! SQL itself is covered by the unit tests in `upsert.rs` and exercised
//! end-to-end by the ingest commands.

use pontoon_core::flatten;
use pontoon_database::{BRIDGE_TRANSFERS, USERS, normalize, parse_utc_timestamp};
use serde_json::json;

fn transfer_payload() -> serde_json::Value {
    json!({
        "id": "transfer_42",
        "client_reference_id": "ref-2025-001",
        "state": "payment_processed",
        "on_behalf_of": "cust_7",
        "amount": "1500.25",
        "developer_fee": "15.00",
        "currency": "usd",
        "source": {
            "payment_rail": "ethereum",
            "currency": "usdc",
            "from_address": "0xfrom"
        },
        "destination": {
            "payment_rail": "wire",
            "currency": "usd",
            "to_address": "000123456789"
        },
        "source_deposit_instructions": {
            "payment_rails": ["ach", "wire"],
            "amount": "1500.25",
            "currency": "usd",
            "bank_name": "First Federal"
        },
        "receipt": {
            "initial_amount": "1500.25",
            "gas_fe": "0.0021",
            "final_amount": "1483.10"
        },
        "features": { "flexible_amount": false },
        "created_at": "2025-02-14T09:30:00Z",
        "updated_at": "2025-02-15T10:00:00Z"
    })
}

#[test]
fn transfer_payload_maps_onto_the_superset_schema() {
    let flat = flatten(transfer_payload().as_object().unwrap());
    let normalized = normalize(&flat);
    let mapped = BRIDGE_TRANSFERS.map(&normalized).unwrap();

    let columns: Vec<&str> = mapped.columns.iter().map(|spec| spec.column).collect();
    for expected in [
        "id",
        "state",
        "amount",
        "source_payment_rail",
        "destination_to_address",
        "sdi_payment_rails",
        "sdi_bank_name",
        "receipt_gas_fee",
        "features_flexible_amount",
        "created_at",
        "updated_at",
    ] {
        assert!(columns.contains(&expected), "missing column {expected}");
    }

    // Nothing outside the static mapping table ever maps.
    let known: Vec<&str> = BRIDGE_TRANSFERS
        .columns
        .iter()
        .map(|spec| spec.column)
        .collect();
    assert!(columns.iter().all(|column| known.contains(column)));
}

#[test]
fn gas_fee_misspelling_normalizes_into_the_real_column() {
    let flat = flatten(transfer_payload().as_object().unwrap());
    let normalized = normalize(&flat);
    assert_eq!(normalized["receipt_gas_fee"], json!("0.0021"));

    let mapped = BRIDGE_TRANSFERS.map(&normalized).unwrap();
    let index = mapped
        .columns
        .iter()
        .position(|spec| spec.column == "receipt_gas_fee")
        .unwrap();
    assert_eq!(mapped.values[index], json!("0.0021"));
}

#[test]
fn timestamps_become_timezone_aware_or_stay_raw() {
    let parsed = parse_utc_timestamp("2024-01-01T00:00:00Z").unwrap();
    assert_eq!(parsed.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    assert!(parse_utc_timestamp("not a timestamp").is_none());
}

#[test]
fn user_payload_maps_capabilities_to_flat_columns() {
    let payload = json!({
        "id": "user_123",
        "first_name": "John",
        "last_name": "Doe",
        "email": "john.doe@example.com",
        "status": "active",
        "capabilities": {
            "payin_crypto": "enabled",
            "payout_crypto": "enabled",
            "payin_fiat": "disabled",
            "payout_fiat": "disabled"
        },
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    });
    let flat = flatten(payload.as_object().unwrap());
    let mapped = USERS.map(&normalize(&flat)).unwrap();

    // Every mapping entry matched, in table order.
    assert_eq!(mapped.len(), USERS.columns.len());
    let columns: Vec<&str> = mapped.columns.iter().map(|spec| spec.column).collect();
    assert_eq!(
        columns,
        vec![
            "id",
            "first_name",
            "last_name",
            "email",
            "status",
            "payin_crypto",
            "payout_crypto",
            "payin_fiat",
            "payout_fiat",
            "created_at",
            "updated_at"
        ]
    );
    let payin = columns.iter().position(|c| *c == "payin_crypto").unwrap();
    assert_eq!(mapped.values[payin], json!("enabled"));
}

#[test]
fn mapping_the_same_payload_twice_is_deterministic() {
    // The upsert is idempotent end-to-end because the statement it builds
    // from identical input is byte-identical; spot-check the mapped layer.
    let flat = flatten(transfer_payload().as_object().unwrap());
    let first = BRIDGE_TRANSFERS.map(&normalize(&flat)).unwrap();
    let second = BRIDGE_TRANSFERS.map(&normalize(&flat)).unwrap();
    assert_eq!(first.values, second.values);
    let first_columns: Vec<&str> = first.columns.iter().map(|s| s.column).collect();
    let second_columns: Vec<&str> = second.columns.iter().map(|s| s.column).collect();
    assert_eq!(first_columns, second_columns);
}

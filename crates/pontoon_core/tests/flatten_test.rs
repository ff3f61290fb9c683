//! Tests for the JSON flattener.

use pontoon_core::{DEFAULT_SEPARATOR, FlatRecord, RawRecord, flatten, flatten_deep};
use serde_json::{Map, Value, json};

/// Rebuild a nested record by splitting composed keys on the separator.
///
/// Only valid when no sibling collisions occurred during flattening.
fn unflatten(flat: &FlatRecord) -> RawRecord {
    let mut root = Map::new();
    for (key, value) in flat {
        let parts: Vec<&str> = key.split(DEFAULT_SEPARATOR).collect();
        let mut cursor = &mut root;
        for part in &parts[..parts.len() - 1] {
            cursor = cursor
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
                .expect("intermediate node is an object");
        }
        cursor.insert(parts[parts.len() - 1].to_string(), value.clone());
    }
    root
}

#[test]
fn flatten_then_unflatten_round_trips_without_collisions() {
    // Collision-free keys: no underscores inside individual segments.
    let record = json!({
        "id": "t1",
        "source": {
            "rail": "ethereum",
            "bank": { "name": "First Federal" }
        },
        "receipt": { "url": "https://example.test/r/1" }
    });
    let raw = record.as_object().unwrap();
    let flat = flatten(raw);
    assert_eq!(&unflatten(&flat), raw);
}

#[test]
fn flattening_an_already_flat_record_is_idempotent() {
    let record = json!({
        "id": "t1",
        "source_payment_rail": "ethereum",
        "amount": "10.0"
    });
    let flat = flatten(record.as_object().unwrap());
    assert_eq!(flatten(&flat), flat);
}

#[test]
fn capability_example_from_the_user_table() {
    let record = json!({
        "id": "user_123",
        "capabilities": { "payin_crypto": "enabled" }
    });
    let flat = flatten(record.as_object().unwrap());
    assert_eq!(flat["capabilities_payin_crypto"], json!("enabled"));
    assert_eq!(flat["id"], json!("user_123"));
    assert_eq!(flat.len(), 2);
}

#[test]
fn storage_flatten_and_deep_flatten_differ_only_on_sequences() {
    let record = json!({
        "id": "d1",
        "rails": ["ach", "wire"]
    });
    let flat = flatten(record.as_object().unwrap());
    assert_eq!(flat["rails"], json!(["ach", "wire"]));

    let deep = flatten_deep(&record);
    assert_eq!(deep["rails_0"], json!("ach"));
    assert_eq!(deep["rails_1"], json!("wire"));
    assert!(!deep.contains_key("rails"));
}

#[test]
fn deeply_nested_records_flatten_to_scalars_only() {
    let record = json!({
        "a": { "b": { "c": { "d": { "e": "leaf" } } } },
        "x": 1
    });
    let flat = flatten(record.as_object().unwrap());
    assert_eq!(flat["a_b_c_d_e"], json!("leaf"));
    assert!(flat.values().all(|value| !value.is_object()));
}

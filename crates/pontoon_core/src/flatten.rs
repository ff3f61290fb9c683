//! Recursive JSON flattening.
//!
//! Nested API payloads are flattened into compound keys before column mapping
//! and before CSV export. Two variants exist: [`flatten`] keeps sequences
//! intact so they can land in array-typed columns, while [`flatten_deep`]
//! also expands sequences by element index for arbitrary-depth CSV export.

use serde_json::{Map, Value};

/// Separator joining parent and child keys in a flattened record.
pub const DEFAULT_SEPARATOR: &str = "_";

/// A deserialized API response body, possibly nested.
pub type RawRecord = Map<String, Value>;

/// A flattened record: no value is a nested mapping.
///
/// Keys keep the source iteration order; two sibling keys that collide after
/// prefixing silently overwrite one another, last write wins.
pub type FlatRecord = Map<String, Value>;

/// Flatten a nested record using the default `_` separator.
///
/// Nested mappings expand into compound keys; sequences are kept unchanged as
/// the value of the composed key; scalars are assigned directly. An empty
/// input produces an empty output.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let record = json!({
///     "id": "user_123",
///     "capabilities": { "payin_crypto": "enabled" }
/// });
/// let flat = pontoon_core::flatten(record.as_object().unwrap());
/// assert_eq!(flat["capabilities_payin_crypto"], json!("enabled"));
/// assert_eq!(flat["id"], json!("user_123"));
/// ```
pub fn flatten(record: &RawRecord) -> FlatRecord {
    flatten_with_separator(record, DEFAULT_SEPARATOR)
}

/// Flatten a nested record with a caller-chosen separator.
pub fn flatten_with_separator(record: &RawRecord, separator: &str) -> FlatRecord {
    let mut out = FlatRecord::new();
    flatten_into(&mut out, record, "", separator);
    out
}

fn flatten_into(out: &mut FlatRecord, record: &RawRecord, parent: &str, separator: &str) {
    for (key, value) in record {
        let composed = compose(parent, key, separator);
        match value {
            Value::Object(nested) => flatten_into(out, nested, &composed, separator),
            other => {
                out.insert(composed, other.clone());
            }
        }
    }
}

/// Flatten a value for CSV export, expanding sequences by element index.
///
/// Unlike [`flatten`], sequence elements are recursed into and keyed by
/// position, so arbitrarily nested responses flatten to scalar cells.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let record = json!({ "drains": [{ "amount": "5.0" }] });
/// let flat = pontoon_core::flatten_deep(&record);
/// assert_eq!(flat["drains_0_amount"], json!("5.0"));
/// ```
pub fn flatten_deep(value: &Value) -> FlatRecord {
    flatten_deep_with_separator(value, DEFAULT_SEPARATOR)
}

/// Deep-flatten with a caller-chosen separator.
pub fn flatten_deep_with_separator(value: &Value, separator: &str) -> FlatRecord {
    let mut out = FlatRecord::new();
    deep_into(&mut out, value, "", separator);
    out
}

fn deep_into(out: &mut FlatRecord, value: &Value, parent: &str, separator: &str) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let composed = compose(parent, key, separator);
                deep_into(out, nested, &composed, separator);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let composed = compose(parent, &index.to_string(), separator);
                deep_into(out, item, &composed, separator);
            }
        }
        other => {
            out.insert(parent.to_string(), other.clone());
        }
    }
}

fn compose(parent: &str, key: &str, separator: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}{separator}{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_produces_empty_output() {
        let flat = flatten(&RawRecord::new());
        assert!(flat.is_empty());
    }

    #[test]
    fn sequences_are_kept_intact() {
        let record = json!({
            "source_deposit_instructions": { "payment_rails": ["ach", "wire"] }
        });
        let flat = flatten(record.as_object().unwrap());
        assert_eq!(
            flat["source_deposit_instructions_payment_rails"],
            json!(["ach", "wire"])
        );
    }

    #[test]
    fn sibling_collision_is_last_write_wins() {
        // "a_b" arrives both as a literal key and via nesting; the later
        // sibling in iteration order overwrites the earlier one.
        let record = json!({ "a_b": 1, "a": { "b": 2 } });
        let flat = flatten(record.as_object().unwrap());
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["a_b"], json!(2));
    }

    #[test]
    fn custom_separator() {
        let record = json!({ "a": { "b": "c" } });
        let flat = flatten_with_separator(record.as_object().unwrap(), ".");
        assert_eq!(flat["a.b"], json!("c"));
    }

    #[test]
    fn deep_flatten_indexes_list_elements() {
        let value = json!({ "data": [{ "id": "t1" }, { "id": "t2" }] });
        let flat = flatten_deep(&value);
        assert_eq!(flat["data_0_id"], json!("t1"));
        assert_eq!(flat["data_1_id"], json!("t2"));
    }
}

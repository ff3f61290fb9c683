//! Known upstream quirks corrected before column mapping.

use chrono::{DateTime, FixedOffset};
use pontoon_core::FlatRecord;
use serde_json::Value;
use tracing::debug;

/// Flattened keys holding RFC 3339 timestamps.
const TIMESTAMP_KEYS: &[&str] = &["created_at", "updated_at"];

/// Upstream doc typo: `receipt_gas_fe` still appears in live responses.
const GAS_FEE_TYPO: &str = "receipt_gas_fe";
const GAS_FEE: &str = "receipt_gas_fee";

/// Correct known upstream naming and timestamp quirks in a flat record.
///
/// Rules, in order:
/// 1. When `receipt_gas_fe` is present and `receipt_gas_fee` is absent, the
///    misspelled value is copied into the corrected key.
/// 2. For `created_at`/`updated_at` string values, a trailing `Z` is
///    rewritten to `+00:00` and the result parsed as a timezone-aware
///    datetime, re-emitted canonically. A string that fails to parse is left
///    untouched so the database can attempt its own cast; that fallback is
///    deliberate, not swallowed.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let record = json!({ "receipt_gas_fe": "0.002" });
/// let flat = pontoon_core::flatten(record.as_object().unwrap());
/// let normalized = pontoon_database::normalize(&flat);
/// assert_eq!(normalized["receipt_gas_fee"], json!("0.002"));
/// ```
pub fn normalize(flat: &FlatRecord) -> FlatRecord {
    let mut out = flat.clone();

    if let Some(value) = out.get(GAS_FEE_TYPO).cloned() {
        if !out.contains_key(GAS_FEE) {
            out.insert(GAS_FEE.to_string(), value);
        }
    }

    for key in TIMESTAMP_KEYS {
        let raw = match out.get(*key) {
            Some(Value::String(raw)) => raw.clone(),
            _ => continue,
        };
        match parse_utc_timestamp(&raw) {
            Some(parsed) => {
                out.insert(key.to_string(), Value::String(parsed.to_rfc3339()));
            }
            None => {
                debug!(key = *key, raw = %raw, "Timestamp did not parse; leaving raw value for the database cast");
            }
        }
    }

    out
}

/// Parse an API timestamp into a timezone-aware datetime.
///
/// A trailing `Z` is rewritten to `+00:00` first, matching how the upstream
/// emits UTC instants.
pub fn parse_utc_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let canonical = match raw.strip_suffix('Z') {
        Some(stripped) => format!("{stripped}+00:00"),
        None => raw.to_string(),
    };
    DateTime::parse_from_rfc3339(&canonical).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn flat(value: serde_json::Value) -> FlatRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn gas_fee_typo_is_copied_when_corrected_key_absent() {
        let normalized = normalize(&flat(json!({ "receipt_gas_fe": "0.004" })));
        assert_eq!(normalized["receipt_gas_fee"], json!("0.004"));
        // Original key survives; mapping drops it later.
        assert_eq!(normalized["receipt_gas_fe"], json!("0.004"));
    }

    #[test]
    fn gas_fee_typo_never_overwrites_the_corrected_key() {
        let normalized = normalize(&flat(json!({
            "receipt_gas_fe": "0.004",
            "receipt_gas_fee": "0.005"
        })));
        assert_eq!(normalized["receipt_gas_fee"], json!("0.005"));
    }

    #[test]
    fn zulu_timestamps_become_timezone_aware() {
        let parsed = parse_utc_timestamp("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let normalized = normalize(&flat(json!({ "created_at": "2024-01-01T00:00:00Z" })));
        assert_eq!(normalized["created_at"], json!("2024-01-01T00:00:00+00:00"));
    }

    #[test]
    fn unparseable_timestamp_is_left_untouched() {
        let normalized = normalize(&flat(json!({ "updated_at": "last tuesday" })));
        assert_eq!(normalized["updated_at"], json!("last tuesday"));
    }

    #[test]
    fn non_string_timestamps_pass_through() {
        let normalized = normalize(&flat(json!({ "created_at": 1704067200 })));
        assert_eq!(normalized["created_at"], json!(1704067200));
    }
}

//! CSV export of Bridge API responses.

use pontoon_core::flatten_deep;
use pontoon_error::{ExportError, ExportErrorKind};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, instrument};

/// Pull the record list out of whatever envelope the API used.
///
/// Handles the shapes the screens met in practice: `{"data": [...]}`; any
/// other object whose first list-valued field holds the records; a bare
/// list; or a single object, exported as one record.
///
/// # Errors
///
/// Fails with [`ExportErrorKind::NoRecords`] when the envelope holds nothing
/// to export.
pub fn records_from_response(response: &Value) -> Result<Vec<Value>, ExportError> {
    let records = match response {
        Value::Object(map) => {
            if let Some(Value::Array(data)) = map.get("data") {
                data.clone()
            } else if let Some(Value::Array(list)) =
                map.values().find(|value| value.is_array())
            {
                list.clone()
            } else {
                vec![response.clone()]
            }
        }
        Value::Array(list) => list.clone(),
        other => vec![other.clone()],
    };

    if records.is_empty() {
        return Err(ExportError::new(ExportErrorKind::NoRecords));
    }
    Ok(records)
}

/// Render records as CSV: header row is the sorted union of all
/// deep-flattened field names; a field missing from a record renders as an
/// empty cell.
pub fn export_csv(records: &[Value]) -> String {
    let flattened: Vec<_> = records
        .iter()
        .filter(|record| record.is_object())
        .map(flatten_deep)
        .collect();

    let mut fields = BTreeSet::new();
    for flat in &flattened {
        fields.extend(flat.keys().cloned());
    }
    let fields: Vec<String> = fields.into_iter().collect();

    let mut output = String::new();
    output.push_str(
        &fields
            .iter()
            .map(|field| escape_cell(field))
            .collect::<Vec<_>>()
            .join(","),
    );
    output.push('\n');

    for flat in &flattened {
        let row = fields
            .iter()
            .map(|field| flat.get(field).map(render_cell).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(",");
        output.push_str(&row);
        output.push('\n');
    }

    output
}

/// Parse a raw response body and export it, for the download-as-CSV flows.
///
/// # Errors
///
/// Malformed JSON surfaces as a display-level [`ExportError`], never a
/// panic.
pub fn csv_from_json_str(body: &str) -> Result<Vec<u8>, ExportError> {
    let response: Value = serde_json::from_str(body)
        .map_err(|e| ExportError::new(ExportErrorKind::MalformedJson(e.to_string())))?;
    let records = records_from_response(&response)?;
    Ok(export_csv(&records).into_bytes())
}

/// Export records to a file on disk.
#[instrument(skip(records), fields(path = %path.as_ref().display()))]
pub fn write_csv_file(path: impl AsRef<Path>, records: &[Value]) -> Result<(), ExportError> {
    let csv = export_csv(records);
    std::fs::write(path.as_ref(), csv).map_err(|e| {
        ExportError::new(ExportErrorKind::FileWrite(format!(
            "{}: {}",
            path.as_ref().display(),
            e
        )))
    })?;
    debug!(records = records.len(), "Wrote CSV export");
    Ok(())
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => escape_cell(text),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => escape_cell(&other.to_string()),
    }
}

/// Quote a cell when it contains a comma, quote, or newline; embedded quotes
/// are doubled.
pub(crate) fn escape_cell(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_envelope_is_unwrapped() {
        let response = json!({ "count": 2, "data": [{ "id": 1 }, { "id": 2 }] });
        assert_eq!(records_from_response(&response).unwrap().len(), 2);
    }

    #[test]
    fn first_list_value_is_found_without_a_data_key() {
        let response = json!({ "drains": [{ "id": 1 }] });
        assert_eq!(records_from_response(&response).unwrap().len(), 1);
    }

    #[test]
    fn single_object_exports_as_one_record() {
        let response = json!({ "id": "t1", "state": "done" });
        assert_eq!(records_from_response(&response).unwrap().len(), 1);
    }

    #[test]
    fn empty_data_is_an_error() {
        let response = json!({ "data": [] });
        assert!(records_from_response(&response).is_err());
    }

    #[test]
    fn header_is_the_sorted_union_and_missing_fields_are_empty() {
        let records = vec![
            json!({ "b": "2", "a": "1" }),
            json!({ "c": { "d": "3" } }),
        ];
        let csv = export_csv(&records);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("a,b,c_d"));
        assert_eq!(lines.next(), Some("1,2,"));
        assert_eq!(lines.next(), Some(",,3"));
    }

    #[test]
    fn nested_lists_flatten_by_index() {
        let records = vec![json!({ "rails": ["ach", "wire"] })];
        let csv = export_csv(&records);
        assert!(csv.starts_with("rails_0,rails_1\n"));
        assert!(csv.contains("ach,wire"));
    }

    #[test]
    fn cells_with_commas_and_quotes_are_escaped() {
        let records = vec![json!({ "memo": "pay \"now\", please" })];
        let csv = export_csv(&records);
        assert!(csv.contains("\"pay \"\"now\"\", please\""));
    }

    #[test]
    fn malformed_json_degrades_to_an_error() {
        assert!(csv_from_json_str("{not json").is_err());
    }

    #[test]
    fn round_trips_through_bytes() {
        let body = r#"{"data":[{"id":"va_1","destination":{"currency":"usdc"}}]}"#;
        let bytes = csv_from_json_str(body).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("destination_currency,id\n"));
        assert!(text.contains("usdc,va_1"));
    }
}

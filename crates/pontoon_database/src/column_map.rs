//! Hand-authored column mappings from flattened API keys to table columns.
//!
//! These tables are fixed at deploy time, never derived from data. A
//! flattened key absent from its table is silently dropped; mapping order
//! follows the table, not the input record. Each entry carries the
//! destination column's SQL type so the upsert executor can bind text
//! parameters with explicit casts.
//!
//! # Important
//!
//! The mappings MUST match the DDL in [`crate::provision`]. If the schema
//! changes, these tables must be updated accordingly.

use pontoon_core::FlatRecord;
use pontoon_error::{DatabaseError, DatabaseErrorKind};
use serde_json::Value;

/// SQL type of a destination column, used as the bind cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// `TEXT`
    Text,
    /// `NUMERIC(36,18)` — wide precision for string-typed API amounts
    Numeric,
    /// `BOOLEAN`
    Boolean,
    /// `TIMESTAMPTZ`
    TimestampTz,
    /// `TEXT[]`
    TextArray,
}

impl ColumnType {
    /// The cast appended to this column's bind placeholder.
    pub fn cast(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Numeric => "numeric(36,18)",
            ColumnType::Boolean => "boolean",
            ColumnType::TimestampTz => "timestamptz",
            ColumnType::TextArray => "text[]",
        }
    }
}

/// One entry in a column mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Flattened source key
    pub key: &'static str,
    /// Destination column name
    pub column: &'static str,
    /// Destination column SQL type
    pub ty: ColumnType,
}

const fn text(key: &'static str, column: &'static str) -> ColumnSpec {
    ColumnSpec {
        key,
        column,
        ty: ColumnType::Text,
    }
}

const fn numeric(key: &'static str, column: &'static str) -> ColumnSpec {
    ColumnSpec {
        key,
        column,
        ty: ColumnType::Numeric,
    }
}

const fn boolean(key: &'static str, column: &'static str) -> ColumnSpec {
    ColumnSpec {
        key,
        column,
        ty: ColumnType::Boolean,
    }
}

const fn timestamp(key: &'static str, column: &'static str) -> ColumnSpec {
    ColumnSpec {
        key,
        column,
        ty: ColumnType::TimestampTz,
    }
}

/// A static mapping from flattened keys to one table's columns.
#[derive(Debug, Clone, Copy)]
pub struct TableMapping {
    /// Destination table name
    pub table: &'static str,
    /// Mapping entries in column order
    pub columns: &'static [ColumnSpec],
}

/// Columns and values selected from one flat record, in mapping-table order.
#[derive(Debug, Clone)]
pub struct MappedRow {
    /// Matched specs, parallel to `values`
    pub columns: Vec<ColumnSpec>,
    /// Values for the matched columns
    pub values: Vec<Value>,
}

impl MappedRow {
    /// Number of mapped columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether nothing mapped.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl TableMapping {
    /// Select the flattened keys known to this table, in table order.
    ///
    /// # Errors
    ///
    /// Fails with [`DatabaseErrorKind::NoMappableColumns`] when zero keys
    /// match; no SQL may be built from an empty mapping.
    pub fn map(&self, flat: &FlatRecord) -> Result<MappedRow, DatabaseError> {
        let mut columns = Vec::new();
        let mut values = Vec::new();
        for spec in self.columns {
            if let Some(value) = flat.get(spec.key) {
                columns.push(*spec);
                values.push(value.clone());
            }
        }
        if columns.is_empty() {
            return Err(DatabaseError::new(DatabaseErrorKind::NoMappableColumns(
                self.table.to_string(),
            )));
        }
        Ok(MappedRow { columns, values })
    }
}

/// Column mapping for the `users` table.
///
/// Flattened `GET /customers/{id}` payloads; capability flags arrive nested
/// under `capabilities` and land in flat text columns.
pub const USERS: TableMapping = TableMapping {
    table: "users",
    columns: &[
        text("id", "id"),
        text("first_name", "first_name"),
        text("last_name", "last_name"),
        text("email", "email"),
        text("status", "status"),
        text("capabilities_payin_crypto", "payin_crypto"),
        text("capabilities_payout_crypto", "payout_crypto"),
        text("capabilities_payin_fiat", "payin_fiat"),
        text("capabilities_payout_fiat", "payout_fiat"),
        timestamp("created_at", "created_at"),
        timestamp("updated_at", "updated_at"),
    ],
};

/// Column mapping for the `bridge_transfers` table.
///
/// Flattened superset of `GET /transfers/{id}`: core fields, source and
/// destination rail details, `sdi_*` deposit-instruction bank fields,
/// `receipt_*` breakdown, and feature flags.
pub const BRIDGE_TRANSFERS: TableMapping = TableMapping {
    table: "bridge_transfers",
    columns: &[
        // Core identifiers & status
        text("id", "id"),
        text("client_reference_id", "client_reference_id"),
        text("state", "state"),
        text("on_behalf_of", "on_behalf_of"),
        // Amounts & fees
        numeric("amount", "amount"),
        numeric("developer_fee", "developer_fee"),
        text("currency", "currency"),
        // Source
        text("source_payment_rail", "source_payment_rail"),
        text("source_currency", "source_currency"),
        text("source_from_address", "source_from_address"),
        text("source_external_account_id", "source_external_account_id"),
        text("source_bridge_wallet_id", "source_bridge_wallet_id"),
        text("source_bank_beneficiary_name", "source_bank_beneficiary_name"),
        text("source_bank_routing_number", "source_bank_routing_number"),
        text("source_bank_account_number", "source_bank_account_number"),
        text("source_bank_name", "source_bank_name"),
        text("source_imad", "source_imad"),
        text("source_omad", "source_omad"),
        text("source_payment_scheme", "source_payment_scheme"),
        // Destination
        text("destination_payment_rail", "destination_payment_rail"),
        text("destination_currency", "destination_currency"),
        text("destination_to_address", "destination_to_address"),
        text(
            "destination_external_account_id",
            "destination_external_account_id",
        ),
        text("destination_bridge_wallet_id", "destination_bridge_wallet_id"),
        text("destination_wire_message", "destination_wire_message"),
        text("destination_sepa_reference", "destination_sepa_reference"),
        text("destination_swift_reference", "destination_swift_reference"),
        text("destination_spei_reference", "destination_spei_reference"),
        text("destination_swift_charges", "destination_swift_charges"),
        text("destination_ach_reference", "destination_ach_reference"),
        text("destination_blockchain_memo", "destination_blockchain_memo"),
        text("destination_deposit_id", "destination_deposit_id"),
        text("destination_imad", "destination_imad"),
        // Source deposit instructions (SDI)
        text("source_deposit_instructions_payment_rail", "sdi_payment_rail"),
        ColumnSpec {
            key: "source_deposit_instructions_payment_rails",
            column: "sdi_payment_rails",
            ty: ColumnType::TextArray,
        },
        numeric("source_deposit_instructions_amount", "sdi_amount"),
        text("source_deposit_instructions_currency", "sdi_currency"),
        text(
            "source_deposit_instructions_deposit_message",
            "sdi_deposit_message",
        ),
        text("source_deposit_instructions_from_address", "sdi_from_address"),
        text("source_deposit_instructions_to_address", "sdi_to_address"),
        text(
            "source_deposit_instructions_bank_beneficiary_name",
            "sdi_bank_beneficiary_name",
        ),
        text(
            "source_deposit_instructions_bank_routing_number",
            "sdi_bank_routing_number",
        ),
        text(
            "source_deposit_instructions_bank_account_number",
            "sdi_bank_account_number",
        ),
        text("source_deposit_instructions_bank_name", "sdi_bank_name"),
        text("source_deposit_instructions_iban", "sdi_iban"),
        text("source_deposit_instructions_bic", "sdi_bic"),
        text(
            "source_deposit_instructions_account_holder_name",
            "sdi_account_holder_name",
        ),
        text("source_deposit_instructions_bank_address", "sdi_bank_address"),
        // Receipt (normalized: receipt_gas_fe folds into receipt_gas_fee)
        numeric("receipt_initial_amount", "receipt_initial_amount"),
        numeric("receipt_developer_fee", "receipt_developer_fee"),
        numeric("receipt_exchange_fee", "receipt_exchange_fee"),
        numeric("receipt_subtotal_amount", "receipt_subtotal_amount"),
        numeric("receipt_gas_fee", "receipt_gas_fee"),
        numeric("receipt_final_amount", "receipt_final_amount"),
        text("receipt_source_tx_hash", "receipt_source_tx_hash"),
        text("receipt_destination_tx_hash", "receipt_destination_tx_hash"),
        text("receipt_url", "receipt_url"),
        // Feature flags
        boolean("features_flexible_amount", "features_flexible_amount"),
        boolean("features_static_template", "features_static_template"),
        boolean(
            "features_allow_any_from_address",
            "features_allow_any_from_address",
        ),
        // Timestamps
        timestamp("created_at", "created_at"),
        timestamp("updated_at", "updated_at"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use pontoon_core::flatten;
    use serde_json::json;

    #[test]
    fn maps_nested_capabilities_to_flat_columns() {
        let record = json!({
            "id": "user_123",
            "capabilities": { "payin_crypto": "enabled" }
        });
        let flat = flatten(record.as_object().unwrap());
        let mapped = USERS.map(&flat).unwrap();
        let columns: Vec<&str> = mapped.columns.iter().map(|c| c.column).collect();
        assert_eq!(columns, vec!["id", "payin_crypto"]);
        assert_eq!(mapped.values[1], json!("enabled"));
    }

    #[test]
    fn unknown_keys_are_dropped_and_known_keys_kept() {
        let record = json!({
            "id": "user_123",
            "email": "a@b.test",
            "unexpected_field": "x"
        });
        let flat = flatten(record.as_object().unwrap());
        let mapped = USERS.map(&flat).unwrap();
        assert!(mapped.columns.iter().all(|c| c.column != "unexpected_field"));
        assert!(mapped.columns.iter().any(|c| c.column == "email"));
    }

    #[test]
    fn order_follows_the_mapping_table_not_the_record() {
        let record = json!({ "updated_at": "2024-01-01T00:00:00Z", "id": "t1" });
        let flat = flatten(record.as_object().unwrap());
        let mapped = BRIDGE_TRANSFERS.map(&flat).unwrap();
        let columns: Vec<&str> = mapped.columns.iter().map(|c| c.column).collect();
        assert_eq!(columns, vec!["id", "updated_at"]);
    }

    #[test]
    fn zero_matches_is_an_error() {
        let record = json!({ "nothing_known": true });
        let flat = flatten(record.as_object().unwrap());
        let err = USERS.map(&flat).unwrap_err();
        assert!(matches!(err.kind, DatabaseErrorKind::NoMappableColumns(_)));
    }

    #[test]
    fn transfer_mapping_covers_the_sdi_and_receipt_prefixes() {
        let sdi = BRIDGE_TRANSFERS
            .columns
            .iter()
            .filter(|c| c.column.starts_with("sdi_"))
            .count();
        let receipt = BRIDGE_TRANSFERS
            .columns
            .iter()
            .filter(|c| c.column.starts_with("receipt_"))
            .count();
        assert_eq!(sdi, 15);
        assert_eq!(receipt, 9);
    }
}

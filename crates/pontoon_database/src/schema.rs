//! Schema provisioning.
//!
//! One-shot, idempotent DDL for the two tables this toolkit writes. The
//! column set is the compatibility surface: flattened superset schemas for
//! `GET /customers/{id}` and `GET /transfers/{id}`.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use pontoon_error::{DatabaseError, DatabaseErrorKind};
use tracing::{info, instrument};

/// Flattened customer rows. `id` is the conflict target for upserts.
const CREATE_USERS_SQL: &str = "
CREATE TABLE IF NOT EXISTS users (
  id          TEXT PRIMARY KEY,
  first_name  TEXT,
  last_name   TEXT,
  email       TEXT,
  status      TEXT,
  payin_crypto  TEXT,
  payout_crypto TEXT,
  payin_fiat    TEXT,
  payout_fiat   TEXT,
  created_at  TIMESTAMPTZ,
  updated_at  TIMESTAMPTZ
)
";

/// Flattened superset schema for transfers.
///
/// Amounts are strings in the API and NUMERIC here; precision is wide on
/// purpose. `state` stays TEXT to avoid tight coupling to the upstream
/// vocabulary.
const CREATE_BRIDGE_TRANSFERS_SQL: &str = "
CREATE TABLE IF NOT EXISTS bridge_transfers (
  -- Core identifiers & status
  id                             TEXT PRIMARY KEY,
  client_reference_id            TEXT,
  state                          TEXT NOT NULL,
  on_behalf_of                   TEXT,

  -- Amounts & fees
  amount                         NUMERIC(36,18),
  developer_fee                  NUMERIC(36,18),
  currency                       TEXT,

  -- Source (origin of funds)
  source_payment_rail            TEXT,
  source_currency                TEXT,
  source_from_address            TEXT,
  source_external_account_id     TEXT,
  source_bridge_wallet_id        TEXT,
  source_bank_beneficiary_name   TEXT,
  source_bank_routing_number     TEXT,
  source_bank_account_number     TEXT,
  source_bank_name               TEXT,
  source_imad                    TEXT,
  source_omad                    TEXT,
  source_payment_scheme          TEXT,

  -- Destination (where funds go)
  destination_payment_rail       TEXT,
  destination_currency           TEXT,
  destination_to_address         TEXT,
  destination_external_account_id TEXT,
  destination_bridge_wallet_id   TEXT,
  destination_wire_message       TEXT,
  destination_sepa_reference     TEXT,
  destination_swift_reference    TEXT,
  destination_spei_reference     TEXT,
  destination_swift_charges      TEXT,
  destination_ach_reference      TEXT,
  destination_blockchain_memo    TEXT,
  destination_deposit_id         TEXT,
  destination_imad               TEXT,

  -- Source deposit instructions (present when funding is required)
  sdi_payment_rail               TEXT,
  sdi_payment_rails              TEXT[],
  sdi_amount                     NUMERIC(36,18),
  sdi_currency                   TEXT,
  sdi_deposit_message            TEXT,
  sdi_from_address               TEXT,
  sdi_to_address                 TEXT,
  sdi_bank_beneficiary_name      TEXT,
  sdi_bank_routing_number        TEXT,
  sdi_bank_account_number        TEXT,
  sdi_bank_name                  TEXT,
  sdi_iban                       TEXT,
  sdi_bic                        TEXT,
  sdi_account_holder_name        TEXT,
  sdi_bank_address               TEXT,

  -- Receipt breakdown (gas_fe and gas_fee both normalize into this column)
  receipt_initial_amount         NUMERIC(36,18),
  receipt_developer_fee          NUMERIC(36,18),
  receipt_exchange_fee           NUMERIC(36,18),
  receipt_subtotal_amount        NUMERIC(36,18),
  receipt_gas_fee                NUMERIC(36,18),
  receipt_final_amount           NUMERIC(36,18),
  receipt_source_tx_hash         TEXT,
  receipt_destination_tx_hash    TEXT,
  receipt_url                    TEXT,

  -- Feature flags
  features_flexible_amount       BOOLEAN,
  features_static_template       BOOLEAN,
  features_allow_any_from_address BOOLEAN,

  -- Timestamps
  created_at                     TIMESTAMPTZ NOT NULL,
  updated_at                     TIMESTAMPTZ NOT NULL
)
";

/// Create the `users` and `bridge_transfers` tables if they do not exist.
///
/// Safe to run repeatedly; an existing table is left alone.
#[instrument(skip(conn))]
pub fn provision(conn: &mut PgConnection) -> DatabaseResult<()> {
    for (table, ddl) in [
        ("users", CREATE_USERS_SQL),
        ("bridge_transfers", CREATE_BRIDGE_TRANSFERS_SQL),
    ] {
        diesel::sql_query(ddl)
            .execute(conn)
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;
        info!(table, "Provisioned table");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column_map::{BRIDGE_TRANSFERS, USERS};

    #[test]
    fn every_mapped_column_exists_in_the_ddl() {
        for (mapping, ddl) in [
            (&USERS, CREATE_USERS_SQL),
            (&BRIDGE_TRANSFERS, CREATE_BRIDGE_TRANSFERS_SQL),
        ] {
            for spec in mapping.columns {
                assert!(
                    ddl.contains(spec.column),
                    "column {} missing from {} DDL",
                    spec.column,
                    mapping.table
                );
            }
        }
    }

    #[test]
    fn conflict_targets_are_primary_keys() {
        assert!(CREATE_USERS_SQL.contains("id          TEXT PRIMARY KEY"));
        assert!(CREATE_BRIDGE_TRANSFERS_SQL.contains("TEXT PRIMARY KEY"));
    }
}

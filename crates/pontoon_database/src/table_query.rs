//! JSON row queries for the history views.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use pontoon_error::{DatabaseError, DatabaseErrorKind};
use serde_json::Value as JsonValue;
use tracing::{debug, instrument};

const MAX_ROWS: i64 = 500;

/// Fetch the most recently created rows of a table as JSON values.
///
/// Rows come back through `row_to_json`, newest first by `created_at`, so
/// callers render them without a per-table row type. The limit is capped at
/// 500.
#[instrument(skip(conn))]
pub fn recent_rows(
    conn: &mut PgConnection,
    table_name: &str,
    limit: i64,
) -> DatabaseResult<Vec<JsonValue>> {
    // Identifier, not a bind parameter: sanitize before splicing.
    if !valid_identifier(table_name) {
        return Err(DatabaseError::new(DatabaseErrorKind::InvalidIdentifier(
            table_name.to_string(),
        )));
    }

    let limit = limit.clamp(1, MAX_ROWS);
    let query = format!(
        "SELECT row_to_json(t) as json FROM \
         (SELECT * FROM {table_name} ORDER BY created_at DESC LIMIT {limit}) t"
    );
    debug!(query = %query, "Fetching recent rows");

    #[derive(QueryableByName)]
    struct JsonRow {
        #[diesel(sql_type = diesel::sql_types::Json)]
        json: JsonValue,
    }

    let rows = diesel::sql_query(&query)
        .load::<JsonRow>(conn)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;

    Ok(rows.into_iter().map(|row| row.json).collect())
}

fn valid_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_sanitization_rejects_injection() {
        assert!(valid_identifier("bridge_transfers"));
        assert!(valid_identifier("users"));
        assert!(!valid_identifier("bridge_transfers; DROP TABLE users"));
        assert!(!valid_identifier(""));
    }
}

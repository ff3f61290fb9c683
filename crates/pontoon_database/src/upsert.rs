//! Atomic upsert of flattened API payloads.

use crate::DatabaseResult;
use crate::column_map::{ColumnType, MappedRow, TableMapping};
use crate::normalize::normalize;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};
use pontoon_core::flatten;
use pontoon_error::{DatabaseError, DatabaseErrorKind};
use serde_json::Value;
use tracing::{debug, instrument};

/// Flatten, normalize, map, and upsert one API payload into its table.
///
/// The record must carry an `id` field; without one the call fails before
/// any SQL is built. The statement is a single
/// `INSERT … ON CONFLICT (id) DO UPDATE SET col = EXCLUDED.col`, executed
/// and committed as one transaction — on any execution error the
/// transaction rolls back and the error surfaces. Replaying the same
/// logical record is safe: the second application leaves the row equal to
/// its own column values.
///
/// Returns the number of columns written, for observability.
#[instrument(skip(conn, record), fields(table = mapping.table))]
pub fn upsert_record(
    conn: &mut PgConnection,
    mapping: &TableMapping,
    record: &Value,
) -> DatabaseResult<usize> {
    let statement = UpsertStatement::prepare(mapping, record)?;
    debug!(columns = statement.mapped.len(), "Executing upsert");

    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        let mut query = diesel::sql_query(&statement.sql).into_boxed::<Pg>();
        for (spec, value) in statement.mapped.columns.iter().zip(&statement.mapped.values) {
            query = query.bind::<Nullable<Text>, _>(bind_text(value, spec.ty));
        }
        query.execute(conn)
    })
    .map_err(DatabaseError::from)?;

    Ok(statement.mapped.len())
}

/// A validated, fully built upsert, ready to bind and execute.
#[derive(Debug)]
struct UpsertStatement {
    sql: String,
    mapped: MappedRow,
}

impl UpsertStatement {
    /// Validate the record and build the statement. No I/O happens here;
    /// every failure in this phase leaves the database untouched.
    fn prepare(mapping: &TableMapping, record: &Value) -> DatabaseResult<Self> {
        let raw = record.as_object().ok_or_else(|| {
            DatabaseError::new(DatabaseErrorKind::Serialization(
                "record must be a JSON object".to_string(),
            ))
        })?;

        if !raw.contains_key("id") {
            return Err(DatabaseError::new(DatabaseErrorKind::MissingIdentifier(
                "id".to_string(),
            )));
        }

        let flat = flatten(raw);
        let normalized = normalize(&flat);
        let mapped = mapping.map(&normalized)?;
        let sql = build_upsert_sql(mapping.table, &mapped);
        Ok(Self { sql, mapped })
    }
}

/// Build the parameterized statement for one mapped row.
///
/// Placeholders carry explicit casts (`$1::numeric(36,18)`) because the
/// binds are all text; Postgres turns them into the typed columns at
/// execution.
fn build_upsert_sql(table: &str, mapped: &MappedRow) -> String {
    let column_list = mapped
        .columns
        .iter()
        .map(|spec| spec.column)
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = mapped
        .columns
        .iter()
        .enumerate()
        .map(|(index, spec)| format!("${}::{}", index + 1, spec.ty.cast()))
        .collect::<Vec<_>>()
        .join(", ");
    let conflict_updates = mapped
        .columns
        .iter()
        .filter(|spec| spec.column != "id")
        .map(|spec| format!("{col} = EXCLUDED.{col}", col = spec.column))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {table} ({column_list}) VALUES ({placeholders}) \
         ON CONFLICT (id) DO UPDATE SET {conflict_updates}"
    )
}

/// Render one JSON value as the text bound for its column.
fn bind_text(value: &Value, ty: ColumnType) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Array(items) if ty == ColumnType::TextArray => Some(pg_array_literal(items)),
        other => Some(other.to_string()),
    }
}

/// Render a JSON array as a Postgres array literal: `{"ach","wire"}`.
fn pg_array_literal(items: &[Value]) -> String {
    let elements = items
        .iter()
        .map(|item| {
            let text = match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
        })
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{elements}}}")
}

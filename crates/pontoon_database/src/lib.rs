//! PostgreSQL persistence for Pontoon.
//!
//! This crate owns the flatten → normalize → map → upsert pipeline that lands
//! Bridge API payloads in flat relational tables, plus schema provisioning
//! and the JSON row queries behind the history views.
//!
//! # Example
//!
//! ```rust,ignore
//! use pontoon_database::{BRIDGE_TRANSFERS, establish_connection, upsert_record};
//!
//! let mut conn = establish_connection()?;
//! let written = upsert_record(&mut conn, &BRIDGE_TRANSFERS, &transfer_json)?;
//! println!("wrote {written} columns");
//! ```

mod column_map;
mod connection;
mod normalize;
mod schema;
mod table_query;
mod upsert;

pub use column_map::{BRIDGE_TRANSFERS, ColumnSpec, ColumnType, MappedRow, TableMapping, USERS};
pub use connection::establish_connection;
pub use normalize::{normalize, parse_utc_timestamp};
pub use schema::provision;
pub use table_query::recent_rows;
pub use upsert::upsert_record;

use pontoon_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;

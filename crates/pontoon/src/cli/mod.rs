//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! pontoon binary. Each handler carries its own per-request state: the
//! parsed arguments plus freshly loaded configuration, nothing ambient.

mod accounts;
mod commands;
mod confirmation;
mod db;
mod export;
mod fees;
mod ingest;
mod logs;
mod transfers;

pub use accounts::handle_account_command;
pub use commands::{
    AccountCommands, Cli, Commands, DbCommands, ExportCommands, FeeCommands, IngestCommands,
    LogCommands, OutputFormat, TransferCommands,
};
pub use confirmation::handle_confirmation;
pub use db::handle_db_command;
pub use export::handle_export_command;
pub use fees::handle_fee_command;
pub use ingest::handle_ingest_command;
pub use logs::handle_log_command;
pub use transfers::handle_transfer_command;

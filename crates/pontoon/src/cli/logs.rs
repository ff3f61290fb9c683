//! Operation log history handlers.

use super::commands::LogCommands;
use pontoon_error::PontoonResult;
use pontoon_export::{FeeLogEntry, OperationLog, TransferLogEntry};

/// Handle log history commands.
pub fn handle_log_command(cmd: LogCommands) -> PontoonResult<()> {
    match cmd {
        LogCommands::Fees { limit, path } => {
            let log = OperationLog::<FeeLogEntry>::new(path);
            let entries = log.tail(limit)?;
            if entries.is_empty() {
                println!("No fee operations recorded yet.");
                return Ok(());
            }
            println!(
                "{:<28} {:<24} {:<16} {:<8} {}",
                "Timestamp", "Customer", "Address", "Fee", "Status"
            );
            for entry in entries {
                println!(
                    "{:<28} {:<24} {:<16} {:<8} {}",
                    entry.timestamp,
                    entry.customer_id,
                    entry.liq_address,
                    entry.fee_val,
                    entry.status_code
                );
            }
            Ok(())
        }

        LogCommands::Transfers { limit, path } => {
            let log = OperationLog::<TransferLogEntry>::new(path);
            let entries = log.tail(limit)?;
            if entries.is_empty() {
                println!("No transfer submissions recorded yet.");
                return Ok(());
            }
            println!(
                "{:<28} {:<18} {:<12} {:<10} {:<10} {}",
                "Timestamp", "Type", "Amount", "Source", "Destination", "Status"
            );
            for entry in entries {
                println!(
                    "{:<28} {:<18} {:<12} {:<10} {:<10} {}",
                    entry.timestamp,
                    entry.transfer_type,
                    entry.amount,
                    entry.source_rail,
                    entry.destination_rail,
                    entry.status_code
                );
            }
            Ok(())
        }
    }
}

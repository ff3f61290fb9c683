//! CSV export command handlers.

use super::commands::ExportCommands;
use chrono::Utc;
use pontoon_client::{BridgeClient, BridgeConfig};
use pontoon_error::PontoonResult;
use pontoon_export::{records_from_response, write_csv_file};
use std::path::PathBuf;

/// Handle export commands.
pub async fn handle_export_command(cmd: ExportCommands) -> PontoonResult<()> {
    match cmd {
        ExportCommands::Drains {
            limit,
            updated_before_ms,
            output,
        } => {
            let client = BridgeClient::new(&BridgeConfig::load()?);
            let response = client.drains_raw(limit, updated_before_ms).await?;
            let records = records_from_response(&response)?;

            let path = output.unwrap_or_else(|| {
                PathBuf::from(format!(
                    "bridge_transfers_{}.csv",
                    Utc::now().format("%Y%m%d_%H%M%S")
                ))
            });
            write_csv_file(&path, &records)?;

            println!("Data successfully saved to {}", path.display());
            println!("Total records exported: {}", records.len());
            Ok(())
        }
    }
}

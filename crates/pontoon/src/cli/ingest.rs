//! Ingest command handlers: fetch API payloads and upsert them.

use super::commands::IngestCommands;
use pontoon_client::{BridgeClient, BridgeConfig};
use pontoon_database::{BRIDGE_TRANSFERS, USERS, establish_connection, upsert_record};
use pontoon_error::PontoonResult;
use tracing::info;

/// Handle ingest commands.
pub async fn handle_ingest_command(cmd: IngestCommands) -> PontoonResult<()> {
    let client = BridgeClient::new(&BridgeConfig::load()?);

    match cmd {
        IngestCommands::Transfer { transfer_ids } => {
            for transfer_id in &transfer_ids {
                let payload = client.transfer_raw(transfer_id).await?;
                // One connection per operation, released on every exit path.
                let mut conn = establish_connection()?;
                let written = upsert_record(&mut conn, &BRIDGE_TRANSFERS, &payload)?;
                info!(transfer_id = %transfer_id, columns = written, "Upserted transfer");
                println!("{transfer_id}: wrote {written} columns");
            }
        }

        IngestCommands::Customer { customer_ids } => {
            for customer_id in &customer_ids {
                let payload = client.customer_raw(customer_id).await?;
                let mut conn = establish_connection()?;
                let written = upsert_record(&mut conn, &USERS, &payload)?;
                info!(customer_id = %customer_id, columns = written, "Upserted customer");
                println!("{customer_id}: wrote {written} columns");
            }
        }
    }
    Ok(())
}

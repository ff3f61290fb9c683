//! Pontoon CLI binary.
//!
//! This binary provides command-line access to the operations toolkit:
//! - Look up and modify developer fees on liquidation addresses and transfers
//! - Create virtual accounts and submit transfers across crypto/fiat rails
//! - Export API data to CSV and assemble wire-confirmation documents
//! - Provision the Postgres schema and ingest API payloads into it

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, handle_account_command, handle_confirmation, handle_db_command,
        handle_export_command, handle_fee_command, handle_ingest_command, handle_log_command,
        handle_transfer_command,
    };

    // Pick up DATABASE_URL / BRIDGE_API_KEY from a local .env when present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Fee(fee_cmd) => handle_fee_command(fee_cmd).await?,
        Commands::Account(account_cmd) => handle_account_command(account_cmd).await?,
        Commands::Transfer(transfer_cmd) => handle_transfer_command(transfer_cmd).await?,
        Commands::Ingest(ingest_cmd) => handle_ingest_command(ingest_cmd).await?,
        Commands::Export(export_cmd) => handle_export_command(export_cmd).await?,
        Commands::Log(log_cmd) => handle_log_command(log_cmd)?,
        Commands::Db(db_cmd) => handle_db_command(db_cmd)?,
        Commands::Confirmation {
            transfer_id,
            format,
            output,
        } => handle_confirmation(&transfer_id, format, output.as_deref()).await?,
    }

    Ok(())
}

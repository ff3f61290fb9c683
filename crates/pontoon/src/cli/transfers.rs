//! Transfer command handlers.

use super::commands::{OutputFormat, TransferCommands};
use chrono::Utc;
use pontoon_client::{BridgeClient, BridgeConfig};
use pontoon_core::{TransferForm, TransferKind, TransferRequest};
use pontoon_database::{establish_connection, recent_rows};
use pontoon_error::{JsonError, PontoonResult, ValidationError};
use pontoon_export::{OperationLog, TransferLogEntry};
use std::path::Path;

/// Handle transfer commands.
pub async fn handle_transfer_command(cmd: TransferCommands) -> PontoonResult<()> {
    match cmd {
        TransferCommands::Create {
            kind,
            amount,
            client_reference_id,
            on_behalf_of,
            developer_fee,
            from_rail,
            from_currency,
            from_address,
            to_rail,
            to_currency,
            to_address,
            routing_number,
            log,
        } => {
            let mut builder = TransferForm::builder();
            builder.kind(kind).amount(amount);
            if let Some(value) = client_reference_id {
                builder.client_reference_id(value);
            }
            if let Some(value) = on_behalf_of {
                builder.on_behalf_of(value);
            }
            if let Some(value) = developer_fee {
                builder.developer_fee(value);
            }
            if let Some(value) = from_rail {
                builder.from_rail(value);
            }
            if let Some(value) = from_currency {
                builder.from_currency(value);
            }
            if let Some(value) = from_address {
                builder.from_address(value);
            }
            if let Some(value) = to_rail {
                builder.to_rail(value);
            }
            if let Some(value) = to_currency {
                builder.to_currency(value);
            }
            if let Some(value) = to_address {
                builder.to_address(value);
            }
            if let Some(value) = routing_number {
                builder.routing_number(value);
            }
            let form = builder
                .build()
                .map_err(|e| ValidationError::new("form", e.to_string()))?;

            let request = form.to_request()?;
            create_transfer(kind, &request, &log).await
        }

        TransferCommands::Show {
            transfer_id,
            format,
        } => show_transfer(&transfer_id, format).await,

        TransferCommands::Recent { limit } => recent_transfers(limit),
    }
}

/// Submit a validated transfer and log the attempt, completed or not.
async fn create_transfer(
    kind: TransferKind,
    request: &TransferRequest,
    log_path: &Path,
) -> PontoonResult<()> {
    let client = BridgeClient::new(&BridgeConfig::load()?);
    let outcome = client.create_transfer(request).await?;

    println!("Status: {}", outcome.status());
    println!("{}", outcome.body());

    let entry = TransferLogEntry {
        timestamp: Utc::now().to_rfc3339(),
        transfer_type: kind.to_string(),
        amount: request.amount.clone(),
        source_rail: request.source.payment_rail.to_string(),
        source_currency: request.source.currency.to_string(),
        destination_rail: request.destination.payment_rail.to_string(),
        destination_currency: request.destination.currency.to_string(),
        status_code: *outcome.status(),
        success: *outcome.success(),
        response_id: outcome.response_id().unwrap_or_default(),
        error_message: if *outcome.success() {
            String::new()
        } else {
            outcome.body().clone()
        },
    };
    let log = OperationLog::<TransferLogEntry>::new(log_path);
    log.append(&entry)?;

    if *outcome.success() {
        println!("Transfer created; logged to {}.", log_path.display());
    } else {
        println!("Transfer failed with status {}.", outcome.status());
    }
    Ok(())
}

async fn show_transfer(transfer_id: &str, format: OutputFormat) -> PontoonResult<()> {
    let client = BridgeClient::new(&BridgeConfig::load()?);

    match format {
        OutputFormat::Json => {
            let raw = client.transfer_raw(transfer_id).await?;
            let json = serde_json::to_string_pretty(&raw)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{json}");
        }
        OutputFormat::Human | OutputFormat::Text => {
            let transfer = client.transfer(transfer_id).await?;
            let unwrap = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
            println!("Transfer {}", transfer.id);
            println!("{:-<60}", "");
            println!("{:<24} {}", "State", unwrap(&transfer.state));
            println!("{:<24} {}", "Amount", unwrap(&transfer.amount));
            println!("{:<24} {}", "Currency", unwrap(&transfer.currency));
            println!("{:<24} {}", "Developer Fee", unwrap(&transfer.developer_fee));
            println!("{:<24} {}", "On Behalf Of", unwrap(&transfer.on_behalf_of));
            if let Some(source) = &transfer.source {
                println!(
                    "{:<24} {} / {}",
                    "Source",
                    unwrap(&source.payment_rail),
                    unwrap(&source.currency)
                );
            }
            if let Some(destination) = &transfer.destination {
                println!(
                    "{:<24} {} / {}",
                    "Destination",
                    unwrap(&destination.payment_rail),
                    unwrap(&destination.currency)
                );
            }
            if let Some(receipt) = &transfer.receipt {
                println!("{:<24} {}", "Final Amount", unwrap(&receipt.final_amount));
            }
            println!("{:<24} {}", "Created At", unwrap(&transfer.created_at));
            println!("{:<24} {}", "Updated At", unwrap(&transfer.updated_at));
        }
    }
    Ok(())
}

/// List recently ingested transfers from the local database.
fn recent_transfers(limit: i64) -> PontoonResult<()> {
    let mut conn = establish_connection()?;
    let rows = recent_rows(&mut conn, "bridge_transfers", limit)?;

    println!("Recent transfers:");
    println!("{:-<80}", "");
    for row in &rows {
        let json =
            serde_json::to_string_pretty(row).map_err(|e| JsonError::new(e.to_string()))?;
        println!("{json}");
        println!("{:-<80}", "");
    }
    println!("Total: {} rows", rows.len());
    Ok(())
}

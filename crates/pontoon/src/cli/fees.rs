//! Developer fee command handlers.

use super::commands::FeeCommands;
use pontoon_client::{BridgeClient, BridgeConfig};
use pontoon_core::LiquidationAddress;
use pontoon_error::{PontoonResult, ValidationError};
use pontoon_export::{FeeLogEntry, OperationLog};
use std::path::Path;

/// Handle fee management commands.
pub async fn handle_fee_command(cmd: FeeCommands) -> PontoonResult<()> {
    match cmd {
        FeeCommands::Liquidation {
            customer_id,
            address,
            fee,
            log,
        } => update_liquidation_fee(&customer_id, &address, &fee, &log).await,

        FeeCommands::Transfer { transfer_id, fee } => {
            update_transfer_fee(&transfer_id, &fee).await
        }
    }
}

/// Look up a liquidation address by wallet, update its fee, and log the
/// attempt.
async fn update_liquidation_fee(
    customer_id: &str,
    address: &str,
    fee: &str,
    log_path: &Path,
) -> PontoonResult<()> {
    for (field, value) in [
        ("customer_id", customer_id),
        ("address", address),
        ("fee", fee),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::required(field))?;
        }
    }

    let client = BridgeClient::new(&BridgeConfig::load()?);

    let Some(liquidation) = client.find_liquidation_address(customer_id, address).await? else {
        eprintln!("No liquidation address found for {address}; check the inputs.");
        return Ok(());
    };

    let outcome = client
        .update_liquidation_fee(customer_id, &liquidation.id, fee)
        .await?;

    println!("Status: {}", outcome.status());
    println!("{}", outcome.body());

    let log = OperationLog::<FeeLogEntry>::new(log_path);
    log.append(&FeeLogEntry::new(
        customer_id,
        address,
        fee,
        *outcome.status(),
        outcome.body().clone(),
    ))?;

    if *outcome.status() == 200 {
        println!("Developer fee updated.");
        // Re-fetch so the operator sees the address as the API now has it.
        if let Some(updated) = client.find_liquidation_address(customer_id, address).await? {
            print_liquidation_address(&updated);
        }
    } else {
        println!(
            "The operation completed with status {}; see the response above.",
            outcome.status()
        );
    }

    Ok(())
}

async fn update_transfer_fee(transfer_id: &str, fee: &str) -> PontoonResult<()> {
    if transfer_id.trim().is_empty() {
        return Err(ValidationError::required("transfer_id"))?;
    }
    if fee.trim().is_empty() {
        return Err(ValidationError::required("fee"))?;
    }

    let client = BridgeClient::new(&BridgeConfig::load()?);
    let outcome = client.update_transfer_fee(transfer_id, fee).await?;

    println!("Status: {}", outcome.status());
    println!("{}", outcome.body());
    if *outcome.success() {
        println!("Transfer developer fee updated.");
    }

    Ok(())
}

fn print_liquidation_address(liquidation: &LiquidationAddress) {
    let unwrap = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());

    println!("{:-<60}", "");
    println!("{:<28} {}", "ID", liquidation.id);
    println!("{:<28} {}", "Currency", unwrap(&liquidation.currency));
    println!("{:<28} {}", "Chain", unwrap(&liquidation.chain));
    println!("{:<28} {}", "Customer ID", unwrap(&liquidation.customer_id));
    println!(
        "{:<28} {}",
        "External Account ID",
        unwrap(&liquidation.external_account_id)
    );
    println!(
        "{:<28} {}",
        "Prefunded Account ID",
        unwrap(&liquidation.prefunded_account_id)
    );
    println!(
        "{:<28} {}",
        "Destination Payment Rail",
        unwrap(&liquidation.destination_payment_rail)
    );
    println!(
        "{:<28} {}",
        "Developer Fee",
        liquidation
            .developer_fee
            .as_ref()
            .and_then(|fee| fee.percent.clone())
            .unwrap_or_else(|| "N/A".to_string())
    );
    println!(
        "{:<28} {}",
        "Destination Currency",
        unwrap(&liquidation.destination_currency)
    );
    println!("{:<28} {}", "Address", liquidation.address);
    println!(
        "{:<28} {}",
        "Destination Address",
        unwrap(&liquidation.destination_address)
    );
    println!("{:<28} {}", "State", unwrap(&liquidation.state));
    println!("{:<28} {}", "Created At", unwrap(&liquidation.created_at));
    println!("{:<28} {}", "Updated At", unwrap(&liquidation.updated_at));

    // Rail references only show up when set.
    for (label, value) in [
        ("Wire Message", &liquidation.destination_wire_message),
        ("SEPA Reference", &liquidation.destination_sepa_reference),
        ("SPEI Reference", &liquidation.destination_spei_reference),
        ("ACH Reference", &liquidation.destination_ach_reference),
        ("Blockchain Memo", &liquidation.destination_blockchain_memo),
        ("Return Address", &liquidation.return_address),
    ] {
        if let Some(value) = value {
            println!("{label:<28} {value}");
        }
    }
    println!("{:-<60}", "");
}

//! Virtual account command handlers.

use super::commands::AccountCommands;
use pontoon_client::{BridgeClient, BridgeConfig};
use pontoon_core::VirtualAccountRequest;
use pontoon_error::{ExportError, ExportErrorKind, PontoonResult, ValidationError};
use pontoon_export::{export_csv, records_from_response};

/// Handle virtual account commands.
pub async fn handle_account_command(cmd: AccountCommands) -> PontoonResult<()> {
    match cmd {
        AccountCommands::Create {
            customer_id,
            source_currency,
            destination_currency,
            payment_rail,
            address,
            blockchain_memo,
            bridge_wallet_id,
            developer_fee,
            output,
        } => {
            if customer_id.trim().is_empty() {
                return Err(ValidationError::required("customer_id"))?;
            }

            let mut builder = VirtualAccountRequest::builder()
                .source_currency(source_currency)
                .destination_currency(destination_currency)
                .payment_rail(payment_rail);
            if let Some(address) = address {
                builder = builder.address(address);
            }
            if let Some(memo) = blockchain_memo {
                builder = builder.blockchain_memo(memo);
            }
            if let Some(wallet) = bridge_wallet_id {
                builder = builder.bridge_wallet_id(wallet);
            }
            if let Some(fee) = developer_fee {
                builder = builder.developer_fee_percent(fee);
            }
            let request = builder
                .build()
                .map_err(|field| ValidationError::required(field))?;

            let client = BridgeClient::new(&BridgeConfig::load()?);
            let outcome = client.create_virtual_account(&customer_id, &request).await?;

            println!("Status: {}", outcome.status());
            println!("{}", outcome.body());

            if *outcome.status() == 201 {
                println!("Virtual account created.");
                if let Some(path) = output {
                    let pretty = outcome
                        .json()
                        .map(|value| serde_json::to_string_pretty(&value).unwrap_or_default())
                        .unwrap_or_else(|| outcome.body().clone());
                    std::fs::write(&path, pretty).map_err(|e| {
                        ExportError::new(ExportErrorKind::FileWrite(format!(
                            "{}: {}",
                            path.display(),
                            e
                        )))
                    })?;
                    println!("Account details saved to {}", path.display());
                }
            } else {
                println!(
                    "The operation completed with status {}; see the response above.",
                    outcome.status()
                );
            }
            Ok(())
        }

        AccountCommands::List {
            customer_id,
            output,
        } => {
            let client = BridgeClient::new(&BridgeConfig::load()?);
            let response = client.virtual_accounts_raw(&customer_id).await?;
            let records = records_from_response(&response)?;
            let csv = export_csv(&records);

            match output {
                Some(path) => {
                    std::fs::write(&path, csv).map_err(|e| {
                        ExportError::new(ExportErrorKind::FileWrite(format!(
                            "{}: {}",
                            path.display(),
                            e
                        )))
                    })?;
                    println!(
                        "Exported {} accounts to {}",
                        records.len(),
                        path.display()
                    );
                }
                None => print!("{csv}"),
            }
            Ok(())
        }
    }
}

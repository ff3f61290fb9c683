//! Wire-confirmation document handler.

use super::commands::OutputFormat;
use pontoon_client::{BridgeClient, BridgeConfig};
use pontoon_core::WireConfirmation;
use pontoon_error::{ExportError, ExportErrorKind, JsonError, PontoonResult, ValidationError};
use std::path::Path;

/// Fetch a transfer and its customer, assemble the confirmation document,
/// and emit it for the PDF renderer (or as a text preview).
pub async fn handle_confirmation(
    transfer_id: &str,
    format: OutputFormat,
    output: Option<&Path>,
) -> PontoonResult<()> {
    let client = BridgeClient::new(&BridgeConfig::load()?);

    let transfer = client.transfer(transfer_id).await?;
    let customer_id = transfer
        .on_behalf_of
        .clone()
        .ok_or_else(|| ValidationError::new("on_behalf_of", "missing from the transfer"))?;
    let customer = client.customer(&customer_id).await?;

    let document = WireConfirmation::from_transfer(&transfer, &customer);

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&document)
            .map_err(|e| JsonError::new(e.to_string()))?,
        OutputFormat::Text | OutputFormat::Human => document.to_string(),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|e| {
                ExportError::new(ExportErrorKind::FileWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            println!("Confirmation document written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

//! The Bridge API client.

use crate::{ApiOutcome, BridgeConfig};
use pontoon_core::{
    Customer, LiquidationAddress, Page, Transfer, TransferRequest, UpdateLiquidationFee,
    UpdateTransferFee, VirtualAccountRequest, transfer_key, virtual_account_key,
};
use pontoon_error::{ApiError, HttpError, JsonError, PontoonResult};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};

const TRANSFER_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Bridge REST API.
///
/// One outbound call per operation, no retries. Authentication is the
/// `Api-Key` header on every request.
#[derive(Debug, Clone)]
pub struct BridgeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl BridgeClient {
    /// Creates a new client from loaded configuration.
    pub fn new(config: &BridgeConfig) -> Self {
        debug!("Creating new Bridge client");
        Self {
            client: Client::new(),
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_key: config.api_key().clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a path and deserialize the JSON body, raising on non-2xx.
    async fn get_json(&self, path: &str) -> PontoonResult<Value> {
        let response = self
            .client
            .get(self.url(path))
            .header("accept", "application/json")
            .header("Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, path, "Request to Bridge API failed");
                HttpError::new(format!("Request failed: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            error!(status = %status, body = %body, path, "Bridge API returned error");
            return Err(ApiError::new(status.as_u16(), body))?;
        }

        serde_json::from_str(&body)
            .map_err(|e| JsonError::new(format!("Failed to parse response: {e}")).into())
    }

    /// Send a mutating request and fold the response into an [`ApiOutcome`].
    async fn outcome(&self, request: reqwest::RequestBuilder) -> PontoonResult<ApiOutcome> {
        let response = request
            .header("accept", "application/json")
            .header("Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Request to Bridge API failed");
                HttpError::new(format!("Request failed: {e}"))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(ApiOutcome::from_response(status, body))
    }

    /// Fetch a customer.
    #[instrument(skip(self))]
    pub async fn customer(&self, customer_id: &str) -> PontoonResult<Customer> {
        let value = self.customer_raw(customer_id).await?;
        serde_json::from_value(value)
            .map_err(|e| JsonError::new(format!("Failed to parse customer: {e}")).into())
    }

    /// Fetch a customer as raw JSON for the persistence path.
    #[instrument(skip(self))]
    pub async fn customer_raw(&self, customer_id: &str) -> PontoonResult<Value> {
        self.get_json(&format!("/customers/{customer_id}")).await
    }

    /// List a customer's liquidation addresses (first 100).
    #[instrument(skip(self))]
    pub async fn liquidation_addresses(
        &self,
        customer_id: &str,
    ) -> PontoonResult<Page<LiquidationAddress>> {
        let value = self
            .get_json(&format!(
                "/customers/{customer_id}/liquidation_addresses?limit=100"
            ))
            .await?;
        serde_json::from_value(value).map_err(|e| {
            JsonError::new(format!("Failed to parse liquidation addresses: {e}")).into()
        })
    }

    /// Find the liquidation address registered for a wallet, matching
    /// case-insensitively.
    #[instrument(skip(self))]
    pub async fn find_liquidation_address(
        &self,
        customer_id: &str,
        address: &str,
    ) -> PontoonResult<Option<LiquidationAddress>> {
        let page = self.liquidation_addresses(customer_id).await?;
        let found = page.data.into_iter().find(|liq| liq.matches_address(address));
        if found.is_none() {
            debug!(address, "No liquidation address matched");
        }
        Ok(found)
    }

    /// Update the custom developer fee on a liquidation address.
    #[instrument(skip(self, fee_percent))]
    pub async fn update_liquidation_fee(
        &self,
        customer_id: &str,
        liquidation_address_id: &str,
        fee_percent: &str,
    ) -> PontoonResult<ApiOutcome> {
        let body = UpdateLiquidationFee {
            custom_developer_fee_percent: fee_percent.to_string(),
        };
        let url = self.url(&format!(
            "/customers/{customer_id}/liquidation_addresses/{liquidation_address_id}"
        ));
        self.outcome(self.client.put(url).json(&body)).await
    }

    /// Update the developer fee percent on an existing transfer.
    #[instrument(skip(self, fee_percent))]
    pub async fn update_transfer_fee(
        &self,
        transfer_id: &str,
        fee_percent: &str,
    ) -> PontoonResult<ApiOutcome> {
        let body = UpdateTransferFee {
            developer_fee_percent: fee_percent.to_string(),
        };
        let url = self.url(&format!("/transfers/{transfer_id}"));
        self.outcome(self.client.put(url).json(&body)).await
    }

    /// Create a virtual account.
    ///
    /// The idempotency key is derived from the request itself, so
    /// resubmitting the same form cannot mint a second account.
    #[instrument(skip(self, request))]
    pub async fn create_virtual_account(
        &self,
        customer_id: &str,
        request: &VirtualAccountRequest,
    ) -> PontoonResult<ApiOutcome> {
        let url = self.url(&format!("/customers/{customer_id}/virtual_accounts"));
        self.outcome(
            self.client
                .post(url)
                .header("Idempotency-Key", virtual_account_key(customer_id, request))
                .json(request),
        )
        .await
    }

    /// List a customer's virtual accounts as raw JSON for CSV export.
    #[instrument(skip(self))]
    pub async fn virtual_accounts_raw(&self, customer_id: &str) -> PontoonResult<Value> {
        self.get_json(&format!("/customers/{customer_id}/virtual_accounts"))
            .await
    }

    /// Submit a transfer with a fresh idempotency key.
    ///
    /// A transport failure is folded into the outcome with status `0` so the
    /// operation log records the attempt; resubmitting is the operator's
    /// call.
    #[instrument(skip(self, request), fields(amount = %request.amount))]
    pub async fn create_transfer(&self, request: &TransferRequest) -> PontoonResult<ApiOutcome> {
        let response = self
            .client
            .post(self.url("/transfers"))
            .timeout(TRANSFER_TIMEOUT)
            .header("accept", "application/json")
            .header("Api-Key", &self.api_key)
            .header("Idempotency-Key", transfer_key())
            .json(request)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                Ok(ApiOutcome::from_response(status, body))
            }
            Err(e) => {
                error!(error = ?e, "Transfer submission never reached the API");
                Ok(ApiOutcome::transport_failure(format!("Connection error: {e}")))
            }
        }
    }

    /// Fetch a transfer.
    #[instrument(skip(self))]
    pub async fn transfer(&self, transfer_id: &str) -> PontoonResult<Transfer> {
        let value = self.transfer_raw(transfer_id).await?;
        serde_json::from_value(value)
            .map_err(|e| JsonError::new(format!("Failed to parse transfer: {e}")).into())
    }

    /// Fetch a transfer as raw JSON for the persistence path.
    #[instrument(skip(self))]
    pub async fn transfer_raw(&self, transfer_id: &str) -> PontoonResult<Value> {
        self.get_json(&format!("/transfers/{transfer_id}")).await
    }

    /// Fetch the liquidation-address drains feed for CSV export.
    #[instrument(skip(self))]
    pub async fn drains_raw(
        &self,
        limit: u32,
        updated_before_ms: Option<u64>,
    ) -> PontoonResult<Value> {
        let mut path = format!("/liquidation_addresses/drains?limit={limit}");
        if let Some(cutoff) = updated_before_ms {
            path.push_str(&format!("&updated_before_ms={cutoff}"));
        }
        self.get_json(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = BridgeClient::new(&BridgeConfig::new("k", "https://api.example.test/v0/"));
        assert_eq!(
            client.url("/transfers/t1"),
            "https://api.example.test/v0/transfers/t1"
        );
    }
}

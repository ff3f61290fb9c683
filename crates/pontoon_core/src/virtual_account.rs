//! Virtual account creation requests.

use crate::rail::{Currency, PaymentRail};
use serde::{Deserialize, Serialize};

/// Source side of a virtual account: the incoming fiat currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualAccountSource {
    /// Currency deposits arrive in
    pub currency: Currency,
}

/// Destination side of a virtual account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualAccountDestination {
    /// Currency funds convert to
    pub currency: Currency,
    /// Chain funds are delivered on
    pub payment_rail: PaymentRail,
    /// Wallet the customer ultimately receives funds at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// On-chain memo, for chains that support one (e.g. Stellar)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockchain_memo: Option<String>,
    /// Bridge wallet to deliver into; its chain must match the rail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_wallet_id: Option<String>,
}

/// Body of `POST /customers/{id}/virtual_accounts`.
///
/// # Examples
///
/// ```
/// use pontoon_core::{Currency, PaymentRail, VirtualAccountRequest};
///
/// let request = VirtualAccountRequest::builder()
///     .source_currency(Currency::Usd)
///     .destination_currency(Currency::Usdc)
///     .payment_rail(PaymentRail::Base)
///     .address("0xdeadbeef".to_string())
///     .build()
///     .unwrap();
/// assert_eq!(request.source.currency, Currency::Usd);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualAccountRequest {
    /// Source side
    pub source: VirtualAccountSource,
    /// Destination side
    pub destination: VirtualAccountDestination,
    /// Developer fee, as a percentage string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_fee_percent: Option<String>,
}

impl VirtualAccountRequest {
    /// Creates a new virtual account request builder.
    pub fn builder() -> VirtualAccountRequestBuilder {
        VirtualAccountRequestBuilder::default()
    }
}

/// Builder assembling a [`VirtualAccountRequest`] from flat form fields.
#[derive(Debug, Clone, Default)]
pub struct VirtualAccountRequestBuilder {
    source_currency: Option<Currency>,
    destination_currency: Option<Currency>,
    payment_rail: Option<PaymentRail>,
    address: Option<String>,
    blockchain_memo: Option<String>,
    bridge_wallet_id: Option<String>,
    developer_fee_percent: Option<String>,
}

impl VirtualAccountRequestBuilder {
    /// Currency deposits arrive in.
    pub fn source_currency(mut self, currency: Currency) -> Self {
        self.source_currency = Some(currency);
        self
    }

    /// Currency funds convert to.
    pub fn destination_currency(mut self, currency: Currency) -> Self {
        self.destination_currency = Some(currency);
        self
    }

    /// Chain funds are delivered on.
    pub fn payment_rail(mut self, rail: PaymentRail) -> Self {
        self.payment_rail = Some(rail);
        self
    }

    /// Receiving wallet address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// On-chain memo.
    pub fn blockchain_memo(mut self, memo: impl Into<String>) -> Self {
        self.blockchain_memo = Some(memo.into());
        self
    }

    /// Receiving Bridge wallet.
    pub fn bridge_wallet_id(mut self, id: impl Into<String>) -> Self {
        self.bridge_wallet_id = Some(id.into());
        self
    }

    /// Developer fee percentage.
    pub fn developer_fee_percent(mut self, fee: impl Into<String>) -> Self {
        self.developer_fee_percent = Some(fee.into());
        self
    }

    /// Assemble the request.
    ///
    /// # Errors
    ///
    /// Returns the name of the first missing required field (the currencies
    /// and the payment rail).
    pub fn build(self) -> Result<VirtualAccountRequest, String> {
        let source_currency = self.source_currency.ok_or("source_currency")?;
        let destination_currency = self.destination_currency.ok_or("destination_currency")?;
        let payment_rail = self.payment_rail.ok_or("payment_rail")?;

        Ok(VirtualAccountRequest {
            source: VirtualAccountSource {
                currency: source_currency,
            },
            destination: VirtualAccountDestination {
                currency: destination_currency,
                payment_rail,
                address: self.address.filter(|a| !a.trim().is_empty()),
                blockchain_memo: self.blockchain_memo.filter(|m| !m.trim().is_empty()),
                bridge_wallet_id: self.bridge_wallet_id.filter(|w| !w.trim().is_empty()),
            },
            developer_fee_percent: self.developer_fee_percent.filter(|f| !f.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_wire_shape() {
        let request = VirtualAccountRequest::builder()
            .source_currency(Currency::Usd)
            .destination_currency(Currency::Usdc)
            .payment_rail(PaymentRail::Stellar)
            .address("GA12345")
            .blockchain_memo("memo-1")
            .developer_fee_percent("0.5")
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "source": { "currency": "usd" },
                "destination": {
                    "currency": "usdc",
                    "payment_rail": "stellar",
                    "address": "GA12345",
                    "blockchain_memo": "memo-1"
                },
                "developer_fee_percent": "0.5"
            })
        );
    }

    #[test]
    fn missing_rail_is_reported() {
        let err = VirtualAccountRequest::builder()
            .source_currency(Currency::Usd)
            .destination_currency(Currency::Usdc)
            .build()
            .unwrap_err();
        assert_eq!(err, "payment_rail");
    }
}

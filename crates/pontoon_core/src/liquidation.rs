//! Liquidation address records and fee-update requests.

use serde::{Deserialize, Serialize};

/// A page of records as Bridge list endpoints return them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Number of records in this page, when the API reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// The records
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// The developer fee configured on a liquidation address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DeveloperFee {
    /// Fee as a percentage string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<String>,
}

/// A registered liquidation address whose incoming funds are converted and
/// forwarded per configured rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LiquidationAddress {
    /// Liquidation address identifier
    pub id: String,
    /// The blockchain address funds arrive at
    pub address: String,
    /// Incoming currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Chain the address lives on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    /// Owning customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Linked external account, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_account_id: Option<String>,
    /// Linked prefunded account, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefunded_account_id: Option<String>,
    /// Rail funds drain to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_payment_rail: Option<String>,
    /// Currency funds drain to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_currency: Option<String>,
    /// Address funds drain to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_address: Option<String>,
    /// Wire message attached to drains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_wire_message: Option<String>,
    /// SEPA reference attached to drains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_sepa_reference: Option<String>,
    /// SPEI reference attached to drains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_spei_reference: Option<String>,
    /// ACH reference attached to drains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_ach_reference: Option<String>,
    /// Blockchain memo attached to drains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_blockchain_memo: Option<String>,
    /// Return address for failed drains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_address: Option<String>,
    /// Configured developer fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_fee: Option<DeveloperFee>,
    /// Address state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Creation timestamp (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last-update timestamp (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl LiquidationAddress {
    /// Case-insensitive match against a wallet address.
    pub fn matches_address(&self, address: &str) -> bool {
        self.address.eq_ignore_ascii_case(address)
    }
}

/// Body of `PUT /customers/{id}/liquidation_addresses/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLiquidationFee {
    /// New developer fee, as a percentage string
    pub custom_developer_fee_percent: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn address_match_is_case_insensitive() {
        let liq = LiquidationAddress {
            id: "liq_1".into(),
            address: "0xAbC123".into(),
            ..Default::default()
        };
        assert!(liq.matches_address("0xabc123"));
        assert!(!liq.matches_address("0xabc124"));
    }

    #[test]
    fn page_tolerates_missing_data() {
        let page: Page<LiquidationAddress> = serde_json::from_value(json!({})).unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn fee_update_serializes_to_wire_shape() {
        let body = UpdateLiquidationFee {
            custom_developer_fee_percent: "2.5".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "custom_developer_fee_percent": "2.5" })
        );
    }
}

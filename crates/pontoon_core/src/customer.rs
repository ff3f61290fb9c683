//! Customer records returned by `GET /customers/{id}`.

use serde::{Deserialize, Serialize};

/// A Bridge customer.
///
/// Optional fields are modeled as absent rather than read through dynamic
/// lookups; anything the API omits deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Customer {
    /// Customer identifier
    pub id: String,
    /// Legal first name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Legal last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// KYC status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Enabled payment capabilities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Capabilities>,
    /// Registered postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    /// Creation timestamp (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last-update timestamp (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Customer {
    /// First and last name joined, empty parts dropped.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Payin/payout capability flags, each `enabled`/`disabled`/`pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Capabilities {
    /// Crypto payin capability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payin_crypto: Option<String>,
    /// Crypto payout capability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_crypto: Option<String>,
    /// Fiat payin capability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payin_fiat: Option<String>,
    /// Fiat payout capability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_fiat: Option<String>,
}

/// A postal address as Bridge returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PostalAddress {
    /// First street line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_line_1: Option<String>,
    /// Second street line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_line_2: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl PostalAddress {
    /// Combine the address components into a single comma-joined line,
    /// skipping empty parts.
    pub fn formatted(&self) -> String {
        [
            self.street_line_1.as_deref(),
            self.street_line_2.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.postal_code.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_with_absent_fields() {
        let customer: Customer = serde_json::from_value(json!({
            "id": "cust_1",
            "first_name": "John",
            "capabilities": { "payin_crypto": "enabled" }
        }))
        .unwrap();
        assert_eq!(customer.full_name(), "John");
        assert_eq!(
            customer.capabilities.unwrap().payin_crypto.as_deref(),
            Some("enabled")
        );
        assert!(customer.email.is_none());
    }

    #[test]
    fn formatted_address_skips_blank_parts() {
        let address = PostalAddress {
            street_line_1: Some("1 Main St".into()),
            street_line_2: Some("".into()),
            city: Some("Miami".into()),
            state: Some("FL".into()),
            postal_code: None,
            country: Some("USA".into()),
        };
        assert_eq!(address.formatted(), "1 Main St, Miami, FL, USA");
    }
}

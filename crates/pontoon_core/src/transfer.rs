//! Transfer requests, responses, and the form-level validation that guards
//! `POST /transfers`.

use crate::rail::{Currency, PaymentRail};
use pontoon_error::{PontoonResult, ValidationError};
use serde::{Deserialize, Serialize};

/// The three supported movement shapes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransferKind {
    /// Wallet to wallet across blockchains
    CryptoToCrypto,
    /// Off ramp: wallet to bank account
    CryptoToFiat,
    /// On ramp: bank account to wallet
    FiatToCrypto,
}

/// One leg of a transfer request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequestEndpoint {
    /// Rail this leg moves over
    pub payment_rail: PaymentRail,
    /// Currency on this leg
    pub currency: Currency,
    /// Funding address or account (source leg only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    /// Receiving address or account (destination leg only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    /// Bank routing number (fiat destination only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
}

/// Body of `POST /transfers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Caller-chosen reference id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_reference_id: Option<String>,
    /// Amount to move, as a decimal string
    pub amount: String,
    /// Customer on whose behalf the transfer runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    /// Fixed developer fee, as a decimal string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_fee: Option<String>,
    /// Where funds come from
    pub source: TransferRequestEndpoint,
    /// Where funds go
    pub destination: TransferRequestEndpoint,
}

/// Collected transfer-form input, validated before any request is built.
///
/// Every field is explicit, and [`TransferForm::to_request`] rejects missing
/// or kind-incompatible input with the offending field named, before any
/// I/O.
///
/// # Examples
///
/// ```
/// use pontoon_core::{Currency, PaymentRail, TransferForm, TransferKind};
///
/// let form = TransferForm::builder()
///     .kind(TransferKind::CryptoToCrypto)
///     .amount("10.00")
///     .from_rail(PaymentRail::Ethereum)
///     .from_currency(Currency::Usdc)
///     .from_address("0xfrom")
///     .to_rail(PaymentRail::Polygon)
///     .to_currency(Currency::Usdt)
///     .to_address("0xto")
///     .build()
///     .unwrap();
/// let request = form.to_request().unwrap();
/// assert_eq!(request.amount, "10.00");
/// ```
#[derive(Debug, Clone, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into, strip_option))]
pub struct TransferForm {
    /// Which movement shape this form describes.
    kind: TransferKind,

    /// Amount to move, as a decimal string.
    amount: String,

    /// Caller-chosen reference id.
    #[builder(default)]
    client_reference_id: Option<String>,

    /// Customer on whose behalf the transfer runs.
    #[builder(default)]
    on_behalf_of: Option<String>,

    /// Fixed developer fee.
    #[builder(default)]
    developer_fee: Option<String>,

    /// Source rail.
    #[builder(default)]
    from_rail: Option<PaymentRail>,

    /// Source currency.
    #[builder(default)]
    from_currency: Option<Currency>,

    /// Source wallet address or bank account.
    #[builder(default)]
    from_address: Option<String>,

    /// Destination rail.
    #[builder(default)]
    to_rail: Option<PaymentRail>,

    /// Destination currency.
    #[builder(default)]
    to_currency: Option<Currency>,

    /// Destination wallet address or bank account.
    #[builder(default)]
    to_address: Option<String>,

    /// Destination bank routing number (off ramp only).
    #[builder(default)]
    routing_number: Option<String>,
}

impl TransferForm {
    /// Creates a new transfer form builder.
    pub fn builder() -> TransferFormBuilder {
        TransferFormBuilder::default()
    }

    /// Validate the form for its kind and assemble the request body.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first missing or
    /// kind-incompatible field. Nothing is sent before this passes.
    pub fn to_request(&self) -> PontoonResult<TransferRequest> {
        if self.amount.trim().is_empty() {
            return Err(ValidationError::required("amount"))?;
        }

        let from_rail = self.from_rail.ok_or_else(|| ValidationError::required("from_rail"))?;
        let from_currency = self
            .from_currency
            .ok_or_else(|| ValidationError::required("from_currency"))?;
        let from_address = self
            .from_address
            .clone()
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| ValidationError::required("from_address"))?;
        let to_rail = self.to_rail.ok_or_else(|| ValidationError::required("to_rail"))?;
        let to_currency = self
            .to_currency
            .ok_or_else(|| ValidationError::required("to_currency"))?;
        let to_address = self
            .to_address
            .clone()
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| ValidationError::required("to_address"))?;

        // Free-form input gets the rail-kind check a select box would
        // otherwise enforce.
        match self.kind {
            TransferKind::CryptoToCrypto => {
                if from_rail.is_fiat() {
                    return Err(ValidationError::new("from_rail", "must be a blockchain"))?;
                }
                if to_rail.is_fiat() {
                    return Err(ValidationError::new("to_rail", "must be a blockchain"))?;
                }
            }
            TransferKind::CryptoToFiat => {
                if from_rail.is_fiat() {
                    return Err(ValidationError::new("from_rail", "must be a blockchain"))?;
                }
                if to_rail.is_crypto() {
                    return Err(ValidationError::new("to_rail", "must be a fiat rail"))?;
                }
            }
            TransferKind::FiatToCrypto => {
                if from_rail.is_crypto() {
                    return Err(ValidationError::new("from_rail", "must be a fiat rail"))?;
                }
                if to_rail.is_fiat() {
                    return Err(ValidationError::new("to_rail", "must be a blockchain"))?;
                }
            }
        }

        // Routing numbers ride only on the off-ramp destination leg.
        let routing_number = match self.kind {
            TransferKind::CryptoToFiat => {
                self.routing_number.clone().filter(|r| !r.trim().is_empty())
            }
            _ => None,
        };

        Ok(TransferRequest {
            client_reference_id: self.client_reference_id.clone(),
            amount: self.amount.clone(),
            on_behalf_of: self.on_behalf_of.clone(),
            developer_fee: self.developer_fee.clone(),
            source: TransferRequestEndpoint {
                payment_rail: from_rail,
                currency: from_currency,
                from_address: Some(from_address),
                to_address: None,
                routing_number: None,
            },
            destination: TransferRequestEndpoint {
                payment_rail: to_rail,
                currency: to_currency,
                from_address: None,
                to_address: Some(to_address),
                routing_number,
            },
        })
    }
}

/// Body of `PUT /transfers/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTransferFee {
    /// New developer fee, as a percentage string
    pub developer_fee_percent: String,
}

/// One leg of a transfer as the API reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TransferLeg {
    /// Rail this leg moved over
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_rail: Option<String>,
    /// Currency on this leg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Funding address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    /// Receiving address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    /// Linked external account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_account_id: Option<String>,
    /// Linked Bridge wallet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_wallet_id: Option<String>,
    /// Bank beneficiary name, once funds land
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_beneficiary_name: Option<String>,
    /// Bank routing number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_routing_number: Option<String>,
    /// Bank account number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_number: Option<String>,
    /// Bank name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Incoming wire message id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imad: Option<String>,
    /// Outgoing wire message id (legacy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omad: Option<String>,
    /// Payment scheme, e.g. `reversed_payment`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_scheme: Option<String>,
    /// Wire message attached at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wire_message: Option<String>,
    /// SEPA reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sepa_reference: Option<String>,
    /// SWIFT reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_reference: Option<String>,
    /// SPEI reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spei_reference: Option<String>,
    /// SWIFT charge bearer, e.g. `our`/`shared`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_charges: Option<String>,
    /// ACH reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_reference: Option<String>,
    /// Blockchain memo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockchain_memo: Option<String>,
    /// Deposit id assigned during processing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_id: Option<String>,
}

/// Funding instructions present when the caller must deposit first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DepositInstructions {
    /// Rail to deposit over
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_rail: Option<String>,
    /// Allowed rails, when the API offers several
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_rails: Option<Vec<String>>,
    /// Amount to deposit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Deposit currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Memo or reference required by bank rails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_message: Option<String>,
    /// Address to fund from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    /// Address to deposit to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    /// Beneficiary name for fiat rails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_beneficiary_name: Option<String>,
    /// Routing number for fiat rails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_routing_number: Option<String>,
    /// Account number for fiat rails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_number: Option<String>,
    /// Receiving bank name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// IBAN for SEPA deposits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// BIC for SEPA deposits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    /// Account holder name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    /// Receiving bank address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_address: Option<String>,
}

/// Receipt breakdown attached once a transfer settles.
///
/// `gas_fe` mirrors an upstream naming slip that still appears in responses;
/// the persistence path folds it into `gas_fee`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Receipt {
    /// Amount before fees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_amount: Option<String>,
    /// Developer fee charged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_fee: Option<String>,
    /// Exchange fee charged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_fee: Option<String>,
    /// Amount after fees, before gas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal_amount: Option<String>,
    /// Gas fee charged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_fee: Option<String>,
    /// Misspelled gas fee as some responses still send it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_fe: Option<String>,
    /// Amount delivered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_amount: Option<String>,
    /// Source chain transaction hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_tx_hash: Option<String>,
    /// Destination chain transaction hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_tx_hash: Option<String>,
    /// Hosted receipt URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Feature flags set on a transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TransferFeatures {
    /// Whether the funded amount may differ from the requested amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flexible_amount: Option<bool>,
    /// Whether this transfer is a reusable static template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_template: Option<bool>,
    /// Whether any from address may fund it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_any_from_address: Option<bool>,
}

/// A transfer as `GET /transfers/{id}` reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Transfer {
    /// Transfer identifier
    pub id: String,
    /// Caller-chosen reference id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_reference_id: Option<String>,
    /// Lifecycle state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Customer on whose behalf the transfer ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    /// Transfer amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Fixed developer fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_fee: Option<String>,
    /// Settlement currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Source leg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<TransferLeg>,
    /// Destination leg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<TransferLeg>,
    /// Funding instructions, when deposit is required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_deposit_instructions: Option<DepositInstructions>,
    /// Settlement receipt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
    /// Feature flags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<TransferFeatures>,
    /// Creation timestamp (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last-update timestamp (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pontoon_error::PontoonErrorKind;
    use serde_json::json;

    fn crypto_form() -> TransferFormBuilder {
        let mut builder = TransferForm::builder();
        builder
            .kind(TransferKind::CryptoToCrypto)
            .amount("10.00")
            .from_rail(PaymentRail::Ethereum)
            .from_currency(Currency::Usdc)
            .from_address("0xfrom")
            .to_rail(PaymentRail::Polygon)
            .to_currency(Currency::Usdt)
            .to_address("0xto");
        builder
    }

    #[test]
    fn crypto_to_crypto_builds_wire_shape() {
        let request = crypto_form().build().unwrap().to_request().unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "amount": "10.00",
                "source": {
                    "payment_rail": "ethereum",
                    "currency": "usdc",
                    "from_address": "0xfrom"
                },
                "destination": {
                    "payment_rail": "polygon",
                    "currency": "usdt",
                    "to_address": "0xto"
                }
            })
        );
    }

    #[test]
    fn off_ramp_carries_routing_number() {
        let form = TransferForm::builder()
            .kind(TransferKind::CryptoToFiat)
            .amount("250.00")
            .on_behalf_of("cust_1")
            .developer_fee("1.0")
            .from_rail(PaymentRail::Base)
            .from_currency(Currency::Usdc)
            .from_address("0xfrom")
            .to_rail(PaymentRail::Wire)
            .to_currency(Currency::Usd)
            .to_address("000123456789")
            .routing_number("021000021")
            .build()
            .unwrap();
        let request = form.to_request().unwrap();
        assert_eq!(
            request.destination.routing_number.as_deref(),
            Some("021000021")
        );
        assert_eq!(request.on_behalf_of.as_deref(), Some("cust_1"));
    }

    #[test]
    fn routing_number_dropped_off_the_on_ramp() {
        let form = TransferForm::builder()
            .kind(TransferKind::FiatToCrypto)
            .amount("100.00")
            .from_rail(PaymentRail::Sepa)
            .from_currency(Currency::Eur)
            .from_address("DE89370400440532013000")
            .to_rail(PaymentRail::Ethereum)
            .to_currency(Currency::Eurc)
            .to_address("0xto")
            .routing_number("021000021")
            .build()
            .unwrap();
        let request = form.to_request().unwrap();
        assert!(request.destination.routing_number.is_none());
    }

    #[test]
    fn missing_fields_are_named() {
        let mut builder = crypto_form();
        builder.to_address("");
        let err = builder.build().unwrap().to_request().unwrap_err();
        match err.kind() {
            PontoonErrorKind::Validation(v) => assert_eq!(v.field, "to_address"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn kind_and_rail_must_agree() {
        let mut builder = crypto_form();
        builder.kind(TransferKind::CryptoToFiat);
        let err = builder.build().unwrap().to_request().unwrap_err();
        match err.kind() {
            PontoonErrorKind::Validation(v) => assert_eq!(v.field, "to_rail"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn receipt_keeps_the_upstream_misspelling_distinct() {
        let transfer: Transfer = serde_json::from_value(json!({
            "id": "transfer_1",
            "receipt": { "gas_fe": "0.002" }
        }))
        .unwrap();
        let receipt = transfer.receipt.unwrap();
        assert_eq!(receipt.gas_fe.as_deref(), Some("0.002"));
        assert!(receipt.gas_fee.is_none());
    }
}

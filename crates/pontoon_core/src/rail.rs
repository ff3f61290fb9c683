//! Payment rail and currency vocabularies.

use serde::{Deserialize, Serialize};

/// The network or scheme over which funds move.
///
/// Bridge uses one vocabulary for both blockchains and fiat schemes; which
/// rails are legal for a given transfer leg depends on the transfer kind.
///
/// # Examples
///
/// ```
/// use pontoon_core::PaymentRail;
/// use std::str::FromStr;
///
/// let rail = PaymentRail::from_str("avalanche_c_chain").unwrap();
/// assert!(rail.is_crypto());
/// assert_eq!(rail.to_string(), "avalanche_c_chain");
/// ```
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
pub enum PaymentRail {
    /// Ethereum mainnet
    Ethereum,
    /// Polygon PoS
    Polygon,
    /// Arbitrum One
    Arbitrum,
    /// Optimism
    Optimism,
    /// Base
    Base,
    /// Avalanche C-Chain
    AvalancheCChain,
    /// Solana
    Solana,
    /// Stellar
    Stellar,
    /// Tron
    Tron,
    /// Domestic wire
    Wire,
    /// ACH
    Ach,
    /// SEPA
    Sepa,
    /// SPEI
    Spei,
    /// SWIFT
    Swift,
}

impl PaymentRail {
    /// Whether this rail is a blockchain.
    pub fn is_crypto(&self) -> bool {
        !self.is_fiat()
    }

    /// Whether this rail is a fiat scheme.
    pub fn is_fiat(&self) -> bool {
        matches!(
            self,
            PaymentRail::Wire
                | PaymentRail::Ach
                | PaymentRail::Sepa
                | PaymentRail::Spei
                | PaymentRail::Swift
        )
    }
}

/// Currencies accepted on either side of a transfer or virtual account.
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
pub enum Currency {
    /// US dollar
    Usd,
    /// Euro
    Eur,
    /// Mexican peso
    Mxn,
    /// DAI stablecoin
    Dai,
    /// Euro Coin
    Eurc,
    /// PayPal USD
    Pyusd,
    /// USDB stablecoin
    Usdb,
    /// USD Coin
    Usdc,
    /// Tether
    Usdt,
}

impl Currency {
    /// Whether this is a fiat currency.
    pub fn is_fiat(&self) -> bool {
        matches!(self, Currency::Usd | Currency::Eur | Currency::Mxn)
    }

    /// Whether this is a stablecoin.
    pub fn is_stablecoin(&self) -> bool {
        !self.is_fiat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn rails_round_trip_snake_case() {
        for rail in [
            PaymentRail::Ethereum,
            PaymentRail::AvalancheCChain,
            PaymentRail::Wire,
            PaymentRail::Sepa,
        ] {
            let text = rail.to_string();
            assert_eq!(PaymentRail::from_str(&text).unwrap(), rail);
        }
    }

    #[test]
    fn fiat_and_crypto_are_disjoint() {
        assert!(PaymentRail::Wire.is_fiat());
        assert!(!PaymentRail::Wire.is_crypto());
        assert!(PaymentRail::Tron.is_crypto());
        assert!(Currency::Mxn.is_fiat());
        assert!(Currency::Usdt.is_stablecoin());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&PaymentRail::AvalancheCChain).unwrap();
        assert_eq!(json, "\"avalanche_c_chain\"");
    }
}

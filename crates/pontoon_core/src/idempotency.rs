//! Idempotency key derivation.
//!
//! Virtual account creation reuses a key derived from the request itself, so
//! resubmitting the same form cannot mint a second account. Transfers get a
//! fresh random key per call; retrying a failed submission is an explicit
//! operator decision, never automatic.

use crate::virtual_account::VirtualAccountRequest;
use uuid::Uuid;

/// Derive the idempotency key for virtual account creation.
///
/// Concatenates customer id, receiving address, both currencies, and the
/// payment rail, in that order.
///
/// # Examples
///
/// ```
/// use pontoon_core::{Currency, PaymentRail, VirtualAccountRequest, virtual_account_key};
///
/// let request = VirtualAccountRequest::builder()
///     .source_currency(Currency::Usd)
///     .destination_currency(Currency::Usdc)
///     .payment_rail(PaymentRail::Base)
///     .address("0xabc")
///     .build()
///     .unwrap();
/// assert_eq!(virtual_account_key("cust_1", &request), "cust_10xabcusdusdcbase");
/// ```
pub fn virtual_account_key(customer_id: &str, request: &VirtualAccountRequest) -> String {
    format!(
        "{}{}{}{}{}",
        customer_id,
        request.destination.address.as_deref().unwrap_or_default(),
        request.source.currency,
        request.destination.currency,
        request.destination.payment_rail,
    )
}

/// Mint a fresh idempotency key for one `POST /transfers` call.
pub fn transfer_key() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rail::{Currency, PaymentRail};

    #[test]
    fn virtual_account_key_is_deterministic() {
        let request = VirtualAccountRequest::builder()
            .source_currency(Currency::Eur)
            .destination_currency(Currency::Eurc)
            .payment_rail(PaymentRail::Ethereum)
            .address("0xDEF")
            .build()
            .unwrap();
        let first = virtual_account_key("cust_2", &request);
        let second = virtual_account_key("cust_2", &request);
        assert_eq!(first, second);
        assert_eq!(first, "cust_20xDEFeureurcethereum");
    }

    #[test]
    fn transfer_keys_are_unique_per_call() {
        assert_ne!(transfer_key(), transfer_key());
    }
}

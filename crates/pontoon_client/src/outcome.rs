//! Structured outcomes for mutating API calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The result of a mutating Bridge call, successful or not.
///
/// Non-2xx statuses and transport failures both land here as data: the
/// operator sees the status code and raw body, and the operation log records
/// the attempt either way. A transport failure carries status `0`, marking
/// an attempt that never produced a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ApiOutcome {
    /// Upstream HTTP status; `0` when the request never completed
    status: u16,
    /// Whether the upstream answered 2xx
    success: bool,
    /// Raw response body, or the transport error message
    body: String,
}

impl ApiOutcome {
    /// Outcome of a completed HTTP exchange.
    pub fn from_response(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            success: (200..300).contains(&status),
            body: body.into(),
        }
    }

    /// Outcome of a request that never reached the API.
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            success: false,
            body: message.into(),
        }
    }

    /// Parse the body as JSON, if it is JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// The `id` field of the response body, when present.
    pub fn response_id(&self) -> Option<String> {
        self.json()?
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ranges_decide_success() {
        assert!(ApiOutcome::from_response(201, "{}").success());
        assert!(!ApiOutcome::from_response(422, "{}").success());
        assert!(!ApiOutcome::transport_failure("timed out").success());
    }

    #[test]
    fn response_id_reads_the_body() {
        let outcome = ApiOutcome::from_response(200, r#"{"id":"transfer_9"}"#);
        assert_eq!(outcome.response_id().as_deref(), Some("transfer_9"));
        assert!(ApiOutcome::from_response(200, "not json").response_id().is_none());
    }
}

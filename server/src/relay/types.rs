//! Relay Types
//!
//! Inbound notification, outbound record, and relay outcome/error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inbound IPN notification, decoded from the form-encoded webhook body.
///
/// Every field is optional: the provider sends different field sets per
/// transaction type, and unknown fields are ignored at the boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpnNotification {
    /// Transaction type discriminator (e.g. `subscr_signup`, `subscr_cancel`)
    pub txn_type: Option<String>,
    /// Subscriber identifier assigned by the provider
    pub subscr_id: Option<String>,
    /// Application-defined passthrough; JSON-encoded `[room, art]` on signups
    pub custom: Option<String>,
    /// "1" marks sandbox traffic
    pub test_ipn: Option<String>,
}

/// Outbound record in the table API's row-create envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRecord {
    pub fields: SignupFields,
}

/// Column values for one created row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupFields {
    #[serde(rename = "Subscriber ID")]
    pub subscriber_id: String,
    #[serde(rename = "Room")]
    pub room: String,
    #[serde(rename = "Art")]
    pub art: String,
}

/// Status and body returned by the table API.
///
/// The relay logs both but does not branch on the status: a non-2xx from the
/// table API is not distinguished from success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResponse {
    pub status: u16,
    pub body: String,
}

/// Outcome of handling one notification.
#[derive(Debug)]
pub enum RelayOutcome {
    /// Record built and sent; carries the remote response.
    Forwarded(TableResponse),
    /// Non-signup transaction, ignored without an outbound call.
    Skipped,
}

/// Relay errors.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Missing field `{0}` on signup notification")]
    MissingField(&'static str),
    #[error("Malformed custom payload: {0}")]
    MalformedCustom(String),
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Table API request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

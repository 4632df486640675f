//! Notification → Record Translation
//!
//! Pure: the outbound record is fully determined by the inbound notification.
//! No I/O happens here.

use super::types::{IpnNotification, RelayError, SignupFields, SignupRecord};

/// Transaction type that triggers record creation. All others are ignored.
const SIGNUP_TXN_TYPE: &str = "subscr_signup";

/// Parse the `custom` field: a JSON array of strings with at least one element.
fn parse_custom(raw: &str) -> Result<Vec<String>, RelayError> {
    let values: Vec<String> =
        serde_json::from_str(raw).map_err(|e| RelayError::MalformedCustom(e.to_string()))?;
    if values.is_empty() {
        return Err(RelayError::MalformedCustom("empty array".into()));
    }
    Ok(values)
}

/// Build the outbound record for a signup notification.
///
/// Returns `Ok(None)` when the transaction type is not a signup. On signups,
/// the first element of `custom` becomes the Room and the last becomes the
/// Art (equal when the array has a single element).
pub fn build_signup_record(ipn: &IpnNotification) -> Result<Option<SignupRecord>, RelayError> {
    if ipn.txn_type.as_deref() != Some(SIGNUP_TXN_TYPE) {
        return Ok(None);
    }

    let subscriber_id = ipn
        .subscr_id
        .as_deref()
        .ok_or(RelayError::MissingField("subscr_id"))?;
    let raw_custom = ipn
        .custom
        .as_deref()
        .ok_or(RelayError::MissingField("custom"))?;
    let custom = parse_custom(raw_custom)?;

    // Non-empty is guaranteed by parse_custom
    let room = custom.first().cloned().unwrap_or_default();
    let art = custom.last().cloned().unwrap_or_default();

    Ok(Some(SignupRecord {
        fields: SignupFields {
            subscriber_id: subscriber_id.to_string(),
            room,
            art,
        },
    }))
}

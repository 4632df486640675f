//! Webhook Handler
//!
//! The one inbound route. Always acknowledges the provider with `200 OK`;
//! skipped transactions and forwarding failures are logged, never surfaced
//! to the caller.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use tracing::{error, info};

use super::record;
use super::types::{IpnNotification, RelayError, RelayOutcome};
use crate::api::AppState;

/// Translate one notification and forward it: guard, parse, build, send.
pub async fn handle_notification(
    state: &AppState,
    ipn: &IpnNotification,
) -> Result<RelayOutcome, RelayError> {
    let Some(record) = record::build_signup_record(ipn)? else {
        return Ok(RelayOutcome::Skipped);
    };

    let body = serde_json::to_string(&record)?;
    let response = state.transport.send_record(body).await?;

    Ok(RelayOutcome::Forwarded(response))
}

/// POST /webhook
pub async fn receive_webhook(
    State(state): State<AppState>,
    Form(ipn): Form<IpnNotification>,
) -> StatusCode {
    // Log the raw notification before any filtering
    info!(notification = ?ipn, "Received IPN notification");

    match handle_notification(&state, &ipn).await {
        Ok(RelayOutcome::Forwarded(response)) => {
            info!(status = response.status, body = %response.body, "Record forwarded");
        }
        Ok(RelayOutcome::Skipped) => {
            info!(txn_type = ?ipn.txn_type, "Ignoring non-signup transaction");
        }
        Err(e) => {
            error!(error = %e, "Failed to relay notification");
        }
    }

    StatusCode::OK
}

//! Webhook Relay
//!
//! Translates inbound payment-provider IPN notifications into table records
//! and forwards them to the configured row-create endpoint. One-shot: no
//! retries, no queuing, no persistence.

pub mod handlers;
pub mod record;
pub mod transport;
pub mod types;

//! IPN Relay Server
//!
//! Stateless webhook relay: accepts payment-provider IPN notifications on a
//! single inbound route and forwards signup records to an Airtable table.

pub mod api;
pub mod config;
pub mod relay;

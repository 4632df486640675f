//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Row-create endpoint of the target table (fixed base and table).
const DEFAULT_TABLE_URL: &str = "https://api.airtable.com/v0/appOOHY2yfP6zFXzf/Webhook";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// Bearer credential for the table API
    pub airtable_api_key: String,

    /// Row-create endpoint of the target table
    pub airtable_table_url: String,

    /// Timeout for the outbound POST in seconds (default: 10)
    pub outbound_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            airtable_api_key: env::var("AIRTABLE_API_KEY")
                .context("AIRTABLE_API_KEY must be set")?,
            airtable_table_url: env::var("AIRTABLE_TABLE_URL")
                .unwrap_or_else(|_| DEFAULT_TABLE_URL.into()),
            outbound_timeout_secs: env::var("OUTBOUND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            airtable_api_key: "test-key".into(),
            airtable_table_url: "https://api.airtable.example/v0/appTEST/Webhook".into(),
            outbound_timeout_secs: 10,
        }
    }
}

//! Table API Transport
//!
//! Single-shot JSON POST to the configured row-create endpoint with bearer
//! auth. No retries and no status-based branching: the caller logs whatever
//! comes back.

use std::time::Duration;

use async_trait::async_trait;

use super::types::{RelayError, TableResponse};
use crate::config::Config;

/// Capability to send one serialized record and return status + body.
#[async_trait]
pub trait TableTransport: Send + Sync {
    async fn send_record(&self, record_json: String) -> Result<TableResponse, RelayError>;
}

/// Production transport: HTTPS POST to the table API.
pub struct HttpTableTransport {
    client: reqwest::Client,
    table_url: String,
    api_key: String,
}

impl HttpTableTransport {
    /// Build a transport from configuration, with a bounded request timeout.
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.outbound_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            table_url: config.airtable_table_url.clone(),
            api_key: config.airtable_api_key.clone(),
        })
    }

    /// Build the outbound request without sending it.
    fn build_request(&self, record_json: String) -> reqwest::Result<reqwest::Request> {
        self.client
            .post(&self.table_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .body(record_json)
            .build()
    }
}

#[async_trait]
impl TableTransport for HttpTableTransport {
    async fn send_record(&self, record_json: String) -> Result<TableResponse, RelayError> {
        let request = self.build_request(record_json)?;
        let response = self.client.execute(request).await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TableResponse { status, body })
    }
}

/// Recording mock transport shared by handler and router tests.
#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{RelayError, TableResponse, TableTransport};

    /// Captures sent bodies; optionally fails every call.
    #[derive(Default)]
    pub struct RecordingTransport {
        pub sent: Mutex<Vec<String>>,
        pub fail: bool,
    }

    impl RecordingTransport {
        pub fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        pub fn sent_bodies(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TableTransport for RecordingTransport {
        async fn send_record(&self, record_json: String) -> Result<TableResponse, RelayError> {
            if self.fail {
                return Err(RelayError::Transport("connection refused".into()));
            }
            self.sent.lock().unwrap().push(record_json);
            Ok(TableResponse {
                status: 200,
                body: r#"{"id":"rec123"}"#.into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> HttpTableTransport {
        HttpTableTransport::new(&Config::default_for_test()).unwrap()
    }

    #[test]
    fn test_request_targets_configured_url() {
        let request = transport().build_request("{}".into()).unwrap();

        assert_eq!(request.method().as_str(), "POST");
        assert_eq!(
            request.url().as_str(),
            "https://api.airtable.example/v0/appTEST/Webhook"
        );
    }

    #[test]
    fn test_request_carries_bearer_credential() {
        let request = transport().build_request("{}".into()).unwrap();

        assert_eq!(request.headers()["Authorization"], "Bearer test-key");
        assert_eq!(request.headers()["Content-Type"], "application/json");
    }

    #[test]
    fn test_request_body_is_record_verbatim() {
        let body = r#"{"fields":{"Subscriber ID":"s1","Room":"r","Art":"a"}}"#;
        let request = transport().build_request(body.into()).unwrap();

        assert_eq!(
            request.body().and_then(reqwest::Body::as_bytes).unwrap(),
            body.as_bytes()
        );
    }
}

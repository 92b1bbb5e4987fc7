//! Remote collector sink over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::event::LogEvent;
use super::sink::{LogSink, LogSinkError, LogSinkResult};

/// Posts each event as JSON to a collector endpoint with a bearer token.
pub struct HttpLogSink {
    client: Client,
    endpoint: String,
    access_token: String,
}

impl HttpLogSink {
    /// Creates a sink for `endpoint`, authenticating with `access_token`.
    pub fn new(endpoint: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint, access_token)
    }

    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            access_token: access_token.into(),
        }
    }
}

#[async_trait]
impl LogSink for HttpLogSink {
    async fn send(&self, event: &LogEvent) -> LogSinkResult<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(event)
            .send()
            .await
            .map_err(|e| LogSinkError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LogSinkError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "Event log accepted by collector");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

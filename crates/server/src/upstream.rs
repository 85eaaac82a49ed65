//! Upstream executor for the proxied chat-completion API.

use async_trait::async_trait;
use bytes::Bytes;
use fiire_core::config::UpstreamConfig;
use fiire_core::error::ProxyError;
use serde_json::Value;
use std::time::Duration;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MESSAGES_PATH: &str = "/v1/messages";

/// Seam between the chat handler and the network. Production uses
/// [`AnthropicExecutor`]; tests substitute a scripted double.
#[async_trait]
pub trait UpstreamExecutor: Send + Sync {
    /// Forward a reshaped chat request authenticated with the caller's key.
    /// Returns the raw 2xx reply body; a non-2xx reply becomes
    /// [`ProxyError::Upstream`].
    async fn forward(&self, api_key: &str, payload: &Value) -> Result<Bytes, ProxyError>;
}

pub struct AnthropicExecutor {
    client: reqwest::Client,
    base_url: String,
}

impl AnthropicExecutor {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("fiire/0.1.0")
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl UpstreamExecutor for AnthropicExecutor {
    async fn forward(&self, api_key: &str, payload: &Value) -> Result<Bytes, ProxyError> {
        let url = format!("{}{MESSAGES_PATH}", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).to_string(),
            });
        }

        Ok(body)
    }
}

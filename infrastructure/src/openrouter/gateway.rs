//! OpenRouter gateway adapter

use super::protocol::{ChatCompletionRequest, error_body, extract_reply};
use async_trait::async_trait;
use sitewright_application::{CompletionRequest, GatewayError, LlmGateway};
use std::time::Duration;
use tracing::{debug, warn};

/// Connection settings for [`OpenRouterGateway`]
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// API root, e.g. `https://openrouter.ai/api/v1`
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    /// Sent as `X-Title` for attribution on the gateway dashboard
    pub app_name: Option<String>,
    /// Sent as `HTTP-Referer`
    pub referer: Option<String>,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key: None,
            timeout: Duration::from_secs(120),
            app_name: None,
            referer: None,
        }
    }
}

/// Chat-completion client for an OpenAI-compatible gateway.
///
/// One request per call: no retry, no caching.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    app_name: Option<String>,
    referer: Option<String>,
}

impl OpenRouterGateway {
    pub fn new(config: OpenRouterConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("sitewright/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if config.api_key.is_none() {
            warn!("No gateway API key configured; requests will be unauthenticated");
        }

        Ok(Self {
            client,
            endpoint: Self::endpoint(&config.base_url),
            api_key: config.api_key,
            app_name: config.app_name,
            referer: config.referer,
        })
    }

    fn endpoint(base_url: &str) -> String {
        format!("{}/chat/completions", base_url.trim_end_matches('/'))
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport(e.to_string())
    }
}

#[async_trait]
impl LlmGateway for OpenRouterGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<serde_json::Value, GatewayError> {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            max_tokens = request.max_tokens,
            json_object = request.require_json_object,
            "Sending chat completion"
        );

        let mut builder = self
            .client
            .post(&self.endpoint)
            .json(&ChatCompletionRequest::from(&request));
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        if let Some(name) = &self.app_name {
            builder = builder.header("X-Title", name);
        }
        if let Some(referer) = &self.referer {
            builder = builder.header("HTTP-Referer", referer);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), model = %request.model, "Gateway returned an error");
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body: error_body(&body),
            });
        }

        extract_reply(&body, request.require_json_object)
    }
}

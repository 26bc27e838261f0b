//! HTTP client for the completion backend.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use url::Url;

use crate::config::CompletionConfig;
use crate::error::{ConfigError, SuggestionError};

/// One-shot request/response seam to the completion backend.
///
/// Injected into [`SuggestionEngine`](super::SuggestionEngine) so the
/// suggestion flow stays free of ambient client state and can be exercised
/// with fakes in tests. No streaming: a call resolves to the full model
/// text or an error.
pub trait CompletionService {
    /// Send one system/user prompt pair, returning the raw model text.
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> impl Future<Output = Result<String, SuggestionError>> + Send;
}

/// Completion client backed by an OpenAI-compatible chat endpoint.
///
/// Every request runs under the client-level timeout from
/// [`CompletionConfig::timeout_secs`]; a timed-out or otherwise failed
/// request surfaces as [`SuggestionError::UpstreamUnavailable`].
pub struct HttpCompletionClient {
    http_client: Client,
    endpoint: Url,
    model: String,
    api_key: String,
}

impl HttpCompletionClient {
    /// Build a client for `config` with an explicit API key.
    pub fn new(config: &CompletionConfig, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint).map_err(|e| ConfigError::InvalidValue {
            key: "completion.base_url".to_string(),
            message: e.to_string(),
        })?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                key: "completion".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http_client,
            endpoint,
            model: config.model.clone(),
            api_key: api_key.into(),
        })
    }

    /// Build a client for `config`, reading the API key from the
    /// environment variable named by `config.api_key_env`.
    pub fn from_config(config: &CompletionConfig) -> Result<Self, ConfigError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| ConfigError::MissingKey(config.api_key_env.clone()))?;
        Self::new(config, api_key)
    }
}

impl CompletionService for HttpCompletionClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, SuggestionError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
        });

        let resp = self
            .http_client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(SuggestionError::from_transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SuggestionError::UpstreamUnavailable {
                message: format!("completion request failed with HTTP {status}: {body}"),
                source: None,
            });
        }

        let envelope: serde_json::Value =
            resp.json().await.map_err(SuggestionError::from_transport)?;

        envelope["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| SuggestionError::UpstreamUnavailable {
                message: "completion response carried no message content".to_string(),
                source: None,
            })
    }
}

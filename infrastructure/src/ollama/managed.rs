//! Managed transport: a pooled `reqwest` client

use super::error::{TransportConfigError, error_chain, timed_out};
use super::headers::{AUTHORIZATION, X_API_KEY, bearer, log_outgoing, sensitive};
use super::settings::BackendSettings;
use async_trait::async_trait;
use council_application::{InferenceError, InferenceTransport};
use council_domain::{ChatRequest, ChatResponse};
use reqwest::header::HeaderMap;
use tracing::debug;

/// Transport backed by a `reqwest::Client` built once with the credential
/// headers and timeouts baked in.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ManagedTransport {
    client: reqwest::Client,
    settings: BackendSettings,
    endpoint: String,
}

impl ManagedTransport {
    pub fn new(settings: BackendSettings) -> Result<Self, TransportConfigError> {
        let endpoint = settings.endpoint();
        reqwest::Url::parse(&endpoint).map_err(|e| TransportConfigError::InvalidBaseUrl {
            url: settings.base_url().to_string(),
            reason: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        if let Some(key) = settings.api_key() {
            headers.insert(AUTHORIZATION, sensitive(&bearer(key))?);
            headers.insert(X_API_KEY, sensitive(key)?);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(settings.timeout())
            .timeout(settings.timeout())
            .build()
            .map_err(|e| TransportConfigError::Client(error_chain(&e)))?;

        Ok(Self {
            client,
            settings,
            endpoint,
        })
    }

    pub fn settings(&self) -> &BackendSettings {
        &self.settings
    }

    fn transport_error(&self, e: reqwest::Error) -> InferenceError {
        if e.is_timeout() {
            InferenceError::Transport(timed_out(&self.endpoint, self.settings.timeout()))
        } else {
            InferenceError::Transport(error_chain(&e))
        }
    }
}

#[async_trait]
impl InferenceTransport for ManagedTransport {
    async fn chat(&self, request: &ChatRequest) -> Result<String, InferenceError> {
        log_outgoing("managed", &self.endpoint, self.settings.api_key(), request);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        debug!(
            transport = "managed",
            status = status.as_u16(),
            bytes = body.len(),
            "Chat response received"
        );

        if !status.is_success() {
            return Err(InferenceError::Backend {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(ChatResponse::from_json(&body)?.into_content())
    }

    fn base_url(&self) -> &str {
        self.settings.base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unparseable_base_url() {
        let result = ManagedTransport::new(BackendSettings::new("not a url"));
        assert!(matches!(
            result,
            Err(TransportConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_key_with_newline() {
        let settings =
            BackendSettings::default().with_api_key(Some("bad\nkey".to_string()));
        assert!(matches!(
            ManagedTransport::new(settings),
            Err(TransportConfigError::InvalidApiKey)
        ));
    }

    #[test]
    fn test_accepts_https() {
        let transport =
            ManagedTransport::new(BackendSettings::new("https://gateway.example.com/ollama/"))
                .unwrap();
        assert_eq!(transport.base_url(), "https://gateway.example.com/ollama/");
        assert_eq!(
            transport.endpoint,
            "https://gateway.example.com/ollama/api/chat"
        );
    }
}

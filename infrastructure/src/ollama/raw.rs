//! Raw transport: requests assembled by hand on a `hyper` client

use super::error::{TransportConfigError, error_chain, timed_out};
use super::headers::{AUTHORIZATION, X_API_KEY, bearer, log_outgoing, sensitive};
use super::settings::BackendSettings;
use async_trait::async_trait;
use bytes::Bytes;
use council_application::{InferenceError, InferenceTransport};
use council_domain::{ChatRequest, ChatResponse};
use http_body_util::{BodyExt, Full};
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Method, Request, StatusCode, Uri};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use tracing::debug;

/// Transport that serializes the body itself, writes the headers itself
/// and checks the status before decoding.
///
/// Plain `http://` only.
#[derive(Debug, Clone)]
pub struct RawTransport {
    client: Client<HttpConnector, Full<Bytes>>,
    settings: BackendSettings,
    endpoint: Uri,
    credentials: Option<(HeaderValue, HeaderValue)>,
}

impl RawTransport {
    pub fn new(settings: BackendSettings) -> Result<Self, TransportConfigError> {
        let endpoint = settings.endpoint().parse::<Uri>().map_err(|e| {
            TransportConfigError::InvalidBaseUrl {
                url: settings.base_url().to_string(),
                reason: e.to_string(),
            }
        })?;

        match endpoint.scheme_str() {
            Some("http") => {}
            Some(_) => {
                return Err(TransportConfigError::UnsupportedScheme(
                    settings.base_url().to_string(),
                ));
            }
            None => {
                return Err(TransportConfigError::InvalidBaseUrl {
                    url: settings.base_url().to_string(),
                    reason: "missing scheme".to_string(),
                });
            }
        }

        let credentials = match settings.api_key() {
            Some(key) => Some((sensitive(&bearer(key))?, sensitive(key)?)),
            None => None,
        };

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(settings.timeout()));
        let client = Client::builder(TokioExecutor::new()).build(connector);

        Ok(Self {
            client,
            settings,
            endpoint,
            credentials,
        })
    }

    pub fn settings(&self) -> &BackendSettings {
        &self.settings
    }

    fn build_request(&self, body: Vec<u8>) -> Result<Request<Full<Bytes>>, InferenceError> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json");
        if let Some((authorization, api_key)) = &self.credentials {
            builder = builder
                .header(AUTHORIZATION, authorization.clone())
                .header(X_API_KEY, api_key.clone());
        }
        builder
            .body(Full::new(Bytes::from(body)))
            .map_err(|e| InferenceError::Transport(e.to_string()))
    }

    /// Send the request and read the whole body
    async fn exchange(
        &self,
        request: Request<Full<Bytes>>,
    ) -> Result<(StatusCode, Bytes), InferenceError> {
        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| InferenceError::Transport(error_chain(&e)))?;
        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| InferenceError::Transport(error_chain(&e)))?
            .to_bytes();
        Ok((status, body))
    }
}

#[async_trait]
impl InferenceTransport for RawTransport {
    async fn chat(&self, request: &ChatRequest) -> Result<String, InferenceError> {
        let uri = self.endpoint.to_string();
        log_outgoing("raw", &uri, self.settings.api_key(), request);

        let body = serde_json::to_vec(request)
            .map_err(|e| InferenceError::Protocol(format!("failed to encode request: {e}")))?;
        let request = self.build_request(body)?;

        let (status, body) = tokio::time::timeout(self.settings.timeout(), self.exchange(request))
            .await
            .map_err(|_| InferenceError::Transport(timed_out(&uri, self.settings.timeout())))??;
        debug!(
            transport = "raw",
            status = status.as_u16(),
            bytes = body.len(),
            "Chat response received"
        );

        if !(200..300).contains(&status.as_u16()) {
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

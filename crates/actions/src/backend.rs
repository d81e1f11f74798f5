use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use storefront_core::config::BackendConfig;
use storefront_core::{ActionError, BackendResponse, HttpMethod, OutboundRequest};
use thiserror::Error;
use tracing::debug;

/// The commerce REST service every action talks to.
#[async_trait]
pub trait StorefrontBackend: Send + Sync {
    async fn send(&self, request: OutboundRequest) -> Result<BackendResponse, ActionError>;
}

pub type SharedBackend = Arc<dyn StorefrontBackend>;

#[derive(Debug, Error)]
pub enum BackendSetupError {
    #[error("invalid backend base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("http client initialization failed: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendSetupError> {
        let parsed = Url::parse(base_url.trim()).map_err(|error| {
            BackendSetupError::InvalidBaseUrl { url: base_url.to_owned(), reason: error.to_string() }
        })?;
        if parsed.cannot_be_a_base() {
            return Err(BackendSetupError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "url cannot carry a path".to_owned(),
            });
        }

        let client =
            Client::builder().connect_timeout(timeout).build().map_err(BackendSetupError::Client)?;

        Ok(Self { client, base_url: parsed, timeout })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendSetupError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Any HTTP answer from the base URL counts as reachable.
    pub async fn probe(&self) -> Result<u16, ActionError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|error| ActionError::Transport(error.to_string()))?;
        Ok(response.status().as_u16())
    }

    fn url_for(&self, request: &OutboundRequest) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(request.segments.iter());
        }
        url
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl StorefrontBackend for HttpBackend {
    async fn send(&self, request: OutboundRequest) -> Result<BackendResponse, ActionError> {
        let url = self.url_for(&request);
        debug!(method = %request.method, url = %url, "sending backend request");

        let mut builder = self.client.request(method(request.method), url).timeout(self.timeout);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response =
            builder.send().await.map_err(|error| ActionError::Transport(error.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|error| ActionError::Transport(error.to_string()))?;

        debug!(status, path = %request.path(), "backend responded");
        Ok(BackendResponse::new(status, body))
    }
}

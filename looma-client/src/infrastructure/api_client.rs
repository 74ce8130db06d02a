//! HTTP client for the Looma API
//!
//! Thin wrapper over reqwest that owns the base URL and the session token.
//! All editing endpoints either return a JSON payload or only a status code;
//! the helpers here cover both shapes and map everything else to
//! [`ApiError`].

use std::sync::Arc;

use log::info;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::config::ClientConfig;

/// Bearer token for an authenticated author session
///
/// Requests without a token are still sent; the server decides whether the
/// endpoint tolerates anonymous access.
#[derive(Clone)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Token material stays out of logs.
        f.debug_tuple("SessionToken").field(&"<redacted>").finish()
    }
}

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered outside the success range
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection, timeout, or body decoding failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status of the response, when one was received at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

/// API client with authentication support
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token_store: Arc<RwLock<Option<SessionToken>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field(
                "has_token",
                &self
                    .token_store
                    .try_read()
                    .map(|t| t.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            config.base_url
        );

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token_store: Arc::new(RwLock::new(None)),
        }
    }

    /// Build a full URL from a server path
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the session token
    pub async fn set_token(&self, token: Option<SessionToken>) {
        *self.token_store.write().await = token;
    }

    /// Get the current session token
    pub async fn get_token(&self) -> Option<SessionToken> {
        self.token_store.read().await.clone()
    }

    /// Attach the bearer header when a session token is present
    async fn build_request(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.token_store.read().await.as_ref() {
            builder.header("Authorization", format!("Bearer {}", token.as_str()))
        } else {
            builder
        }
    }

    /// Execute a request that returns a JSON body
    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    /// Execute a request where only the status code matters
    async fn execute_status(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    async fn status_error(status: StatusCode, response: reqwest::Response) -> ApiError {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// GET request returning JSON, with optional query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<(&str, &str)>,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);

        log::debug!("GET request to: {}", url);

        let mut request = self.client.get(&url);
        if let Some(pair) = query {
            request = request.query(&[pair]);
        }
        let request = self.build_request(request).await;
        self.execute_json(request).await
    }

    /// PUT request with a JSON body; only the status code is consumed
    pub async fn put_status<T: Serialize>(&self, path: &str, body: &T) -> Result<(), ApiError> {
        let url = self.build_url(path);

        log::debug!("PUT request to: {}", url);

        let request = self.client.put(&url).json(body);
        let request = self.build_request(request).await;
        self.execute_status(request).await
    }

    /// POST request with a JSON body; only the status code is consumed
    pub async fn post_status<T: Serialize>(&self, path: &str, body: &T) -> Result<(), ApiError> {
        let url = self.build_url(path);

        log::debug!("POST request to: {}", url);

        let request = self.client.post(&url).json(body);
        let request = self.build_request(request).await;
        self.execute_status(request).await
    }

    /// POST request without a body; only the status code is consumed
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let url = self.build_url(path);

        log::debug!("POST (empty) request to: {}", url);

        let request = self.client.post(&url);
        let request = self.build_request(request).await;
        self.execute_status(request).await
    }

    /// DELETE request; only the status code is consumed
    pub async fn delete_status(&self, path: &str) -> Result<(), ApiError> {
        let url = self.build_url(path);

        log::debug!("DELETE request to: {}", url);

        let request = self.client.delete(&url);
        let request = self.build_request(request).await;
        self.execute_status(request).await
    }
}

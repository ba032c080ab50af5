//! HTTP transport abstraction
//!
//! The client only needs one capability from HTTP: send a
//! [`PreparedRequest`] and hand back the raw response body. [`HttpTransport`]
//! captures that, and [`ReqwestTransport`] is the implementation used in
//! practice.

use crate::types::PreparedRequest;
use crate::{CitadelError, Result};
use async_trait::async_trait;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

/// Sends prepared requests and returns the response body
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` and return the response body as text
    ///
    /// Implementations report connection failures as
    /// [`CitadelError::Transport`] and do not interpret the status code.
    async fn send(&self, request: PreparedRequest) -> Result<String>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport, optionally with a request timeout
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut client_builder = Client::builder();

        if let Some(timeout) = timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| CitadelError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> Result<String> {
        let content_length = request.content_length();
        let mut builder = self
            .client
            .request(request.verb.to_method(), &request.url)
            .header(request.auth_header, &request.auth_value)
            .header(CONTENT_TYPE, request.content_type);

        if let Some(body) = request.body {
            builder = builder.header(CONTENT_LENGTH, content_length).body(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", request.verb, request.url, e);
            CitadelError::transport(format!("{} {} failed: {}", request.verb, request.url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "Merchant API returned status {} for {} {}",
                status,
                request.verb,
                request.url
            );
        }

        response
            .text()
            .await
            .map_err(|e| CitadelError::transport(format!("Failed to read response body: {}", e)))
    }
}

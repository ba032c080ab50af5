//! Synchronous client wrapper
//!
//! Wraps [`CitadelClient`] and drives it on a private current-thread tokio
//! runtime, so each call blocks until the response arrives. Must not be used
//! from inside an async runtime.

use super::{CitadelClient, HttpTransport, ReqwestTransport};
use crate::endpoints::Endpoint;
use crate::types::{AuthMode, ClientConfig, InvoiceData, Verb};
use crate::{CitadelError, Result};
use serde_json::Value;

/// Blocking merchant API client
pub struct BlockingClient<T = ReqwestTransport> {
    client: CitadelClient<T>,
    runtime: tokio::runtime::Runtime,
}

impl<T> std::fmt::Debug for BlockingClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingClient")
            .field("client", &self.client)
            .finish()
    }
}

impl BlockingClient<ReqwestTransport> {
    /// Create a blocking client for the default API endpoint
    pub fn new(api_secret: impl Into<String>, api_public: impl Into<String>) -> Result<Self> {
        Self::from_client(CitadelClient::new(api_secret, api_public)?)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::from_client(CitadelClient::with_config(config)?)
    }
}

impl<T: HttpTransport> BlockingClient<T> {
    /// Wrap an async client
    pub fn from_client(client: CitadelClient<T>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CitadelError::config(format!("Failed to create tokio runtime: {}", e)))?;

        Ok(Self { client, runtime })
    }

    /// The wrapped async client
    pub fn inner(&self) -> &CitadelClient<T> {
        &self.client
    }

    pub fn request(
        &self,
        path: &str,
        verb: Verb,
        body: Option<&Value>,
        auth: AuthMode,
    ) -> Result<Value> {
        self.runtime
            .block_on(self.client.request(path, verb, body, auth))
    }

    pub fn call(&self, endpoint: &Endpoint) -> Result<Value> {
        self.runtime.block_on(self.client.call(endpoint))
    }

    pub fn get_invoice(&self, invoice_id: &str) -> Result<Value> {
        self.runtime.block_on(self.client.get_invoice(invoice_id))
    }

    pub fn create_invoice(&self, invoice: &InvoiceData) -> Result<Value> {
        self.runtime.block_on(self.client.create_invoice(invoice))
    }

    pub fn cashout_invoice(&self, invoice_id: &str, method: &str, address: &str) -> Result<Value> {
        self.runtime
            .block_on(self.client.cashout_invoice(invoice_id, method, address))
    }
}

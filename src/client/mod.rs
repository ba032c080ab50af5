//! Merchant API client
//!
//! [`CitadelClient`] owns the credentials and a transport. Every API operation
//! goes through [`CitadelClient::request`]: the path is joined onto the base
//! URL, the auth mode picks the credential header and body encoding, and the
//! response body is decoded as JSON.
//!
//! # Examples
//!
//! ```no_run
//! use citadel_merchant::client::CitadelClient;
//! use citadel_merchant::types::Invoice;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! # async fn example() -> citadel_merchant::Result<()> {
//! let client = CitadelClient::new("api-secret", "api-public")?;
//!
//! let mut invoice = Invoice::new();
//! invoice
//!     .set_description("Payment #1")
//!     .set_total(Decimal::from_str("0.001").unwrap(), Some("BTC"));
//!
//! let created = client.create_invoice(&invoice.render()).await?;
//! println!("Invoice: {}", created);
//!
//! let ticker = client.get_ticker("BTS", "USD").await?;
//! println!("Ticker: {}", ticker);
//! # Ok(())
//! # }
//! ```

use crate::endpoints::{Endpoint, DEFAULT_HISTORY_LIMIT};
use crate::types::{
    join_url, AuthMode, ClientConfig, Credentials, InvoiceData, OrderRequest, PreparedRequest,
    Transfer, Verb,
};
use crate::{CitadelError, Result};
use serde_json::Value;

pub mod blocking;
pub mod transport;

#[cfg(test)]
mod tests;

pub use blocking::BlockingClient;
pub use transport::{HttpTransport, ReqwestTransport};

/// Decode a raw response body
///
/// An empty body means the call produced no response and is reported as
/// [`CitadelError::Transport`]; anything that is not JSON is
/// [`CitadelError::Decode`].
pub fn decode_response(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Err(CitadelError::transport("empty response body"));
    }
    serde_json::from_str(body).map_err(|e| CitadelError::decode(e.to_string()))
}

/// Client for the merchant API
#[derive(Clone)]
pub struct CitadelClient<T = ReqwestTransport> {
    base_url: String,
    credentials: Credentials,
    transport: T,
}

impl<T> std::fmt::Debug for CitadelClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CitadelClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("transport", &"<transport>")
            .finish()
    }
}

impl CitadelClient<ReqwestTransport> {
    /// Create a client for the default API endpoint
    pub fn new(api_secret: impl Into<String>, api_public: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_secret, api_public))
    }

    /// Create a client from a configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::with_transport(config, transport)
    }

    /// Create a client from `CITADEL_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }
}

impl<T: HttpTransport> CitadelClient<T> {
    /// Create a client that sends through `transport`
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            base_url: config.base_url,
            credentials: config.credentials,
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL for an API path
    pub fn full_url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Encode a request without sending it
    pub fn prepare(
        &self,
        path: &str,
        verb: Verb,
        body: Option<&Value>,
        auth: AuthMode,
    ) -> Result<PreparedRequest> {
        PreparedRequest::build(self.full_url(path), verb, body, auth, &self.credentials)
    }

    /// Send a request and decode the JSON response
    pub async fn request(
        &self,
        path: &str,
        verb: Verb,
        body: Option<&Value>,
        auth: AuthMode,
    ) -> Result<Value> {
        let request = self.prepare(path, verb, body, auth)?;

        tracing::debug!(
            "Sending {} {} ({}, {} bytes)",
            request.verb,
            request.url,
            request.auth_header,
            request.content_length()
        );

        let response_body = self.transport.send(request).await?;
        tracing::debug!("Received {} bytes", response_body.len());

        decode_response(&response_body)
    }

    /// Call an endpoint from the endpoint table
    pub async fn call(&self, endpoint: &Endpoint) -> Result<Value> {
        let route = endpoint.route()?;
        let body = endpoint.body()?;
        tracing::debug!("Calling {}", endpoint.name());

        self.request(&route.path, route.verb, body.as_ref(), route.auth)
            .await
    }

    // Misc public APIs

    pub async fn get_ticker(&self, lcoin: &str, rcoin: &str) -> Result<Value> {
        self.call(&Endpoint::Ticker {
            lcoin: lcoin.into(),
            rcoin: rcoin.into(),
        })
        .await
    }

    pub async fn get_bitshares_balances(&self, account: &str) -> Result<Value> {
        self.call(&Endpoint::BitsharesBalances {
            account: account.into(),
        })
        .await
    }

    pub async fn get_bitshares_asset(&self, symbol: &str) -> Result<Value> {
        self.call(&Endpoint::BitsharesAsset {
            symbol: symbol.into(),
        })
        .await
    }

    // Payment processor

    pub async fn get_invoice(&self, invoice_id: &str) -> Result<Value> {
        self.call(&Endpoint::GetInvoice {
            invoice_id: invoice_id.into(),
        })
        .await
    }

    /// Create an invoice from a rendered [`Invoice`](crate::types::Invoice)
    pub async fn create_invoice(&self, invoice: &InvoiceData) -> Result<Value> {
        self.call(&Endpoint::CreateInvoice(invoice.clone())).await
    }

    /// Forward the funds of a settled invoice
    pub async fn cashout_invoice(
        &self,
        invoice_id: &str,
        method: &str,
        address: &str,
    ) -> Result<Value> {
        self.call(&Endpoint::CashoutInvoice {
            invoice_id: invoice_id.into(),
            method: method.into(),
            address: address.into(),
        })
        .await
    }

    // Trading & BitShares API

    pub async fn create_account(&self, username: &str) -> Result<Value> {
        self.call(&Endpoint::CreateAccount {
            username: username.into(),
        })
        .await
    }

    pub async fn get_accounts(&self) -> Result<Value> {
        self.call(&Endpoint::ListAccounts).await
    }

    pub async fn get_account(&self, account: &str) -> Result<Value> {
        self.call(&Endpoint::GetAccount {
            account: account.into(),
        })
        .await
    }

    pub async fn get_account_balances(&self, account: &str) -> Result<Value> {
        self.call(&Endpoint::AccountBalances {
            account: account.into(),
        })
        .await
    }

    pub async fn transfer(&self, from: &str, transfer: &Transfer) -> Result<Value> {
        self.call(&Endpoint::Transfer {
            from: from.into(),
            transfer: transfer.clone(),
        })
        .await
    }

    pub async fn get_history(&self, account: &str, offset: u64, limit: u64) -> Result<Value> {
        self.call(&Endpoint::History {
            account: account.into(),
            offset,
            limit,
        })
        .await
    }

    /// First page of account history
    pub async fn get_recent_history(&self, account: &str) -> Result<Value> {
        self.get_history(account, 0, DEFAULT_HISTORY_LIMIT).await
    }

    /// Place an order; the response carries the order id
    pub async fn create_order(&self, account: &str, order: &OrderRequest) -> Result<Value> {
        self.call(&Endpoint::CreateOrder {
            account: account.into(),
            order: order.clone(),
        })
        .await
    }

    pub async fn cancel_order(&self, account: &str, order_id: &str) -> Result<Value> {
        self.call(&Endpoint::CancelOrder {
            account: account.into(),
            order_id: order_id.into(),
        })
        .await
    }

    pub async fn get_orders(&self, account: &str) -> Result<Value> {
        self.call(&Endpoint::ListOrders {
            account: account.into(),
        })
        .await
    }

    pub async fn get_filled_orders(&self, account: &str) -> Result<Value> {
        self.call(&Endpoint::FilledOrders {
            account: account.into(),
        })
        .await
    }

    pub async fn get_market(&self, base: &str, quote: &str) -> Result<Value> {
        self.call(&Endpoint::Market {
            base: base.into(),
            quote: quote.into(),
        })
        .await
    }
}

//! Merchant API endpoint table
//!
//! Every API operation is a variant of [`Endpoint`]. [`Endpoint::route`] maps
//! it to a path, verb and auth mode, and [`Endpoint::body`] to its JSON body.
//! The client has no per-endpoint logic beyond this table.

use crate::types::{AuthMode, InvoiceData, OrderRequest, Transfer, Verb};
use crate::{CitadelError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{json, Value};

/// Characters left unescaped in path segments and query values
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode one path segment or query value
///
/// Empty and dot-only values are rejected: URL normalization resolves `.`
/// and `..` (escaped or not) away from the endpoint, and an empty segment
/// names the parent collection.
fn seg(value: &str) -> Result<String> {
    if value.bytes().all(|b| b == b'.') {
        return Err(CitadelError::config(format!(
            "Invalid path parameter: {:?}",
            value
        )));
    }
    Ok(utf8_percent_encode(value, SEGMENT).to_string())
}

/// Default page size for account history
pub const DEFAULT_HISTORY_LIMIT: u64 = 100;

/// Path, verb and auth mode of an endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub verb: Verb,
    pub auth: AuthMode,
}

impl Route {
    fn new(path: String, verb: Verb, auth: AuthMode) -> Self {
        Self { path, verb, auth }
    }
}

/// A merchant API operation with its parameters
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    /// Public market ticker
    Ticker { lcoin: String, rcoin: String },
    BitsharesBalances { account: String },
    BitsharesAsset { symbol: String },
    GetInvoice { invoice_id: String },
    CreateInvoice(InvoiceData),
    CashoutInvoice {
        invoice_id: String,
        method: String,
        address: String,
    },
    CreateAccount { username: String },
    ListAccounts,
    GetAccount { account: String },
    AccountBalances { account: String },
    Transfer { from: String, transfer: Transfer },
    History {
        account: String,
        offset: u64,
        limit: u64,
    },
    CreateOrder { account: String, order: OrderRequest },
    CancelOrder { account: String, order_id: String },
    ListOrders { account: String },
    FilledOrders { account: String },
    Market { base: String, quote: String },
}

impl Endpoint {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Ticker { .. } => "ticker",
            Endpoint::BitsharesBalances { .. } => "bitshares_balances",
            Endpoint::BitsharesAsset { .. } => "bitshares_asset",
            Endpoint::GetInvoice { .. } => "get_invoice",
            Endpoint::CreateInvoice(_) => "create_invoice",
            Endpoint::CashoutInvoice { .. } => "cashout_invoice",
            Endpoint::CreateAccount { .. } => "create_account",
            Endpoint::ListAccounts => "list_accounts",
            Endpoint::GetAccount { .. } => "get_account",
            Endpoint::AccountBalances { .. } => "account_balances",
            Endpoint::Transfer { .. } => "transfer",
            Endpoint::History { .. } => "history",
            Endpoint::CreateOrder { .. } => "create_order",
            Endpoint::CancelOrder { .. } => "cancel_order",
            Endpoint::ListOrders { .. } => "list_orders",
            Endpoint::FilledOrders { .. } => "filled_orders",
            Endpoint::Market { .. } => "market",
        }
    }

    /// Path, verb and auth mode
    ///
    /// Fails with [`CitadelError::Config`] when a path parameter is empty or
    /// consists only of dots.
    pub fn route(&self) -> Result<Route> {
        use AuthMode::{Json, Public, Secret};
        use Verb::{Delete, Get, Post, Put};

        let route = match self {
            Endpoint::Ticker { lcoin, rcoin } => Route::new(
                format!("/bitshares/ticker/{}/{}", seg(lcoin)?, seg(rcoin)?),
                Get,
                Public,
            ),
            Endpoint::BitsharesBalances { account } => Route::new(
                format!("/bitshares/balances?account={}", seg(account)?),
                Get,
                Secret,
            ),
            Endpoint::BitsharesAsset { symbol } => {
                Route::new(format!("/bitshares/assets/{}", seg(symbol)?), Get, Secret)
            }
            Endpoint::GetInvoice { invoice_id } => {
                Route::new(format!("/invoices/{}", seg(invoice_id)?), Get, Secret)
            }
            Endpoint::CreateInvoice(_) => Route::new("/invoices".to_string(), Put, Json),
            Endpoint::CashoutInvoice { .. } => Route::new("/invoices".to_string(), Post, Json),
            Endpoint::CreateAccount { .. } => Route::new("/accounts".to_string(), Put, Json),
            Endpoint::ListAccounts => Route::new("/accounts".to_string(), Get, Secret),
            Endpoint::GetAccount { account } => {
                Route::new(format!("/accounts/{}", seg(account)?), Get, Secret)
            }
            Endpoint::AccountBalances { account } => Route::new(
                format!("/accounts/{}/balances", seg(account)?),
                Get,
                Secret,
            ),
            Endpoint::Transfer { from, .. } => Route::new(
                format!("/accounts/{}/transfer", seg(from)?),
                Put,
                Json,
            ),
            Endpoint::History {
                account,
                offset,
                limit,
            } => Route::new(
                format!("/accounts/{}?offset={}&limit={}", seg(account)?, offset, limit),
                Get,
                Secret,
            ),
            Endpoint::CreateOrder { account, .. } => Route::new(
                format!("/accounts/{}/orders", seg(account)?),
                Put,
                Json,
            ),
            Endpoint::CancelOrder { account, order_id } => Route::new(
                format!("/accounts/{}/orders/{}", seg(account)?, seg(order_id)?),
                Delete,
                Secret,
            ),
            Endpoint::ListOrders { account } => Route::new(
                format!("/accounts/{}/orders", seg(account)?),
                Get,
                Secret,
            ),
            Endpoint::FilledOrders { account } => Route::new(
                format!("/accounts/{}/filled-orders", seg(account)?),
                Get,
                Secret,
            ),
            Endpoint::Market { base, quote } => Route::new(
                format!("/markets/{}/{}", seg(base)?, seg(quote)?),
                Get,
                Secret,
            ),
        };
        Ok(route)
    }

    /// JSON body, `None` for endpoints that send none
    pub fn body(&self) -> Result<Option<Value>> {
        let body = match self {
            Endpoint::CreateInvoice(data) => serde_json::to_value(data)?,
            Endpoint::CashoutInvoice {
                invoice_id,
                method,
                address,
            } => json!({
                "invoice_id": invoice_id,
                "method": method,
                "address": address,
            }),
            Endpoint::CreateAccount { username } => json!({ "username": username }),
            Endpoint::Transfer { transfer, .. } => serde_json::to_value(transfer)?,
            Endpoint::CreateOrder { order, .. } => serde_json::to_value(order)?,
            _ => return Ok(None),
        };
        Ok(Some(body))
    }
}

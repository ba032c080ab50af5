//! Tests for the merchant API client

use super::{decode_response, CitadelClient, HttpTransport};
use crate::endpoints::Endpoint;
use crate::types::{
    content_types, headers, AuthMode, ClientConfig, Invoice, OrderRequest, PreparedRequest,
    Transfer, Verb,
};
use crate::{CitadelError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Transport that records requests and replies with a canned body
#[derive(Debug, Clone)]
pub(crate) struct RecordingTransport {
    requests: Arc<Mutex<Vec<PreparedRequest>>>,
    response: Option<String>,
}

impl RecordingTransport {
    pub(crate) fn responding(body: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: Some(body.to_string()),
        }
    }

    /// A transport whose calls never get a response
    pub(crate) fn failing() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: None,
        }
    }

    pub(crate) fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn last(&self) -> PreparedRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: PreparedRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);
        self.response
            .clone()
            .ok_or_else(|| CitadelError::transport("connection refused"))
    }
}

fn client_with(transport: RecordingTransport) -> CitadelClient<RecordingTransport> {
    let config = ClientConfig::new("secret-token", "public-token")
        .with_base_url("https://citadel.test/merchant_api/v1/");
    CitadelClient::with_transport(config, transport).unwrap()
}

fn ok_client() -> CitadelClient<RecordingTransport> {
    client_with(RecordingTransport::responding(r#"{"ok": true}"#))
}

#[test]
fn test_client_creation() {
    let client = CitadelClient::new("secret", "public").unwrap();
    assert_eq!(client.base_url(), "https://citadel.li/merchant_api/v1/");
}

#[test]
fn test_client_rejects_invalid_config() {
    let result = CitadelClient::new("", "public");
    assert!(matches!(result, Err(CitadelError::Config { .. })));
}

#[test]
fn test_client_debug_hides_credentials() {
    let client = ok_client();
    let printed = format!("{:?}", client);
    assert!(!printed.contains("secret-token"));
    assert!(!printed.contains("public-token"));
}

#[test]
fn test_full_url() {
    let client = ok_client();
    assert_eq!(
        client.full_url("/invoices"),
        "https://citadel.test/merchant_api/v1/invoices"
    );
    assert_eq!(client.full_url("invoices"), client.full_url("/invoices"));
    assert_eq!(client.full_url("/x/"), client.full_url("x/"));
}

#[test]
fn test_decode_response() {
    assert_eq!(decode_response(r#"{"a": 1}"#).unwrap(), json!({"a": 1}));
    assert!(decode_response("").unwrap_err().is_transport());
    assert!(decode_response("  \n").unwrap_err().is_transport());
    assert!(decode_response("{not json").unwrap_err().is_decode());
}

#[tokio::test]
async fn test_request_public_mode() {
    let client = ok_client();
    client
        .request("/bitshares/ticker/BTS/USD", Verb::Get, None, AuthMode::Public)
        .await
        .unwrap();

    let sent = client.transport().last();
    assert_eq!(sent.auth_header, headers::PUBLIC);
    assert_eq!(sent.auth_value, "public-token");
    assert_eq!(sent.content_type, content_types::FORM);
    assert!(sent.body.is_none());
}

#[tokio::test]
async fn test_request_json_mode() {
    let client = ok_client();
    let body = json!({"username": "alice"});
    client
        .request("accounts", Verb::Put, Some(&body), AuthMode::Json)
        .await
        .unwrap();

    let sent = client.transport().last();
    assert_eq!(sent.url, "https://citadel.test/merchant_api/v1/accounts");
    assert_eq!(sent.auth_header, headers::AUTH);
    assert_eq!(sent.auth_value, "secret-token");
    assert_eq!(sent.content_type, content_types::JSON);
    assert_eq!(sent.body.as_deref(), Some(r#"{"username":"alice"}"#));
}

#[tokio::test]
async fn test_request_delete_drops_body() {
    let client = ok_client();
    let body = json!({"ignored": true});
    client
        .request("/accounts/a/orders/1", Verb::Delete, Some(&body), AuthMode::Json)
        .await
        .unwrap();

    assert!(client.transport().last().body.is_none());
}

#[tokio::test]
async fn test_request_transport_failure() {
    let client = client_with(RecordingTransport::failing());
    let result = client.get_accounts().await;
    assert!(result.unwrap_err().is_transport());
}

#[tokio::test]
async fn test_request_empty_body_is_transport_error() {
    let client = client_with(RecordingTransport::responding(""));
    let result = client.get_accounts().await;
    assert!(result.unwrap_err().is_transport());
}

#[tokio::test]
async fn test_request_invalid_json_is_decode_error() {
    let client = client_with(RecordingTransport::responding("{not json"));
    let result = client.get_accounts().await;
    assert!(result.unwrap_err().is_decode());
}

#[tokio::test]
async fn test_request_non_object_json_is_returned() {
    let client = client_with(RecordingTransport::responding("false"));
    assert_eq!(client.get_accounts().await.unwrap(), json!(false));
}

#[tokio::test]
async fn test_get_ticker() {
    let client = ok_client();
    client.get_ticker("BTS", "USD").await.unwrap();

    let sent = client.transport().last();
    assert_eq!(
        sent.url,
        "https://citadel.test/merchant_api/v1/bitshares/ticker/BTS/USD"
    );
    assert_eq!(sent.verb, Verb::Get);
    assert_eq!(sent.auth_header, headers::PUBLIC);
}

#[tokio::test]
async fn test_create_invoice_sends_rendered_invoice() {
    let client = ok_client();

    let mut invoice = Invoice::new();
    invoice
        .set_description("Payment #1")
        .set_total(Decimal::from_str("0.001").unwrap(), Some("BTC"))
        .set_cashout("bitshares", "merchant");
    client.create_invoice(&invoice.render()).await.unwrap();

    let sent = client.transport().last();
    assert_eq!(sent.verb, Verb::Put);
    assert_eq!(sent.url, "https://citadel.test/merchant_api/v1/invoices");
    assert_eq!(sent.content_type, content_types::JSON);

    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["description"], "Payment #1");
    assert_eq!(body["total_amount"], "0.001");
    assert_eq!(body["total_coin"], "BTC");
    assert_eq!(body["cashout"], json!({"method": "bitshares", "address": "merchant"}));
}

#[tokio::test]
async fn test_cashout_invoice() {
    let client = ok_client();
    client
        .cashout_invoice("inv-1", "bitshares", "merchant")
        .await
        .unwrap();

    let sent = client.transport().last();
    assert_eq!(sent.verb, Verb::Post);
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({"invoice_id": "inv-1", "method": "bitshares", "address": "merchant"})
    );
}

#[tokio::test]
async fn test_account_reads_use_secret_auth() {
    let client = ok_client();
    client.get_account("alice").await.unwrap();
    client.get_account_balances("alice").await.unwrap();
    client.get_orders("alice").await.unwrap();
    client.get_filled_orders("alice").await.unwrap();
    client.get_bitshares_balances("alice").await.unwrap();
    client.get_bitshares_asset("BTS").await.unwrap();
    client.get_market("BTS", "USD").await.unwrap();
    client.get_invoice("inv-1").await.unwrap();
    client.get_recent_history("alice").await.unwrap();

    let urls: Vec<String> = client
        .transport()
        .requests()
        .into_iter()
        .map(|r| {
            assert_eq!(r.verb, Verb::Get);
            assert_eq!(r.auth_header, headers::AUTH);
            r.url
                .trim_start_matches("https://citadel.test/merchant_api/v1")
                .to_string()
        })
        .collect();

    assert_eq!(
        urls,
        vec![
            "/accounts/alice",
            "/accounts/alice/balances",
            "/accounts/alice/orders",
            "/accounts/alice/filled-orders",
            "/bitshares/balances?account=alice",
            "/bitshares/assets/BTS",
            "/markets/BTS/USD",
            "/invoices/inv-1",
            "/accounts/alice?offset=0&limit=100",
        ]
    );
}

#[tokio::test]
async fn test_transfer_and_orders() {
    let client = ok_client();

    let transfer = Transfer::new("bob", Decimal::from(5), "BTS").with_memo("rent");
    client.transfer("alice", &transfer).await.unwrap();
    let sent = client.transport().last();
    assert_eq!(sent.verb, Verb::Put);
    assert!(sent.url.ends_with("/accounts/alice/transfer"));
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["to"], "bob");
    assert_eq!(body["memo"], "rent");
    assert_eq!(body["fee_asset"], json!(null));

    let order = OrderRequest::new(Decimal::from(1), "BTS", Decimal::from(2), "USD")
        .with_fill_or_kill(true);
    client.create_order("alice", &order).await.unwrap();
    let sent = client.transport().last();
    assert_eq!(sent.verb, Verb::Put);
    assert!(sent.url.ends_with("/accounts/alice/orders"));

    client.cancel_order("alice", "1.7.42").await.unwrap();
    let sent = client.transport().last();
    assert_eq!(sent.verb, Verb::Delete);
    assert!(sent.url.ends_with("/accounts/alice/orders/1.7.42"));
    assert!(sent.body.is_none());
}

#[tokio::test]
async fn test_create_account_and_list() {
    let client = ok_client();
    client.create_account("alice").await.unwrap();
    client.get_accounts().await.unwrap();

    let sent = client.transport().requests();
    assert_eq!(sent[0].verb, Verb::Put);
    assert_eq!(sent[0].body.as_deref(), Some(r#"{"username":"alice"}"#));
    assert_eq!(sent[1].verb, Verb::Get);
    assert!(sent[1].url.ends_with("/accounts"));
}

#[tokio::test]
async fn test_dot_segment_account_is_not_sent() {
    let client = ok_client();

    let err = client.get_account("..").await.unwrap_err();
    assert!(matches!(err, CitadelError::Config { .. }));

    let err = client.cancel_order("alice", ".").await.unwrap_err();
    assert!(matches!(err, CitadelError::Config { .. }));

    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_call_matches_one_liner() {
    let client = ok_client();
    client
        .call(&Endpoint::Market {
            base: "BTS".into(),
            quote: "USD".into(),
        })
        .await
        .unwrap();
    client.get_market("BTS", "USD").await.unwrap();

    let sent = client.transport().requests();
    assert_eq!(sent[0], sent[1]);
}

//! # Citadel merchant client
//!
//! Rust client for the Citadel merchant API: invoices, account balances,
//! transfers and orders on the BitShares trading venue.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use citadel_merchant::{CitadelClient, Invoice};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CitadelClient::new("api-secret", "api-public")?;
//!
//!     let mut invoice = Invoice::new();
//!     invoice
//!         .set_description("Payment #1")
//!         .set_total(Decimal::from_str("0.001")?, Some("BTC"))
//!         .set_callback_post("https://shop.example/citadel-hook");
//!
//!     let created = client.create_invoice(&invoice.render()).await?;
//!     println!("{}", created);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Configuration, request encoding, invoice and trading payloads
//! - **`endpoints`**: The table mapping each API operation to path, verb and auth mode
//! - **`client`**: Async client, HTTP transport trait and blocking wrapper
//! - **`error`**: Error type shared by the whole crate
//!
//! ## Authentication
//!
//! Private calls carry the secret token in `X-Citadel-Auth`; public calls
//! (currently the ticker) carry the public token in `X-Citadel-Public`.
//! Exactly one of them is sent per request.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use client::{BlockingClient, CitadelClient, HttpTransport, ReqwestTransport};
pub use endpoints::{Endpoint, Route};
pub use error::{CitadelError, Result};
pub use types::*;

/// Current version of the client library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Core types for the merchant API
//!
//! # Architecture
//!
//! - [`config`] - Client configuration and credentials
//! - [`request`] - Auth modes, verbs and request encoding
//! - [`invoice`] - Invoice builder and rendered payload
//! - [`trading`] - Transfer and order payloads
//! - [`amount`] - Amount parsing and fixed-precision formatting
//! - [`constants`] - Wire constants (base URL, header names, content types)
//!
//! # Examples
//!
//! ```
//! use citadel_merchant::types::{AuthMode, ClientConfig};
//! use std::time::Duration;
//!
//! # fn example() -> citadel_merchant::Result<()> {
//! let config = ClientConfig::new("api-secret", "api-public")
//!     .with_timeout(Duration::from_secs(30));
//! config.validate()?;
//!
//! let mode: AuthMode = "pub".parse()?;
//! assert_eq!(mode.header_name(), "X-Citadel-Public");
//! # Ok(())
//! # }
//! ```

pub mod amount;
pub mod config;
pub mod constants;
pub mod invoice;
pub mod request;
pub mod trading;

pub use amount::{parse_amount, precise};
pub use config::{ClientConfig, Credentials};
pub use constants::{content_types, headers, DEFAULT_BASE_URL};
pub use invoice::{Cashout, Invoice, InvoiceData, Position};
pub use request::{join_url, AuthMode, PreparedRequest, Verb};
pub use trading::{OrderRequest, Transfer};

//! Invoice assembly
//!
//! [`Invoice`] accumulates invoice fields in memory and renders them to the
//! [`InvoiceData`] payload accepted by the create-invoice endpoint. Nothing
//! here touches the network.
//!
//! ```
//! use citadel_merchant::types::Invoice;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! # fn example() -> citadel_merchant::Result<()> {
//! let mut invoice = Invoice::new();
//! invoice
//!     .set_description("Payment #1")
//!     .set_total(Decimal::from_str("0.001").unwrap(), Some("BTC"));
//!
//! let data = invoice.render();
//! assert_eq!(data.total_coin, "BTC");
//! # Ok(())
//! # }
//! ```

use super::request::Verb;
use crate::{CitadelError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Instruction to forward settled funds to an external method/address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cashout {
    pub method: String,
    pub address: String,
}

/// Invoice line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub description: String,
    pub quantity: Decimal,
    /// Unit price
    pub price: Decimal,
    /// Explicit total, or `quantity * price` when none was given
    pub total: Decimal,
}

/// Rendered invoice payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceData {
    pub userdata_id: String,
    pub callback_url: String,
    pub callback_method: String,
    pub return_url: String,
    pub description: String,
    pub total_amount: Decimal,
    pub total_coin: String,
    pub positions: Vec<Position>,
    /// `null` unless a cashout was set
    pub cashout: Option<Cashout>,
}

/// Invoice builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    positions: Vec<Position>,
    /// Running sum of position totals
    positions_total: Decimal,
    description: String,
    total_amount: Decimal,
    total_coin: String,
    userdata_id: String,
    return_url: String,
    callback_url: String,
    callback_method: Verb,
    cashout: Option<Cashout>,
}

impl Default for Invoice {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
            positions_total: Decimal::ZERO,
            description: String::new(),
            total_amount: Decimal::ZERO,
            total_coin: String::new(),
            userdata_id: String::new(),
            return_url: String::new(),
            callback_url: String::new(),
            callback_method: Verb::Post,
            cashout: None,
        }
    }
}

impl Invoice {
    /// Create an empty invoice
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the total; the currency only changes when one is given
    pub fn set_total(&mut self, amount: Decimal, coin: Option<&str>) -> &mut Self {
        self.total_amount = amount;
        if let Some(coin) = coin.filter(|c| !c.is_empty()) {
            self.total_coin = coin.to_string();
        }
        self
    }

    /// Set the description shown to the payer
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Set the merchant's own reference for this invoice
    pub fn set_user_data(&mut self, userdata_id: impl Into<String>) -> &mut Self {
        self.userdata_id = userdata_id.into();
        self
    }

    /// Set the callback URL and the method the API calls it with
    pub fn set_callback(&mut self, url: impl Into<String>, method: Verb) -> &mut Self {
        self.callback_url = url.into();
        self.callback_method = method;
        self
    }

    /// Set a callback URL called with POST
    pub fn set_callback_post(&mut self, url: impl Into<String>) -> &mut Self {
        self.set_callback(url, Verb::Post)
    }

    /// Set the cashout method and address together
    pub fn set_cashout(
        &mut self,
        method: impl Into<String>,
        address: impl Into<String>,
    ) -> &mut Self {
        self.cashout = Some(Cashout {
            method: method.into(),
            address: address.into(),
        });
        self
    }

    /// Set the URL the payer is sent back to
    pub fn set_return_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.return_url = url.into();
        self
    }

    /// Append a line item
    ///
    /// Fails with [`CitadelError::CurrencyMismatch`] when `coin` differs from
    /// a currency the invoice already has. The first position naming a
    /// currency sets the invoice currency. Fails with
    /// [`CitadelError::InvalidAmount`] when the position total or the running
    /// invoice total does not fit in a decimal; rejected positions leave the
    /// invoice unchanged.
    pub fn add_position(
        &mut self,
        description: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
        total: Option<Decimal>,
        coin: Option<&str>,
    ) -> Result<&mut Self> {
        let coin = coin.filter(|c| !c.is_empty());
        if let Some(coin) = coin {
            if !self.total_coin.is_empty() && self.total_coin != coin {
                return Err(CitadelError::currency_mismatch(&self.total_coin, coin));
            }
        }

        let total = match total {
            Some(total) => total,
            None => quantity.checked_mul(price).ok_or_else(|| {
                CitadelError::invalid_amount(format!("{} * {}", quantity, price))
            })?,
        };
        let positions_total = self.positions_total.checked_add(total).ok_or_else(|| {
            CitadelError::invalid_amount(format!("{} + {}", self.positions_total, total))
        })?;

        if let Some(coin) = coin {
            if self.total_coin.is_empty() {
                self.total_coin = coin.to_string();
            }
        }
        self.positions_total = positions_total;
        self.positions.push(Position {
            description: description.into(),
            quantity,
            price,
            total,
        });
        Ok(self)
    }

    /// Positions in insertion order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Invoice currency, empty until set
    pub fn total_coin(&self) -> &str {
        &self.total_coin
    }

    /// Render the payload
    ///
    /// Uses the explicit total when non-zero, otherwise the sum of position
    /// totals.
    pub fn render(&self) -> InvoiceData {
        let total_amount = if self.total_amount.is_zero() {
            self.positions_total
        } else {
            self.total_amount
        };

        InvoiceData {
            userdata_id: self.userdata_id.clone(),
            callback_url: self.callback_url.clone(),
            callback_method: self.callback_method.as_str().to_string(),
            return_url: self.return_url.clone(),
            description: self.description.clone(),
            total_amount,
            total_coin: self.total_coin.clone(),
            positions: self.positions.clone(),
            cashout: self.cashout.clone(),
        }
    }
}

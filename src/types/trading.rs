//! Transfer and order payloads for the trading API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset transfer from a merchant-held account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Asset symbol
    pub asset: String,
    pub amount: Decimal,
    /// Recipient account
    pub to: String,
    pub memo: String,
    /// Asset the network fee is paid in, the API default when `None`
    pub fee_asset: Option<String>,
}

impl Transfer {
    /// Create a transfer with an empty memo
    pub fn new(to: impl Into<String>, amount: Decimal, asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            amount,
            to: to.into(),
            memo: String::new(),
            fee_asset: None,
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn with_fee_asset(mut self, fee_asset: impl Into<String>) -> Self {
        self.fee_asset = Some(fee_asset.into());
        self
    }
}

/// Limit order selling `input_amount` of `input_asset` for `output_amount`
/// of `output_asset`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub input_amount: Decimal,
    pub input_asset: String,
    pub output_amount: Decimal,
    pub output_asset: String,
    /// Expiration timestamp, 0 for the venue default
    pub expiration: u64,
    pub fill_or_kill: bool,
}

impl OrderRequest {
    pub fn new(
        input_amount: Decimal,
        input_asset: impl Into<String>,
        output_amount: Decimal,
        output_asset: impl Into<String>,
    ) -> Self {
        Self {
            input_amount,
            input_asset: input_asset.into(),
            output_amount,
            output_asset: output_asset.into(),
            expiration: 0,
            fill_or_kill: false,
        }
    }

    pub fn with_expiration(mut self, expiration: u64) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn with_fill_or_kill(mut self, fill_or_kill: bool) -> Self {
        self.fill_or_kill = fill_or_kill;
        self
    }
}

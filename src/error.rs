//! Error types for the Citadel merchant client

use thiserror::Error;

/// Result type alias for merchant client operations
pub type Result<T> = std::result::Result<T, CitadelError>;

/// Main error type for merchant client operations
#[derive(Error, Debug)]
pub enum CitadelError {
    /// The HTTP call failed or produced no response body
    #[error("Unable to fetch response: {message}")]
    Transport { message: String },

    /// The response body was not valid JSON
    #[error("Unable to decode response: {message}")]
    Decode { message: String },

    /// A position currency conflicts with the invoice currency
    #[error("Total coin already set to {expected} and does not match position coin {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// An amount could not be parsed
    #[error("Invalid amount: {value}")]
    InvalidAmount { value: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON serialization error while encoding a request body
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CitadelError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a currency mismatch error
    pub fn currency_mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Create an invalid amount error
    pub fn invalid_amount(value: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Whether this error came from decoding the response body
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CitadelError::transport("connection refused").to_string(),
            "Unable to fetch response: connection refused"
        );
        assert_eq!(
            CitadelError::currency_mismatch("BTC", "LTC").to_string(),
            "Total coin already set to BTC and does not match position coin LTC"
        );
    }

    #[test]
    fn test_error_kind_predicates() {
        assert!(CitadelError::transport("x").is_transport());
        assert!(!CitadelError::transport("x").is_decode());
        assert!(CitadelError::decode("x").is_decode());
    }
}

//! Common constants for the merchant API wire protocol

/// Default merchant API base URL
pub const DEFAULT_BASE_URL: &str = "https://citadel.li/merchant_api/v1/";

/// Header names carrying credentials
pub mod headers {
    /// Secret token header, used by private calls
    pub const AUTH: &str = "X-Citadel-Auth";
    /// Public token header, used by public calls
    pub const PUBLIC: &str = "X-Citadel-Public";
}

/// Request content types
pub mod content_types {
    /// JSON-encoded request body
    pub const JSON: &str = "application/json";
    /// Form content type sent with empty bodies
    pub const FORM: &str = "application/x-www-form-urlencoded";
}

/// Environment variables read by [`ClientConfig::from_env`](super::ClientConfig::from_env)
pub mod env {
    /// Secret API token
    pub const API_SECRET: &str = "CITADEL_API_SECRET";
    /// Public API token
    pub const API_PUBLIC: &str = "CITADEL_API_PUBLIC";
    /// Optional base URL override
    pub const BASE_URL: &str = "CITADEL_BASE_URL";
}

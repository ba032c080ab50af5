//! Request encoding: auth modes, verbs and the prepared wire request

use super::config::Credentials;
use super::constants::{content_types, headers};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Selects which credential authenticates a request and how its body is encoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthMode {
    /// Secret-token auth, form content type, empty body
    #[default]
    Secret,
    /// Secret-token auth with a JSON body
    Json,
    /// Public-token auth
    Public,
}

impl AuthMode {
    /// Flag string used by the merchant API docs (`""`, `"json"`, `"pub"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Secret => "",
            AuthMode::Json => "json",
            AuthMode::Public => "pub",
        }
    }

    /// Header name carrying the credential for this mode
    pub fn header_name(&self) -> &'static str {
        match self {
            AuthMode::Public => headers::PUBLIC,
            AuthMode::Secret | AuthMode::Json => headers::AUTH,
        }
    }

    /// Credential value sent for this mode
    pub fn credential<'a>(&self, credentials: &'a Credentials) -> &'a str {
        match self {
            AuthMode::Public => credentials.public(),
            AuthMode::Secret | AuthMode::Json => credentials.secret(),
        }
    }

    /// Content type sent for this mode
    pub fn content_type(&self) -> &'static str {
        match self {
            AuthMode::Json => content_types::JSON,
            AuthMode::Secret | AuthMode::Public => content_types::FORM,
        }
    }
}

impl FromStr for AuthMode {
    type Err = crate::CitadelError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "" => Ok(AuthMode::Secret),
            "json" => Ok(AuthMode::Json),
            "pub" => Ok(AuthMode::Public),
            other => Err(crate::CitadelError::config(format!(
                "Unknown auth mode: {}",
                other
            ))),
        }
    }
}

/// HTTP verbs used by the merchant API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Verb {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Upper-case method name
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }

    /// Whether requests with this verb carry a body
    pub fn carries_body(&self) -> bool {
        matches!(self, Verb::Post | Verb::Put)
    }

    /// Equivalent `http::Method`
    pub fn to_method(self) -> http::Method {
        match self {
            Verb::Get => http::Method::GET,
            Verb::Post => http::Method::POST,
            Verb::Put => http::Method::PUT,
            Verb::Delete => http::Method::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = crate::CitadelError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "DELETE" => Ok(Verb::Delete),
            other => Err(crate::CitadelError::config(format!(
                "Unsupported HTTP method: {}",
                other
            ))),
        }
    }
}

/// Join a base URL and a path with exactly one slash between them
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// A fully encoded request, ready to hand to a transport
#[derive(Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub verb: Verb,
    pub url: String,
    /// Credential header name
    pub auth_header: &'static str,
    /// Credential header value
    pub auth_value: String,
    pub content_type: &'static str,
    /// Encoded body; always `None` for GET and DELETE
    pub body: Option<String>,
}

impl fmt::Debug for PreparedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedRequest")
            .field("verb", &self.verb)
            .field("url", &self.url)
            .field("auth_header", &self.auth_header)
            .field("auth_value", &"<redacted>")
            .field("content_type", &self.content_type)
            .field("body", &self.body)
            .finish()
    }
}

impl PreparedRequest {
    /// Encode a request for `url`
    ///
    /// The credential is picked by `auth` alone. Only [`AuthMode::Json`]
    /// serializes `body`; other modes send an empty body. GET and DELETE
    /// never carry one.
    pub fn build(
        url: String,
        verb: Verb,
        body: Option<&Value>,
        auth: AuthMode,
        credentials: &Credentials,
    ) -> crate::Result<Self> {
        let content = match (auth, body) {
            (AuthMode::Json, Some(body)) => serde_json::to_string(body)?,
            (AuthMode::Json, None) => serde_json::to_string(&Value::Array(Vec::new()))?,
            (_, Some(_)) => {
                tracing::warn!(
                    "Dropping request body for {} {}: only json requests carry one",
                    verb,
                    url
                );
                String::new()
            }
            (_, None) => String::new(),
        };

        Ok(Self {
            verb,
            url,
            auth_header: auth.header_name(),
            auth_value: auth.credential(credentials).to_string(),
            content_type: auth.content_type(),
            body: verb.carries_body().then_some(content),
        })
    }

    /// Value of the `Content-Length` header
    pub fn content_length(&self) -> usize {
        self.body.as_ref().map_or(0, String::len)
    }
}

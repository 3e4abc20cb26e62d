//
//  cloudflare-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module turns the account credentials given to the client into the
//! headers the Cloudflare v4 API expects.
//!
//! ## Supported Authentication Schemes
//!
//! - **API Token**: `Authorization: Bearer <token>`. The recommended scheme.
//! - **User Service Key**: `X-Auth-User-Service-Key: <key>`, used when the
//!   configured key carries the `v1.0-` prefix (Origin CA keys).
//! - **Global API Key**: the `X-Auth-Email` and `X-Auth-Key` header pair.
//!
//! ## Precedence
//!
//! Exactly one scheme is used per request. [`AuthScheme::select`] applies a
//! fixed order: token, then user service key, then email + key. Credentials
//! that satisfy none of them produce no auth header at all; the API rejects
//! such requests server side.
//!
//! ## Example
//!
//! ```rust
//! use cloudflare_client::auth::{AuthScheme, Credentials};
//!
//! let credentials = Credentials::token("my-api-token");
//! let scheme = AuthScheme::select(&credentials).expect("token configured");
//! assert_eq!(scheme.name(), "token");
//! ```

mod token;

pub use token::*;

use std::fmt;

use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

/// Header carrying the account email for global API key auth.
pub const HEADER_AUTH_EMAIL: &str = "X-Auth-Email";

/// Header carrying the global API key.
pub const HEADER_AUTH_KEY: &str = "X-Auth-Key";

/// Header carrying an Origin CA user service key.
pub const HEADER_USER_SERVICE_KEY: &str = "X-Auth-User-Service-Key";

/// Prefix that marks a key as a user service key rather than a global API key.
pub const USER_SERVICE_KEY_PREFIX: &str = "v1.0-";

/// Account credentials for the Cloudflare API.
///
/// Every field is optional. Empty strings are treated the same as `None`, so
/// values read from a half-filled config file or an unset environment
/// variable never produce a bogus header.
///
/// # Example
///
/// ```rust
/// use cloudflare_client::auth::Credentials;
///
/// let by_key = Credentials::email_key("user@example.com", "global-key");
/// assert!(by_key.token.is_none());
///
/// let by_token = Credentials::token("api-token");
/// assert_eq!(by_token.token.as_deref(), Some("api-token"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// The account email address, paired with `key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// A global API key or a `v1.0-` user service key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// A scoped API token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Credentials {
    /// Credentials holding only an API token.
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Credentials holding an email and global API key pair.
    pub fn email_key(email: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            key: Some(key.into()),
            token: None,
        }
    }

    /// Credentials holding only a user service key.
    pub fn service_key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Default::default()
        }
    }

    /// Returns `true` when no field carries a usable value.
    pub fn is_empty(&self) -> bool {
        non_empty(&self.email).is_none()
            && non_empty(&self.key).is_none()
            && non_empty(&self.token).is_none()
    }

    /// Overlays `other` on top of `self`, field by field.
    ///
    /// Fields that are set (and non-empty) in `other` win. Used for per-call
    /// auth overrides.
    pub fn merged_with(&self, other: &Credentials) -> Credentials {
        Credentials {
            email: non_empty(&other.email).or_else(|| non_empty(&self.email)).map(str::to_string),
            key: non_empty(&other.key).or_else(|| non_empty(&self.key)).map(str::to_string),
            token: non_empty(&other.token).or_else(|| non_empty(&self.token)).map(str::to_string),
        }
    }
}

// Secrets never reach logs through Debug.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// The authentication scheme chosen for a request.
///
/// Build one with [`AuthScheme::select`]; the variants hold the exact header
/// values that will be sent.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthScheme {
    /// Scoped API token sent as a bearer token.
    Token(String),

    /// Origin CA user service key.
    UserServiceKey(String),

    /// Account email plus global API key.
    EmailKey {
        /// The account email address.
        email: String,
        /// The global API key.
        key: String,
    },
}

impl AuthScheme {
    /// Chooses the auth scheme for a set of credentials.
    ///
    /// The order is fixed:
    ///
    /// 1. a non-empty `token` selects [`AuthScheme::Token`]
    /// 2. a `key` starting with `v1.0-` selects [`AuthScheme::UserServiceKey`]
    /// 3. a non-empty `email` together with a non-empty `key` selects
    ///    [`AuthScheme::EmailKey`]
    ///
    /// Anything else yields `None` and the request goes out unauthenticated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cloudflare_client::auth::{AuthScheme, Credentials};
    ///
    /// let both = Credentials {
    ///     email: Some("user@example.com".to_string()),
    ///     key: Some("global-key".to_string()),
    ///     token: Some("api-token".to_string()),
    /// };
    ///
    /// // The token wins over the email + key pair.
    /// assert_eq!(AuthScheme::select(&both), Some(AuthScheme::Token("api-token".to_string())));
    /// ```
    pub fn select(credentials: &Credentials) -> Option<Self> {
        if let Some(token) = non_empty(&credentials.token) {
            return Some(Self::Token(token.to_string()));
        }

        let key = non_empty(&credentials.key)?;
        if key.starts_with(USER_SERVICE_KEY_PREFIX) {
            return Some(Self::UserServiceKey(key.to_string()));
        }

        let email = non_empty(&credentials.email)?;
        Some(Self::EmailKey {
            email: email.to_string(),
            key: key.to_string(),
        })
    }

    /// Short name of the scheme, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Token(_) => "token",
            Self::UserServiceKey(_) => "user_service_key",
            Self::EmailKey { .. } => "email_key",
        }
    }

    /// The header name/value pairs this scheme sends, in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cloudflare_client::auth::AuthScheme;
    ///
    /// let scheme = AuthScheme::Token("T".to_string());
    /// assert_eq!(scheme.headers(), vec![("Authorization", "Bearer T".to_string())]);
    /// ```
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Token(token) => vec![("Authorization", format!("Bearer {}", token))],
            Self::UserServiceKey(key) => vec![(HEADER_USER_SERVICE_KEY, key.clone())],
            Self::EmailKey { email, key } => vec![
                (HEADER_AUTH_EMAIL, email.clone()),
                (HEADER_AUTH_KEY, key.clone()),
            ],
        }
    }

    /// Applies the scheme's headers to an HTTP request.
    ///
    /// # Parameters
    ///
    /// - `request`: The [`RequestBuilder`] to add authentication headers to.
    ///
    /// # Returns
    ///
    /// The same builder with the auth headers attached.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Token(token) => request.bearer_auth(token),
            Self::UserServiceKey(key) => request.header(HEADER_USER_SERVICE_KEY, key),
            Self::EmailKey { email, key } => request
                .header(HEADER_AUTH_EMAIL, email)
                .header(HEADER_AUTH_KEY, key),
        }
    }
}

impl fmt::Debug for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmailKey { email, .. } => f
                .debug_struct("EmailKey")
                .field("email", email)
                .field("key", &"<redacted>")
                .finish(),
            other => write!(f, "{}(<redacted>)", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: Option<&str>, key: Option<&str>, token: Option<&str>) -> Credentials {
        Credentials {
            email: email.map(String::from),
            key: key.map(String::from),
            token: token.map(String::from),
        }
    }

    #[test]
    fn test_token_only() {
        let scheme = AuthScheme::select(&creds(None, None, Some("T"))).unwrap();
        assert_eq!(scheme, AuthScheme::Token("T".to_string()));
        assert_eq!(scheme.headers(), vec![("Authorization", "Bearer T".to_string())]);
    }

    #[test]
    fn test_email_key() {
        let scheme = AuthScheme::select(&creds(Some("e"), Some("k"), None)).unwrap();
        assert_eq!(
            scheme.headers(),
            vec![
                (HEADER_AUTH_EMAIL, "e".to_string()),
                (HEADER_AUTH_KEY, "k".to_string()),
            ]
        );
    }

    #[test]
    fn test_token_wins_over_email_key() {
        let scheme = AuthScheme::select(&creds(Some("e"), Some("k"), Some("T"))).unwrap();
        assert_eq!(scheme.name(), "token");
    }

    #[test]
    fn test_token_wins_over_service_key() {
        let scheme = AuthScheme::select(&creds(None, Some("v1.0-abc"), Some("T"))).unwrap();
        assert_eq!(scheme.name(), "token");
    }

    #[test]
    fn test_service_key_ignores_email() {
        let scheme = AuthScheme::select(&creds(Some("e"), Some("v1.0-abc"), None)).unwrap();
        assert_eq!(scheme, AuthScheme::UserServiceKey("v1.0-abc".to_string()));
    }

    #[test]
    fn test_incomplete_credentials_select_nothing() {
        assert_eq!(AuthScheme::select(&creds(None, None, None)), None);
        assert_eq!(AuthScheme::select(&creds(Some("e"), None, None)), None);
        assert_eq!(AuthScheme::select(&creds(None, Some("k"), None)), None);
        assert_eq!(AuthScheme::select(&creds(Some(""), Some("k"), Some("  "))), None);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let all = [None, Some(""), Some("x")];
        for email in all {
            for key in all {
                for token in all {
                    let c = creds(email, key, token);
                    assert_eq!(AuthScheme::select(&c), AuthScheme::select(&c.clone()));
                    if token == Some("x") {
                        assert_eq!(AuthScheme::select(&c).unwrap().name(), "token");
                    } else if email == Some("x") && key == Some("x") {
                        assert_eq!(AuthScheme::select(&c).unwrap().name(), "email_key");
                    }
                }
            }
        }
    }

    #[test]
    fn test_merged_with_overrides_set_fields() {
        let base = creds(Some("e"), Some("k"), None);
        let merged = base.merged_with(&creds(None, None, Some("T")));
        assert_eq!(merged.email.as_deref(), Some("e"));
        assert_eq!(merged.token.as_deref(), Some("T"));

        let unchanged = base.merged_with(&creds(Some(""), None, None));
        assert_eq!(unchanged.email.as_deref(), Some("e"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", creds(Some("e"), Some("secret-key"), Some("secret-token")));
        assert!(!rendered.contains("secret-key"));
        assert!(!rendered.contains("secret-token"));

        let scheme = AuthScheme::Token("secret-token".to_string());
        assert!(!format!("{:?}", scheme).contains("secret-token"));
    }
}

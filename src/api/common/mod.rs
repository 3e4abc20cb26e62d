//
//  cloudflare-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! Shared types used by the client and every resource adapter: the crate
//! error type, the structured API failure, and the Cloudflare response
//! envelope.
//!
//! # Overview
//!
//! - [`Error`] - Unified error type for all operations
//! - [`ApiError`] - A failure reported by the API (`success: false` or non-2xx)
//! - [`ApiMessage`] - One `{code, message}` entry from an envelope
//! - [`Envelope`] / [`ResultInfo`] - Response wrapper and pagination data
//!   (re-exported from the [`envelope`] submodule)
//!
//! # Example
//!
//! ```rust
//! use cloudflare_client::{ApiError, Error};
//!
//! fn describe(result: Result<(), Error>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(Error::MissingParameter { parameter, .. }) => format!("missing {}", parameter),
//!         Err(Error::Api(e)) if e.is_not_found() => "not found".to_string(),
//!         Err(e) => e.to_string(),
//!     }
//! }
//! ```

mod envelope;

pub use envelope::*;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all Cloudflare API operations.
///
/// # Variants
///
/// | Variant | Raised by | Network call made? |
/// |---------|-----------|--------------------|
/// | `MissingParameter` | resource adapters | No |
/// | `InvalidParameter` | resource adapters | No |
/// | `Serialize` | request construction | No |
/// | `Url` | client construction | No |
/// | `Transport` | reqwest (DNS, TLS, proxy, timeout) | Yes |
/// | `Api` | non-2xx or `success: false` | Yes |
/// | `Decode` | unexpected 2xx body | Yes |
///
/// # Notes
///
/// - Nothing is retried; every failure reaches the caller
/// - `Transport` converts from `reqwest::Error` with `?`
#[derive(Error, Debug)]
pub enum Error {
    /// A required path identifier was empty.
    ///
    /// Raised before any request is built.
    #[error("Missing required parameter '{parameter}' for {resource}")]
    MissingParameter {
        /// The adapter that rejected the call (e.g. `dns_records`).
        resource: &'static str,
        /// The identifier that was missing (e.g. `zone_id`).
        parameter: &'static str,
    },

    /// An identifier would not address a single path segment (`.` or `..`).
    ///
    /// Raised before any request is built.
    #[error("Invalid value '{value}' for parameter '{parameter}' of {resource}")]
    InvalidParameter {
        /// The adapter that rejected the call.
        resource: &'static str,
        /// The identifier that was rejected.
        parameter: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A network-level error occurred during the request.
    ///
    /// Connection failures, timeouts, DNS resolution errors, proxy
    /// negotiation errors and TLS errors all land here unchanged.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A successful response did not have the expected shape.
    #[error("Failed to decode API response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request parameters or body could not be encoded as JSON.
    #[error("Failed to encode request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The configured base URL is not a valid URL.
    #[error("Invalid base URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` for failures raised before anything was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. }
                | Self::InvalidParameter { .. }
                | Self::Serialize(_)
                | Self::Url(_)
        )
    }

    /// The structured API failure, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// One `{code, message}` entry from the `errors` or `messages` array.
///
/// # Example
///
/// ```rust
/// use cloudflare_client::ApiMessage;
///
/// let json = r#"{"code": 7003, "message": "Could not route to /zones/nope"}"#;
/// let message: ApiMessage = serde_json::from_str(json).unwrap();
/// assert_eq!(message.code, 7003);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Machine-readable Cloudflare error code.
    #[serde(default)]
    pub code: i64,

    /// Human-readable description.
    #[serde(default)]
    pub message: String,

    /// Nested causes, when the API reports them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error_chain: Vec<ApiMessage>,
}

/// A failure reported by the Cloudflare API.
///
/// Built from any non-2xx response, and from 2xx responses whose envelope
/// says `success: false`.
///
/// # Example
///
/// ```rust
/// use cloudflare_client::ApiError;
/// use reqwest::StatusCode;
///
/// let body = r#"{"success": false, "errors": [{"code": 9109, "message": "Invalid access token"}], "messages": [], "result": null}"#;
/// let error = ApiError::from_response(StatusCode::FORBIDDEN, body);
///
/// assert_eq!(error.status, 403);
/// assert_eq!(error.codes(), vec![9109]);
/// assert!(error.is_forbidden());
/// assert_eq!(error.message, "Invalid access token");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cloudflare API error (HTTP {status}): {message}")]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: u16,

    /// The envelope's `errors` array, empty when the body was not an envelope.
    pub errors: Vec<ApiMessage>,

    /// Human-readable summary of the failure.
    pub message: String,
}

impl ApiError {
    /// Builds an error from a failed response body.
    ///
    /// Cloudflare error bodies are normally envelopes:
    /// ```json
    /// {"success": false, "errors": [{"code": 10000, "message": "Authentication error"}]}
    /// ```
    /// Bodies that are not envelopes (proxies, load balancers, HTML error
    /// pages) fall back to a plain `{"message": ...}` field or the raw text.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        if let Ok(envelope) = serde_json::from_str::<RawEnvelope>(body) {
            if !envelope.errors.is_empty() {
                return Self::from_errors(status, envelope.errors);
            }
        }

        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                json.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                } else {
                    trimmed.to_string()
                }
            });

        Self {
            status: status.as_u16(),
            errors: Vec::new(),
            message,
        }
    }

    /// Builds an error from an envelope's `errors` array.
    pub fn from_errors(status: StatusCode, errors: Vec<ApiMessage>) -> Self {
        let message = if errors.is_empty() {
            "API reported failure without details".to_string()
        } else {
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        };

        Self {
            status: status.as_u16(),
            errors,
            message,
        }
    }

    /// The machine-readable codes from the `errors` array, in order.
    pub fn codes(&self) -> Vec<i64> {
        self.errors.iter().map(|e| e.code).collect()
    }

    /// HTTP 401.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// HTTP 403.
    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    /// HTTP 404.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// HTTP 429.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    /// HTTP 5xx.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// The `{"id": ...}` result returned by most delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceId {
    /// Identifier of the affected resource.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_errors() {
        let body = r#"{"success":false,"errors":[{"code":1003,"message":"Invalid or missing zone id."},{"code":7003,"message":"Could not route"}],"messages":[],"result":null}"#;
        let error = ApiError::from_response(StatusCode::BAD_REQUEST, body);
        assert_eq!(error.codes(), vec![1003, 7003]);
        assert_eq!(error.message, "Invalid or missing zone id.; Could not route");
        assert_eq!(
            error.to_string(),
            "Cloudflare API error (HTTP 400): Invalid or missing zone id.; Could not route"
        );
    }

    #[test]
    fn test_plain_message_body() {
        let error = ApiError::from_response(StatusCode::BAD_GATEWAY, r#"{"message":"upstream down"}"#);
        assert!(error.errors.is_empty());
        assert_eq!(error.message, "upstream down");
        assert!(error.is_server_error());
    }

    #[test]
    fn test_non_json_body() {
        let error = ApiError::from_response(StatusCode::TOO_MANY_REQUESTS, "<html>slow down</html>");
        assert_eq!(error.message, "<html>slow down</html>");
        assert!(error.is_rate_limited());

        let empty = ApiError::from_response(StatusCode::NOT_FOUND, "");
        assert_eq!(empty.message, "Not Found");
        assert!(empty.is_not_found());
    }

    #[test]
    fn test_error_chain_deserializes() {
        let json = r#"{"code":1004,"message":"DNS Validation Error","error_chain":[{"code":9005,"message":"Content for A record is invalid."}]}"#;
        let message: ApiMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.error_chain.len(), 1);
        assert_eq!(message.error_chain[0].code, 9005);
    }

    #[test]
    fn test_error_classification() {
        let missing = Error::MissingParameter {
            resource: "zones",
            parameter: "zone_id",
        };
        assert!(missing.is_local());
        assert!(missing.api_error().is_none());
        assert_eq!(
            missing.to_string(),
            "Missing required parameter 'zone_id' for zones"
        );

        let invalid = Error::InvalidParameter {
            resource: "zones",
            parameter: "zone_id",
            value: "..".to_string(),
        };
        assert!(invalid.is_local());
        assert_eq!(
            invalid.to_string(),
            "Invalid value '..' for parameter 'zone_id' of zones"
        );

        let api: Error = ApiError::from_errors(StatusCode::OK, Vec::new()).into();
        assert!(!api.is_local());
        assert_eq!(api.api_error().map(|e| e.status), Some(200));
    }
}

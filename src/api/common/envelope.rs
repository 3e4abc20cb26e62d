//
//  cloudflare-client
//  api/common/envelope.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response Envelope and Pagination Types
//!
//! Every JSON response from the v4 API is wrapped in the same envelope:
//!
//! ```json
//! {
//!   "success": true,
//!   "errors": [],
//!   "messages": [],
//!   "result": { "id": "023e105f4ecef8ad9ca31a8372d0c353" },
//!   "result_info": { "page": 1, "per_page": 20, "count": 1, "total_count": 1, "total_pages": 1 }
//! }
//! ```
//!
//! The client checks `success`, returns `result` from most calls, and hands
//! the whole [`Envelope`] to callers who need `result_info` for paging.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ApiMessage;

/// The untyped envelope as it comes off the wire.
///
/// Parsed first so that `success` can be checked before `result` is decoded
/// into the caller's type.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawEnvelope {
    #[serde(default = "default_success")]
    pub success: bool,

    #[serde(default)]
    pub result: Value,

    #[serde(default)]
    pub errors: Vec<ApiMessage>,

    #[serde(default)]
    pub messages: Vec<Value>,

    #[serde(default)]
    pub result_info: Option<ResultInfo>,
}

// Bodies without a `success` field only reach the parser on a 2xx status.
fn default_success() -> bool {
    true
}

impl RawEnvelope {
    /// Decodes `result` into `T`, keeping the rest of the envelope.
    pub fn decode<T: serde::de::DeserializeOwned>(self) -> serde_json::Result<Envelope<T>> {
        Ok(Envelope {
            success: self.success,
            result: serde_json::from_value(self.result)?,
            errors: self.errors,
            messages: self.messages,
            result_info: self.result_info,
        })
    }
}

/// A decoded API response envelope.
///
/// # Type Parameters
///
/// - `T` - The type of the `result` payload
///
/// # Example
///
/// ```rust,no_run
/// use cloudflare_client::{ApiRequest, Cloudflare, Credentials};
/// use cloudflare_client::api::resources::Zone;
///
/// # async fn example() -> cloudflare_client::Result<()> {
/// let cf = Cloudflare::new(Credentials::token("api-token"), None)?;
/// let page = cf
///     .client()
///     .execute_envelope::<Vec<Zone>>(ApiRequest::get("zones"))
///     .await?;
///
/// if let Some(info) = &page.result_info {
///     println!("page {:?} of {:?}", info.page, info.total_pages);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Always `true` for envelopes returned to callers.
    pub success: bool,

    /// The decoded payload.
    pub result: T,

    /// Errors reported alongside a successful result (normally empty).
    pub errors: Vec<ApiMessage>,

    /// Informational messages, passed through untouched.
    pub messages: Vec<Value>,

    /// Paging data for list endpoints.
    pub result_info: Option<ResultInfo>,
}

/// Paging data attached to list responses.
///
/// Cloudflare uses page-number pagination (`page`, `per_page`) on most
/// endpoints and cursor pagination on a few (KV keys).
///
/// # Example
///
/// ```rust
/// use cloudflare_client::ResultInfo;
///
/// let info: ResultInfo = serde_json::from_str(
///     r#"{"page": 1, "per_page": 20, "count": 20, "total_count": 45, "total_pages": 3}"#,
/// ).unwrap();
///
/// assert!(info.has_next());
/// assert_eq!(info.next_page(), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    /// Current page number (1-indexed).
    #[serde(default)]
    pub page: Option<u32>,

    /// Items per page.
    #[serde(default)]
    pub per_page: Option<u32>,

    /// Items in this page.
    #[serde(default)]
    pub count: Option<u32>,

    /// Items across all pages.
    #[serde(default)]
    pub total_count: Option<u64>,

    /// Number of pages.
    #[serde(default)]
    pub total_pages: Option<u32>,

    /// Cursor for the next page on cursor-paginated endpoints.
    #[serde(default)]
    pub cursor: Option<String>,
}

impl ResultInfo {
    /// Returns `true` if another page can be fetched.
    pub fn has_next(&self) -> bool {
        if self.cursor.as_deref().is_some_and(|c| !c.is_empty()) {
            return true;
        }

        matches!((self.page, self.total_pages), (Some(page), Some(total)) if page < total)
    }

    /// The page number to request next, for page-number pagination.
    pub fn next_page(&self) -> Option<u32> {
        match (self.page, self.total_pages) {
            (Some(page), Some(total)) if page < total => Some(page + 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_typed_result() {
        let raw: RawEnvelope = serde_json::from_str(
            r#"{"success":true,"errors":[],"messages":[{"code":1,"message":"hi"}],"result":{"id":"abc"}}"#,
        )
        .unwrap();
        let envelope = raw.decode::<super::super::ResourceId>().unwrap();
        assert_eq!(envelope.result.id, "abc");
        assert_eq!(envelope.messages.len(), 1);
        assert!(envelope.result_info.is_none());
    }

    #[test]
    fn test_missing_result_is_null() {
        let raw: RawEnvelope = serde_json::from_str(r#"{"success":true}"#).unwrap();
        let envelope = raw.decode::<Option<String>>().unwrap();
        assert_eq!(envelope.result, None);
    }

    #[test]
    fn test_cursor_pagination() {
        let info = ResultInfo {
            cursor: Some("6Ck1la0VxJ0djhidm1MdX2FyD".to_string()),
            ..Default::default()
        };
        assert!(info.has_next());
        assert_eq!(info.next_page(), None);

        let last = ResultInfo {
            page: Some(3),
            total_pages: Some(3),
            cursor: Some(String::new()),
            ..Default::default()
        };
        assert!(!last.has_next());
    }
}

//
//  cloudflare-client
//  api/resources/enterprise_zone_workers_kv.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workers KV keys and values.
//!
//! All calls are scoped to one namespace:
//! `accounts/{account_id}/storage/kv/namespaces/{namespace_id}`.
//!
//! Values are opaque text. They are written with `text/plain` and read back
//! as the raw response body, not as an envelope. Key names are encoded as a
//! single path segment, so keys containing `/` or spaces are safe.
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudflare_client::{Cloudflare, Credentials};
//! use serde_json::json;
//!
//! # async fn example() -> cloudflare_client::Result<()> {
//! let cf = Cloudflare::new(Credentials::token("api-token"), None)?;
//! let kv = cf.enterprise_zone_workers_kv();
//!
//! kv.add("account", "namespace", "greeting", "hello").await?;
//! let value = kv.read("account", "namespace", "greeting").await?;
//! assert_eq!(value, "hello");
//!
//! kv.add_multi("account", "namespace", &json!([
//!     {"key": "a", "value": "1"},
//!     {"key": "b", "value": "2", "expiration_ttl": 3600}
//! ])).await?;
//! kv.del_multi("account", "namespace", &["a", "b"]).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::{segment, TEXT_CONTENT_TYPE};
use crate::api::client::{ApiRequest, Client};
use crate::api::common::Result;

const RESOURCE: &str = "enterprise_zone_workers_kv";

/// KV keys and values adapter.
#[derive(Debug, Clone)]
pub struct EnterpriseZoneWorkersKv {
    client: Arc<Client>,
}

impl EnterpriseZoneWorkersKv {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn namespace(account_id: &str, namespace_id: &str) -> Result<String> {
        Ok(format!(
            "accounts/{}/storage/kv/namespaces/{}",
            segment(RESOURCE, "account_id", account_id)?,
            segment(RESOURCE, "namespace_id", namespace_id)?
        ))
    }

    fn value(account_id: &str, namespace_id: &str, key: &str) -> Result<String> {
        Ok(format!(
            "{}/values/{}",
            Self::namespace(account_id, namespace_id)?,
            segment(RESOURCE, "key", key)?
        ))
    }

    /// Lists keys. `params` may carry `prefix`, `limit` and `cursor`.
    pub async fn browse(
        &self,
        account_id: &str,
        namespace_id: &str,
        params: Option<Value>,
    ) -> Result<Vec<Value>> {
        let path = format!("{}/keys", Self::namespace(account_id, namespace_id)?);
        self.client
            .execute(ApiRequest::get(path).params(params))
            .await
    }

    /// Reads a value as text.
    pub async fn read(&self, account_id: &str, namespace_id: &str, key: &str) -> Result<String> {
        let path = Self::value(account_id, namespace_id, key)?;
        self.client.execute_raw(ApiRequest::get(path)).await
    }

    /// Writes a value.
    pub async fn add(
        &self,
        account_id: &str,
        namespace_id: &str,
        key: &str,
        value: &str,
    ) -> Result<Value> {
        let path = Self::value(account_id, namespace_id, key)?;
        self.client
            .execute(ApiRequest::put(path).raw(value, TEXT_CONTENT_TYPE))
            .await
    }

    /// Deletes a key.
    pub async fn del(&self, account_id: &str, namespace_id: &str, key: &str) -> Result<Value> {
        let path = Self::value(account_id, namespace_id, key)?;
        self.client.delete(&path).await
    }

    /// Writes many pairs at once.
    ///
    /// `pairs` is a list of `{"key", "value", "expiration"?, "expiration_ttl"?,
    /// "base64"?}` objects.
    pub async fn add_multi<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        namespace_id: &str,
        pairs: &B,
    ) -> Result<Value> {
        let path = format!("{}/bulk", Self::namespace(account_id, namespace_id)?);
        self.client.put(&path, pairs).await
    }

    /// Deletes many keys at once. `keys` is a list of key names.
    pub async fn del_multi<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        namespace_id: &str,
        keys: &B,
    ) -> Result<Value> {
        let path = format!("{}/bulk", Self::namespace(account_id, namespace_id)?);
        self.client
            .execute(ApiRequest::delete(path).json(keys)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ClientOptions;
    use crate::api::common::Error;
    use crate::auth::Credentials;
    use mockito::Matcher;
    use serde_json::json;

    fn kv(server: &mockito::ServerGuard) -> EnterpriseZoneWorkersKv {
        EnterpriseZoneWorkersKv::new(Arc::new(
            Client::new(ClientOptions::new(Credentials::token("T")).with_base_url(server.url()))
                .unwrap(),
        ))
    }

    fn ok() -> String {
        json!({"success": true, "errors": [], "messages": [], "result": null}).to_string()
    }

    #[tokio::test]
    async fn test_write_and_read_value() {
        let mut server = mockito::Server::new_async().await;
        let write = server
            .mock("PUT", "/accounts/acc/storage/kv/namespaces/ns/values/greeting")
            .match_header("content-type", "text/plain")
            .match_body("hello")
            .with_body(ok())
            .create_async()
            .await;
        server
            .mock("GET", "/accounts/acc/storage/kv/namespaces/ns/values/greeting")
            .with_body("hello")
            .create_async()
            .await;

        let kv = kv(&server);
        kv.add("acc", "ns", "greeting", "hello").await.unwrap();
        write.assert_async().await;

        assert_eq!(kv.read("acc", "ns", "greeting").await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_key_is_one_segment() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/accounts/acc/storage/kv/namespaces/ns/values/user%2F42")
            .with_body(ok())
            .create_async()
            .await;

        kv(&server).del("acc", "ns", "user/42").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_key_whitespace_is_preserved() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/accounts/acc/storage/kv/namespaces/ns/values/%20padded%20")
            .with_body("value")
            .create_async()
            .await;

        let value = kv(&server).read("acc", "ns", " padded ").await.unwrap();
        assert_eq!(value, "value");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_dot_segment_key_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", Matcher::Any)
            .with_body(ok())
            .expect(0)
            .create_async()
            .await;

        let kv = kv(&server);
        for key in ["..", "."] {
            assert!(matches!(
                kv.del("acc", "ns", key).await,
                Err(Error::InvalidParameter { parameter: "key", .. })
            ));
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bulk_operations() {
        let mut server = mockito::Server::new_async().await;
        let put = server
            .mock("PUT", "/accounts/acc/storage/kv/namespaces/ns/bulk")
            .match_body(Matcher::Json(json!([{"key": "a", "value": "1"}])))
            .with_body(ok())
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/accounts/acc/storage/kv/namespaces/ns/bulk")
            .match_body(Matcher::Json(json!(["a", "b"])))
            .with_body(ok())
            .create_async()
            .await;

        let kv = kv(&server);
        kv.add_multi("acc", "ns", &json!([{"key": "a", "value": "1"}]))
            .await
            .unwrap();
        kv.del_multi("acc", "ns", &["a", "b"]).await.unwrap();

        put.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_identifiers() {
        let server = mockito::Server::new_async().await;
        let kv = kv(&server);

        assert!(matches!(
            kv.browse("acc", "", None).await,
            Err(Error::MissingParameter { parameter: "namespace_id", .. })
        ));
        assert!(matches!(
            kv.read("acc", "ns", "").await,
            Err(Error::MissingParameter { parameter: "key", .. })
        ));
        assert!(matches!(
            kv.add_multi("", "ns", &json!([])).await,
            Err(Error::MissingParameter { parameter: "account_id", .. })
        ));
    }
}

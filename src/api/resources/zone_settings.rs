//
//  cloudflare-client
//  api/resources/zone_settings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Zone settings API.
//!
//! Settings are addressed by name (`ssl`, `always_use_https`, `min_tls_version`,
//! ...). Each one reads back as `{"id": name, "value": ..., "editable": bool}`.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};

use super::segment;
use crate::api::client::{ApiRequest, Client};
use crate::api::common::{Error, Result};

const RESOURCE: &str = "zone_settings";

/// Zone settings adapter.
#[derive(Debug, Clone)]
pub struct ZoneSettings {
    client: Arc<Client>,
}

impl ZoneSettings {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn base(zone_id: &str) -> Result<String> {
        Ok(format!(
            "zones/{}/settings",
            segment(RESOURCE, "zone_id", zone_id)?
        ))
    }

    fn setting(zone_id: &str, name: &str) -> Result<String> {
        Ok(format!(
            "{}/{}",
            Self::base(zone_id)?,
            segment(RESOURCE, "setting", name)?
        ))
    }

    /// Lists every setting of a zone.
    pub async fn browse(&self, zone_id: &str) -> Result<Vec<Value>> {
        let path = Self::base(zone_id)?;
        self.client.get(&path).await
    }

    /// Reads a single setting.
    pub async fn read(&self, zone_id: &str, name: &str) -> Result<Value> {
        let path = Self::setting(zone_id, name)?;
        self.client.get(&path).await
    }

    /// Changes a single setting. `value` is wrapped as `{"value": value}`.
    pub async fn edit<V: Serialize + ?Sized>(
        &self,
        zone_id: &str,
        name: &str,
        value: &V,
    ) -> Result<Value> {
        let path = Self::setting(zone_id, name)?;
        let value = serde_json::to_value(value).map_err(Error::Serialize)?;
        self.client
            .execute(ApiRequest::patch(path).json(&json!({ "value": value }))?)
            .await
    }

    /// Changes several settings at once.
    ///
    /// `settings` is `[{"id": "ssl", "value": "full"}, ...]`; it is wrapped as
    /// `{"items": settings}`.
    pub async fn edit_all<B: Serialize + ?Sized>(
        &self,
        zone_id: &str,
        settings: &B,
    ) -> Result<Vec<Value>> {
        let path = Self::base(zone_id)?;
        let items = serde_json::to_value(settings).map_err(Error::Serialize)?;
        self.client
            .execute(ApiRequest::patch(path).json(&json!({ "items": items }))?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ClientOptions;
    use crate::auth::Credentials;
    use mockito::Matcher;

    fn settings(server: &mockito::ServerGuard) -> ZoneSettings {
        ZoneSettings::new(Arc::new(
            Client::new(ClientOptions::new(Credentials::token("T")).with_base_url(server.url()))
                .unwrap(),
        ))
    }

    #[tokio::test]
    async fn test_edit_wraps_value() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/zones/z1/settings/ssl")
            .match_body(Matcher::Json(json!({"value": "strict"})))
            .with_body(json!({"success": true, "errors": [], "messages": [], "result": {"id": "ssl", "value": "strict", "editable": true}}).to_string())
            .create_async()
            .await;

        let setting = settings(&server).edit("z1", "ssl", "strict").await.unwrap();
        assert_eq!(setting["value"], "strict");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_edit_all_wraps_items() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/zones/z1/settings")
            .match_body(Matcher::Json(json!({"items": [{"id": "always_online", "value": "on"}]})))
            .with_body(json!({"success": true, "errors": [], "messages": [], "result": [{"id": "always_online", "value": "on"}]}).to_string())
            .create_async()
            .await;

        let updated = settings(&server)
            .edit_all("z1", &json!([{"id": "always_online", "value": "on"}]))
            .await
            .unwrap();
        assert_eq!(updated.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_setting_name() {
        let server = mockito::Server::new_async().await;
        let err = settings(&server).read("z1", "").await.unwrap_err();
        assert!(err.is_local());
    }
}

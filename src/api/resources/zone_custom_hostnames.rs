//
//  cloudflare-client
//  api/resources/zone_custom_hostnames.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Custom hostnames (SSL for SaaS).

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::segment;
use crate::api::client::{ApiRequest, Client};
use crate::api::common::{ResourceId, Result};

const RESOURCE: &str = "zone_custom_hostnames";

/// Custom hostnames adapter.
#[derive(Debug, Clone)]
pub struct ZoneCustomHostNames {
    client: Arc<Client>,
}

impl ZoneCustomHostNames {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn base(zone_id: &str) -> Result<String> {
        Ok(format!(
            "zones/{}/custom_hostnames",
            segment(RESOURCE, "zone_id", zone_id)?
        ))
    }

    fn hostname(zone_id: &str, id: &str) -> Result<String> {
        Ok(format!(
            "{}/{}",
            Self::base(zone_id)?,
            segment(RESOURCE, "hostname_id", id)?
        ))
    }

    /// Lists custom hostnames. `params` may filter by `hostname` or `ssl`.
    pub async fn browse(&self, zone_id: &str, params: Option<Value>) -> Result<Vec<Value>> {
        let path = Self::base(zone_id)?;
        self.client
            .execute(ApiRequest::get(path).params(params))
            .await
    }

    pub async fn read(&self, zone_id: &str, id: &str) -> Result<Value> {
        let path = Self::hostname(zone_id, id)?;
        self.client.get(&path).await
    }

    /// Adds a hostname: `{"hostname": "app.customer.com", "ssl": {...}}`.
    pub async fn add<B: Serialize + ?Sized>(&self, zone_id: &str, hostname: &B) -> Result<Value> {
        let path = Self::base(zone_id)?;
        self.client.post(&path, hostname).await
    }

    /// Updates SSL settings or custom origin of a hostname.
    pub async fn edit<B: Serialize + ?Sized>(
        &self,
        zone_id: &str,
        id: &str,
        changes: &B,
    ) -> Result<Value> {
        let path = Self::hostname(zone_id, id)?;
        self.client.patch(&path, changes).await
    }

    pub async fn del(&self, zone_id: &str, id: &str) -> Result<ResourceId> {
        let path = Self::hostname(zone_id, id)?;
        self.client.delete(&path).await
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

    fn hostnames(server: &mockito::ServerGuard) -> ZoneCustomHostNames {
        ZoneCustomHostNames::new(Arc::new(
            Client::new(ClientOptions::new(Credentials::token("T")).with_base_url(server.url()))
                .unwrap(),
        ))
    }

    #[tokio::test]
    async fn test_edit_uses_patch() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/zones/z1/custom_hostnames/h1")
            .match_body(Matcher::Json(json!({"ssl": {"method": "http", "type": "dv"}})))
            .with_body(json!({"success": true, "errors": [], "messages": [], "result": {"id": "h1", "hostname": "app.customer.com"}}).to_string())
            .create_async()
            .await;

        let hostname = hostnames(&server)
            .edit("z1", "h1", &json!({"ssl": {"method": "http", "type": "dv"}}))
            .await
            .unwrap();
        assert_eq!(hostname["hostname"], "app.customer.com");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_browse_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/zones/z1/custom_hostnames")
            .match_query(Matcher::UrlEncoded("hostname".into(), "app.customer.com".into()))
            .with_body(json!({"success": true, "errors": [], "messages": [], "result": []}).to_string())
            .create_async()
            .await;

        let list = hostnames(&server)
            .browse("z1", Some(json!({"hostname": "app.customer.com"})))
            .await
            .unwrap();
        assert!(list.is_empty());
        mock.assert_async().await;

        assert!(matches!(
            hostnames(&server).del("z1", "").await,
            Err(Error::MissingParameter { parameter: "hostname_id", .. })
        ));
    }
}

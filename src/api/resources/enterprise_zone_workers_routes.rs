//
//  cloudflare-client
//  api/resources/enterprise_zone_workers_routes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workers routes for multi-script (enterprise) zones.
//!
//! A route maps a URL `pattern` to a named `script`.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::segment;
use crate::api::client::Client;
use crate::api::common::Result;

const RESOURCE: &str = "enterprise_zone_workers_routes";

/// Enterprise Workers routes adapter.
#[derive(Debug, Clone)]
pub struct EnterpriseZoneWorkersRoutes {
    client: Arc<Client>,
}

impl EnterpriseZoneWorkersRoutes {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn base(zone_id: &str) -> Result<String> {
        Ok(format!(
            "zones/{}/workers/routes",
            segment(RESOURCE, "zone_id", zone_id)?
        ))
    }

    fn route(zone_id: &str, id: &str) -> Result<String> {
        Ok(format!(
            "{}/{}",
            Self::base(zone_id)?,
            segment(RESOURCE, "route_id", id)?
        ))
    }

    pub async fn browse(&self, zone_id: &str) -> Result<Vec<Value>> {
        let path = Self::base(zone_id)?;
        self.client.get(&path).await
    }

    pub async fn read(&self, zone_id: &str, id: &str) -> Result<Value> {
        let path = Self::route(zone_id, id)?;
        self.client.get(&path).await
    }

    /// Creates a route: `{"pattern": "example.com/*", "script": "edge"}`.
    pub async fn add<B: Serialize + ?Sized>(&self, zone_id: &str, route: &B) -> Result<Value> {
        let path = Self::base(zone_id)?;
        self.client.post(&path, route).await
    }

    pub async fn edit<B: Serialize + ?Sized>(
        &self,
        zone_id: &str,
        id: &str,
        route: &B,
    ) -> Result<Value> {
        let path = Self::route(zone_id, id)?;
        self.client.put(&path, route).await
    }

    pub async fn del(&self, zone_id: &str, id: &str) -> Result<Value> {
        let path = Self::route(zone_id, id)?;
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

    #[tokio::test]
    async fn test_edit_route() {
        let mut server = mockito::Server::new_async().await;
        let routes = EnterpriseZoneWorkersRoutes::new(Arc::new(
            Client::new(ClientOptions::new(Credentials::token("T")).with_base_url(server.url()))
                .unwrap(),
        ));

        let mock = server
            .mock("PUT", "/zones/z1/workers/routes/r1")
            .match_body(Matcher::Json(json!({"pattern": "example.com/api/*", "script": "api"})))
            .with_body(json!({"success": true, "errors": [], "messages": [], "result": {"id": "r1", "pattern": "example.com/api/*", "script": "api"}}).to_string())
            .create_async()
            .await;

        let route = routes
            .edit("z1", "r1", &json!({"pattern": "example.com/api/*", "script": "api"}))
            .await
            .unwrap();
        assert_eq!(route["script"], "api");
        mock.assert_async().await;

        assert!(matches!(
            routes.read("z1", " ").await,
            Err(Error::MissingParameter { parameter: "route_id", .. })
        ));
    }
}

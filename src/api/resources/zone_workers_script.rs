//
//  cloudflare-client
//  api/resources/zone_workers_script.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The single Worker script of a zone (`zones/{zone_id}/workers/script`).

use std::sync::Arc;

use serde_json::Value;

use super::{segment, JAVASCRIPT_CONTENT_TYPE};
use crate::api::client::{ApiRequest, Client};
use crate::api::common::Result;

const RESOURCE: &str = "zone_workers_script";

/// Zone Worker script adapter.
#[derive(Debug, Clone)]
pub struct ZoneWorkersScript {
    client: Arc<Client>,
}

impl ZoneWorkersScript {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn path(zone_id: &str) -> Result<String> {
        Ok(format!(
            "zones/{}/workers/script",
            segment(RESOURCE, "zone_id", zone_id)?
        ))
    }

    /// Downloads the script source.
    pub async fn read(&self, zone_id: &str) -> Result<String> {
        let path = Self::path(zone_id)?;
        self.client.execute_raw(ApiRequest::get(path)).await
    }

    /// Uploads the script, replacing any existing one.
    pub async fn edit(&self, zone_id: &str, script: &str) -> Result<Value> {
        let path = Self::path(zone_id)?;
        self.client
            .execute(ApiRequest::put(path).raw(script, JAVASCRIPT_CONTENT_TYPE))
            .await
    }

    /// Removes the script.
    pub async fn del(&self, zone_id: &str) -> Result<Value> {
        let path = Self::path(zone_id)?;
        self.client.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ClientOptions;
    use crate::auth::Credentials;
    use serde_json::json;

    #[tokio::test]
    async fn test_upload_then_read() {
        let mut server = mockito::Server::new_async().await;
        let script = ZoneWorkersScript::new(Arc::new(
            Client::new(ClientOptions::new(Credentials::token("T")).with_base_url(server.url()))
                .unwrap(),
        ));
        let source = "addEventListener('fetch', e => e.respondWith(new Response('hi')))";

        let put = server
            .mock("PUT", "/zones/z1/workers/script")
            .match_header("content-type", "application/javascript")
            .match_body(source)
            .with_body(json!({"success": true, "errors": [], "messages": [], "result": {"script": source, "etag": "abc"}}).to_string())
            .create_async()
            .await;
        server
            .mock("GET", "/zones/z1/workers/script")
            .with_body(source)
            .create_async()
            .await;

        let stored = script.edit("z1", source).await.unwrap();
        assert_eq!(stored["etag"], "abc");
        put.assert_async().await;

        assert_eq!(script.read("z1").await.unwrap(), source);
        assert!(script.del(" ").await.unwrap_err().is_local());
    }
}

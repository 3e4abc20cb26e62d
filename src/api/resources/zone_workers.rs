//
//  cloudflare-client
//  api/resources/zone_workers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Single-script zone Workers: script validation.

use std::sync::Arc;

use serde_json::Value;

use super::{segment, JAVASCRIPT_CONTENT_TYPE};
use crate::api::client::{ApiRequest, Client};
use crate::api::common::Result;

const RESOURCE: &str = "zone_workers";

/// Zone Workers adapter.
#[derive(Debug, Clone)]
pub struct ZoneWorkers {
    client: Arc<Client>,
}

impl ZoneWorkers {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Asks the API to check a script without deploying it.
    ///
    /// A script that fails to compile comes back as [`crate::Error::Api`]
    /// with the parser's messages.
    pub async fn validate(&self, zone_id: &str, script: &str) -> Result<Value> {
        let path = format!(
            "zones/{}/workers/script/check",
            segment(RESOURCE, "zone_id", zone_id)?
        );
        self.client
            .execute(ApiRequest::put(path).raw(script, JAVASCRIPT_CONTENT_TYPE))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ClientOptions;
    use crate::api::common::Error;
    use crate::auth::Credentials;
    use serde_json::json;

    fn workers(server: &mockito::ServerGuard) -> ZoneWorkers {
        ZoneWorkers::new(Arc::new(
            Client::new(ClientOptions::new(Credentials::token("T")).with_base_url(server.url()))
                .unwrap(),
        ))
    }

    #[tokio::test]
    async fn test_validate_reports_api_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/zones/z1/workers/script/check")
            .match_header("content-type", "application/javascript")
            .match_body("addEventListener(")
            .with_status(400)
            .with_body(
                json!({
                    "success": false,
                    "errors": [{"code": 10021, "message": "Uncaught SyntaxError: Unexpected end of input"}],
                    "messages": [],
                    "result": null
                })
                .to_string(),
            )
            .create_async()
            .await;

        let err = workers(&server).validate("z1", "addEventListener(").await.unwrap_err();
        let api = err.api_error().expect("api error");
        assert_eq!(api.status, 400);
        assert_eq!(api.codes(), vec![10021]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_zone() {
        let server = mockito::Server::new_async().await;
        assert!(matches!(
            workers(&server).validate("", "x").await,
            Err(Error::MissingParameter { parameter: "zone_id", .. })
        ));
    }
}

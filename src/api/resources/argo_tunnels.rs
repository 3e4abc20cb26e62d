//
//  cloudflare-client
//  api/resources/argo_tunnels.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Argo Tunnels API (`accounts/{account_id}/tunnels`).

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::segment;
use crate::api::client::{ApiRequest, Client};
use crate::api::common::Result;

const RESOURCE: &str = "argo_tunnels";

/// Argo Tunnels adapter.
#[derive(Debug, Clone)]
pub struct ArgoTunnels {
    client: Arc<Client>,
}

impl ArgoTunnels {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn base(account_id: &str) -> Result<String> {
        Ok(format!(
            "accounts/{}/tunnels",
            segment(RESOURCE, "account_id", account_id)?
        ))
    }

    fn tunnel(account_id: &str, id: &str) -> Result<String> {
        Ok(format!(
            "{}/{}",
            Self::base(account_id)?,
            segment(RESOURCE, "tunnel_id", id)?
        ))
    }

    /// Lists tunnels. `params` may filter by `name`, `is_deleted` and so on.
    pub async fn browse(&self, account_id: &str, params: Option<Value>) -> Result<Vec<Value>> {
        let path = Self::base(account_id)?;
        self.client
            .execute(ApiRequest::get(path).params(params))
            .await
    }

    /// Fetches one tunnel.
    pub async fn read(&self, account_id: &str, id: &str) -> Result<Value> {
        let path = Self::tunnel(account_id, id)?;
        self.client.get(&path).await
    }

    /// Creates a tunnel. `tunnel` carries `name` and `tunnel_secret`.
    pub async fn add<B: Serialize + ?Sized>(&self, account_id: &str, tunnel: &B) -> Result<Value> {
        let path = Self::base(account_id)?;
        self.client.post(&path, tunnel).await
    }

    /// Deletes a tunnel.
    pub async fn del(&self, account_id: &str, id: &str) -> Result<Value> {
        let path = Self::tunnel(account_id, id)?;
        self.client.delete(&path).await
    }

    /// Drops stale connections of a tunnel.
    pub async fn clean(&self, account_id: &str, id: &str) -> Result<Value> {
        let path = format!("{}/connections", Self::tunnel(account_id, id)?);
        self.client.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ClientOptions;
    use crate::api::common::Error;
    use crate::auth::Credentials;
    use serde_json::json;

    fn tunnels(server: &mockito::ServerGuard) -> ArgoTunnels {
        ArgoTunnels::new(Arc::new(
            Client::new(ClientOptions::new(Credentials::token("T")).with_base_url(server.url()))
                .unwrap(),
        ))
    }

    #[tokio::test]
    async fn test_clean_connections() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/accounts/acc/tunnels/t1/connections")
            .with_body(json!({"success": true, "errors": [], "messages": [], "result": null}).to_string())
            .create_async()
            .await;

        let result = tunnels(&server).clean("acc", "t1").await.unwrap();
        assert!(result.is_null());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_posts_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/accounts/acc/tunnels")
            .match_body(mockito::Matcher::PartialJson(json!({"name": "blog"})))
            .with_body(json!({"success": true, "errors": [], "messages": [], "result": {"id": "t1", "name": "blog"}}).to_string())
            .create_async()
            .await;

        let tunnel = tunnels(&server)
            .add("acc", &json!({"name": "blog", "tunnel_secret": "c2VjcmV0"}))
            .await
            .unwrap();
        assert_eq!(tunnel["id"], "t1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_identifiers() {
        let server = mockito::Server::new_async().await;
        let tunnels = tunnels(&server);

        assert!(matches!(
            tunnels.browse("", None).await,
            Err(Error::MissingParameter { parameter: "account_id", .. })
        ));
        assert!(matches!(
            tunnels.clean("acc", "").await,
            Err(Error::MissingParameter { parameter: "tunnel_id", .. })
        ));
    }
}

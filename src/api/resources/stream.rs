//
//  cloudflare-client
//  api/resources/stream.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Stream videos (`accounts/{account_id}/stream`).

use std::sync::Arc;

use serde_json::Value;

use super::segment;
use crate::api::client::{ApiRequest, Client};
use crate::api::common::Result;

const RESOURCE: &str = "stream";

/// Stream adapter.
#[derive(Debug, Clone)]
pub struct Stream {
    client: Arc<Client>,
}

impl Stream {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn base(account_id: &str) -> Result<String> {
        Ok(format!(
            "accounts/{}/stream",
            segment(RESOURCE, "account_id", account_id)?
        ))
    }

    fn video(account_id: &str, id: &str) -> Result<String> {
        Ok(format!(
            "{}/{}",
            Self::base(account_id)?,
            segment(RESOURCE, "video_id", id)?
        ))
    }

    /// Lists videos. `params` may carry `search`, `status`, `before`, `after`.
    pub async fn browse(&self, account_id: &str, params: Option<Value>) -> Result<Vec<Value>> {
        let path = Self::base(account_id)?;
        self.client
            .execute(ApiRequest::get(path).params(params))
            .await
    }

    /// Deletes a video.
    pub async fn del(&self, account_id: &str, id: &str) -> Result<Value> {
        let path = Self::video(account_id, id)?;
        self.client.delete(&path).await
    }

    /// Returns the HTML snippet that embeds the video player.
    pub async fn get_embed(&self, account_id: &str, id: &str) -> Result<String> {
        let path = format!("{}/embed", Self::video(account_id, id)?);
        self.client.execute_raw(ApiRequest::get(path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ClientOptions;
    use crate::api::common::Error;
    use crate::auth::Credentials;

    #[tokio::test]
    async fn test_get_embed_html() {
        let mut server = mockito::Server::new_async().await;
        let stream = Stream::new(Arc::new(
            Client::new(ClientOptions::new(Credentials::token("T")).with_base_url(server.url()))
                .unwrap(),
        ));

        let html = r#"<stream src="ea95132c15732412d22c1476fa83f27a"></stream>"#;
        server
            .mock("GET", "/accounts/acc/stream/v1/embed")
            .with_header("content-type", "text/html")
            .with_body(html)
            .create_async()
            .await;

        assert_eq!(stream.get_embed("acc", "v1").await.unwrap(), html);
        assert!(matches!(
            stream.get_embed("acc", "").await,
            Err(Error::MissingParameter { parameter: "video_id", .. })
        ));
    }
}

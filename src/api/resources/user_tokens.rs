//
//  cloudflare-client
//  api/resources/user_tokens.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! API tokens owned by the user (`user/tokens`).
//!
//! Besides CRUD this covers rolling a token's secret, listing the permission
//! groups a token policy may reference, and verifying the token the client
//! is authenticated with.
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudflare_client::{Cloudflare, Credentials};
//!
//! # async fn example() -> cloudflare_client::Result<()> {
//! let cf = Cloudflare::new(Credentials::token("api-token"), None)?;
//!
//! let verification = cf.user_tokens().verify().await?;
//! if verification.is_active() {
//!     println!("token {} is active", verification.id);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::segment;
use crate::api::client::{ApiRequest, Client};
use crate::api::common::{ResourceId, Result};

const RESOURCE: &str = "user_tokens";

/// Result of `GET user/tokens/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenVerification {
    /// Token identifier.
    pub id: String,

    /// `active`, `disabled` or `expired`.
    pub status: String,

    /// Validity start, if restricted.
    #[serde(default)]
    pub not_before: Option<DateTime<Utc>>,

    /// Expiry, if any.
    #[serde(default)]
    pub expires_on: Option<DateTime<Utc>>,
}

impl TokenVerification {
    /// Returns `true` when the token can be used.
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// User tokens adapter.
#[derive(Debug, Clone)]
pub struct UserTokens {
    client: Arc<Client>,
}

impl UserTokens {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn token_path(id: &str) -> Result<String> {
        Ok(format!("user/tokens/{}", segment(RESOURCE, "token_id", id)?))
    }

    /// Lists tokens.
    pub async fn browse(&self, params: Option<Value>) -> Result<Vec<Value>> {
        self.client
            .execute(ApiRequest::get("user/tokens").params(params))
            .await
    }

    /// Fetches one token's details (never its secret).
    pub async fn read(&self, id: &str) -> Result<Value> {
        let path = Self::token_path(id)?;
        self.client.get(&path).await
    }

    /// Creates a token. The response carries the secret `value` once.
    pub async fn add<B: Serialize + ?Sized>(&self, token: &B) -> Result<Value> {
        self.client.post("user/tokens", token).await
    }

    /// Replaces a token's name, policies and conditions.
    pub async fn edit<B: Serialize + ?Sized>(&self, id: &str, token: &B) -> Result<Value> {
        let path = Self::token_path(id)?;
        self.client.put(&path, token).await
    }

    /// Deletes a token.
    pub async fn del(&self, id: &str) -> Result<ResourceId> {
        let path = Self::token_path(id)?;
        self.client.delete(&path).await
    }

    /// Issues a new secret for the token and returns it.
    pub async fn roll(&self, id: &str) -> Result<String> {
        let path = format!("{}/value", Self::token_path(id)?);
        self.client.put(&path, &json!({})).await
    }

    /// Lists the permission groups usable in token policies.
    pub async fn permission_groups(&self) -> Result<Vec<Value>> {
        self.client.get("user/tokens/permission_groups").await
    }

    /// Verifies the token the client is authenticated with.
    pub async fn verify(&self) -> Result<TokenVerification> {
        self.client.get("user/tokens/verify").await
    }
}

//
//  cloudflare-client
//  api/resources/zones.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Zones API.
//!
//! A zone is a domain managed by Cloudflare. Most other resources hang off a
//! zone id, so this adapter is usually the first one a caller touches.
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudflare_client::{Cloudflare, Credentials};
//! use serde_json::json;
//!
//! # async fn example() -> cloudflare_client::Result<()> {
//! let cf = Cloudflare::new(Credentials::token("api-token"), None)?;
//!
//! let zones = cf.zones().browse(Some(json!({"name": "example.com"}))).await?;
//! for zone in &zones {
//!     println!("{} {}", zone.id, zone.name);
//! }
//!
//! cf.zones()
//!     .purge_cache(&zones[0].id, &json!({"purge_everything": true}))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::segment;
use crate::api::client::{ApiRequest, Client};
use crate::api::common::{ResourceId, Result};

const RESOURCE: &str = "zones";

/// A Cloudflare zone.
///
/// Only the commonly used fields are typed; the API returns more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    /// Zone identifier.
    pub id: String,

    /// The domain name.
    pub name: String,

    /// `active`, `pending`, `initializing`, `moved`, `deleted` or `deactivated`.
    #[serde(default)]
    pub status: Option<String>,

    /// Whether the zone is paused (DNS only, no proxying).
    #[serde(default)]
    pub paused: bool,

    /// `full` or `partial` setup.
    #[serde(default, rename = "type")]
    pub zone_type: Option<String>,

    /// Nameservers Cloudflare assigned to the zone.
    #[serde(default)]
    pub name_servers: Vec<String>,

    /// Nameservers the zone used before moving to Cloudflare.
    #[serde(default)]
    pub original_name_servers: Option<Vec<String>>,

    /// When the zone was created.
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,

    /// When the zone was last modified.
    #[serde(default)]
    pub modified_on: Option<DateTime<Utc>>,

    /// When the zone was activated.
    #[serde(default)]
    pub activated_on: Option<DateTime<Utc>>,
}

/// Zones adapter.
#[derive(Debug, Clone)]
pub struct Zones {
    client: Arc<Client>,
}

impl Zones {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn zone_path(id: &str) -> Result<String> {
        Ok(format!("zones/{}", segment(RESOURCE, "zone_id", id)?))
    }

    /// Lists zones. `params` may filter by `name`, `status`, `account.id` and
    /// page with `page`/`per_page`.
    pub async fn browse(&self, params: Option<Value>) -> Result<Vec<Zone>> {
        self.client
            .execute(ApiRequest::get("zones").params(params))
            .await
    }

    /// Fetches one zone.
    pub async fn read(&self, id: &str) -> Result<Zone> {
        let path = Self::zone_path(id)?;
        self.client.get(&path).await
    }

    /// Creates a zone. `zone` needs at least `name` and `account.id`.
    pub async fn add<B: Serialize + ?Sized>(&self, zone: &B) -> Result<Zone> {
        self.client.post("zones", zone).await
    }

    /// Updates zone properties (`paused`, `plan`, `vanity_name_servers`).
    pub async fn edit<B: Serialize + ?Sized>(&self, id: &str, changes: &B) -> Result<Zone> {
        let path = Self::zone_path(id)?;
        self.client.patch(&path, changes).await
    }

    /// Deletes a zone.
    pub async fn del(&self, id: &str) -> Result<ResourceId> {
        let path = Self::zone_path(id)?;
        self.client.delete(&path).await
    }

    /// Asks Cloudflare to re-check the zone's nameservers now.
    pub async fn activation_check(&self, id: &str) -> Result<ResourceId> {
        let path = format!("{}/activation_check", Self::zone_path(id)?);
        self.client.execute(ApiRequest::put(path)).await
    }

    /// Purges cached content.
    ///
    /// `params` is `{"purge_everything": true}` or one of the `files`,
    /// `tags`, `hosts` or `prefixes` lists.
    pub async fn purge_cache<B: Serialize + ?Sized>(
        &self,
        id: &str,
        params: &B,
    ) -> Result<ResourceId> {
        let path = format!("{}/purge_cache", Self::zone_path(id)?);
        self.client.post(&path, params).await
    }
}

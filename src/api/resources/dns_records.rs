//
//  cloudflare-client
//  api/resources/dns_records.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! DNS records API.
//!
//! Records live under a zone: `zones/{zone_id}/dns_records`. Besides the usual
//! CRUD calls the zone can be exported as a BIND zone file.
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudflare_client::{Cloudflare, Credentials};
//! use serde_json::json;
//!
//! # async fn example() -> cloudflare_client::Result<()> {
//! let cf = Cloudflare::new(Credentials::email_key("user@example.com", "global-key"), None)?;
//!
//! let record = cf
//!     .dns_records()
//!     .add("023e105f4ecef8ad9ca31a8372d0c353", &json!({
//!         "type": "A",
//!         "name": "www.example.com",
//!         "content": "198.51.100.4",
//!         "ttl": 1,
//!         "proxied": true
//!     }))
//!     .await?;
//!
//! println!("created {}", record.id);
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

const RESOURCE: &str = "dns_records";

/// A DNS record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Record identifier.
    pub id: String,

    /// Record type (`A`, `AAAA`, `CNAME`, `MX`, `TXT`, ...).
    #[serde(rename = "type")]
    pub record_type: String,

    /// Fully qualified record name.
    pub name: String,

    /// Record content (address, target, text).
    #[serde(default)]
    pub content: String,

    /// Whether traffic is proxied through Cloudflare.
    #[serde(default)]
    pub proxied: bool,

    /// Whether the record may be proxied at all.
    #[serde(default)]
    pub proxiable: Option<bool>,

    /// Time to live in seconds; `1` means automatic.
    #[serde(default)]
    pub ttl: Option<u32>,

    /// MX/SRV priority.
    #[serde(default)]
    pub priority: Option<u16>,

    /// Zone the record belongs to.
    #[serde(default)]
    pub zone_id: Option<String>,

    /// Zone name the record belongs to.
    #[serde(default)]
    pub zone_name: Option<String>,

    /// Free-form comment.
    #[serde(default)]
    pub comment: Option<String>,

    /// When the record was created.
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,

    /// When the record was last modified.
    #[serde(default)]
    pub modified_on: Option<DateTime<Utc>>,
}

/// DNS records adapter.
#[derive(Debug, Clone)]
pub struct DnsRecords {
    client: Arc<Client>,
}

impl DnsRecords {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn base(zone_id: &str) -> Result<String> {
        Ok(format!(
            "zones/{}/dns_records",
            segment(RESOURCE, "zone_id", zone_id)?
        ))
    }

    fn record(zone_id: &str, id: &str) -> Result<String> {
        Ok(format!(
            "{}/{}",
            Self::base(zone_id)?,
            segment(RESOURCE, "record_id", id)?
        ))
    }

    /// Lists the records of a zone. `params` may filter by `type`, `name`,
    /// `content` and page with `page`/`per_page`.
    pub async fn browse(&self, zone_id: &str, params: Option<Value>) -> Result<Vec<DnsRecord>> {
        let path = Self::base(zone_id)?;
        self.client
            .execute(ApiRequest::get(path).params(params))
            .await
    }

    /// Fetches one record.
    pub async fn read(&self, zone_id: &str, id: &str) -> Result<DnsRecord> {
        let path = Self::record(zone_id, id)?;
        self.client.get(&path).await
    }

    /// Creates a record.
    pub async fn add<B: Serialize + ?Sized>(&self, zone_id: &str, record: &B) -> Result<DnsRecord> {
        let path = Self::base(zone_id)?;
        self.client.post(&path, record).await
    }

    /// Replaces a record.
    pub async fn edit<B: Serialize + ?Sized>(
        &self,
        zone_id: &str,
        id: &str,
        record: &B,
    ) -> Result<DnsRecord> {
        let path = Self::record(zone_id, id)?;
        self.client.put(&path, record).await
    }

    /// Deletes a record.
    pub async fn del(&self, zone_id: &str, id: &str) -> Result<ResourceId> {
        let path = Self::record(zone_id, id)?;
        self.client.delete(&path).await
    }

    /// Exports every record of the zone as a BIND zone file.
    pub async fn export(&self, zone_id: &str) -> Result<String> {
        let path = format!("{}/export", Self::base(zone_id)?);
        self.client.execute_raw(ApiRequest::get(path)).await
    }
}

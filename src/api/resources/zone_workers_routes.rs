//
//  cloudflare-client
//  api/resources/zone_workers_routes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Route filters for single-script zones (`zones/{zone_id}/workers/filters`).
//!
//! A filter is `{"pattern": "example.com/*", "enabled": true}`.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::segment;
use crate::api::client::Client;
use crate::api::common::{ResourceId, Result};

const RESOURCE: &str = "zone_workers_routes";

/// Zone Workers route filters adapter.
#[derive(Debug, Clone)]
pub struct ZoneWorkersRoutes {
    client: Arc<Client>,
}

impl ZoneWorkersRoutes {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn base(zone_id: &str) -> Result<String> {
        Ok(format!(
            "zones/{}/workers/filters",
            segment(RESOURCE, "zone_id", zone_id)?
        ))
    }

    fn filter(zone_id: &str, id: &str) -> Result<String> {
        Ok(format!(
            "{}/{}",
            Self::base(zone_id)?,
            segment(RESOURCE, "filter_id", id)?
        ))
    }

    pub async fn browse(&self, zone_id: &str) -> Result<Vec<Value>> {
        let path = Self::base(zone_id)?;
        self.client.get(&path).await
    }

    pub async fn read(&self, zone_id: &str, id: &str) -> Result<Value> {
        let path = Self::filter(zone_id, id)?;
        self.client.get(&path).await
    }

    pub async fn add<B: Serialize + ?Sized>(&self, zone_id: &str, filter: &B) -> Result<ResourceId> {
        let path = Self::base(zone_id)?;
        self.client.post(&path, filter).await
    }

    pub async fn edit<B: Serialize + ?Sized>(
        &self,
        zone_id: &str,
        id: &str,
        filter: &B,
    ) -> Result<Value> {
        let path = Self::filter(zone_id, id)?;
        self.client.put(&path, filter).await
    }

    pub async fn del(&self, zone_id: &str, id: &str) -> Result<ResourceId> {
        let path = Self::filter(zone_id, id)?;
        self.client.delete(&path).await
    }
}

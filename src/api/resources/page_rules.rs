//
//  cloudflare-client
//  api/resources/page_rules.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Page rules API.
//!
//! Page rules attach actions (cache level, forwarding, SSL mode, ...) to URL
//! patterns within a zone.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::segment;
use crate::api::client::{ApiRequest, Client};
use crate::api::common::{ResourceId, Result};

const RESOURCE: &str = "page_rules";

/// A page rule.
///
/// `targets` and `actions` are kept as JSON because their shape depends on
/// the action id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRule {
    /// Rule identifier.
    pub id: String,

    /// URL match targets, e.g. `[{"target": "url", "constraint": {...}}]`.
    #[serde(default)]
    pub targets: Vec<Value>,

    /// Actions applied when the rule matches.
    #[serde(default)]
    pub actions: Vec<Value>,

    /// Evaluation order; higher runs first.
    #[serde(default)]
    pub priority: i32,

    /// `active` or `disabled`.
    #[serde(default)]
    pub status: String,

    /// When the rule was created.
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,

    /// When the rule was last modified.
    #[serde(default)]
    pub modified_on: Option<DateTime<Utc>>,
}

/// Page rules adapter.
#[derive(Debug, Clone)]
pub struct PageRules {
    client: Arc<Client>,
}

impl PageRules {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn base(zone_id: &str) -> Result<String> {
        Ok(format!(
            "zones/{}/pagerules",
            segment(RESOURCE, "zone_id", zone_id)?
        ))
    }

    fn rule(zone_id: &str, id: &str) -> Result<String> {
        Ok(format!(
            "{}/{}",
            Self::base(zone_id)?,
            segment(RESOURCE, "rule_id", id)?
        ))
    }

    /// Lists the page rules of a zone.
    pub async fn browse(&self, zone_id: &str, params: Option<Value>) -> Result<Vec<PageRule>> {
        let path = Self::base(zone_id)?;
        self.client
            .execute(ApiRequest::get(path).params(params))
            .await
    }

    /// Fetches one page rule.
    pub async fn read(&self, zone_id: &str, id: &str) -> Result<PageRule> {
        let path = Self::rule(zone_id, id)?;
        self.client.get(&path).await
    }

    /// Creates a page rule.
    pub async fn add<B: Serialize + ?Sized>(&self, zone_id: &str, rule: &B) -> Result<PageRule> {
        let path = Self::base(zone_id)?;
        self.client.post(&path, rule).await
    }

    /// Replaces a page rule.
    pub async fn edit<B: Serialize + ?Sized>(
        &self,
        zone_id: &str,
        id: &str,
        rule: &B,
    ) -> Result<PageRule> {
        let path = Self::rule(zone_id, id)?;
        self.client.put(&path, rule).await
    }

    /// Deletes a page rule.
    pub async fn del(&self, zone_id: &str, id: &str) -> Result<ResourceId> {
        let path = Self::rule(zone_id, id)?;
        self.client.delete(&path).await
    }
}

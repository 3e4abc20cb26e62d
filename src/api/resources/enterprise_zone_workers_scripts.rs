//
//  cloudflare-client
//  api/resources/enterprise_zone_workers_scripts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account-level Workers scripts.
//!
//! Scripts are uploaded and downloaded as plain JavaScript, not JSON.

use std::sync::Arc;

use serde_json::Value;

use super::{segment, JAVASCRIPT_CONTENT_TYPE};
use crate::api::client::{ApiRequest, Client};
use crate::api::common::Result;

const RESOURCE: &str = "enterprise_zone_workers_scripts";

/// Account Workers scripts adapter.
#[derive(Debug, Clone)]
pub struct EnterpriseZoneWorkersScripts {
    client: Arc<Client>,
}

impl EnterpriseZoneWorkersScripts {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn base(account_id: &str) -> Result<String> {
        Ok(format!(
            "accounts/{}/workers/scripts",
            segment(RESOURCE, "account_id", account_id)?
        ))
    }

    fn script(account_id: &str, name: &str) -> Result<String> {
        Ok(format!(
            "{}/{}",
            Self::base(account_id)?,
            segment(RESOURCE, "script_name", name)?
        ))
    }

    /// Lists script metadata.
    pub async fn browse(&self, account_id: &str) -> Result<Vec<Value>> {
        let path = Self::base(account_id)?;
        self.client.get(&path).await
    }

    /// Downloads a script's source.
    pub async fn read(&self, account_id: &str, name: &str) -> Result<String> {
        let path = Self::script(account_id, name)?;
        self.client.execute_raw(ApiRequest::get(path)).await
    }

    /// Uploads (creates or replaces) a script.
    pub async fn edit(&self, account_id: &str, name: &str, script: &str) -> Result<Value> {
        let path = Self::script(account_id, name)?;
        self.client
            .execute(ApiRequest::put(path).raw(script, JAVASCRIPT_CONTENT_TYPE))
            .await
    }

    /// Deletes a script.
    pub async fn del(&self, account_id: &str, name: &str) -> Result<Value> {
        let path = Self::script(account_id, name)?;
        self.client.delete(&path).await
    }
}

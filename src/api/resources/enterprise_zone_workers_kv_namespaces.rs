//
//  cloudflare-client
//  api/resources/enterprise_zone_workers_kv_namespaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workers KV namespaces (`accounts/{account_id}/storage/kv/namespaces`).

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::segment;
use crate::api::client::{ApiRequest, Client};
use crate::api::common::Result;

const RESOURCE: &str = "enterprise_zone_workers_kv_namespaces";

/// KV namespaces adapter.
#[derive(Debug, Clone)]
pub struct EnterpriseZoneWorkersKvNamespaces {
    client: Arc<Client>,
}

impl EnterpriseZoneWorkersKvNamespaces {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn base(account_id: &str) -> Result<String> {
        Ok(format!(
            "accounts/{}/storage/kv/namespaces",
            segment(RESOURCE, "account_id", account_id)?
        ))
    }

    fn namespace(account_id: &str, id: &str) -> Result<String> {
        Ok(format!(
            "{}/{}",
            Self::base(account_id)?,
            segment(RESOURCE, "namespace_id", id)?
        ))
    }

    /// Lists namespaces, one page at a time (`page`, `per_page`).
    pub async fn browse(&self, account_id: &str, params: Option<Value>) -> Result<Vec<Value>> {
        let path = Self::base(account_id)?;
        self.client
            .execute(ApiRequest::get(path).params(params))
            .await
    }

    /// Creates a namespace: `{"title": "..."}`.
    pub async fn add<B: Serialize + ?Sized>(&self, account_id: &str, namespace: &B) -> Result<Value> {
        let path = Self::base(account_id)?;
        self.client.post(&path, namespace).await
    }

    /// Renames a namespace.
    pub async fn edit<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        id: &str,
        namespace: &B,
    ) -> Result<Value> {
        let path = Self::namespace(account_id, id)?;
        self.client.put(&path, namespace).await
    }

    /// Deletes a namespace and everything in it.
    pub async fn del(&self, account_id: &str, id: &str) -> Result<Value> {
        let path = Self::namespace(account_id, id)?;
        self.client.delete(&path).await
    }
}

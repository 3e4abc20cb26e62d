//
//  cloudflare-client
//  api/resources/ips.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloudflare edge IP ranges. The endpoint is public; credentials are sent
//! if configured but not required.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::Result;

/// Published IPv4 and IPv6 ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRanges {
    /// IPv4 CIDR blocks.
    #[serde(default)]
    pub ipv4_cidrs: Vec<String>,

    /// IPv6 CIDR blocks.
    #[serde(default)]
    pub ipv6_cidrs: Vec<String>,

    /// Changes whenever the list changes.
    #[serde(default)]
    pub etag: Option<String>,
}

/// IP ranges adapter.
#[derive(Debug, Clone)]
pub struct Ips {
    client: Arc<Client>,
}

impl Ips {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Fetches the current ranges.
    pub async fn browse(&self) -> Result<IpRanges> {
        self.client.get("ips").await
    }
}

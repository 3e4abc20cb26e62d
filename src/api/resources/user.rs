//
//  cloudflare-client
//  api/resources/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The authenticated user's profile.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::common::Result;

/// The user behind the credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetails {
    /// User identifier.
    pub id: String,

    /// Login email.
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub telephone: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub zipcode: Option<String>,

    /// Whether two-factor authentication is on.
    #[serde(default)]
    pub two_factor_authentication_enabled: bool,

    #[serde(default)]
    pub suspended: bool,

    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default)]
    pub modified_on: Option<DateTime<Utc>>,
}

impl UserDetails {
    /// First and last name joined, or `None` if neither is set.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// User adapter.
#[derive(Debug, Clone)]
pub struct User {
    client: Arc<Client>,
}

impl User {
    /// Binds the adapter to a client.
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Fetches the user.
    pub async fn read(&self) -> Result<UserDetails> {
        self.client.get("user").await
    }

    /// Updates profile fields (`first_name`, `last_name`, `telephone`,
    /// `country`, `zipcode`).
    pub async fn edit<B: Serialize + ?Sized>(&self, changes: &B) -> Result<UserDetails> {
        self.client.patch("user", changes).await
    }
}

//
//  cloudflare-client
//  api/facade.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # The `Cloudflare` entry point
//!
//! [`Cloudflare`] builds one [`Client`] and binds one instance of every
//! resource adapter to it. Adapters are reached through accessors named after
//! the resource and can be swapped for custom instances with the matching
//! `set_*` method.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cloudflare_client::{Cloudflare, Credentials};
//!
//! # async fn example() -> cloudflare_client::Result<()> {
//! let cf = Cloudflare::new(
//!     Credentials::token("api-token"),
//!     Some("http://proxy.internal:3128"),
//! )?;
//!
//! let zone = cf.zones().read("023e105f4ecef8ad9ca31a8372d0c353").await?;
//! let records = cf.dns_records().browse(&zone.id, None).await?;
//! println!("{} has {} records", zone.name, records.len());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::api::client::{Client, ClientOptions};
use crate::api::common::Result;
use crate::api::resources::*;
use crate::auth::Credentials;

/// Declares the adapter table: one field, one accessor and one setter per
/// resource, all bound to the same client in `bind`.
macro_rules! adapters {
    ($($field:ident, $setter:ident: $ty:ty;)+) => {
        /// Cloudflare API facade.
        ///
        /// Cloning is cheap: every adapter shares the same `Arc<Client>`.
        #[derive(Debug, Clone)]
        pub struct Cloudflare {
            client: Arc<Client>,
            $($field: $ty,)+
        }

        impl Cloudflare {
            fn bind(client: Arc<Client>) -> Self {
                Self {
                    $($field: <$ty>::new(Arc::clone(&client)),)+
                    client,
                }
            }

            $(
                #[doc = concat!("The `", stringify!($field), "` adapter.")]
                pub fn $field(&self) -> &$ty {
                    &self.$field
                }

                #[doc = concat!("Replaces the `", stringify!($field), "` adapter and returns the previous one.")]
                pub fn $setter(&mut self, adapter: $ty) -> $ty {
                    std::mem::replace(&mut self.$field, adapter)
                }
            )+
        }
    };
}

adapters! {
    argo_tunnels, set_argo_tunnels: ArgoTunnels;
    dns_records, set_dns_records: DnsRecords;
    enterprise_zone_workers_scripts, set_enterprise_zone_workers_scripts: EnterpriseZoneWorkersScripts;
    enterprise_zone_workers_routes, set_enterprise_zone_workers_routes: EnterpriseZoneWorkersRoutes;
    enterprise_zone_workers_kv_namespaces, set_enterprise_zone_workers_kv_namespaces: EnterpriseZoneWorkersKvNamespaces;
    enterprise_zone_workers_kv, set_enterprise_zone_workers_kv: EnterpriseZoneWorkersKv;
    ips, set_ips: Ips;
    page_rules, set_page_rules: PageRules;
    zones, set_zones: Zones;
    zone_settings, set_zone_settings: ZoneSettings;
    zone_custom_hostnames, set_zone_custom_hostnames: ZoneCustomHostNames;
    zone_workers, set_zone_workers: ZoneWorkers;
    zone_workers_script, set_zone_workers_script: ZoneWorkersScript;
    zone_workers_routes, set_zone_workers_routes: ZoneWorkersRoutes;
    user, set_user: User;
    user_tokens, set_user_tokens: UserTokens;
    stream, set_stream: Stream;
}

impl Cloudflare {
    /// Creates a facade from credentials and an optional proxy URL.
    ///
    /// An empty or unparseable proxy means a direct connection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Transport`] if the HTTP client cannot be built.
    pub fn new(credentials: Credentials, proxy: Option<&str>) -> Result<Self> {
        let options = ClientOptions::new(credentials).with_proxy(proxy.unwrap_or_default(), "");
        Self::with_options(options)
    }

    /// Creates a facade from fully specified client options.
    pub fn with_options(options: ClientOptions) -> Result<Self> {
        Ok(Self::bind(Arc::new(Client::new(options)?)))
    }

    /// Starts a builder.
    pub fn builder() -> CloudflareBuilder {
        CloudflareBuilder::default()
    }

    /// The shared client, for inspection.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Builder for [`Cloudflare`].
///
/// ```rust
/// use std::time::Duration;
/// use cloudflare_client::{Cloudflare, Credentials};
///
/// let cf = Cloudflare::builder()
///     .credentials(Credentials::email_key("user@example.com", "global-key"))
///     .proxy("http://proxy.internal:3128")
///     .no_proxy("localhost")
///     .timeout(Duration::from_secs(30))
///     .build()?;
///
/// assert!(cf.client().has_proxy());
/// # Ok::<(), cloudflare_client::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct CloudflareBuilder {
    credentials: Credentials,
    proxy: String,
    no_proxy: String,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl CloudflareBuilder {
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = proxy.into();
        self
    }

    /// Comma-separated hosts that bypass the proxy.
    pub fn no_proxy(mut self, no_proxy: impl Into<String>) -> Self {
        self.no_proxy = no_proxy.into();
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the client options without creating the facade.
    pub fn options(self) -> ClientOptions {
        let mut options =
            ClientOptions::new(self.credentials).with_proxy(&self.proxy, &self.no_proxy);
        if let Some(base_url) = self.base_url {
            options = options.with_base_url(base_url);
        }
        if let Some(timeout) = self.timeout {
            options = options.with_timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            options = options.with_user_agent(user_agent);
        }
        options
    }

    /// Builds the facade.
    pub fn build(self) -> Result<Cloudflare> {
        Cloudflare::with_options(self.options())
    }
}

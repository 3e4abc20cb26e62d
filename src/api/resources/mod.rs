//
//  cloudflare-client
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloudflare v4 resource adapters.
//!
//! Each submodule binds one family of endpoints to a small struct holding the
//! shared [`Client`](super::Client). Adapter methods validate the path
//! identifiers they need, format the path and hand the call to the client.
//! They add no other behaviour: whatever the client returns, the adapter
//! returns.
//!
//! # Module Organization
//!
//! | Module | Path | Notes |
//! |--------|------|-------|
//! | [`argo_tunnels`] | `accounts/{account}/tunnels` | |
//! | [`dns_records`] | `zones/{zone}/dns_records` | zone file export |
//! | [`enterprise_zone_workers_scripts`] | `accounts/{account}/workers/scripts` | raw JS |
//! | [`enterprise_zone_workers_routes`] | `zones/{zone}/workers/routes` | |
//! | [`enterprise_zone_workers_kv_namespaces`] | `accounts/{account}/storage/kv/namespaces` | |
//! | [`enterprise_zone_workers_kv`] | `.../namespaces/{namespace}` | raw values, bulk ops |
//! | [`ips`] | `ips` | no auth needed |
//! | [`page_rules`] | `zones/{zone}/pagerules` | |
//! | [`zones`] | `zones` | purge, activation check |
//! | [`zone_settings`] | `zones/{zone}/settings` | |
//! | [`zone_custom_hostnames`] | `zones/{zone}/custom_hostnames` | |
//! | [`zone_workers`] | `zones/{zone}/workers` | script validation |
//! | [`zone_workers_script`] | `zones/{zone}/workers/script` | raw JS |
//! | [`zone_workers_routes`] | `zones/{zone}/workers/filters` | |
//! | [`user`] | `user` | |
//! | [`user_tokens`] | `user/tokens` | roll, verify |
//! | [`stream`] | `accounts/{account}/stream` | embed HTML |
//!
//! # Notes
//!
//! - Identifiers are percent-encoded as single path segments
//! - An empty identifier fails with [`Error::MissingParameter`] before any
//!   request is made
//! - Optional `params` go in the query string for `GET` and in the JSON body
//!   otherwise

pub mod argo_tunnels;
pub mod dns_records;
pub mod enterprise_zone_workers_kv;
pub mod enterprise_zone_workers_kv_namespaces;
pub mod enterprise_zone_workers_routes;
pub mod enterprise_zone_workers_scripts;
pub mod ips;
pub mod page_rules;
pub mod stream;
pub mod user;
pub mod user_tokens;
pub mod zone_custom_hostnames;
pub mod zone_settings;
pub mod zone_workers;
pub mod zone_workers_routes;
pub mod zone_workers_script;
pub mod zones;

pub use argo_tunnels::ArgoTunnels;
pub use dns_records::{DnsRecord, DnsRecords};
pub use enterprise_zone_workers_kv::EnterpriseZoneWorkersKv;
pub use enterprise_zone_workers_kv_namespaces::EnterpriseZoneWorkersKvNamespaces;
pub use enterprise_zone_workers_routes::EnterpriseZoneWorkersRoutes;
pub use enterprise_zone_workers_scripts::EnterpriseZoneWorkersScripts;
pub use ips::{IpRanges, Ips};
pub use page_rules::{PageRule, PageRules};
pub use stream::Stream;
pub use user::{User, UserDetails};
pub use user_tokens::{TokenVerification, UserTokens};
pub use zone_custom_hostnames::ZoneCustomHostNames;
pub use zone_settings::ZoneSettings;
pub use zone_workers::ZoneWorkers;
pub use zone_workers_routes::ZoneWorkersRoutes;
pub use zone_workers_script::ZoneWorkersScript;
pub use zones::{Zone, Zones};

use url::form_urlencoded;

use crate::api::common::{Error, Result};

/// Content type for worker script uploads.
pub const JAVASCRIPT_CONTENT_TYPE: &str = "application/javascript";

/// Content type for KV values written as text.
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

/// Checks that a required identifier is present and names one path segment.
///
/// Whitespace-only values count as missing. Other values are returned as
/// given, surrounding whitespace included, since KV keys and script names
/// are opaque. `.` and `..` are rejected: URL parsing would resolve them as
/// dot segments and move the request to another endpoint.
pub(crate) fn require<'a>(
    resource: &'static str,
    parameter: &'static str,
    value: &'a str,
) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::MissingParameter {
            resource,
            parameter,
        });
    }
    if value == "." || value == ".." {
        return Err(Error::InvalidParameter {
            resource,
            parameter,
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Percent-encodes one path segment.
///
/// `/`, `?`, `#`, spaces and everything outside `[A-Za-z0-9*._-]` is escaped,
/// so identifiers such as KV keys can never change the path shape.
pub(crate) fn encode_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Validates and encodes an identifier in one step.
pub(crate) fn segment(
    resource: &'static str,
    parameter: &'static str,
    value: &str,
) -> Result<String> {
    require(resource, parameter, value).map(encode_segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require("zones", "zone_id", "abc").unwrap(), "abc");
        assert_eq!(require("kv", "key", " padded ").unwrap(), " padded ");
        assert!(matches!(
            require("zones", "zone_id", "   "),
            Err(Error::MissingParameter {
                resource: "zones",
                parameter: "zone_id"
            })
        ));
    }

    #[test]
    fn test_require_rejects_dot_segments() {
        for value in [".", ".."] {
            assert!(matches!(
                require("kv", "key", value),
                Err(Error::InvalidParameter { parameter: "key", .. })
            ));
        }
        assert_eq!(require("kv", "key", "...").unwrap(), "...");
        assert_eq!(require("kv", "key", ".env").unwrap(), ".env");
    }

    #[test]
    fn test_segment_keeps_surrounding_whitespace() {
        assert_eq!(segment("kv", "key", " padded ").unwrap(), "%20padded%20");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("abc123"), "abc123");
        assert_eq!(encode_segment("a/b c+d"), "a%2Fb%20c%2Bd");
        assert_eq!(encode_segment("key?x#y"), "key%3Fx%23y");
    }
}

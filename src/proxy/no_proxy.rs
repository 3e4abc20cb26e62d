//
//  cloudflare-client
//  proxy/no_proxy.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! No-proxy list matching.

use url::Url;

/// Returns `true` if requests to `target` should go through the proxy.
///
/// `no_proxy` follows the usual `NO_PROXY` conventions:
///
/// - entries are separated by commas or whitespace
/// - `*` matches every host
/// - `example.com`, `.example.com` and `*.example.com` match `example.com`
///   and all of its subdomains
/// - `host:port` only matches when the target's effective port is `port`
///
/// Matching is case-insensitive. A target without a host is never proxied.
///
/// # Example
///
/// ```rust
/// use cloudflare_client::proxy::should_proxy;
/// use url::Url;
///
/// let target = Url::parse("https://api.cloudflare.com").unwrap();
///
/// assert!(should_proxy(&target, ""));
/// assert!(should_proxy(&target, "localhost, .internal"));
/// assert!(!should_proxy(&target, ".cloudflare.com"));
/// assert!(!should_proxy(&target, "api.cloudflare.com:443"));
/// assert!(should_proxy(&target, "api.cloudflare.com:8443"));
/// ```
pub fn should_proxy(target: &Url, no_proxy: &str) -> bool {
    let host = match target.host_str() {
        Some(host) => strip_brackets(host).to_ascii_lowercase(),
        None => return false,
    };
    let port = target.port_or_known_default();

    !no_proxy
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .any(|entry| matches_entry(entry, &host, port))
}

fn matches_entry(entry: &str, host: &str, port: Option<u16>) -> bool {
    if entry == "*" {
        return true;
    }

    let (entry_host, entry_port) = split_port(entry);
    if let Some(entry_port) = entry_port {
        if Some(entry_port) != port {
            return false;
        }
    }

    let entry_host = strip_brackets(entry_host)
        .trim_start_matches("*.")
        .trim_start_matches('.')
        .to_ascii_lowercase();

    if entry_host.is_empty() {
        return false;
    }

    host == entry_host
        || host
            .strip_suffix(entry_host.as_str())
            .is_some_and(|prefix| prefix.ends_with('.'))
}

fn split_port(entry: &str) -> (&str, Option<u16>) {
    match entry.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') || host.ends_with(']') => match port.parse() {
            Ok(port) => (host, Some(port)),
            Err(_) => (entry, None),
        },
        _ => (entry, None),
    }
}

fn strip_brackets(host: &str) -> &str {
    host.trim_start_matches('[').trim_end_matches(']')
}

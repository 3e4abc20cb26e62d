//
//  cloudflare-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Cloudflare Client Library
//!
//! A thin, typed client for the Cloudflare v4 REST API, plus the `cf`
//! command-line front end built on top of it.
//!
//! ## Overview
//!
//! One [`Cloudflare`] value owns a shared HTTP client configured with your
//! credentials and an optional proxy, and exposes one adapter per resource
//! family (zones, DNS records, page rules, Workers, KV, tokens, Stream, ...).
//! Adapters build the path, validate identifiers and hand the call to the
//! client; responses come back as the envelope's `result`.
//!
//! ## Features
//!
//! - **Three auth schemes**: API tokens, user service keys, and email + global key
//! - **Proxy support**: HTTP(S) and SOCKS5 proxies with no-proxy rules
//! - **Structured errors**: API `errors` surfaced with their codes
//! - **Raw bodies**: Worker scripts, KV values, zone files and embeds as text
//!
//! ## Module Structure
//!
//! - [`api`]: Client, adapters and the [`Cloudflare`] facade
//! - [`auth`]: Credentials and auth scheme selection
//! - [`proxy`]: Proxy URL resolution
//! - [`config`]: Configuration file management (CLI)
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cloudflare_client::{Cloudflare, Credentials, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! let cf = Cloudflare::new(Credentials::token("api-token"), None)?;
//!
//! match cf.zones().read("023e105f4ecef8ad9ca31a8372d0c353").await {
//!     Ok(zone) => println!("{} is {:?}", zone.name, zone.status),
//!     Err(Error::Api(e)) if e.is_not_found() => println!("no such zone"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

/// HTTP client, resource adapters and the facade.
pub mod api;

/// Credentials and authentication schemes.
///
/// Exactly one scheme is applied per request: a bearer token, a user
/// service key, or an email and global API key pair.
pub mod auth;

/// Proxy URL resolution and no-proxy matching.
pub mod proxy;

/// Configuration file management.
///
/// Stores credentials and network settings for the `cf` binary in the
/// platform config directory:
/// - Linux: `~/.config/cloudflare-client/config.toml`
/// - macOS: `~/Library/Application Support/com.cloudflare-client.cloudflare-client/config.toml`
/// - Windows: `%APPDATA%\cloudflare-client\config\config.toml`
pub mod config;

/// Command-line interface definitions.
///
/// Contains the `cf` commands and arguments, defined with the clap derive API.
pub mod cli;

/// Output formatting for the command line.
pub mod output;

pub use api::{
    ApiError, ApiMessage, ApiRequest, Client, ClientOptions, Cloudflare, CloudflareBuilder,
    Envelope, Error, RequestOptions, Result, ResultInfo,
};
pub use auth::{AuthScheme, Credentials};

/// Re-export of the main CLI struct.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use cloudflare_client::Cli;
///
/// let cli = Cli::parse();
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Name of the CLI binary.
///
/// # Value
///
/// `"cf"`
pub const APP_NAME: &str = "cf";

/// Library version, from `CARGO_PKG_VERSION`. Sent in the `User-Agent`.
///
/// # Example
///
/// ```rust
/// use cloudflare_client::VERSION;
///
/// println!("cloudflare-client {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Example
///
/// ```rust,no_run
/// use cloudflare_client::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Missing or rejected credentials (HTTP 401/403).
    pub const AUTH_ERROR: i32 = 4;

    /// The resource does not exist (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded (HTTP 429).
    pub const RATE_LIMIT: i32 = 32;
}

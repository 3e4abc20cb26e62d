//
//  cloudflare-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP access to the Cloudflare v4 REST API at
//! `https://api.cloudflare.com/client/v4`.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication, proxy routing and
//!   envelope handling
//! - [`resources`]: One adapter per resource family (zones, DNS records,
//!   Workers, KV, tokens, ...)
//! - [`facade`]: The [`Cloudflare`] struct tying a client to every adapter
//! - [`common`]: Shared types (errors, envelope, pagination info)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloudflare_client::api::{Client, ClientOptions, Cloudflare};
//! use cloudflare_client::auth::Credentials;
//!
//! // Through the facade
//! let cf = Cloudflare::new(Credentials::token("api-token"), None)
//!     .expect("Failed to create client");
//!
//! // Or a bare client for endpoints without an adapter
//! let client = Client::new(ClientOptions::new(Credentials::token("api-token")))
//!     .expect("Failed to create client");
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result`], whose error is one of:
//!
//! - `MissingParameter`: an identifier was empty; nothing was sent
//! - `Transport`: connection, DNS, proxy or timeout failure
//! - `Api`: non-2xx status or `success: false` in the envelope
//! - `Decode`: the `result` did not have the expected shape

/// Core HTTP client wrapper.
pub mod client;

/// Shared error and envelope types.
pub mod common;

/// The [`Cloudflare`] facade.
pub mod facade;

/// Resource adapters.
pub mod resources;

pub use client::{ApiRequest, Client, ClientOptions, RequestBody, RequestOptions};
pub use common::{ApiError, ApiMessage, Envelope, Error, ResourceId, Result, ResultInfo};
pub use facade::{Cloudflare, CloudflareBuilder};

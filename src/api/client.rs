//
//  cloudflare-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Cloudflare API
//!
//! This module provides the shared [`Client`] every resource adapter sends its
//! requests through. It owns the credentials, the optional proxy route and the
//! underlying `reqwest` client, and is immutable once built.
//!
//! ## Features
//!
//! - Authentication header injection (see [`AuthScheme::select`])
//! - Optional proxy routing (see [`crate::proxy::resolve`])
//! - JSON envelope unwrapping and structured API errors
//! - Raw (non-JSON) request and response bodies for scripts and KV values
//! - Per-call overrides for auth, timeout and content type
//!
//! ## Example
//!
//! ```rust,no_run
//! use cloudflare_client::api::{Client, ClientOptions};
//! use cloudflare_client::auth::Credentials;
//! use reqwest::Method;
//!
//! # async fn example() -> cloudflare_client::Result<()> {
//! let client = Client::new(ClientOptions::new(Credentials::token("api-token")))?;
//! let user: serde_json::Value = client.request(Method::GET, "user", None).await?;
//! println!("{}", user["email"]);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::api::common::{ApiError, Envelope, Error, RawEnvelope, Result};
use crate::auth::{AuthScheme, Credentials};
use crate::proxy::ProxyAgent;

/// Base URL of the Cloudflare v4 API.
pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Host the proxy resolver is asked about.
pub const API_ORIGIN: &str = "https://api.cloudflare.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Content type for JSON bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Options used to build a [`Client`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use cloudflare_client::api::ClientOptions;
/// use cloudflare_client::auth::Credentials;
///
/// let options = ClientOptions::new(Credentials::token("api-token"))
///     .with_timeout(Duration::from_secs(30));
///
/// assert_eq!(options.base_url, "https://api.cloudflare.com/client/v4");
/// assert!(options.agent.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Account credentials applied to every request.
    pub credentials: Credentials,

    /// Resolved proxy route, if any.
    pub agent: Option<ProxyAgent>,

    /// API base URL. Only worth changing for tests and API gateways.
    pub base_url: String,

    /// Timeout applied to every request unless overridden per call.
    pub timeout: Duration,

    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            agent: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("cloudflare-client/{}", crate::VERSION),
        }
    }
}

impl ClientOptions {
    /// Options with the given credentials and every other field at its default.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Default::default()
        }
    }

    /// Sets the proxy route.
    pub fn with_agent(mut self, agent: Option<ProxyAgent>) -> Self {
        self.agent = agent;
        self
    }

    /// Resolves `proxy` against the API origin and sets the result.
    ///
    /// An empty or invalid proxy string leaves the client on a direct
    /// connection.
    pub fn with_proxy(self, proxy: &str, no_proxy: &str) -> Self {
        let agent = crate::proxy::resolve(proxy, no_proxy, API_ORIGIN);
        self.with_agent(agent)
    }

    /// Sets the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the default request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Per-call overrides.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Credential fields that replace the client's for this call only.
    pub auth: Option<Credentials>,

    /// Timeout for this call only.
    pub timeout: Option<Duration>,

    /// Content type to send instead of the body's default.
    pub content_type: Option<String>,
}

/// The body of an [`ApiRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// JSON body sent as `application/json`.
    Json(Value),

    /// Opaque text body, e.g. a worker script or a KV value.
    Raw {
        /// The body text.
        content: String,
        /// The `Content-Type` header to send with it.
        content_type: String,
    },
}

/// A single API call, described before it is sent.
///
/// The path is relative to the client's base URL; identifiers inside it must
/// already be percent-encoded.
///
/// # Example
///
/// ```rust
/// use cloudflare_client::api::ApiRequest;
/// use reqwest::Method;
/// use serde_json::json;
///
/// let request = ApiRequest::get("zones")
///     .query(&json!({"name": "example.com"}))
///     .unwrap();
///
/// assert_eq!(request.method(), &Method::GET);
/// assert_eq!(request.path(), "zones");
/// ```
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Option<Value>,
    body: Option<RequestBody>,
    options: RequestOptions,
}

impl ApiRequest {
    /// A request with the given verb and path and nothing else.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
            options: RequestOptions::default(),
        }
    }

    /// A `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// A `POST` request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// A `PUT` request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// A `PATCH` request.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// A `DELETE` request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Sets the query string from any serializable map-like value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if `params` cannot be encoded.
    pub fn query<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self> {
        let value = serde_json::to_value(params).map_err(Error::Serialize)?;
        self.query = (!value.is_null()).then_some(value);
        Ok(self)
    }

    /// Sets a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if `body` cannot be encoded.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(Error::Serialize)?;
        self.body = Some(RequestBody::Json(value));
        Ok(self)
    }

    /// Sets a raw text body with an explicit content type.
    pub fn raw(mut self, content: impl Into<String>, content_type: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Raw {
            content: content.into(),
            content_type: content_type.into(),
        });
        self
    }

    /// Routes untyped params the way the API expects them: as the query
    /// string for `GET`, as a JSON body for every other verb.
    pub fn params(mut self, params: Option<Value>) -> Self {
        match params {
            Some(Value::Null) | None => {}
            Some(params) if self.method == Method::GET => self.query = Some(params),
            Some(params) => self.body = Some(RequestBody::Json(params)),
        }
        self
    }

    /// Sets the per-call overrides.
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// The HTTP verb.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters, if any.
    pub fn query_params(&self) -> Option<&Value> {
        self.query.as_ref()
    }

    /// The body, if any.
    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }
}

/// The shared HTTP client for the Cloudflare API.
///
/// Built once, shared by every resource adapter through an `Arc`, and never
/// mutated afterwards. Cloning the underlying `reqwest::Client` is cheap, but
/// the credentials and proxy route are fixed at construction.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use cloudflare_client::api::{Client, ClientOptions};
/// use cloudflare_client::auth::Credentials;
///
/// let client = Client::new(
///     ClientOptions::new(Credentials::email_key("user@example.com", "global-key"))
///         .with_proxy("http://proxy.internal:3128", ""),
/// )?;
///
/// assert!(client.has_proxy());
/// assert_eq!(client.auth_scheme().map(|s| s.name()), Some("email_key"));
/// # Ok::<(), cloudflare_client::Error>(())
/// ```
#[derive(Debug)]
pub struct Client {
    /// The underlying HTTP client
    http: reqwest::Client,
    /// Base URL without a trailing slash
    base_url: Url,
    /// Credentials applied to every call
    credentials: Credentials,
    /// Proxy route the HTTP client was built with
    agent: Option<ProxyAgent>,
}

impl Client {
    /// Creates a new client from options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] for an invalid base URL and
    /// [`Error::Transport`] if the HTTP client could not be created.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let base_url = Url::parse(options.base_url.trim_end_matches('/'))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

        // Environment proxies are never picked up; only the resolved agent is used.
        let mut builder = reqwest::Client::builder()
            .user_agent(options.user_agent)
            .default_headers(headers)
            .timeout(options.timeout)
            .no_proxy();

        if let Some(agent) = &options.agent {
            builder = builder.proxy(agent.to_reqwest());
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            credentials: options.credentials,
            agent: options.agent,
        })
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The auth scheme requests will use, absent per-call overrides.
    pub fn auth_scheme(&self) -> Option<AuthScheme> {
        AuthScheme::select(&self.credentials)
    }

    /// The proxy route, if the client has one.
    pub fn proxy(&self) -> Option<&ProxyAgent> {
        self.agent.as_ref()
    }

    /// Returns `true` when requests go through a proxy.
    pub fn has_proxy(&self) -> bool {
        self.agent.is_some()
    }

    /// The absolute URL for an API path.
    ///
    /// ```rust
    /// use cloudflare_client::api::{Client, ClientOptions};
    ///
    /// let client = Client::new(ClientOptions::default())?;
    /// assert_eq!(
    ///     client.url_for("/zones/abc"),
    ///     "https://api.cloudflare.com/client/v4/zones/abc"
    /// );
    /// # Ok::<(), cloudflare_client::Error>(())
    /// ```
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends a request and returns the envelope's `result`.
    ///
    /// `params` become the query string for `GET` and the JSON body for
    /// every other verb.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the request could not be sent
    /// - [`Error::Api`] for non-2xx responses or `success: false`
    /// - [`Error::Decode`] if `result` does not match `T`
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Option<Value>,
    ) -> Result<T> {
        self.execute(ApiRequest::new(method, path).params(params))
            .await
    }

    /// Makes a `GET` request and returns the `result`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(ApiRequest::get(path)).await
    }

    /// Makes a `POST` request with a JSON body and returns the `result`.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(ApiRequest::post(path).json(body)?).await
    }

    /// Makes a `PUT` request with a JSON body and returns the `result`.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(ApiRequest::put(path).json(body)?).await
    }

    /// Makes a `PATCH` request with a JSON body and returns the `result`.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(ApiRequest::patch(path).json(body)?).await
    }

    /// Makes a `DELETE` request and returns the `result`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(ApiRequest::delete(path)).await
    }

    /// Sends a request and returns the envelope's `result`.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        Ok(self.execute_envelope(request).await?.result)
    }

    /// Sends a request and returns the whole decoded envelope.
    pub async fn execute_envelope<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Envelope<T>> {
        let response = self.send(request).await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_response(status, &text).into());
        }

        let envelope: RawEnvelope = serde_json::from_str(&text).map_err(Error::Decode)?;
        if !envelope.success {
            return Err(ApiError::from_errors(status, envelope.errors).into());
        }

        envelope.decode().map_err(Error::Decode)
    }

    /// Sends a request and returns the response body as text.
    ///
    /// Used for endpoints that answer with scripts, KV values, zone files or
    /// HTML instead of an envelope. Failures are still parsed as envelopes.
    pub async fn execute_raw(&self, request: ApiRequest) -> Result<String> {
        let response = self.send(request).await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_response(status, &text).into());
        }

        Ok(text)
    }

    fn build(&self, request: ApiRequest) -> RequestBuilder {
        let ApiRequest {
            method,
            path,
            query,
            body,
            options,
        } = request;

        let mut builder = self.http.request(method, self.url_for(&path));

        let scheme = match &options.auth {
            Some(overrides) => AuthScheme::select(&self.credentials.merged_with(overrides)),
            None => self.auth_scheme(),
        };
        debug!("Auth scheme: {}", scheme.as_ref().map_or("none", AuthScheme::name));
        if let Some(scheme) = &scheme {
            builder = scheme.apply_to_request(builder);
        }

        if let Some(query) = &query {
            builder = builder.query(query);
        }

        builder = match body {
            Some(RequestBody::Json(value)) => builder
                .header(
                    CONTENT_TYPE,
                    options.content_type.as_deref().unwrap_or(JSON_CONTENT_TYPE),
                )
                .body(value.to_string()),
            Some(RequestBody::Raw {
                content,
                content_type,
            }) => builder
                .header(
                    CONTENT_TYPE,
                    options.content_type.unwrap_or(content_type),
                )
                .body(content),
            None => builder,
        };

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        builder
    }

    async fn send(&self, request: ApiRequest) -> Result<Response> {
        debug!("{} /{}", request.method(), request.path().trim_start_matches('/'));

        let builder = self.build(request);
        let response = builder.send().await?;

        debug!("Response status {}", response.status());
        Ok(response)
    }
}

//! The Tableau Server client.
//!
//! This module provides [`Client`], the session manager owning the HTTP
//! transport, the sign-in state, and the URL composition rules for one site
//! of one server.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: Signs in, holds the auth token, and executes requests
//! - [`ApiError`]: Unified error type for client and endpoint operations
//! - [`AuthenticationError`]: Sign-in failures
//! - [`TransportError`]: Non-success statuses and connection failures
//! - [`CodecError`]: Entity parse/serialize failures
//!
//! # Request Addressing
//!
//! Every path the client touches is composed in two steps:
//!
//! - `api_url(path)` prefixes the REST API version: `/api/{version}{path}`
//! - `site_url(path)` additionally scopes to the signed-in site:
//!   `/api/{version}/sites/{site_id}{path}`
//!
//! Sign-in is the only request addressed with `api_url` directly; everything
//! else is site-scoped. Paths are transmitted exactly as composed; no extra
//! URL-encoding is applied.
//!
//! # Example
//!
//! ```rust,no_run
//! use tableau_api::{ApiVersion, Client, Credentials, RequestOptions, ServerConfig, ServerUrl};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::builder()
//!     .server_url(ServerUrl::new("https://tableau.example.com")?)
//!     .api_version(ApiVersion::new(3, 4))
//!     .credentials(Credentials::new("alice", "hunter2", "")?)
//!     .build()?;
//!
//! let client = Client::new(config);
//! client.sign_in().await?;
//!
//! let users = client.users().list(RequestOptions::new()).await?;
//! println!("site has {} users", users.len());
//!
//! client.close().await;
//! # Ok(())
//! # }
//! ```

mod errors;

pub use errors::{ApiError, AuthenticationError, CodecError, TransportError};

use crate::auth::{Session, SignInRequest, SignInResponse};
use crate::config::ServerConfig;
use crate::endpoints::{SubscriptionsEndpoint, UsersEndpoint};
use reqwest::header;
use reqwest::Method;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the auth token on every site-scoped request.
pub const AUTH_HEADER: &str = "X-Tableau-Auth";

const JSON_CONTENT_TYPE: &str = "application/json";
const XML_CONTENT_TYPE: &str = "application/xml";

/// An authenticated client for one site of a Tableau Server.
///
/// The client owns the HTTP connection pool, performs the sign-in exchange,
/// and stamps the resulting auth token onto every request. Resource
/// endpoints ([`users()`](Client::users),
/// [`subscriptions()`](Client::subscriptions)) borrow the client and issue
/// their requests through it.
///
/// # Lifecycle
///
/// A client starts unauthenticated: construction performs no I/O. Call
/// [`sign_in`](Client::sign_in) before using any endpoint; requests issued
/// earlier fail with [`ApiError::NotAuthenticated`] without touching the
/// network. `sign_in` may be called again at any time to re-authenticate;
/// it always replaces the stored token and site id together. When finished,
/// call [`close`](Client::close) to release the connection pool; `close` is
/// idempotent and never fails.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`. Wrap it in [`std::sync::Arc`] to share it
/// across tasks; sign-in and requests may race freely, and a request
/// observes either the previous or the new token, never a mixture of the
/// two.
#[derive(Debug)]
pub struct Client {
    config: ServerConfig,
    transport: RwLock<Option<reqwest::Client>>,
    session: RwLock<Option<Session>>,
}

impl Client {
    /// Creates an unauthenticated client from its configuration.
    ///
    /// The connection pool is created eagerly; no request is sent until
    /// [`sign_in`](Client::sign_in).
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed, which
    /// indicates a broken TLS backend rather than anything recoverable.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Tableau API Library v{SDK_VERSION} | Rust {rust_version}");

        let transport = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            transport: RwLock::new(Some(transport)),
            session: RwLock::new(None),
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the users endpoint for the signed-in site.
    #[must_use]
    pub const fn users(&self) -> UsersEndpoint<'_> {
        UsersEndpoint::new(self)
    }

    /// Returns the subscriptions endpoint for the signed-in site.
    #[must_use]
    pub const fn subscriptions(&self) -> SubscriptionsEndpoint<'_> {
        SubscriptionsEndpoint::new(self)
    }

    /// Composes a version-scoped path: `/api/{version}{path}`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tableau_api::{ApiVersion, Client, Credentials, ServerConfig, ServerUrl};
    ///
    /// let config = ServerConfig::builder()
    ///     .server_url(ServerUrl::new("https://tableau.example.com").unwrap())
    ///     .api_version(ApiVersion::new(3, 4))
    ///     .credentials(Credentials::new("alice", "hunter2", "").unwrap())
    ///     .build()
    ///     .unwrap();
    /// let client = Client::new(config);
    ///
    /// assert_eq!(client.api_url("/auth/signin"), "/api/3.4/auth/signin");
    /// ```
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("/api/{}{}", self.config.api_version(), path)
    }

    /// Composes a site-scoped path: `/api/{version}/sites/{site_id}{path}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] before the first successful
    /// sign-in, since no site id is known yet.
    pub async fn site_url(&self, path: &str) -> Result<String, ApiError> {
        let session = self.session.read().await;
        let session = session.as_ref().ok_or(ApiError::NotAuthenticated)?;
        Ok(self.compose_site_url(session.site_id(), path))
    }

    fn compose_site_url(&self, site_id: &str, path: &str) -> String {
        self.api_url(&format!("/sites/{site_id}{path}"))
    }

    /// Signs in to the configured site, storing the issued token and site id.
    ///
    /// Sends the credentials as a JSON document to
    /// `/api/{version}/auth/signin`. On success the token and site id are
    /// stored together and every subsequent request carries the token in the
    /// `X-Tableau-Auth` header.
    ///
    /// Re-entrant: calling `sign_in` again re-authenticates and always
    /// overwrites the stored state. A failed sign-in leaves the previous
    /// state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError`] if the request is rejected, cannot be
    /// sent, or the response lacks the token or site id.
    pub async fn sign_in(&self) -> Result<(), AuthenticationError> {
        let transport = self.transport().await?;
        let url = format!(
            "{}{}",
            self.config.server_url(),
            self.api_url("/auth/signin")
        );
        let request = SignInRequest::new(self.config.credentials());

        debug!(url = %url, "signing in");
        let response = transport
            .post(&url)
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(header::ACCEPT, JSON_CONTENT_TYPE)
            .json(&request)
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(TransportError::from)?;
        if !status.is_success() {
            return Err(AuthenticationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SignInResponse = serde_json::from_str(&body)?;
        let token = parsed.token().ok_or(AuthenticationError::MissingToken)?;
        let site_id = parsed.site_id().ok_or(AuthenticationError::MissingSiteId)?;

        let mut session = self.session.write().await;
        let renewed = session.is_some();
        *session = Some(Session::new(token.to_string(), site_id.to_string()));
        drop(session);

        info!(site_id, renewed, "signed in");
        Ok(())
    }

    /// Returns `true` if a sign-in has succeeded and the token is held.
    pub async fn is_signed_in(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Returns a copy of the current authenticated state, if any.
    pub async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Releases the connection pool.
    ///
    /// Never fails; safe to call before sign-in and safe to call repeatedly.
    /// Requests issued after `close` fail without network I/O.
    pub async fn close(&self) {
        let mut transport = self.transport.write().await;
        if transport.take().is_some() {
            debug!("client closed; transport released");
        }
    }

    /// Returns `true` once [`close`](Client::close) has been called.
    pub async fn is_closed(&self) -> bool {
        self.transport.read().await.is_none()
    }

    /// Issues a GET to a site-scoped path and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] before sign-in and
    /// [`ApiError::Transport`] for non-success statuses or connection
    /// failures.
    pub async fn get(&self, path: &str) -> Result<String, ApiError> {
        self.site_request(Method::GET, path, None).await
    }

    /// Issues a DELETE to a site-scoped path and returns the response body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Client::get).
    pub async fn delete(&self, path: &str) -> Result<String, ApiError> {
        self.site_request(Method::DELETE, path, None).await
    }

    /// Issues a POST to a site-scoped path and returns the response body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Client::get).
    pub async fn post(&self, path: &str, body: String) -> Result<String, ApiError> {
        self.site_request(Method::POST, path, Some(body)).await
    }

    /// Issues a PUT to a site-scoped path and returns the response body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Client::get).
    pub async fn put(&self, path: &str, body: String) -> Result<String, ApiError> {
        self.site_request(Method::PUT, path, Some(body)).await
    }

    async fn transport(&self) -> Result<reqwest::Client, TransportError> {
        self.transport
            .read()
            .await
            .clone()
            .ok_or(TransportError::Closed)
    }

    async fn site_request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        // Token and site id must come from the same snapshot so a racing
        // re-sign-in can never mix old and new state. The guard is dropped
        // before any I/O.
        let (token, url) = {
            let session = self.session.read().await;
            let session = session.as_ref().ok_or(ApiError::NotAuthenticated)?;
            let url = format!(
                "{}{}",
                self.config.server_url(),
                self.compose_site_url(session.site_id(), path)
            );
            (session.token().to_string(), url)
        };
        let transport = self.transport().await?;

        debug!(method = %method, url = %url, "sending request");

        let mut request = transport
            .request(method, &url)
            .header(AUTH_HEADER, token.as_str())
            .header(header::CONTENT_TYPE, XML_CONTENT_TYPE)
            .header(header::ACCEPT, XML_CONTENT_TYPE);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(TransportError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(TransportError::from)?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(body)
    }
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiVersion, Credentials, ServerUrl};

    fn test_client() -> Client {
        let config = ServerConfig::builder()
            .server_url(ServerUrl::new("https://tableau.example.com").unwrap())
            .api_version(ApiVersion::new(3, 4))
            .credentials(Credentials::new("alice", "hunter2", "").unwrap())
            .build()
            .unwrap();
        Client::new(config)
    }

    async fn sign_in_locally(client: &Client, token: &str, site_id: &str) {
        *client.session.write().await =
            Some(Session::new(token.to_string(), site_id.to_string()));
    }

    #[test]
    fn test_api_url_prefixes_version() {
        let client = test_client();
        assert_eq!(client.api_url("/auth/signin"), "/api/3.4/auth/signin");
        assert_eq!(client.api_url("/sites/s1/users"), "/api/3.4/sites/s1/users");
    }

    #[tokio::test]
    async fn test_site_url_requires_sign_in() {
        let client = test_client();
        let result = client.site_url("/users").await;
        assert!(matches!(result, Err(ApiError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn test_site_url_composition() {
        let client = test_client();
        sign_in_locally(&client, "token", "site-1").await;

        let url = client.site_url("/users/42").await.unwrap();
        assert_eq!(url, "/api/3.4/sites/site-1/users/42");
    }

    #[tokio::test]
    async fn test_requests_before_sign_in_fail_without_io() {
        let client = test_client();

        assert!(matches!(
            client.get("/users").await,
            Err(ApiError::NotAuthenticated)
        ));
        assert!(matches!(
            client.delete("/users/1").await,
            Err(ApiError::NotAuthenticated)
        ));
        assert!(matches!(
            client.post("/users", String::new()).await,
            Err(ApiError::NotAuthenticated)
        ));
        assert!(matches!(
            client.put("/users/1", String::new()).await,
            Err(ApiError::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let client = test_client();
        assert!(!client.is_closed().await);

        client.close().await;
        assert!(client.is_closed().await);

        // Second close is a no-op, not an error.
        client.close().await;
        assert!(client.is_closed().await);
    }

    #[tokio::test]
    async fn test_closed_client_reports_transport_closed() {
        let client = test_client();
        sign_in_locally(&client, "token", "site-1").await;
        client.close().await;

        let result = client.get("/users").await;
        assert!(matches!(
            result,
            Err(ApiError::Transport(TransportError::Closed))
        ));
    }

    #[tokio::test]
    async fn test_sign_in_on_closed_client_fails() {
        let client = test_client();
        client.close().await;

        let result = client.sign_in().await;
        assert!(matches!(
            result,
            Err(AuthenticationError::Transport(TransportError::Closed))
        ));
    }

    #[tokio::test]
    async fn test_unauthenticated_closed_client_reports_not_authenticated() {
        let client = test_client();
        client.close().await;

        // The token check runs before the transport check.
        let result = client.get("/users").await;
        assert!(matches!(result, Err(ApiError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn test_session_state_accessors() {
        let client = test_client();
        assert!(!client.is_signed_in().await);
        assert!(client.current_session().await.is_none());

        sign_in_locally(&client, "token", "site-1").await;
        assert!(client.is_signed_in().await);

        let session = client.current_session().await.unwrap();
        assert_eq!(session.token(), "token");
        assert_eq!(session.site_id(), "site-1");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}

//! Configuration types for the Tableau API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with a Tableau Server or Tableau Cloud
//! site.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ServerConfig`]: The main configuration struct holding all client settings
//! - [`ServerConfigBuilder`]: A builder for constructing [`ServerConfig`] instances
//! - [`ServerUrl`]: A validated server base URL
//! - [`ApiVersion`]: The REST API version to address
//!
//! # Example
//!
//! ```rust
//! use tableau_api::{ServerConfig, ServerUrl, ApiVersion, Credentials};
//!
//! let config = ServerConfig::builder()
//!     .server_url(ServerUrl::new("https://tableau.example.com").unwrap())
//!     .api_version(ApiVersion::new(3, 4))
//!     .credentials(Credentials::new("alice", "hunter2", "marketing").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::ServerUrl;
pub use version::ApiVersion;

use crate::auth::Credentials;
use crate::error::ConfigError;

/// Configuration for the Tableau API client.
///
/// This struct holds everything needed to reach one site of one server: the
/// base URL, the REST API version to address, and the credentials used to
/// sign in. It performs no I/O; pass it to [`Client::new`](crate::Client::new)
/// to obtain a usable client.
///
/// # Thread Safety
///
/// `ServerConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use tableau_api::{ServerConfig, ServerUrl, ApiVersion, Credentials};
///
/// let config = ServerConfig::builder()
///     .server_url(ServerUrl::new("https://tableau.example.com").unwrap())
///     .api_version(ApiVersion::new(3, 4))
///     .credentials(Credentials::new("alice", "hunter2", "").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.server_url().as_ref(), "https://tableau.example.com");
/// ```
#[derive(Clone, Debug)]
pub struct ServerConfig {
    server_url: ServerUrl,
    api_version: ApiVersion,
    credentials: Credentials,
}

impl ServerConfig {
    /// Creates a new builder for constructing a `ServerConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tableau_api::{ServerConfig, ServerUrl, ApiVersion, Credentials};
    ///
    /// let config = ServerConfig::builder()
    ///     .server_url(ServerUrl::new("https://tableau.example.com").unwrap())
    ///     .api_version(ApiVersion::new(3, 4))
    ///     .credentials(Credentials::new("alice", "hunter2", "").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::new()
    }

    /// Returns the server base URL.
    #[must_use]
    pub const fn server_url(&self) -> &ServerUrl {
        &self.server_url
    }

    /// Returns the REST API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the sign-in credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

// Verify ServerConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServerConfig>();
};

/// Builder for constructing [`ServerConfig`] instances.
///
/// This builder provides a fluent API for configuring the client. All three
/// fields are required: `server_url`, `api_version`, and `credentials`.
///
/// # Example
///
/// ```rust
/// use tableau_api::{ServerConfig, ServerUrl, ApiVersion, Credentials};
///
/// let config = ServerConfig::builder()
///     .server_url(ServerUrl::new("https://tableau.example.com").unwrap())
///     .api_version(ApiVersion::new(3, 19))
///     .credentials(Credentials::new("alice", "hunter2", "marketing").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    server_url: Option<ServerUrl>,
    api_version: Option<ApiVersion>,
    credentials: Option<Credentials>,
}

impl ServerConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server base URL (required).
    #[must_use]
    pub fn server_url(mut self, url: ServerUrl) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Sets the REST API version (required).
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the sign-in credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Builds the [`ServerConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `server_url`,
    /// `api_version`, or `credentials` are not set.
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let server_url = self.server_url.ok_or(ConfigError::MissingRequiredField {
            field: "server_url",
        })?;
        let api_version = self.api_version.ok_or(ConfigError::MissingRequiredField {
            field: "api_version",
        })?;
        let credentials = self.credentials.ok_or(ConfigError::MissingRequiredField {
            field: "credentials",
        })?;

        Ok(ServerConfig {
            server_url,
            api_version,
            credentials,
        })
    }
}

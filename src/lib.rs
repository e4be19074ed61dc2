//! # Tableau API Rust SDK
//!
//! A Rust SDK for the Tableau Server REST API, providing type-safe
//! configuration, sign-in handling, and site-scoped resource endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ServerConfig`] and [`ServerConfigBuilder`]
//! - Validated newtypes for the server address and API version
//! - Username/password sign-in against a named site via [`Client::sign_in`]
//! - Session management: the auth token and site id travel with the client
//! - Site-scoped requests with the token applied to every call
//! - Generic resource endpoints via the [`Resource`](endpoints::Resource)
//!   contract, with [`User`] and [`Subscription`] bindings
//!
//! ## Quick Start
//!
//! ```rust
//! use tableau_api::{ApiVersion, Credentials, ServerConfig, ServerUrl};
//!
//! // Create configuration using the builder pattern
//! let config = ServerConfig::builder()
//!     .server_url(ServerUrl::new("https://tableau.example.com").unwrap())
//!     .api_version(ApiVersion::new(3, 4))
//!     .credentials(Credentials::new("admin", "secret", "marketing").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Signing In and Making Requests
//!
//! ```rust,ignore
//! use tableau_api::{Client, RequestOptions, User};
//!
//! let client = Client::new(config);
//!
//! // Exchange credentials for an auth token scoped to the site.
//! client.sign_in().await?;
//!
//! // Endpoints borrow the client and share its session.
//! let users = client.users();
//!
//! for user in users.list(RequestOptions::new().page_size(100)).await? {
//!     println!("{} <{}>", user.name, user.email.as_deref().unwrap_or(""));
//! }
//!
//! let added = users.add(&User::new("jane.doe")).await?;
//! println!("added {}", added.id.as_deref().unwrap_or(""));
//!
//! // Release the connection pool once done.
//! client.close().await;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Shared sessions**: Endpoints borrow the client; one sign-in serves them all
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{Credentials, Session};
pub use config::{ApiVersion, ServerConfig, ServerConfigBuilder, ServerUrl};
pub use error::ConfigError;

// Re-export client types
pub use client::{
    ApiError, AuthenticationError, Client, CodecError, TransportError, AUTH_HEADER, SDK_VERSION,
};

// Re-export endpoint types
pub use endpoints::{
    Endpoint, RequestOptions, Resource, Subscription, SubscriptionsEndpoint, User, UsersEndpoint,
    API_NAMESPACE,
};

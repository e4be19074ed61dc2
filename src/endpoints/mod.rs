//! Site-scoped resource endpoints.
//!
//! This module provides the resource infrastructure of the SDK:
//!
//! - **[`Resource`] trait**: The capability contract an entity type supplies
//!   (codec, identity, default query options)
//! - **[`Endpoint<T>`]**: Generic list/get/create/update/delete operations
//!   written once against the [`Resource`] contract
//! - **[`RequestOptions`]**: Ordered query options for list requests
//! - **Bindings**: [`UsersEndpoint`] and [`SubscriptionsEndpoint`], which
//!   wrap an [`Endpoint`] and expose the verbs their resource uses
//!
//! # Overview
//!
//! Endpoints are created from a signed-in [`Client`](crate::Client) and
//! borrow it, so several endpoints can share one session. Every operation
//! runs against the active site and carries the authentication token the
//! client obtained at sign-in.
//!
//! # Example
//!
//! ```rust,ignore
//! use tableau_api::{RequestOptions, User};
//!
//! client.sign_in().await?;
//!
//! // List users, page by page.
//! let users = client.users();
//! let page = users.list(RequestOptions::new().page_size(100).page_number(2)).await?;
//!
//! // Add a user, then fix their role.
//! let mut added = users.add(&User::new("jane.doe")).await?;
//! added.site_role = Some("Creator".to_string());
//! users.update(&added).await?;
//!
//! // Subscriptions work the same way.
//! let subscriptions = client.subscriptions().list(RequestOptions::new()).await?;
//! ```
//!
//! # Key Types
//!
//! - [`Resource`]: Capability contract implemented by entity types
//! - [`Endpoint`]: Generic operations over one resource collection
//! - [`RequestOptions`]: Ordered query options for list requests
//! - [`User`] and [`UsersEndpoint`]: Users of the active site
//! - [`Subscription`] and [`SubscriptionsEndpoint`]: Email subscriptions of
//!   the active site

mod endpoint;
mod request_options;
mod resource;
mod subscriptions;
mod users;

pub use endpoint::Endpoint;
pub use request_options::RequestOptions;
pub use resource::Resource;
pub use subscriptions::{Subscription, SubscriptionsEndpoint};
pub use users::{User, UsersEndpoint};

/// XML namespace of the response documents the server sends.
///
/// Responses declare this as their default namespace; element names in the
/// documents are unprefixed.
pub const API_NAMESPACE: &str = "http://tableau.com/api";

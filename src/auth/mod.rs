//! Authentication types for the Tableau API SDK.
//!
//! This module provides the types involved in signing in to a site:
//!
//! - [`Credentials`]: The username, password, and site content URL presented
//!   at sign-in, with the password masked in debug output
//! - [`Session`]: The authenticated state a successful sign-in produces
//!   (auth token + site id)
//!
//! The sign-in exchange itself is performed by
//! [`Client::sign_in`](crate::Client::sign_in), which serializes
//! [`Credentials`] into the platform's JSON request shape and stores the
//! resulting [`Session`].
//!
//! # Example
//!
//! ```rust
//! use tableau_api::Credentials;
//!
//! // Empty content URL selects the server's Default site
//! let credentials = Credentials::new("alice", "hunter2", "").unwrap();
//! assert_eq!(credentials.username(), "alice");
//! ```

mod credentials;
mod session;

pub use credentials::Credentials;
pub use session::Session;

pub(crate) use credentials::{SignInRequest, SignInResponse};

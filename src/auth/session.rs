//! Authenticated session state.
//!
//! This module provides the [`Session`] type representing the outcome of one
//! successful sign-in: the auth token and the id of the site it is scoped to.

use std::fmt;

/// The authenticated state produced by a successful sign-in.
///
/// A session pairs the server-issued auth token with the id of the site the
/// token is scoped to. The [`Client`](crate::Client) holds the current
/// session internally and stamps its token onto every request; this type is
/// exposed so callers can inspect or persist the authenticated state.
///
/// # Security
///
/// The `Debug` implementation masks the token.
///
/// # Example
///
/// ```rust
/// use tableau_api::Session;
///
/// let session = Session::new("9zX4-secret".to_string(), "site-1".to_string());
/// assert_eq!(session.site_id(), "site-1");
/// assert!(!format!("{:?}", session).contains("9zX4-secret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    site_id: String,
}

impl Session {
    /// Creates a session from an auth token and the site id it is scoped to.
    #[must_use]
    pub const fn new(token: String, site_id: String) -> Self {
        Self { token, site_id }
    }

    /// Returns the auth token sent as `X-Tableau-Auth` on every request.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the id of the site this session is scoped to.
    #[must_use]
    pub fn site_id(&self) -> &str {
        &self.site_id
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"*****")
            .field("site_id", &self.site_id)
            .finish()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_accessors() {
        let session = Session::new("abc123".to_string(), "site-1".to_string());
        assert_eq!(session.token(), "abc123");
        assert_eq!(session.site_id(), "site-1");
    }

    #[test]
    fn test_session_masks_token_in_debug() {
        let session = Session::new("abc123".to_string(), "site-1".to_string());
        let debug_output = format!("{session:?}");
        assert!(debug_output.contains("*****"));
        assert!(debug_output.contains("site-1"));
        assert!(!debug_output.contains("abc123"));
    }

    #[test]
    fn test_session_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
    }
}

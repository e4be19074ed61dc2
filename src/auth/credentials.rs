//! Sign-in credentials and their wire representation.
//!
//! This module provides the [`Credentials`] type holding the username,
//! password, and site content URL used to authenticate, along with the
//! crate-internal JSON request and response shapes of the sign-in exchange.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials for signing in to a Tableau site.
///
/// The site is identified by its content URL, the path fragment that appears
/// in browser URLs for the site (e.g., `marketing` for
/// `https://tableau.example.com/#/site/marketing`). An empty content URL
/// selects the server's Default site.
///
/// # Security
///
/// The `Debug` implementation masks the password, so credentials can be
/// logged without exposing secrets.
///
/// # Example
///
/// ```rust
/// use tableau_api::Credentials;
///
/// let credentials = Credentials::new("alice", "hunter2", "marketing").unwrap();
/// assert_eq!(credentials.username(), "alice");
/// assert_eq!(credentials.site_content_url(), "marketing");
///
/// let debug_output = format!("{:?}", credentials);
/// assert!(!debug_output.contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
    site_content_url: String,
}

impl Credentials {
    /// Creates validated sign-in credentials.
    ///
    /// The site content URL may be empty to select the Default site.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] or [`ConfigError::EmptyPassword`]
    /// if either value is empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        site_content_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }

        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }

        Ok(Self {
            username,
            password,
            site_content_url: site_content_url.into(),
        })
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the site content URL; empty for the Default site.
    #[must_use]
    pub fn site_content_url(&self) -> &str {
        &self.site_content_url
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"*****")
            .field("site_content_url", &self.site_content_url)
            .finish()
    }
}

/// JSON body of the sign-in request.
///
/// Serializes to:
///
/// ```json
/// {"credentials": {"name": "...", "password": "...", "site": {"contentUrl": "..."}}}
/// ```
#[derive(Debug, Serialize)]
pub(crate) struct SignInRequest<'a> {
    credentials: RequestCredentials<'a>,
}

#[derive(Debug, Serialize)]
struct RequestCredentials<'a> {
    name: &'a str,
    password: &'a str,
    site: RequestSite<'a>,
}

#[derive(Debug, Serialize)]
struct RequestSite<'a> {
    #[serde(rename = "contentUrl")]
    content_url: &'a str,
}

impl<'a> SignInRequest<'a> {
    pub(crate) fn new(credentials: &'a Credentials) -> Self {
        Self {
            credentials: RequestCredentials {
                name: &credentials.username,
                password: &credentials.password,
                site: RequestSite {
                    content_url: &credentials.site_content_url,
                },
            },
        }
    }
}

/// JSON body of the sign-in response.
///
/// All fields are optional so that incomplete responses can be turned into
/// precise errors instead of decode failures.
#[derive(Debug, Deserialize)]
pub(crate) struct SignInResponse {
    credentials: ResponseCredentials,
}

#[derive(Debug, Deserialize)]
struct ResponseCredentials {
    token: Option<String>,
    site: Option<ResponseSite>,
}

#[derive(Debug, Deserialize)]
struct ResponseSite {
    id: Option<String>,
}

impl SignInResponse {
    /// Returns the issued auth token, if present and non-empty.
    pub(crate) fn token(&self) -> Option<&str> {
        self.credentials
            .token
            .as_deref()
            .filter(|token| !token.is_empty())
    }

    /// Returns the id of the site the token is scoped to, if present.
    pub(crate) fn site_id(&self) -> Option<&str> {
        self.credentials
            .site
            .as_ref()
            .and_then(|site| site.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_rejects_empty_username() {
        let result = Credentials::new("", "password", "");
        assert!(matches!(result, Err(ConfigError::EmptyUsername)));
    }

    #[test]
    fn test_credentials_rejects_empty_password() {
        let result = Credentials::new("alice", "", "");
        assert!(matches!(result, Err(ConfigError::EmptyPassword)));
    }

    #[test]
    fn test_credentials_allows_empty_site_for_default_site() {
        let credentials = Credentials::new("alice", "hunter2", "").unwrap();
        assert_eq!(credentials.site_content_url(), "");
    }

    #[test]
    fn test_credentials_masks_password_in_debug() {
        let credentials = Credentials::new("alice", "super-secret", "marketing").unwrap();
        let debug_output = format!("{credentials:?}");
        assert!(debug_output.contains("alice"));
        assert!(debug_output.contains("*****"));
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_sign_in_request_serializes_to_expected_shape() {
        let credentials = Credentials::new("alice", "hunter2", "marketing").unwrap();
        let request = SignInRequest::new(&credentials);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "credentials": {
                    "name": "alice",
                    "password": "hunter2",
                    "site": { "contentUrl": "marketing" }
                }
            })
        );
    }

    #[test]
    fn test_sign_in_response_parses_token_and_site() {
        let body = r#"{"credentials": {"token": "abc123", "site": {"id": "site-1", "contentUrl": "marketing"}, "user": {"id": "user-1"}}}"#;
        let response: SignInResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.token(), Some("abc123"));
        assert_eq!(response.site_id(), Some("site-1"));
    }

    #[test]
    fn test_sign_in_response_missing_token_yields_none() {
        let body = r#"{"credentials": {"site": {"id": "site-1"}}}"#;
        let response: SignInResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.token(), None);
        assert_eq!(response.site_id(), Some("site-1"));
    }

    #[test]
    fn test_sign_in_response_empty_strings_yield_none() {
        let body = r#"{"credentials": {"token": "", "site": {"id": ""}}}"#;
        let response: SignInResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.token(), None);
        assert_eq!(response.site_id(), None);
    }
}

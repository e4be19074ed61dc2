//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Tableau Server URL.
///
/// This newtype validates that the URL has a scheme and a host, and
/// normalizes it by stripping any trailing slashes so that request paths
/// can be appended directly.
///
/// # Accepted Formats
///
/// - `https://tableau.example.com`
/// - `https://tableau.example.com/` - trailing slash is stripped
/// - `http://localhost:8000` - explicit ports are allowed
///
/// URLs carrying a path, query, or fragment are rejected; the client
/// addresses everything below the server root itself.
///
/// # Example
///
/// ```rust
/// use tableau_api::ServerUrl;
///
/// let url = ServerUrl::new("https://tableau.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://tableau.example.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host(), "tableau.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
}

impl ServerUrl {
    /// Creates a new validated server URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServerUrl`] if the URL has no scheme,
    /// no host, or anything after the host other than a port and trailing
    /// slashes.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let mut url = url.trim().to_string();

        while url.ends_with('/') {
            url.pop();
        }

        // Find scheme
        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidServerUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidServerUrl { url: url.clone() });
        }

        // Find host
        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidServerUrl { url: url.clone() });
        }

        let remainder = &url[host_start..];
        if remainder.contains(&['/', '?', '#'][..]) {
            return Err(ConfigError::InvalidServerUrl { url: url.clone() });
        }

        let host = remainder.split(':').next().unwrap_or("");
        if host.is_empty() {
            return Err(ConfigError::InvalidServerUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host portion of the URL, without any port.
    #[must_use]
    pub fn host(&self) -> &str {
        let remainder = &self.url[self.host_start..];
        remainder.split(':').next().unwrap_or(remainder)
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_url_accepts_plain_host() {
        let url = ServerUrl::new("https://tableau.example.com").unwrap();
        assert_eq!(url.as_ref(), "https://tableau.example.com");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host(), "tableau.example.com");
    }

    #[test]
    fn test_server_url_strips_trailing_slashes() {
        let url = ServerUrl::new("https://tableau.example.com/").unwrap();
        assert_eq!(url.as_ref(), "https://tableau.example.com");

        let url = ServerUrl::new("https://tableau.example.com///").unwrap();
        assert_eq!(url.as_ref(), "https://tableau.example.com");
    }

    #[test]
    fn test_server_url_accepts_port() {
        let url = ServerUrl::new("http://localhost:8000").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host(), "localhost");
        assert_eq!(url.as_ref(), "http://localhost:8000");
    }

    #[test]
    fn test_server_url_trims_whitespace() {
        let url = ServerUrl::new("  https://tableau.example.com  ").unwrap();
        assert_eq!(url.as_ref(), "https://tableau.example.com");
    }

    #[test]
    fn test_server_url_rejects_missing_scheme() {
        assert!(ServerUrl::new("tableau.example.com").is_err());
    }

    #[test]
    fn test_server_url_rejects_empty_host() {
        assert!(ServerUrl::new("https://").is_err());
        assert!(ServerUrl::new("https://:8000").is_err());
    }

    #[test]
    fn test_server_url_rejects_invalid_scheme() {
        assert!(ServerUrl::new("://example.com").is_err());
        assert!(ServerUrl::new("ht tp://example.com").is_err());
    }

    #[test]
    fn test_server_url_rejects_path_query_and_fragment() {
        assert!(ServerUrl::new("https://example.com/extra").is_err());
        assert!(ServerUrl::new("https://example.com?query=1").is_err());
        assert!(ServerUrl::new("https://example.com#fragment").is_err());
    }

    #[test]
    fn test_server_url_display_matches_as_ref() {
        let url = ServerUrl::new("https://tableau.example.com").unwrap();
        assert_eq!(format!("{url}"), "https://tableau.example.com");
    }
}

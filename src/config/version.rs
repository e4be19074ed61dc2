//! Tableau REST API version definitions.
//!
//! This module provides the [`ApiVersion`] type for specifying which version
//! of the Tableau REST API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Tableau REST API version.
///
/// Tableau ships a new REST API version with every server release; versions
/// are numbered `<major>.<minor>` (for example `3.4` for Tableau Server
/// 2019.3). The version appears verbatim in every request path, so the
/// client never needs to interpret it beyond validating its shape.
///
/// # Example
///
/// ```rust
/// use tableau_api::ApiVersion;
///
/// // Construct directly
/// let version = ApiVersion::new(3, 4);
/// assert_eq!(format!("{}", version), "3.4");
///
/// // Parse from string
/// let version: ApiVersion = "3.19".parse().unwrap();
/// assert_eq!(version, ApiVersion::new(3, 19));
///
/// // Versions order chronologically
/// assert!(ApiVersion::new(2, 8) < ApiVersion::new(3, 4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    major: u16,
    minor: u16,
}

impl ApiVersion {
    /// Creates an API version from its major and minor components.
    #[must_use]
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Returns the major component of the version.
    #[must_use]
    pub const fn major(&self) -> u16 {
        self.major
    }

    /// Returns the minor component of the version.
    #[must_use]
    pub const fn minor(&self) -> u16 {
        self.minor
    }

    /// Returns `true` if this version is at least `major.minor`.
    ///
    /// Useful for gating requests that only newer servers understand.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tableau_api::ApiVersion;
    ///
    /// let version = ApiVersion::new(3, 4);
    /// assert!(version.is_at_least(2, 3));
    /// assert!(version.is_at_least(3, 4));
    /// assert!(!version.is_at_least(3, 5));
    /// ```
    #[must_use]
    pub const fn is_at_least(&self, major: u16, minor: u16) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let invalid = || ConfigError::InvalidApiVersion {
            version: trimmed.to_string(),
        };

        let (major, minor) = trimmed.split_once('.').ok_or_else(invalid)?;

        if major.is_empty()
            || minor.is_empty()
            || !major.chars().all(|c| c.is_ascii_digit())
            || !minor.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let major = major.parse::<u16>().map_err(|_| invalid())?;
        let minor = minor.parse::<u16>().map_err(|_| invalid())?;

        Ok(Self::new(major, minor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!("2.3".parse::<ApiVersion>().unwrap(), ApiVersion::new(2, 3));
        assert_eq!("3.4".parse::<ApiVersion>().unwrap(), ApiVersion::new(3, 4));
        assert_eq!(
            "3.19".parse::<ApiVersion>().unwrap(),
            ApiVersion::new(3, 19)
        );
    }

    #[test]
    fn test_api_version_trims_whitespace() {
        assert_eq!(
            " 3.4 ".parse::<ApiVersion>().unwrap(),
            ApiVersion::new(3, 4)
        );
    }

    #[test]
    fn test_api_version_display() {
        assert_eq!(format!("{}", ApiVersion::new(3, 4)), "3.4");
        assert_eq!(format!("{}", ApiVersion::new(2, 3)), "2.3");
        assert_eq!(format!("{}", ApiVersion::new(3, 19)), "3.19");
    }

    #[test]
    fn test_api_version_round_trips_through_display() {
        let version = ApiVersion::new(3, 19);
        let parsed: ApiVersion = version.to_string().parse().unwrap();
        assert_eq!(parsed, version);
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        assert!("".parse::<ApiVersion>().is_err());
        assert!("3".parse::<ApiVersion>().is_err());
        assert!("3.".parse::<ApiVersion>().is_err());
        assert!(".4".parse::<ApiVersion>().is_err());
        assert!("v3.4".parse::<ApiVersion>().is_err());
        assert!("3.4.1".parse::<ApiVersion>().is_err());
        assert!("3.x".parse::<ApiVersion>().is_err());
        assert!("-3.4".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_api_version_ordering() {
        assert!(ApiVersion::new(2, 3) < ApiVersion::new(2, 8));
        assert!(ApiVersion::new(2, 8) < ApiVersion::new(3, 0));
        assert!(ApiVersion::new(3, 4) < ApiVersion::new(3, 19));
    }

    #[test]
    fn test_api_version_is_at_least() {
        let version = ApiVersion::new(3, 4);
        assert!(version.is_at_least(2, 8));
        assert!(version.is_at_least(3, 0));
        assert!(version.is_at_least(3, 4));
        assert!(!version.is_at_least(3, 5));
        assert!(!version.is_at_least(4, 0));
    }

    #[test]
    fn test_api_version_accessors() {
        let version = ApiVersion::new(3, 19);
        assert_eq!(version.major(), 3);
        assert_eq!(version.minor(), 19);
    }
}

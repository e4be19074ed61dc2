//! User resource implementation.
//!
//! This module provides the [`User`] entity, its XML codec, and the
//! [`UsersEndpoint`] binding for managing users on the active site.
//!
//! # Operations
//!
//! - `list` - List users, requesting all available fields by default
//! - `get_by_id` - Fetch a single user
//! - `add` - Add a user to the site
//! - `update` - Update name, email, or role fields
//! - `remove` - Remove a user from the site
//!
//! # Example
//!
//! ```rust,ignore
//! use tableau_api::{RequestOptions, User};
//!
//! let users = client.users();
//!
//! let added = users.add(&User::new("jane.doe")).await?;
//! println!("added user {}", added.id.as_deref().unwrap_or(""));
//!
//! for user in users.list(RequestOptions::new().page_size(100)).await? {
//!     println!("{} <{}>", user.name, user.email.as_deref().unwrap_or(""));
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{ApiError, Client, CodecError};
use crate::endpoints::{Endpoint, RequestOptions, Resource};

/// A user on a Tableau site.
///
/// # Fields
///
/// - `id` - The unique identifier, assigned by the server
/// - `name` - The sign-in name, required when adding a user
/// - `site_role` - The user's role on the site, e.g. `Viewer` or `Creator`
/// - `auth_setting` - The authentication type for the user
/// - `full_name` - The display name
/// - `email` - The email address
/// - `last_login` - When the user last signed in, assigned by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// The unique identifier of the user.
    pub id: Option<String>,

    /// The name the user signs in with.
    pub name: String,

    /// The user's role on the site, e.g. `Viewer` or `Creator`.
    pub site_role: Option<String>,

    /// The authentication type for the user, e.g. `ServerDefault`.
    pub auth_setting: Option<String>,

    /// The user's display name.
    pub full_name: Option<String>,

    /// The user's email address.
    pub email: Option<String>,

    /// When the user last signed in.
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a user with the given sign-in name and no other fields set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tableau_api::User;
    ///
    /// let mut user = User::new("jane.doe");
    /// user.site_role = Some("Viewer".to_string());
    ///
    /// assert_eq!(user.name, "jane.doe");
    /// assert_eq!(user.id, None);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            site_role: None,
            auth_setting: None,
            full_name: None,
            email: None,
            last_login: None,
        }
    }
}

/// Response document carrying either a `<users>` list or a bare `<user>`.
#[derive(Debug, Deserialize)]
struct UsersResponse {
    users: Option<UserList>,
    user: Option<UserXml>,
}

#[derive(Debug, Deserialize)]
struct UserList {
    #[serde(default, rename = "user")]
    entries: Vec<UserXml>,
}

#[derive(Debug, Deserialize)]
struct UserXml {
    #[serde(rename = "@id")]
    id: Option<String>,
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@siteRole")]
    site_role: Option<String>,
    #[serde(rename = "@authSetting")]
    auth_setting: Option<String>,
    #[serde(rename = "@fullName")]
    full_name: Option<String>,
    #[serde(rename = "@email")]
    email: Option<String>,
    #[serde(rename = "@lastLogin")]
    last_login: Option<DateTime<Utc>>,
}

impl From<UserXml> for User {
    fn from(xml: UserXml) -> Self {
        Self {
            id: xml.id,
            name: xml.name,
            site_role: xml.site_role,
            auth_setting: xml.auth_setting,
            full_name: xml.full_name,
            email: xml.email,
            last_login: xml.last_login,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename = "tsRequest")]
struct UserCreateRequest<'a> {
    user: UserCreateXml<'a>,
}

#[derive(Debug, Serialize)]
struct UserCreateXml<'a> {
    #[serde(rename = "@name")]
    name: &'a str,
    #[serde(rename = "@siteRole", skip_serializing_if = "Option::is_none")]
    site_role: Option<&'a str>,
    #[serde(rename = "@authSetting", skip_serializing_if = "Option::is_none")]
    auth_setting: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename = "tsRequest")]
struct UserUpdateRequest<'a> {
    user: UserUpdateXml<'a>,
}

#[derive(Debug, Serialize)]
struct UserUpdateXml<'a> {
    #[serde(rename = "@fullName", skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
    #[serde(rename = "@email", skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(rename = "@siteRole", skip_serializing_if = "Option::is_none")]
    site_role: Option<&'a str>,
    #[serde(rename = "@authSetting", skip_serializing_if = "Option::is_none")]
    auth_setting: Option<&'a str>,
}

impl Resource for User {
    const PATH: &'static str = "/users";
    const NAME: &'static str = "user";

    fn from_response(body: &str) -> Result<Vec<Self>, CodecError> {
        let response: UsersResponse =
            quick_xml::de::from_str(body).map_err(|source| CodecError::parse(Self::NAME, source))?;

        let entries = match (response.users, response.user) {
            (Some(list), _) => list.entries,
            (None, Some(single)) => vec![single],
            (None, None) => Vec::new(),
        };
        Ok(entries.into_iter().map(Self::from).collect())
    }

    fn to_create_request(&self) -> Result<String, CodecError> {
        let request = UserCreateRequest {
            user: UserCreateXml {
                name: &self.name,
                site_role: self.site_role.as_deref(),
                auth_setting: self.auth_setting.as_deref(),
            },
        };
        quick_xml::se::to_string(&request).map_err(|source| CodecError::serialize(Self::NAME, source))
    }

    fn to_update_request(&self) -> Result<String, CodecError> {
        let request = UserUpdateRequest {
            user: UserUpdateXml {
                full_name: self.full_name.as_deref(),
                email: self.email.as_deref(),
                site_role: self.site_role.as_deref(),
                auth_setting: self.auth_setting.as_deref(),
            },
        };
        quick_xml::se::to_string(&request).map_err(|source| CodecError::serialize(Self::NAME, source))
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// List queries request every available field unless told otherwise.
    fn apply_default_options(options: &mut RequestOptions) {
        options.set_all_fields(true);
    }
}

/// Operations on the users of the active site.
///
/// Created through [`Client::users`]; borrows the client it was created
/// from.
#[derive(Debug)]
pub struct UsersEndpoint<'a> {
    endpoint: Endpoint<'a, User>,
}

impl<'a> UsersEndpoint<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self {
            endpoint: Endpoint::new(client),
        }
    }

    /// Lists the users on the site.
    ///
    /// Unless the options say otherwise, the query requests all available
    /// fields (`fields=_all_`), so returned users carry email, full name,
    /// and last-login data.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] before a successful sign-in,
    /// [`ApiError::Transport`] if the request fails or the server responds
    /// with an error status, and [`ApiError::Codec`] if the response body
    /// cannot be parsed.
    pub async fn list(&self, options: RequestOptions) -> Result<Vec<User>, ApiError> {
        self.endpoint.list(options).await
    }

    /// Fetches a single user by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the response contains no user,
    /// plus the failure modes of [`list`](UsersEndpoint::list).
    pub async fn get_by_id(&self, id: &str) -> Result<User, ApiError> {
        self.endpoint.get_by_id(id).await
    }

    /// Adds a user to the site and returns the server's copy, including
    /// the assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the response contains no user,
    /// plus the failure modes of [`list`](UsersEndpoint::list).
    pub async fn add(&self, user: &User) -> Result<User, ApiError> {
        self.endpoint.create(user).await
    }

    /// Updates a user's name, email, role, or authentication fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingEntityId`] if the user has no id yet,
    /// [`ApiError::NotFound`] if the response contains no user, plus the
    /// failure modes of [`list`](UsersEndpoint::list).
    pub async fn update(&self, user: &User) -> Result<User, ApiError> {
        self.endpoint.update(user).await
    }

    /// Removes a user from the site.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] before a successful sign-in
    /// and [`ApiError::Transport`] if the request fails or the server
    /// responds with an error status.
    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.endpoint.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_list_deserialization() {
        let xml = r#"<?xml version='1.0' encoding='UTF-8'?>
            <tsResponse xmlns="http://tableau.com/api">
                <pagination pageNumber="1" pageSize="100" totalAvailable="2"/>
                <users>
                    <user id="5de011f8-5aa9-4d5b-b991-f462c8dd6bb7"
                          name="alice"
                          siteRole="Viewer"
                          authSetting="ServerDefault"
                          fullName="Alice Example"
                          email="alice@example.com"
                          lastLogin="2023-01-15T10:30:00Z"/>
                    <user id="9f9e9d9c-8b8a-7978-6f6e-5d5c5b5a4948"
                          name="bob"
                          siteRole="Creator"/>
                </users>
            </tsResponse>"#;

        let users = User::from_response(xml).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(
            users[0].id.as_deref(),
            Some("5de011f8-5aa9-4d5b-b991-f462c8dd6bb7")
        );
        assert_eq!(users[0].name, "alice");
        assert_eq!(users[0].site_role.as_deref(), Some("Viewer"));
        assert_eq!(users[0].auth_setting.as_deref(), Some("ServerDefault"));
        assert_eq!(users[0].full_name.as_deref(), Some("Alice Example"));
        assert_eq!(users[0].email.as_deref(), Some("alice@example.com"));
        assert_eq!(
            users[0].last_login.map(|at| at.to_rfc3339()),
            Some("2023-01-15T10:30:00+00:00".to_string())
        );
        assert_eq!(users[1].name, "bob");
        assert_eq!(users[1].email, None);
        assert_eq!(users[1].last_login, None);
    }

    #[test]
    fn test_user_single_deserialization() {
        let xml = r#"<tsResponse xmlns="http://tableau.com/api">
            <user id="5de011f8-5aa9-4d5b-b991-f462c8dd6bb7" name="alice" siteRole="Viewer"/>
        </tsResponse>"#;

        let users = User::from_response(xml).unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "alice");
    }

    #[test]
    fn test_empty_list_deserializes_to_no_users() {
        let xml = r#"<tsResponse xmlns="http://tableau.com/api"><users/></tsResponse>"#;
        assert!(User::from_response(xml).unwrap().is_empty());

        let xml = r#"<tsResponse xmlns="http://tableau.com/api"/>"#;
        assert!(User::from_response(xml).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_document_is_a_codec_error() {
        let error = User::from_response("<tsResponse><users>").unwrap_err();
        assert!(error
            .to_string()
            .starts_with("Failed to parse user XML from the response:"));
    }

    #[test]
    fn test_create_request_serialization() {
        let mut user = User::new("jane.doe");
        user.site_role = Some("Viewer".to_string());
        user.auth_setting = Some("ServerDefault".to_string());

        let xml = user.to_create_request().unwrap();

        assert_eq!(
            xml,
            r#"<tsRequest><user name="jane.doe" siteRole="Viewer" authSetting="ServerDefault"/></tsRequest>"#
        );
    }

    #[test]
    fn test_create_request_omits_unset_fields() {
        let xml = User::new("jane.doe").to_create_request().unwrap();
        assert_eq!(xml, r#"<tsRequest><user name="jane.doe"/></tsRequest>"#);
    }

    #[test]
    fn test_update_request_serialization() {
        let mut user = User::new("jane.doe");
        user.id = Some("5de011f8-5aa9-4d5b-b991-f462c8dd6bb7".to_string());
        user.full_name = Some("Jane Doe".to_string());
        user.email = Some("jane@example.com".to_string());
        user.site_role = Some("Creator".to_string());

        let xml = user.to_update_request().unwrap();

        assert_eq!(
            xml,
            r#"<tsRequest><user fullName="Jane Doe" email="jane@example.com" siteRole="Creator"/></tsRequest>"#
        );
    }

    #[test]
    fn test_default_options_request_all_fields() {
        let mut options = RequestOptions::new().page_size(100);
        User::apply_default_options(&mut options);

        assert_eq!(
            options.query_params(),
            vec![
                ("pageSize".to_string(), "100".to_string()),
                ("fields".to_string(), "_all_".to_string()),
            ],
        );
    }

    #[test]
    fn test_id_reflects_the_server_assigned_id() {
        let mut user = User::new("jane.doe");
        assert_eq!(user.id(), None);

        user.id = Some("5de011f8-5aa9-4d5b-b991-f462c8dd6bb7".to_string());
        assert_eq!(user.id(), Some("5de011f8-5aa9-4d5b-b991-f462c8dd6bb7"));
    }
}

//! Subscription resource implementation.
//!
//! This module provides the [`Subscription`] entity, its XML codec, and the
//! [`SubscriptionsEndpoint`] binding for managing the email subscriptions of
//! the active site.
//!
//! A subscription ties a user to a piece of content (a workbook or a view)
//! on a schedule; the server mails the content to the user each time the
//! schedule fires.
//!
//! # Operations
//!
//! - `list` - List subscriptions; no default query options are applied
//! - `get_by_id` - Fetch a single subscription
//! - `create` - Create a subscription
//! - `update` - Update subject, suspension, or schedule
//! - `delete` - Delete a subscription
//!
//! # Example
//!
//! ```rust,ignore
//! use tableau_api::Subscription;
//!
//! let subscription = Subscription::new(
//!     "Weekly numbers",
//!     "2f9f8e8d-1c1b-4a4a-9d9c-8b8a79796868",
//!     "Workbook",
//!     "8a8b7c7d-6e6f-5a5b-4c4d-3e3f2a2b1c1d",
//!     "5de011f8-5aa9-4d5b-b991-f462c8dd6bb7",
//! );
//! let created = client.subscriptions().create(&subscription).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::client::{ApiError, Client, CodecError};
use crate::endpoints::{Endpoint, RequestOptions, Resource};

/// An email subscription on a Tableau site.
///
/// # Fields
///
/// - `id` - The unique identifier, assigned by the server
/// - `subject` - The subject line of the subscription emails
/// - `content_id` - The id of the workbook or view being subscribed to
/// - `content_type` - The kind of content, `Workbook` or `View`
/// - `schedule_id` - The id of the schedule the emails follow
/// - `user_id` - The id of the receiving user
/// - `suspended` - Whether delivery is currently suspended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    /// The unique identifier of the subscription.
    pub id: Option<String>,

    /// The subject line of the subscription emails.
    pub subject: String,

    /// The id of the workbook or view being subscribed to.
    pub content_id: String,

    /// The kind of content being subscribed to, `Workbook` or `View`.
    pub content_type: String,

    /// The id of the schedule the emails follow.
    pub schedule_id: String,

    /// The id of the user receiving the emails.
    pub user_id: String,

    /// Whether delivery is currently suspended.
    pub suspended: Option<bool>,
}

impl Subscription {
    /// Creates a subscription linking a user to content on a schedule.
    ///
    /// The id stays unset until the server assigns one through
    /// [`SubscriptionsEndpoint::create`].
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        content_id: impl Into<String>,
        content_type: impl Into<String>,
        schedule_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            subject: subject.into(),
            content_id: content_id.into(),
            content_type: content_type.into(),
            schedule_id: schedule_id.into(),
            user_id: user_id.into(),
            suspended: None,
        }
    }
}

/// Response document carrying either a `<subscriptions>` list or a bare
/// `<subscription>`.
#[derive(Debug, Deserialize)]
struct SubscriptionsResponse {
    subscriptions: Option<SubscriptionList>,
    subscription: Option<SubscriptionXml>,
}

#[derive(Debug, Deserialize)]
struct SubscriptionList {
    #[serde(default, rename = "subscription")]
    entries: Vec<SubscriptionXml>,
}

#[derive(Debug, Deserialize)]
struct SubscriptionXml {
    #[serde(rename = "@id")]
    id: Option<String>,
    #[serde(rename = "@subject")]
    subject: String,
    #[serde(rename = "@suspended")]
    suspended: Option<bool>,
    content: ContentXml,
    schedule: IdRefXml,
    user: IdRefXml,
}

#[derive(Debug, Deserialize)]
struct ContentXml {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@type")]
    content_type: String,
}

#[derive(Debug, Deserialize)]
struct IdRefXml {
    #[serde(rename = "@id")]
    id: String,
}

impl From<SubscriptionXml> for Subscription {
    fn from(xml: SubscriptionXml) -> Self {
        Self {
            id: xml.id,
            subject: xml.subject,
            content_id: xml.content.id,
            content_type: xml.content.content_type,
            schedule_id: xml.schedule.id,
            user_id: xml.user.id,
            suspended: xml.suspended,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename = "tsRequest")]
struct SubscriptionCreateRequest<'a> {
    subscription: SubscriptionCreateXml<'a>,
}

#[derive(Debug, Serialize)]
struct SubscriptionCreateXml<'a> {
    #[serde(rename = "@subject")]
    subject: &'a str,
    content: ContentRef<'a>,
    schedule: IdRef<'a>,
    user: IdRef<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename = "tsRequest")]
struct SubscriptionUpdateRequest<'a> {
    subscription: SubscriptionUpdateXml<'a>,
}

#[derive(Debug, Serialize)]
struct SubscriptionUpdateXml<'a> {
    #[serde(rename = "@subject")]
    subject: &'a str,
    #[serde(rename = "@suspended", skip_serializing_if = "Option::is_none")]
    suspended: Option<bool>,
    schedule: IdRef<'a>,
}

#[derive(Debug, Serialize)]
struct ContentRef<'a> {
    #[serde(rename = "@id")]
    id: &'a str,
    #[serde(rename = "@type")]
    content_type: &'a str,
}

#[derive(Debug, Serialize)]
struct IdRef<'a> {
    #[serde(rename = "@id")]
    id: &'a str,
}

impl Resource for Subscription {
    const PATH: &'static str = "/subscriptions";
    const NAME: &'static str = "subscription";

    fn from_response(body: &str) -> Result<Vec<Self>, CodecError> {
        let response: SubscriptionsResponse =
            quick_xml::de::from_str(body).map_err(|source| CodecError::parse(Self::NAME, source))?;

        let entries = match (response.subscriptions, response.subscription) {
            (Some(list), _) => list.entries,
            (None, Some(single)) => vec![single],
            (None, None) => Vec::new(),
        };
        Ok(entries.into_iter().map(Self::from).collect())
    }

    fn to_create_request(&self) -> Result<String, CodecError> {
        let request = SubscriptionCreateRequest {
            subscription: SubscriptionCreateXml {
                subject: &self.subject,
                content: ContentRef {
                    id: &self.content_id,
                    content_type: &self.content_type,
                },
                schedule: IdRef {
                    id: &self.schedule_id,
                },
                user: IdRef { id: &self.user_id },
            },
        };
        quick_xml::se::to_string(&request).map_err(|source| CodecError::serialize(Self::NAME, source))
    }

    fn to_update_request(&self) -> Result<String, CodecError> {
        let request = SubscriptionUpdateRequest {
            subscription: SubscriptionUpdateXml {
                subject: &self.subject,
                suspended: self.suspended,
                schedule: IdRef {
                    id: &self.schedule_id,
                },
            },
        };
        quick_xml::se::to_string(&request).map_err(|source| CodecError::serialize(Self::NAME, source))
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Operations on the subscriptions of the active site.
///
/// Created through [`Client::subscriptions`]; borrows the client it was
/// created from.
#[derive(Debug)]
pub struct SubscriptionsEndpoint<'a> {
    endpoint: Endpoint<'a, Subscription>,
}

impl<'a> SubscriptionsEndpoint<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self {
            endpoint: Endpoint::new(client),
        }
    }

    /// Lists the subscriptions on the site.
    ///
    /// The options are sent exactly as given; subscriptions apply no
    /// default query options.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] before a successful sign-in,
    /// [`ApiError::Transport`] if the request fails or the server responds
    /// with an error status, and [`ApiError::Codec`] if the response body
    /// cannot be parsed.
    pub async fn list(&self, options: RequestOptions) -> Result<Vec<Subscription>, ApiError> {
        self.endpoint.list(options).await
    }

    /// Fetches a single subscription by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the response contains no
    /// subscription, plus the failure modes of
    /// [`list`](SubscriptionsEndpoint::list).
    pub async fn get_by_id(&self, id: &str) -> Result<Subscription, ApiError> {
        self.endpoint.get_by_id(id).await
    }

    /// Creates a subscription and returns the server's copy, including the
    /// assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the response contains no
    /// subscription, plus the failure modes of
    /// [`list`](SubscriptionsEndpoint::list).
    pub async fn create(&self, subscription: &Subscription) -> Result<Subscription, ApiError> {
        self.endpoint.create(subscription).await
    }

    /// Updates a subscription's subject, suspension state, or schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingEntityId`] if the subscription has no id
    /// yet, [`ApiError::NotFound`] if the response contains no
    /// subscription, plus the failure modes of
    /// [`list`](SubscriptionsEndpoint::list).
    pub async fn update(&self, subscription: &Subscription) -> Result<Subscription, ApiError> {
        self.endpoint.update(subscription).await
    }

    /// Deletes a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] before a successful sign-in
    /// and [`ApiError::Transport`] if the request fails or the server
    /// responds with an error status.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.endpoint.delete_by_id(id).await
    }
}

//! Generic endpoint machinery shared by every resource binding.
//!
//! [`Endpoint`] implements the operations that look the same for every
//! resource: list with query options, fetch by id, create, update, and
//! delete. It borrows the [`Client`] it was created from and drives all
//! traffic through the client's site-scoped request methods, so each
//! operation carries the active authentication token and the site prefix
//! without the binding having to compose URLs itself.

use std::marker::PhantomData;

use crate::client::{ApiError, Client};
use crate::endpoints::{RequestOptions, Resource};

/// Generic operations over one resource collection.
///
/// Bindings such as [`UsersEndpoint`](crate::endpoints::UsersEndpoint) wrap
/// an `Endpoint` and re-expose the operations under the verbs their
/// resource uses.
#[derive(Debug)]
pub struct Endpoint<'a, T: Resource> {
    client: &'a Client,
    _resource: PhantomData<T>,
}

impl<'a, T: Resource> Endpoint<'a, T> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// Lists entities in the collection.
    ///
    /// The resource's default options are applied first, then the options
    /// are rendered as an `&`-joined query string in their fixed order and
    /// appended after `?`. Values travel verbatim, without additional URL
    /// encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] before a successful sign-in,
    /// [`ApiError::Transport`] if the request fails or the server responds
    /// with an error status, and [`ApiError::Codec`] if the response body
    /// cannot be parsed.
    pub async fn list(&self, mut options: RequestOptions) -> Result<Vec<T>, ApiError> {
        T::apply_default_options(&mut options);
        let query = options
            .query_params()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        let body = self.client.get(&format!("{}?{query}", T::PATH)).await?;
        Ok(T::from_response(&body)?)
    }

    /// Fetches a single entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the response contains no entity,
    /// plus the failure modes of [`list`](Endpoint::list).
    pub async fn get_by_id(&self, id: &str) -> Result<T, ApiError> {
        let body = self.client.get(&format!("{}/{id}", T::PATH)).await?;
        first(T::from_response(&body)?, Some(id))
    }

    /// Updates an entity in place on the server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingEntityId`] if the entity has no id yet,
    /// [`ApiError::NotFound`] if the response contains no entity, plus the
    /// failure modes of [`list`](Endpoint::list).
    pub async fn update(&self, entity: &T) -> Result<T, ApiError> {
        let id = entity.id().ok_or(ApiError::MissingEntityId {
            resource: T::NAME,
        })?;
        let request = entity.to_update_request()?;

        let body = self.client.put(&format!("{}/{id}", T::PATH), request).await?;
        first(T::from_response(&body)?, Some(id))
    }

    /// Creates an entity in the collection and returns the server's copy.
    pub(crate) async fn create(&self, entity: &T) -> Result<T, ApiError> {
        let request = entity.to_create_request()?;

        let body = self.client.post(T::PATH, request).await?;
        first(T::from_response(&body)?, None)
    }

    /// Deletes an entity by id. Success responses carry no body.
    pub(crate) async fn delete_by_id(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{id}", T::PATH)).await?;
        Ok(())
    }
}

/// Takes the first entity of a parsed response, or reports which id came
/// back empty.
fn first<T: Resource>(entities: Vec<T>, id: Option<&str>) -> Result<T, ApiError> {
    entities
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::NotFound {
            resource: T::NAME,
            id: id.unwrap_or("unknown").to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CodecError;

    #[derive(Debug, PartialEq, Eq)]
    struct Widget(u32);

    impl Resource for Widget {
        const PATH: &'static str = "/widgets";
        const NAME: &'static str = "widget";

        fn from_response(_body: &str) -> Result<Vec<Self>, CodecError> {
            Ok(Vec::new())
        }

        fn to_create_request(&self) -> Result<String, CodecError> {
            Ok(String::new())
        }

        fn to_update_request(&self) -> Result<String, CodecError> {
            Ok(String::new())
        }

        fn id(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn test_first_returns_the_leading_entity() {
        let entity = first(vec![Widget(1), Widget(2)], Some("w-1"));
        assert_eq!(entity.ok(), Some(Widget(1)));
    }

    #[test]
    fn test_first_reports_the_requested_id_when_empty() {
        let error = first::<Widget>(Vec::new(), Some("w-404")).unwrap_err();
        assert!(matches!(
            &error,
            ApiError::NotFound { resource: "widget", id } if id == "w-404"
        ));
    }

    #[test]
    fn test_first_falls_back_to_unknown_without_an_id() {
        let error = first::<Widget>(Vec::new(), None).unwrap_err();
        assert_eq!(
            error.to_string(),
            "No widget with id 'unknown' was found in the response."
        );
    }
}

//! The capability contract implemented by every resource entity.
//!
//! [`Resource`] is what the generic [`Endpoint`](crate::endpoints::Endpoint)
//! machinery is written against: how to parse entities out of a response,
//! how to serialize them into create/update requests, how to read their id,
//! and which defaults a list query starts from.

use crate::client::CodecError;
use crate::endpoints::RequestOptions;

/// Capabilities an entity type supplies to the generic endpoint machinery.
///
/// Four required operations and one optional-with-default. Implementations
/// own the wire format entirely; the endpoint layer never inspects a
/// response body itself.
///
/// # Contract
///
/// - [`from_response`](Resource::from_response) must return every entity in
///   the document, in document order, and must accept both the plural list
///   shape and the bare single-entity shape the server uses.
/// - [`id`](Resource::id) returns the server-assigned id, or `None` for a
///   locally constructed entity that has not been created yet.
/// - [`apply_default_options`](Resource::apply_default_options) runs before
///   every list query; the default implementation leaves the options
///   untouched.
pub trait Resource: Sized + Send + Sync {
    /// Path suffix of the collection under a site, e.g. `/users`.
    const PATH: &'static str;

    /// Singular name used in error messages, e.g. `user`.
    const NAME: &'static str;

    /// Parses every entity of this type out of a response body.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the body is not a well-formed document of
    /// the expected shape.
    fn from_response(body: &str) -> Result<Vec<Self>, CodecError>;

    /// Serializes the entity into the body of a create (POST) request.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the entity cannot be serialized.
    fn to_create_request(&self) -> Result<String, CodecError>;

    /// Serializes the entity into the body of an update (PUT) request.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the entity cannot be serialized.
    fn to_update_request(&self) -> Result<String, CodecError>;

    /// Returns the server-assigned id of the entity, if it has one.
    fn id(&self) -> Option<&str>;

    /// Adjusts request options before a list query.
    ///
    /// The default implementation is a no-op.
    fn apply_default_options(options: &mut RequestOptions) {
        let _ = options;
    }
}

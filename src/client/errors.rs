//! Error types for client operations.
//!
//! This module contains the error types raised while talking to the server:
//! sign-in failures, transport failures, missing entities, and codec
//! failures.
//!
//! # Error Handling
//!
//! Every operation returns a specific error type where one failure mode
//! dominates ([`Client::sign_in`](crate::Client::sign_in) returns
//! [`AuthenticationError`]) and the unified [`ApiError`] everywhere else.
//! Pattern matching on [`ApiError`] distinguishes the failure classes:
//!
//! ```rust,ignore
//! match client.users().get_by_id("42").await {
//!     Ok(user) => println!("found {}", user.name),
//!     Err(ApiError::NotAuthenticated) => { /* sign in first */ }
//!     Err(ApiError::NotFound { resource, id }) => { /* no such entity */ }
//!     Err(ApiError::Transport(e)) => { /* status or connection failure */ }
//!     Err(ApiError::Codec(e)) => { /* undecodable payload */ }
//!     Err(e) => { /* remaining cases */ }
//! }
//! ```

use thiserror::Error;

/// Errors raised while signing in.
///
/// Sign-in is the only JSON exchange the client performs; everything that
/// can go wrong with it is collected here, including transport failures,
/// so `sign_in()` has a single error type.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// The server rejected the sign-in request (bad credentials, unknown
    /// site, disabled account).
    #[error("Sign-in was rejected with status {status}: {body}")]
    Rejected {
        /// The HTTP status code of the response.
        status: u16,
        /// The response body, typically an XML error document.
        body: String,
    },

    /// The sign-in request never produced a response.
    #[error("Sign-in request could not be completed: {0}")]
    Transport(#[from] TransportError),

    /// The response was not the expected JSON document.
    #[error("Sign-in response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response decoded but carried no auth token.
    #[error("Sign-in response did not include an auth token.")]
    MissingToken,

    /// The response decoded but carried no site id.
    #[error("Sign-in response did not include a site id.")]
    MissingSiteId,
}

/// Errors raised at the transport level on authenticated calls.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("Server responded with status {status}: {body}")]
    Status {
        /// The HTTP status code of the response.
        status: u16,
        /// The response body, typically an XML error document.
        body: String,
    },

    /// The request failed before a response arrived.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The client was closed; its connection pool has been released.
    #[error("The client has been closed. Create a new client to make further requests.")]
    Closed,
}

/// Errors raised by entity codecs.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A response body could not be parsed as the expected XML document.
    #[error("Failed to parse {resource} XML from the response: {source}")]
    Parse {
        /// Singular name of the entity being parsed.
        resource: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: quick_xml::DeError,
    },

    /// An entity could not be serialized into a request body.
    #[error("Failed to serialize the {resource} request body: {source}")]
    Serialize {
        /// Singular name of the entity being serialized.
        resource: &'static str,
        /// The underlying serialization error.
        #[source]
        source: quick_xml::SeError,
    },
}

impl CodecError {
    /// Wraps a deserialization failure for the named entity.
    #[must_use]
    pub fn parse(resource: &'static str, source: quick_xml::DeError) -> Self {
        Self::Parse { resource, source }
    }

    /// Wraps a serialization failure for the named entity.
    #[must_use]
    pub fn serialize(resource: &'static str, source: quick_xml::SeError) -> Self {
        Self::Serialize { resource, source }
    }
}

/// Unified error type for all client and endpoint operations.
///
/// This enum provides a single error type at API boundaries. Sub-errors
/// from the sign-in, transport, and codec layers wrap transparently, so
/// their messages are surfaced unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Sign-in failed.
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    /// A request was issued before any successful sign-in.
    #[error("Not signed in. Call sign_in() before issuing requests.")]
    NotAuthenticated,

    /// The transport reported a non-success status or a connection failure.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A single-entity operation found nothing to return.
    #[error("No {resource} with id '{id}' was found in the response.")]
    NotFound {
        /// Singular name of the entity that was requested.
        resource: &'static str,
        /// The id that was requested.
        id: String,
    },

    /// An entity codec failed to parse a response or serialize a request.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// An update was attempted on an entity that has no server-assigned id.
    #[error("The {resource} has no id. Only entities returned by the server can be updated or deleted.")]
    MissingEntityId {
        /// Singular name of the entity without an id.
        resource: &'static str,
    },
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthenticationError>();
    assert_send_sync::<TransportError>();
    assert_send_sync::<CodecError>();
    assert_send_sync::<ApiError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_sign_in_message_includes_status_and_body() {
        let error = AuthenticationError::Rejected {
            status: 401,
            body: "<tsResponse>bad credentials</tsResponse>".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("bad credentials"));
    }

    #[test]
    fn test_missing_token_message() {
        let message = AuthenticationError::MissingToken.to_string();
        assert!(message.contains("auth token"));
    }

    #[test]
    fn test_transport_status_message_includes_status_and_body() {
        let error = TransportError::Status {
            status: 500,
            body: "<tsResponse>boom</tsResponse>".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn test_closed_client_message_is_actionable() {
        let message = TransportError::Closed.to_string();
        assert!(message.contains("closed"));
        assert!(message.contains("new client"));
    }

    #[test]
    fn test_not_authenticated_message_names_sign_in() {
        let message = ApiError::NotAuthenticated.to_string();
        assert!(message.contains("sign_in()"));
    }

    #[test]
    fn test_not_found_message_includes_resource_and_id() {
        let error = ApiError::NotFound {
            resource: "user",
            id: "42".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("user"));
        assert!(message.contains("'42'"));
    }

    #[test]
    fn test_missing_entity_id_message_names_resource() {
        let error = ApiError::MissingEntityId { resource: "subscription" };
        let message = error.to_string();
        assert!(message.contains("subscription"));
        assert!(message.contains("no id"));
    }

    #[test]
    fn test_sub_errors_wrap_transparently() {
        let transport = TransportError::Status {
            status: 503,
            body: "unavailable".to_string(),
        };
        let expected = transport.to_string();
        let wrapped = ApiError::from(transport);
        assert_eq!(wrapped.to_string(), expected);

        let auth = AuthenticationError::MissingSiteId;
        let expected = auth.to_string();
        let wrapped = ApiError::from(auth);
        assert_eq!(wrapped.to_string(), expected);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let all: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(AuthenticationError::MissingToken),
            Box::new(TransportError::Closed),
            Box::new(ApiError::NotAuthenticated),
        ];
        assert_eq!(all.len(), 3);
    }
}

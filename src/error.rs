//! Error types for resource fetching and the update protocol.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors raised by a [`Transport`](crate::Transport) implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The service answered with a non-success HTTP status.
    #[error("{uri} returned HTTP {status}")]
    Http { uri: String, status: u16 },

    /// The request never produced a usable response.
    #[cfg(feature = "remote")]
    #[error("request to {uri} failed: {source}")]
    Network {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// The transport could not service the URI at all.
    ///
    /// Constructible without a live HTTP stack; mock transports use this to
    /// inject connection-level failures.
    #[error("transport unavailable for {uri}: {message}")]
    Unavailable { uri: String, message: String },

    /// The service base URL did not parse.
    #[error("invalid service root '{url}': {message}")]
    InvalidBase { url: String, message: String },
}

/// A response body did not decode as the expected resource shape.
#[derive(Debug, Error)]
#[error("body is not a valid resource document: {source}")]
pub struct DecodeError {
    #[from]
    source: serde_json::Error,
}

/// Failure to retrieve one resource.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("decoding {uri}: {source}")]
    Decode {
        uri: String,
        #[source]
        source: DecodeError,
    },
}

/// Errors from [`Snapshot::update`](crate::Snapshot::update).
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The snapshot was constructed locally rather than fetched; there is
    /// nothing to diff against.
    #[error("snapshot has no baseline to diff against")]
    NoBaseline,

    /// The snapshot carries no write capability.
    #[error("snapshot is not bound to a transport")]
    NotBound,

    /// The stored baseline bytes no longer decode as this resource type.
    #[error("baseline is not a valid resource document: {source}")]
    Baseline {
        #[source]
        source: DecodeError,
    },

    /// The typed view could not be serialized for comparison.
    #[error("serializing resource for comparison: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// The PATCH was sent and the transport reported failure.
    #[error("update of {uri} failed: {source}")]
    Failed {
        uri: String,
        #[source]
        source: TransportError,
    },
}

/// One or more members of a collection could not be fetched.
///
/// Carries the full URI-to-error mapping. Only produced when at least one
/// member failed, and always alongside the members that did succeed; see
/// [`CollectionFetch`](crate::CollectionFetch).
#[derive(Debug, Error)]
#[error("failed to fetch {} collection member(s)", failures.len())]
pub struct AggregateError {
    /// Failed member URI mapped to the error it hit.
    pub failures: BTreeMap<String, FetchError>,
}

impl AggregateError {
    /// Wrap a non-empty failure map; `None` when nothing failed.
    pub(crate) fn from_failures(failures: BTreeMap<String, FetchError>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(AggregateError { failures })
        }
    }
}

//! Collection references and partial-failure fetching.
//!
//! A collection document lists member URIs; dereferencing it means fetching
//! each member independently. One broken or unreachable link must not cost
//! the caller the healthy members, so failures are collected per URI and
//! returned alongside whatever did fetch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AggregateError, DecodeError, FetchError};
use crate::snapshot::{fetch, Resource, Snapshot};
use crate::transport::{SharedTransport, Transport};

/// A link to another resource, as carried in `Links` sections and
/// collection member arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: String,
}

impl Reference {
    pub fn new(odata_id: impl Into<String>) -> Self {
        Reference {
            odata_id: odata_id.into(),
        }
    }
}

/// The to-be-fetched member list of a resource collection.
///
/// Materialized from a collection document's `Members` array; the declared
/// count is advisory and may disagree with the member list on misbehaving
/// services.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionRef {
    #[serde(rename = "Members", default)]
    members: Vec<Reference>,

    #[serde(rename = "Members@odata.count", default)]
    count: Option<u64>,
}

impl CollectionRef {
    /// Decode a collection document.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not a collection-shaped JSON
    /// document.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Build a reference from link objects already at hand.
    pub fn from_refs(refs: &[Reference]) -> Self {
        CollectionRef {
            members: refs.to_vec(),
            count: None,
        }
    }

    /// Member URIs in document order.
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|r| r.odata_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The `Members@odata.count` annotation, when the document carried one.
    pub fn declared_count(&self) -> Option<u64> {
        self.count
    }
}

/// Outcome of dereferencing a collection: every member that fetched, plus
/// an aggregate error when any did not.
///
/// The partial result set lives here on the value; the error only explains
/// which URIs failed and why.
pub struct CollectionFetch<T: Resource> {
    /// Successfully fetched members, in completion order.
    pub items: Vec<Snapshot<T>>,
    /// Present exactly when at least one member failed.
    pub error: Option<AggregateError>,
}

impl<T: Resource> CollectionFetch<T> {
    /// True when every member fetched.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// All-or-nothing view: the items, or the aggregate error if any member
    /// failed. Partial results are dropped; prefer reading `items` directly
    /// when a partial set is usable.
    pub fn into_items(self) -> Result<Vec<Snapshot<T>>, AggregateError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.items),
        }
    }
}

/// Fetch every member of a collection reference, continuing past failures.
///
/// An empty reference yields an empty result with no error; fetching
/// nothing is not a failure. Each fetched snapshot is bound to `transport`
/// so it can be updated later. Completion order is not guaranteed to match
/// the reference order.
pub fn fetch_collection<T: Resource>(
    transport: &SharedTransport,
    reference: &CollectionRef,
) -> CollectionFetch<T> {
    let mut items = Vec::with_capacity(reference.len());
    let mut failures = BTreeMap::new();

    for uri in reference.uris() {
        match fetch::<T>(transport, uri) {
            Ok(snapshot) => items.push(snapshot),
            Err(err) => {
                tracing::debug!(%uri, error = %err, "collection member failed");
                failures.insert(uri.to_string(), err);
            }
        }
    }

    CollectionFetch {
        items,
        error: AggregateError::from_failures(failures),
    }
}

/// Fetch the collection document at `uri`, then every member it lists.
///
/// # Errors
///
/// Failure to retrieve or decode the collection document itself is an
/// ordinary [`FetchError`]; member failures are aggregated in the returned
/// [`CollectionFetch`] as usual.
pub fn fetch_collection_at<T: Resource>(
    transport: &SharedTransport,
    uri: &str,
) -> Result<CollectionFetch<T>, FetchError> {
    let body = transport.get(uri)?;
    let reference = CollectionRef::decode(&body).map_err(|source| FetchError::Decode {
        uri: uri.to_string(),
        source,
    })?;
    Ok(fetch_collection(transport, &reference))
}

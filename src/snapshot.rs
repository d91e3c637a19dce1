//! Typed snapshots of remote resources and the read-modify-write protocol.
//!
//! A [`Snapshot`] pairs the decoded, typed view of one resource with the
//! exact bytes it was decoded from (the baseline). Callers mutate the typed
//! view freely; [`Snapshot::update`] diffs it against a fresh decode of the
//! baseline and sends only the whitelisted members that changed.
//!
//! The baseline is fixed at creation and never refreshed, not even by a
//! successful update. A second `update` without an intervening re-fetch
//! diffs against the pre-update server state and may re-send members the
//! service already applied; callers that update repeatedly must re-fetch in
//! between.

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::diff::writable_delta;
use crate::error::{DecodeError, FetchError, UpdateError};
use crate::transport::{SharedTransport, Transport};

/// Schema contract a resource type brings to the generic machinery.
///
/// serde provides the one encoding used everywhere: decoding fetched bodies,
/// re-decoding baselines, and serializing both sides of the diff. `WRITABLE`
/// lists the JSON member names a client may legally modify; it is a contract
/// with the service's capability model, not something derivable from the
/// data, and every name on it must be an addressable member of the type's
/// serialized form.
pub trait Resource: Serialize + DeserializeOwned {
    /// Client-writable JSON member names, in emission order.
    const WRITABLE: &'static [&'static str];

    /// The resource's own URI as carried in its body, if any.
    fn odata_id(&self) -> &str;
}

/// One remote resource: typed view, baseline bytes, optional write handle.
#[derive(Clone)]
pub struct Snapshot<T: Resource> {
    identity: String,
    data: T,
    baseline: Vec<u8>,
    transport: Option<SharedTransport>,
}

impl<T: Resource> Snapshot<T> {
    /// Decode a fetched body, retaining the exact bytes as the baseline.
    ///
    /// The result is unbound; [`bind`](Snapshot::bind) it (or use
    /// [`fetch`]) before calling [`update`](Snapshot::update).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body does not parse as this type.
    pub fn decode(body: impl Into<Vec<u8>>) -> Result<Self, DecodeError> {
        let baseline = body.into();
        let data: T = serde_json::from_slice(&baseline)?;
        let identity = data.odata_id().to_string();
        Ok(Snapshot {
            identity,
            data,
            baseline,
            transport: None,
        })
    }

    /// Wrap a locally constructed value with no baseline.
    ///
    /// Useful for building representations by hand; such a snapshot cannot
    /// be updated (there is no server state to diff against) and `update`
    /// on it fails with [`UpdateError::NoBaseline`].
    pub fn detached(data: T) -> Self {
        let identity = data.odata_id().to_string();
        Snapshot {
            identity,
            data,
            baseline: Vec::new(),
            transport: None,
        }
    }

    /// Attach the write capability used by later [`update`](Snapshot::update) calls.
    pub fn bind(&mut self, transport: SharedTransport) {
        self.transport = Some(transport);
    }

    pub fn is_bound(&self) -> bool {
        self.transport.is_some()
    }

    /// The resource URI updates are sent to.
    pub fn uri(&self) -> &str {
        &self.identity
    }

    /// The exact bytes last received for this resource.
    pub fn baseline(&self) -> &[u8] {
        &self.baseline
    }

    /// Give up the snapshot and keep only the typed view.
    pub fn into_inner(self) -> T {
        self.data
    }

    /// The whitelisted members that currently differ from the baseline,
    /// mapped to their new values. This is exactly the document
    /// [`update`](Snapshot::update) would send.
    ///
    /// # Errors
    ///
    /// Fails with [`UpdateError::NoBaseline`] on a detached snapshot, or if
    /// either side fails to (de)serialize.
    pub fn pending_changes(&self) -> Result<Map<String, Value>, UpdateError> {
        if self.baseline.is_empty() {
            return Err(UpdateError::NoBaseline);
        }
        self.delta()
    }

    /// Send local modifications back to the service.
    ///
    /// Re-decodes the baseline, compares every whitelisted member, and
    /// PATCHes exactly the ones that changed. When nothing changed, no
    /// request is made at all; an empty PATCH is wasteful and some services
    /// reject it.
    ///
    /// On success the baseline is deliberately left as-is; see the module
    /// docs for the re-fetch contract.
    ///
    /// # Errors
    ///
    /// [`UpdateError::NoBaseline`] for detached snapshots,
    /// [`UpdateError::NotBound`] when no transport is attached, and
    /// [`UpdateError::Failed`] carrying the transport error when the PATCH
    /// itself fails.
    pub fn update(&self) -> Result<(), UpdateError> {
        if self.baseline.is_empty() {
            return Err(UpdateError::NoBaseline);
        }
        let transport = self.transport.as_ref().ok_or(UpdateError::NotBound)?;

        let delta = self.delta()?;
        if delta.is_empty() {
            tracing::debug!(uri = %self.identity, "no writable changes, skipping PATCH");
            return Ok(());
        }

        let body = serde_json::to_vec(&Value::Object(delta))
            .map_err(|source| UpdateError::Encode { source })?;

        transport
            .patch(&self.identity, &body)
            .map_err(|source| UpdateError::Failed {
                uri: self.identity.clone(),
                source,
            })
    }

    fn delta(&self) -> Result<Map<String, Value>, UpdateError> {
        let original: T = serde_json::from_slice(&self.baseline)
            .map_err(|e| UpdateError::Baseline { source: e.into() })?;

        let original = to_members(&original)?;
        let current = to_members(&self.data)?;
        Ok(writable_delta(&original, &current, T::WRITABLE))
    }

    pub(crate) fn set_identity_fallback(&mut self, uri: &str) {
        if self.identity.is_empty() {
            self.identity = uri.to_string();
        }
    }
}

impl<T: Resource + std::fmt::Debug> std::fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("identity", &self.identity)
            .field("data", &self.data)
            .field("baseline_len", &self.baseline.len())
            .field("bound", &self.transport.is_some())
            .finish()
    }
}

impl<T: Resource> Deref for Snapshot<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T: Resource> DerefMut for Snapshot<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

fn to_members<T: Serialize>(value: &T) -> Result<Map<String, Value>, UpdateError> {
    match serde_json::to_value(value).map_err(|source| UpdateError::Encode { source })? {
        Value::Object(map) => Ok(map),
        // A non-object resource has no addressable members to diff.
        _ => Ok(Map::new()),
    }
}

/// Fetch and decode a single resource, binding the transport for later
/// updates.
///
/// The request URI becomes the snapshot identity when the body itself does
/// not carry one.
///
/// # Errors
///
/// Transport failures and undecodable bodies surface as [`FetchError`].
pub fn fetch<T: Resource>(
    transport: &SharedTransport,
    uri: &str,
) -> Result<Snapshot<T>, FetchError> {
    let body = transport.get(uri)?;
    let mut snapshot = Snapshot::<T>::decode(body).map_err(|source| FetchError::Decode {
        uri: uri.to_string(),
        source,
    })?;
    snapshot.set_identity_fallback(uri);
    snapshot.bind(transport.clone());
    Ok(snapshot)
}

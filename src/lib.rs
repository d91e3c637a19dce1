//! Typed client-side models for Redfish hardware-management services.
//!
//! Resources are fetched as [`Snapshot`]s: a strongly-typed view of one
//! remote resource together with the exact bytes it was decoded from.
//! Mutate the typed view, then call [`Snapshot::update`] to send back a
//! minimal partial document containing only the client-writable members
//! that actually changed; everything server-owned stays out of the PATCH.
//!
//! Link collections are dereferenced with [`fetch_collection`], which keeps
//! going past broken members and reports their failures alongside the
//! healthy results.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use redfish_model::mock::MockTransport;
//! use redfish_model::resources::PowerDistribution;
//! use redfish_model::{fetch, SharedTransport};
//!
//! let pdu_uri = "/redfish/v1/PowerEquipment/RackPDUs/1";
//! let mock = Arc::new(MockTransport::new().with_resource(
//!     pdu_uri,
//!     format!(r#"{{"@odata.id": "{pdu_uri}", "AssetTag": "PDX-92381"}}"#),
//! ));
//! let transport: SharedTransport = mock.clone();
//!
//! let mut pdu = fetch::<PowerDistribution>(&transport, pdu_uri)?;
//! pdu.asset_tag = Some("PDX-92382".to_string());
//! pdu.update()?;
//!
//! // Only the changed, writable member went over the wire.
//! assert_eq!(
//!     mock.patches(),
//!     vec![(pdu_uri.to_string(), serde_json::json!({"AssetTag": "PDX-92382"}))],
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Update semantics
//!
//! The diff always runs against the bytes of the *last fetch*. A successful
//! update does not refresh them, so repeated updates without an intervening
//! re-fetch will diff against stale server state; re-fetch when you need
//! the authoritative post-update resource.

mod collection;
mod diff;
mod error;
pub mod mock;
pub mod resources;
mod snapshot;
mod transport;

pub use collection::{
    fetch_collection, fetch_collection_at, CollectionFetch, CollectionRef, Reference,
};
pub use error::{AggregateError, DecodeError, FetchError, TransportError, UpdateError};
pub use snapshot::{fetch, Resource, Snapshot};
pub use transport::{SharedTransport, Transport};

#[cfg(feature = "remote")]
pub use transport::{HttpConfig, HttpTransport};

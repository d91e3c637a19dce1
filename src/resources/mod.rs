//! Typed schemas for the supported resource families.
//!
//! Each module is a mechanical description of one resource type's wire
//! shape: serde structs with PascalCase member names, enums for the
//! protocol's constant sets, and a [`Resource`](crate::Resource) impl
//! carrying the type's writable-member whitelist. Unknown members decode
//! into each type's `extra` map so nothing a service sends is dropped.

mod aggregation_source;
mod common;
mod connection_method;
mod facility;
mod host_interface;
mod license;
mod pcie_slots;
mod power_distribution;
mod simple_storage;

pub use aggregation_source::{
    AggregationSource, AggregationSourceLinks, AggregationType, SnmpAuthenticationProtocol,
    SnmpEncryptionProtocol, SnmpSettings,
};
pub use common::{Health, Location, Placement, State, Status};
pub use connection_method::{ConnectionMethod, ConnectionMethodLinks, ConnectionMethodType};
pub use facility::{Facility, FacilityLinks, FacilityType};
pub use host_interface::{AuthenticationMode, HostInterface, HostInterfaceType};
pub use license::{AuthorizationScope, License, LicenseOrigin, LicenseType};
pub use pcie_slots::{PcieSlot, PcieSlotLinks, PcieSlots, PcieType, SlotType};
pub use power_distribution::{EquipmentType, PowerDistribution, PowerDistributionLinks};
pub use simple_storage::{SimpleStorage, SimpleStorageLinks, StorageDevice};

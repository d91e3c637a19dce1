//! Power distribution equipment: rack PDUs, transfer switches, switchgear.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collection::Reference;
use crate::resources::common::{Location, Status};
use crate::snapshot::Resource;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerDistribution {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: String,
    #[serde(rename = "@odata.type", default)]
    pub odata_type: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<EquipmentType>,

    /// Operator-assigned inventory tag; the one client-writable member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(rename = "UUID", default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mains: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feeders: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subfeeds: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlets: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Reference>,

    #[serde(default)]
    pub links: PowerDistributionLinks,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub oem: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentType {
    #[serde(rename = "RackPDU")]
    RackPdu,
    #[serde(rename = "FloorPDU")]
    FloorPdu,
    ManualTransferSwitch,
    AutomaticTransferSwitch,
    Switchgear,
    PowerShelf,
    Bus,
    BatteryShelf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerDistributionLinks {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chassis: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub managed_by: Vec<Reference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for PowerDistribution {
    const WRITABLE: &'static [&'static str] = &["AssetTag"];

    fn odata_id(&self) -> &str {
        &self.odata_id
    }
}

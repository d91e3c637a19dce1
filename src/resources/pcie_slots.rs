//! PCIe slot inventory of a chassis.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collection::Reference;
use crate::resources::common::{Location, Status};
use crate::snapshot::Resource;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PcieSlots {
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

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<PcieSlot>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub oem: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One physical slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PcieSlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot_pluggable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lanes: Option<u32>,
    #[serde(rename = "PCIeType", default, skip_serializing_if = "Option::is_none")]
    pub pcie_type: Option<PcieType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_type: Option<SlotType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default)]
    pub links: PcieSlotLinks,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PcieType {
    Gen1,
    Gen2,
    Gen3,
    Gen4,
    Gen5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotType {
    FullLength,
    HalfLength,
    LowProfile,
    Mini,
    M2,
    #[serde(rename = "OEM")]
    Oem,
    #[serde(rename = "OCP3Small")]
    Ocp3Small,
    #[serde(rename = "OCP3Large")]
    Ocp3Large,
    U2,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PcieSlotLinks {
    #[serde(rename = "PCIeDevice", default, skip_serializing_if = "Vec::is_empty")]
    pub pcie_device: Vec<Reference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for PcieSlots {
    const WRITABLE: &'static [&'static str] = &[];

    fn odata_id(&self) -> &str {
        &self.odata_id
    }
}

//! Simple storage: the basic device inventory of a system.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collection::Reference;
use crate::resources::common::Status;
use crate::snapshot::Resource;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimpleStorage {
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
    pub uefi_device_path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<StorageDevice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    #[serde(default)]
    pub links: SimpleStorageLinks,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub oem: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageDevice {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub oem: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimpleStorageLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storage: Vec<Reference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for SimpleStorage {
    const WRITABLE: &'static [&'static str] = &[];

    fn odata_id(&self) -> &str {
        &self.odata_id
    }
}

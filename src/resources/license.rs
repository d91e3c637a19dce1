//! Installed feature licenses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::resources::common::Status;
use crate::snapshot::Resource;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct License {
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
    pub authorization_scope: Option<AuthorizationScope>,
    #[serde(rename = "DownloadURI", default, skip_serializing_if = "Option::is_none")]
    pub download_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entitlement_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_date: Option<String>,
    #[serde(
        rename = "LicenseInfoURI",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub license_info_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_origin: Option<LicenseOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_type: Option<LicenseType>,
    /// The license itself, opaque to this layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(rename = "SKU", default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_authorized_devices: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_use_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub oem: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationScope {
    Device,
    Capacity,
    Service,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseOrigin {
    BuiltIn,
    Installed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseType {
    Production,
    Prototype,
    Trial,
}

impl Resource for License {
    // Licenses are installed and removed whole, never patched.
    const WRITABLE: &'static [&'static str] = &[];

    fn odata_id(&self) -> &str {
        &self.odata_id
    }
}

//! Host interfaces: the channel between a manager and its host system.
//!
//! Most of the authentication posture is client-configurable, which makes
//! this the widest whitelist in the catalog.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collection::Reference;
use crate::resources::common::Status;
use crate::snapshot::Resource;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostInterface {
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
    pub host_interface_type: Option<HostInterfaceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub externally_accessible: Option<bool>,

    /// Accepted authentication modes for requests arriving over this
    /// interface. Writable; always encoded so that clearing it diffs as an
    /// empty array rather than a removal.
    #[serde(default)]
    pub authentication_modes: Vec<AuthenticationMode>,
    /// Role assumed by unauthenticated requests when `AuthNone` is allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_none_role_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_auth_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_auth_role_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_auth_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_auth_role_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_ethernet_interfaces: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_ethernet_interface: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub oem: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostInterfaceType {
    NetworkHostInterface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticationMode {
    AuthNone,
    BasicAuth,
    RedfishSessionAuth,
    OemAuth,
}

impl Resource for HostInterface {
    const WRITABLE: &'static [&'static str] = &[
        "AuthNoneRoleId",
        "AuthenticationModes",
        "FirmwareAuthEnabled",
        "FirmwareAuthRoleId",
        "InterfaceEnabled",
        "KernelAuthEnabled",
        "KernelAuthRoleId",
    ];

    fn odata_id(&self) -> &str {
        &self.odata_id
    }
}

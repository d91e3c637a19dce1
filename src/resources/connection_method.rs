//! Connection methods advertised by an aggregation service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collection::Reference;
use crate::snapshot::Resource;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionMethod {
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
    pub connection_method_type: Option<ConnectionMethodType>,
    /// Vendor-specific qualifier for `ConnectionMethodType: OEM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_method_variant: Option<String>,

    #[serde(default)]
    pub links: ConnectionMethodLinks,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub oem: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionMethodType {
    Redfish,
    #[serde(rename = "SNMP")]
    Snmp,
    #[serde(rename = "IPMI15")]
    Ipmi15,
    #[serde(rename = "IPMI20")]
    Ipmi20,
    #[serde(rename = "NETCONF")]
    Netconf,
    #[serde(rename = "OEM")]
    Oem,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionMethodLinks {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aggregation_sources: Vec<Reference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for ConnectionMethod {
    // Entirely server-owned; updates always no-op.
    const WRITABLE: &'static [&'static str] = &[];

    fn odata_id(&self) -> &str {
        &self.odata_id
    }
}

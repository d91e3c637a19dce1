//! Aggregation sources: remote endpoints an aggregation service collects
//! resources from.
//!
//! The connection credentials are the client-writable part; everything else
//! on the resource is maintained by the service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collection::Reference;
use crate::resources::common::Status;
use crate::snapshot::Resource;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AggregationSource {
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

    /// Address of the aggregated endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Write-only on the service; reads come back as `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_type: Option<AggregationType>,
    #[serde(rename = "SNMP", default, skip_serializing_if = "Option::is_none")]
    pub snmp: Option<SnmpSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    #[serde(default)]
    pub links: AggregationSourceLinks,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub oem: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregationType {
    Complete,
    NotificationsOnly,
}

/// SNMP access settings for sources reached over SNMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnmpSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_protocol: Option<SnmpAuthenticationProtocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_protocol: Option<SnmpEncryptionProtocol>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnmpAuthenticationProtocol {
    None,
    CommunityString,
    #[serde(rename = "HMAC_MD5")]
    HmacMd5,
    #[serde(rename = "HMAC_SHA96")]
    HmacSha96,
    #[serde(rename = "HMAC128_SHA224")]
    Hmac128Sha224,
    #[serde(rename = "HMAC192_SHA256")]
    Hmac192Sha256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnmpEncryptionProtocol {
    None,
    #[serde(rename = "CBC_DES")]
    CbcDes,
    #[serde(rename = "CFB128_AES128")]
    Cfb128Aes128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AggregationSourceLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_method: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources_accessed: Vec<Reference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for AggregationSource {
    const WRITABLE: &'static [&'static str] = &["HostName", "UserName", "Password"];

    fn odata_id(&self) -> &str {
        &self.odata_id
    }
}

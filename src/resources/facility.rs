//! Facilities: rooms, floors, buildings and sites containing equipment.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collection::Reference;
use crate::resources::common::{Location, Status};
use crate::snapshot::Resource;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Facility {
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
    pub facility_type: Option<FacilityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Collection of power domains scoped to this facility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_domains: Option<Reference>,

    #[serde(default)]
    pub links: FacilityLinks,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub oem: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityType {
    Room,
    Floor,
    Building,
    Site,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FacilityLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contained_by_facility: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contains_facilities: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub managed_by: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub power_distribution: Vec<Reference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Facility {
    const WRITABLE: &'static [&'static str] = &[];

    fn odata_id(&self) -> &str {
        &self.odata_id
    }
}

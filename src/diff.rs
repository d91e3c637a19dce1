//! Delta computation between a baseline and a locally mutated resource.
//!
//! The update protocol never echoes server-owned members back to the
//! service: only members on a resource type's whitelist are compared, and
//! only those that actually changed are emitted. Comparison is deep value
//! equality on the JSON encoding, so nested objects and arrays diff
//! element-wise rather than by identity.

use serde_json::{Map, Value};

/// Collect the whitelisted members whose value differs between `original`
/// and `current`, mapped to the current value.
///
/// Absent members compare equal to explicit `null`. A member cleared locally
/// (present in `original`, absent in `current`) is emitted as `null`, which
/// is how a JSON merge deletes it on the service side.
pub(crate) fn writable_delta(
    original: &Map<String, Value>,
    current: &Map<String, Value>,
    writable: &[&str],
) -> Map<String, Value> {
    let mut delta = Map::new();

    for &name in writable {
        let before = original.get(name).unwrap_or(&Value::Null);
        let after = current.get(name).unwrap_or(&Value::Null);
        if before != after {
            delta.insert(name.to_string(), after.clone());
        }
    }

    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn unchanged_resource_yields_empty_delta() {
        let doc = obj(json!({"Enabled": true, "RoleId": "Admin"}));
        let delta = writable_delta(&doc, &doc.clone(), &["Enabled", "RoleId"]);
        assert!(delta.is_empty());
    }

    #[test]
    fn only_changed_members_are_collected() {
        let original = obj(json!({"Enabled": false, "RoleId": "Admin", "ReadOnlyCount": 4}));
        let current = obj(json!({"Enabled": true, "RoleId": "Admin", "ReadOnlyCount": 4}));

        let delta = writable_delta(&original, &current, &["Enabled", "RoleId"]);
        assert_eq!(Value::Object(delta), json!({"Enabled": true}));
    }

    #[test]
    fn non_whitelisted_changes_are_ignored() {
        let original = obj(json!({"Enabled": false, "ReadOnlyCount": 4}));
        let current = obj(json!({"Enabled": false, "ReadOnlyCount": 9}));

        let delta = writable_delta(&original, &current, &["Enabled"]);
        assert!(delta.is_empty());
    }

    #[test]
    fn multiple_changes_collected_in_whitelist_order() {
        let original = obj(json!({"HostName": "old", "UserName": "root", "Password": null}));
        let current = obj(json!({"HostName": "new", "UserName": "admin", "Password": null}));

        let delta = writable_delta(&original, &current, &["HostName", "UserName", "Password"]);
        let names: Vec<&str> = delta.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["HostName", "UserName"]);
    }

    #[test]
    fn nested_values_compare_element_wise() {
        let original = obj(json!({"AuthenticationModes": ["BasicAuth", "RedfishSessionAuth"]}));
        let same = obj(json!({"AuthenticationModes": ["BasicAuth", "RedfishSessionAuth"]}));
        let reordered = obj(json!({"AuthenticationModes": ["RedfishSessionAuth", "BasicAuth"]}));

        assert!(writable_delta(&original, &same, &["AuthenticationModes"]).is_empty());

        let delta = writable_delta(&original, &reordered, &["AuthenticationModes"]);
        assert_eq!(
            delta.get("AuthenticationModes"),
            Some(&json!(["RedfishSessionAuth", "BasicAuth"]))
        );
    }

    #[test]
    fn absent_member_equals_explicit_null() {
        let original = obj(json!({"Password": null}));
        let current = obj(json!({}));
        assert!(writable_delta(&original, &current, &["Password"]).is_empty());
    }

    #[test]
    fn newly_set_member_is_emitted() {
        let original = obj(json!({}));
        let current = obj(json!({"Password": "hunter2"}));

        let delta = writable_delta(&original, &current, &["Password"]);
        assert_eq!(Value::Object(delta), json!({"Password": "hunter2"}));
    }

    #[test]
    fn cleared_member_is_emitted_as_null() {
        let original = obj(json!({"AssetTag": "rack-4"}));
        let current = obj(json!({}));

        let delta = writable_delta(&original, &current, &["AssetTag"]);
        assert_eq!(Value::Object(delta), json!({"AssetTag": null}));
    }

    #[test]
    fn empty_whitelist_never_produces_a_delta() {
        let original = obj(json!({"UefiDevicePath": "a"}));
        let current = obj(json!({"UefiDevicePath": "b"}));
        assert!(writable_delta(&original, &current, &[]).is_empty());
    }
}

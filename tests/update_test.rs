//! End-to-end update protocol tests against a mock HTTP service.

#![cfg(feature = "remote")]

use serde_json::json;

use redfish_model::resources::{HostInterface, PowerDistribution};
use redfish_model::{fetch, FetchError, HttpConfig, HttpTransport, TransportError, UpdateError};

const PDU_URI: &str = "/redfish/v1/PowerEquipment/RackPDUs/1";

fn pdu_body() -> serde_json::Value {
    json!({
        "@odata.id": PDU_URI,
        "@odata.type": "#PowerDistribution.v1_3_0.PowerDistribution",
        "Id": "1",
        "Name": "RackPDU1",
        "EquipmentType": "RackPDU",
        "AssetTag": "PDX-92381",
        "SerialNumber": "29347ZT536",
        "Status": {"State": "Enabled", "Health": "OK"}
    })
}

mod patch_emission {
    use super::*;

    #[test]
    fn changed_member_is_patched_alone() {
        let mut server = mockito::Server::new();
        let get = server
            .mock("GET", PDU_URI)
            .with_header("content-type", "application/json")
            .with_body(pdu_body().to_string())
            .create();
        let patch = server
            .mock("PATCH", PDU_URI)
            .match_header("content-type", "application/json")
            .match_header("odata-version", "4.0")
            .match_body(mockito::Matcher::Json(json!({"AssetTag": "PDX-92382"})))
            .with_status(200)
            .create();

        let transport = HttpTransport::new(&server.url()).unwrap().into_shared();
        let mut pdu = fetch::<PowerDistribution>(&transport, PDU_URI).unwrap();

        pdu.asset_tag = Some("PDX-92382".to_string());
        pdu.update().unwrap();

        get.assert();
        patch.assert();
    }

    #[test]
    fn unchanged_resource_issues_no_patch() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", PDU_URI)
            .with_body(pdu_body().to_string())
            .create();
        let patch = server.mock("PATCH", PDU_URI).expect(0).create();

        let transport = HttpTransport::new(&server.url()).unwrap().into_shared();
        let pdu = fetch::<PowerDistribution>(&transport, PDU_URI).unwrap();

        pdu.update().unwrap();
        patch.assert();
    }

    #[test]
    fn server_owned_members_stay_out_of_the_body() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", PDU_URI)
            .with_body(pdu_body().to_string())
            .create();
        // An exact-body match: SerialNumber must not ride along even though
        // it was mutated locally.
        let patch = server
            .mock("PATCH", PDU_URI)
            .match_body(mockito::Matcher::Json(json!({"AssetTag": "repainted"})))
            .with_status(200)
            .create();

        let transport = HttpTransport::new(&server.url()).unwrap().into_shared();
        let mut pdu = fetch::<PowerDistribution>(&transport, PDU_URI).unwrap();

        pdu.serial_number = Some("FORGED".to_string());
        pdu.asset_tag = Some("repainted".to_string());
        pdu.update().unwrap();

        patch.assert();
    }

    #[test]
    fn multi_member_update_sends_each_changed_member() {
        let uri = "/redfish/v1/Managers/1/HostInterfaces/1";
        let mut server = mockito::Server::new();
        server
            .mock("GET", uri)
            .with_body(
                json!({
                    "@odata.id": uri,
                    "Id": "1",
                    "InterfaceEnabled": false,
                    "AuthNoneRoleId": "ReadOnly",
                    "KernelAuthEnabled": false
                })
                .to_string(),
            )
            .create();
        let patch = server
            .mock("PATCH", uri)
            .match_body(mockito::Matcher::Json(json!({
                "AuthNoneRoleId": "Operator",
                "InterfaceEnabled": true
            })))
            .with_status(200)
            .create();

        let transport = HttpTransport::new(&server.url()).unwrap().into_shared();
        let mut interface = fetch::<HostInterface>(&transport, uri).unwrap();

        interface.interface_enabled = Some(true);
        interface.auth_none_role_id = Some("Operator".to_string());
        interface.update().unwrap();

        patch.assert();
    }
}

mod sessions {
    use super::*;

    #[test]
    fn session_token_rides_every_request() {
        let mut server = mockito::Server::new();
        let get = server
            .mock("GET", PDU_URI)
            .match_header("x-auth-token", "0123456789abcdef")
            .with_body(pdu_body().to_string())
            .create();

        let config = HttpConfig {
            token: Some("0123456789abcdef".to_string()),
            ..HttpConfig::default()
        };
        let transport = HttpTransport::with_config(&server.url(), config)
            .unwrap()
            .into_shared();

        fetch::<PowerDistribution>(&transport, PDU_URI).unwrap();
        get.assert();
    }

    #[test]
    fn basic_auth_is_the_fallback_without_a_token() {
        let mut server = mockito::Server::new();
        let get = server
            .mock("GET", PDU_URI)
            .match_header("authorization", "Basic cm9vdDpjYWx2aW4=")
            .with_body(pdu_body().to_string())
            .create();

        let config = HttpConfig {
            username: Some("root".to_string()),
            password: Some("calvin".to_string()),
            ..HttpConfig::default()
        };
        let transport = HttpTransport::with_config(&server.url(), config)
            .unwrap()
            .into_shared();

        fetch::<PowerDistribution>(&transport, PDU_URI).unwrap();
        get.assert();
    }
}

mod failures {
    use super::*;

    #[test]
    fn http_error_on_fetch_carries_the_status() {
        let mut server = mockito::Server::new();
        server.mock("GET", PDU_URI).with_status(503).create();

        let transport = HttpTransport::new(&server.url()).unwrap().into_shared();
        let result = fetch::<PowerDistribution>(&transport, PDU_URI);

        assert!(matches!(
            result,
            Err(FetchError::Transport(TransportError::Http { status: 503, .. }))
        ));
    }

    #[test]
    fn rejected_patch_surfaces_the_transport_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", PDU_URI)
            .with_body(pdu_body().to_string())
            .create();
        server.mock("PATCH", PDU_URI).with_status(400).create();

        let transport = HttpTransport::new(&server.url()).unwrap().into_shared();
        let mut pdu = fetch::<PowerDistribution>(&transport, PDU_URI).unwrap();

        pdu.asset_tag = Some("nope".to_string());
        let result = pdu.update();

        assert!(matches!(
            result,
            Err(UpdateError::Failed {
                source: TransportError::Http { status: 400, .. },
                ..
            })
        ));
    }

    #[test]
    fn undecodable_body_is_a_decode_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", PDU_URI)
            .with_body(r#"{"Slots": "not-an-object-shape"#)
            .create();

        let transport = HttpTransport::new(&server.url()).unwrap().into_shared();
        let result = fetch::<PowerDistribution>(&transport, PDU_URI);

        assert!(matches!(result, Err(FetchError::Decode { uri, .. }) if uri == PDU_URI));
    }
}

#![allow(clippy::unwrap_used)]

use fabric_api::{
    BaseEntity, Interface, Link, Links, PatchField, RouterDetail, RouterListener, RouterPatch,
    Tags, VersionInfo,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn detail(version_info: Option<VersionInfo>) -> RouterDetail {
    let mut links = Links::new();
    links.insert("self".into(), Link::new("./routers/r-1"));

    RouterDetail {
        base: BaseEntity {
            id: "r-1".into(),
            created_at: None,
            updated_at: None,
            links,
            tags: Tags::new(),
        },
        fingerprint: None,
        name: "edge-1".into(),
        connected: version_info.is_some(),
        version_info,
        cost: 12,
        no_traversal: false,
        disabled: true,
        listener_addresses: vec![RouterListener {
            address: "tls:10.0.0.1:6262".into(),
            protocol: "tls".into(),
        }],
        interfaces: vec![Interface {
            hardware_address: "00:11:22:33:44:55".into(),
            index: 2,
            is_broadcast: true,
            is_loopback: false,
            is_multicast: true,
            is_running: true,
            is_up: true,
            mtu: 1500,
            name: "eth0".into(),
            addresses: vec!["10.0.0.1/24".into()],
        }],
    }
}

#[test]
fn router_detail_encodes_flattened_base_and_camel_case() {
    let encoded = serde_json::to_value(detail(None)).unwrap();

    assert_eq!(
        encoded,
        json!({
            "id": "r-1",
            "_links": { "self": { "href": "./routers/r-1" } },
            "tags": {},
            "name": "edge-1",
            "connected": false,
            "cost": 12,
            "noTraversal": false,
            "disabled": true,
            "listenerAddresses": [
                { "address": "tls:10.0.0.1:6262", "protocol": "tls" }
            ],
            "interfaces": [{
                "hardwareAddress": "00:11:22:33:44:55",
                "index": 2,
                "isBroadcast": true,
                "isLoopback": false,
                "isMulticast": true,
                "isRunning": true,
                "isUp": true,
                "mtu": 1500,
                "name": "eth0",
                "addresses": ["10.0.0.1/24"]
            }]
        })
    );
}

#[test]
fn absent_version_info_is_omitted_not_zeroed() {
    let encoded = serde_json::to_value(detail(None)).unwrap();
    assert!(encoded.get("versionInfo").is_none());
    assert!(encoded.get("fingerprint").is_none());
}

#[test]
fn present_version_info_is_encoded() {
    let encoded = serde_json::to_value(detail(Some(VersionInfo {
        arch: "amd64".into(),
        build_date: "2024-01-02".into(),
        os: "linux".into(),
        revision: "abc123".into(),
        version: "v1.2.3".into(),
    })))
    .unwrap();

    assert_eq!(
        encoded["versionInfo"],
        json!({
            "arch": "amd64",
            "buildDate": "2024-01-02",
            "os": "linux",
            "revision": "abc123",
            "version": "v1.2.3"
        })
    );
}

#[test]
fn router_detail_decodes_its_own_encoding() {
    let original = detail(None);
    let text = serde_json::to_string(&original).unwrap();
    let decoded: RouterDetail = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn patch_distinguishes_sent_from_missing() {
    let patch = RouterPatch::from_json(br#"{"name":"","disabled":false}"#).unwrap();

    assert_eq!(patch.name, PatchField::Present(String::new()));
    assert_eq!(patch.disabled, PatchField::Present(false));
    assert!(patch.fingerprint.is_absent());
    assert!(patch.cost.is_absent());
    assert!(patch.no_traversal.is_absent());
    assert!(patch.tags.is_absent());
}

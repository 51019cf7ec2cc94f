//! End-to-end tests for the configuration pipeline: assemble a document
//! through options, wrap it in a container, validate, encode, decode, and
//! validate again.

use nodecfg_config::{
    Container, EncodeFormat, MachineConfig, Provider, REDACTED_PLACEHOLDER, Role, Setting,
    with_interface_address, with_interface_dhcp, with_interface_mtu, with_interface_vip, with_mesh,
    with_nameservers,
};
use secrecy::{ExposeSecret, SecretString};

fn assembled_config() -> MachineConfig {
    let mut config = MachineConfig::new(Role::ControlPlane)
        .with_token(SecretString::new("integration-token".to_string().into()));
    config
        .apply_network_options(&[
            with_nameservers(["1.1.1.1", "8.8.8.8"]),
            with_interface_address("eth0", "10.0.0.2/24"),
            with_interface_mtu("eth0", 1500),
            with_interface_dhcp("eth1", true),
            with_interface_vip("eth0", "10.0.0.100"),
            with_mesh(),
        ])
        .expect("options should apply cleanly");
    config
}

#[test]
fn test_full_pipeline_json() {
    let container = Container::new(assembled_config());
    assert!(container.validate().is_ok());

    let bytes = container.encode(EncodeFormat::Json).expect("encode");
    let decoded = Container::decode(&bytes, EncodeFormat::Json).expect("decode");

    assert_eq!(decoded.raw(), container.raw());
    assert!(decoded.validate().is_ok());
}

#[test]
fn test_full_pipeline_yaml() {
    let container = Container::new(assembled_config());

    let bytes = container.encode(EncodeFormat::Yaml).expect("encode");
    let decoded = Container::decode(&bytes, EncodeFormat::Yaml).expect("decode");

    assert_eq!(decoded.raw(), container.raw());
}

#[test]
fn test_interface_order_survives_a_round_trip() {
    let container = Container::new(assembled_config());

    let bytes = container.encode(EncodeFormat::Json).expect("encode");
    let decoded = Container::decode(&bytes, EncodeFormat::Json).expect("decode");

    let original: Vec<_> = container.raw().network.interfaces.keys().collect();
    let restored: Vec<_> = decoded.raw().network.interfaces.keys().collect();
    assert_eq!(original, vec!["eth0", "eth1"]);
    assert_eq!(restored, original);
}

#[test]
fn test_encoding_is_stable_across_calls() {
    let container = Container::new(assembled_config());

    let runs: Vec<_> = (0..3)
        .map(|_| container.encode(EncodeFormat::Json).expect("encode"))
        .collect();

    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}

#[test]
fn test_redacted_copy_encodes_without_secrets() {
    let container = Container::new(assembled_config());

    let redacted = container.redact_secrets(REDACTED_PLACEHOLDER);
    let bytes = redacted.encode(EncodeFormat::Json).expect("encode");
    let text = String::from_utf8(bytes).expect("utf-8");

    assert!(!text.contains("integration-token"));
    assert!(text.contains(REDACTED_PLACEHOLDER));
    // The original container still carries the real token.
    assert_eq!(container.raw().token.expose_secret(), "integration-token");
}

#[test]
fn test_worker_vip_option_is_dropped_but_explicit_vip_is_rejected() {
    let mut config = MachineConfig::new(Role::Worker)
        .with_token(SecretString::new("worker-token".to_string().into()));

    // Through the option path the VIP silently does not apply.
    config
        .apply_network_options(&[with_interface_vip("eth0", "10.0.0.100")])
        .expect("option sequence");
    assert!(Container::new(config).validate().is_ok());

    // A hand-built worker document with a VIP fails validation instead.
    let mut config = MachineConfig::new(Role::Worker)
        .with_token(SecretString::new("worker-token".to_string().into()));
    config.network.interfaces.entry_or_default("eth0").vip =
        Some(nodecfg_config::VipConfig {
            shared_ip: "10.0.0.100".to_string(),
        });

    let errors = Container::new(config).validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "network.interfaces.eth0.vip");
}

#[test]
fn test_unset_flags_do_not_appear_in_encoded_output() {
    let mut config = MachineConfig::new(Role::Worker)
        .with_token(SecretString::new("worker-token".to_string().into()));
    config
        .apply_network_options(&[with_interface_mtu("eth0", 1500)])
        .expect("option sequence");

    let bytes = Container::new(config.clone())
        .encode(EncodeFormat::Json)
        .expect("encode");
    let text = String::from_utf8(bytes).expect("utf-8");

    // dhcp and ignore were never set on eth0, so the keys are absent.
    assert!(!text.contains("\"dhcp\""));
    assert!(!text.contains("\"ignore\""));
    assert_eq!(
        config.network.interfaces.get("eth0").map(|i| i.dhcp),
        Some(Setting::Unset)
    );
}

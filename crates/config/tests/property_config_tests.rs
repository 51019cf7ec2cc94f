//! Property-based tests for the configuration model.
//!
//! These tests verify structural invariants across randomly generated
//! inputs rather than hand-picked cases.
//!
//! Test coverage:
//! - OrderedMap: get-or-create never duplicates keys and keeps first-insert
//!   order
//! - Setting: an explicit value is never confused with an unset flag
//! - Options: reapplying a set-semantics option sequence is idempotent
//! - Encoding: the same document always encodes to the same bytes and
//!   round-trips losslessly

use proptest::prelude::*;
use secrecy::SecretString;

use nodecfg_config::{
    Container, EncodeFormat, MachineConfig, NetworkOption, OrderedMap, Provider, Role, Setting,
    apply_network_options, with_interface_dhcp, with_interface_mtu, with_nameservers,
};

/// Strategy for generating interface names, with deliberate repetition so
/// sequences hit the same key more than once.
fn iface_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("eth0".to_string()),
        Just("eth1".to_string()),
        Just("eth2".to_string()),
        Just("wg0".to_string()),
        "[a-z]{2,6}[0-9]".prop_map(String::from),
    ]
}

/// Strategy for generating nameserver IPs as strings.
fn nameserver_strategy() -> impl Strategy<Value = String> {
    (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=255)
        .prop_map(|(a, b, c, d)| format!("{}.{}.{}.{}", a, b, c, d))
}

/// Strategy for one set-semantics option.
fn set_option_strategy() -> impl Strategy<Value = NetworkOption> {
    prop_oneof![
        (iface_name_strategy(), any::<bool>())
            .prop_map(|(iface, enable)| with_interface_dhcp(iface, enable)),
        (iface_name_strategy(), 576u32..=65535)
            .prop_map(|(iface, mtu)| with_interface_mtu(iface, mtu)),
    ]
}

fn document_strategy() -> impl Strategy<Value = MachineConfig> {
    (
        prop_oneof![Just(Role::ControlPlane), Just(Role::Worker)],
        "[a-zA-Z0-9\\-]{8,32}",
        prop::collection::vec(nameserver_strategy(), 0..4),
        prop::collection::vec(set_option_strategy(), 0..8),
    )
        .prop_map(|(role, token, nameservers, options)| {
            let mut config =
                MachineConfig::new(role).with_token(SecretString::new(token.into()));
            config
                .apply_network_options(&[with_nameservers(nameservers)])
                .expect("nameservers always apply");
            config
                .apply_network_options(&options)
                .expect("set-semantics options always apply");
            config
        })
}

proptest! {
    /// Get-or-create on a key sequence yields exactly one entry per distinct
    /// key, ordered by first insertion.
    #[test]
    fn prop_ordered_map_get_or_create_never_duplicates(
        keys in prop::collection::vec(iface_name_strategy(), 1..20)
    ) {
        let mut map: OrderedMap<u32> = OrderedMap::new();
        let mut expected_order: Vec<String> = Vec::new();

        for key in &keys {
            *map.entry_or_default(key) += 1;
            if !expected_order.contains(key) {
                expected_order.push(key.clone());
            }
        }

        prop_assert_eq!(map.len(), expected_order.len());
        let actual_order: Vec<_> = map.keys().map(String::from).collect();
        prop_assert_eq!(actual_order, expected_order);

        // Every access after the first incremented the same entry.
        let total: u32 = map.iter().map(|(_, count)| count).sum();
        prop_assert_eq!(total as usize, keys.len());
    }

    /// A set flag never compares equal to an unset one, regardless of value.
    #[test]
    fn prop_setting_set_is_distinct_from_unset(value in any::<bool>()) {
        let set = Setting::Set(value);
        prop_assert_ne!(set, Setting::Unset);
        prop_assert!(set.is_set());
        prop_assert_eq!(set.get(), Some(&value));
        prop_assert_eq!(Setting::<bool>::Unset.get(), None);
    }

    /// Applying a set-semantics option sequence twice yields the same
    /// document as applying it once.
    #[test]
    fn prop_set_options_are_idempotent(
        options in prop::collection::vec(set_option_strategy(), 0..10)
    ) {
        let mut once = nodecfg_config::NetworkConfig::default();
        apply_network_options(Role::Worker, &mut once, &options)
            .expect("set-semantics options always apply");

        let mut twice = once.clone();
        apply_network_options(Role::Worker, &mut twice, &options)
            .expect("set-semantics options always apply");

        prop_assert_eq!(once, twice);
    }

    /// Encoding is a pure function of the document.
    #[test]
    fn prop_encoding_is_deterministic(config in document_strategy()) {
        let container = Container::new(config);

        let first = container.encode(EncodeFormat::Json).expect("encode");
        let second = container.encode(EncodeFormat::Json).expect("encode");
        prop_assert_eq!(first, second);

        let first = container.encode(EncodeFormat::Yaml).expect("encode");
        let second = container.encode(EncodeFormat::Yaml).expect("encode");
        prop_assert_eq!(first, second);
    }

    /// Encode then decode restores an equal document in both formats.
    #[test]
    fn prop_documents_round_trip(config in document_strategy()) {
        let container = Container::new(config);

        for format in [EncodeFormat::Json, EncodeFormat::Yaml] {
            let bytes = container.encode(format).expect("encode");
            let decoded = Container::decode(&bytes, format).expect("decode");
            prop_assert_eq!(decoded.raw(), container.raw());
        }
    }
}

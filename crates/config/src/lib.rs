//! Declarative machine configuration model for nodecfg.
//!
//! This crate provides the configuration document (`MachineConfig`), the
//! ordered mutation options used to assemble it, a validator that collects
//! every violation at once, and the `Provider` contract consumers rely on
//! for encoding, cloning, and secret redaction.

pub mod constants;
pub mod options;
pub mod provider;
pub mod types;
pub mod validation;

pub use options::{
    ApplyError, NetworkOption, OptionError, apply_network_options, with_interface_address,
    with_interface_dhcp, with_interface_dhcp_v4, with_interface_dhcp_v6, with_interface_ignored,
    with_interface_mtu, with_interface_vip, with_interface_wireguard, with_mesh, with_nameservers,
    with_network_config,
};
pub use provider::{
    Container, DecodeError, EncodeError, EncodeFormat, Provider, REDACTED_PLACEHOLDER,
    ReadonlyViolation,
};
pub use types::{
    CertificateAuthority, DhcpOptions, Interface, MachineConfig, MeshConfig, NetworkConfig,
    OrderedMap, Role, Setting, VipConfig, WireguardConfig, WireguardPeer,
};
pub use validation::{ValidationError, validate};

//! Ordered mutation options for configuration documents.
//!
//! Responsibilities:
//! - Define the `NetworkOption` unit of mutation and the engine applying an
//!   ordered option sequence.
//! - Provide the concrete option constructors.
//!
//! Does NOT handle:
//! - Validation of the assembled document (see `validation`).
//! - Encoding or access control (see `provider`).

pub mod engine;
pub mod network;

pub use engine::{ApplyError, NetworkOption, OptionError, apply_network_options};
pub use network::{
    with_interface_address, with_interface_dhcp, with_interface_dhcp_v4, with_interface_dhcp_v6,
    with_interface_ignored, with_interface_mtu, with_interface_vip, with_interface_wireguard,
    with_mesh, with_nameservers, with_network_config,
};

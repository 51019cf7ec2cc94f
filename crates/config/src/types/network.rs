//! Network configuration document types.
//!
//! Responsibilities:
//! - Define the network sub-structure of a machine configuration document:
//!   nameservers, interfaces, per-interface DHCP/static addressing,
//!   wireguard tunnels, virtual IPs, and the overlay mesh toggle.
//! - Keep interface declaration order (the first interface is primary).
//! - Keep wireguard private keys behind `SecretString`.
//!
//! Does NOT handle:
//! - Mutation (see the `options` module).
//! - Validation (see the `validation` module).
//!
//! Invariants:
//! - Tri-state flags use `Setting<bool>`; an absent flag is not the same as
//!   an explicit `false`.
//! - `mtu == 0` means "use the driver default"; bounds only apply to
//!   non-zero values.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::types::ordered::OrderedMap;
use crate::types::secret_string;
use crate::types::setting::Setting;

/// Network configuration of a single machine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Static hostname override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Global nameserver list. Options append to this list; duplicates are
    /// the documented behavior of appending the same server twice.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nameservers: Vec<String>,
    /// Network interfaces keyed by name, in declaration order.
    #[serde(skip_serializing_if = "OrderedMap::is_empty")]
    pub interfaces: OrderedMap<Interface>,
    /// Overlay mesh configuration; absent until first referenced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<MeshConfig>,
}

/// Configuration of one network interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interface {
    /// Skip configuration of this interface entirely.
    #[serde(skip_serializing_if = "Setting::is_unset")]
    pub ignore: Setting<bool>,
    /// DHCP toggle. `Set(false)` disables DHCP explicitly even if a broader
    /// default would enable it.
    #[serde(skip_serializing_if = "Setting::is_unset")]
    pub dhcp: Setting<bool>,
    /// Per-family DHCP options; absent until first referenced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_options: Option<DhcpOptions>,
    /// Static addresses in CIDR notation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    /// Interface MTU; 0 means "use the driver default".
    #[serde(skip_serializing_if = "mtu_is_default")]
    pub mtu: u32,
    /// Wireguard tunnel configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wireguard: Option<WireguardConfig>,
    /// Shared virtual IP; only meaningful on control plane nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip: Option<VipConfig>,
}

fn mtu_is_default(mtu: &u32) -> bool {
    *mtu == 0
}

/// Per-address-family DHCP toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DhcpOptions {
    /// DHCPv4 toggle.
    #[serde(skip_serializing_if = "Setting::is_unset")]
    pub ipv4: Setting<bool>,
    /// DHCPv6 toggle.
    #[serde(skip_serializing_if = "Setting::is_unset")]
    pub ipv6: Setting<bool>,
}

/// Wireguard tunnel configuration for an interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireguardConfig {
    /// Private key of this peer (secret).
    #[serde(with = "secret_string")]
    pub private_key: SecretString,
    /// Remote peers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub peers: Vec<WireguardPeer>,
}

impl PartialEq for WireguardConfig {
    fn eq(&self, other: &Self) -> bool {
        self.private_key.expose_secret() == other.private_key.expose_secret()
            && self.peers == other.peers
    }
}

/// A single wireguard peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireguardPeer {
    /// Public key of the remote peer.
    pub public_key: String,
    /// Remote endpoint as `host:port`.
    pub endpoint: String,
    /// Networks routed through this peer, in CIDR notation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_ips: Vec<String>,
}

/// Shared virtual IP configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VipConfig {
    /// The IP shared between control plane nodes.
    pub shared_ip: String,
}

/// Overlay mesh configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Mesh membership toggle.
    #[serde(skip_serializing_if = "Setting::is_unset")]
    pub enabled: Setting<bool>,
}

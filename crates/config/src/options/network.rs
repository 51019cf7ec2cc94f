//! Concrete network option constructors.
//!
//! Responsibilities:
//! - Provide one constructor per supported network mutation, each producing
//!   a named `NetworkOption`.
//!
//! Invariants:
//! - Set-semantics options are idempotent; append-semantics options
//!   (`with_nameservers`, `with_interface_address`) document duplication.
//! - Input validation happens before any document mutation, keeping each
//!   option atomic.
//! - Role-gated options are successful no-ops for roles they do not apply
//!   to; gating is policy, not an error.

use crate::options::engine::{NetworkOption, OptionError};
use crate::types::machine::Role;
use crate::types::network::{DhcpOptions, NetworkConfig, VipConfig, WireguardConfig};
use crate::validation::parse_cidr;

/// Sets the whole network configuration, overwriting any previous options.
pub fn with_network_config(config: NetworkConfig) -> NetworkOption {
    NetworkOption::new("network_config", move |_, cfg| {
        *cfg = config.clone();
        Ok(())
    })
}

/// Appends to the global nameserver list.
///
/// Append semantics: passing the same server twice stores it twice.
pub fn with_nameservers<I, S>(nameservers: I) -> NetworkOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let nameservers: Vec<String> = nameservers.into_iter().map(Into::into).collect();
    NetworkOption::new("nameservers", move |_, cfg| {
        cfg.nameservers.extend(nameservers.iter().cloned());
        Ok(())
    })
}

/// Marks an interface as ignored.
pub fn with_interface_ignored(iface: impl Into<String>) -> NetworkOption {
    let iface = iface.into();
    NetworkOption::new("interface_ignore", move |_, cfg| {
        interface_entry(cfg, &iface)?.ignore.set(true);
        Ok(())
    })
}

/// Sets the DHCP toggle for an interface to the given state.
///
/// The passed flag is stored as-is: disabling DHCP explicitly is distinct
/// from leaving the toggle unset.
pub fn with_interface_dhcp(iface: impl Into<String>, enable: bool) -> NetworkOption {
    let iface = iface.into();
    NetworkOption::new("interface_dhcp", move |_, cfg| {
        interface_entry(cfg, &iface)?.dhcp.set(enable);
        Ok(())
    })
}

/// Sets the DHCPv4 toggle for an interface.
pub fn with_interface_dhcp_v4(iface: impl Into<String>, enable: bool) -> NetworkOption {
    let iface = iface.into();
    NetworkOption::new("interface_dhcp_v4", move |_, cfg| {
        interface_entry(cfg, &iface)?
            .dhcp_options
            .get_or_insert_with(DhcpOptions::default)
            .ipv4
            .set(enable);
        Ok(())
    })
}

/// Sets the DHCPv6 toggle for an interface.
pub fn with_interface_dhcp_v6(iface: impl Into<String>, enable: bool) -> NetworkOption {
    let iface = iface.into();
    NetworkOption::new("interface_dhcp_v6", move |_, cfg| {
        interface_entry(cfg, &iface)?
            .dhcp_options
            .get_or_insert_with(DhcpOptions::default)
            .ipv6
            .set(enable);
        Ok(())
    })
}

/// Appends a static address (CIDR notation) to an interface.
///
/// Append semantics: the same address passed twice is stored twice.
pub fn with_interface_address(
    iface: impl Into<String>,
    cidr: impl Into<String>,
) -> NetworkOption {
    let iface = iface.into();
    let cidr = cidr.into();
    NetworkOption::new("interface_address", move |_, cfg| {
        if let Err(message) = parse_cidr(&cidr) {
            return Err(OptionError::InvalidCidr {
                value: cidr.clone(),
                message,
            });
        }
        interface_entry(cfg, &iface)?.addresses.push(cidr.clone());
        Ok(())
    })
}

/// Sets the MTU for an interface.
pub fn with_interface_mtu(iface: impl Into<String>, mtu: u32) -> NetworkOption {
    let iface = iface.into();
    NetworkOption::new("interface_mtu", move |_, cfg| {
        interface_entry(cfg, &iface)?.mtu = mtu;
        Ok(())
    })
}

/// Attaches a wireguard tunnel configuration to an interface.
pub fn with_interface_wireguard(
    iface: impl Into<String>,
    wireguard: WireguardConfig,
) -> NetworkOption {
    let iface = iface.into();
    NetworkOption::new("interface_wireguard", move |_, cfg| {
        interface_entry(cfg, &iface)?.wireguard = Some(wireguard.clone());
        Ok(())
    })
}

/// Configures a shared virtual IP on an interface.
///
/// A no-op on worker nodes: virtual IPs are a control plane concern, and
/// applying the option to a worker document is policy-permitted rather than
/// an error.
pub fn with_interface_vip(
    iface: impl Into<String>,
    shared_ip: impl Into<String>,
) -> NetworkOption {
    let iface = iface.into();
    let shared_ip = shared_ip.into();
    NetworkOption::new("interface_vip", move |role, cfg| {
        if !role.is_control_plane() {
            return Ok(());
        }
        if shared_ip.parse::<std::net::IpAddr>().is_err() {
            return Err(OptionError::InvalidSharedIp {
                value: shared_ip.clone(),
            });
        }
        interface_entry(cfg, &iface)?.vip = Some(VipConfig {
            shared_ip: shared_ip.clone(),
        });
        Ok(())
    })
}

/// Enables overlay mesh membership, creating the mesh config on first use.
pub fn with_mesh() -> NetworkOption {
    NetworkOption::new("mesh", |_, cfg| {
        cfg.mesh.get_or_insert_with(Default::default).enabled.set(true);
        Ok(())
    })
}

/// Get-or-create access to an interface, rejecting empty names before the
/// entry is created.
fn interface_entry<'a>(
    cfg: &'a mut NetworkConfig,
    iface: &str,
) -> Result<&'a mut crate::types::network::Interface, OptionError> {
    if iface.is_empty() {
        return Err(OptionError::EmptyInterfaceName);
    }
    Ok(cfg.interfaces.entry_or_default(iface))
}

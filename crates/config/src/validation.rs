//! Document validation.
//!
//! Responsibilities:
//! - Check an assembled `MachineConfig` for every structural and semantic
//!   problem in one pass.
//!
//! Does NOT handle:
//! - Per-option input validation (options validate before mutating).
//!
//! Invariants:
//! - Validation is pure: the document is never mutated.
//! - Every violation is collected; the caller sees the full list, not just
//!   the first problem.
//! - Violations are reported in document order so output is deterministic.

use std::fmt;
use std::net::IpAddr;

use crate::constants::{CONFIG_VERSION, MAX_MTU, MIN_MTU};
use crate::types::document::MachineConfig;
use crate::types::setting::Setting;
use secrecy::ExposeSecret;

/// A single validation violation, tied to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `network.interfaces.eth0.mtu`.
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate `config`, returning every violation found.
///
/// An empty vector means the document is valid.
pub fn validate(config: &MachineConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.version != CONFIG_VERSION {
        errors.push(ValidationError::new(
            "version",
            format!(
                "unsupported version '{}', expected '{}'",
                config.version, CONFIG_VERSION
            ),
        ));
    }

    if config.token.expose_secret().is_empty() {
        errors.push(ValidationError::new("token", "join token must not be empty"));
    }

    if let Some(ca) = &config.certificate_authority {
        if ca.crt.is_empty() {
            errors.push(ValidationError::new(
                "certificate_authority.crt",
                "certificate must not be empty",
            ));
        }
        if ca.key.expose_secret().is_empty() {
            errors.push(ValidationError::new(
                "certificate_authority.key",
                "private key must not be empty",
            ));
        }
    }

    validate_network(config, &mut errors);

    errors
}

fn validate_network(config: &MachineConfig, errors: &mut Vec<ValidationError>) {
    let network = &config.network;

    if let Some(hostname) = &network.hostname
        && hostname.is_empty()
    {
        errors.push(ValidationError::new(
            "network.hostname",
            "hostname must not be empty when set",
        ));
    }

    for (index, nameserver) in network.nameservers.iter().enumerate() {
        if nameserver.parse::<IpAddr>().is_err() {
            errors.push(ValidationError::new(
                format!("network.nameservers[{index}]"),
                format!("'{nameserver}' is not a valid IP address"),
            ));
        }
    }

    for (name, iface) in network.interfaces.iter() {
        let prefix = format!("network.interfaces.{name}");

        if name.is_empty() {
            errors.push(ValidationError::new(
                "network.interfaces",
                "interface name must not be empty",
            ));
        }

        if iface.mtu != 0 && !(MIN_MTU..=MAX_MTU).contains(&iface.mtu) {
            errors.push(ValidationError::new(
                format!("{prefix}.mtu"),
                format!(
                    "mtu {} out of range [{MIN_MTU}, {MAX_MTU}]",
                    iface.mtu
                ),
            ));
        }

        // DHCP and static addressing are mutually exclusive on one
        // interface. An explicit Set(false) does not conflict.
        if iface.dhcp == Setting::Set(true) && !iface.addresses.is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}.dhcp"),
                "dhcp and static addresses are mutually exclusive",
            ));
        }

        for (index, address) in iface.addresses.iter().enumerate() {
            if let Err(message) = parse_cidr(address) {
                errors.push(ValidationError::new(
                    format!("{prefix}.addresses[{index}]"),
                    format!("'{address}': {message}"),
                ));
            }
        }

        if let Some(wg) = &iface.wireguard {
            if wg.private_key.expose_secret().is_empty() {
                errors.push(ValidationError::new(
                    format!("{prefix}.wireguard.private_key"),
                    "private key must not be empty",
                ));
            }
            for (index, peer) in wg.peers.iter().enumerate() {
                if peer.public_key.is_empty() {
                    errors.push(ValidationError::new(
                        format!("{prefix}.wireguard.peers[{index}].public_key"),
                        "public key must not be empty",
                    ));
                }
                for (ip_index, allowed) in peer.allowed_ips.iter().enumerate() {
                    if let Err(message) = parse_cidr(allowed) {
                        errors.push(ValidationError::new(
                            format!(
                                "{prefix}.wireguard.peers[{index}].allowed_ips[{ip_index}]"
                            ),
                            format!("'{allowed}': {message}"),
                        ));
                    }
                }
            }
        }

        if let Some(vip) = &iface.vip {
            if !config.role.is_control_plane() {
                errors.push(ValidationError::new(
                    format!("{prefix}.vip"),
                    "virtual IP is only supported on control plane nodes",
                ));
            }
            if vip.shared_ip.parse::<IpAddr>().is_err() {
                errors.push(ValidationError::new(
                    format!("{prefix}.vip.shared_ip"),
                    format!("'{}' is not a valid IP address", vip.shared_ip),
                ));
            }
        }
    }
}

/// Parse `value` as `address/prefix` CIDR notation.
///
/// Returns a description of the problem on failure.
pub(crate) fn parse_cidr(value: &str) -> Result<(), String> {
    let Some((address, prefix)) = value.split_once('/') else {
        return Err("missing '/' prefix separator".to_string());
    };

    let address: IpAddr = address
        .parse()
        .map_err(|_| "invalid IP address".to_string())?;

    let prefix: u8 = prefix
        .parse()
        .map_err(|_| "invalid prefix length".to_string())?;

    let max_prefix = match address {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    if prefix > max_prefix {
        return Err(format!("prefix length {prefix} exceeds {max_prefix}"));
    }

    Ok(())
}

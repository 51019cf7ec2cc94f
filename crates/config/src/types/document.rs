//! The machine configuration document.
//!
//! Responsibilities:
//! - Define `MachineConfig`, the aggregate every option mutates and every
//!   provider wraps.
//! - Replace secret fields in place during redaction.
//!
//! Does NOT handle:
//! - Readonly enforcement or deep-copy entry points (see `provider`).
//!
//! Invariants:
//! - Equality compares secret fields by exposed value, so two documents with
//!   the same content always compare equal.
//! - `redact` touches every secret-bearing field and nothing else.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_VERSION;
use crate::options::{ApplyError, NetworkOption, apply_network_options};
use crate::types::machine::Role;
use crate::types::network::NetworkConfig;
use crate::types::secret_string;

/// A complete machine configuration document.
///
/// Created empty via [`MachineConfig::new`], mutated exclusively through
/// options, and considered complete only once validation passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Document schema version.
    pub version: String,
    /// Role of the machine this document configures.
    pub role: Role,
    /// Join token used to enroll the machine (secret).
    #[serde(with = "secret_string")]
    pub token: SecretString,
    /// Cluster certificate authority, if issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_authority: Option<CertificateAuthority>,
    /// Network configuration.
    #[serde(default)]
    pub network: NetworkConfig,
}

impl MachineConfig {
    /// Create an empty document for `role` at the current schema version.
    pub fn new(role: Role) -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            role,
            token: SecretString::new(String::new().into()),
            certificate_authority: None,
            network: NetworkConfig::default(),
        }
    }

    /// Set the join token.
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = token;
        self
    }

    /// Set the cluster certificate authority.
    pub fn with_certificate_authority(mut self, ca: CertificateAuthority) -> Self {
        self.certificate_authority = Some(ca);
        self
    }

    /// Apply network options in caller order against this document's role.
    ///
    /// The document is left fully mutated but not yet validated; the first
    /// failing option aborts the sequence.
    pub fn apply_network_options(&mut self, options: &[NetworkOption]) -> Result<(), ApplyError> {
        apply_network_options(self.role, &mut self.network, options)
    }

    /// Replace every secret field with `replacement`, in place.
    ///
    /// Whole-field replacement only; non-secret fields are untouched.
    pub fn redact(&mut self, replacement: &str) {
        self.token = SecretString::new(replacement.to_string().into());

        if let Some(ca) = &mut self.certificate_authority {
            ca.key = SecretString::new(replacement.to_string().into());
        }

        for (_, iface) in self.network.interfaces.iter_mut() {
            if let Some(wg) = &mut iface.wireguard {
                wg.private_key = SecretString::new(replacement.to_string().into());
            }
        }
    }
}

impl PartialEq for MachineConfig {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.role == other.role
            && self.token.expose_secret() == other.token.expose_secret()
            && self.certificate_authority == other.certificate_authority
            && self.network == other.network
    }
}

/// Cluster certificate authority key pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateAuthority {
    /// PEM-encoded certificate.
    pub crt: String,
    /// PEM-encoded private key (secret).
    #[serde(with = "secret_string")]
    pub key: SecretString,
}

impl PartialEq for CertificateAuthority {
    fn eq(&self, other: &Self) -> bool {
        self.crt == other.crt && self.key.expose_secret() == other.key.expose_secret()
    }
}

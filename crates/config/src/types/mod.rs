//! Configuration document types.
//!
//! Responsibilities:
//! - Define the machine configuration document and its sub-structures.
//! - Provide the tri-state `Setting` wrapper and the insertion-ordered
//!   `OrderedMap` keyed collection the document is built from.
//!
//! Does NOT handle:
//! - Mutation of documents (see the `options` module).
//! - Validation (see the `validation` module).
//! - Encoding or redaction entry points (see the `provider` module).

pub mod document;
pub mod machine;
pub mod network;
pub mod ordered;
pub mod setting;

pub use document::{CertificateAuthority, MachineConfig};
pub use machine::Role;
pub use network::{
    DhcpOptions, Interface, MeshConfig, NetworkConfig, VipConfig, WireguardConfig, WireguardPeer,
};
pub use ordered::OrderedMap;
pub use setting::Setting;

/// Module for serializing SecretString as strings.
///
/// Serialization includes secrets for document persistence; secrecy is for
/// runtime safety (Debug output, accidental logging).
pub(crate) mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Serialize};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

//! Concrete configuration container.
//!
//! Responsibilities:
//! - Wrap a `MachineConfig` behind the `Provider` surface.
//! - Enforce the readonly flag on every mutable access path.
//!
//! Invariants:
//! - The readonly flag survives cloning and redaction; a deep copy of a
//!   readonly container is itself readonly.
//! - Redaction produces a new container and never mutates the original.

use crate::provider::error::{DecodeError, ReadonlyViolation};
use crate::provider::{EncodeError, EncodeFormat, Provider};
use crate::types::document::MachineConfig;
use crate::validation::{ValidationError, validate};

/// The standard `Provider` implementation wrapping one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    config: MachineConfig,
    readonly: bool,
}

impl Container {
    /// Wrap `config` in a writable container.
    pub fn new(config: MachineConfig) -> Self {
        Self {
            config,
            readonly: false,
        }
    }

    /// Wrap `config` in a readonly container.
    pub fn new_readonly(config: MachineConfig) -> Self {
        Self {
            config,
            readonly: true,
        }
    }

    /// Decode a document from bytes in the given format.
    ///
    /// Decoded containers start out writable.
    pub fn decode(bytes: &[u8], format: EncodeFormat) -> Result<Self, DecodeError> {
        let config = match format {
            EncodeFormat::Json => serde_json::from_slice(bytes).map_err(DecodeError::Json)?,
            EncodeFormat::Yaml => serde_yaml::from_slice(bytes).map_err(DecodeError::Yaml)?,
        };
        Ok(Self::new(config))
    }

    /// Consume the container, returning the wrapped document.
    pub fn into_config(self) -> MachineConfig {
        self.config
    }
}

impl Provider for Container {
    fn encode(&self, format: EncodeFormat) -> Result<Vec<u8>, EncodeError> {
        match format {
            EncodeFormat::Json => Ok(serde_json::to_vec_pretty(&self.config)?),
            EncodeFormat::Yaml => Ok(serde_yaml::to_string(&self.config)?.into_bytes()),
        }
    }

    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors = validate(&self.config);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    fn readonly(&self) -> bool {
        self.readonly
    }

    fn raw(&self) -> &MachineConfig {
        &self.config
    }

    fn raw_mut(&mut self) -> Result<&mut MachineConfig, ReadonlyViolation> {
        if self.readonly {
            return Err(ReadonlyViolation);
        }
        Ok(&mut self.config)
    }

    fn clone_provider(&self) -> Box<dyn Provider> {
        Box::new(self.clone())
    }

    fn redact_secrets(&self, replacement: &str) -> Box<dyn Provider> {
        let mut redacted = self.clone();
        redacted.config.redact(replacement);
        Box::new(redacted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{with_interface_dhcp, with_nameservers};
    use crate::provider::REDACTED_PLACEHOLDER;
    use crate::types::machine::Role;
    use secrecy::{ExposeSecret, SecretString};

    fn sample_config() -> MachineConfig {
        let mut config = MachineConfig::new(Role::ControlPlane)
            .with_token(SecretString::new("join-token".to_string().into()));
        config
            .apply_network_options(&[
                with_nameservers(["1.1.1.1"]),
                with_interface_dhcp("eth0", true),
            ])
            .unwrap();
        config
    }

    #[test]
    fn test_writable_container_allows_mutation() {
        let mut container = Container::new(sample_config());

        let config = container.raw_mut().unwrap();
        config.network.hostname = Some("node-1".to_string());

        assert_eq!(container.raw().network.hostname.as_deref(), Some("node-1"));
    }

    #[test]
    fn test_readonly_container_rejects_mutation() {
        let mut container = Container::new_readonly(sample_config());

        assert_eq!(container.raw_mut().unwrap_err(), ReadonlyViolation);
        // Immutable access still works.
        assert_eq!(container.raw().role, Role::ControlPlane);
    }

    #[test]
    fn test_clone_is_independent_of_the_original() {
        let mut container = Container::new(sample_config());
        let clone = container.clone_provider();

        container.raw_mut().unwrap().network.hostname = Some("mutated".to_string());

        assert!(clone.raw().network.hostname.is_none());
    }

    #[test]
    fn test_clone_keeps_interface_entries_independent() {
        let mut container = Container::new(sample_config());
        let mut clone = container.clone_provider();

        // Mutating the clone's eth0 entry leaves the source's entry alone.
        clone
            .raw_mut()
            .unwrap()
            .network
            .interfaces
            .entry_or_default("eth0")
            .mtu = 9000;
        assert_eq!(
            container.raw().network.interfaces.get("eth0").unwrap().mtu,
            0
        );

        // And the other way round.
        container
            .raw_mut()
            .unwrap()
            .network
            .interfaces
            .get_mut("eth0")
            .unwrap()
            .addresses
            .push("10.0.0.2/24".to_string());
        assert!(
            clone
                .raw()
                .network
                .interfaces
                .get("eth0")
                .unwrap()
                .addresses
                .is_empty()
        );
    }

    #[test]
    fn test_clone_preserves_the_readonly_flag() {
        let container = Container::new_readonly(sample_config());
        let mut clone = container.clone_provider();

        assert!(clone.readonly());
        assert!(clone.raw_mut().is_err());
    }

    #[test]
    fn test_redaction_does_not_mutate_the_original() {
        let container = Container::new(sample_config());

        let redacted = container.redact_secrets(REDACTED_PLACEHOLDER);

        assert_eq!(container.raw().token.expose_secret(), "join-token");
        assert_eq!(redacted.raw().token.expose_secret(), REDACTED_PLACEHOLDER);
    }

    #[test]
    fn test_redaction_uses_the_caller_placeholder_verbatim() {
        let container = Container::new(sample_config());

        let redacted = container.redact_secrets("***");

        assert_eq!(redacted.raw().token.expose_secret(), "***");
    }

    #[test]
    fn test_redaction_preserves_the_readonly_flag() {
        let container = Container::new_readonly(sample_config());
        let mut redacted = container.redact_secrets(REDACTED_PLACEHOLDER);

        assert!(redacted.readonly());
        assert!(redacted.raw_mut().is_err());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let container = Container::new(sample_config());

        let first = container.encode(EncodeFormat::Json).unwrap();
        let second = container.encode(EncodeFormat::Json).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_json_round_trip_preserves_the_document() {
        let container = Container::new(sample_config());

        let bytes = container.encode(EncodeFormat::Json).unwrap();
        let back = Container::decode(&bytes, EncodeFormat::Json).unwrap();

        // Container equality covers the document and the readonly flag.
        assert_eq!(back, container);
    }

    #[test]
    fn test_yaml_round_trip_preserves_the_document() {
        let container = Container::new(sample_config());

        let bytes = container.encode(EncodeFormat::Yaml).unwrap();
        let back = Container::decode(&bytes, EncodeFormat::Yaml).unwrap();

        assert_eq!(back.raw(), container.raw());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(Container::decode(b"{not json", EncodeFormat::Json).is_err());
        assert!(Container::decode(b"{]", EncodeFormat::Yaml).is_err());
    }

    #[test]
    fn test_validate_reports_through_the_provider() {
        let container = Container::new(MachineConfig::new(Role::Worker));

        let errors = Provider::validate(&container).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "token");

        assert!(Container::new(sample_config()).validate().is_ok());
    }
}

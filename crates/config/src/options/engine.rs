//! Option application engine.
//!
//! Responsibilities:
//! - Define `NetworkOption`, a named closure performing one logical change.
//! - Apply an ordered option sequence, short-circuiting on the first failure
//!   with position context.
//!
//! Does NOT handle:
//! - Construction of concrete options (see `options::network`).
//!
//! Invariants:
//! - Options are applied strictly in caller-supplied order; replacement
//!   options overwrite earlier incremental effects by design.
//! - A failing option leaves no partial effect: constructors validate their
//!   inputs before touching the document.

use std::fmt;

use thiserror::Error;

use crate::types::machine::Role;
use crate::types::network::NetworkConfig;

/// Errors raised by a single option.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("invalid CIDR '{value}': {message}")]
    InvalidCidr { value: String, message: String },

    #[error("invalid shared IP '{value}': not a valid IP address")]
    InvalidSharedIp { value: String },

    #[error("interface name must not be empty")]
    EmptyInterfaceName,
}

/// A failing option together with its position in the applied sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("option '{option}' at index {index} failed: {source}")]
pub struct ApplyError {
    /// Zero-based position of the failing option.
    pub index: usize,
    /// Name of the failing option.
    pub option: &'static str,
    /// The underlying failure.
    #[source]
    pub source: OptionError,
}

type ApplyFn = Box<dyn Fn(Role, &mut NetworkConfig) -> Result<(), OptionError> + Send + Sync>;

/// A single, named unit of network document mutation.
///
/// Options perform exactly one logical change and are idempotent when
/// reapplied with identical arguments, except where append semantics are
/// documented (nameservers, addresses).
pub struct NetworkOption {
    name: &'static str,
    apply_fn: ApplyFn,
}

impl NetworkOption {
    pub(crate) fn new(
        name: &'static str,
        apply_fn: impl Fn(Role, &mut NetworkConfig) -> Result<(), OptionError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            apply_fn: Box::new(apply_fn),
        }
    }

    /// Name of this option, used for error context.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this option to `config` under the given role.
    pub fn apply(&self, role: Role, config: &mut NetworkConfig) -> Result<(), OptionError> {
        (self.apply_fn)(role, config)
    }
}

impl fmt::Debug for NetworkOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkOption")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Apply `options` to `config` in order.
///
/// Stops at the first failing option and reports it together with its index;
/// options after the failure are not applied.
pub fn apply_network_options(
    role: Role,
    config: &mut NetworkConfig,
    options: &[NetworkOption],
) -> Result<(), ApplyError> {
    for (index, option) in options.iter().enumerate() {
        option.apply(role, config).map_err(|source| ApplyError {
            index,
            option: option.name(),
            source,
        })?;
    }
    Ok(())
}

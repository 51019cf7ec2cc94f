//! Configuration access surface.
//!
//! Responsibilities:
//! - Define the `Provider` trait that higher layers consume documents
//!   through.
//! - Provide the concrete `Container` implementation.
//!
//! Does NOT handle:
//! - Document mutation semantics (see `options`).
//! - Validation rules (see `validation`).

pub mod container;
pub mod error;

pub use container::Container;
pub use error::{DecodeError, EncodeError, ReadonlyViolation};

use std::fmt;

use crate::types::document::MachineConfig;
use crate::validation::ValidationError;

/// Conventional placeholder for redacted secret fields.
///
/// Redaction takes any caller-supplied string; this is the value used when
/// no specific placeholder is called for.
pub const REDACTED_PLACEHOLDER: &str = "**REDACTED**";

/// Wire formats a document can be encoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeFormat {
    Json,
    Yaml,
}

impl fmt::Display for EncodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeFormat::Json => f.write_str("json"),
            EncodeFormat::Yaml => f.write_str("yaml"),
        }
    }
}

/// Uniform access to a configuration document.
///
/// Implementations wrap exactly one document. Mutable access goes through
/// [`Provider::raw_mut`] so the readonly flag is enforced on every path.
pub trait Provider: fmt::Debug + Send + Sync {
    /// Encode the document in the given format.
    ///
    /// Encoding is deterministic: the same document always yields the same
    /// bytes.
    fn encode(&self, format: EncodeFormat) -> Result<Vec<u8>, EncodeError>;

    /// Validate the document.
    ///
    /// Fails with the full list of violations, never just the first.
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Whether this provider rejects mutation.
    fn readonly(&self) -> bool;

    /// Immutable access to the wrapped document.
    fn raw(&self) -> &MachineConfig;

    /// Mutable access to the wrapped document.
    ///
    /// Fails if the provider is readonly.
    fn raw_mut(&mut self) -> Result<&mut MachineConfig, ReadonlyViolation>;

    /// Deep copy of this provider, readonly flag included.
    fn clone_provider(&self) -> Box<dyn Provider>;

    /// Deep copy with every secret field replaced verbatim by
    /// `replacement` (whole-field, no partial masking). The original is
    /// untouched.
    fn redact_secrets(&self, replacement: &str) -> Box<dyn Provider>;
}

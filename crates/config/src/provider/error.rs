//! Provider error types.
//!
//! Errors are returned, never logged here; callers decide what reaches the
//! operator.

use thiserror::Error;

/// Failure to encode a document.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML encoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Failure to decode a document from bytes.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("JSON decoding failed: {0}")]
    Json(#[source] serde_json::Error),

    #[error("YAML decoding failed: {0}")]
    Yaml(#[source] serde_yaml::Error),
}

/// Mutable access was requested on a readonly container.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("configuration container is readonly")]
pub struct ReadonlyViolation;

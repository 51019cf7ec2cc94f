//! Centralized constants for the nodecfg workspace.
//!
//! This module contains default values and bounds used across modules to
//! avoid magic number duplication.

/// Current configuration document schema version.
pub const CONFIG_VERSION: &str = "v1";

/// Minimum permitted interface MTU.
///
/// 576 is the minimum reassembly buffer size every IPv4 host must accept;
/// anything below it is almost certainly a typo.
pub const MIN_MTU: u32 = 576;

/// Maximum permitted interface MTU (largest IP datagram).
pub const MAX_MTU: u32 = 65535;

//! Machine role discriminator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of the machine a configuration document targets.
///
/// Some options are gated on the role: cluster-level settings such as a
/// shared virtual IP only make sense on control plane nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A node running the cluster control plane.
    ControlPlane,
    /// A plain worker node.
    Worker,
}

impl Role {
    /// Returns true for control plane nodes.
    pub fn is_control_plane(self) -> bool {
        matches!(self, Self::ControlPlane)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ControlPlane => write!(f, "control_plane"),
            Self::Worker => write!(f, "worker"),
        }
    }
}

//! Published image records.

use serde::{Deserialize, Serialize};

/// One published cloud image, as it appears in the output manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Cloud the image was published to, e.g. `aws`.
    pub cloud: String,
    /// Release tag the image was built from.
    #[serde(rename = "version")]
    pub version_tag: String,
    /// Region the image lives in.
    pub region: String,
    /// CPU architecture, e.g. `amd64`.
    pub arch: String,
    /// Image kind within the cloud, e.g. `hvm`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Cloud-assigned image identifier.
    pub id: String,
}

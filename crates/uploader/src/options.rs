//! Upload run configuration.

use std::path::PathBuf;

/// Settings for one upload run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    /// Architectures to publish for.
    pub architectures: Vec<String>,
    /// Directory holding built image artifacts.
    pub artifacts_path: PathBuf,
    /// Release tag being published.
    pub version_tag: String,
    /// Target regions; empty means "every region the cloud offers".
    pub regions: Vec<String>,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            architectures: vec!["amd64".to_string(), "arm64".to_string()],
            artifacts_path: PathBuf::from("_out"),
            version_tag: String::new(),
            regions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_both_architectures() {
        let options = UploadOptions::default();

        assert_eq!(options.architectures, vec!["amd64", "arm64"]);
        assert_eq!(options.artifacts_path, PathBuf::from("_out"));
        assert!(options.regions.is_empty());
    }
}

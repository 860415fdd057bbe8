//! `[resize]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [resize]
//! presets = [24, 48, 512]   # Square sizes offered by `--preset`
//! keep_aspect = true        # Derive the missing dimension from the viewBox
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::vector::resize::ResizeRequest;

/// Resize export defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Square preset sizes in pixels.
    pub presets: Vec<u32>,

    /// Keep the viewBox aspect ratio when only one dimension is given.
    pub keep_aspect: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            presets: ResizeRequest::PRESETS.to_vec(),
            keep_aspect: true,
        }
    }
}

impl ResizeConfig {
    pub const PRESETS: FieldPath = FieldPath::new("resize.presets");

    /// Whether `size` is one of the configured presets.
    pub fn is_preset(&self, size: u32) -> bool {
        self.presets.contains(&size)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.presets.contains(&0) {
            diag.error(Self::PRESETS, "preset sizes must be greater than 0");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_resize_config() {
        let config = test_parse_config("[resize]\npresets = [16, 32]\nkeep_aspect = false");
        assert_eq!(config.resize.presets, vec![16, 32]);
        assert!(config.resize.is_preset(32));
        assert!(!config.resize.is_preset(48));
        assert!(!config.resize.keep_aspect);
    }

    #[test]
    fn test_resize_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.resize.presets, vec![24, 48, 512]);
        assert!(config.resize.keep_aspect);
    }

    #[test]
    fn test_resize_config_validation() {
        let config = test_parse_config("[resize]\npresets = [0, 24]");
        let mut diag = ConfigDiagnostics::new();
        config.resize.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}

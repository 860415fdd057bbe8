//! `[viewport]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [viewport]
//! zoom_factor = 1.1     # Scale multiplier per wheel notch
//! step_factor = 1.2     # Scale multiplier per zoom button press
//! min_scale = 0.1       # Smallest allowed scale
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::viewport::ZoomSettings;

/// Zoom tuning for the preview panes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Scale multiplier per wheel notch.
    pub zoom_factor: f64,

    /// Scale multiplier per zoom button press.
    pub step_factor: f64,

    /// Lower bound for the scale.
    pub min_scale: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        let zoom = ZoomSettings::default();
        Self {
            zoom_factor: zoom.wheel_factor,
            step_factor: zoom.step_factor,
            min_scale: zoom.min_scale,
        }
    }
}

impl ViewportConfig {
    pub const ZOOM_FACTOR: FieldPath = FieldPath::new("viewport.zoom_factor");
    pub const STEP_FACTOR: FieldPath = FieldPath::new("viewport.step_factor");
    pub const MIN_SCALE: FieldPath = FieldPath::new("viewport.min_scale");

    pub fn zoom_settings(&self) -> ZoomSettings {
        ZoomSettings {
            wheel_factor: self.zoom_factor,
            step_factor: self.step_factor,
            min_scale: self.min_scale,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, factor) in [
            (Self::ZOOM_FACTOR, self.zoom_factor),
            (Self::STEP_FACTOR, self.step_factor),
        ] {
            if !(factor.is_finite() && factor > 1.0) {
                diag.error_with_hint(
                    field,
                    format!("zoom factor must be greater than 1, got {factor}"),
                    "zooming out divides by the same factor",
                );
            }
        }

        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            diag.error(
                Self::MIN_SCALE,
                format!("must be greater than 0, got {}", self.min_scale),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_viewport_config() {
        let config = test_parse_config("[viewport]\nzoom_factor = 1.25\nmin_scale = 0.5");
        assert_eq!(config.viewport.zoom_factor, 1.25);
        assert_eq!(config.viewport.min_scale, 0.5);
        // step_factor uses default
        assert_eq!(config.viewport.step_factor, 1.2);

        let zoom = config.viewport.zoom_settings();
        assert_eq!(zoom.wheel_factor, 1.25);
        assert_eq!(zoom.min_scale, 0.5);
    }

    #[test]
    fn test_viewport_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.viewport.zoom_factor, 1.1);
        assert_eq!(config.viewport.step_factor, 1.2);
        assert_eq!(config.viewport.min_scale, 0.1);
    }

    #[test]
    fn test_viewport_config_validation() {
        let config =
            test_parse_config("[viewport]\nzoom_factor = 1.0\nstep_factor = 0.5\nmin_scale = 0");
        let mut diag = ConfigDiagnostics::new();
        config.viewport.validate(&mut diag);
        assert_eq!(diag.len(), 3);

        let mut diag = ConfigDiagnostics::new();
        test_parse_config("").viewport.validate(&mut diag);
        assert!(diag.is_empty());
    }
}

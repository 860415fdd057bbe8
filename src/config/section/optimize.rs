//! `[optimize]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [optimize]
//! precision = 3     # Decimal places kept in coordinates
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::vector::optimize::MAX_PRECISION;

/// Optimizer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeConfig {
    /// Decimal places kept in coordinates. Lower simplifies more.
    pub precision: u8,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self { precision: 3 }
    }
}

impl OptimizeConfig {
    pub const PRECISION: FieldPath = FieldPath::new("optimize.precision");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.precision > MAX_PRECISION {
            diag.error(
                Self::PRECISION,
                format!("must be at most {MAX_PRECISION}, got {}", self.precision),
            );
        }
    }
}

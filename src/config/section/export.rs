//! `[export]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [export]
//! suffix = "_optimized"     # Inserted between file stem and extension
//! dir = "."                 # Output directory (`~` is expanded)
//! xml_declaration = true    # Prepend <?xml ...?> to written files
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::export::ExportSettings;

/// Output naming and placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Filename suffix for optimized output.
    pub suffix: String,

    /// Output directory, relative to the config file.
    pub dir: PathBuf,

    /// Prepend the XML declaration.
    pub xml_declaration: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let settings = ExportSettings::default();
        Self {
            suffix: settings.suffix,
            dir: PathBuf::from("."),
            xml_declaration: settings.xml_declaration,
        }
    }
}

impl ExportConfig {
    pub const SUFFIX: FieldPath = FieldPath::new("export.suffix");

    pub fn settings(&self) -> ExportSettings {
        ExportSettings {
            suffix: self.suffix.clone(),
            xml_declaration: self.xml_declaration,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.suffix.is_empty() {
            diag.error_with_hint(
                Self::SUFFIX,
                "must not be empty",
                "an empty suffix would overwrite the input file",
            );
        } else if self.suffix.contains(['/', '\\']) {
            diag.error(Self::SUFFIX, "must not contain path separators");
        }
    }
}

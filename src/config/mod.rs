//! Workbench configuration management for `vecta.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── export     # [export]
//! │   ├── optimize   # [optimize]
//! │   ├── resize     # [resize]
//! │   └── viewport   # [viewport]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # VectaConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                           |
//! |--------------|---------------------------------------------------|
//! | `[viewport]` | Wheel/button zoom factors, minimum scale          |
//! | `[optimize]` | Optimizer precision                               |
//! | `[export]`   | Filename suffix, output directory, XML prolog     |
//! | `[resize]`   | Preset sizes, aspect ratio handling               |
//!
//! Every section is optional. Without a config file all defaults apply.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, resolve_dir};

pub use section::{ExportConfig, OptimizeConfig, ResizeConfig, ViewportConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    debug, log,
    session::SessionSettings,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing vecta.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VectaConfig {
    /// Path of the loaded config file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Zoom tuning
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Optimizer settings
    #[serde(default)]
    pub optimize: OptimizeConfig,

    /// Output settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Resize export settings
    #[serde(default)]
    pub resize: ResizeConfig,
}

impl VectaConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; relative paths in the
    /// file resolve against its directory. CLI options override file values.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let mut config = match find_config_file(&cli.config, cwd) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None if cli.config != Path::new("vecta.toml") => {
                // an explicitly named config must exist
                return Err(ConfigError::Io(
                    cli.config.clone(),
                    std::io::Error::from(std::io::ErrorKind::NotFound),
                )
                .into());
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self::default()
            }
        };

        let root = config.root().unwrap_or(cwd).to_path_buf();
        config.export.dir = resolve_dir(&config.export.dir, &root);
        config.apply_command_options(cli, cwd);

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Directory of the loaded config file.
    pub fn root(&self) -> Option<&Path> {
        self.config_path.as_deref().and_then(Path::parent)
    }

    /// Settings for a workbench session.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            zoom: self.viewport.zoom_settings(),
            precision: self.optimize.precision,
            export: self.export.settings(),
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli, cwd: &Path) {
        if let Some(dir) = cli.output_dir() {
            self.export.dir = resolve_dir(dir, cwd);
        }

        match &cli.command {
            Commands::Optimize { precision, .. } => {
                Self::update_option(&mut self.optimize.precision, precision.as_ref());
            }
            Commands::Resize { args } => {
                Self::update_option(&mut self.resize.keep_aspect, args.keep_aspect.as_ref());
            }
            Commands::Convert { .. } | Commands::Info { .. } | Commands::Session { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate all sections.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.viewport.validate(&mut diag);
        self.optimize.validate(&mut diag);
        self.export.validate(&mut diag);
        self.resize.validate(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> VectaConfig {
    let (parsed, ignored) = VectaConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

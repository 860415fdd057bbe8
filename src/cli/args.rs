//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Preview, convert and optimize SVG and Android Vector Drawable files
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: vecta.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "vecta.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert a Vector Drawable to SVG, or an SVG to a Vector Drawable
    #[command(visible_alias = "c")]
    Convert {
        /// Input file (.xml or .svg)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Output file (default: input with the other extension)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Show viewport, size and element counts
    Info {
        /// Input file (.xml or .svg)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Optimize a document and write it next to the original
    #[command(visible_alias = "o")]
    Optimize {
        /// Input file (.xml or .svg)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Decimal places kept in coordinates
        #[arg(short, long)]
        precision: Option<u8>,

        /// Output directory (default: `export.dir`)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,
    },

    /// Export a document at a fixed pixel size
    #[command(visible_alias = "r")]
    Resize {
        #[command(flatten)]
        args: ResizeArgs,
    },

    /// Run an interactive workbench session
    #[command(visible_alias = "s")]
    Session {
        /// Read commands from a file instead of stdin
        #[arg(value_hint = clap::ValueHint::FilePath)]
        script: Option<PathBuf>,
    },
}

/// Resize command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResizeArgs {
    /// Input file (.xml or .svg)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Target width in pixels
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Target height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Square preset size (see `resize.presets`)
    #[arg(long, conflicts_with_all = ["width", "height"])]
    pub preset: Option<u32>,

    /// Derive a missing dimension from the viewBox aspect ratio
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub keep_aspect: Option<bool>,

    /// Output directory (default: `export.dir`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Output directory override from the command line, if any.
    pub fn output_dir(&self) -> Option<&PathBuf> {
        match &self.command {
            Commands::Optimize { output, .. } => output.as_ref(),
            Commands::Resize { args } => args.output.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resize() {
        let cli = Cli::parse_from(["vecta", "resize", "icon.svg", "-W", "48", "--keep-aspect"]);
        let Commands::Resize { args } = cli.command else {
            panic!("expected resize");
        };
        assert_eq!(args.width, Some(48));
        assert_eq!(args.height, None);
        assert_eq!(args.keep_aspect, Some(true));
    }

    #[test]
    fn test_preset_conflicts_with_size() {
        let result = Cli::try_parse_from(["vecta", "resize", "icon.svg", "--preset", "24", "-W", "8"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["vecta", "optimize", "a.svg", "-p", "2", "-v", "-C", "x.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(cli.command, Commands::Optimize { precision: Some(2), .. }));
        assert_eq!(cli.output_dir(), None);
    }
}

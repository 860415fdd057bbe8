//! Vecta - A workbench for SVG and Android Vector Drawable files.

mod cli;
mod config;
mod export;
mod logger;
mod session;
mod utils;
mod vector;
mod viewport;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::VectaConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = VectaConfig::load(&cli)?;

    match &cli.command {
        Commands::Convert { input, output } => cli::convert::run_convert(input, output.as_deref()),
        Commands::Info { input, json } => cli::info::run_info(input, *json),
        Commands::Optimize { input, .. } => cli::optimize::run_optimize(input, &config),
        Commands::Resize { args } => cli::resize::run_resize(args, &config),
        Commands::Session { script } => cli::session::run_session(script.as_deref(), &config),
    }
}

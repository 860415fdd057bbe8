//! `vecta optimize`: optimize one file and write the result.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::common::file_name;
use crate::config::VectaConfig;
use crate::log;
use crate::session::{Command, Effect, Session};
use crate::utils::mime;
use crate::vector::OptimizeStats;

pub fn run_optimize(input: &Path, config: &VectaConfig) -> Result<()> {
    let mut session = Session::new(config.session_settings());
    load_into(&mut session, input)?;

    if let Effect::Optimized(stats) = session.handle(Command::Optimize { precision: None })? {
        print_stats(&stats);
    }

    let path = session.export()?.write_to(&config.export.dir)?;
    log!("optimize"; "wrote {}", path.display());
    Ok(())
}

/// Read `input` and load it into `session`.
pub fn load_into(session: &mut Session, input: &Path) -> Result<()> {
    let content =
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))?;
    session.handle(Command::Load {
        name: file_name(input),
        mime: Some(mime::from_path(input).to_string()),
        content,
    })?;
    Ok(())
}

/// Before/after table.
pub fn print_stats(stats: &OptimizeStats) {
    println!("  {:<8} {:>12} {:>12}", "", "before".dimmed(), "after".dimmed());
    for (label, before, after) in stats.rows() {
        println!("  {label:<8} {before:>12} {after:>12}");
    }

    let saved = format!("{:.1}%", stats.saved_percent());
    if stats.saved_bytes() >= 0 {
        println!("  {:<8} {:>25}", "saved", saved.green());
    } else {
        println!("  {:<8} {:>25}", "saved", saved.red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24">
    <!-- exported by an editor -->
    <path d="M 1.123456 2.654321 L 10.000001 10.999999 Z" style="fill:#ff0000"/>
</svg>"#;

    fn config_for(dir: &Path) -> VectaConfig {
        let mut config = VectaConfig::default();
        config.export.dir = dir.join("out");
        config
    }

    #[test]
    fn test_optimize_writes_suffixed_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("shape.svg");
        fs::write(&input, SVG).unwrap();

        run_optimize(&input, &config_for(dir.path())).unwrap();

        let out = fs::read_to_string(dir.path().join("out/shape_optimized.svg")).unwrap();
        assert!(out.starts_with("<?xml"));
        assert!(!out.contains("exported by an editor"));
        assert!(!out.contains("1.123456"));
    }

    #[test]
    fn test_optimize_drawable_stays_drawable() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ic.xml");
        fs::write(
            &input,
            r##"<vector android:width="24dp" android:height="24dp" android:viewportWidth="24" android:viewportHeight="24"><path android:pathData="M0.123456 0L24 24" android:fillColor="#FF0000"/></vector>"##,
        )
        .unwrap();

        run_optimize(&input, &config_for(dir.path())).unwrap();

        let out = fs::read_to_string(dir.path().join("out/ic_optimized.xml")).unwrap();
        assert!(out.contains("<vector"));
        assert!(out.contains("android:pathData"));
    }

    #[test]
    fn test_optimize_unsupported_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("photo.png");
        fs::write(&input, "png").unwrap();
        assert!(run_optimize(&input, &config_for(dir.path())).is_err());
    }
}

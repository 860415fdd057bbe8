//! SVG optimization using usvg.
//!
//! The optimizer is an external collaborator behind the [`Optimizer`] trait:
//! it receives document text plus a precision and returns new document text,
//! or fails. Nothing else in the crate depends on how it works.

use anyhow::{Context, Result, bail};

use super::resize::ensure_viewbox;
use super::svg;

/// Highest precision the optimizer accepts.
pub const MAX_PRECISION: u8 = 8;

/// Path optimization backend.
pub trait Optimizer {
    /// Optimize `svg`, keeping `precision` decimal places in coordinates.
    ///
    /// Lower precision simplifies geometry more aggressively.
    fn optimize(&self, svg: &str, precision: u8) -> Result<String>;
}

/// Optimizer backed by usvg's parse + write cycle.
///
/// usvg resolves styles into presentation attributes, converts shapes into
/// paths, drops invisible elements and rewrites numbers with the requested
/// precision.
#[derive(Debug, Clone)]
pub struct UsvgOptimizer {
    /// DPI for unit conversion.
    pub dpi: f32,
}

impl Default for UsvgOptimizer {
    fn default() -> Self {
        Self { dpi: 96.0 }
    }
}

impl Optimizer for UsvgOptimizer {
    fn optimize(&self, svg: &str, precision: u8) -> Result<String> {
        if precision > MAX_PRECISION {
            bail!("precision must be at most {MAX_PRECISION}, got {precision}");
        }

        let options = usvg::Options {
            dpi: self.dpi,
            ..Default::default()
        };

        let tree = usvg::Tree::from_str(svg, &options).context("Failed to parse SVG")?;

        let write_options = usvg::WriteOptions {
            indent: usvg::Indent::None,
            coordinates_precision: precision,
            transforms_precision: precision,
            ..Default::default()
        };

        let size = tree.size();
        let markup = tree.to_string(&write_options);
        // the root viewBox is folded into the tree's transforms
        ensure_viewbox(&markup, f64::from(size.width()), f64::from(size.height()))
            .context("Failed to finalize optimized SVG")
    }
}

/// Size and path counts before and after optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeStats {
    pub original_bytes: usize,
    pub optimized_bytes: usize,
    pub original_paths: usize,
    pub optimized_paths: usize,
}

impl OptimizeStats {
    /// Compare two SVG documents. Unparseable markup counts zero paths.
    pub fn measure(original: &str, optimized: &str) -> Self {
        Self {
            original_bytes: original.len(),
            optimized_bytes: optimized.len(),
            original_paths: count_paths(original),
            optimized_paths: count_paths(optimized),
        }
    }

    /// Bytes removed (negative when the output grew).
    #[allow(clippy::cast_possible_wrap)]
    pub fn saved_bytes(&self) -> i64 {
        self.original_bytes as i64 - self.optimized_bytes as i64
    }

    /// Bytes removed as a percentage of the original size.
    #[allow(clippy::cast_precision_loss)]
    pub fn saved_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        self.saved_bytes() as f64 * 100.0 / self.original_bytes as f64
    }

    /// Rows of the stats table: label, before, after.
    pub fn rows(&self) -> [(&'static str, String, String); 2] {
        [
            (
                "size",
                format!("{} B", self.original_bytes),
                format!("{} B", self.optimized_bytes),
            ),
            (
                "paths",
                self.original_paths.to_string(),
                self.optimized_paths.to_string(),
            ),
        ]
    }
}

fn count_paths(markup: &str) -> usize {
    svg::parse(markup).map(|doc| doc.path_count()).unwrap_or(0)
}

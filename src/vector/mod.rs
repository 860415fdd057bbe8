//! Vector asset processing.
//!
//! # Modules
//!
//! - [`document`]: format-neutral document tree
//! - [`drawable`]: Android Vector Drawable codec
//! - [`svg`]: SVG codec
//! - [`convert`]: drawable ⇄ SVG conversion
//! - [`optimize`]: optimization collaborator (usvg)
//! - [`resize`]: root size rewriting for resize export
//!
//! # Architecture
//!
//! ```text
//!  drawable XML ──► drawable::parse ─┐            ┌─► svg::write ──► SVG
//!                                    ├─► Vector ──┤
//!           SVG ──► svg::parse ──────┘  Document  └─► drawable::write ──► drawable XML
//! ```

pub mod convert;
pub mod document;
pub mod drawable;
mod error;
pub mod optimize;
pub mod resize;
pub mod svg;
mod xml;

pub use convert::{to_svg, to_vector};
pub use document::{GroupNode, Node, PathNode, VectorDocument, Viewport};
pub use error::ConvertError;
pub use optimize::{OptimizeStats, Optimizer, UsvgOptimizer};

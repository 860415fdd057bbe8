//! Drawable ⇄ SVG conversion.
//!
//! The conversion is lossy on purpose. Groups survive drawable → SVG but are
//! flattened on the way back, the SVG viewBox size doubles as the drawable's
//! dp size, and only the `dp` unit is understood.

use super::{ConvertError, drawable, svg};

/// Convert Android Vector Drawable XML into SVG markup.
pub fn to_svg(vector_xml: &str) -> Result<String, ConvertError> {
    svg::write(&drawable::parse(vector_xml)?)
}

/// Convert SVG markup into flat Android Vector Drawable XML.
pub fn to_vector(svg_markup: &str) -> Result<String, ConvertError> {
    drawable::write(&svg::parse(svg_markup)?)
}

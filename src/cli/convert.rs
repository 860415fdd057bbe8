//! `vecta convert`: one-shot format conversion.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::common::{load_document, write_output};
use crate::session::SourceKind;
use crate::{log, vector};

/// Convert `input` to the other format and write it to `output`.
pub fn run_convert(input: &Path, output: Option<&Path>) -> Result<()> {
    let document = load_document(input)?;

    // the loaded document already holds the SVG rendition of a drawable
    let (contents, target) = match document.kind {
        SourceKind::VectorXml => (document.original.clone(), SourceKind::Svg),
        SourceKind::Svg => (
            vector::to_vector(&document.source)
                .with_context(|| format!("Failed to convert {}", input.display()))?,
            SourceKind::VectorXml,
        ),
    };

    let output = output.map_or_else(|| default_output(input, target), Path::to_path_buf);
    write_output(&output, &contents)?;

    log!(
        "convert";
        "{} -> {} ({})",
        input.display(),
        output.display(),
        target.label()
    );
    Ok(())
}

/// Input path with the target format's extension.
fn default_output(input: &Path, target: SourceKind) -> PathBuf {
    input.with_extension(target.extension())
}

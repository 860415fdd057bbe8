//! Common utilities shared across CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::session::{LoadedDocument, SourceKind};
use crate::utils::mime;
use crate::vector::{self, VectorDocument, svg};

/// Read a file from disk and decode it the same way a session load does.
pub fn load_document(path: &Path) -> Result<LoadedDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let name = file_name(path);
    let mime = mime::from_path(path);

    LoadedDocument::load(&name, Some(mime), content).map_err(Into::into)
}

/// Parse a file into the document model, whatever its format.
pub fn parse_document(path: &Path) -> Result<(SourceKind, VectorDocument)> {
    let document = load_document(path)?;
    let parsed = match document.kind {
        SourceKind::Svg => svg::parse(&document.source),
        SourceKind::VectorXml => vector::drawable::parse(&document.source),
    }
    .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok((document.kind, parsed))
}

/// Last path component as a string, empty when there is none.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

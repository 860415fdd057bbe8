//! Download output for the current document.
//!
//! The export format always follows the source: SVG in, SVG out; drawable
//! in, drawable out. A pending resize request overrides the filename suffix
//! and stamps its pixel size onto the root element.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::session::{LoadedDocument, SourceKind};
use crate::vector::resize::{XML_DECLARATION, resize_svg};
use crate::vector::{ConvertError, drawable, svg, to_vector};

/// A file ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// Write into `dir`, creating it when needed. Returns the written path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

/// Output options from the `[export]` config section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Inserted between the file stem and extension.
    pub suffix: String,
    /// Prepend `<?xml ...?>` to the output.
    pub xml_declaration: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            suffix: "_optimized".to_string(),
            xml_declaration: true,
        }
    }
}

/// Build the export for `document`.
pub fn export(document: &LoadedDocument, settings: &ExportSettings) -> Result<ExportFile, ConvertError> {
    let body = match (document.kind, document.resize) {
        (SourceKind::Svg, None) => strip_declaration(&document.modified).to_string(),
        (SourceKind::Svg, Some(request)) => {
            let resized = resize_svg(&document.modified, request)?;
            strip_declaration(&resized).to_string()
        }
        (SourceKind::VectorXml, None) => to_vector(&document.modified)?,
        (SourceKind::VectorXml, Some(request)) => {
            let mut doc = svg::parse(&document.modified)?;
            doc.size = (f64::from(request.width), f64::from(request.height));
            drawable::write(&doc)?
        }
    };

    let contents = if settings.xml_declaration {
        format!("{XML_DECLARATION}\n{body}")
    } else {
        body
    };

    let suffix = match document.resize {
        Some(request) => request.suffix(),
        None => settings.suffix.clone(),
    };

    Ok(ExportFile {
        filename: derive_filename(&document.name, document.kind, &suffix),
        mime: document.kind.mime(),
        contents,
    })
}

/// `stem + suffix + extension`, falling back to the kind's default name.
pub fn derive_filename(name: &str, kind: SourceKind, suffix: &str) -> String {
    let name = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(kind.default_filename());
    let path = Path::new(name);

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(name);
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or(kind.extension());
    format!("{stem}{suffix}.{extension}")
}

/// Markup without a leading XML declaration.
fn strip_declaration(markup: &str) -> &str {
    let trimmed = markup.trim_start();
    if trimmed.starts_with("<?xml")
        && let Some(end) = trimmed.find("?>")
    {
        return trimmed[end + 2..].trim_start();
    }
    markup
}

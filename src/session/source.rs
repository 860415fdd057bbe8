//! Input format dispatch.

use std::path::Path;

use crate::utils::mime;

/// Format a document was loaded from, and therefore exported back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// SVG markup, used directly.
    Svg,
    /// Android Vector Drawable XML, converted to SVG on load.
    VectorXml,
}

impl SourceKind {
    /// Detect the format from a MIME type and the file name.
    ///
    /// An SVG MIME type or a `.svg` name wins. Next comes a `.xml` name, or a
    /// generic XML MIME type when the name has no extension. Anything else
    /// is unsupported.
    pub fn detect(name: &str, mime_type: Option<&str>) -> Option<Self> {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match (mime_type, extension.as_deref()) {
            (Some(mime::types::SVG), _) | (_, Some("svg")) => Some(Self::Svg),
            (_, Some("xml")) => Some(Self::VectorXml),
            (Some(m), None) if mime::is_xml(m) => Some(Self::VectorXml),
            _ => None,
        }
    }

    pub const fn mime(self) -> &'static str {
        match self {
            Self::Svg => mime::types::SVG,
            Self::VectorXml => mime::types::XML,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::VectorXml => "xml",
        }
    }

    /// Name used when the source file had none.
    pub const fn default_filename(self) -> &'static str {
        match self {
            Self::Svg => "image.svg",
            Self::VectorXml => "image.xml",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Svg => "SVG",
            Self::VectorXml => "Vector Drawable",
        }
    }
}

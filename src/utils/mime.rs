//! MIME types for the files the workbench reads and writes.

use std::path::Path;

/// MIME type constants.
pub mod types {
    pub const SVG: &str = "image/svg+xml";
    pub const XML: &str = "application/xml";
    pub const TEXT_XML: &str = "text/xml";
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Guess MIME type from file extension.
pub fn from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    from_extension(ext.as_deref())
}

/// Guess MIME type from a lowercase extension.
fn from_extension(ext: Option<&str>) -> &'static str {
    match ext {
        Some("svg") => types::SVG,
        Some("xml") => types::XML,
        _ => types::OCTET_STREAM,
    }
}

/// Check if the MIME type is generic XML, which says nothing about the
/// dialect inside.
pub fn is_xml(mime: &str) -> bool {
    matches!(mime, types::XML | types::TEXT_XML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(&PathBuf::from("icon.svg")), types::SVG);
        assert_eq!(from_path(&PathBuf::from("ICON.SVG")), types::SVG);
        assert_eq!(from_path(&PathBuf::from("res/drawable/ic.xml")), types::XML);
        assert_eq!(from_path(&PathBuf::from("photo.webp")), types::OCTET_STREAM);
        assert_eq!(from_path(&PathBuf::from("noext")), types::OCTET_STREAM);
    }

    #[test]
    fn test_is_xml() {
        assert!(is_xml(types::XML));
        assert!(is_xml(types::TEXT_XML));
        assert!(!is_xml(types::SVG));
        assert!(!is_xml(types::OCTET_STREAM));
    }
}

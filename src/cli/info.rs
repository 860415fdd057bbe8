//! `vecta info`: document summary.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::common::{file_name, parse_document};
use crate::session::SourceKind;
use crate::vector::{VectorDocument, Viewport};

/// Summary printed by `vecta info`.
#[derive(Debug, Serialize)]
pub struct DocumentInfo {
    pub name: String,
    pub format: &'static str,
    pub viewport: Viewport,
    pub width: f64,
    pub height: f64,
    pub paths: usize,
    pub groups: usize,
}

impl DocumentInfo {
    pub fn new(name: String, kind: SourceKind, document: &VectorDocument) -> Self {
        Self {
            name,
            format: kind.label(),
            viewport: document.viewport,
            width: document.size.0,
            height: document.size.1,
            paths: document.path_count(),
            groups: document.group_count(),
        }
    }

    fn rows(&self) -> [(&'static str, String); 5] {
        let vp = &self.viewport;
        [
            ("format", self.format.to_string()),
            ("viewport", format!("{} {} {} {}", vp.x, vp.y, vp.width, vp.height)),
            ("size", format!("{} x {}", self.width, self.height)),
            ("paths", self.paths.to_string()),
            ("groups", self.groups.to_string()),
        ]
    }
}

pub fn run_info(input: &Path, json: bool) -> Result<()> {
    let (kind, document) = parse_document(input)?;
    let info = DocumentInfo::new(file_name(input), kind, &document);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", info.name.bold());
    for (label, value) in info.rows() {
        println!("  {:<10} {value}", label.dimmed());
    }
    Ok(())
}

//! Root-element rewriting for resize export and preview display.
//!
//! Both operations stream the markup through quick-xml and only touch the
//! first `<svg>` start tag; everything else is copied as-is.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::document::{Viewport, format_number};
use super::svg::SVG_NS;
use super::xml::{self, Attrs};
use super::ConvertError;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Target pixel size of a resize export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeRequest {
    pub width: u32,
    pub height: u32,
}

impl ResizeRequest {
    /// Square sizes offered as one-click presets.
    pub const PRESETS: [u32; 3] = [24, 48, 512];

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Keep `viewport`'s aspect ratio, deriving the height from `width`.
    pub fn from_width(width: u32, viewport: &Viewport) -> Self {
        Self::new(width, scale_dimension(f64::from(width) / viewport.aspect_ratio()))
    }

    /// Keep `viewport`'s aspect ratio, deriving the width from `height`.
    pub fn from_height(height: u32, viewport: &Viewport) -> Self {
        Self::new(scale_dimension(f64::from(height) * viewport.aspect_ratio()), height)
    }

    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Filename suffix: `_48` for squares, `_48x24` otherwise.
    pub fn suffix(&self) -> String {
        if self.is_square() {
            format!("_{}", self.width)
        } else {
            format!("_{}x{}", self.width, self.height)
        }
    }
}

/// Round to the nearest whole pixel, never below 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_dimension(value: f64) -> u32 {
    if value.is_finite() {
        value.round().clamp(1.0, f64::from(u32::MAX)) as u32
    } else {
        1
    }
}

/// Give the root `<svg>` an explicit pixel size.
///
/// The viewBox is kept so the content scales into the new size; `xmlns` is
/// added when missing and the XML declaration is prepended.
pub fn resize_svg(content: &str, request: ResizeRequest) -> Result<String, ConvertError> {
    let width = request.width.to_string();
    let height = request.height.to_string();

    let body = rewrite_root(content, |attrs| {
        if !attrs.iter().any(|(key, _)| key == "viewBox") {
            return Err(ConvertError::MissingViewBox);
        }
        attrs.retain(|(key, _)| key != "width" && key != "height");
        attrs.push(("width".to_string(), width));
        attrs.push(("height".to_string(), height));
        if !attrs.iter().any(|(key, _)| key == "xmlns") {
            attrs.push(("xmlns".to_string(), SVG_NS.to_string()));
        }
        Ok(())
    })?;

    Ok(format!("{XML_DECLARATION}{body}"))
}

/// Drop the root's fixed `width`/`height` so a preview pane can scale the
/// drawing to fit instead of cropping it.
pub fn display_markup(content: &str) -> Result<String, ConvertError> {
    rewrite_root(content, |attrs| {
        attrs.retain(|(key, _)| key != "width" && key != "height");
        Ok(())
    })
}

/// Add `viewBox="0 0 width height"` to a root that has none.
pub fn ensure_viewbox(content: &str, width: f64, height: f64) -> Result<String, ConvertError> {
    rewrite_root(content, |attrs| {
        if !attrs.iter().any(|(key, _)| key == "viewBox") {
            let viewbox = format!("0 0 {} {}", format_number(width), format_number(height));
            attrs.push(("viewBox".to_string(), viewbox));
        }
        Ok(())
    })
}

type RootAttrs = Vec<(String, String)>;

/// Stream `content`, letting `edit` rewrite the first `<svg>` tag's
/// attributes. Any XML declaration is dropped.
fn rewrite_root<F>(content: &str, edit: F) -> Result<String, ConvertError>
where
    F: FnOnce(&mut RootAttrs) -> Result<(), ConvertError>,
{
    let mut reader = Reader::from_str(content);
    let mut writer = xml::writer(None);
    let mut edit = Some(edit);

    loop {
        match xml::next(&mut reader)? {
            Event::Start(elem) if is_root(&elem) => match edit.take() {
                Some(edit) => {
                    let elem = rebuild(&elem, &reader, edit)?;
                    writer.write_event(Event::Start(elem))?;
                }
                None => writer.write_event(Event::Start(elem))?,
            },
            Event::Empty(elem) if is_root(&elem) => match edit.take() {
                Some(edit) => {
                    let elem = rebuild(&elem, &reader, edit)?;
                    writer.write_event(Event::Empty(elem))?;
                }
                None => writer.write_event(Event::Empty(elem))?,
            },
            Event::Decl(_) => {}
            Event::Eof => break,
            event => writer.write_event(event)?,
        }
    }

    if edit.is_some() {
        return Err(ConvertError::MissingRoot("svg"));
    }
    Ok(xml::finish(writer))
}

fn is_root(elem: &BytesStart<'_>) -> bool {
    elem.local_name().as_ref() == b"svg"
}

fn rebuild<F>(
    elem: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
    edit: F,
) -> Result<BytesStart<'static>, ConvertError>
where
    F: FnOnce(&mut RootAttrs) -> Result<(), ConvertError>,
{
    let mut attrs = Attrs::read(elem, reader)?.into_inner();
    edit(&mut attrs)?;

    let name = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
    let mut rebuilt = BytesStart::new(name);
    for (key, value) in &attrs {
        rebuilt.push_attribute((key.as_str(), value.as_str()));
    }
    Ok(rebuilt)
}

//! Android Vector Drawable codec.
//!
//! Only the subset the workbench edits is understood: the `<vector>` root
//! with its size and viewport, `<path>` (path data, fill, stroke) and
//! `<group>` without transforms. Any other element is skipped together with
//! everything inside it.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Reader;

use super::document::{GroupNode, Node, PathNode, VectorDocument, Viewport, format_number};
use super::xml::{self, Attrs};
use super::ConvertError;

pub const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

/// Fill written when a path carries none.
pub const DEFAULT_FILL: &str = "#000000";

const ROOT: &str = "vector";

/// Parse drawable XML into a document, keeping group nesting.
pub fn parse(content: &str) -> Result<VectorDocument, ConvertError> {
    let mut reader = xml::reader(content);

    loop {
        match xml::next(&mut reader)? {
            Event::Start(elem) if elem.local_name().as_ref() == ROOT.as_bytes() => {
                let mut doc = read_root(&elem, &reader)?;
                doc.children = read_children(&mut reader)?;
                return Ok(doc);
            }
            Event::Empty(elem) if elem.local_name().as_ref() == ROOT.as_bytes() => {
                return read_root(&elem, &reader);
            }
            Event::Eof => return Err(ConvertError::MissingRoot(ROOT)),
            _ => {}
        }
    }
}

fn read_root(elem: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<VectorDocument, ConvertError> {
    let attrs = Attrs::read(elem, reader)?;

    let viewport_width = required_dimension(&attrs, "android:viewportWidth")?;
    let viewport_height = required_dimension(&attrs, "android:viewportHeight")?;
    let width = physical_dp(&attrs, "android:width").unwrap_or(viewport_width);
    let height = physical_dp(&attrs, "android:height").unwrap_or(viewport_height);

    let mut doc = VectorDocument::new(Viewport::sized(viewport_width, viewport_height));
    doc.size = (width, height);
    Ok(doc)
}

fn required_dimension(attrs: &Attrs, name: &'static str) -> Result<f64, ConvertError> {
    let raw = attrs.get(name).ok_or(ConvertError::MissingAttribute {
        element: ROOT,
        attribute: name,
    })?;
    positive(raw, name)
}

/// `android:width="24dp"` -> `24.0`.
///
/// Resource references such as `@dimen/icon_size` and other units yield
/// `None`, like an absent attribute.
fn physical_dp(attrs: &Attrs, name: &'static str) -> Option<f64> {
    let raw = attrs.get(name)?;
    positive(raw.trim().trim_end_matches("dp"), name).ok()
}

fn positive(raw: &str, name: &'static str) -> Result<f64, ConvertError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value > 0.0 && value.is_finite() => Ok(value),
        _ => Err(ConvertError::InvalidAttribute {
            element: ROOT,
            attribute: name,
            value: raw.to_string(),
        }),
    }
}

/// Read children until the parent's end tag.
fn read_children(reader: &mut Reader<&[u8]>) -> Result<Vec<Node>, ConvertError> {
    let mut children = Vec::new();

    loop {
        match xml::next(reader)? {
            Event::Start(elem) => match elem.local_name().as_ref() {
                b"path" => {
                    children.push(Node::Path(read_path(&elem, reader)?));
                    // aapt:attr and friends
                    xml::skip_subtree(reader, &elem)?;
                }
                b"group" => {
                    let nested = read_children(reader)?;
                    children.push(Node::Group(GroupNode { children: nested }));
                }
                _ => xml::skip_subtree(reader, &elem)?,
            },
            Event::Empty(elem) => match elem.local_name().as_ref() {
                b"path" => children.push(Node::Path(read_path(&elem, reader)?)),
                b"group" => children.push(Node::Group(GroupNode::default())),
                _ => {}
            },
            Event::End(_) | Event::Eof => return Ok(children),
            _ => {}
        }
    }
}

fn read_path(elem: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<PathNode, ConvertError> {
    let attrs = Attrs::read(elem, reader)?;
    let data = attrs
        .get("android:pathData")
        .ok_or(ConvertError::MissingAttribute {
            element: "path",
            attribute: "android:pathData",
        })?;

    Ok(PathNode {
        data: data.to_string(),
        fill: attrs.owned("android:fillColor"),
        stroke: attrs.owned("android:strokeColor"),
        stroke_width: attrs.owned("android:strokeWidth"),
    })
}

/// Write a document as drawable XML.
///
/// Drawables produced here are always flat: groups are dissolved and their
/// paths emitted in document order. A path without fill gets
/// [`DEFAULT_FILL`]; an explicit `none` fill is written as no fill color.
pub fn write(doc: &VectorDocument) -> Result<String, ConvertError> {
    let mut writer = xml::writer(Some(4));

    let width = format!("{}dp", format_number(doc.size.0));
    let height = format!("{}dp", format_number(doc.size.1));
    let viewport_width = format_number(doc.viewport.width);
    let viewport_height = format_number(doc.viewport.height);

    let mut root = BytesStart::new(ROOT);
    root.push_attribute(("xmlns:android", ANDROID_NS));
    root.push_attribute(("android:width", width.as_str()));
    root.push_attribute(("android:height", height.as_str()));
    root.push_attribute(("android:viewportWidth", viewport_width.as_str()));
    root.push_attribute(("android:viewportHeight", viewport_height.as_str()));
    writer.write_event(Event::Start(root))?;

    for path in doc.paths() {
        let mut elem = BytesStart::new("path");
        elem.push_attribute(("android:pathData", path.data.as_str()));
        match path.fill.as_deref() {
            Some("none") => {}
            Some(fill) => elem.push_attribute(("android:fillColor", fill)),
            None => elem.push_attribute(("android:fillColor", DEFAULT_FILL)),
        }
        if let Some(stroke) = &path.stroke {
            elem.push_attribute(("android:strokeColor", stroke.as_str()));
        }
        if let Some(width) = &path.stroke_width {
            elem.push_attribute(("android:strokeWidth", width.as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT)))?;
    Ok(xml::finish(writer))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEART: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<vector xmlns:android="http://schemas.android.com/apk/res/android"
    android:width="48dp"
    android:height="24dp"
    android:viewportWidth="96"
    android:viewportHeight="48">
    <path android:pathData="M0 0h10v10z" android:fillColor="#FF0000"/>
    <group android:name="inner">
        <path android:pathData="M1 1" android:strokeColor="#00FF00" android:strokeWidth="2"/>
        <clip-path android:pathData="M5 5"/>
    </group>
</vector>"##;

    #[test]
    fn test_parse_root_dimensions() {
        let doc = parse(HEART).unwrap();
        assert_eq!(doc.viewport, Viewport::sized(96.0, 48.0));
        assert_eq!(doc.size, (48.0, 24.0));
    }

    #[test]
    fn test_parse_keeps_groups_and_skips_unknown() {
        let doc = parse(HEART).unwrap();
        assert_eq!(doc.children.len(), 2);
        assert_eq!(doc.group_count(), 1);
        assert_eq!(doc.path_count(), 2);

        let Node::Group(group) = &doc.children[1] else {
            panic!("expected group");
        };
        let Node::Path(inner) = &group.children[0] else {
            panic!("expected path");
        };
        assert_eq!(inner.stroke.as_deref(), Some("#00FF00"));
        assert_eq!(inner.stroke_width.as_deref(), Some("2"));
        assert_eq!(inner.fill, None);
    }

    #[test]
    fn test_unknown_subtree_paths_are_ignored() {
        let xml = r#"<vector android:viewportWidth="1" android:viewportHeight="1">
            <aapt:attr name="x"><path android:pathData="M9 9"/></aapt:attr>
            <path android:pathData="M0 0"/>
        </vector>"#;
        let doc = parse(xml).unwrap();
        let data: Vec<_> = doc.paths().map(|p| p.data.as_str()).collect();
        assert_eq!(data, ["M0 0"]);
    }

    #[test]
    fn test_size_defaults_to_viewport() {
        let doc = parse(r#"<vector android:viewportWidth="12" android:viewportHeight="6"/>"#)
            .unwrap();
        assert_eq!(doc.size, (12.0, 6.0));
        assert!(doc.children.is_empty());
    }

    #[test]
    fn test_unreadable_size_falls_back_to_viewport() {
        let doc = parse(
            r#"<vector android:width="@dimen/icon" android:height="-4dp" android:viewportWidth="24" android:viewportHeight="12"/>"#,
        )
        .unwrap();
        assert_eq!(doc.size, (24.0, 12.0));

        let doc = parse(
            r#"<vector android:width="48dp" android:height="2in" android:viewportWidth="24" android:viewportHeight="12"/>"#,
        )
        .unwrap();
        assert_eq!(doc.size, (48.0, 12.0));
    }

    #[test]
    fn test_missing_root() {
        let err = parse("<svg viewBox=\"0 0 1 1\"/>").unwrap_err();
        assert!(matches!(err, ConvertError::MissingRoot("vector")));
    }

    #[test]
    fn test_missing_viewport() {
        let err = parse(r#"<vector android:viewportWidth="24"/>"#).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MissingAttribute {
                attribute: "android:viewportHeight",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_viewport() {
        let err = parse(r#"<vector android:viewportWidth="0" android:viewportHeight="24"/>"#)
            .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidAttribute { .. }));

        let err = parse(r#"<vector android:viewportWidth="abc" android:viewportHeight="24"/>"#)
            .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidAttribute { .. }));
    }

    #[test]
    fn test_path_without_data() {
        let xml = r#"<vector android:viewportWidth="1" android:viewportHeight="1"><path/></vector>"#;
        let err = parse(xml).unwrap_err();
        assert!(matches!(err, ConvertError::MissingAttribute { element: "path", .. }));
    }

    #[test]
    fn test_write_flattens_and_defaults_fill() {
        let doc = parse(HEART).unwrap();
        let out = write(&doc).unwrap();

        assert!(out.contains(r#"android:width="48dp""#));
        assert!(out.contains(r#"android:viewportWidth="96""#));
        assert!(!out.contains("<group"));
        assert_eq!(out.matches("<path").count(), 2);
        assert!(out.contains(r##"android:fillColor="#FF0000""##));
        assert!(out.contains(r##"android:fillColor="#000000""##));
        assert!(out.contains(r#"android:strokeWidth="2""#));
    }

    #[test]
    fn test_write_none_fill_is_omitted() {
        let mut doc = VectorDocument::new(Viewport::sized(1.0, 1.0));
        doc.children.push(Node::Path(PathNode::new("M0 0").with_fill("none")));
        let out = write(&doc).unwrap();
        assert!(!out.contains("fillColor"));
    }

    #[test]
    fn test_write_parse_roundtrip() {
        let doc = parse(HEART).unwrap();
        let again = parse(&write(&doc).unwrap()).unwrap();
        assert_eq!(again.viewport, doc.viewport);
        assert_eq!(again.size, doc.size);
        assert_eq!(again.path_count(), doc.path_count());
    }
}

//! SVG codec for the minimal subset shared with drawables.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Reader;

use super::document::{GroupNode, Node, PathNode, VectorDocument, Viewport, format_number};
use super::xml::{self, Attrs};
use super::ConvertError;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Fill written when a path carries none.
pub const DEFAULT_FILL: &str = "none";

const ROOT: &str = "svg";

/// Parse SVG markup into a document.
///
/// The viewBox size becomes both the viewport and the physical size; root
/// `width`/`height` attributes are not consulted. `<g>` nesting is kept,
/// other containers are skipped with their contents.
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
    let raw = attrs.get("viewBox").ok_or(ConvertError::MissingViewBox)?;
    Ok(VectorDocument::new(parse_viewbox(raw)?))
}

/// Parse `min-x min-y width height`, separated by whitespace and/or commas.
pub fn parse_viewbox(raw: &str) -> Result<Viewport, ConvertError> {
    let invalid = || ConvertError::InvalidViewBox(raw.to_string());

    let numbers = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<f64>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    let [x, y, width, height] = numbers[..] else {
        return Err(invalid());
    };
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        return Err(invalid());
    }

    Ok(Viewport {
        x,
        y,
        width,
        height,
    })
}

fn read_children(reader: &mut Reader<&[u8]>) -> Result<Vec<Node>, ConvertError> {
    let mut children = Vec::new();

    loop {
        match xml::next(reader)? {
            Event::Start(elem) => match elem.local_name().as_ref() {
                b"path" => {
                    if let Some(path) = read_path(&elem, reader)? {
                        children.push(Node::Path(path));
                    }
                    xml::skip_subtree(reader, &elem)?;
                }
                b"g" => {
                    let nested = read_children(reader)?;
                    children.push(Node::Group(GroupNode { children: nested }));
                }
                _ => xml::skip_subtree(reader, &elem)?,
            },
            Event::Empty(elem) => match elem.local_name().as_ref() {
                b"path" => {
                    if let Some(path) = read_path(&elem, reader)? {
                        children.push(Node::Path(path));
                    }
                }
                b"g" => children.push(Node::Group(GroupNode::default())),
                _ => {}
            },
            Event::End(_) | Event::Eof => return Ok(children),
            _ => {}
        }
    }
}

/// A `<path>` without `d` draws nothing and is dropped.
fn read_path(elem: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Option<PathNode>, ConvertError> {
    let attrs = Attrs::read(elem, reader)?;
    Ok(attrs.get("d").map(|data| PathNode {
        data: data.to_string(),
        fill: attrs.owned("fill"),
        stroke: attrs.owned("stroke"),
        stroke_width: attrs.owned("stroke-width"),
    }))
}

/// Write a document as SVG markup, keeping groups as `<g>`.
pub fn write(doc: &VectorDocument) -> Result<String, ConvertError> {
    let mut writer = xml::writer(None);

    let viewport = doc.viewport;
    let viewbox = format!(
        "{} {} {} {}",
        format_number(viewport.x),
        format_number(viewport.y),
        format_number(viewport.width),
        format_number(viewport.height)
    );

    let mut root = BytesStart::new(ROOT);
    root.push_attribute(("viewBox", viewbox.as_str()));
    root.push_attribute(("xmlns", SVG_NS));
    writer.write_event(Event::Start(root))?;
    write_nodes(&mut writer, &doc.children)?;
    writer.write_event(Event::End(BytesEnd::new(ROOT)))?;

    Ok(xml::finish(writer))
}

fn write_nodes<W: std::io::Write>(
    writer: &mut quick_xml::Writer<W>,
    nodes: &[Node],
) -> Result<(), ConvertError> {
    for node in nodes {
        match node {
            Node::Path(path) => {
                let mut elem = BytesStart::new("path");
                elem.push_attribute(("d", path.data.as_str()));
                elem.push_attribute(("fill", path.fill.as_deref().unwrap_or(DEFAULT_FILL)));
                if let Some(stroke) = &path.stroke {
                    elem.push_attribute(("stroke", stroke.as_str()));
                }
                if let Some(width) = &path.stroke_width {
                    elem.push_attribute(("stroke-width", width.as_str()));
                }
                writer.write_event(Event::Empty(elem))?;
            }
            Node::Group(group) => {
                writer.write_event(Event::Start(BytesStart::new("g")))?;
                write_nodes(writer, &group.children)?;
                writer.write_event(Event::End(BytesEnd::new("g")))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_viewbox() {
        assert_eq!(
            parse_viewbox("0 0 24 24").unwrap(),
            Viewport::sized(24.0, 24.0)
        );
        assert_eq!(
            parse_viewbox(" -1,2.5  10,20 ").unwrap(),
            Viewport {
                x: -1.0,
                y: 2.5,
                width: 10.0,
                height: 20.0
            }
        );
    }

    #[test]
    fn test_parse_viewbox_invalid() {
        for raw in ["", "0 0 24", "0 0 24 24 1", "0 0 0 24", "0 0 24 -1", "a b c d"] {
            assert!(
                matches!(parse_viewbox(raw), Err(ConvertError::InvalidViewBox(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_tree() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 20" width="100">
            <defs><path id="hidden" d="M9 9"/></defs>
            <g><path d="M1 1" fill="red"/><g><path d="M2 2"/></g></g>
            <path d="M3 3" stroke="blue" stroke-width="1.5"/>
            <path fill="green"/>
        </svg>"#;
        let doc = parse(svg).unwrap();

        assert_eq!(doc.viewport, Viewport::sized(10.0, 20.0));
        assert_eq!(doc.size, (10.0, 20.0));
        assert_eq!(doc.group_count(), 2);
        let data: Vec<_> = doc.paths().map(|p| p.data.as_str()).collect();
        assert_eq!(data, ["M1 1", "M2 2", "M3 3"]);

        let last = doc.paths().last().unwrap();
        assert_eq!(last.stroke.as_deref(), Some("blue"));
        assert_eq!(last.stroke_width.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_missing_root_vs_missing_viewbox() {
        assert!(matches!(
            parse("<vector/>"),
            Err(ConvertError::MissingRoot("svg"))
        ));
        assert!(matches!(
            parse(r#"<svg width="10" height="10"/>"#),
            Err(ConvertError::MissingViewBox)
        ));
    }

    #[test]
    fn test_syntax_error() {
        let err = parse(r#"<svg viewBox="0 0 1 1"><g></svg>"#).unwrap_err();
        assert!(matches!(err, ConvertError::Syntax { .. }));
    }

    #[test]
    fn test_write_groups_and_defaults() {
        let mut doc = VectorDocument::new(Viewport::sized(24.0, 24.0));
        doc.children.push(Node::Group(GroupNode {
            children: vec![Node::Path(PathNode::new("M0 0"))],
        }));
        doc.children.push(Node::Path(
            PathNode::new("M1 1")
                .with_fill("#FF0000")
                .with_stroke("#000", Some("2".to_string())),
        ));

        let out = write(&doc).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">"#,
                r#"<g><path d="M0 0" fill="none"/></g>"#,
                r##"<path d="M1 1" fill="#FF0000" stroke="#000" stroke-width="2"/>"##,
                "</svg>"
            )
        );
    }

    #[test]
    fn test_write_escapes_attribute_values() {
        let mut doc = VectorDocument::new(Viewport::sized(1.0, 1.0));
        doc.children
            .push(Node::Path(PathNode::new("M0 0").with_fill("url(#a&b)")));
        let out = write(&doc).unwrap();
        assert!(out.contains("url(#a&amp;b)"));
        let back = parse(&out).unwrap();
        assert_eq!(back.paths().next().unwrap().fill.as_deref(), Some("url(#a&b)"));
    }
}

//! Format-neutral vector document tree.
//!
//! Both codecs ([`super::drawable`] and [`super::svg`]) parse into and write
//! from [`VectorDocument`]. Geometry strings are opaque: they are carried
//! verbatim and never validated against the path-command grammar.

/// Viewport bounds of a document (SVG `viewBox`, Android `viewport*`).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Viewport anchored at the origin.
    pub const fn sized(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// A single drawable path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathNode {
    /// `d` in SVG, `android:pathData` in drawables.
    pub data: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<String>,
}

impl PathNode {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>, width: Option<String>) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = width;
        self
    }
}

/// An ordered container of nodes. Transforms are not modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupNode {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Path(PathNode),
    Group(GroupNode),
}

/// Root of a parsed vector image.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorDocument {
    /// Coordinate system of the children. Width and height are always > 0.
    pub viewport: Viewport,
    /// Physical size (`android:width`/`android:height` without the `dp` unit).
    pub size: (f64, f64),
    pub children: Vec<Node>,
}

impl VectorDocument {
    /// Empty document whose size equals its viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            size: (viewport.width, viewport.height),
            children: Vec::new(),
        }
    }

    /// Iterate all paths depth-first, descending into groups.
    pub fn paths(&self) -> impl Iterator<Item = &PathNode> {
        let mut out = Vec::new();
        collect_paths(&self.children, &mut out);
        out.into_iter()
    }

    /// Number of paths at any depth.
    pub fn path_count(&self) -> usize {
        self.paths().count()
    }

    /// Number of groups at any depth.
    pub fn group_count(&self) -> usize {
        count_groups(&self.children)
    }
}

fn collect_paths<'a>(nodes: &'a [Node], out: &mut Vec<&'a PathNode>) {
    for node in nodes {
        match node {
            Node::Path(path) => out.push(path),
            Node::Group(group) => collect_paths(&group.children, out),
        }
    }
}

fn count_groups(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::Path(_) => 0,
            Node::Group(group) => 1 + count_groups(&group.children),
        })
        .sum()
}

/// Format a dimension the way it is written back into markup (`24`, `0.5`).
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

//! In-memory stand-in for the page the interaction layer drives.
//!
//! Components never hold references into the arena; they keep `NodeId`s and
//! borrow the document per call, so handles stay valid for the page lifetime.

use std::collections::BTreeMap;

/// Handle to a node in a [`Document`]. Cheap to copy, only meaningful for the
/// document that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Bounding box as the layer sees it: viewport-relative top plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Media-query state sampled by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct Media {
    pub reduced_motion: bool,
}

/// Inline style slots the layer writes. `None` means the property was never
/// set, matching an untouched inline style attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub opacity: Option<f32>,
    pub width_pct: Option<f32>,
    pub stroke_dasharray: Option<f32>,
    pub stroke_dashoffset: Option<f32>,
}

#[derive(Debug, Clone, Default)]
pub struct Node {
    pub id: Option<String>,
    classes: Vec<String>,
    pub dataset: BTreeMap<String, String>,
    pub rect: Rect,
    pub scroll_left: f32,
    pub scroll_width: f32,
    /// Measured total length, present only on SVG path nodes.
    pub path_length: Option<f32>,
    pub style: Style,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.dataset.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn with_path_length(mut self, length: f32) -> Self {
        self.path_length = Some(length);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

pub struct Document {
    nodes: Vec<Node>,
    pub viewport: Viewport,
    pub media: Media,
}

impl Document {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            nodes: Vec::new(),
            viewport,
            media: Media::default(),
        }
    }

    pub fn insert(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .map(NodeId)
    }

    /// All nodes carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.has_class(class))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    pub fn query_first(&self, class: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.has_class(class)).map(NodeId)
    }

    /// Shift a scroll container horizontally. Clamping to the scrollable range
    /// happens here, the way a real scroll container clamps natively; callers
    /// do not bounds-check.
    pub fn scroll_by(&mut self, id: NodeId, dx: f32) {
        let node = &mut self.nodes[id.0];
        let max = (node.scroll_width - node.rect.width).max(0.0);
        node.scroll_left = (node.scroll_left + dx).clamp(0.0, max);
    }
}

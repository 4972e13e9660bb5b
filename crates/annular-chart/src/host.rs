//! Host-element model.
//!
//! The widget is configured and positioned by whatever document hosts it.
//! `HostTree` is the small arena standing in for that document: each node has
//! a local offset inside its parent, a rendered size, a visibility flag, and
//! string data attributes read once at mount.

use std::collections::HashMap;

use annular_engine::coords::Vec2;

/// Handle to a node in a [`HostTree`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct HostNode {
    parent: Option<NodeId>,
    offset: Vec2,
    size: Vec2,
    visible: bool,
    ready: bool,
    attrs: HashMap<String, String>,
}

/// Arena of host elements.
#[derive(Debug, Default)]
pub struct HostTree {
    nodes: Vec<HostNode>,
}

/// Border allowance subtracted when falling back to an ancestor's width.
const ANCESTOR_WIDTH_INSET: f32 = 2.0;

impl HostTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node with the given local offset and rendered size.
    /// Nodes are visible by default.
    pub fn insert(&mut self, parent: Option<NodeId>, offset: Vec2, size: Vec2) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(HostNode {
            parent,
            offset,
            size,
            visible: true,
            ready: false,
            attrs: HashMap::new(),
        });
        id
    }

    pub fn set_size(&mut self, id: NodeId, size: Vec2) {
        self.nodes[id.0].size = size;
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        self.nodes[id.0].visible = visible;
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        self.nodes[id.0].attrs.insert(name.to_string(), value.into());
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0].attrs.get(name).map(String::as_str)
    }

    /// Marks a node as hosting an initialized widget.
    pub fn mark_ready(&mut self, id: NodeId) {
        self.nodes[id.0].ready = true;
    }

    /// True once a widget has been mounted on this node; guards
    /// double-initialization.
    pub fn is_ready(&self, id: NodeId) -> bool {
        self.nodes[id.0].ready
    }

    /// Cumulative offset of a node from the document origin: the sum of local
    /// offsets up the parent chain. A node with no parent reports its own
    /// offset; the root of an empty chain is `(0, 0)`.
    pub fn abs_pos(&self, id: NodeId) -> Vec2 {
        let mut pos = Vec2::zero();
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            pos = pos + self.nodes[node.0].offset;
            cursor = self.nodes[node.0].parent;
        }
        pos
    }

    /// Usable width for a node.
    ///
    /// A node that rendered with zero width (hidden tab, collapsed panel)
    /// borrows the width of its nearest visible ancestor, minus a small border
    /// allowance. Returns 0 when no ancestor has a width either.
    pub fn measure_width(&self, id: NodeId) -> f32 {
        let node = &self.nodes[id.0];
        if node.size.x > 0.0 {
            return node.size.x;
        }

        let mut cursor = node.parent;
        while let Some(ancestor) = cursor {
            let n = &self.nodes[ancestor.0];
            if n.visible && n.size.x > 0.0 {
                return n.size.x - ANCESTOR_WIDTH_INSET;
            }
            cursor = n.parent;
        }
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_pos_sums_offset_chain() {
        let mut tree = HostTree::new();
        let root = tree.insert(None, Vec2::new(10.0, 20.0), Vec2::new(800.0, 600.0));
        let mid = tree.insert(Some(root), Vec2::new(5.0, 5.0), Vec2::new(400.0, 300.0));
        let leaf = tree.insert(Some(mid), Vec2::new(1.0, 2.0), Vec2::new(100.0, 100.0));

        assert_eq!(tree.abs_pos(leaf), Vec2::new(16.0, 27.0));
    }

    #[test]
    fn abs_pos_of_unparented_node() {
        let mut tree = HostTree::new();
        let n = tree.insert(None, Vec2::zero(), Vec2::new(100.0, 100.0));
        assert_eq!(tree.abs_pos(n), Vec2::zero());
    }

    #[test]
    fn measure_width_prefers_own_width() {
        let mut tree = HostTree::new();
        let root = tree.insert(None, Vec2::zero(), Vec2::new(800.0, 600.0));
        let el = tree.insert(Some(root), Vec2::zero(), Vec2::new(300.0, 300.0));
        assert_eq!(tree.measure_width(el), 300.0);
    }

    #[test]
    fn measure_width_falls_back_to_visible_ancestor() {
        let mut tree = HostTree::new();
        let root = tree.insert(None, Vec2::zero(), Vec2::new(800.0, 600.0));
        let hidden = tree.insert(Some(root), Vec2::zero(), Vec2::new(400.0, 0.0));
        tree.set_visible(hidden, false);
        let el = tree.insert(Some(hidden), Vec2::zero(), Vec2::new(0.0, 0.0));

        // The hidden ancestor is skipped even though it has a width.
        assert_eq!(tree.measure_width(el), 800.0 - 2.0);
    }

    #[test]
    fn measure_width_without_any_sized_ancestor() {
        let mut tree = HostTree::new();
        let el = tree.insert(None, Vec2::zero(), Vec2::zero());
        assert_eq!(tree.measure_width(el), 0.0);
    }

    #[test]
    fn attrs_round_trip() {
        let mut tree = HostTree::new();
        let el = tree.insert(None, Vec2::zero(), Vec2::new(10.0, 10.0));
        tree.set_attr(el, "chart-value", "75");
        assert_eq!(tree.attr(el, "chart-value"), Some("75"));
        assert_eq!(tree.attr(el, "chart-units"), None);
    }
}

use crate::Point;

/// Reference to a node in a [`NodeArena`], or [`NodeRef::NONE`].
///
/// Non-sentinel refs are only handed out by [`NodeArena::push`], so they are always in range
/// for the arena that created them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef(usize);

impl NodeRef {
    /// The "no child" sentinel.
    pub const NONE: NodeRef = NodeRef(usize::MAX);

    #[inline]
    pub fn get(self) -> Option<usize> {
        if self == Self::NONE { None } else { Some(self.0) }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub point: Point,
    pub left: NodeRef,
    pub right: NodeRef,
}

/// Flat, append-only node storage. Index 0 is the root when non-empty.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity) }
    }

    /// Appends a childless node and returns its reference.
    pub fn push(&mut self, point: Point) -> NodeRef {
        let index = self.nodes.len();
        self.nodes.push(Node {
            point,
            left: NodeRef::NONE,
            right: NodeRef::NONE,
        });
        NodeRef(index)
    }

    /// Sets the children of `parent`. Only the tree builder links nodes.
    pub(crate) fn link(&mut self, parent: NodeRef, left: NodeRef, right: NodeRef) {
        if let Some(node) = parent.get().and_then(|i| self.nodes.get_mut(i)) {
            node.left = left;
            node.right = right;
        }
    }

    #[inline]
    pub fn get(&self, node: NodeRef) -> Option<&Node> {
        node.get().and_then(|i| self.nodes.get(i))
    }

    pub fn root(&self) -> NodeRef {
        if self.nodes.is_empty() { NodeRef::NONE } else { NodeRef(0) }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in construction (pre-)order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

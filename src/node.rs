//! The node record and the handle type used to link nodes together.

/// A stable handle to a node in a [`Tree`][crate::Tree]'s arena.
///
/// `NodeId`s are plain indices: cheap to copy and compare, and only
/// meaningful to the tree that issued them. A handle obtained before a
/// [`remove`][crate::Tree::remove] may afterwards point at a vacant slot or
/// at a different node that reused the slot, so holding ids across removals
/// is unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A single node: a key plus links to its neighbors.
///
/// `Node` is a pure data holder. The left and right links are owning in the
/// sense that the subtree below belongs to this node; the parent link is a
/// non-owning back-reference (`None` for the root). All link writes go
/// through the owning [`Tree`][crate::Tree], which is what keeps the links
/// mutually consistent.
#[derive(Debug, Clone)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K, parent: Option<NodeId>) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The parent node, or `None` if this node is the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// How many of this node's two child slots are occupied (0, 1, or 2).
    pub fn children_count(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_count_counts_occupied_slots() {
        let mut node = Node::new(5, None);
        assert_eq!(node.children_count(), 0);

        node.left = Some(NodeId(1));
        assert_eq!(node.children_count(), 1);

        node.right = Some(NodeId(2));
        assert_eq!(node.children_count(), 2);

        node.left = None;
        assert_eq!(node.children_count(), 1);
    }

    #[test]
    fn fresh_node_has_no_links() {
        let node = Node::new("k", None);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
        assert!(node.parent().is_none());
        assert_eq!(*node.key(), "k");
    }
}

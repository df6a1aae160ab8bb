//! Lazy traversal iterators over a borrowed tree.
//!
//! Each [`Tree`] method here hands back a fresh iterator, so traversals are
//! restartable by calling the method again. None of them mutate the tree;
//! they borrow it for their whole lifetime, which also means the borrow
//! checker rules out mutation mid-walk.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [2, 1, 3] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
//! assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
//! ```

use std::collections::VecDeque;

use crate::node::NodeId;
use crate::tree::Tree;

impl<K> Tree<K> {
    /// Visits node, then left subtree, then right subtree.
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder {
            tree: self,
            current: self.root(),
            pending: Vec::new(),
        }
    }

    /// Preorder over the subtree rooted at `start`.
    pub fn preorder_from(&self, start: NodeId) -> Preorder<'_, K> {
        Preorder {
            tree: self,
            current: Some(start),
            pending: Vec::new(),
        }
    }

    /// Visits left subtree, then node, then right subtree: the keys come
    /// out in ascending order, which is the defining property of a BST.
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder {
            tree: self,
            current: self.root(),
            stack: Vec::new(),
        }
    }

    /// Inorder over the subtree rooted at `start`.
    pub fn inorder_from(&self, start: NodeId) -> Inorder<'_, K> {
        Inorder {
            tree: self,
            current: Some(start),
            stack: Vec::new(),
        }
    }

    /// Visits left subtree, then right subtree, then node.
    pub fn postorder(&self) -> Postorder<'_, K> {
        Postorder {
            tree: self,
            stack: self.root().map(|root| vec![(root, false)]).unwrap_or_default(),
        }
    }

    /// Postorder over the subtree rooted at `start`.
    pub fn postorder_from(&self, start: NodeId) -> Postorder<'_, K> {
        Postorder {
            tree: self,
            stack: vec![(start, false)],
        }
    }

    /// Breadth-first traversal: level by level, left before right within a
    /// level.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder {
            tree: self,
            queue: self.root().into_iter().collect(),
        }
    }

    /// Level-order over the subtree rooted at `start`.
    pub fn level_order_from(&self, start: NodeId) -> LevelOrder<'_, K> {
        LevelOrder {
            tree: self,
            queue: Some(start).into_iter().collect(),
        }
    }

    /// Depth-first traversal with an explicit stack, pushing the right
    /// child before the left so the left pops first. Yields the same order
    /// as [`preorder`][Tree::preorder].
    pub fn dfs(&self) -> Dfs<'_, K> {
        Dfs {
            tree: self,
            stack: self.root().into_iter().collect(),
        }
    }

    /// Depth-first over the subtree rooted at `start`.
    pub fn dfs_from(&self, start: NodeId) -> Dfs<'_, K> {
        Dfs {
            tree: self,
            stack: vec![start],
        }
    }
}

/// Iterator over keys in preorder. See [`Tree::preorder`].
pub struct Preorder<'a, K> {
    tree: &'a Tree<K>,
    /// The next node to yield; its right child is parked on `pending`.
    current: Option<NodeId>,
    pending: Vec<NodeId>,
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current.take().or_else(|| self.pending.pop())?;
        let node = self.tree.node(id);
        if let Some(right) = node.right() {
            self.pending.push(right);
        }
        self.current = node.left();
        Some(node.key())
    }
}

/// Iterator over keys in ascending order. See [`Tree::inorder`].
pub struct Inorder<'a, K> {
    tree: &'a Tree<K>,
    /// Next subtree to descend into; ancestors with unvisited right
    /// subtrees wait on `stack`.
    current: Option<NodeId>,
    stack: Vec<NodeId>,
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.tree.node(id).left();
        }
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.current = node.right();
        Some(node.key())
    }
}

/// Iterator over keys in postorder. See [`Tree::postorder`].
pub struct Postorder<'a, K> {
    tree: &'a Tree<K>,
    /// `(node, expanded)`: a node is yielded only on its second pop, after
    /// both children have been pushed above it.
    stack: Vec<(NodeId, bool)>,
}

impl<'a, K> Iterator for Postorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, expanded)) = self.stack.pop() {
            let node = self.tree.node(id);
            if expanded {
                return Some(node.key());
            }
            self.stack.push((id, true));
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Iterator over keys level by level. See [`Tree::level_order`].
pub struct LevelOrder<'a, K> {
    tree: &'a Tree<K>,
    queue: VecDeque<NodeId>,
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = self.tree.node(id);
        if let Some(left) = node.left() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right() {
            self.queue.push_back(right);
        }
        Some(node.key())
    }
}

/// Iterator over keys in depth-first (preorder) order. See [`Tree::dfs`].
pub struct Dfs<'a, K> {
    tree: &'a Tree<K>,
    stack: Vec<NodeId>,
}

impl<'a, K> Iterator for Dfs<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(node.key())
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::Tree;

    //         8
    //       /   \
    //      3    10
    //     / \     \
    //    1   6    14
    //       / \   /
    //      4   7 13
    fn sample_tree() -> Tree<i32> {
        let mut tree = Tree::new();
        for key in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn preorder_visits_node_first() {
        let tree = sample_tree();
        let keys: Vec<i32> = tree.preorder().copied().collect();
        assert_eq!(keys, vec![8, 3, 1, 6, 4, 7, 10, 14, 13]);
    }

    #[test]
    fn inorder_is_ascending() {
        let tree = sample_tree();
        let keys: Vec<i32> = tree.inorder().copied().collect();
        assert_eq!(keys, vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
    }

    #[test]
    fn postorder_visits_node_last() {
        let tree = sample_tree();
        let keys: Vec<i32> = tree.postorder().copied().collect();
        assert_eq!(keys, vec![1, 4, 7, 6, 3, 13, 14, 10, 8]);
    }

    #[test]
    fn level_order_goes_left_to_right_per_level() {
        let tree = sample_tree();
        let keys: Vec<i32> = tree.level_order().copied().collect();
        assert_eq!(keys, vec![8, 3, 10, 1, 6, 14, 4, 7, 13]);
    }

    #[test]
    fn dfs_matches_preorder() {
        let tree = sample_tree();
        let dfs: Vec<i32> = tree.dfs().copied().collect();
        let preorder: Vec<i32> = tree.preorder().copied().collect();
        assert_eq!(dfs, preorder);
    }

    #[test]
    fn traversals_of_empty_tree_are_empty() {
        let tree: Tree<i32> = Tree::new();
        assert_eq!(tree.preorder().next(), None);
        assert_eq!(tree.inorder().next(), None);
        assert_eq!(tree.postorder().next(), None);
        assert_eq!(tree.level_order().next(), None);
        assert_eq!(tree.dfs().next(), None);
    }

    #[test]
    fn traversals_can_start_from_a_subtree() {
        let tree = sample_tree();
        let three = tree.search(&3).unwrap();

        let keys: Vec<i32> = tree.inorder_from(three).copied().collect();
        assert_eq!(keys, vec![1, 3, 4, 6, 7]);

        let keys: Vec<i32> = tree.preorder_from(three).copied().collect();
        assert_eq!(keys, vec![3, 1, 6, 4, 7]);

        let keys: Vec<i32> = tree.postorder_from(three).copied().collect();
        assert_eq!(keys, vec![1, 4, 7, 6, 3]);

        let keys: Vec<i32> = tree.level_order_from(three).copied().collect();
        assert_eq!(keys, vec![3, 1, 6, 4, 7]);

        let keys: Vec<i32> = tree.dfs_from(three).copied().collect();
        assert_eq!(keys, vec![3, 1, 6, 4, 7]);
    }

    #[test]
    fn traversals_are_restartable() {
        let tree = sample_tree();

        let first: Vec<i32> = tree.inorder().copied().collect();
        let second: Vec<i32> = tree.inorder().copied().collect();
        assert_eq!(first, second);
    }
}

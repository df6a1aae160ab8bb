//! Fixed-width textual layout of the tree, one row per level.

use std::fmt;

use crate::node::NodeId;
use crate::tree::Tree;

/// Every rendered row is this many columns wide.
const ROW_WIDTH: usize = 80;

impl<K: fmt::Display> Tree<K> {
    /// Renders the whole tree as fixed-width rows, one per level, with each
    /// node's `Display` form spread proportionally across the row. An empty
    /// tree renders as `"Tree is empty"`.
    ///
    /// This is a display convenience: the layout makes no promise beyond
    /// being readable for small trees and never panicking, even when node
    /// text runs past the row edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// let picture = tree.render();
    /// assert_eq!(picture.lines().count(), 2);
    ///
    /// let empty: Tree<i32> = Tree::new();
    /// assert_eq!(empty.render(), "Tree is empty");
    /// ```
    pub fn render(&self) -> String {
        match self.root() {
            Some(root) => self.render_from(root),
            None => String::from("Tree is empty"),
        }
    }

    /// Renders the subtree rooted at `start`; see [`render`][Tree::render].
    pub fn render_from(&self, start: NodeId) -> String {
        let mut out = String::new();

        // Each level keeps placeholders for absent children so that slot i
        // of the row sits under the right ancestor.
        let mut level: Vec<Option<NodeId>> = vec![Some(start)];
        while level.iter().any(Option::is_some) {
            let mut row = vec![' '; ROW_WIDTH];
            let slots = level.len();
            for (i, id) in level.iter().enumerate() {
                if let Some(id) = id {
                    let column = (i + 1) * ROW_WIDTH / (slots + 1);
                    let text = self.node(*id).key().to_string();
                    for (offset, ch) in text.chars().enumerate() {
                        match row.get_mut(column + offset) {
                            Some(cell) => *cell = ch,
                            None => break,
                        }
                    }
                }
            }
            out.extend(row);
            out.push('\n');

            let next: Vec<Option<NodeId>> = level
                .iter()
                .flat_map(|id| match id {
                    Some(id) => {
                        let node = self.node(*id);
                        [node.left(), node.right()]
                    }
                    None => [None, None],
                })
                .collect();
            level = next;
        }

        out
    }
}

//! The tree itself: an arena of nodes plus all search and mutation logic.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::node::{Node, NodeId};

/// One arena slot. Vacant slots form an intrusive free list so removed
/// slots are reused before the backing `Vec` grows.
#[derive(Clone)]
enum Slot<K> {
    Occupied(Node<K>),
    Vacant { next_free: Option<NodeId> },
}

/// A Binary Search Tree storing a set of ordered keys.
///
/// The tree owns every node through its internal arena; all links between
/// nodes (including parent back-references) are [`NodeId`] indices into that
/// arena. Equal keys merge: inserting a key that is already present is a
/// no-op that returns the existing node.
///
/// The tree never rebalances, so its depth depends on insertion order.
/// It is a single-threaded structure: `&mut` access follows the usual Rust
/// rules, and sharing it across threads for mutation requires external
/// locking like any other `!Sync`-by-convention container.
///
/// # Examples
///
/// ```
/// use bstree::Tree;
///
/// let mut tree = Tree::new();
/// for key in [5, 3, 8, 1, 4, 7, 9] {
///     tree.insert(key);
/// }
///
/// // In-order traversal yields the keys in ascending order.
/// let sorted: Vec<i32> = tree.inorder().copied().collect();
/// assert_eq!(sorted, vec![1, 3, 4, 5, 7, 8, 9]);
///
/// assert_eq!(tree.remove(&5), Some(5));
/// assert_eq!(tree.remove(&5), None);
/// assert_eq!(tree.len(), 6);
/// ```
#[derive(Clone)]
pub struct Tree<K> {
    slots: Vec<Slot<K>>,
    free: Option<NodeId>,
    root: Option<NodeId>,
    count: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            root: None,
            count: 0,
        }
    }

    /// The number of keys currently in the tree.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Looks up a node by handle. Returns `None` for handles whose slot is
    /// currently vacant (e.g. a handle held across a `remove`).
    pub fn get(&self, id: NodeId) -> Option<&Node<K>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// The key stored in the given node, if the handle is live.
    pub fn key(&self, id: NodeId) -> Option<&K> {
        self.get(id).map(Node::key)
    }

    /// Whether the given node is the tree's root.
    pub fn is_root(&self, id: NodeId) -> bool {
        self.root == Some(id)
    }

    /// Whether the given node is external, i.e. a leaf with no children.
    pub fn is_external(&self, id: NodeId) -> bool {
        self.node(id).children_count() == 0
    }

    /// Whether the given node is internal, i.e. has at least one child.
    pub fn is_internal(&self, id: NodeId) -> bool {
        !self.is_external(id)
    }

    /// Removes every key and releases the arena's storage.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.root = None;
        self.count = 0;
    }

    /// The minimum of the subtree rooted at `node`: follow left links until
    /// there are none. An absent input yields an absent output.
    pub fn minimum(&self, node: Option<NodeId>) -> Option<NodeId> {
        let mut current = node?;
        while let Some(left) = self.node(current).left {
            current = left;
        }
        Some(current)
    }

    /// The maximum of the subtree rooted at `node`: follow right links until
    /// there are none. An absent input yields an absent output.
    pub fn maximum(&self, node: Option<NodeId>) -> Option<NodeId> {
        let mut current = node?;
        while let Some(right) = self.node(current).right {
            current = right;
        }
        Some(current)
    }

    /// Borrows a node that is known to be live. Internal links always are;
    /// feeding a stale public handle in here is a caller bug.
    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {:?}", id),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {:?}", id),
        }
    }

    fn alloc(&mut self, node: Node<K>) -> NodeId {
        match self.free {
            Some(id) => {
                let slot = mem::replace(&mut self.slots[id.0], Slot::Occupied(node));
                self.free = match slot {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("occupied slot {:?} on free list", id),
                };
                id
            }
            None => {
                let id = NodeId(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                id
            }
        }
    }

    /// Takes the node out of its slot and pushes the slot on the free list.
    fn dealloc(&mut self, id: NodeId) -> Node<K> {
        let slot = mem::replace(
            &mut self.slots[id.0],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(id);
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("deallocating vacant slot {:?}", id),
        }
    }

    /// Re-points whichever of `parent`'s child links holds `old` to `new`.
    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: Option<NodeId>) {
        let node = self.node_mut(parent);
        if node.left == Some(old) {
            node.left = new;
        } else {
            debug_assert_eq!(node.right, Some(old));
            node.right = new;
        }
    }
}

impl<K: Ord> Tree<K> {
    /// Finds the node holding `key`, descending from the root. Absence is
    /// the result, not an error: callers check for `None`.
    ///
    /// Runs in `O(depth)`: `O(log n)` on average, `O(n)` on a degenerate
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let id = tree.insert(2);
    ///
    /// assert_eq!(tree.search(&2), Some(id));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root?;
        loop {
            let node = self.node(current);
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(current),
                Ordering::Less => current = node.left?,
                Ordering::Greater => current = node.right?,
            }
        }
    }

    /// Whether `key` is present in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Inserts `key` and returns the node now holding it.
    ///
    /// If the key is already present the existing node is returned and the
    /// tree is left untouched; duplicates merge rather than erroring. A
    /// fresh insert writes exactly one parent child-link and bumps the
    /// count.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let first = tree.insert(7);
    /// let again = tree.insert(7);
    ///
    /// assert_eq!(first, again);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> NodeId {
        let mut current = match self.root {
            Some(root) => root,
            None => {
                let id = self.alloc(Node::new(key, None));
                self.root = Some(id);
                self.count += 1;
                return id;
            }
        };

        loop {
            match key.cmp(&self.node(current).key) {
                Ordering::Less => match self.node(current).left {
                    Some(left) => current = left,
                    None => {
                        let id = self.alloc(Node::new(key, Some(current)));
                        self.node_mut(current).left = Some(id);
                        self.count += 1;
                        return id;
                    }
                },
                Ordering::Greater => match self.node(current).right {
                    Some(right) => current = right,
                    None => {
                        let id = self.alloc(Node::new(key, Some(current)));
                        self.node_mut(current).right = Some(id);
                        self.count += 1;
                        return id;
                    }
                },
                Ordering::Equal => return current,
            }
        }
    }

    /// Removes `key` from the tree, returning it by value. Returns `None`
    /// (and changes nothing) when the key is absent.
    ///
    /// Structurally there are three cases, classified by how many children
    /// the doomed node has:
    ///
    /// * **leaf** — detach it from its parent (or empty the tree when it is
    ///   the root);
    /// * **one child** — splice the child into its position;
    /// * **two children** — promote the in-order successor, the minimum of
    ///   the right subtree. The successor never has a left child, so it can
    ///   be unhooked by splicing its own right child upward, then takes over
    ///   all of the doomed node's links.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8] {
    ///     tree.insert(key);
    /// }
    ///
    /// // 5 has two children; its successor 8 is promoted to the root.
    /// assert_eq!(tree.remove(&5), Some(5));
    /// let root = tree.root().unwrap();
    /// assert_eq!(tree.key(root), Some(&8));
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let id = self.search(key)?;
        let parent = self.node(id).parent;

        match (self.node(id).left, self.node(id).right) {
            (None, None) => match parent {
                Some(p) => self.replace_child(p, id, None),
                // Sole root leaf: there is no parent link to clear.
                None => self.root = None,
            },
            (Some(child), None) | (None, Some(child)) => {
                self.node_mut(child).parent = parent;
                match parent {
                    Some(p) => self.replace_child(p, id, Some(child)),
                    None => self.root = Some(child),
                }
            }
            (Some(left), Some(right)) => {
                let successor = match self.minimum(Some(right)) {
                    Some(successor) => successor,
                    None => unreachable!("non-empty subtree has a minimum"),
                };

                if successor != right {
                    // Unhook the successor from deeper in the right subtree.
                    // It has no left child, so its right child (if any)
                    // takes its place under its old parent.
                    let successor_parent = match self.node(successor).parent {
                        Some(p) => p,
                        None => unreachable!("successor below {:?} has a parent", id),
                    };
                    let successor_right = self.node(successor).right;
                    self.replace_child(successor_parent, successor, successor_right);
                    if let Some(r) = successor_right {
                        self.node_mut(r).parent = Some(successor_parent);
                    }

                    self.node_mut(successor).right = Some(right);
                    self.node_mut(right).parent = Some(successor);
                }
                // When the successor IS the direct right child its right
                // link already points the right way; only the left subtree
                // and the parent hookup remain.

                self.node_mut(successor).left = Some(left);
                self.node_mut(left).parent = Some(successor);

                self.node_mut(successor).parent = parent;
                match parent {
                    Some(p) => self.replace_child(p, id, Some(successor)),
                    None => self.root = Some(successor),
                }
            }
        }

        self.count -= 1;
        Some(self.dealloc(id).key)
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.count)
            .field("root", &self.root.map(|id| DebugNode { tree: self, id }))
            .finish()
    }
}

/// Renders the logical structure of a subtree rather than the arena layout.
struct DebugNode<'a, K> {
    tree: &'a Tree<K>,
    id: NodeId,
}

impl<'a, K: fmt::Debug> fmt::Debug for DebugNode<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.tree.node(self.id);
        let child = |id: Option<NodeId>| {
            id.map(|id| DebugNode {
                tree: self.tree,
                id,
            })
        };
        f.debug_struct("Node")
            .field("key", &node.key)
            .field("left", &child(node.left))
            .field("right", &child(node.right))
            .finish()
    }
}

#[cfg(test)]
impl<K: Ord> Tree<K> {
    /// Full-structure audit used by tests after every mutation: parent and
    /// child links must agree, keys must be ordered, and the count must
    /// match what is reachable from the root.
    pub(crate) fn check_invariants(&self) {
        let mut reachable = 0;
        if let Some(root) = self.root {
            assert!(self.node(root).parent.is_none(), "root has a parent");
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                reachable += 1;
                let node = self.node(id);
                for child in node.left.iter().chain(node.right.iter()) {
                    assert_eq!(
                        self.node(*child).parent,
                        Some(id),
                        "child's parent link disagrees with parent's child link"
                    );
                    stack.push(*child);
                }
            }
        }
        assert_eq!(reachable, self.count, "count drifted from reachable nodes");

        let keys: Vec<&K> = self.inorder().collect();
        assert!(
            keys.windows(2).all(|pair| pair[0] < pair[1]),
            "inorder keys not strictly ascending"
        );
    }
}

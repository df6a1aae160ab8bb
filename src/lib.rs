//! An arena-backed Binary Search Tree (BST) with parent links,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## Representation
//!
//! Rather than `Box`ing children and juggling raw parent pointers, nodes here
//! live in a slab-style arena owned by the [`Tree`]. Links between nodes
//! (including the non-owning parent back-reference) are [`NodeId`] indices
//! into that arena, so the whole structure is safe code with no reference
//! counting.
//!
//! This tree does **not** rebalance itself. Inserting keys in sorted order
//! degrades it to a linked list; that trade-off is deliberate, the point is
//! the plain BST mutation logic.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! let id = tree.insert(1);
//! assert_eq!(tree.search(&1), Some(id));
//!
//! // Inserting an existing key returns the node that already holds it.
//! assert_eq!(tree.insert(1), id);
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a node returns its key.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.search(&1), None);
//! ```

#![deny(missing_docs)]

pub mod iter;
pub mod node;
pub mod tree;

mod render;


pub use node::{Node, NodeId};
pub use tree::Tree;

//! This crate exposes a plain, unbalanced Binary Search Tree (BST) of unique keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the longest path
//! from the root `Node` to a leaf `Node`). The [`Tree`] here never rebalances
//! itself, so its height depends entirely on insertion order: sorted input
//! gives a tree as tall as it has keys. For that reason nothing in this crate
//! recurses - every walk keeps its own stack.
//!
//! Keys only need to be [`Ord`]. Floating point keys go through [`Number`],
//! which refuses `NaN` and the infinities.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::from([26, 82, 16, 92, 33]);
//!
//! assert_eq!(tree.inorder(), [16, 26, 33, 82, 92]);
//! assert_eq!(tree.find_deepest().values, [33, 92]);
//!
//! tree.remove(&33);
//! assert!(tree.find(&33).is_none());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod key;
mod node;
pub mod tree;


pub use key::{KeyError, Number};
pub use node::Node;
pub use tree::{Deepest, Tree};

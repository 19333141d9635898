//! This crate exposes an ordered set of `i32` keys backed by an unbalanced
//! Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
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
//! Searching for a key takes `O(height)`. [`OrderedTree`] does no balancing
//! at all, so inserting keys in sorted order produces a tree whose height is
//! the number of keys. Sorted iteration falls out of the invariants by visiting
//! the left subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree: OrderedTree = [3, 1, 2, 5, 6, 4, 0].into_iter().collect();
//! assert_eq!(tree.to_string(), "[0, 1, 2, 3, 4, 5, 6]");
//!
//! // Keys are unique.
//! assert!(!tree.insert(3));
//! assert_eq!(tree.size(), 7);
//!
//! assert_eq!(tree.remove(3), Some(3));
//! assert_eq!(tree.remove(3), None);
//! assert_eq!(tree.to_string(), "[0, 1, 2, 4, 5, 6]");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]
#![forbid(unsafe_code)]

mod error;
mod render;
pub mod tree;


pub use error::InvalidArgument;
pub use tree::OrderedTree;

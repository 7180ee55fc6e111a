//! This crate exposes an unbalanced Binary Search Tree (BST) built out of
//! recursive, owning nodes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because both comparisons are strict, a value can be stored at most once.
//!
//! Searching for values in the tree takes `O(height)`. Nothing here rebalances
//! the tree so inserting values in sorted order builds a chain whose height is
//! `O(N)`. BSTs also naturally support sorted rendering by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! [`node::Node`] is the subtree itself and does all of the work. [`tree::Tree`]
//! wraps an optional root so that an empty tree can be represented.
//!
//! # Examples
//!
//! ```
//! use bstnode::tree::Tree;
//!
//! let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.depth(), Some(2));
//! assert_eq!(tree.to_string(), "[1, 3, 4, 5, 7, 8, 9]");
//!
//! tree.remove(&5);
//! assert_eq!(tree.to_string(), "[1, 3, 4, 7, 8, 9]");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod node;
pub mod tree;


pub use error::OrderError;

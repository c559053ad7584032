//! A Binary Search Tree over unique, totally ordered values, with explicit
//! rebalancing and the four classic traversals.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are defined recursively using
//! the notion of a [`Node`]. A `Node` stores a value and may have a left and a
//! right child `Node`. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, where `height` is the number of nodes on the
//! longest path from the root down to a leaf. [`Tree::from_values`] and
//! [`Tree::rebalance`] build a tree whose height is `O(lg N)`, but plain
//! [`Tree::insert`] and [`Tree::delete`] never restructure, so the height can
//! drift up to `N` until the tree is rebalanced again.
//!
//! ## Traversals
//!
//! Values can be read back in order (sorted), pre-order, post-order or level
//! order, either all at once as a `Vec` or lazily through the iterators in
//! [`iter`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
mod node;
mod pretty;
mod tree;

#[cfg(test)]
mod test;

pub use node::Node;
pub use tree::Tree;

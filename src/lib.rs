//! This crate is an unbalanced Binary Search Tree (BST) of integer keys along
//! with two ways of drawing it and a small interactive menu for poking at it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` where `height` is the longest path
//! from the root `Node` to a leaf `Node`. The [`Tree`] here does no balancing
//! so inserting keys in sorted order builds a chain whose height is one less
//! than the number of keys. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Modules
//!
//! * [`tree`] holds the tree itself.
//! * [`render`] draws a tree as ASCII art.
//! * [`cli`] is the menu driver behind the `bst-explorer` binary.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cli;
pub mod error;
pub mod render;
pub mod tree;

pub use error::{Error, Result};
pub use tree::{Key, Node, Order, Tree};

//! This crate exposes an unbalanced, integer-keyed Binary Search Tree (BST)
//! along with the classic recursion exercises that go with one, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure built recursively out of
//! `Node`s. Each `Node` stores a key and may have a left and a right child.
//! The invariant maintained by [`Tree::insert`] is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than or equal to its own key (duplicates are routed left).
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    strictly greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Nothing rebalances the tree, so inserting keys in sorted order produces a
//! tree whose height equals its size. Some operations ([`Tree::mirror`] for
//! instance) deliberately break the invariant; [`Tree::is_bst_naive`] and
//! [`Tree::is_bst_linear`] check it after the fact.
//!
//! ## Linked list
//!
//! [`linked_list`] holds a small singly linked list that can be parsed from
//! strings such as `"[1, 2, 3]"` and rendered back as `1->2->3`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod count;
mod error;
pub mod iter;
pub mod linked_list;
mod tree;


pub use count::count_trees;
pub use error::{ParseListError, TreeError};
pub use tree::Tree;

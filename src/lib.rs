//! This crate exposes three classic pointer-based data structures
//! mostly for educational purposes: a singly linked list, a stack, and
//! an unbalanced Binary Search Tree (BST).
//!
//! ## Owning links
//!
//! Every structure here is a chain or a tree of `Node`s. Each `Node` is
//! owned by exactly one link: the `next` link of its predecessor in a
//! list, the `left` or `right` link of its parent in a tree, or the
//! container's own head/root slot. Unlinking a `Node` therefore frees it,
//! and there are no cycles to leak.
//!
//! ## Binary Search Tree
//!
//! The most important invariants of the BST in [`tree`] are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! Unlike most BSTs, equal values are kept as separate `Node`s (they go
//! right) and nothing keeps the tree balanced. The height of the tree can
//! therefore be as large as the number of values in it, which is why
//! nothing in this crate recurses over a structure.
//!
//! ## Errors
//!
//! Operations that can be rejected return [`Error`]. A rejected operation
//! never modifies its structure.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod linked_list;
pub mod stack;
pub mod tree;

pub use error::Error;
pub use linked_list::LinkedList;
pub use stack::Stack;
pub use tree::Tree;

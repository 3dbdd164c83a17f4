//! An unbalanced Binary Search Tree. Values smaller than a node go to its left and everything
//! else, including duplicates, goes to its right. Nothing rebalances the tree, so inserting sorted
//! input produces a tree as deep as it is long. Every operation here walks the tree with a loop or
//! an explicit stack instead of recursing, so that shape is fine.
//!
//! # Examples
//!
//! ```
//! use linked_ds::{Error, Tree};
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9].iter() {
//!     tree.insert(*x);
//! }
//!
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![5, 3, 1, 4, 8, 7, 9]);
//! assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), vec![1, 4, 3, 7, 9, 8, 5]);
//!
//! // Deleting the root promotes its in-order successor.
//! assert_eq!(tree.delete(&5), Ok(5));
//! assert_eq!(tree.root().map(|root| *root.value()), Some(7));
//!
//! // Deleting something that isn't there is reported.
//! assert_eq!(tree.delete(&5), Err(Error::NotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use log::{debug, trace};

use crate::Error;

type Link<T> = Option<Box<Node<T>>>;

/// A single value in a [`Tree`] along with its two subtrees. `Node`s are only handed out by
/// reference so callers can walk the structure of a tree (to draw it, for example).
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the subtree holding values less than this node's value.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the subtree holding values greater than or equal to this node's value.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level = vec![self];
        let mut next_level = Vec::new();
        while !level.is_empty() {
            height += 1;
            for node in level.drain(..) {
                next_level.extend(node.left());
                next_level.extend(node.right());
            }
            mem::swap(&mut level, &mut next_level);
        }
        height
    }
}

/// A Binary Search Tree. This can be used for inserting, searching for, and deleting values, and
/// for walking them in order, pre-order, or post-order.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Inserts `value` as a new leaf. A value equal to one already in the tree is placed in that
    /// node's right subtree, so each duplicate gets its own node.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_ds::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 2, 2]);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.right().map(|n| *n.value()), Some(2));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *link = Some(Node::new(value));
        self.len += 1;
    }

    /// Finds the first node on the search path whose value equals `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_ds::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut link = self.root();
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether any node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value).is_some()
    }

    /// Deletes the first node found holding `value` and returns the stored value.
    ///
    /// A node with at most one child is replaced by that child. A node with two children takes
    /// the value of its in-order successor (the leftmost node of its right subtree) and the
    /// successor's node is removed instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no node holds `value`. The tree is not modified in that
    /// case.
    pub fn delete(&mut self, value: &T) -> Result<T, Error>
    where
        T: Ord,
    {
        let slot = slot_mut(&mut self.root, value);
        let removed = unlink(slot).ok_or_else(|| {
            debug!("delete of a value that isn't in the tree");
            Error::NotFound
        })?;

        self.len -= 1;
        Ok(removed)
    }

    /// Walks the values in sorted order: left subtree, node, right subtree.
    pub fn in_order(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }

    /// Walks the values node first, then the left subtree, then the right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Walks the values left subtree first, then the right subtree, then the node.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self.root().map(|root| (root, false)).into_iter().collect(),
        }
    }
}

/// Descends from `link` by comparison and returns the slot holding the first node equal to
/// `value`, or the empty slot where the search ran out.
fn slot_mut<'a, T: Ord>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    loop {
        let ordering = match link.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => return link,
        };

        link = match (ordering, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, found) => return found,
        };
    }
}

/// Removes the node in `slot` from the tree and returns its value. `None` if the slot is empty.
fn unlink<T>(slot: &mut Link<T>) -> Option<T> {
    let node = slot.as_mut()?;
    if node.left.is_some() {
        if let Some(successor) = take_leftmost(&mut node.right) {
            trace!("node has two children, promoting its in-order successor");
            return Some(mem::replace(&mut node.value, successor));
        }
    }

    trace!("node has at most one child, splicing it out");
    let mut node = slot.take()?;
    *slot = node.left.take().or_else(|| node.right.take());
    Some(node.value)
}

/// Unlinks the leftmost node of the subtree in `link`, promoting its right child into its place.
fn take_leftmost<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = match link {
            Some(node) => &mut node.left,
            None => return None,
        };
    }

    let Node { value, right, .. } = *link.take()?;
    *link = right;
    Some(value)
}

impl<T: Clone + Ord> Clone for Tree<T> {
    /// Re-inserting the values in pre-order rebuilds the same shape.
    fn clone(&self) -> Self {
        self.pre_order().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order()).finish()
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// In-order iterator over a [`Tree`]. Created by [`Tree::in_order`].
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

/// Pre-order iterator over a [`Tree`]. Created by [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.value)
    }
}

/// Post-order iterator over a [`Tree`]. Created by [`Tree::post_order`].
pub struct PostOrder<'a, T> {
    /// Each node is pushed once unexpanded and, once its children are queued, again expanded.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.value);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

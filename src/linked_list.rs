//! A singly linked list with positional insertion, removal, and lookup. Every node is owned by
//! its predecessor (or by the list's head slot for the first one) so the whole chain is freed as
//! soon as it is unlinked.
//!
//! # Examples
//!
//! ```
//! use linked_ds::{Error, LinkedList};
//!
//! let mut list = LinkedList::new();
//! list.append(10);
//! list.append(30);
//! list.insert_at_position(20, 1).unwrap();
//! assert_eq!(list.to_string(), "10 -> 20 -> 30 -> None");
//!
//! // Positions are zero based.
//! assert_eq!(list.find_value(&30), Some(2));
//! assert_eq!(list.find_position(0), Some(&10));
//!
//! // Asking for a position past the end leaves the list alone.
//! assert_eq!(
//!     list.insert_at_position(40, 7),
//!     Err(Error::OutOfBounds { position: 7, len: 3 })
//! );
//! assert_eq!(list.len(), 3);
//! ```

use std::fmt;
use std::iter::FromIterator;

use log::debug;

use crate::Error;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

/// An ordered sequence of values addressable by zero-based position.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink one node at a time so a long list doesn't recurse through `Box`'s drop.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> LinkedList<T> {
    /// Generates a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// The number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The value at the head of the list.
    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Attaches `value` after the current tail. This walks the whole list.
    pub fn append(&mut self, value: T) {
        let tail = self.link_mut(self.len);
        *tail = Some(Node::new(value, None));
        self.len += 1;
    }

    /// Makes `value` the new head of the list.
    pub fn insert_at_start(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::new(value, next));
        self.len += 1;
    }

    /// Splices `value` into the list so that it ends up at `position`. Position `0` is the same
    /// as [`insert_at_start`][Self::insert_at_start] and position `len()` is the same as
    /// [`append`][Self::append].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `position` is greater than the length of the list. The
    /// list is not modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_ds::LinkedList;
    ///
    /// let mut list: LinkedList<_> = vec![1, 3].into_iter().collect();
    /// list.insert_at_position(2, 1).unwrap();
    /// list.insert_at_position(4, 3).unwrap();
    /// assert!(list.insert_at_position(9, 9).is_err());
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert_at_position(&mut self, value: T, position: usize) -> Result<(), Error> {
        self.check_position(position)?;

        let link = self.link_mut(position);
        let next = link.take();
        *link = Some(Node::new(value, next));
        self.len += 1;
        Ok(())
    }

    /// Unlinks the head and returns its value. Does nothing on an empty list.
    pub fn remove_first(&mut self) -> Option<T> {
        self.unlink(0)
    }

    /// Unlinks the tail and returns its value. Does nothing on an empty list.
    pub fn remove_last(&mut self) -> Option<T> {
        match self.len {
            0 => None,
            len => self.unlink(len - 1),
        }
    }

    /// Unlinks the node at `position` and returns its value.
    ///
    /// Position `0` is the same as [`remove_first`][Self::remove_first], so it is a no-op on an
    /// empty list. Removing at `position == len()` finds a predecessor with nothing after it and
    /// quietly removes nothing, returning `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `position` is greater than the length of the list. The
    /// list is not modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_ds::LinkedList;
    ///
    /// let mut list: LinkedList<_> = vec![10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(list.remove_at_position(1), Ok(Some(20)));
    /// assert_eq!(list.remove_at_position(2), Ok(None));
    /// assert!(list.remove_at_position(5).is_err());
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 30]);
    /// ```
    pub fn remove_at_position(&mut self, position: usize) -> Result<Option<T>, Error> {
        self.check_position(position)?;
        Ok(self.unlink(position))
    }

    /// Unlinks the first node holding `value` and returns the stored value. Nothing happens if no
    /// node holds it.
    pub fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let position = self.find_value(value)?;
        self.unlink(position)
    }

    /// The zero-based position of the first node holding `value`, or `None` if there is none.
    pub fn find_value(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == value)
    }

    /// The value at `position`, or `None` if the list is too short.
    pub fn find_position(&self, position: usize) -> Option<&T> {
        self.iter().nth(position)
    }

    /// Whether any node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find_value(value).is_some()
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    fn check_position(&self, position: usize) -> Result<(), Error> {
        if position > self.len {
            debug!(
                "rejecting position {} in a list of length {}",
                position, self.len
            );
            return Err(Error::OutOfBounds {
                position,
                len: self.len,
            });
        }

        Ok(())
    }

    /// Follows `steps` links from the head and returns the slot found there. Stops early at the
    /// empty slot after the tail.
    fn link_mut(&mut self, steps: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..steps {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    /// Removes the node in the slot `position` links from the head, promoting its successor into
    /// that slot.
    fn unlink(&mut self, position: usize) -> Option<T> {
        let link = self.link_mut(position);
        let Node { value, next } = *link.take()?;
        *link = next;
        self.len -= 1;
        Some(value)
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `a -> b -> None`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        f.write_str("None")
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut tail = self.link_mut(self.len);
        for value in iter {
            let node = tail.insert(Node::new(value, None));
            tail = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// Borrowing iterator over a [`LinkedList`], head to tail.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`LinkedList`], head to tail.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

//! A LIFO stack. The top of the stack is the head of a [`LinkedList`], so `push`, `pop`, and
//! `peek` never walk the chain.
//!
//! # Examples
//!
//! ```
//! use linked_ds::{Error, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//!
//! assert_eq!(stack.peek(), Ok(&3));
//! assert_eq!(stack.pop(), Ok(3));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert_eq!(stack.pop(), Err(Error::EmptyStack));
//! ```

use std::fmt;
use std::iter::FromIterator;

use log::debug;

use crate::linked_list::{self, LinkedList};
use crate::Error;

/// A last-in, first-out sequence of values.
pub struct Stack<T> {
    items: LinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self {
            items: LinkedList::new(),
        }
    }

    /// Puts `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.insert_at_start(value);
    }

    /// Removes the top value and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T, Error> {
        self.items.remove_first().ok_or_else(|| {
            debug!("pop on an empty stack");
            Error::EmptyStack
        })
    }

    /// Returns the top value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if the stack holds nothing.
    pub fn peek(&self) -> Result<&T, Error> {
        self.items.first().ok_or_else(|| {
            debug!("peek on an empty stack");
            Error::EmptyStack
        })
    }

    /// Removes the first occurrence of `value`, scanning down from the top, and returns it. This
    /// can reach below the top so it does not respect LIFO order. Nothing happens if the stack
    /// doesn't hold `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_ds::Stack;
    ///
    /// let mut stack: Stack<_> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(stack.delete(&2), Some(2));
    /// assert_eq!(stack.delete(&2), None);
    ///
    /// assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 1]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.items.remove_value(value)
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of values on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.items.iter())
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Pushes each value in turn, so the last one ends up on top.
impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Stack`], top to bottom.
pub struct Iter<'a, T>(linked_list::Iter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

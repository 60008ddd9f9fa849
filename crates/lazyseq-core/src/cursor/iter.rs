// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Forward Cursor over Iterators
//!
//! `IterCursor<I>` adapts a standard Rust iterator to the cursor model. It
//! eagerly pulls one element (the "head") so it can be dereferenced
//! repeatedly without consuming anything, and it counts how many steps it
//! has taken so two cursors of the same sequence can be compared.
//!
//! ## Equality
//!
//! - Two exhausted cursors are always equal; this is what lets a cursor that
//!   ran off the end compare equal to the end sentinel built by
//!   `IterCursor::exhausted`.
//! - Two live cursors are equal when they have taken the same number of
//!   steps. They must stem from the same sequence for this to be meaningful.
//!
//! ## Usage
//!
//! ```rust
//! use lazyseq_core::cursor::Cursor;
//! use lazyseq_core::cursor::iter::IterCursor;
//!
//! let mut cursor = IterCursor::new("abc".chars());
//! let end = IterCursor::exhausted("".chars());
//!
//! let mut seen = String::new();
//! while cursor != end {
//!     seen.push(cursor.get());
//!     cursor.step();
//! }
//! assert_eq!(seen, "abc");
//! ```

use crate::cursor::{Cursor, Forward};

/// A forward-only cursor driven by an iterator.
pub struct IterCursor<I>
where
    I: Iterator,
{
    iter: I,
    head: Option<I::Item>,
    steps: usize,
}

impl<I> IterCursor<I>
where
    I: Iterator,
{
    /// Creates a cursor positioned at the first element of `iter`.
    #[inline]
    pub fn new(mut iter: I) -> Self {
        let head = iter.next();
        Self {
            iter,
            head,
            steps: 0,
        }
    }

    /// Creates an end sentinel. The remaining contents of `iter` are never
    /// observed.
    #[inline]
    pub fn exhausted(iter: I) -> Self {
        Self {
            iter,
            head: None,
            steps: 0,
        }
    }

    /// Returns `true` if there is no element under the cursor.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of steps taken since creation.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            head: self.head.clone(),
            steps: self.steps,
        }
    }
}

impl<I> std::fmt::Debug for IterCursor<I>
where
    I: Iterator,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterCursor")
            .field("head", &self.head)
            .field("steps", &self.steps)
            .finish()
    }
}

impl<I> PartialEq for IterCursor<I>
where
    I: Iterator,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (None, None) => true,
            (Some(_), Some(_)) => self.steps == other.steps,
            _ => false,
        }
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Category = Forward;
    type Item = I::Item;

    #[inline]
    fn get(&self) -> Self::Item {
        self.head
            .clone()
            .expect("IterCursor: dereferenced a cursor that is at the end of its sequence")
    }

    #[inline]
    fn step(&mut self) {
        if self.head.is_some() {
            self.head = self.iter.next();
            self.steps += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::LinkedList;

    #[test]
    fn test_walks_all_elements() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        let mut cursor = IterCursor::new(list.iter());
        let end = IterCursor::exhausted(list.iter());

        let mut out = Vec::new();
        while cursor != end {
            out.push(*cursor.get());
            cursor.step();
        }
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(cursor.steps(), 3);
    }

    #[test]
    fn test_empty_iterator_is_exhausted() {
        let cursor = IterCursor::new(std::iter::empty::<u8>());
        assert!(cursor.is_exhausted());
        assert!(cursor == IterCursor::exhausted(std::iter::empty::<u8>()));
    }

    #[test]
    fn test_step_at_end_is_noop() {
        let mut cursor = IterCursor::new(0..1);
        cursor.step();
        assert!(cursor.is_exhausted());
        cursor.step();
        assert_eq!(cursor.steps(), 1);
    }

    #[test]
    fn test_live_cursors_compare_by_steps() {
        let a = IterCursor::new(0..5);
        let mut b = a.clone();
        assert!(a == b);
        b.step();
        assert!(a != b);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = IterCursor::new("xyz".chars());
        let b = a.clone();
        a.step();
        assert_eq!(a.get(), 'y');
        assert_eq!(b.get(), 'x');
    }

    #[test]
    #[should_panic(expected = "dereferenced a cursor that is at the end")]
    fn test_get_at_end_panics() {
        let cursor = IterCursor::exhausted(0..0);
        let _ = cursor.get();
    }
}

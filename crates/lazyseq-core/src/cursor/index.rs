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

//! Random-access cursor over `usize`-indexable storage.
//!
//! `IndexCursor` is a shared reference to the storage plus an offset. It is
//! `Copy`, compares by storage identity and offset, and yields references
//! that live as long as the storage borrow.

use crate::cursor::{Cursor, RandomAccess, RandomAccessCursor};
use std::ops::Index;

/// A random-access cursor at offset `position` of the indexable `S`.
///
/// Dereferencing goes through `S`'s `Index<usize>` implementation, so a
/// cursor at or past the end panics with the container's own bounds-check
/// message instead of reading out of bounds.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::cursor::{Cursor, RandomAccessCursor};
/// # use lazyseq_core::cursor::index::IndexCursor;
/// let data = [1, 2, 3, 4, 5];
/// let mut cursor = IndexCursor::new(&data[..], 0);
/// let end = IndexCursor::new(&data[..], data.len());
///
/// cursor.jump(3);
/// assert_eq!(*cursor.get(), 4);
/// assert_eq!(cursor.distance_to(&end), 2);
/// ```
pub struct IndexCursor<'a, S>
where
    S: ?Sized,
{
    storage: &'a S,
    position: usize,
}

impl<'a, S> IndexCursor<'a, S>
where
    S: ?Sized,
{
    /// Creates a cursor at `position` within `storage`.
    #[inline]
    pub const fn new(storage: &'a S, position: usize) -> Self {
        Self { storage, position }
    }

    /// Returns the offset of this cursor.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the storage this cursor points into.
    #[inline]
    pub const fn storage(&self) -> &'a S {
        self.storage
    }
}

impl<S> Clone for IndexCursor<'_, S>
where
    S: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for IndexCursor<'_, S> where S: ?Sized {}

impl<S> PartialEq for IndexCursor<'_, S>
where
    S: ?Sized,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.storage, other.storage) && self.position == other.position
    }
}

impl<S> Eq for IndexCursor<'_, S> where S: ?Sized {}

impl<S> std::fmt::Debug for IndexCursor<'_, S>
where
    S: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexCursor")
            .field("position", &self.position)
            .finish()
    }
}

impl<'a, S> Cursor for IndexCursor<'a, S>
where
    S: Index<usize> + ?Sized,
    S::Output: 'a,
{
    type Category = RandomAccess;
    type Item = &'a S::Output;

    #[inline]
    fn get(&self) -> Self::Item {
        &self.storage[self.position]
    }

    #[inline]
    fn step(&mut self) {
        self.position += 1;
    }
}

impl<'a, S> RandomAccessCursor for IndexCursor<'a, S>
where
    S: Index<usize> + ?Sized,
    S::Output: 'a,
{
    #[inline]
    fn distance_to(&self, end: &Self) -> usize {
        end.position.saturating_sub(self.position)
    }

    #[inline]
    fn jump(&mut self, n: usize) {
        self.position += n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_get_and_step() {
        let data = vec!['a', 'b', 'c'];
        let mut cursor = IndexCursor::new(data.as_slice(), 0);
        assert_eq!(*cursor.get(), 'a');
        cursor.step();
        assert_eq!(*cursor.get(), 'b');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_equality_requires_same_storage() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        let ca = IndexCursor::new(&a[..], 1);
        let cb = IndexCursor::new(&b[..], 1);
        assert_ne!(ca, cb);
        assert_eq!(ca, IndexCursor::new(&a[..], 1));
    }

    #[test]
    fn test_distance_to_before_is_zero() {
        let data = [0_u8; 4];
        let late = IndexCursor::new(&data[..], 3);
        let early = IndexCursor::new(&data[..], 1);
        assert_eq!(early.distance_to(&late), 2);
        assert_eq!(late.distance_to(&early), 0);
    }

    #[test]
    fn test_deque_storage() {
        let mut deque: VecDeque<i32> = VecDeque::new();
        deque.push_back(2);
        deque.push_back(3);
        deque.push_front(1);

        let mut cursor = IndexCursor::new(&deque, 0);
        cursor.jump(2);
        assert_eq!(*cursor.get(), 3);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_get_at_end_panics() {
        let data = [1, 2];
        let cursor = IndexCursor::new(&data[..], 2);
        let _ = cursor.get();
    }
}

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

//! # Cursors and Capability Categories
//!
//! A cursor is a position inside a sequence: it can be dereferenced while it
//! is not at the end, stepped forward by one element, and compared with
//! another cursor of the same sequence. A sequence hands out two of them, its
//! begin cursor and its true-end cursor (see `crate::sequence`).
//!
//! Every cursor declares its capability through the associated
//! `Cursor::Category` type:
//!
//! - `Forward`: only single steps are possible. Skipping `n` elements costs
//!   `n` steps and distances must be counted.
//! - `RandomAccess`: the cursor additionally implements
//!   `RandomAccessCursor`, so distances and jumps are O(1).
//!
//! Algorithms such as `crate::advance::advance_bounded` dispatch on the
//! category at compile time; the random-access path never pays for the
//! forward loop and vice versa.
//!
//! ## Submodules
//!
//! - `index`: `IndexCursor`, a random-access cursor over anything indexable
//!   by `usize` (slices, vectors, deques).
//! - `iter`: `IterCursor`, a forward-only cursor over any cloneable iterator.

pub mod index;
pub mod iter;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Forward {}
    impl Sealed for super::RandomAccess {}
}

/// A position within a sequence.
///
/// # Invariants
///
/// - `get` may only be called while the cursor is not equal to the true-end
///   cursor of its sequence.
/// - `step` on a cursor that equals the true end is allowed to do nothing,
///   but callers must not rely on it moving.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::cursor::Cursor;
/// # use lazyseq_core::sequence::Sequence;
/// let data = vec![10, 20, 30];
/// let mut cursor = data.cursor_begin();
/// assert_eq!(*cursor.get(), 10);
/// cursor.step();
/// assert_eq!(*cursor.get(), 20);
/// ```
pub trait Cursor: Clone + PartialEq {
    /// The capability of this cursor, `Forward` or `RandomAccess`.
    type Category: CursorCategory<Self>;

    /// What a dereference yields: a reference into the sequence or a value.
    type Item;

    /// Dereferences the cursor.
    fn get(&self) -> Self::Item;

    /// Moves the cursor to the next position.
    fn step(&mut self);
}

/// A cursor that supports O(1) distance computation and jumps.
pub trait RandomAccessCursor: Cursor {
    /// Returns the number of steps from `self` to `end`, or `0` if `end` lies
    /// before `self`.
    fn distance_to(&self, end: &Self) -> usize;

    /// Moves the cursor `n` positions forward.
    fn jump(&mut self, n: usize);
}

/// Compile-time strategy selected by a cursor's capability category.
///
/// This trait is sealed: `Forward` and `RandomAccess` are the only
/// categories.
pub trait CursorCategory<C>: sealed::Sealed {
    /// A human-readable name used in diagnostics.
    const NAME: &'static str;

    /// Advances `cursor` by at most `n` steps without passing `end`.
    ///
    /// Returns the number of steps actually taken.
    fn advance_bounded(cursor: &mut C, end: &C, n: usize) -> usize;

    /// Returns the number of steps from `first` to `last`.
    fn distance(first: &C, last: &C) -> usize;
}

/// Category of cursors that can only move one element at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Forward {}

/// Category of cursors that implement `RandomAccessCursor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RandomAccess {}

impl<C> CursorCategory<C> for Forward
where
    C: Cursor,
{
    const NAME: &'static str = "Forward";

    #[inline]
    fn advance_bounded(cursor: &mut C, end: &C, n: usize) -> usize {
        let mut taken = 0;
        while taken < n && cursor != end {
            cursor.step();
            taken += 1;
        }
        taken
    }

    #[inline]
    fn distance(first: &C, last: &C) -> usize {
        let mut cursor = first.clone();
        let mut d = 0;
        while cursor != *last {
            cursor.step();
            d += 1;
        }
        d
    }
}

impl<C> CursorCategory<C> for RandomAccess
where
    C: RandomAccessCursor,
{
    const NAME: &'static str = "RandomAccess";

    #[inline]
    fn advance_bounded(cursor: &mut C, end: &C, n: usize) -> usize {
        let remaining = cursor.distance_to(end);
        if remaining < n {
            *cursor = end.clone();
            remaining
        } else {
            cursor.jump(n);
            n
        }
    }

    #[inline]
    fn distance(first: &C, last: &C) -> usize {
        first.distance_to(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{index::IndexCursor, iter::IterCursor};

    fn category_name<C: Cursor>() -> &'static str {
        <C::Category as CursorCategory<C>>::NAME
    }

    #[test]
    fn test_category_names() {
        assert_eq!(category_name::<IndexCursor<'static, [i32]>>(), "RandomAccess");
        assert_eq!(category_name::<IterCursor<std::ops::Range<i32>>>(), "Forward");
    }

    #[test]
    fn test_forward_advance_stops_at_end() {
        let mut cursor = IterCursor::new(0..3);
        let end = IterCursor::exhausted(0..0);

        assert_eq!(Forward::advance_bounded(&mut cursor, &end, 2), 2);
        assert_eq!(cursor.get(), 2);
        assert_eq!(Forward::advance_bounded(&mut cursor, &end, 5), 1);
        assert!(cursor == end);
    }

    #[test]
    fn test_random_access_advance_saturates() {
        let data = [1, 2, 3, 4];
        let mut cursor = IndexCursor::new(&data[..], 1);
        let end = IndexCursor::new(&data[..], data.len());

        assert_eq!(RandomAccess::advance_bounded(&mut cursor, &end, 2), 2);
        assert_eq!(cursor.position(), 3);
        assert_eq!(RandomAccess::advance_bounded(&mut cursor, &end, 9), 1);
        assert!(cursor == end);
    }

    #[test]
    fn test_distance_agrees_between_categories() {
        let data = [5, 6, 7, 8, 9];
        let first = IndexCursor::new(&data[..], 1);
        let last = IndexCursor::new(&data[..], 5);
        assert_eq!(RandomAccess::distance(&first, &last), 4);
        // The forward strategy works for random-access cursors as well.
        assert_eq!(Forward::distance(&first, &last), 4);
    }
}

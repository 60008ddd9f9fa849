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

//! # Sequences
//!
//! A `Sequence` is anything that can hand out a begin cursor and its true-end
//! cursor. Views never ask a sequence for its length or for random access;
//! they only move cursors, so the same view code works for vectors, deques,
//! linked lists, ordered sets, strings and arbitrary cloneable iterators.
//!
//! ## Provided implementations
//!
//! - Random-access (`IndexCursor`): `[T]`, `[T; N]`, `Vec<T>`, `VecDeque<T>`.
//! - Forward-only (`IterCursor`): `LinkedList<T>`, `BTreeSet<T>`, `str`,
//!   `String` (by `char`), and `IterSequence<I>` for any `I: Iterator + Clone`.
//! - Borrowed and boxed sequences (`&S`, `&mut S`, `Box<S>`) forward to `S`,
//!   which is how a view chooses between owning and borrowing its sequence.
//!
//! ## Usage
//!
//! ```rust
//! use lazyseq_core::cursor::Cursor;
//! use lazyseq_core::sequence::Sequence;
//!
//! let words = vec!["alpha", "beta"];
//! let mut cursor = words.cursor_begin();
//! let end = words.cursor_end();
//! while cursor != end {
//!     assert!(cursor.get().len() >= 4);
//!     cursor.step();
//! }
//! ```

use crate::cursor::{Cursor, index::IndexCursor, iter::IterCursor};
use std::collections::{BTreeSet, LinkedList, VecDeque};

/// A container that can be walked with cursors.
pub trait Sequence {
    /// The cursor type handed out by this sequence.
    type Cursor<'a>: Cursor
    where
        Self: 'a;

    /// Returns a cursor at the first element.
    fn cursor_begin(&self) -> Self::Cursor<'_>;

    /// Returns the true-end cursor, one past the last element.
    fn cursor_end(&self) -> Self::Cursor<'_>;
}

impl<T> Sequence for [T] {
    type Cursor<'a>
        = IndexCursor<'a, [T]>
    where
        Self: 'a;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self, 0)
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self, self.len())
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Cursor<'a>
        = IndexCursor<'a, [T]>
    where
        Self: 'a;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        self.as_slice().cursor_begin()
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        self.as_slice().cursor_end()
    }
}

impl<T> Sequence for Vec<T> {
    type Cursor<'a>
        = IndexCursor<'a, [T]>
    where
        Self: 'a;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        self.as_slice().cursor_begin()
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        self.as_slice().cursor_end()
    }
}

impl<T> Sequence for VecDeque<T> {
    type Cursor<'a>
        = IndexCursor<'a, VecDeque<T>>
    where
        Self: 'a;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self, 0)
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self, self.len())
    }
}

impl<T> Sequence for LinkedList<T> {
    type Cursor<'a>
        = IterCursor<std::collections::linked_list::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter())
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        IterCursor::exhausted(self.iter())
    }
}

impl<T> Sequence for BTreeSet<T> {
    type Cursor<'a>
        = IterCursor<std::collections::btree_set::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter())
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        IterCursor::exhausted(self.iter())
    }
}

impl Sequence for str {
    type Cursor<'a> = IterCursor<std::str::Chars<'a>>;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.chars())
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        IterCursor::exhausted(self.chars())
    }
}

impl Sequence for String {
    type Cursor<'a> = IterCursor<std::str::Chars<'a>>;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        self.as_str().cursor_begin()
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        self.as_str().cursor_end()
    }
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        (**self).cursor_begin()
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        (**self).cursor_end()
    }
}

impl<S> Sequence for &mut S
where
    S: Sequence + ?Sized,
{
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        (**self).cursor_begin()
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        (**self).cursor_end()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        (**self).cursor_begin()
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        (**self).cursor_end()
    }
}

/// A forward-only sequence backed by a cloneable iterator.
///
/// Every cursor request clones the iterator, so the wrapped iterator must be
/// cheap to clone and must produce the same elements each time (ranges,
/// `Chars`, map/filter chains over borrowed data, ...).
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::advance::count_to_end;
/// # use lazyseq_core::sequence::IterSequence;
/// let evens = IterSequence::new((0..10).filter(|n| n % 2 == 0));
/// assert_eq!(count_to_end(&evens), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterSequence<I> {
    iter: I,
}

impl<I> IterSequence<I>
where
    I: Iterator + Clone,
{
    /// Wraps `iter` as a forward-only sequence.
    #[inline]
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I> From<I> for IterSequence<I>
where
    I: Iterator + Clone,
{
    #[inline]
    fn from(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<I> Sequence for IterSequence<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor<'a>
        = IterCursor<I>
    where
        Self: 'a;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter.clone())
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        IterCursor::exhausted(self.iter.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<S>(seq: &S) -> Vec<<S::Cursor<'_> as Cursor>::Item>
    where
        S: Sequence + ?Sized,
    {
        let mut cursor = seq.cursor_begin();
        let end = seq.cursor_end();
        let mut out = Vec::new();
        while cursor != end {
            out.push(cursor.get());
            cursor.step();
        }
        out
    }

    #[test]
    fn test_random_access_sequences() {
        let v = vec![1, 2, 3];
        assert_eq!(collect(&v), vec![&1, &2, &3]);

        let a = [4, 5];
        assert_eq!(collect(&a), vec![&4, &5]);
        assert_eq!(collect(&a[..]), vec![&4, &5]);

        let d: VecDeque<_> = [6, 7].into_iter().collect();
        assert_eq!(collect(&d), vec![&6, &7]);
    }

    #[test]
    fn test_forward_sequences() {
        let l: LinkedList<_> = ['a', 'b'].into_iter().collect();
        assert_eq!(collect(&l), vec![&'a', &'b']);

        let s: BTreeSet<_> = [3, 1, 2].into_iter().collect();
        assert_eq!(collect(&s), vec![&1, &2, &3]);

        assert_eq!(collect("hé!"), vec!['h', 'é', '!']);
        assert_eq!(collect(&String::from("ok")), vec!['o', 'k']);
    }

    #[test]
    fn test_empty_sequences() {
        let v: Vec<u8> = Vec::new();
        assert!(collect(&v).is_empty());
        assert!(collect("").is_empty());
        assert!(collect(&LinkedList::<u8>::new()).is_empty());
    }

    #[test]
    fn test_borrowed_and_boxed_forward() {
        let v = vec![9, 8];
        let borrowed = &v;
        assert_eq!(collect(&borrowed), vec![&9, &8]);

        let boxed: Box<[i32]> = vec![1, 2].into_boxed_slice();
        assert_eq!(collect(&boxed), vec![&1, &2]);
    }

    #[test]
    fn test_iter_sequence_restarts() {
        let seq = IterSequence::new((1..=3).map(|n| n * 10));
        assert_eq!(collect(&seq), vec![10, 20, 30]);
        // A second walk sees the same elements.
        assert_eq!(collect(&seq), vec![10, 20, 30]);
    }
}

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

//! # Slice View
//!
//! `Slice` wraps a sequence together with `start:stop:step` bounds and hands
//! out `SliceCursor`s on demand. Nothing is copied: the view walks the
//! underlying sequence with its own cursors and dereferences straight
//! through to them.
//!
//! The underlying sequence does not need random access. Every increment
//! uses `advance_bounded`, which jumps in O(1) over random-access storage
//! and steps element by element over forward-only storage, never passing
//! the true end in either case.
//!
//! ## Termination
//!
//! A slice cursor tracks two positions: the underlying cursor and a logical
//! position clamped to `stop`. Two slice cursors compare equal when either
//! of them matches. This lets iteration end at whichever comes first, the
//! true end of the sequence or the logical `stop`.

use crate::{bounds::SliceBounds, error::SliceError};
use lazyseq_core::{
    advance::advance_bounded,
    cursor::{Cursor, Forward},
    num::{Distance, ceil_div, step_count},
    sequence::Sequence,
};
use std::iter::FusedIterator;

/// A lazy view over the `[start, stop)` range of a sequence with a stride.
///
/// `S` is either an owned sequence (`Vec<T>`, `String`, ...) or a reference
/// to one (`&Vec<T>`, `&str`, ...). The choice is fixed at construction and
/// is part of the type.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_slice::slice::slice;
/// let data: Vec<i32> = (0..10).collect();
/// let view = slice(&data, 2, 8, 2);
/// assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
///
/// let owned = slice(vec!['a', 'b', 'c'], 1, 10, 1);
/// assert_eq!(owned.iter().collect::<String>(), "bc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slice<S, D = isize>
where
    D: Distance,
{
    sequence: S,
    bounds: SliceBounds<D>,
}

impl<S, D> Slice<S, D>
where
    D: Distance,
{
    /// Creates a view over `sequence` with the given bounds.
    ///
    /// # Panics
    ///
    /// Panics if `step <= 0`.
    #[inline]
    pub fn new(sequence: S, start: D, stop: D, step: D) -> Self {
        Self::from_bounds(sequence, SliceBounds::new(start, stop, step))
    }

    /// Creates a view over `sequence`, or returns an error if `step <= 0`.
    #[inline]
    pub fn try_new(sequence: S, start: D, stop: D, step: D) -> Result<Self, SliceError<D>> {
        Ok(Self::from_bounds(
            sequence,
            SliceBounds::try_new(start, stop, step)?,
        ))
    }

    /// Creates a view over `sequence` with already validated bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lazyseq_slice::bounds::SliceBounds;
    /// # use lazyseq_slice::slice::Slice;
    /// let bounds: SliceBounds<i32> = "1::3".parse().unwrap();
    /// let view = Slice::from_bounds("abcdefgh", bounds);
    /// assert_eq!(view.iter().collect::<String>(), "beh");
    /// ```
    #[inline]
    pub const fn from_bounds(sequence: S, bounds: SliceBounds<D>) -> Self {
        Self { sequence, bounds }
    }

    /// Returns the normalized bounds of this view.
    #[inline]
    pub const fn bounds(&self) -> SliceBounds<D> {
        self.bounds
    }

    /// Returns the normalized start position.
    #[inline]
    pub const fn start(&self) -> D {
        self.bounds.start()
    }

    /// Returns the normalized stop position.
    #[inline]
    pub const fn stop(&self) -> D {
        self.bounds.stop()
    }

    /// Returns the step.
    #[inline]
    pub const fn step(&self) -> D {
        self.bounds.step()
    }

    /// Returns a reference to the wrapped sequence.
    #[inline]
    pub const fn sequence(&self) -> &S {
        &self.sequence
    }

    /// Consumes the view and returns the wrapped sequence.
    #[inline]
    pub fn into_inner(self) -> S {
        self.sequence
    }
}

impl<S, D> Slice<S, D>
where
    S: Sequence,
    D: Distance,
{
    /// Returns a cursor at the first element of the view.
    ///
    /// The underlying cursor is advanced by `start`, bounded by the true end
    /// of the sequence. A `start` beyond the end yields a cursor equal to
    /// `end()`.
    pub fn begin(&self) -> SliceCursor<S::Cursor<'_>, D> {
        let end = self.sequence.cursor_end();
        let mut inner = self.sequence.cursor_begin();
        advance_bounded(&mut inner, &end, self.bounds.start());
        SliceCursor {
            inner,
            end,
            current: self.bounds.start(),
            stop: self.bounds.stop(),
            step: self.bounds.step(),
        }
    }

    /// Returns the end cursor of the view.
    ///
    /// Its underlying cursor is the true end of the sequence and its logical
    /// position is `stop`, so it compares equal to any cursor of this view
    /// that has reached either.
    pub fn end(&self) -> SliceCursor<S::Cursor<'_>, D> {
        let end = self.sequence.cursor_end();
        SliceCursor {
            inner: end.clone(),
            end,
            current: self.bounds.stop(),
            stop: self.bounds.stop(),
            step: self.bounds.step(),
        }
    }

    /// Returns an iterator over the elements of the view.
    #[inline]
    pub fn iter(&self) -> Iter<'_, S, D> {
        Iter {
            front: self.begin(),
            back: self.end(),
        }
    }
}

impl<'a, S, D> IntoIterator for &'a Slice<S, D>
where
    S: Sequence,
    D: Distance,
{
    type Item = <S::Cursor<'a> as Cursor>::Item;
    type IntoIter = Iter<'a, S, D>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Slices are sequences themselves, so they can be sliced again.
///
/// ```rust
/// # use lazyseq_slice::slice::slice;
/// let data: Vec<i32> = (0..20).collect();
/// let evens = slice(&data, 0, 20, 2);
/// let view = slice(&evens, 1, 4, 1);
/// assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
/// ```
impl<S, D> Sequence for Slice<S, D>
where
    S: Sequence,
    D: Distance,
{
    type Cursor<'a>
        = SliceCursor<S::Cursor<'a>, D>
    where
        Self: 'a;

    #[inline]
    fn cursor_begin(&self) -> Self::Cursor<'_> {
        self.begin()
    }

    #[inline]
    fn cursor_end(&self) -> Self::Cursor<'_> {
        self.end()
    }
}

/// Creates a view over `sequence` visiting `start, start + step, ...` below
/// `stop`.
///
/// # Panics
///
/// Panics with "Invalid slice" if `step <= 0`.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_slice::slice::slice;
/// let data = [10, 11, 12, 13, 14];
/// assert!(slice(&data, 3, 2, 1).iter().next().is_none());
/// ```
#[inline]
pub fn slice<S, D>(sequence: S, start: D, stop: D, step: D) -> Slice<S, D>
where
    D: Distance,
{
    Slice::new(sequence, start, stop, step)
}

/// Creates a view over the first `stop` elements of `sequence`.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_slice::slice::slice_to;
/// let data = vec![1, 2, 3];
/// assert_eq!(slice_to(&data, 10).iter().count(), 3);
/// ```
#[inline]
pub fn slice_to<S, D>(sequence: S, stop: D) -> Slice<S, D>
where
    D: Distance,
{
    Slice::from_bounds(sequence, SliceBounds::to(stop))
}

/// Creates a view like `slice`, or returns an error if `step <= 0`.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_slice::error::SliceError;
/// # use lazyseq_slice::slice::try_slice;
/// let data = vec![1, 2, 3];
/// assert!(try_slice(&data, 0, 3, 1).is_ok());
/// assert_eq!(
///     try_slice(&data, 0, 3, 0).unwrap_err(),
///     SliceError::NonPositiveStep(0)
/// );
/// ```
#[inline]
pub fn try_slice<S, D>(sequence: S, start: D, stop: D, step: D) -> Result<Slice<S, D>, SliceError<D>>
where
    D: Distance,
{
    Slice::try_new(sequence, start, stop, step)
}

/// The cursor of a `Slice` view.
///
/// Carries the underlying cursor, the underlying true end, the logical
/// position, and the logical `stop` and `step`.
#[derive(Debug, Clone)]
pub struct SliceCursor<C, D>
where
    D: Distance,
{
    inner: C,
    end: C,
    current: D,
    stop: D,
    step: D,
}

impl<C, D> SliceCursor<C, D>
where
    D: Distance,
{
    /// Returns the logical position, which never exceeds `stop`.
    #[inline]
    pub const fn position(&self) -> D {
        self.current
    }

    /// Returns the underlying cursor.
    #[inline]
    pub const fn inner(&self) -> &C {
        &self.inner
    }
}

/// Slice cursors are equal if their underlying cursors are equal OR their
/// logical positions are equal. They differ only when both differ.
impl<C, D> PartialEq for SliceCursor<C, D>
where
    C: PartialEq,
    D: Distance,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner || self.current == other.current
    }
}

impl<C, D> Cursor for SliceCursor<C, D>
where
    C: Cursor,
    D: Distance,
{
    type Category = Forward;
    type Item = C::Item;

    #[inline]
    fn get(&self) -> Self::Item {
        self.inner.get()
    }

    #[inline]
    fn step(&mut self) {
        advance_bounded(&mut self.inner, &self.end, self.step);
        self.current = match self.current.checked_add(&self.step) {
            Some(next) if next < self.stop => next,
            _ => self.stop,
        };
    }
}

/// An iterator over the elements of a `Slice`.
///
/// Created by `Slice::iter` or by iterating over `&Slice`.
pub struct Iter<'a, S, D>
where
    S: Sequence + 'a,
    D: Distance,
{
    front: SliceCursor<S::Cursor<'a>, D>,
    back: SliceCursor<S::Cursor<'a>, D>,
}

impl<'a, S, D> Clone for Iter<'a, S, D>
where
    S: Sequence + 'a,
    D: Distance,
{
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<'a, S, D> std::fmt::Debug for Iter<'a, S, D>
where
    S: Sequence + 'a,
    S::Cursor<'a>: std::fmt::Debug,
    D: Distance,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<'a, S, D> Iterator for Iter<'a, S, D>
where
    S: Sequence + 'a,
    D: Distance,
{
    type Item = <S::Cursor<'a> as Cursor>::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.step();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.front == self.back {
            return (0, Some(0));
        }
        let remaining = ceil_div(self.front.stop - self.front.current, self.front.step);
        (1, Some(step_count(remaining)))
    }
}

impl<'a, S, D> FusedIterator for Iter<'a, S, D>
where
    S: Sequence + 'a,
    D: Distance,
{
}

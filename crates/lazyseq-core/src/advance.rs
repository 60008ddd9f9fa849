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

//! # Advancing Cursors
//!
//! Moving a cursor by more than one element is the hot operation of every
//! strided view. The functions here do it correctly for any cursor and
//! quickly for random-access cursors:
//!
//! - `advance_unbounded` steps a cursor `n` times with no end check. The
//!   caller guarantees that at least `n` elements remain.
//! - `advance_bounded` moves a cursor up to `n` elements but never past a
//!   known end. Random-access cursors compute the remaining distance and
//!   jump in O(1); forward cursors step and check the end after each move.
//! - `count_to_end` counts the elements of a sequence by walking it, while
//!   `distance` and `sequence_len` use the O(1) answer when the cursor
//!   category allows.
//!
//! Distances are generic over primitive integers, signed or not. A
//! non-positive distance never moves a cursor.
//!
//! ## Usage
//!
//! ```rust
//! use lazyseq_core::advance::advance_bounded;
//! use lazyseq_core::cursor::Cursor;
//! use lazyseq_core::sequence::Sequence;
//!
//! let data = vec![1, 2, 3];
//! let mut cursor = data.cursor_begin();
//! let end = data.cursor_end();
//!
//! advance_bounded(&mut cursor, &end, 2_i32);
//! assert_eq!(*cursor.get(), 3);
//!
//! advance_bounded(&mut cursor, &end, 100_i32);
//! assert!(cursor == end);
//! ```

use crate::{
    cursor::{Cursor, CursorCategory},
    num::step_count,
    sequence::Sequence,
};
use num_traits::PrimInt;

/// Steps `cursor` forward exactly `distance` times.
///
/// There is no end check: stepping past the end of the sequence is a
/// precondition violation whose outcome depends on the cursor type.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::advance::advance_unbounded;
/// # use lazyseq_core::cursor::Cursor;
/// # use lazyseq_core::sequence::Sequence;
/// let list: std::collections::LinkedList<_> = (0..5).collect();
/// let mut cursor = list.cursor_begin();
/// advance_unbounded(&mut cursor, 3_u32);
/// assert_eq!(*cursor.get(), 3);
/// ```
#[inline]
pub fn advance_unbounded<C, D>(cursor: &mut C, distance: D)
where
    C: Cursor,
    D: PrimInt,
{
    for _ in 0..step_count(distance) {
        cursor.step();
    }
}

/// Advances `cursor` by up to `distance` elements, stopping at `end`.
///
/// Afterwards the cursor has either moved by exactly `distance` or equals
/// `end`; it never moves beyond `end`. Returns the number of elements
/// actually skipped.
///
/// Random-access cursors take O(1); forward cursors take
/// O(min(distance, remaining)).
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::advance::advance_bounded;
/// # use lazyseq_core::sequence::Sequence;
/// let text = "abcdef";
/// let mut cursor = text.cursor_begin();
/// let end = text.cursor_end();
/// assert_eq!(advance_bounded(&mut cursor, &end, 4_i64), 4);
/// assert_eq!(advance_bounded(&mut cursor, &end, 4_i64), 2);
/// assert!(cursor == end);
/// ```
#[inline]
pub fn advance_bounded<C, D>(cursor: &mut C, end: &C, distance: D) -> usize
where
    C: Cursor,
    D: PrimInt,
{
    let requested = step_count(distance);
    let taken = <C::Category as CursorCategory<C>>::advance_bounded(cursor, end, requested);
    if taken < requested {
        log::trace!(
            "bounded advance of {} saturated at the end after {} ({} cursor)",
            requested,
            taken,
            <C::Category as CursorCategory<C>>::NAME
        );
    }
    taken
}

/// Returns a copy of `cursor` stepped forward `distance` times.
///
/// See `advance_unbounded` for the preconditions.
#[inline]
pub fn next_unbounded<C, D>(mut cursor: C, distance: D) -> C
where
    C: Cursor,
    D: PrimInt,
{
    advance_unbounded(&mut cursor, distance);
    cursor
}

/// Returns a copy of `cursor` advanced by up to `distance`, never past `end`.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::advance::next_bounded;
/// # use lazyseq_core::cursor::Cursor;
/// # use lazyseq_core::sequence::Sequence;
/// let data = [3, 1, 4, 1, 5];
/// let begin = data.cursor_begin();
/// let third = next_bounded(begin, &data.cursor_end(), 2_i8);
/// assert_eq!(*third.get(), 4);
/// ```
#[inline]
pub fn next_bounded<C, D>(mut cursor: C, end: &C, distance: D) -> C
where
    C: Cursor,
    D: PrimInt,
{
    advance_bounded(&mut cursor, end, distance);
    cursor
}

/// Counts the elements of `sequence` by walking it from begin to end.
///
/// This is O(N) regardless of the cursor category; prefer `sequence_len`
/// when the category may allow an O(1) answer.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::advance::count_to_end;
/// assert_eq!(count_to_end("héllo"), 5);
/// assert_eq!(count_to_end(&vec![1, 2, 3]), 3);
/// ```
pub fn count_to_end<S>(sequence: &S) -> usize
where
    S: Sequence + ?Sized,
{
    let mut cursor = sequence.cursor_begin();
    let end = sequence.cursor_end();
    let mut count = 0;
    while cursor != end {
        cursor.step();
        count += 1;
    }
    count
}

/// Returns the number of elements in `sequence`.
///
/// Random-access sequences answer in O(1) through their cursor distance;
/// forward-only sequences fall back to a full traversal.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::advance::sequence_len;
/// # use std::collections::LinkedList;
/// let list: LinkedList<_> = (0..4).collect();
/// assert_eq!(sequence_len(&list), 4);
/// assert_eq!(sequence_len(&[0_u8; 16]), 16);
/// ```
#[inline]
pub fn sequence_len<S>(sequence: &S) -> usize
where
    S: Sequence + ?Sized,
{
    distance(&sequence.cursor_begin(), &sequence.cursor_end())
}

/// Returns the number of steps from `first` to `last`.
///
/// `last` must be reachable from `first`. The cost is O(1) for random-access
/// cursors and O(N) for forward cursors.
#[inline]
pub fn distance<C>(first: &C, last: &C) -> usize
where
    C: Cursor,
{
    <C::Category as CursorCategory<C>>::distance(first, last)
}

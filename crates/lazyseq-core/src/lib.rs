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

//! # lazyseq Core
//!
//! The iteration substrate shared by every lazy view in the lazyseq
//! workspace. Views built on this crate never copy or materialize the
//! sequence they wrap; they move cursors and hand out what the cursors
//! dereference to.
//!
//! ## Modules
//!
//! - `cursor`: The `Cursor` model with compile-time capability categories
//!   (`Forward`, `RandomAccess`), plus `IndexCursor` for indexable storage
//!   and `IterCursor` for cloneable iterators.
//! - `sequence`: The `Sequence` trait (begin cursor and true-end cursor)
//!   implemented for slices, arrays, vectors, deques, linked lists, ordered
//!   sets, strings, borrowed/boxed sequences and `IterSequence<I>`.
//! - `advance`: Unbounded and bounded advance with O(1) random-access and
//!   O(N) forward strategies, distance and length helpers.
//! - `holder`: `DerefHolder` storage that borrows reference results and owns
//!   value results, selected per element type through `Holdable`.
//! - `num`: The `Distance` bound for signed offsets and conversions from
//!   distances to step counts.
//!
//! ## Example
//!
//! ```rust
//! use lazyseq_core::advance::{advance_bounded, sequence_len};
//! use lazyseq_core::cursor::Cursor;
//! use lazyseq_core::sequence::Sequence;
//! use std::collections::LinkedList;
//!
//! let list: LinkedList<_> = (0..10).collect();
//! let end = list.cursor_end();
//! let mut cursor = list.cursor_begin();
//!
//! let mut picked = Vec::new();
//! while cursor != end {
//!     picked.push(*cursor.get());
//!     advance_bounded(&mut cursor, &end, 4_i32);
//! }
//! assert_eq!(picked, vec![0, 4, 8]);
//! assert_eq!(sequence_len(&list), 10);
//! ```

pub mod advance;
pub mod cursor;
pub mod holder;
pub mod num;
pub mod sequence;

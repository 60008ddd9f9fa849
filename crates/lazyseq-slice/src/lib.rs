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

//! # lazyseq Slice
//!
//! A lazy `start:stop:step` view over any sequence. The view never copies
//! or materializes the wrapped sequence and works on forward-only storage
//! (linked lists, ordered sets, strings, cloneable iterators) just as well
//! as on random-access storage, where strides are taken in O(1).
//!
//! ## Modules
//!
//! - `slice`: The `Slice` view, its `SliceCursor` and `Iter`, and the
//!   `slice`, `slice_to` and `try_slice` constructors.
//! - `bounds`: `SliceBounds`, the normalized `start:stop:step` parameters,
//!   including parsing from and formatting to slice notation.
//! - `error`: Construction and parsing errors.
//!
//! ## Example
//!
//! ```rust
//! use lazyseq_slice::{SliceBounds, slice};
//! use std::collections::LinkedList;
//!
//! let list: LinkedList<u32> = (0..10).collect();
//! let view = slice(&list, 2, 8, 2);
//! assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
//!
//! let bounds: SliceBounds<i64> = "1:4:2".parse().unwrap();
//! let view = lazyseq_slice::Slice::from_bounds("abcde", bounds);
//! assert_eq!(view.iter().collect::<String>(), "bd");
//! ```

pub mod bounds;
pub mod error;
pub mod slice;

pub use bounds::{SliceBounds, SlicePositions};
pub use error::{ParseBoundsError, ParseTokenError, SliceError};
pub use slice::{Iter, Slice, SliceCursor, slice, slice_to, try_slice};

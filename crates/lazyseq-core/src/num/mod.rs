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

//! # Distance Numerics
//!
//! Integer helpers shared by the cursor substrate and the views built on it.
//! Views speak in signed distances (`start`, `stop`, `step`), while cursors
//! move in whole `usize` steps; this module bridges the two.
//!
//! ## Highlights
//!
//! - `Distance`: the bound used for slice offsets and steps. It is blanket
//!   implemented for every signed primitive integer.
//! - `step_count`: clamps a distance to the number of forward steps it
//!   represents (`0` for non-positive distances, saturating at `usize::MAX`).
//! - `ceil_div`: rounding-up division used to count strided positions.
//!
//! ## Usage
//!
//! ```rust
//! use lazyseq_core::num::{ceil_div, step_count};
//!
//! assert_eq!(step_count(7_i32), 7);
//! assert_eq!(step_count(-3_i64), 0);
//! assert_eq!(ceil_div(7_i32, 2), 4);
//! ```

use num_traits::PrimInt;
use std::fmt::{Debug, Display};

/// A signed primitive integer that can express slice offsets and steps.
///
/// This trait is implemented for every type that is a `PrimInt + Signed`
/// and can be printed, which covers `i8` through `i128` and `isize`.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::num::Distance;
/// fn first_after<D: Distance>(start: D, step: D) -> D {
///     start + step
/// }
///
/// assert_eq!(first_after(2_i16, 3), 5);
/// ```
pub trait Distance: PrimInt + num_traits::Signed + Debug + Display {}

impl<T> Distance for T where T: PrimInt + num_traits::Signed + Debug + Display {}

/// Returns the number of forward steps represented by `distance`.
///
/// Non-positive distances map to `0`. Distances that do not fit into a
/// `usize` (e.g. large `i128` values) saturate at `usize::MAX`, which is
/// never smaller than the number of elements any sequence can hold.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::num::step_count;
/// assert_eq!(step_count(0_i8), 0);
/// assert_eq!(step_count(42_u32), 42);
/// assert_eq!(step_count(i128::MAX), usize::MAX);
/// ```
#[inline]
pub fn step_count<D>(distance: D) -> usize
where
    D: PrimInt,
{
    if distance <= D::zero() {
        return 0;
    }
    distance.to_usize().unwrap_or(usize::MAX)
}

/// Divides `numerator` by `denominator`, rounding up.
///
/// # Panics
///
/// In debug builds, panics if `numerator` is negative or `denominator` is
/// not strictly positive.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::num::ceil_div;
/// assert_eq!(ceil_div(6_i32, 2), 3);
/// assert_eq!(ceil_div(7_i32, 2), 4);
/// assert_eq!(ceil_div(0_i32, 5), 0);
/// ```
#[inline]
pub fn ceil_div<D>(numerator: D, denominator: D) -> D
where
    D: PrimInt,
{
    debug_assert!(
        numerator >= D::zero(),
        "called `ceil_div` with a negative numerator"
    );
    debug_assert!(
        denominator > D::zero(),
        "called `ceil_div` with a non-positive denominator"
    );
    let quotient = numerator / denominator;
    if numerator % denominator == D::zero() {
        quotient
    } else {
        quotient + D::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_distance<D: Distance>() {}

    #[test]
    fn test_distance_covers_signed_primitives() {
        assert_distance::<i8>();
        assert_distance::<i16>();
        assert_distance::<i32>();
        assert_distance::<i64>();
        assert_distance::<i128>();
        assert_distance::<isize>();
    }

    #[test]
    fn test_step_count_non_positive() {
        assert_eq!(step_count(0_i32), 0);
        assert_eq!(step_count(-1_i32), 0);
        assert_eq!(step_count(i64::MIN), 0);
    }

    #[test]
    fn test_step_count_positive() {
        assert_eq!(step_count(1_i8), 1);
        assert_eq!(step_count(127_i8), 127);
        assert_eq!(step_count(10_usize), 10);
    }

    #[test]
    fn test_step_count_saturates() {
        assert_eq!(step_count(i128::MAX), usize::MAX);
        assert_eq!(step_count(u128::MAX), usize::MAX);
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(0_i64, 3), 0);
        assert_eq!(ceil_div(1_i64, 3), 1);
        assert_eq!(ceil_div(3_i64, 3), 1);
        assert_eq!(ceil_div(4_i64, 3), 2);
        assert_eq!(ceil_div(6_i64, 1), 6);
    }
}

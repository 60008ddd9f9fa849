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

use crate::error::{ParseBoundsError, ParseTokenError, SliceError};
use lazyseq_core::num::{Distance, ceil_div, step_count};
use std::{iter::FusedIterator, str::FromStr};

/// The `start:stop:step` parameters of a slice, in normalized form.
///
/// Bounds are logical positions, not cursors: a `stop` beyond the end of a
/// sequence is perfectly valid and simply means "until the sequence ends".
///
/// # Invariants
///
/// - `step > 0`.
/// - `0 <= stop` and `0 <= start <= stop`. Negative positions are clamped
///   to zero, and a `start` at or beyond `stop` is clamped to `stop`, which
///   makes the bounds empty.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_slice::bounds::SliceBounds;
/// let bounds = SliceBounds::new(2, 8, 2);
/// assert_eq!(bounds.len(), 3);
/// assert_eq!(bounds.positions().collect::<Vec<_>>(), vec![2, 4, 6]);
///
/// let empty = SliceBounds::new(5, 3, 1);
/// assert!(empty.is_empty());
/// assert_eq!(empty.start(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliceBounds<D>
where
    D: Distance,
{
    start: D,
    stop: D,
    step: D,
}

impl<D> SliceBounds<D>
where
    D: Distance,
{
    /// Creates normalized slice bounds.
    ///
    /// # Panics
    ///
    /// Panics if `step <= 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lazyseq_slice::bounds::SliceBounds;
    /// let bounds = SliceBounds::new(-3, 4, 1);
    /// assert_eq!(bounds.start(), 0);
    /// ```
    #[inline]
    pub fn new(start: D, stop: D, step: D) -> Self {
        assert!(
            step > D::zero(),
            "Invalid slice: step must be strictly positive"
        );
        Self::normalized(start, stop, step)
    }

    /// Creates normalized slice bounds if `step` is valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lazyseq_slice::bounds::SliceBounds;
    /// # use lazyseq_slice::error::SliceError;
    /// assert!(SliceBounds::try_new(0, 10, 3).is_ok());
    /// assert_eq!(
    ///     SliceBounds::try_new(0, 10, 0),
    ///     Err(SliceError::NonPositiveStep(0))
    /// );
    /// ```
    #[inline]
    pub fn try_new(start: D, stop: D, step: D) -> Result<Self, SliceError<D>> {
        if step > D::zero() {
            Ok(Self::normalized(start, stop, step))
        } else {
            Err(SliceError::NonPositiveStep(step))
        }
    }

    /// Creates slice bounds without checking `step` in release builds.
    ///
    /// The bounds are still normalized; only the step check is skipped.
    ///
    /// # Safety
    ///
    /// The caller must ensure `step > 0`. This function contains a
    /// `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(start: D, stop: D, step: D) -> Self {
        debug_assert!(
            step > D::zero(),
            "Invalid slice: step must be strictly positive"
        );
        Self::normalized(start, stop, step)
    }

    /// Creates the bounds `0:stop:1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lazyseq_slice::bounds::SliceBounds;
    /// let bounds = SliceBounds::to(4_i64);
    /// assert_eq!((bounds.start(), bounds.stop(), bounds.step()), (0, 4, 1));
    /// ```
    #[inline]
    pub fn to(stop: D) -> Self {
        Self::normalized(D::zero(), stop, D::one())
    }

    fn normalized(start: D, stop: D, step: D) -> Self {
        let stop = if stop < D::zero() {
            log::trace!("slice stop {} clamped to 0", stop);
            D::zero()
        } else {
            stop
        };
        let start = if start < D::zero() {
            log::trace!("slice start {} clamped to 0", start);
            D::zero()
        } else {
            start
        };
        let start = if start < stop {
            start
        } else {
            if start > stop {
                log::trace!("slice start {} clamped to stop {}", start, stop);
            }
            stop
        };
        Self { start, stop, step }
    }

    /// Returns the first logical position.
    #[inline]
    pub const fn start(&self) -> D {
        self.start
    }

    /// Returns the exclusive logical end.
    #[inline]
    pub const fn stop(&self) -> D {
        self.stop
    }

    /// Returns the stride between visited positions.
    #[inline]
    pub const fn step(&self) -> D {
        self.step
    }

    /// Returns the number of logical positions, `ceil((stop - start) / step)`.
    ///
    /// This is an upper bound on the number of elements a slice yields; a
    /// shorter sequence yields fewer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lazyseq_slice::bounds::SliceBounds;
    /// assert_eq!(SliceBounds::new(0, 10, 3).len(), 4);
    /// assert_eq!(SliceBounds::new(0, 9, 3).len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> D {
        ceil_div(self.stop - self.start, self.step)
    }

    /// Returns `true` if no position is visited.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// Returns `true` if `position` is one of the visited positions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lazyseq_slice::bounds::SliceBounds;
    /// let bounds = SliceBounds::new(1, 9, 3);
    /// assert!(bounds.contains(4));
    /// assert!(!bounds.contains(5));
    /// assert!(!bounds.contains(10));
    /// ```
    #[inline]
    pub fn contains(&self, position: D) -> bool {
        self.start <= position
            && position < self.stop
            && (position - self.start) % self.step == D::zero()
    }

    /// Creates an iterator over the visited logical positions.
    #[inline]
    pub fn positions(&self) -> SlicePositions<D> {
        SlicePositions {
            current: self.start,
            stop: self.stop,
            step: self.step,
        }
    }
}

impl<D> Default for SliceBounds<D>
where
    D: Distance,
{
    /// The empty bounds `0:0:1`.
    #[inline]
    fn default() -> Self {
        Self {
            start: D::zero(),
            stop: D::zero(),
            step: D::one(),
        }
    }
}

impl<D> std::fmt::Debug for SliceBounds<D>
where
    D: Distance,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliceBounds")
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("step", &self.step)
            .finish()
    }
}

impl<D> std::fmt::Display for SliceBounds<D>
where
    D: Distance,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.stop, self.step)
    }
}

impl<D> From<std::ops::Range<D>> for SliceBounds<D>
where
    D: Distance,
{
    #[inline]
    fn from(range: std::ops::Range<D>) -> Self {
        Self::normalized(range.start, range.end, D::one())
    }
}

fn parse_field<D>(token: &str, field: &'static str, default: D) -> Result<D, ParseTokenError>
where
    D: Distance,
{
    let token = token.trim();
    if token.is_empty() {
        return Ok(default);
    }
    D::from_str_radix(token, 10).map_err(|_| ParseTokenError {
        token: token.to_string(),
        field,
    })
}

/// Parses slice notation.
///
/// Accepted forms are `stop`, `start:stop` and `start:stop:step`. Empty
/// fields take their defaults: `0` for `start`, `D::max_value()` for `stop`
/// and `1` for `step`, so `"::2"` selects every other element.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_slice::bounds::SliceBounds;
/// let bounds: SliceBounds<i32> = "2:8:2".parse().unwrap();
/// assert_eq!(bounds, SliceBounds::new(2, 8, 2));
///
/// let bounds: SliceBounds<i32> = "5".parse().unwrap();
/// assert_eq!(bounds, SliceBounds::to(5));
///
/// let bounds: SliceBounds<i32> = "::3".parse().unwrap();
/// assert_eq!(bounds.stop(), i32::MAX);
///
/// assert!("1:2:0".parse::<SliceBounds<i32>>().is_err());
/// ```
impl<D> FromStr for SliceBounds<D>
where
    D: Distance,
{
    type Err = ParseBoundsError<D>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseBoundsError::Empty);
        }

        let fields: Vec<&str> = s.split(':').collect();
        let (start, stop, step) = match fields.as_slice() {
            [stop] => (D::zero(), parse_field(stop, "stop", D::max_value())?, D::one()),
            [start, stop] => (
                parse_field(start, "start", D::zero())?,
                parse_field(stop, "stop", D::max_value())?,
                D::one(),
            ),
            [start, stop, step] => (
                parse_field(start, "start", D::zero())?,
                parse_field(stop, "stop", D::max_value())?,
                parse_field(step, "step", D::one())?,
            ),
            _ => return Err(ParseBoundsError::TooManyFields(fields.len())),
        };

        Ok(Self::try_new(start, stop, step)?)
    }
}

/// An iterator over the logical positions of a `SliceBounds`.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_slice::bounds::SliceBounds;
/// let positions: Vec<_> = SliceBounds::new(1, 8, 3).positions().collect();
/// assert_eq!(positions, vec![1, 4, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct SlicePositions<D>
where
    D: Distance,
{
    current: D,
    stop: D,
    step: D,
}

impl<D> Iterator for SlicePositions<D>
where
    D: Distance,
{
    type Item = D;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.stop {
            let result = self.current;
            self.current = match self.current.checked_add(&self.step) {
                Some(next) if next < self.stop => next,
                _ => self.stop,
            };
            Some(result)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<D> ExactSizeIterator for SlicePositions<D>
where
    D: Distance,
{
    fn len(&self) -> usize {
        if self.current >= self.stop {
            return 0;
        }
        step_count(ceil_div(self.stop - self.current, self.step))
    }
}

impl<D> FusedIterator for SlicePositions<D> where D: Distance {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let b = SliceBounds::new(2, 8, 2);
        assert_eq!(b.start(), 2);
        assert_eq!(b.stop(), 8);
        assert_eq!(b.step(), 2);
        assert_eq!(b.len(), 3);
        assert!(!b.is_empty());
    }

    #[test]
    fn test_start_clamped_to_stop() {
        let b = SliceBounds::new(3, 2, 1);
        assert_eq!(b.start(), 2);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);

        let b = SliceBounds::new(1_000_000_i64, 5, 7);
        assert_eq!(b.start(), 5);
        assert!(b.is_empty());
    }

    #[test]
    fn test_negative_positions_clamped() {
        let b = SliceBounds::new(-4, 3, 1);
        assert_eq!((b.start(), b.stop()), (0, 3));

        let b = SliceBounds::new(-4, -1, 1);
        assert_eq!((b.start(), b.stop()), (0, 0));
        assert!(b.is_empty());
    }

    #[test]
    fn test_try_new() {
        assert!(SliceBounds::try_new(0, 5, 1).is_ok());
        assert_eq!(
            SliceBounds::try_new(0, 5, 0),
            Err(SliceError::NonPositiveStep(0))
        );
        assert_eq!(
            SliceBounds::try_new(0, 5, -1),
            Err(SliceError::NonPositiveStep(-1))
        );
    }

    #[test]
    #[should_panic(expected = "Invalid slice")]
    fn test_new_panic() {
        SliceBounds::new(0, 10, 0);
    }

    #[test]
    fn test_default_is_empty() {
        let b: SliceBounds<i32> = Default::default();
        assert!(b.is_empty());
        assert_eq!(b.step(), 1);
    }

    #[test]
    fn test_len_rounds_up() {
        assert_eq!(SliceBounds::new(0, 10, 3).len(), 4);
        assert_eq!(SliceBounds::new(0, 10, 10).len(), 1);
        assert_eq!(SliceBounds::new(0, 10, 11).len(), 1);
        assert_eq!(SliceBounds::new(2, 3, 1).len(), 1);
    }

    #[test]
    fn test_contains() {
        let b = SliceBounds::new(2, 8, 2);
        assert!(b.contains(2));
        assert!(b.contains(6));
        assert!(!b.contains(3));
        assert!(!b.contains(8));
        assert!(!b.contains(0));
    }

    #[test]
    fn test_positions() {
        let b = SliceBounds::new(0, 10, 4);
        let mut it = b.positions();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(4));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(8));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_positions_near_max_do_not_overflow() {
        let b = SliceBounds::new(i8::MAX - 3, i8::MAX, 2);
        assert_eq!(b.positions().collect::<Vec<_>>(), vec![124, 126]);
    }

    #[test]
    fn test_display_and_debug() {
        let b = SliceBounds::new(1, 7, 3);
        assert_eq!(format!("{}", b), "1:7:3");
        assert_eq!(
            format!("{:?}", b),
            "SliceBounds { start: 1, stop: 7, step: 3 }"
        );
    }

    #[test]
    fn test_from_range() {
        let b: SliceBounds<i32> = (3..9).into();
        assert_eq!(b, SliceBounds::new(3, 9, 1));
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("4".parse::<SliceBounds<i32>>(), Ok(SliceBounds::to(4)));
        assert_eq!(
            "1:4".parse::<SliceBounds<i32>>(),
            Ok(SliceBounds::new(1, 4, 1))
        );
        assert_eq!(
            " 1 : 9 : 2 ".parse::<SliceBounds<i32>>(),
            Ok(SliceBounds::new(1, 9, 2))
        );
        assert_eq!(
            "2:".parse::<SliceBounds<i16>>(),
            Ok(SliceBounds::new(2, i16::MAX, 1))
        );
        assert_eq!(
            ":3".parse::<SliceBounds<i16>>(),
            Ok(SliceBounds::new(0, 3, 1))
        );
        assert_eq!(
            "::2".parse::<SliceBounds<i16>>(),
            Ok(SliceBounds::new(0, i16::MAX, 2))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<SliceBounds<i32>>(), Err(ParseBoundsError::Empty));
        assert_eq!(
            "1:2:3:4".parse::<SliceBounds<i32>>(),
            Err(ParseBoundsError::TooManyFields(4))
        );
        assert_eq!(
            "1:x".parse::<SliceBounds<i32>>(),
            Err(ParseBoundsError::Token(ParseTokenError {
                token: "x".to_string(),
                field: "stop",
            }))
        );
        assert_eq!(
            "0:5:-1".parse::<SliceBounds<i32>>(),
            Err(ParseBoundsError::Invalid(SliceError::NonPositiveStep(-1)))
        );
    }

    #[test]
    fn test_parse_display_agree() {
        let b = SliceBounds::new(3, 11, 4);
        let reparsed: SliceBounds<i64> = b.to_string().parse().unwrap();
        assert_eq!(reparsed, b);
    }
}

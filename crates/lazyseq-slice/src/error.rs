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

//! Error types for slice construction and slice-notation parsing.

use std::fmt::{Debug, Display};

/// The error type for checked slice construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceError<D> {
    /// The step was zero or negative. Only forward strides are supported.
    NonPositiveStep(D),
}

impl<D> Display for SliceError<D>
where
    D: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveStep(step) => {
                write!(f, "Slice step must be strictly positive, got {}", step)
            }
        }
    }
}

impl<D> std::error::Error for SliceError<D> where D: Debug + Display {}

/// Details about a slice-notation field that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The text that failed to parse.
    pub token: String,
    /// The field the token was meant for (`start`, `stop` or `step`).
    pub field: &'static str,
}

impl Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as the slice {}",
            self.token, self.field
        )
    }
}

impl std::error::Error for ParseTokenError {}

/// The error type for parsing `start:stop:step` slice notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoundsError<D> {
    /// The input was empty or contained only whitespace.
    Empty,
    /// More than three `:`-separated fields were given.
    TooManyFields(usize),
    /// A field could not be parsed as an integer.
    Token(ParseTokenError),
    /// The fields parsed but do not form a valid slice.
    Invalid(SliceError<D>),
}

impl<D> Display for ParseBoundsError<D>
where
    D: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Slice notation is empty"),
            Self::TooManyFields(n) => write!(
                f,
                "Slice notation takes at most 3 fields (start:stop:step), got {}",
                n
            ),
            Self::Token(e) => write!(f, "Parse error: {}", e),
            Self::Invalid(e) => write!(f, "Invalid slice: {}", e),
        }
    }
}

impl<D> std::error::Error for ParseBoundsError<D> where D: Debug + Display {}

impl<D> From<ParseTokenError> for ParseBoundsError<D> {
    fn from(e: ParseTokenError) -> Self {
        Self::Token(e)
    }
}

impl<D> From<SliceError<D>> for ParseBoundsError<D> {
    fn from(e: SliceError<D>) -> Self {
        Self::Invalid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SliceError::NonPositiveStep(-2).to_string(),
            "Slice step must be strictly positive, got -2"
        );

        let token = ParseTokenError {
            token: "x".to_string(),
            field: "stop",
        };
        assert_eq!(
            ParseBoundsError::<i32>::from(token).to_string(),
            "Parse error: Could not parse token 'x' as the slice stop"
        );
        assert_eq!(
            ParseBoundsError::<i32>::TooManyFields(4).to_string(),
            "Slice notation takes at most 3 fields (start:stop:step), got 4"
        );
    }

    #[test]
    fn test_from_slice_error() {
        let e: ParseBoundsError<i64> = SliceError::NonPositiveStep(0).into();
        assert_eq!(e, ParseBoundsError::Invalid(SliceError::NonPositiveStep(0)));
        assert_eq!(e.to_string(), "Invalid slice: Slice step must be strictly positive, got 0");
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&SliceError::NonPositiveStep(0_i8));
        assert_error(&ParseBoundsError::<i8>::Empty);
    }
}

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

//! # Offset Numeric Trait
//!
//! Unified numeric bounds for cursor difference types. `Offset` specifies
//! the integer capabilities required of a cursor's distance/advance
//! arithmetic: a signed primitive integer with conversions to and from the
//! machine word sizes.
//!
//! ## Motivation
//!
//! Cursor and iterator code must remain generic over the difference type
//! while relying on predictable signed arithmetic (distances can be
//! negative, halving in binary searches must be exact). Collecting the
//! bounds into a single alias keeps generic signatures short and makes the
//! "difference types are signed integers" rule a type-level fact.

use num_traits::{FromPrimitive, PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for types usable as a cursor difference ("offset") type.
///
/// These are the signed primitive integer types `i8`, `i16`, `i32`, `i64`,
/// `i128` and `isize`. Unsigned types are rejected by the `Signed` bound:
/// a distance between two positions carries a direction.
///
/// # Examples
///
/// ```rust
/// # use rove_core::num::Offset;
/// fn midpoint<T: Offset>(len: T) -> T {
///     len >> 1
/// }
/// assert_eq!(midpoint(9i64), 4);
/// assert_eq!(midpoint(-8isize), -4);
/// ```
pub trait Offset:
    PrimInt
    + Signed
    + FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
    + Send
    + Sync
{
}

impl<T> Offset for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    fn assert_offset<T: Offset>() {}

    #[test]
    fn test_signed_primitives_are_offsets() {
        assert_offset::<i8>();
        assert_offset::<i16>();
        assert_offset::<i32>();
        assert_offset::<i64>();
        assert_offset::<i128>();
        assert_offset::<isize>();
    }

    #[test]
    fn test_conversions_round_trip() {
        let n = isize::from_usize(42).unwrap();
        assert_eq!(n, 42isize);
        assert_eq!(n.to_usize(), Some(42usize));
    }
}

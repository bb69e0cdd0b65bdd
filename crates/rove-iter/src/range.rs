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

//! # Cursor Ranges
//!
//! A `CursorRange<C, S>` pairs a begin iterator with a sentinel that
//! delimits the sequence; it never owns the underlying storage. The
//! sentinel may be a second cursor (multi-pass ranges) or a state test
//! like [`EndOfInput`](rove_core::cursor::EndOfInput) (streams).
//!
//! `RangeIter` bridges a range into `std::iter::Iterator`, so promoted
//! cursors compose with the entire standard iterator ecosystem:
//!
//! ```rust
//! use rove_iter::slice::slice_range;
//!
//! let data = [1, 2, 3, 4];
//! let doubled: Vec<i32> = slice_range(&data).into_iter().map(|x| x * 2).collect();
//! assert_eq!(doubled, [2, 4, 6, 8]);
//! ```

use crate::iter::CursorIter;
use rove_core::cursor::{Cursor, ForwardCursor, InputCursor, SentinelFor};
use std::iter::FusedIterator;

/// A non-owning pairing of a begin iterator and a sentinel.
#[derive(Debug, Clone)]
pub struct CursorRange<C, S> {
    first: CursorIter<C>,
    last: S,
}

impl<C, S> CursorRange<C, S>
where
    C: Cursor,
    S: SentinelFor<C>,
{
    /// Pairs `first` with the sentinel `last`.
    #[inline]
    pub fn new(first: CursorIter<C>, last: S) -> Self {
        Self { first, last }
    }

    /// Borrows the begin iterator.
    #[inline]
    pub fn first(&self) -> &CursorIter<C> {
        &self.first
    }

    /// Borrows the sentinel.
    #[inline]
    pub fn sentinel(&self) -> &S {
        &self.last
    }

    /// Consumes the range, returning the begin iterator.
    #[inline]
    pub fn into_first(self) -> CursorIter<C> {
        self.first
    }

    /// Consumes the range, returning both halves.
    #[inline]
    pub fn into_parts(self) -> (CursorIter<C>, S) {
        (self.first, self.last)
    }

    /// Returns `true` if the range delimits no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.last.is_end(self.first.cursor())
    }

    /// Returns the number of elements in the range.
    ///
    /// O(1) when the sentinel is a random-access cursor, O(n) otherwise.
    #[inline]
    pub fn len(&self) -> C::Offset
    where
        C: ForwardCursor,
    {
        self.last.distance_from(self.first.cursor())
    }
}

impl<C, S> CursorRange<C, S>
where
    C: InputCursor + Clone,
    S: SentinelFor<C> + Clone,
{
    /// Returns a standard iterator over the elements without consuming
    /// the range.
    #[inline]
    pub fn iter(&self) -> RangeIter<C, S> {
        RangeIter {
            cursor: self.first.cursor().clone(),
            last: self.last.clone(),
        }
    }
}

impl<C, S> IntoIterator for CursorRange<C, S>
where
    C: InputCursor,
    S: SentinelFor<C>,
{
    type Item = C::Item;
    type IntoIter = RangeIter<C, S>;

    #[inline]
    fn into_iter(self) -> RangeIter<C, S> {
        RangeIter {
            cursor: self.first.into_cursor(),
            last: self.last,
        }
    }
}

/// The `std::iter::Iterator` bridge for a cursor range.
///
/// Yields materialized elements until the sentinel matches. Reaching the
/// sentinel is stable, so the iterator is fused.
#[derive(Debug, Clone)]
pub struct RangeIter<C, S> {
    cursor: C,
    last: S,
}

impl<C, S> Iterator for RangeIter<C, S>
where
    C: InputCursor,
    S: SentinelFor<C>,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.last.is_end(&self.cursor) {
            None
        } else {
            let value = self.cursor.read_move();
            self.cursor.next();
            Some(value)
        }
    }
}

impl<C, S> FusedIterator for RangeIter<C, S>
where
    C: InputCursor,
    S: SentinelFor<C>,
{
}

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

//! # Linear Searches
//!
//! Predicate and value searches over any input range. Single-pass
//! sources qualify: only the input tier is required.

use rove_core::cursor::{InputCursor, SentinelFor};
use rove_iter::iter::CursorIter;

/// Returns the first position whose element satisfies `pred`; the end
/// position if none does.
pub fn find_if<C, S, P>(mut first: CursorIter<C>, last: &S, pred: P) -> CursorIter<C>
where
    C: InputCursor,
    S: SentinelFor<C>,
    P: Fn(&C::Item) -> bool,
{
    while !first.at_end(last) {
        if pred(&first.get()) {
            break;
        }
        first.bump();
    }
    first
}

/// Returns the first position whose element does **not** satisfy `pred`;
/// the end position if all do. Forwards to [`find_if`] with the negated
/// predicate.
pub fn find_if_not<C, S, P>(first: CursorIter<C>, last: &S, pred: P) -> CursorIter<C>
where
    C: InputCursor,
    S: SentinelFor<C>,
    P: Fn(&C::Item) -> bool,
{
    find_if(first, last, move |item| !pred(item))
}

/// Returns the first position whose element equals `value`; the end
/// position if none does.
pub fn find<C, S>(first: CursorIter<C>, last: &S, value: &C::Item) -> CursorIter<C>
where
    C: InputCursor,
    C::Item: PartialEq,
    S: SentinelFor<C>,
{
    find_if(first, last, |item| item == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rove_iter::scan::tokens;
    use rove_iter::slice::slice_range;

    #[test]
    fn test_find_if_locates_first_match() {
        let data = [1, 4, 2, 8, 2];
        let range = slice_range(&data);
        let pos = find_if(range.first().clone(), range.sentinel(), |&x| x > 3);
        assert_eq!(pos.cursor().position(), 1);
    }

    #[test]
    fn test_find_if_not_skips_prefix() {
        let data = [2, 4, 6, 7, 8];
        let range = slice_range(&data);
        let pos = find_if_not(range.first().clone(), range.sentinel(), |&x| x % 2 == 0);
        assert_eq!(pos.cursor().position(), 3);
    }

    #[test]
    fn test_find_returns_end_when_absent() {
        let data = [1, 2, 3];
        let range = slice_range(&data);
        let pos = find(range.first().clone(), range.sentinel(), &9);
        assert!(pos.at_end(range.sentinel()));
    }

    #[test]
    fn test_find_over_single_pass_tokens() {
        let (it, end) = tokens::<i32, _>("4 8 15 16".as_bytes()).into_parts();
        let pos = find_if(it, &end, |&x| x > 10);
        assert_eq!(pos.get(), 15);
    }
}

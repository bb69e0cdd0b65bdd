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

//! # Mutating and Copying Algorithms
//!
//! In-place replacement and range-to-sink copying over the iterator
//! contract. The copy variants honor the failure model of output
//! cursors: a sink that rejects a write becomes equal to its sentinel,
//! and the copy stops there — the returned positions tell the caller how
//! far both sides got.

use crate::tagged::InOut;
use rove_core::cursor::{
    BidirectionalCursor, InputCursor, OutputCursor, SentinelFor, WriteCursor,
};
use rove_iter::iter::CursorIter;

/// Replaces every element satisfying `pred` with a copy of `new_value`;
/// returns the end position.
pub fn replace_if<C, S, P>(
    mut first: CursorIter<C>,
    last: &S,
    pred: P,
    new_value: &C::Item,
) -> CursorIter<C>
where
    C: InputCursor + WriteCursor,
    C::Item: Clone,
    S: SentinelFor<C>,
    P: Fn(&C::Item) -> bool,
{
    while !first.at_end(last) {
        if pred(&first.get()) {
            first.set(new_value.clone());
        }
        first.bump();
    }
    first
}

/// Copies `[first, last)` into `out`, stopping early if the output
/// reaches its sentinel; returns where both sides stopped.
pub fn copy<C, S, O, SO>(
    mut first: CursorIter<C>,
    last: &S,
    mut out: CursorIter<O>,
    out_last: &SO,
) -> InOut<CursorIter<C>, CursorIter<O>>
where
    C: InputCursor,
    S: SentinelFor<C>,
    O: OutputCursor<Item = C::Item>,
    SO: SentinelFor<O>,
{
    while !first.at_end(last) && !out.at_end(out_last) {
        out.set(first.take());
        out.bump();
        first.bump();
    }
    InOut::new(first, out)
}

/// Copies `[first, last)` into `out` in reverse order; returns the end
/// of the input range and where the output stopped.
///
/// Walks once to the bound, then copies backwards, so the source must be
/// bidirectional.
pub fn reverse_copy<C, S, O, SO>(
    first: CursorIter<C>,
    last: &S,
    mut out: CursorIter<O>,
    out_last: &SO,
) -> InOut<CursorIter<C>, CursorIter<O>>
where
    C: BidirectionalCursor,
    S: SentinelFor<C>,
    O: OutputCursor<Item = C::Item>,
    SO: SentinelFor<O>,
{
    let mut bound = first.clone();
    while !bound.at_end(last) {
        bound.bump();
    }
    let end = bound.clone();

    let mut cursor = bound;
    while cursor != first && !out.at_end(out_last) {
        cursor.retreat();
        out.set(cursor.get());
        out.bump();
    }
    InOut::new(end, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rove_core::cursor::EndOfInput;
    use rove_iter::packed::PackedStore;
    use rove_iter::sink::byte_sink;
    use rove_iter::slice::{slice_range, slice_range_mut};

    #[test]
    fn test_replace_if_on_mutable_slice() {
        let mut data = [1, 9, 3, 9, 5];
        {
            let (first, end) = slice_range_mut(&mut data).into_parts();
            replace_if(first, &end, |&x| x == 9, &0);
        }
        assert_eq!(data, [1, 0, 3, 0, 5]);
    }

    #[test]
    fn test_replace_if_through_packed_proxy_path() {
        let store = PackedStore::from_values(4, &[1, 15, 2, 15]);
        let (first, end) = store.range().into_parts();
        replace_if(first, &end, |&x| x == 15, &7);
        assert_eq!(store.get(0), 1);
        assert_eq!(store.get(1), 7);
        assert_eq!(store.get(2), 2);
        assert_eq!(store.get(3), 7);
    }

    #[test]
    fn test_copy_to_byte_sink() {
        let data = [104u8, 105u8];
        let range = slice_range(&data);
        let result = copy(
            range.first().clone(),
            range.sentinel(),
            byte_sink(Vec::new()),
            &EndOfInput,
        );
        assert!(result.input.at_end(range.sentinel()));
        let sink = result.output.into_cursor().into_inner().unwrap();
        assert_eq!(sink, b"hi");
    }

    #[test]
    fn test_reverse_copy_preserves_bound() {
        let data = [1u8, 2, 3];
        let range = slice_range(&data);
        let result = reverse_copy(
            range.first().clone(),
            range.sentinel(),
            byte_sink(Vec::new()),
            &EndOfInput,
        );
        assert!(result.input.at_end(range.sentinel()));
        let sink = result.output.into_cursor().into_inner().unwrap();
        assert_eq!(sink, [3, 2, 1]);
    }
}

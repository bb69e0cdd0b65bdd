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

//! # Binary Search Family
//!
//! `lower_bound`, `upper_bound` and `equal_range` over any forward range,
//! parameterized by a strict-weak-order comparator and an element
//! projection.
//!
//! ## Precondition
//!
//! The range must be sorted with respect to `comp` applied to the
//! projected elements. This is **not checked** — a check would cost as
//! much as the search itself — and the result on an unsorted range is
//! meaningless (though never unsafe).
//!
//! ## Cost
//!
//! O(log n) comparisons on every tier. Traversal is O(log n) on
//! random-access cursors (their `advance`/`distance_to` overrides are
//! O(1)) and O(n) on plain forward cursors, matching the classic
//! dispatch behavior of the generic bound algorithms.
//!
//! ## Usage
//!
//! ```rust
//! use rove_algo::binary_search::{equal_range_indices, lower_bound_index, upper_bound_index};
//!
//! let data = [1, 2, 2, 2, 5, 8];
//! assert_eq!(lower_bound_index(&data, &2), 1);
//! assert_eq!(upper_bound_index(&data, &2), 4);
//! assert_eq!(equal_range_indices(&data, &2), (1, 4));
//! assert_eq!(lower_bound_index(&data, &6), 5);
//! assert_eq!(equal_range_indices(&data, &9), (6, 6));
//! ```

use num_traits::{One, Zero};
use rove_core::cmp::{identity, Less, Relation};
use rove_core::cursor::{ForwardCursor, SentinelFor};
use rove_iter::iter::CursorIter;
use rove_iter::range::CursorRange;
use rove_iter::slice::slice_range;

/// Returns the first position whose projected element is not ordered
/// before `key`; `last` if no such position exists.
///
/// The core form: every other lower-bound entry point forwards here.
pub fn lower_bound_with<C, S, K, R, P>(
    first: CursorIter<C>,
    last: &S,
    key: &K,
    comp: &R,
    proj: &P,
) -> CursorIter<C>
where
    C: ForwardCursor,
    S: SentinelFor<C>,
    R: Relation<K>,
    P: Fn(&C::Item) -> K,
{
    let zero: C::Offset = Zero::zero();
    let one: C::Offset = One::one();
    let mut first = first;
    let mut len = last.distance_from(first.cursor());
    while len > zero {
        let half = len >> 1;
        let mut mid = first.clone();
        mid.advance(half);
        if comp.holds(&proj(&mid.get()), key) {
            first = mid;
            first.bump();
            len = len - half - one;
        } else {
            len = half;
        }
    }
    first
}

/// Returns the first position whose projected element is ordered
/// strictly after `key`; `last` if no such position exists.
///
/// The core form: every other upper-bound entry point forwards here.
pub fn upper_bound_with<C, S, K, R, P>(
    first: CursorIter<C>,
    last: &S,
    key: &K,
    comp: &R,
    proj: &P,
) -> CursorIter<C>
where
    C: ForwardCursor,
    S: SentinelFor<C>,
    R: Relation<K>,
    P: Fn(&C::Item) -> K,
{
    let zero: C::Offset = Zero::zero();
    let one: C::Offset = One::one();
    let mut first = first;
    let mut len = last.distance_from(first.cursor());
    while len > zero {
        let half = len >> 1;
        let mut mid = first.clone();
        mid.advance(half);
        if comp.holds(key, &proj(&mid.get())) {
            len = half;
        } else {
            first = mid;
            first.bump();
            len = len - half - one;
        }
    }
    first
}

/// Returns the half-open range of elements equivalent to `key`.
///
/// Computes the upper bound over the full range first, then the lower
/// bound restricted to everything before it, so the second probe never
/// rescans the tail. Probing both bounds in a single pass would save
/// more; the two-pass form is kept for its simplicity.
pub fn equal_range_with<C, S, K, R, P>(
    first: CursorIter<C>,
    last: &S,
    key: &K,
    comp: &R,
    proj: &P,
) -> CursorRange<C, C>
where
    C: ForwardCursor,
    S: SentinelFor<C>,
    R: Relation<K>,
    P: Fn(&C::Item) -> K,
{
    let upper = upper_bound_with(first.clone(), last, key, comp, proj);
    let upper_cursor = upper.into_cursor();
    let lower = lower_bound_with(first, &upper_cursor, key, comp, proj);
    CursorRange::new(lower, upper_cursor)
}

/// [`lower_bound_with`] over a range, with the natural order and the
/// identity projection.
pub fn lower_bound<C, S>(range: &CursorRange<C, S>, key: &C::Item) -> CursorIter<C>
where
    C: ForwardCursor,
    C::Item: Clone + PartialOrd,
    S: SentinelFor<C>,
{
    lower_bound_with(
        range.first().clone(),
        range.sentinel(),
        key,
        &Less,
        &identity::<C::Item>,
    )
}

/// [`upper_bound_with`] over a range, with the natural order and the
/// identity projection.
pub fn upper_bound<C, S>(range: &CursorRange<C, S>, key: &C::Item) -> CursorIter<C>
where
    C: ForwardCursor,
    C::Item: Clone + PartialOrd,
    S: SentinelFor<C>,
{
    upper_bound_with(
        range.first().clone(),
        range.sentinel(),
        key,
        &Less,
        &identity::<C::Item>,
    )
}

/// [`equal_range_with`] over a range, with the natural order and the
/// identity projection.
pub fn equal_range<C, S>(range: &CursorRange<C, S>, key: &C::Item) -> CursorRange<C, C>
where
    C: ForwardCursor,
    C::Item: Clone + PartialOrd,
    S: SentinelFor<C>,
{
    equal_range_with(
        range.first().clone(),
        range.sentinel(),
        key,
        &Less,
        &identity::<C::Item>,
    )
}

/// [`lower_bound_with`] over a range, ordering elements by a projected
/// key.
pub fn lower_bound_by_key<C, S, K, P>(
    range: &CursorRange<C, S>,
    key: &K,
    proj: P,
) -> CursorIter<C>
where
    C: ForwardCursor,
    K: PartialOrd,
    S: SentinelFor<C>,
    P: Fn(&C::Item) -> K,
{
    lower_bound_with(range.first().clone(), range.sentinel(), key, &Less, &proj)
}

/// [`upper_bound_with`] over a range, ordering elements by a projected
/// key.
pub fn upper_bound_by_key<C, S, K, P>(
    range: &CursorRange<C, S>,
    key: &K,
    proj: P,
) -> CursorIter<C>
where
    C: ForwardCursor,
    K: PartialOrd,
    S: SentinelFor<C>,
    P: Fn(&C::Item) -> K,
{
    upper_bound_with(range.first().clone(), range.sentinel(), key, &Less, &proj)
}

/// [`equal_range_with`] over a range, ordering elements by a projected
/// key.
pub fn equal_range_by_key<C, S, K, P>(
    range: &CursorRange<C, S>,
    key: &K,
    proj: P,
) -> CursorRange<C, C>
where
    C: ForwardCursor,
    K: PartialOrd,
    S: SentinelFor<C>,
    P: Fn(&C::Item) -> K,
{
    equal_range_with(range.first().clone(), range.sentinel(), key, &Less, &proj)
}

/// Lower bound over a slice, returning an index. Usable directly on
/// array literals.
pub fn lower_bound_index<T>(slice: &[T], key: &T) -> usize
where
    T: Clone + PartialOrd,
{
    lower_bound(&slice_range(slice), key).cursor().position()
}

/// Upper bound over a slice, returning an index. Usable directly on
/// array literals.
pub fn upper_bound_index<T>(slice: &[T], key: &T) -> usize
where
    T: Clone + PartialOrd,
{
    upper_bound(&slice_range(slice), key).cursor().position()
}

/// Equal range over a slice, returning the half-open index pair. Usable
/// directly on array literals.
pub fn equal_range_indices<T>(slice: &[T], key: &T) -> (usize, usize)
where
    T: Clone + PartialOrd,
{
    let (lower, upper_cursor) = equal_range(&slice_range(slice), key).into_parts();
    (lower.cursor().position(), upper_cursor.position())
}

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

//! # Iterator Promotion
//!
//! `CursorIter<C>` wraps any cursor by value and grows exactly the
//! operations the cursor's capabilities permit. Every operation is gated
//! by the weakest sufficient trait bound, so an input-only promotion has
//! no retreat, no offset arithmetic, no subscript and no ordering — the
//! operations are not "unsupported", they do not exist on that type.
//!
//! ## Operation surface by tier
//!
//! | Requires | Operations |
//! |---|---|
//! | `ReadCursor` | `get`, `take` |
//! | `DirectCursor` / `DirectCursorMut` | `get_ref` / `get_mut` |
//! | `WriteCursor` | `set` |
//! | `ReadCursor + WriteCursor` | `proxy`, `proxy_mut` |
//! | `NextCursor` | `bump` |
//! | `InputCursor` | `take_step` (single-pass post-step guard) |
//! | `ForwardCursor` | `step` (multi-pass post-step copy), `advance`, `distance_to` |
//! | `BidirectionalCursor` | `retreat`, `step_back` |
//! | `RandomAccessCursor` | `+=`, `-=`, `+`, `-`, `&a - &b`, `at`, `<` `>` `<=` `>=` |
//!
//! ## Usage
//!
//! ```rust
//! use rove_iter::slice::slice_range;
//!
//! let data = [10, 20, 30, 40];
//! let mut it = slice_range(&data).into_first();
//!
//! assert_eq!(it.get(), 10);
//! it.bump();
//! assert_eq!(it.get(), 20);
//!
//! it += 2;
//! assert_eq!(it.get(), 40);
//! let back = it - 3;
//! assert_eq!(back.get(), 10);
//! assert_eq!(&it - &back, 3);
//! assert!(back < it);
//! ```
//!
//! An input-only promotion has none of the stronger operations; the
//! following does not compile, because a token cursor never reaches the
//! random-access tier:
//!
//! ```compile_fail
//! use rove_iter::scan::tokens;
//!
//! let mut it = tokens::<i32, _>("1 2 3".as_bytes()).into_first();
//! it += 1isize;
//! ```

use crate::proxy::{Proxy, ProxyMut, StepGuard};
use num_traits::Zero;
use rove_core::cursor::{
    BidirectionalCursor, Cursor, DirectCursor, DirectCursorMut, ForwardCursor, InputCursor,
    NextCursor, RandomAccessCursor, ReadCursor, SentinelFor, Tier, WriteCursor,
};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A full iterator synthesized from a cursor.
///
/// Owns exactly one cursor by value; copies and moves follow normal value
/// semantics. See the [module documentation](self) for the operation
/// surface.
#[derive(Debug, Clone, Copy)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C: Cursor> CursorIter<C> {
    /// Promotes `cursor` into an iterator.
    #[inline]
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Returns the declared capability tier of the underlying cursor
    /// type.
    #[inline]
    pub const fn tier() -> Tier {
        C::TIER
    }

    /// Borrows the underlying cursor.
    #[inline]
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Exclusively borrows the underlying cursor.
    #[inline]
    pub fn cursor_mut(&mut self) -> &mut C {
        &mut self.cursor
    }

    /// Consumes the iterator, returning the cursor.
    #[inline]
    pub fn into_cursor(self) -> C {
        self.cursor
    }

    /// Returns `true` if this iterator has reached `sentinel`.
    #[inline]
    pub fn at_end<S: SentinelFor<C>>(&self, sentinel: &S) -> bool {
        sentinel.is_end(&self.cursor)
    }
}

impl<C: ReadCursor> CursorIter<C> {
    /// Materializes the current element. The dereference of this
    /// iterator family.
    #[inline]
    pub fn get(&self) -> C::Item {
        self.cursor.read()
    }

    /// Extracts the current element via the cursor's move-read.
    #[inline]
    pub fn take(&mut self) -> C::Item {
        self.cursor.read_move()
    }
}

impl<C: DirectCursor> CursorIter<C> {
    /// Returns a true reference to the current element.
    #[inline]
    pub fn get_ref(&self) -> &C::Item {
        self.cursor.read_ref()
    }
}

impl<C: DirectCursorMut> CursorIter<C> {
    /// Returns an exclusive reference to the current element.
    #[inline]
    pub fn get_mut(&mut self) -> &mut C::Item {
        self.cursor.read_mut()
    }
}

impl<C: WriteCursor> CursorIter<C> {
    /// Overwrites the current element.
    #[inline]
    pub fn set(&mut self, value: C::Item) {
        self.cursor.write(value);
    }
}

impl<C: ReadCursor + WriteCursor> CursorIter<C> {
    /// Returns a read proxy for the current element.
    ///
    /// This is the dereference for writable sequences without addressable
    /// elements; see [`crate::proxy`].
    #[inline]
    pub fn proxy(&self) -> Proxy<'_, C> {
        Proxy::new(&self.cursor)
    }

    /// Returns a write-capable proxy for the current element.
    #[inline]
    pub fn proxy_mut(&mut self) -> ProxyMut<'_, C> {
        ProxyMut::new(&mut self.cursor)
    }
}

impl<C: NextCursor> CursorIter<C> {
    /// Advances to the next position (pre-increment).
    #[inline]
    pub fn bump(&mut self) {
        self.cursor.next();
    }
}

impl<C: InputCursor> CursorIter<C> {
    /// Post-step for single-pass cursors.
    ///
    /// Returns a [`StepGuard`] carrying the current element; the cursor
    /// advances when the guard drops. Deliberately *not* a copy of the
    /// iterator: a single-pass source cannot support two live positions,
    /// and the guard's mutable borrow makes that unrepresentable. On
    /// multi-pass cursors prefer [`step`](CursorIter::step), which does
    /// not exist below the forward tier:
    ///
    /// ```compile_fail
    /// use rove_iter::scan::tokens;
    ///
    /// let mut it = tokens::<i32, _>("1 2".as_bytes()).into_first();
    /// let _copy = it.step();
    /// ```
    #[inline]
    pub fn take_step(&mut self) -> StepGuard<'_, C> {
        StepGuard::new(&mut self.cursor)
    }
}

impl<C: ForwardCursor> CursorIter<C> {
    /// Post-step for multi-pass cursors: advances and returns the
    /// pre-step iterator by copy.
    #[inline]
    pub fn step(&mut self) -> Self {
        let before = self.clone();
        self.bump();
        before
    }

    /// Advances by `n` positions; see
    /// [`ForwardCursor::advance`](rove_core::cursor::ForwardCursor::advance)
    /// for the cost and sign contract per tier.
    #[inline]
    pub fn advance(&mut self, n: C::Offset) {
        self.cursor.advance(n);
    }

    /// Returns the number of steps from `self` to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> C::Offset {
        self.cursor.distance_to(&other.cursor)
    }
}

impl<C: BidirectionalCursor> CursorIter<C> {
    /// Retreats to the previous position (pre-decrement).
    #[inline]
    pub fn retreat(&mut self) {
        self.cursor.prev();
    }

    /// Post-step backwards: retreats and returns the pre-step iterator by
    /// copy.
    #[inline]
    pub fn step_back(&mut self) -> Self {
        let before = self.clone();
        self.retreat();
        before
    }
}

impl<C: RandomAccessCursor> CursorIter<C> {
    /// Reads the element `n` positions away (the subscript of this
    /// iterator family; a value, since the element may not be
    /// addressable).
    #[inline]
    pub fn at(&self, n: C::Offset) -> C::Item {
        let mut probe = self.clone();
        probe.cursor.advance(n);
        probe.get()
    }
}

impl<C, D> PartialEq<CursorIter<D>> for CursorIter<C>
where
    C: PartialEq<D>,
{
    #[inline]
    fn eq(&self, other: &CursorIter<D>) -> bool {
        self.cursor == other.cursor
    }
}

impl<C: Eq> Eq for CursorIter<C> {}

impl<C: RandomAccessCursor> PartialOrd for CursorIter<C> {
    /// Ordering is derived from signed distance: `a < b` agrees with the
    /// sign of `b - a`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let zero: C::Offset = Zero::zero();
        let d = self.cursor.distance_to(&other.cursor);
        Some(if d > zero {
            Ordering::Less
        } else if d < zero {
            Ordering::Greater
        } else {
            Ordering::Equal
        })
    }
}

impl<C: RandomAccessCursor> AddAssign<C::Offset> for CursorIter<C> {
    #[inline]
    fn add_assign(&mut self, n: C::Offset) {
        self.cursor.advance(n);
    }
}

impl<C: RandomAccessCursor> SubAssign<C::Offset> for CursorIter<C> {
    /// Subtracting an offset is adding its negation.
    #[inline]
    fn sub_assign(&mut self, n: C::Offset) {
        self.cursor.advance(-n);
    }
}

impl<C: RandomAccessCursor> Add<C::Offset> for CursorIter<C> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: C::Offset) -> Self {
        self += n;
        self
    }
}

impl<C: RandomAccessCursor> Sub<C::Offset> for CursorIter<C> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: C::Offset) -> Self {
        self -= n;
        self
    }
}

impl<'a, 'b, C: RandomAccessCursor> Sub<&'b CursorIter<C>> for &'a CursorIter<C> {
    type Output = C::Offset;

    /// Iterator-to-iterator distance: `&a - &b` is the number of steps
    /// from `b` to `a`.
    #[inline]
    fn sub(self, rhs: &'b CursorIter<C>) -> C::Offset {
        rhs.cursor.distance_to(&self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::slice_range;

    #[test]
    fn test_read_and_bump() {
        let data = [1, 2, 3];
        let mut it = slice_range(&data).into_first();
        assert_eq!(it.get(), 1);
        assert_eq!(*it.get_ref(), 1);
        it.bump();
        assert_eq!(it.get(), 2);
    }

    #[test]
    fn test_multi_pass_step_returns_pre_step_copy() {
        let data = [7, 8, 9];
        let mut it = slice_range(&data).into_first();
        let before = it.step();
        assert_eq!(before.get(), 7);
        assert_eq!(it.get(), 8);
    }

    #[test]
    fn test_retreat_and_step_back() {
        let data = [1, 2, 3];
        let mut it = slice_range(&data).into_first();
        it += 2;
        let before = it.step_back();
        assert_eq!(before.get(), 3);
        assert_eq!(it.get(), 2);
        it.retreat();
        assert_eq!(it.get(), 1);
    }

    #[test]
    fn test_random_access_identities() {
        let data = [0, 10, 20, 30, 40];
        let it = slice_range(&data).into_first();
        for n in 0..=4isize {
            let there = it.clone() + n;
            assert_eq!((there.clone() - n), it);
            assert_eq!(&there - &it, n);
        }
    }

    #[test]
    fn test_ordering_agrees_with_distance_sign() {
        let data = [1, 2, 3, 4];
        let a = slice_range(&data).into_first();
        let b = a.clone() + 2;
        assert!(a < b);
        assert!(b > a);
        assert!(a <= a.clone());
        assert_eq!(&b - &a, 2);
        assert_eq!(&a - &b, -2);
    }

    #[test]
    fn test_subscript_reads_offset_element() {
        let data = [5, 6, 7, 8];
        let it = slice_range(&data).into_first() + 1;
        assert_eq!(it.at(0), 6);
        assert_eq!(it.at(2), 8);
        assert_eq!(it.at(-1), 5);
    }

    #[test]
    fn test_sentinel_comparison() {
        let data = [1];
        let range = slice_range(&data);
        let mut it = range.first().clone();
        assert!(!it.at_end(range.sentinel()));
        it.bump();
        assert!(it.at_end(range.sentinel()));
    }

    #[test]
    fn test_declared_tier_is_exposed() {
        fn tier_of<C: Cursor>(_: &CursorIter<C>) -> Tier {
            CursorIter::<C>::tier()
        }
        let data = [1];
        let it = slice_range(&data).into_first();
        assert_eq!(tier_of(&it), Tier::Contiguous);
    }

    #[test]
    fn test_compound_assignment() {
        let data = [1, 2, 3, 4, 5];
        let mut it = slice_range(&data).into_first();
        it += 4;
        assert_eq!(it.get(), 5);
        it -= 3;
        assert_eq!(it.get(), 2);
    }
}

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

//! # Capability Tiers
//!
//! The strict lattice a cursor climbs as it gains primitives:
//!
//! ```text
//! Input ⊂ Forward ⊂ Bidirectional ⊂ RandomAccess ⊂ Contiguous
//! ```
//!
//! with `Output` as a parallel leaf for write-only sinks. Tiers come in
//! two shapes:
//!
//! - **Structural aliases** (`InputCursor`, `OutputCursor`,
//!   `BidirectionalCursor`): blanket-implemented whenever the required
//!   primitives are present. Implementing the primitives *is* reaching
//!   the tier.
//! - **Explicit opt-ins** (`ForwardCursor`, `RandomAccessCursor`,
//!   `ContiguousCursor`): a declaration of semantics that cannot be
//!   inferred from signatures — multi-pass safety, O(1) seek arithmetic,
//!   contiguous storage. A streaming cursor that happens to support
//!   equality stays single-pass simply by never declaring
//!   `ForwardCursor`.
//!
//! ## Dispatch
//!
//! `ForwardCursor` carries `advance` and `distance_to` as provided
//! methods with linear walking defaults. Random-access cursors override
//! both with constant-time bodies as part of their declared contract, so
//! generic algorithms written against the forward interface transparently
//! speed up — the same effect C++ category-tag dispatch achieves, done
//! the way `Iterator::nth` does it.

use super::capability::{NextCursor, PrevCursor, ReadCursor, WriteCursor};
use num_traits::{One, Zero};

/// The canonical capability tag of a cursor type.
///
/// Declared via [`Cursor::TIER`](super::capability::Cursor::TIER); must
/// agree with the tier traits the type implements. `Output` is a parallel
/// leaf: it is comparable only with itself.
///
/// # Examples
///
/// ```rust
/// # use rove_core::cursor::Tier;
/// assert!(Tier::RandomAccess.at_least(Tier::Forward));
/// assert!(!Tier::Input.at_least(Tier::Forward));
/// assert!(!Tier::Output.at_least(Tier::Input));
/// assert!(Tier::Output.at_least(Tier::Output));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Write-only sink: write + advance-by-one.
    Output,
    /// Readable + advance-by-one. The promotion minimum.
    Input,
    /// Input + multi-pass (cloneable, equality-comparable).
    Forward,
    /// Forward + retreat-by-one.
    Bidirectional,
    /// Bidirectional + O(1) signed advance and distance.
    RandomAccess,
    /// RandomAccess over one contiguous, directly addressable block.
    Contiguous,
}

impl Tier {
    const fn rank(self) -> u8 {
        match self {
            Tier::Output => 0,
            Tier::Input => 0,
            Tier::Forward => 1,
            Tier::Bidirectional => 2,
            Tier::RandomAccess => 3,
            Tier::Contiguous => 4,
        }
    }

    /// Returns `true` if `self` satisfies every requirement of `floor`.
    ///
    /// `Output` sits outside the read lattice: it satisfies only itself,
    /// and no read tier satisfies it.
    #[inline]
    pub const fn at_least(self, floor: Tier) -> bool {
        match (self, floor) {
            (Tier::Output, Tier::Output) => true,
            (Tier::Output, _) | (_, Tier::Output) => false,
            _ => self.rank() >= floor.rank(),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Output => "output",
            Tier::Input => "input",
            Tier::Forward => "forward",
            Tier::Bidirectional => "bidirectional",
            Tier::RandomAccess => "random-access",
            Tier::Contiguous => "contiguous",
        };
        write!(f, "{}", name)
    }
}

/// Input tier: readable and able to advance by one.
///
/// Structural alias — implemented automatically for every cursor with the
/// required primitives. This is the minimum for iterator promotion.
pub trait InputCursor: ReadCursor + NextCursor {}

impl<C> InputCursor for C where C: ReadCursor + NextCursor {}

/// Output tier: writable and able to advance by one.
///
/// Structural alias; the parallel leaf for write-only sinks such as
/// stream adapters.
pub trait OutputCursor: WriteCursor + NextCursor {}

impl<C> OutputCursor for C where C: WriteCursor + NextCursor {}

/// Forward tier: multi-pass input.
///
/// **Explicit opt-in.** Implementing this trait declares that the cursor
/// may be cloned and revisited: two clones advanced independently observe
/// the same elements, and equality identifies positions. A single-pass
/// source (a stream that is consumed by reading) must never declare it —
/// that absence, not a marker type, is what keeps streams out of
/// multi-pass algorithms.
pub trait ForwardCursor: InputCursor + Clone + PartialEq {
    /// Advances the cursor by `n` positions.
    ///
    /// The default walks one step at a time and requires `n >= 0`.
    /// [`RandomAccessCursor`] implementations override it with an O(1)
    /// body that also accepts negative offsets.
    fn advance(&mut self, n: Self::Offset) {
        let zero: Self::Offset = Zero::zero();
        let one: Self::Offset = One::one();
        debug_assert!(
            n >= zero,
            "called `advance` with a negative offset on a forward-only cursor"
        );
        let mut left = n;
        while left > zero {
            self.next();
            left = left - one;
        }
    }

    /// Returns the number of `next` steps from `self` to `other`.
    ///
    /// The default walks and counts; `other` must be reachable from
    /// `self`. [`RandomAccessCursor`] implementations override it with an
    /// O(1) body whose result may also be negative.
    fn distance_to(&self, other: &Self) -> Self::Offset {
        let one: Self::Offset = One::one();
        let mut probe = self.clone();
        let mut n: Self::Offset = Zero::zero();
        while probe != *other {
            probe.next();
            n = n + one;
        }
        n
    }
}

/// Bidirectional tier: forward plus retreat-by-one.
///
/// Structural alias — reached automatically once a forward cursor also
/// implements [`PrevCursor`].
pub trait BidirectionalCursor: ForwardCursor + PrevCursor {}

impl<C> BidirectionalCursor for C where C: ForwardCursor + PrevCursor {}

/// RandomAccess tier: bidirectional plus constant-time seek arithmetic.
///
/// **Explicit opt-in contract** (in the spirit of `ExactSizeIterator`):
/// implementing this trait declares that
///
/// - [`ForwardCursor::advance`] is overridden with an O(1) body accepting
///   negative offsets, and
/// - [`ForwardCursor::distance_to`] is overridden with an O(1) body whose
///   sign encodes direction, consistent with `next`/`prev` stepping.
///
/// The relational operators and iterator subtraction in the promotion
/// crate are gated on this trait, because they are only meaningful when
/// distance is total and cheap.
pub trait RandomAccessCursor: BidirectionalCursor {}

/// Contiguous tier: random access over one contiguous block of storage.
///
/// **Explicit opt-in.** Contiguity cannot be inferred from the other
/// primitives — a deque-like cursor can be random-access without its
/// elements being adjacent in memory. The
/// [`DirectCursor`](super::capability::DirectCursor) supertrait bound
/// carries the true-reference requirement: a proxy-based sequence cannot
/// claim this tier.
pub trait ContiguousCursor: RandomAccessCursor + super::capability::DirectCursor {
    /// Returns a raw pointer to the element at the current position.
    ///
    /// Valid for reads of up to the remaining length of the sequence,
    /// for as long as the underlying storage is borrowed.
    fn as_ptr(&self) -> *const Self::Item;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::capability::{Cursor, DirectCursor};

    #[test]
    fn test_tier_lattice_order() {
        assert!(Tier::Contiguous.at_least(Tier::RandomAccess));
        assert!(Tier::RandomAccess.at_least(Tier::Bidirectional));
        assert!(Tier::Bidirectional.at_least(Tier::Forward));
        assert!(Tier::Forward.at_least(Tier::Input));
        assert!(Tier::Input.at_least(Tier::Input));

        assert!(!Tier::Input.at_least(Tier::Forward));
        assert!(!Tier::Forward.at_least(Tier::Bidirectional));
    }

    #[test]
    fn test_output_is_a_parallel_leaf() {
        assert!(Tier::Output.at_least(Tier::Output));
        assert!(!Tier::Output.at_least(Tier::Input));
        assert!(!Tier::Contiguous.at_least(Tier::Output));
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(Tier::RandomAccess.to_string(), "random-access");
        assert_eq!(Tier::Output.to_string(), "output");
    }

    // A forward cursor over a counted prefix of the naturals, relying on
    // the provided walking defaults.
    #[derive(Clone, PartialEq, Eq, Debug)]
    struct Counted {
        pos: i64,
    }

    impl Cursor for Counted {
        type Item = i64;
        type Offset = i64;
        const TIER: Tier = Tier::Forward;
    }

    impl DirectCursor for Counted {
        fn read_ref(&self) -> &i64 {
            &self.pos
        }
    }

    impl NextCursor for Counted {
        fn next(&mut self) {
            self.pos += 1;
        }
    }

    impl ForwardCursor for Counted {}

    #[test]
    fn test_walking_advance_default() {
        let mut c = Counted { pos: 3 };
        c.advance(4);
        assert_eq!(c.pos, 7);
        c.advance(0);
        assert_eq!(c.pos, 7);
    }

    #[test]
    fn test_walking_distance_default() {
        let a = Counted { pos: 2 };
        let b = Counted { pos: 9 };
        assert_eq!(a.distance_to(&b), 7);
        assert_eq!(a.distance_to(&a), 0);
    }
}

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

//! # Sentinels
//!
//! A *sentinel* is any value that can answer "has this cursor reached the
//! end?". It need not be a cursor itself: a stream cursor's end is a
//! state ("the source is exhausted"), not a position, so the unit
//! [`EndOfInput`] sentinel suffices. Multi-pass cursors, on the other
//! hand, delimit ranges with a second cursor — the blanket impl below
//! makes every forward cursor its own sentinel via equality.

use super::capability::{Cursor, NextCursor};
use super::tier::ForwardCursor;
use num_traits::{One, Zero};

/// A terminating condition for cursors of type `C`.
pub trait SentinelFor<C: Cursor> {
    /// Returns `true` if `cursor` has reached this sentinel.
    fn is_end(&self, cursor: &C) -> bool;

    /// Returns the number of `next` steps from `cursor` to this sentinel.
    ///
    /// The default walks and counts, so it requires a multi-pass cursor;
    /// the sentinel must be reachable. Sized sentinels (notably a forward
    /// cursor acting as its own sentinel) override this with the cursor's
    /// `distance_to`, which is O(1) at the random-access tier.
    fn distance_from(&self, cursor: &C) -> C::Offset
    where
        C: ForwardCursor,
    {
        let one: C::Offset = One::one();
        let mut probe = cursor.clone();
        let mut n: C::Offset = Zero::zero();
        while !self.is_end(&probe) {
            probe.next();
            n = n + one;
        }
        n
    }
}

impl<C> SentinelFor<C> for C
where
    C: ForwardCursor,
{
    #[inline]
    fn is_end(&self, cursor: &C) -> bool {
        cursor == self
    }

    #[inline]
    fn distance_from(&self, cursor: &C) -> C::Offset {
        cursor.distance_to(self)
    }
}

/// The unit sentinel for stream cursors.
///
/// Stream-reading and stream-writing cursors have no end *position*; they
/// transition into an exhausted or failed state instead. Such cursors
/// implement `SentinelFor<Self> for EndOfInput` by testing that state, so
/// "compare against the sentinel after every step" works uniformly for
/// positions and streams alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EndOfInput;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::capability::{Cursor, DirectCursor};
    use crate::cursor::tier::Tier;

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
    fn test_forward_cursor_is_its_own_sentinel() {
        let first = Counted { pos: 0 };
        let last = Counted { pos: 5 };
        assert!(!last.is_end(&first));
        assert!(last.is_end(&last.clone()));
        assert_eq!(last.distance_from(&first), 5);
    }

    struct Exhaustible {
        remaining: u32,
    }

    impl Cursor for Exhaustible {
        type Item = u32;
        type Offset = isize;
        const TIER: Tier = Tier::Input;
    }

    impl NextCursor for Exhaustible {
        fn next(&mut self) {
            self.remaining = self.remaining.saturating_sub(1);
        }
    }

    impl SentinelFor<Exhaustible> for EndOfInput {
        fn is_end(&self, cursor: &Exhaustible) -> bool {
            cursor.remaining == 0
        }
    }

    #[test]
    fn test_end_of_input_tracks_state() {
        let mut stream = Exhaustible { remaining: 2 };
        assert!(!EndOfInput.is_end(&stream));
        stream.next();
        stream.next();
        assert!(EndOfInput.is_end(&stream));
        stream.next();
        assert!(EndOfInput.is_end(&stream));
    }
}

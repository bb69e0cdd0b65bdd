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

//! # Cursor Primitives
//!
//! One trait per cursor primitive. A cursor type picks the exact set of
//! primitives it can honestly support; nothing is inferred and there is no
//! shared base type beyond `Cursor` itself. Generic code then asks for the
//! weakest sufficient combination as trait bounds, so a missing primitive
//! is a missing bound — rejected when the caller compiles, never at
//! runtime.
//!
//! ## The read split
//!
//! Two read flavors exist because not every sequence can hand out a real
//! address:
//!
//! - `DirectCursor::read_ref` returns a *true reference* into the
//!   underlying storage (slices, buffered stream heads).
//! - `ReadCursor::read` materializes the element *by value* (bit-packed
//!   fields, computed views). Every direct cursor with a cloneable item is
//!   also a `ReadCursor` through a blanket impl.
//!
//! A cursor that is readable and writable but **not** direct is the case
//! the proxy-reference machinery in the iterator crate exists for.

use super::tier::Tier;
use crate::num::Offset;

/// The base trait of every cursor: a position inside some sequence.
///
/// A cursor on its own can do nothing; capabilities are added by the
/// companion traits in this module. The associated types are the
/// classification output every other component consumes:
///
/// - `Item` is the element (value) type of the sequence.
/// - `Offset` is the signed difference type used by distance and random
///   advance arithmetic. The [`Offset`](crate::num::Offset) bound is what
///   makes "difference types are signed integers" a compile-time fact.
///
/// `TIER` is the declared capability tag. It must agree with the set of
/// capability and tier traits the type actually implements; the tag is
/// consumed by diagnostics and by code that wants to branch on a cursor's
/// ceiling at runtime without naming the tier traits.
pub trait Cursor {
    /// The element type of the underlying sequence.
    type Item;

    /// The signed difference type for distances and offsets.
    type Offset: Offset;

    /// The declared capability tier of this cursor type.
    const TIER: Tier;
}

/// A cursor whose element can be materialized by value.
///
/// This is the universal read: every promotable cursor supports it either
/// directly or through the blanket impl for [`DirectCursor`] types with
/// cloneable items.
pub trait ReadCursor: Cursor {
    /// Materializes the element at the current position.
    ///
    /// # Panics
    ///
    /// Implementations may panic if the cursor is not at a readable
    /// position (for example, past the end of the sequence).
    fn read(&self) -> Self::Item;

    /// Extracts the element at the current position, consuming it where
    /// the cursor can do so more cheaply than a copy.
    ///
    /// The default forwards to [`read`](ReadCursor::read); cursors with a
    /// destructive fast path may override it.
    #[inline]
    fn read_move(&mut self) -> Self::Item {
        self.read()
    }
}

/// A cursor whose element is directly addressable: reading yields a true
/// reference into the underlying storage.
///
/// This is the "native reference" capability. Cursors over computed or
/// packed sequences cannot implement it; they stay at [`ReadCursor`] and
/// the iterator crate synthesizes proxy references for them instead.
pub trait DirectCursor: Cursor {
    /// Returns a reference to the element at the current position.
    ///
    /// # Panics
    ///
    /// Implementations may panic if the cursor is not at a readable
    /// position.
    fn read_ref(&self) -> &Self::Item;
}

impl<C> ReadCursor for C
where
    C: DirectCursor,
    C::Item: Clone,
{
    #[inline]
    fn read(&self) -> Self::Item {
        self.read_ref().clone()
    }
}

/// A direct cursor that can also hand out exclusive references.
///
/// Only cursors holding exclusive access to their storage can implement
/// this; it is the true-mutable-reference counterpart of the proxy write
/// path.
pub trait DirectCursorMut: DirectCursor {
    /// Returns an exclusive reference to the element at the current
    /// position.
    fn read_mut(&mut self) -> &mut Self::Item;
}

/// A cursor that can overwrite the element at its current position.
pub trait WriteCursor: Cursor {
    /// Writes `value` into the current position.
    fn write(&mut self, value: Self::Item);
}

/// A cursor that can advance by one position.
pub trait NextCursor: Cursor {
    /// Advances to the next position.
    fn next(&mut self);
}

/// A cursor that can retreat by one position.
pub trait PrevCursor: Cursor {
    /// Retreats to the previous position.
    fn prev(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal direct cursor over a static slice, used to exercise the
    // blanket `ReadCursor` impl.
    #[derive(Clone)]
    struct Probe {
        data: &'static [i32],
        pos: usize,
    }

    impl Cursor for Probe {
        type Item = i32;
        type Offset = isize;
        const TIER: Tier = Tier::Input;
    }

    impl DirectCursor for Probe {
        fn read_ref(&self) -> &i32 {
            &self.data[self.pos]
        }
    }

    impl NextCursor for Probe {
        fn next(&mut self) {
            self.pos += 1;
        }
    }

    #[test]
    fn test_blanket_read_from_direct() {
        let mut probe = Probe {
            data: &[10, 20, 30],
            pos: 0,
        };
        assert_eq!(probe.read(), 10);
        assert_eq!(*probe.read_ref(), 10);
        probe.next();
        assert_eq!(probe.read(), 20);
        // The default move-read forwards to the materializing read.
        assert_eq!(probe.read_move(), 20);
    }
}

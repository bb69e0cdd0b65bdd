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

//! # Proxy References
//!
//! Some sequences cannot hand out a real address for their elements: a
//! bit-packed field is computed on read and repacked on write, so no
//! `&mut T` into the storage can exist. Generic code still wants an
//! object that behaves like "a reference to the element" — readable,
//! assignable, comparable. The proxy types here are that object.
//!
//! A proxy is synthesized precisely when a cursor is readable **and**
//! writable but not direct (no true reference); the trait bounds on the
//! constructors are the compile-time form of that rule. Each proxy holds
//! a borrow of its originating cursor, so the "must not outlive the
//! iterator" contract is enforced by the borrow checker rather than by
//! documentation.
//!
//! ## Conversion surface
//!
//! The convertible-target set is closed and small: the element value via
//! [`ProxyMut::get`]/[`Proxy::to_value`], and a true `&Item` via `as_ref`
//! only when the cursor is additionally direct. Nothing is converted
//! implicitly.
//!
//! ## Single-pass post-step
//!
//! [`StepGuard`] is the companion for single-pass advancement: it carries
//! the pre-step element, optionally writes back to the pre-step position,
//! and advances the cursor when dropped. Because it mutably borrows the
//! cursor, two live positions into a single-pass stream cannot be
//! expressed at all.

use rove_core::cursor::{DirectCursor, NextCursor, ReadCursor, WriteCursor};

/// Read access shared by all proxy flavors; the hook for cross-proxy
/// assignment between different cursor types.
pub trait ReadProxy {
    /// The element type the proxy materializes.
    type Item;

    /// Materializes the element behind the proxy.
    fn value(&self) -> Self::Item;
}

/// A shared (read-side) reference surrogate for a non-addressable
/// element.
///
/// Created by [`CursorIter::proxy`](crate::iter::CursorIter::proxy); the
/// counterpart of a `&T` where no `&T` can exist.
pub struct Proxy<'a, C> {
    cursor: &'a C,
}

impl<'a, C> Proxy<'a, C>
where
    C: ReadCursor + WriteCursor,
{
    /// Binds a read proxy to `cursor`.
    ///
    /// The `ReadCursor + WriteCursor` bound is the synthesis rule: proxies
    /// exist only for readable, writable sequences.
    #[inline]
    pub fn new(cursor: &'a C) -> Self {
        Self { cursor }
    }

    /// Materializes the element behind the proxy.
    #[inline]
    pub fn get(&self) -> C::Item {
        self.cursor.read()
    }

    /// Consumes the proxy, materializing the element.
    #[inline]
    pub fn to_value(self) -> C::Item {
        self.cursor.read()
    }
}

impl<'a, C> Proxy<'a, C>
where
    C: ReadCursor + WriteCursor + DirectCursor,
{
    /// Returns the true reference for cursors that also happen to be
    /// direct. Part of the closed conversion surface.
    #[inline]
    pub fn as_ref(&self) -> &'a C::Item {
        self.cursor.read_ref()
    }
}

/// An exclusive reference surrogate: reads, and writes through to the
/// originating cursor.
///
/// Every mutation route a `&mut T` would offer has an explicit method
/// here: [`set`](ProxyMut::set) (assign by move), [`set_from`]
/// (assign by copy), [`replace`] (assign returning the old element) and
/// [`assign_from`] (assign from another proxy of a compatible cursor).
///
/// [`set_from`]: ProxyMut::set_from
/// [`replace`]: ProxyMut::replace
/// [`assign_from`]: ProxyMut::assign_from
///
/// # Examples
///
/// ```rust
/// use rove_iter::packed::PackedStore;
///
/// let store = PackedStore::from_values(5, &[3, 9, 27]);
/// let mut it = store.range().into_first();
/// it.bump();
/// let mut proxy = it.proxy_mut();
/// assert_eq!(proxy.replace(10), 9);
/// assert_eq!(proxy.get(), 10);
/// ```
pub struct ProxyMut<'a, C> {
    cursor: &'a mut C,
}

impl<'a, C> ProxyMut<'a, C>
where
    C: ReadCursor + WriteCursor,
{
    /// Binds a write-capable proxy to `cursor`.
    #[inline]
    pub fn new(cursor: &'a mut C) -> Self {
        Self { cursor }
    }

    /// Materializes the element behind the proxy.
    #[inline]
    pub fn get(&self) -> C::Item {
        self.cursor.read()
    }

    /// Assigns `value` to the element, moving it into the cursor's write.
    #[inline]
    pub fn set(&mut self, value: C::Item) {
        self.cursor.write(value);
    }

    /// Assigns a copy of the borrowed `value` to the element.
    #[inline]
    pub fn set_from(&mut self, value: &C::Item)
    where
        C::Item: Clone,
    {
        self.cursor.write(value.clone());
    }

    /// Assigns `value` to the element and returns the previous element.
    #[inline]
    pub fn replace(&mut self, value: C::Item) -> C::Item {
        let old = self.cursor.read();
        self.cursor.write(value);
        old
    }

    /// Assigns the element read through `other`, a proxy over a possibly
    /// different cursor type whose element converts into ours.
    #[inline]
    pub fn assign_from<P>(&mut self, other: &P)
    where
        P: ReadProxy,
        P::Item: Into<C::Item>,
    {
        self.cursor.write(other.value().into());
    }
}

impl<'a, C> ProxyMut<'a, C>
where
    C: ReadCursor + WriteCursor + DirectCursor,
{
    /// Returns the true reference for cursors that also happen to be
    /// direct. Part of the closed conversion surface.
    #[inline]
    pub fn as_ref(&self) -> &C::Item {
        self.cursor.read_ref()
    }
}

impl<'a, C: ReadCursor> ReadProxy for Proxy<'a, C> {
    type Item = C::Item;

    #[inline]
    fn value(&self) -> C::Item {
        self.cursor.read()
    }
}

impl<'a, C: ReadCursor> ReadProxy for ProxyMut<'a, C> {
    type Item = C::Item;

    #[inline]
    fn value(&self) -> C::Item {
        self.cursor.read()
    }
}

macro_rules! impl_proxy_value_eq {
    ($proxy:ident) => {
        impl<'a, C> PartialEq<C::Item> for $proxy<'a, C>
        where
            C: ReadCursor,
            C::Item: PartialEq,
        {
            #[inline]
            fn eq(&self, other: &C::Item) -> bool {
                self.cursor.read() == *other
            }
        }
    };
}

macro_rules! impl_proxy_proxy_eq {
    ($lhs:ident, $rhs:ident) => {
        impl<'a, 'b, C, D> PartialEq<$rhs<'b, D>> for $lhs<'a, C>
        where
            C: ReadCursor,
            D: ReadCursor,
            C::Item: PartialEq<D::Item>,
        {
            #[inline]
            fn eq(&self, other: &$rhs<'b, D>) -> bool {
                self.cursor.read() == other.cursor.read()
            }
        }
    };
}

impl_proxy_value_eq!(Proxy);
impl_proxy_value_eq!(ProxyMut);
impl_proxy_proxy_eq!(Proxy, Proxy);
impl_proxy_proxy_eq!(Proxy, ProxyMut);
impl_proxy_proxy_eq!(ProxyMut, Proxy);
impl_proxy_proxy_eq!(ProxyMut, ProxyMut);

macro_rules! impl_proxy_fmt {
    ($proxy:ident) => {
        impl<'a, C> std::fmt::Debug for $proxy<'a, C>
        where
            C: ReadCursor,
            C::Item: std::fmt::Debug,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($proxy))
                    .field(&self.cursor.read())
                    .finish()
            }
        }
    };
}

impl_proxy_fmt!(Proxy);
impl_proxy_fmt!(ProxyMut);

/// The result of post-step advancement on a single-pass cursor.
///
/// Holds the pre-step element; `set` (available when the cursor is
/// writable) writes back to the pre-step position. The underlying cursor
/// advances exactly once, when the guard drops — including when the
/// guard is never used. Because the guard borrows the cursor mutably, no
/// second live position can be formed while it exists.
pub struct StepGuard<'a, C>
where
    C: ReadCursor + NextCursor,
{
    cursor: &'a mut C,
    value: Option<C::Item>,
}

impl<'a, C> StepGuard<'a, C>
where
    C: ReadCursor + NextCursor,
{
    pub(crate) fn new(cursor: &'a mut C) -> Self {
        let value = Some(cursor.read());
        Self { cursor, value }
    }

    /// Borrows the pre-step element.
    #[inline]
    pub fn peek(&self) -> &C::Item {
        self.value
            .as_ref()
            .expect("called `peek` after the element was extracted")
    }

    /// Returns a copy of the pre-step element.
    #[inline]
    pub fn get(&self) -> C::Item
    where
        C::Item: Clone,
    {
        self.peek().clone()
    }

    /// Consumes the guard, returning the pre-step element by value. The
    /// cursor still advances.
    #[inline]
    pub fn into_value(mut self) -> C::Item {
        self.value
            .take()
            .expect("called `into_value` after the element was extracted")
    }

    /// Writes `value` to the pre-step position.
    #[inline]
    pub fn set(&mut self, value: C::Item)
    where
        C: WriteCursor,
    {
        self.cursor.write(value);
    }
}

impl<'a, C> Drop for StepGuard<'a, C>
where
    C: ReadCursor + NextCursor,
{
    fn drop(&mut self) {
        self.cursor.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rove_core::cursor::{Cursor, Tier};

    // A writable cursor over a computed (non-addressable) sequence: the
    // storage keeps values doubled, reads halve, writes double.
    #[derive(Debug)]
    struct Doubled {
        cells: Vec<std::cell::Cell<i32>>,
        pos: usize,
    }

    impl Doubled {
        fn new(values: &[i32]) -> Self {
            Self {
                cells: values.iter().map(|v| std::cell::Cell::new(v * 2)).collect(),
                pos: 0,
            }
        }
    }

    impl Cursor for Doubled {
        type Item = i32;
        type Offset = isize;
        const TIER: Tier = Tier::Input;
    }

    impl ReadCursor for Doubled {
        fn read(&self) -> i32 {
            self.cells[self.pos].get() / 2
        }
    }

    impl WriteCursor for Doubled {
        fn write(&mut self, value: i32) {
            self.cells[self.pos].set(value * 2);
        }
    }

    impl NextCursor for Doubled {
        fn next(&mut self) {
            self.pos += 1;
        }
    }

    #[test]
    fn test_proxy_round_trip() {
        let mut cursor = Doubled::new(&[1, 2, 3]);
        let mut proxy = ProxyMut::new(&mut cursor);
        assert_eq!(proxy.get(), 1);
        proxy.set(7);
        assert_eq!(proxy.get(), 7);
        assert_eq!(proxy.replace(9), 7);
        assert_eq!(proxy.get(), 9);
    }

    #[test]
    fn test_proxy_set_from_borrowed() {
        let mut cursor = Doubled::new(&[5]);
        let mut proxy = ProxyMut::new(&mut cursor);
        let source = 11;
        proxy.set_from(&source);
        assert_eq!(proxy.get(), 11);
    }

    #[test]
    fn test_proxy_equality() {
        let mut a = Doubled::new(&[4]);
        let b = Doubled::new(&[4]);
        let pa = ProxyMut::new(&mut a);
        let pb = Proxy::new(&b);
        assert!(pa == 4);
        assert!(pa == pb);
        assert!(pb == pa);
    }

    #[test]
    fn test_cross_proxy_assignment() {
        let src = Doubled::new(&[42]);
        let mut dst = Doubled::new(&[0]);
        let reader = Proxy::new(&src);
        let mut writer = ProxyMut::new(&mut dst);
        writer.assign_from(&reader);
        assert_eq!(writer.get(), 42);
    }

    #[test]
    fn test_step_guard_advances_once_on_drop() {
        let mut cursor = Doubled::new(&[1, 2, 3]);
        {
            let _unused = StepGuard::new(&mut cursor);
        }
        {
            let _unused = StepGuard::new(&mut cursor);
        }
        assert_eq!(cursor.pos, 2);
        assert_eq!(cursor.read(), 3);
    }

    #[test]
    fn test_step_guard_reads_pre_step_element() {
        let mut cursor = Doubled::new(&[10, 20]);
        let guard = StepGuard::new(&mut cursor);
        assert_eq!(*guard.peek(), 10);
        assert_eq!(guard.into_value(), 10);
        assert_eq!(cursor.read(), 20);
    }

    #[test]
    fn test_step_guard_writes_to_pre_step_position() {
        let mut cursor = Doubled::new(&[10, 20]);
        {
            let mut guard = StepGuard::new(&mut cursor);
            guard.set(99);
        }
        // The write landed on the element we stepped over.
        assert_eq!(cursor.pos, 1);
        assert_eq!(cursor.cells[0].get(), 198);
    }
}

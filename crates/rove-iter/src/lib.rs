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

//! # Rove Iter
//!
//! Iterator promotion for the Rove cursor vocabulary: wrap any conforming
//! cursor in [`iter::CursorIter`] and it grows exactly the operations its
//! capability tier permits — nothing more, checked at compile time.
//!
//! ## Modules
//!
//! - `iter`: The promotion wrapper `CursorIter<C>` with its trait-gated
//!   operation surface and operators.
//! - `proxy`: Reference surrogates (`Proxy`, `ProxyMut`) for writable
//!   sequences without addressable elements, and the single-pass
//!   post-step guard (`StepGuard`).
//! - `range`: `CursorRange<C, S>` pairing an iterator with a sentinel,
//!   plus the bridge into `std::iter::Iterator`.
//! - `slice`: Cursors over borrowed slices (the contiguous tier) and an
//!   exclusive mutable walker.
//! - `packed`: A fixed-width bit-packed store whose cursor reads computed
//!   values — the canonical proxy-reference client.
//! - `scan`: A single-pass token-scanning cursor over any buffered
//!   reader.
//! - `sink`: A write-only cursor over any byte sink.

pub mod iter;
pub mod packed;
pub mod proxy;
pub mod range;
pub mod scan;
pub mod sink;
pub mod slice;

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

//! # Cursor Capability System
//!
//! A *cursor* is the minimal position-in-sequence primitive from which the
//! iterator crates synthesize full iterators. A concrete cursor type
//! declares exactly the primitives it supports by implementing the
//! fine-grained capability traits, and the tier lattice classifies the
//! result.
//!
//! ## Submodules
//!
//! - `capability`: One trait per primitive — `ReadCursor`, `DirectCursor`,
//!   `DirectCursorMut`, `WriteCursor`, `NextCursor`, `PrevCursor` — plus
//!   the `Cursor` base with its associated `Item` and `Offset` types.
//! - `tier`: The capability lattice `Input ⊂ Forward ⊂ Bidirectional ⊂
//!   RandomAccess ⊂ Contiguous` (with `Output` as a parallel leaf for
//!   write-only sinks) and the `Tier` category tag.
//! - `sentinel`: End-of-sequence testing via `SentinelFor` and the
//!   `EndOfInput` unit sentinel for stream cursors.

pub mod capability;
pub mod sentinel;
pub mod tier;

pub use capability::{
    Cursor, DirectCursor, DirectCursorMut, NextCursor, PrevCursor, ReadCursor, WriteCursor,
};
pub use sentinel::{EndOfInput, SentinelFor};
pub use tier::{
    BidirectionalCursor, ContiguousCursor, ForwardCursor, InputCursor, OutputCursor,
    RandomAccessCursor, Tier,
};

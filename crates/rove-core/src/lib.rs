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

//! # Rove Core
//!
//! Foundational trait vocabulary for the Rove generic-sequence ecosystem.
//! This crate defines what a *cursor* is — a minimal position-in-sequence
//! primitive — and the capability classification from which full iterators
//! are synthesized by higher-level crates.
//!
//! ## Modules
//!
//! - `cursor`: The capability traits (`ReadCursor`, `WriteCursor`,
//!   `NextCursor`, ...), the capability-tier lattice (`InputCursor` up to
//!   `ContiguousCursor`), and sentinel support (`SentinelFor`,
//!   `EndOfInput`).
//! - `cmp`: Comparison function objects (`Less`, `Greater`, ...) behind the
//!   `Relation` trait, interchangeable with plain closures.
//! - `num`: The `Offset` trait bundling the signed-integer requirements of
//!   cursor difference types.
//!
//! ## Design Philosophy
//!
//! 1. **One capability, one trait**: a cursor declares exactly the
//!    primitives it supports by implementing the matching traits; nothing
//!    is inferred at runtime and nothing requires a shared base type.
//! 2. **Compile-time rejection**: using an operation a cursor does not
//!    support is a missing trait bound, never a runtime error.
//! 3. **Zero-cost**: every trait here compiles down to direct calls; no
//!    allocation, no dynamic dispatch.

pub mod cmp;
pub mod cursor;
pub mod num;

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

//! # Rove Algo
//!
//! Sequence algorithms over the Rove iterator contract. Every function
//! here is a thin, independent consumer of the promotion surface: it asks
//! for the weakest capability tier that makes it correct, and speeds up
//! automatically on stronger tiers through the cursor's seek overrides.
//!
//! ## Modules
//!
//! - `binary_search`: `lower_bound` / `upper_bound` / `equal_range` over
//!   sorted ranges, parameterized by comparator and projection.
//! - `find`: Linear predicate searches.
//! - `modify`: In-place replacement and copying between ranges.
//! - `tagged`: The labeled in/out result pair the copying algorithms
//!   return.
//!
//! ## Calling convention
//!
//! Comparators implement [`Relation`](rove_core::cmp::Relation) (closures
//! qualify) and see *projected* elements: the convention is
//! `comp.holds(proj(element), key)`. The comparator defaults to
//! [`Less`](rove_core::cmp::Less) and the projection to
//! [`identity`](rove_core::cmp::identity) in the convenience forms.

pub mod binary_search;
pub mod find;
pub mod modify;
pub mod tagged;

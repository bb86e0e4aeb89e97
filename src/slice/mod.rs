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

//! # Slice Utilities
//!
//! Transformation, reduction, and query helpers over `&[T]` / `&mut [T]`.
//! Copy-producing helpers allocate and return a `Vec` and leave the input
//! untouched; in-place helpers overwrite elements through `&mut [T]` and
//! never change the length. Every helper is a synchronous single pass.
//!
//! ## Submodules
//!
//! - `access`: Indexed access with negative-index wraparound — `at`
//!   (panicking), `try_at` (`Option`), and `at_or` (caller default).
//! - `transform`: Element-wise rewriting — `map`/`map_with_index`
//!   (copy-producing), `map_in_place`/`map_in_place_with_index`, `filter`,
//!   and `fill`.
//! - `fold`: Directional reductions — `reduce`/`reduce_right` and their
//!   with-index variants, seeded with a caller-chosen accumulator.
//! - `query`: Short-circuiting predicate tests `any` and `every`.
//!
//! ## Callback Contract
//!
//! Callbacks receive elements by shared reference and are invoked in a
//! documented order (index-ascending unless the helper's name says
//! otherwise), so side effects inside a callback observe a deterministic
//! sequence. Panics from callbacks propagate to the caller unmodified.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod access;
pub mod fold;
pub mod query;
pub mod transform;

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

//! # Fnkit
//!
//! Functional-style helper functions for the two container shapes every
//! program ends up juggling: hash maps and slices. Each helper is a small,
//! stateless, single-pass function parameterized by caller-supplied
//! callbacks, filling gaps the standard library leaves for generic
//! container code (lookup-with-default, key/value extraction, map merging,
//! negative indexing, directional folds, and friends).
//!
//! ## Modules
//!
//! - `map`: Operations on `HashMap<K, V, S>`, generic over the hasher:
//!   lookup-with-default (`get_or`), key/value/entry extraction (`keys`,
//!   `sorted_keys`, `sorted_keys_by`, `values`, `entries`), and merging
//!   (`merged`, `merge_into`) where later sources win on key collisions.
//! - `slice`: Operations on `&[T]` / `&mut [T]`: negative-index access
//!   (`at`, `try_at`, `at_or`), copy-producing and in-place mapping,
//!   directional folds (`reduce`, `reduce_right` and their with-index
//!   variants), `filter`, `fill`, and the short-circuiting predicates
//!   `any` and `every`.
//!
//! ## Purpose
//!
//! These helpers keep call sites declarative without pulling in a combinator
//! framework: every function borrows its input for the duration of the call,
//! allocates only when it returns a new container, and leaves all ownership
//! and synchronization questions to the caller.
//!
//! Refer to each module for detailed APIs and examples.

pub mod map;
pub mod slice;

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

//! # Map Utilities
//!
//! Helpers over `std::collections::HashMap<K, V, S>`, generic over the
//! hasher so maps built with a caller-chosen `BuildHasher` (e.g.
//! `rustc_hash::FxHashMap`) work unchanged. All helpers borrow their inputs;
//! only `merge::merge_into` mutates anything, and then only its first
//! argument.
//!
//! ## Submodules
//!
//! - `entry`: The `Entry<K, V>` key-value pair produced by entry extraction,
//!   with tuple conversions and `Display`/`Debug` support.
//! - `extract`: Read-only views — lookup-with-default (`get_or`), key
//!   extraction in unspecified, sorted, and comparator-sorted order,
//!   value extraction, and entry extraction.
//! - `merge`: Combining maps — `merged` builds a new map, `merge_into`
//!   updates one in place; in both, sources applied later win on key
//!   collisions.
//!
//! ## Iteration Order
//!
//! `HashMap` iteration order is unspecified, and every extraction helper
//! except the sorted variants inherits that. Callers needing determinism
//! sort, or use `extract::sorted_keys`.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod entry;
pub mod extract;
pub mod merge;

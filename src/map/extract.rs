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

//! # Read-Only Map Views
//!
//! Lookup and extraction helpers over `HashMap<K, V, S>`. None of these
//! mutate their input; the extraction helpers return freshly allocated
//! vectors of cloned keys, values, or entries.
//!
//! ## Highlights
//!
//! - `get_or`: total lookup, falling back to a caller-supplied default.
//! - `keys` / `values` / `entries`: extraction in the map's (unspecified)
//!   iteration order.
//! - `sorted_keys` / `sorted_keys_by`: extraction in ascending or
//!   comparator-defined order.
//!
//! ## Usage
//!
//! ```rust
//! use fnkit::map::extract;
//! use std::collections::HashMap;
//!
//! let m: HashMap<i32, &str> = [(2, "two"), (1, "one")].into_iter().collect();
//! assert_eq!(extract::get_or(&m, &1, "default"), "one");
//! assert_eq!(extract::sorted_keys(&m), vec![1, 2]);
//! ```

use crate::map::entry::Entry;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns the value associated with `key`, or `default` if the key is
/// absent.
///
/// This is a total function: it never fails and never mutates the map.
///
/// # Examples
///
/// ```rust
/// # use fnkit::map::extract::get_or;
/// # use std::collections::HashMap;
///
/// let m: HashMap<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
/// assert_eq!(get_or(&m, &1, "default"), "one");
/// assert_eq!(get_or(&m, &3, "default"), "default");
/// ```
#[inline]
pub fn get_or<K, V, S>(map: &HashMap<K, V, S>, key: &K, default: V) -> V
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    map.get(key).cloned().unwrap_or(default)
}

/// Returns the keys of the map in an unspecified order.
///
/// The order is whatever the map's iteration yields and may differ between
/// runs; use [`sorted_keys`] or [`sorted_keys_by`] when determinism matters.
///
/// # Examples
///
/// ```rust
/// # use fnkit::map::extract::keys;
/// # use std::collections::HashMap;
///
/// let m: HashMap<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
/// let mut k = keys(&m);
/// k.sort_unstable();
/// assert_eq!(k, vec![1, 2]);
/// ```
#[inline]
pub fn keys<K, V, S>(map: &HashMap<K, V, S>) -> Vec<K>
where
    K: Clone,
{
    map.keys().cloned().collect()
}

/// Returns the keys of the map in ascending order.
///
/// # Examples
///
/// ```rust
/// # use fnkit::map::extract::sorted_keys;
/// # use std::collections::HashMap;
///
/// let m: HashMap<i32, &str> = [(2, "two"), (1, "one")].into_iter().collect();
/// assert_eq!(sorted_keys(&m), vec![1, 2]);
/// ```
#[inline]
pub fn sorted_keys<K, V, S>(map: &HashMap<K, V, S>) -> Vec<K>
where
    K: Clone + Ord,
{
    let mut result = keys(map);
    // Keys are unique within a map, so an unstable sort is observationally
    // identical to a stable one.
    result.sort_unstable();
    result
}

/// Returns the keys of the map ordered by the given comparator.
///
/// # Invariants
///
/// - `compare` must define a strict total order over the keys. If it does
///   not, the resulting order is unspecified.
///
/// # Examples
///
/// ```rust
/// # use fnkit::map::extract::sorted_keys_by;
/// # use std::collections::HashMap;
///
/// let m: HashMap<i32, &str> = [(1, "one"), (2, "two"), (3, "three")]
///     .into_iter()
///     .collect();
/// // Descending order.
/// assert_eq!(sorted_keys_by(&m, |a, b| b.cmp(a)), vec![3, 2, 1]);
/// ```
#[inline]
pub fn sorted_keys_by<K, V, S, F>(map: &HashMap<K, V, S>, compare: F) -> Vec<K>
where
    K: Clone,
    F: FnMut(&K, &K) -> Ordering,
{
    let mut result = keys(map);
    result.sort_unstable_by(compare);
    result
}

/// Returns the values of the map in an unspecified order.
///
/// The order corresponds to the map's iteration order at the time of the
/// call, the same order an independent [`keys`] call would observe only by
/// coincidence.
///
/// # Examples
///
/// ```rust
/// # use fnkit::map::extract::values;
/// # use std::collections::HashMap;
///
/// let m: HashMap<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
/// let mut v = values(&m);
/// v.sort_unstable();
/// assert_eq!(v, vec!["one", "two"]);
/// ```
#[inline]
pub fn values<K, V, S>(map: &HashMap<K, V, S>) -> Vec<V>
where
    V: Clone,
{
    map.values().cloned().collect()
}

/// Returns the `(key, value)` pairs of the map as [`Entry`] values, in an
/// unspecified order.
///
/// # Examples
///
/// ```rust
/// # use fnkit::map::entry::Entry;
/// # use fnkit::map::extract::entries;
/// # use std::collections::HashMap;
///
/// let m: HashMap<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
/// let mut e = entries(&m);
/// e.sort_unstable_by_key(|entry| entry.key);
/// assert_eq!(e, vec![Entry::new(1, "one"), Entry::new(2, "two")]);
/// ```
#[inline]
pub fn entries<K, V, S>(map: &HashMap<K, V, S>) -> Vec<Entry<K, V>>
where
    K: Clone,
    V: Clone,
{
    map.iter()
        .map(|(k, v)| Entry::new(k.clone(), v.clone()))
        .collect()
}

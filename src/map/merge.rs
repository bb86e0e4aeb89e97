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

//! # Map Merging
//!
//! Combining a base map with zero or more override maps. Both variants share
//! one collision rule: overrides are applied in argument order, and the
//! value inserted latest wins. `merged` leaves every input untouched and
//! returns a new map; `merge_into` writes the overrides into its first
//! argument.
//!
//! ## Usage
//!
//! ```rust
//! use fnkit::map::merge::merged;
//! use std::collections::HashMap;
//!
//! let base: HashMap<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
//! let patch: HashMap<i32, &str> = [(2, "deux"), (3, "trois")].into_iter().collect();
//!
//! let combined = merged(&base, [&patch]);
//! assert_eq!(combined[&1], "one");
//! assert_eq!(combined[&2], "deux");
//! assert_eq!(combined[&3], "trois");
//! // The base is unchanged.
//! assert_eq!(base[&2], "two");
//! ```

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns a new map containing the contents of `base` with each map in
/// `overrides` applied on top, in iteration order.
///
/// When a key occurs in several sources, the value from the source applied
/// latest wins. Neither `base` nor any override is modified.
///
/// # Examples
///
/// ```rust
/// # use fnkit::map::merge::merged;
/// # use std::collections::HashMap;
///
/// let base: HashMap<i32, &str> = [(1, "one")].into_iter().collect();
/// let first: HashMap<i32, &str> = [(1, "uno"), (2, "dos")].into_iter().collect();
/// let second: HashMap<i32, &str> = [(2, "deux")].into_iter().collect();
///
/// let combined = merged(&base, [&first, &second]);
/// assert_eq!(combined[&1], "uno");
/// assert_eq!(combined[&2], "deux");
/// ```
#[must_use]
pub fn merged<'a, K, V, S, I>(base: &HashMap<K, V, S>, overrides: I) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone + 'a,
    V: Clone + 'a,
    S: BuildHasher + Default + 'a,
    I: IntoIterator<Item = &'a HashMap<K, V, S>>,
{
    let mut result = HashMap::with_capacity_and_hasher(base.len(), S::default());
    for (k, v) in base {
        result.insert(k.clone(), v.clone());
    }
    merge_into(&mut result, overrides);
    result
}

/// Applies each map in `overrides` to `target`, in iteration order.
///
/// Same collision rule as [`merged`]: the value inserted latest wins. The
/// override maps themselves are not modified.
///
/// # Examples
///
/// ```rust
/// # use fnkit::map::merge::merge_into;
/// # use std::collections::HashMap;
///
/// let mut target: HashMap<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
/// let patch: HashMap<i32, &str> = [(2, "deux"), (3, "trois")].into_iter().collect();
///
/// merge_into(&mut target, [&patch]);
/// assert_eq!(target[&1], "one");
/// assert_eq!(target[&2], "deux");
/// assert_eq!(target[&3], "trois");
/// ```
pub fn merge_into<'a, K, V, S, I>(target: &mut HashMap<K, V, S>, overrides: I)
where
    K: Eq + Hash + Clone + 'a,
    V: Clone + 'a,
    S: BuildHasher + 'a,
    I: IntoIterator<Item = &'a HashMap<K, V, S>>,
{
    for map in overrides {
        for (k, v) in map {
            target.insert(k.clone(), v.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn map_of(pairs: &[(i32, &'static str)]) -> HashMap<i32, &'static str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_merged_override_wins() {
        let base = map_of(&[(1, "one"), (2, "two")]);
        let patch = map_of(&[(2, "deux"), (3, "trois")]);
        let combined = merged(&base, [&patch]);
        assert_eq!(
            combined,
            map_of(&[(1, "one"), (2, "deux"), (3, "trois")])
        );
    }

    #[test]
    fn test_merged_leaves_inputs_unchanged() {
        let base = map_of(&[(1, "one"), (2, "two")]);
        let patch = map_of(&[(2, "deux")]);
        let _ = merged(&base, [&patch]);
        assert_eq!(base, map_of(&[(1, "one"), (2, "two")]));
        assert_eq!(patch, map_of(&[(2, "deux")]));
    }

    #[test]
    fn test_merged_no_overrides_clones_base() {
        let base = map_of(&[(1, "one")]);
        let combined = merged(&base, std::iter::empty());
        assert_eq!(combined, base);
    }

    #[test]
    fn test_merged_later_override_dominates_earlier() {
        let base = map_of(&[(1, "one")]);
        let first = map_of(&[(1, "uno"), (2, "dos")]);
        let second = map_of(&[(2, "deux")]);
        let combined = merged(&base, [&first, &second]);
        assert_eq!(combined, map_of(&[(1, "uno"), (2, "deux")]));
    }

    #[test]
    fn test_merged_empty_base() {
        let base: HashMap<i32, &str> = HashMap::new();
        let patch = map_of(&[(1, "one")]);
        assert_eq!(merged(&base, [&patch]), patch);
    }

    #[test]
    fn test_merge_into_override_wins() {
        let mut target = map_of(&[(1, "one"), (2, "two")]);
        let patch = map_of(&[(2, "deux"), (3, "trois")]);
        merge_into(&mut target, [&patch]);
        assert_eq!(
            target,
            map_of(&[(1, "one"), (2, "deux"), (3, "trois")])
        );
    }

    #[test]
    fn test_merge_into_no_overrides_is_noop() {
        let mut target = map_of(&[(1, "one")]);
        merge_into(&mut target, std::iter::empty());
        assert_eq!(target, map_of(&[(1, "one")]));
    }

    #[test]
    fn test_merge_into_multiple_overrides_in_order() {
        let mut target: HashMap<i32, &str> = HashMap::new();
        let first = map_of(&[(1, "a")]);
        let second = map_of(&[(1, "b")]);
        let third = map_of(&[(1, "c")]);
        merge_into(&mut target, [&first, &second, &third]);
        assert_eq!(target, map_of(&[(1, "c")]));
    }

    #[test]
    fn test_merged_custom_hasher() {
        let base: FxHashMap<i32, &str> = [(1, "one")].into_iter().collect();
        let patch: FxHashMap<i32, &str> = [(1, "uno"), (2, "dos")].into_iter().collect();
        let combined = merged(&base, [&patch]);
        assert_eq!(combined[&1], "uno");
        assert_eq!(combined[&2], "dos");
    }
}

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

//! # Element-Wise Transformation
//!
//! Mapping, filtering, and filling over slices. The copy-producing pair
//! (`map`, `map_with_index`) and `filter` allocate a new `Vec` and leave
//! the input untouched; the in-place pair and `fill` overwrite elements
//! through `&mut [T]` without changing the length. Both shapes exist on
//! purpose: callers pick based on whether the original must survive the
//! call.
//!
//! All callbacks run in index-ascending order.
//!
//! ## Usage
//!
//! ```rust
//! use fnkit::slice::transform;
//!
//! let s = [1, 2, 3];
//! assert_eq!(transform::map(&s, |v| v * 2), vec![2, 4, 6]);
//! assert_eq!(transform::filter(&s, |v| v % 2 == 0), vec![2]);
//!
//! let mut s = [1, 2, 3];
//! transform::map_in_place(&mut s, |v| v * 2);
//! assert_eq!(s, [2, 4, 6]);
//! ```

/// Returns a new vector where element `i` is `f(&slice[i])`.
///
/// The input slice is not modified.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::transform::map;
///
/// let s = [1, 2, 3];
/// assert_eq!(map(&s, |v| v * 2), vec![2, 4, 6]);
/// assert_eq!(map(&s, |v| v.to_string()), vec!["1", "2", "3"]);
/// ```
#[must_use]
pub fn map<T, U, F>(slice: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    slice.iter().map(|v| f(v)).collect()
}

/// Returns a new vector where element `i` is `f(&slice[i], i)`.
///
/// The input slice is not modified.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::transform::map_with_index;
///
/// let s = [1, 2, 3];
/// assert_eq!(map_with_index(&s, |v, i| v + i as i32), vec![1, 3, 5]);
/// ```
#[must_use]
pub fn map_with_index<T, U, F>(slice: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    slice.iter().enumerate().map(|(i, v)| f(v, i)).collect()
}

/// Replaces each element of the slice with `f(&slice[i])`, in index order.
///
/// The length of the slice is unchanged.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::transform::map_in_place;
///
/// let mut s = [1, 2, 3];
/// map_in_place(&mut s, |v| v * 2);
/// assert_eq!(s, [2, 4, 6]);
/// ```
pub fn map_in_place<T, F>(slice: &mut [T], mut f: F)
where
    F: FnMut(&T) -> T,
{
    for v in slice.iter_mut() {
        *v = f(v);
    }
}

/// Replaces each element of the slice with `f(&slice[i], i)`, in index
/// order.
///
/// The length of the slice is unchanged.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::transform::map_in_place_with_index;
///
/// let mut s = [1, 2, 3];
/// map_in_place_with_index(&mut s, |v, i| v + i as i32);
/// assert_eq!(s, [1, 3, 5]);
/// ```
pub fn map_in_place_with_index<T, F>(slice: &mut [T], mut f: F)
where
    F: FnMut(&T, usize) -> T,
{
    for (i, v) in slice.iter_mut().enumerate() {
        *v = f(v, i);
    }
}

/// Returns a new vector containing clones of the elements for which
/// `predicate` returns `true`, preserving their relative order.
///
/// The input slice is not modified. An empty input or an always-false
/// predicate yields an empty vector.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::transform::filter;
///
/// let s = [1, 2, 3, 4];
/// assert_eq!(filter(&s, |v| v % 2 == 0), vec![2, 4]);
/// assert_eq!(filter(&s, |_| false), Vec::<i32>::new());
/// ```
#[must_use]
pub fn filter<T, F>(slice: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut result = Vec::with_capacity(slice.len());
    for v in slice {
        if predicate(v) {
            result.push(v.clone());
        }
    }
    result
}

/// Overwrites every element of the slice with a clone of `value`.
///
/// The length of the slice is unchanged.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::transform::fill;
///
/// let mut s = [0, 0, 0];
/// fill(&mut s, 1);
/// assert_eq!(s, [1, 1, 1]);
/// ```
pub fn fill<T>(slice: &mut [T], value: T)
where
    T: Clone,
{
    for v in slice.iter_mut() {
        *v = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_doubles() {
        let s = [1, 2, 3];
        assert_eq!(map(&s, |v| v * 2), vec![2, 4, 6]);
        // Input untouched.
        assert_eq!(s, [1, 2, 3]);
    }

    #[test]
    fn test_map_changes_element_type() {
        let s = [1, 2, 3];
        assert_eq!(
            map(&s, |v| v.to_string()),
            vec!["1".to_string(), "2".to_string(), "3".to_string()]
        );
    }

    #[test]
    fn test_map_empty() {
        let s: [i32; 0] = [];
        assert_eq!(map(&s, |v| v * 2), Vec::<i32>::new());
    }

    #[test]
    fn test_map_with_index() {
        let s = [1, 2, 3];
        assert_eq!(map_with_index(&s, |v, i| v + i as i32), vec![1, 3, 5]);
    }

    #[test]
    fn test_map_in_place() {
        let mut s = [1, 2, 3];
        map_in_place(&mut s, |v| v * 2);
        assert_eq!(s, [2, 4, 6]);
    }

    #[test]
    fn test_map_in_place_no_aliasing_with_copy() {
        let original = [1, 2, 3];
        let mut working = original;
        map_in_place(&mut working, |v| v * 2);
        assert_eq!(original, [1, 2, 3]);
        assert_eq!(working, [2, 4, 6]);
        // A copy-producing map over the untouched original still agrees.
        assert_eq!(map(&original, |v| v * 2), working.to_vec());
    }

    #[test]
    fn test_map_in_place_with_index() {
        let mut s = [1, 2, 3];
        map_in_place_with_index(&mut s, |v, i| v + i as i32);
        assert_eq!(s, [1, 3, 5]);
    }

    #[test]
    fn test_map_in_place_runs_in_index_order() {
        let mut s = [0, 0, 0];
        let mut seen = Vec::new();
        map_in_place_with_index(&mut s, |_, i| {
            seen.push(i);
            i as i32
        });
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(s, [0, 1, 2]);
    }

    #[test]
    fn test_filter_even() {
        let s = [1, 2, 3];
        assert_eq!(filter(&s, |v| v % 2 == 0), vec![2]);
        assert_eq!(s, [1, 2, 3]);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let s = [5, 1, 4, 2, 3];
        assert_eq!(filter(&s, |v| *v >= 3), vec![5, 4, 3]);
    }

    #[test]
    fn test_filter_empty_and_always_false() {
        let empty: [i32; 0] = [];
        assert_eq!(filter(&empty, |_| true), Vec::<i32>::new());
        let s = [1, 2, 3];
        assert_eq!(filter(&s, |_| false), Vec::<i32>::new());
    }

    #[test]
    fn test_fill() {
        let mut s = [0, 0, 0];
        fill(&mut s, 1);
        assert_eq!(s, [1, 1, 1]);
    }

    #[test]
    fn test_fill_empty() {
        let mut s: [i32; 0] = [];
        fill(&mut s, 1);
        assert!(s.is_empty());
    }
}

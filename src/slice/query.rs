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

//! # Predicate Tests
//!
//! Existential (`any`) and universal (`every`) predicate tests over a
//! slice. Both evaluate the predicate in index-ascending order and stop at
//! the first decisive element, so a predicate with side effects observes a
//! deterministic prefix of the slice.
//!
//! ## Usage
//!
//! ```rust
//! use fnkit::slice::query;
//!
//! let s = [1, 2, 3];
//! assert!(query::any(&s, |v| v % 2 == 0));
//! assert!(!query::every(&s, |v| v % 2 == 0));
//! ```

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Returns `false` for an empty slice. Evaluation is index-ascending and
/// stops at the first element that satisfies the predicate.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::query::any;
///
/// assert!(any(&[1, 2, 3], |v| v % 2 == 0));
/// assert!(!any(&[1, 3, 5], |v| v % 2 == 0));
/// assert!(!any(&[] as &[i32], |_| true));
/// ```
#[must_use]
pub fn any<T, F>(slice: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for v in slice {
        if predicate(v) {
            return true;
        }
    }
    false
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Returns `true` (vacuously) for an empty slice. Evaluation is
/// index-ascending and stops at the first element that fails the predicate.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::query::every;
///
/// assert!(every(&[2, 4, 6], |v| v % 2 == 0));
/// assert!(!every(&[1, 2, 3], |v| v % 2 == 0));
/// assert!(every(&[] as &[i32], |_| false));
/// ```
#[must_use]
pub fn every<T, F>(slice: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for v in slice {
        if !predicate(v) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_basic() {
        assert!(any(&[1, 2, 3], |v| v % 2 == 0));
        assert!(!any(&[1, 3, 5], |v| v % 2 == 0));
    }

    #[test]
    fn test_any_empty_is_false() {
        let s: [i32; 0] = [];
        assert!(!any(&s, |_| true));
    }

    #[test]
    fn test_any_short_circuits_ascending() {
        let s = [1, 2, 3];
        let mut seen = Vec::new();
        assert!(any(&s, |v| {
            seen.push(*v);
            v % 2 == 0
        }));
        // Stops right after the first match; never inspects 3.
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_every_basic() {
        assert!(every(&[2, 4, 6], |v| v % 2 == 0));
        assert!(!every(&[1, 2, 3], |v| v % 2 == 0));
    }

    #[test]
    fn test_every_empty_is_vacuously_true() {
        let s: [i32; 0] = [];
        assert!(every(&s, |_| false));
    }

    #[test]
    fn test_every_short_circuits_ascending() {
        let s = [2, 3, 4];
        let mut seen = Vec::new();
        assert!(!every(&s, |v| {
            seen.push(*v);
            v % 2 == 0
        }));
        // Stops right after the first failure; never inspects 4.
        assert_eq!(seen, vec![2, 3]);
    }
}

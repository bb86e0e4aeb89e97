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

//! # Directional Folds
//!
//! Reductions of a slice into a single accumulator value of caller-chosen
//! type, seeded with an initial value. Four variants: left-to-right and
//! right-to-left, each with and without the element index. All are total
//! over the empty slice and return the seed unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use fnkit::slice::fold;
//!
//! let s = [1, 2, 3];
//! assert_eq!(fold::reduce(&s, 0, |acc, v| acc + v), 6);
//!
//! // Direction matters for non-commutative combinators.
//! let words = ["a", "b", "c"];
//! let concat = |acc: String, v: &&str| acc + *v;
//! assert_eq!(fold::reduce(&words, String::new(), concat), "abc");
//! assert_eq!(fold::reduce_right(&words, String::new(), concat), "cba");
//! ```

/// Folds the slice left-to-right: `acc = f(acc, &slice[i])` for ascending
/// `i`, starting from `init`.
///
/// Returns `init` unchanged for an empty slice.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::fold::reduce;
///
/// let s = [1, 2, 3];
/// assert_eq!(reduce(&s, 0, |acc, v| acc + v), 6);
/// assert_eq!(reduce(&[] as &[i32], 42, |acc, v| acc + v), 42);
/// ```
#[must_use]
pub fn reduce<T, U, F>(slice: &[T], init: U, mut f: F) -> U
where
    F: FnMut(U, &T) -> U,
{
    let mut acc = init;
    for v in slice {
        acc = f(acc, v);
    }
    acc
}

/// Folds the slice left-to-right with the element index:
/// `acc = f(acc, &slice[i], i)` for ascending `i`, starting from `init`.
///
/// Returns `init` unchanged for an empty slice.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::fold::reduce_with_index;
///
/// let s = [1, 2, 3];
/// assert_eq!(reduce_with_index(&s, 0, |acc, v, i| acc + v + i as i32), 9);
/// ```
#[must_use]
pub fn reduce_with_index<T, U, F>(slice: &[T], init: U, mut f: F) -> U
where
    F: FnMut(U, &T, usize) -> U,
{
    let mut acc = init;
    for (i, v) in slice.iter().enumerate() {
        acc = f(acc, v, i);
    }
    acc
}

/// Folds the slice right-to-left: `acc = f(acc, &slice[i])` for descending
/// `i`, starting from `init`.
///
/// Returns `init` unchanged for an empty slice.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::fold::reduce_right;
///
/// let words = ["a", "b", "c"];
/// let reversed = reduce_right(&words, String::new(), |acc, v| acc + *v);
/// assert_eq!(reversed, "cba");
/// ```
#[must_use]
pub fn reduce_right<T, U, F>(slice: &[T], init: U, mut f: F) -> U
where
    F: FnMut(U, &T) -> U,
{
    let mut acc = init;
    for v in slice.iter().rev() {
        acc = f(acc, v);
    }
    acc
}

/// Folds the slice right-to-left with the element index:
/// `acc = f(acc, &slice[i], i)` for descending `i`, starting from `init`.
///
/// Returns `init` unchanged for an empty slice.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::fold::reduce_right_with_index;
///
/// let s = [1, 2, 3];
/// assert_eq!(
///     reduce_right_with_index(&s, 0, |acc, v, i| acc + v + i as i32),
///     9
/// );
/// ```
#[must_use]
pub fn reduce_right_with_index<T, U, F>(slice: &[T], init: U, mut f: F) -> U
where
    F: FnMut(U, &T, usize) -> U,
{
    let mut acc = init;
    for (i, v) in slice.iter().enumerate().rev() {
        acc = f(acc, v, i);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_sum() {
        let s = [1, 2, 3];
        assert_eq!(reduce(&s, 0, |acc, v| acc + v), 6);
    }

    #[test]
    fn test_reduce_empty_returns_seed() {
        let s: [i32; 0] = [];
        assert_eq!(reduce(&s, 42, |acc, v| acc + v), 42);
        assert_eq!(reduce_with_index(&s, 42, |acc, v, _| acc + v), 42);
        assert_eq!(reduce_right(&s, 42, |acc, v| acc + v), 42);
        assert_eq!(reduce_right_with_index(&s, 42, |acc, v, _| acc + v), 42);
    }

    #[test]
    fn test_reduce_with_index_sum() {
        let s = [1, 2, 3];
        assert_eq!(reduce_with_index(&s, 0, |acc, v, i| acc + v + i as i32), 9);
    }

    #[test]
    fn test_reduce_right_sum() {
        let s = [1, 2, 3];
        assert_eq!(reduce_right(&s, 0, |acc, v| acc + v), 6);
    }

    #[test]
    fn test_reduce_right_with_index_sum() {
        let s = [1, 2, 3];
        assert_eq!(
            reduce_right_with_index(&s, 0, |acc, v, i| acc + v + i as i32),
            9
        );
    }

    #[test]
    fn test_direction_with_non_commutative_combinator() {
        let words = ["a", "b", "c"];
        let forward = reduce(&words, String::new(), |acc, v| acc + *v);
        let backward = reduce_right(&words, String::new(), |acc, v| acc + *v);
        assert_eq!(forward, "abc");
        assert_eq!(backward, "cba");
    }

    #[test]
    fn test_with_index_variants_observe_expected_index_order() {
        let s = [10, 20, 30];
        let forward = reduce_with_index(&s, Vec::new(), |mut acc, _, i| {
            acc.push(i);
            acc
        });
        assert_eq!(forward, vec![0, 1, 2]);
        let backward = reduce_right_with_index(&s, Vec::new(), |mut acc, _, i| {
            acc.push(i);
            acc
        });
        assert_eq!(backward, vec![2, 1, 0]);
    }

    #[test]
    fn test_accumulator_type_differs_from_element_type() {
        let s = [1, 2, 3];
        let rendered = reduce(&s, String::new(), |acc, v| acc + &v.to_string());
        assert_eq!(rendered, "123");
    }
}

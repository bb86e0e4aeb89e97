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

//! # Indexed Access With Wraparound
//!
//! Accessors taking an `isize` index: a negative index counts back from the
//! end of the slice (`-1` is the last element). Resolution is a single
//! arithmetic normalization (`index + len` when negative) followed by one
//! bounds check; there is no scanning.
//!
//! Three variants cover the failure-handling spectrum: [`at`] panics on an
//! out-of-bounds resolution, [`try_at`] returns `None`, and [`at_or`]
//! substitutes a caller-supplied default.
//!
//! ## Usage
//!
//! ```rust
//! use fnkit::slice::access;
//!
//! let s = [10, 20, 30];
//! assert_eq!(*access::at(&s, 1), 20);
//! assert_eq!(*access::at(&s, -1), 30);
//! assert_eq!(access::try_at(&s, 5), None);
//! assert_eq!(access::at_or(&s, 5, -1), -1);
//! ```

/// Resolves a possibly negative index against `len`.
///
/// Returns `None` when the resolved index falls outside `[0, len)`.
#[inline(always)]
fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        index + len as isize
    } else {
        index
    };
    if resolved < 0 {
        return None;
    }
    let resolved = resolved as usize;
    if resolved < len {
        Some(resolved)
    } else {
        None
    }
}

/// Returns a reference to the element at `index`.
///
/// A negative index counts back from the end of the slice, so `-1` is the
/// last element and `-len` the first.
///
/// # Panics
///
/// Panics if the resolved index is out of bounds, i.e. when
/// `index >= len` or `index < -len`.
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::access::at;
///
/// let s = [1, 2, 3];
/// assert_eq!(*at(&s, 0), 1);
/// assert_eq!(*at(&s, -1), 3);
/// assert_eq!(*at(&s, -3), 1);
/// ```
///
/// ```rust,should_panic
/// # use fnkit::slice::access::at;
///
/// let s = [1, 2, 3];
/// at(&s, 3); // panics
/// ```
#[inline]
pub fn at<T>(slice: &[T], index: isize) -> &T {
    match try_at(slice, index) {
        Some(value) => value,
        None => panic!(
            "index out of bounds: the len is {} but the index is {}",
            slice.len(),
            index
        ),
    }
}

/// Returns a reference to the element at `index`, or `None` if the resolved
/// index is out of bounds.
///
/// Negative indices count back from the end, as in [`at`].
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::access::try_at;
///
/// let s = [1, 2, 3];
/// assert_eq!(try_at(&s, 1), Some(&2));
/// assert_eq!(try_at(&s, -1), Some(&3));
/// assert_eq!(try_at(&s, 3), None);
/// assert_eq!(try_at(&s, -4), None);
/// ```
#[inline]
pub fn try_at<T>(slice: &[T], index: isize) -> Option<&T> {
    resolve_index(index, slice.len()).map(|i| &slice[i])
}

/// Returns a clone of the element at `index`, or `default` if the resolved
/// index is out of bounds (including for an empty slice).
///
/// Negative indices count back from the end, as in [`at`].
///
/// # Examples
///
/// ```rust
/// # use fnkit::slice::access::at_or;
///
/// let s = [1, 2, 3];
/// assert_eq!(at_or(&s, 1, -1), 2);
/// assert_eq!(at_or(&s, -2, -1), 2);
/// assert_eq!(at_or(&s, 3, -1), -1);
///
/// let empty: [i32; 0] = [];
/// assert_eq!(at_or(&empty, 0, 7), 7);
/// ```
#[inline]
pub fn at_or<T>(slice: &[T], index: isize, default: T) -> T
where
    T: Clone,
{
    try_at(slice, index).cloned().unwrap_or(default)
}

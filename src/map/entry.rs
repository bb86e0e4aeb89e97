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

//! # Key-Value Entries
//!
//! The `Entry<K, V>` pair type returned by `map::extract::entries`. An
//! `Entry` is an immutable snapshot of one association taken at extraction
//! time; it holds owned copies and is not connected to the source map
//! afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use fnkit::map::entry::Entry;
//!
//! let e = Entry::new(1, "one");
//! assert_eq!(e.key, 1);
//! assert_eq!(e.value, "one");
//! assert_eq!(Entry::from((2, "two")), Entry::new(2, "two"));
//! ```

/// A key-value pair extracted from a map.
///
/// Both fields are public; an `Entry` is plain data with no invariant beyond
/// what its source map guaranteed at extraction time.
///
/// # Examples
///
/// ```rust
/// # use fnkit::map::entry::Entry;
///
/// let e = Entry::new("answer", 42);
/// let (k, v): (&str, i32) = e.into();
/// assert_eq!((k, v), ("answer", 42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Entry<K, V> {
    /// The key of the association.
    pub key: K,
    /// The value the key mapped to.
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new `Entry` from a key and a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fnkit::map::entry::Entry;
    ///
    /// let e = Entry::new(1, "one");
    /// assert_eq!(e.key, 1);
    /// assert_eq!(e.value, "one");
    /// ```
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Consumes the entry and returns its parts as a `(key, value)` tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fnkit::map::entry::Entry;
    ///
    /// assert_eq!(Entry::new(1, "one").into_pair(), (1, "one"));
    /// ```
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    #[inline]
    fn from(entry: Entry<K, V>) -> Self {
        (entry.key, entry.value)
    }
}

impl<K, V> std::fmt::Display for Entry<K, V>
where
    K: std::fmt::Display,
    V: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_fields() {
        let e = Entry::new(7, "seven");
        assert_eq!(e.key, 7);
        assert_eq!(e.value, "seven");
    }

    #[test]
    fn test_tuple_conversions() {
        let e: Entry<i32, &str> = (1, "one").into();
        assert_eq!(e, Entry::new(1, "one"));
        assert_eq!(e.into_pair(), (1, "one"));
        let pair: (i32, &str) = Entry::new(2, "two").into();
        assert_eq!(pair, (2, "two"));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Entry::new(1, "one")), "1 => one");
    }

    #[test]
    fn test_equality_ignores_ordering_of_construction() {
        assert_eq!(Entry::new(1, "one"), Entry::from((1, "one")));
        assert_ne!(Entry::new(1, "one"), Entry::new(1, "uno"));
        assert_ne!(Entry::new(1, "one"), Entry::new(2, "one"));
    }
}

// CTMAP - ctmap
// Module: ConstMap - fixed-size immutable map
// SW-REQ-ID: REQ_MAP_001, REQ_MEM_SAFETY_001, REQ_TEMPORAL_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-size key-value map with inline storage and compile-time length.
//!
//! `ConstMap<K, V, N>` stores exactly `N` entries in an array, in the order
//! they were supplied. Lookups are a left-to-right scan.
//!
//! # Characteristics
//!
//! - **Zero allocation**: all memory is the inline `[(K, V); N]`
//! - **Immutable**: no method takes `&mut self`
//! - **O(n) lookup**: at most `N` key comparisons, first match wins
//! - **Const-evaluable**: see the `const_*` methods for integer, `char`,
//!   `bool`, `&str`, `&[u8]` and `&CStr` keys

use core::borrow::Borrow;
use core::ops::Index;

use ctmap_error::{Error, Result};

use crate::iter::Iter;

/// A fixed-size, immutable map evaluated by linear scan.
///
/// # Invariants
///
/// 1. The map always holds exactly `N` entries
/// 2. `N > 0`, checked when the type is used
/// 3. When a key occurs more than once, the entry supplied first wins
///
/// # Examples
///
/// ```
/// use ctmap::ConstMap;
///
/// const MAP: ConstMap<&str, i32, 2> = ConstMap::new([("key1", 1), ("key2", 2)]);
///
/// const _: () = assert!(MAP.len() == 2);
/// const _: () = assert!(MAP.const_contains("key1"));
/// assert_eq!(MAP.get("key2"), Some(&2));
/// assert_eq!(MAP["key2"], 2);
/// assert!(!MAP.contains_key("key3"));
/// ```
///
/// A map without entries does not compile:
///
/// ```compile_fail
/// use ctmap::ConstMap;
///
/// const EMPTY: ConstMap<u8, u8, 0> = ConstMap::new([]);
/// ```
///
/// Neither does a declared length that differs from the supplied entries:
///
/// ```compile_fail
/// use ctmap::ConstMap;
///
/// let map: ConstMap<&str, i32, 2> = ConstMap::new([("key1", 1)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstMap<K, V, const N: usize> {
    /// Entries in construction order
    pub(crate) entries: [(K, V); N],
}

impl<K, V, const N: usize> ConstMap<K, V, N> {
    /// Creates a map from exactly `N` entries.
    ///
    /// Keys are not checked for uniqueness; lookups return the first match.
    /// Use [`ConstMap::try_new_unique`] or `new_unique` to reject duplicates.
    #[inline]
    #[must_use]
    pub const fn new(entries: [(K, V); N]) -> Self {
        const { assert!(N > 0, "ConstMap requires at least one entry") };
        Self { entries }
    }

    /// Returns the number of entries, which is always `N`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns the compile-time capacity. Identical to [`ConstMap::len`].
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Always `false`: a `ConstMap` cannot be built without entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the entries in construction order.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Returns the entry stored at `index`, or `None` past the end.
    #[must_use]
    pub const fn entry_at(&self, index: usize) -> Option<(&K, &V)> {
        if index < N {
            let (key, value) = &self.entries[index];
            Some((key, value))
        } else {
            None
        }
    }

    /// Returns an iterator over the entries in construction order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.entries)
    }

    /// Returns an iterator over keys in construction order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over values in construction order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Consumes the map and returns its entries.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> [(K, V); N] {
        self.entries
    }

    /// Index of the first entry whose key equals `key`.
    ///
    /// # Time Complexity
    ///
    /// O(n), at most `N` comparisons.
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|(k, _)| k.borrow() == key)
    }

    /// Returns the first entry whose key equals `key`.
    ///
    /// `None` plays the role of the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctmap::ConstMap;
    ///
    /// let map = ConstMap::new([("key1", "value1"), ("key2", "value2")]);
    /// assert_eq!(map.find("key2"), Some((&"key2", &"value2")));
    /// assert_eq!(map.find("key3"), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(k, v)| (k, v))
    }

    /// Returns `true` if the map contains `key`.
    #[inline]
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Gets a reference to the value for `key`.
    ///
    /// A missing key is an expected outcome and is reported as `None`, never
    /// as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctmap::ConstMap;
    ///
    /// let map = ConstMap::new([(String::from("key1"), 1)]);
    /// assert_eq!(map.get("key1"), Some(&1));
    /// assert_eq!(map.get("key2"), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(key).map(|(_, v)| v)
    }

    /// Looks up `key` and returns a found flag plus the value, or
    /// `V::default()` when the key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctmap::ConstMap;
    ///
    /// let map = ConstMap::new([("key1", 1), ("key2", 2)]);
    /// assert_eq!(map.get_or_default("key1"), (true, 1));
    /// assert_eq!(map.get_or_default("key3"), (false, 0));
    /// ```
    #[must_use]
    pub fn get_or_default<Q>(&self, key: &Q) -> (bool, V)
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        V: Clone + Default,
    {
        match self.get(key) {
            Some(value) => (true, value.clone()),
            None => (false, V::default()),
        }
    }

    /// Returns `true` if any key occurs more than once.
    pub fn contains_duplicate_keys(&self) -> bool
    where
        K: Eq,
    {
        self.entries
            .iter()
            .enumerate()
            .any(|(i, (key, _))| self.entries[i + 1..].iter().any(|(other, _)| other == key))
    }

    /// Creates a map, rejecting entries that repeat a key.
    ///
    /// # Errors
    ///
    /// Returns an error with code [`ctmap_error::codes::DUPLICATE_KEY`] if two
    /// entries share a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctmap::ConstMap;
    ///
    /// assert!(ConstMap::try_new_unique([(1, 'a'), (2, 'b')]).is_ok());
    /// assert!(ConstMap::try_new_unique([(1, 'a'), (1, 'b')]).is_err());
    /// ```
    pub fn try_new_unique(entries: [(K, V); N]) -> Result<Self>
    where
        K: Eq,
    {
        let map = Self::new(entries);

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::MapTrace::validating(N).entered();

        if map.contains_duplicate_keys() {
            #[cfg(feature = "tracing")]
            crate::tracing::warn!(len = N, "rejected ConstMap with duplicate keys");

            return Err(Error::duplicate_key("ConstMap entries contain a duplicate key"));
        }

        Ok(map)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ConstMap<K, V, N> {
    #[inline]
    fn from(entries: [(K, V); N]) -> Self {
        Self::new(entries)
    }
}

impl<K: Clone, V: Clone, const N: usize> TryFrom<&[(K, V)]> for ConstMap<K, V, N> {
    type Error = Error;

    /// Builds a map from a slice whose length is only known at runtime.
    fn try_from(entries: &[(K, V)]) -> Result<Self> {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::MapTrace::constructing(N, entries.len()).entered();

        match <&[(K, V); N]>::try_from(entries) {
            Ok(array) => Ok(Self::new(array.clone())),
            Err(_) => {
                #[cfg(feature = "tracing")]
                crate::tracing::debug!(
                    expected = N,
                    actual = entries.len(),
                    "rejected ConstMap construction"
                );

                Err(Error::entry_count_mismatch(
                    "Entry count does not match ConstMap length",
                ))
            }
        }
    }
}

#[cfg(feature = "alloc")]
impl<K, V, const N: usize> TryFrom<alloc::vec::Vec<(K, V)>> for ConstMap<K, V, N> {
    type Error = Error;

    fn try_from(entries: alloc::vec::Vec<(K, V)>) -> Result<Self> {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::MapTrace::constructing(N, entries.len()).entered();

        <[(K, V); N]>::try_from(entries)
            .map(Self::new)
            .map_err(|_rejected| {
                #[cfg(feature = "tracing")]
                crate::tracing::debug!(
                    expected = N,
                    actual = _rejected.len(),
                    "rejected ConstMap construction"
                );

                Error::entry_count_mismatch("Entry count does not match ConstMap length")
            })
    }
}

/// Looks up `key` with no fallback.
///
/// # Panics
///
/// Panics if `key` is not present. Check with [`ConstMap::contains_key`]
/// first, or use [`ConstMap::get`].
impl<K, Q, V, const N: usize> Index<&Q> for ConstMap<K, V, N>
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    type Output = V;

    #[inline]
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in ConstMap"),
        }
    }
}

impl<'a, K, V, const N: usize> IntoIterator for &'a ConstMap<K, V, N> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, const N: usize> IntoIterator for ConstMap<K, V, N> {
    type Item = (K, V);
    type IntoIter = core::array::IntoIter<(K, V), N>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_scan_finds_supplied_keys() {
        let a: u8 = kani::any();
        let b: u8 = kani::any();
        kani::assume(a != b);

        let map = ConstMap::new([(a, 10u8), (b, 20u8)]);

        assert!(map.get(&a) == Some(&10));
        assert!(map.get(&b) == Some(&20));
        assert!(map.const_get(a) == Some(&10));
    }

    #[kani::proof]
    fn verify_absent_key_is_end() {
        let probe: u8 = kani::any();
        kani::assume(probe != 1 && probe != 2);

        let map = ConstMap::new([(1u8, 1u8), (2u8, 2u8)]);

        assert!(map.position(&probe).is_none());
        assert!(!map.const_contains(probe));
    }

    #[kani::proof]
    fn verify_first_match_wins() {
        let key: u8 = kani::any();
        let map = ConstMap::new([(key, 1u8), (key, 2u8)]);

        assert!(map.get(&key) == Some(&1));
        assert!(map.contains_duplicate_keys());
    }
}

// ============================================================================
// Tests
// ============================================================================

// CTMAP - ctmap
// Module: ConstMap iteration
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use core::iter::FusedIterator;
use core::slice;

/// Forward iterator over the entries of a [`crate::ConstMap`], in
/// construction order.
///
/// Cloning the iterator gives an independent cursor at the same position.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

// Manual impl: cloning the cursor must not require `K: Clone` or `V: Clone`.
impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(entries: &'a [(K, V)]) -> Self {
        Self {
            inner: entries.iter(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

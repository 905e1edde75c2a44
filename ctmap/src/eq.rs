// CTMAP - ctmap
// Module: Const key equality
// SW-REQ-ID: REQ_MAP_EQ_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Content equality for byte and string keys, usable in `const` contexts.
//!
//! `PartialEq` for `str`, `[u8]` and `CStr` cannot be called from a `const fn`
//! on stable Rust, so the const lookups in [`crate::ConstMap`] compare such
//! keys with the functions below. All of them compare contents byte by byte;
//! two distinct allocations holding the same text are equal.

use core::ffi::CStr;

/// Returns `true` if both slices hold the same bytes.
///
/// # Examples
///
/// ```
/// use ctmap::eq::bytes_eq;
///
/// const SAME: bool = bytes_eq(b"key1", b"key1");
/// assert!(SAME);
/// assert!(!bytes_eq(b"key1", b"key10"));
/// ```
#[must_use]
pub const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut index = 0;
    while index < a.len() {
        if a[index] != b[index] {
            return false;
        }
        index += 1;
    }

    true
}

/// Returns `true` if both strings hold the same UTF-8 bytes.
///
/// # Examples
///
/// ```
/// use ctmap::eq::str_eq;
///
/// const SAME: bool = str_eq("key1", "key1");
/// assert!(SAME);
/// assert!(!str_eq("key1", "key2"));
/// ```
#[inline]
#[must_use]
pub const fn str_eq(a: &str, b: &str) -> bool {
    bytes_eq(a.as_bytes(), b.as_bytes())
}

/// Compares two NUL-terminated strings.
///
/// Both strings are walked in lockstep until a mismatch or the terminator is
/// reached, so the pointer identity of the two strings never matters.
///
/// # Examples
///
/// ```
/// use ctmap::eq::cstr_eq;
///
/// const SAME: bool = cstr_eq(c"key1", c"key1");
/// assert!(SAME);
/// assert!(!cstr_eq(c"key", c"key1"));
/// ```
#[must_use]
pub const fn cstr_eq(a: &CStr, b: &CStr) -> bool {
    let a = a.to_bytes_with_nul();
    let b = b.to_bytes_with_nul();

    // Both slices end in exactly one NUL, so the walk stops in bounds.
    let mut index = 0;
    loop {
        if a[index] != b[index] {
            return false;
        }
        if a[index] == 0 {
            return true;
        }
        index += 1;
    }
}

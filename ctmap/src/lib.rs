//! Fixed-size, immutable key-value maps that can be queried at compile time.
//!
//! [`ConstMap<K, V, N>`](ConstMap) holds exactly `N` entries in an inline
//! array. It has no insertion or removal, so a `static` map is shared across
//! threads without locks and lookups never allocate.
//!
//! ```
//! use ctmap::{const_map, ConstMap};
//!
//! const MAP: ConstMap<&str, i32, 2> = const_map! {
//!     "key1" => 1,
//!     "key2" => 2,
//! };
//!
//! // Answered by the compiler.
//! const _: () = assert!(MAP.len() == 2);
//! const _: () = assert!(MAP.const_contains("key1"));
//! const _: () = assert!(*MAP.const_index("key2") == 2);
//! const _: () = assert!(!MAP.const_contains("key3"));
//!
//! // Answered at runtime, for any `K: Eq`.
//! assert_eq!(MAP.get("key1"), Some(&1));
//! assert_eq!(MAP.get_or_default("key3"), (false, 0));
//! ```
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support (implies `alloc`)
//! - `alloc`: Enables `TryFrom<Vec<(K, V)>>`
//! - `tracing`: Structured events from the runtime constructors

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

// CTMAP - ctmap
// SW-REQ-ID: REQ_MAP_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod macros;

/// Compile-time lookups for primitive, string and byte keys
pub mod const_lookup;
/// Content equality for byte and string keys in `const` contexts
pub mod eq;
/// Iterators over map entries
pub mod iter;
/// The fixed-size map type
pub mod map;
/// Tracing support (requires the `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing;

pub use ctmap_error::{codes, Error, ErrorCategory, Result};
pub use iter::Iter;
pub use map::ConstMap;

// CTMAP - ctmap
// Module: Compile-time lookups
// SW-REQ-ID: REQ_MAP_001, REQ_MAP_EQ_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! `const fn` lookups for key types whose equality is available at compile
//! time.
//!
//! Trait methods cannot be called from a `const fn` on stable Rust, so the
//! generic lookups on [`ConstMap`] only run at runtime. For primitive keys
//! and for `&str`, `&[u8]` and `&CStr` keys, the `const_*` methods generated
//! here scan the entries with a bounded `while` loop. The generated methods
//! give the same answers as their runtime counterparts.
//!
//! ```
//! use ctmap::ConstMap;
//!
//! const PORTS: ConstMap<&str, u16, 3> =
//!     ConstMap::new([("http", 80), ("https", 443), ("ssh", 22)]);
//!
//! const HTTPS: u16 = *PORTS.const_index("https");
//! const _: () = assert!(HTTPS == 443);
//! const _: () = assert!(!PORTS.const_contains("ftp"));
//! ```
//!
//! Indexing a missing key inside a constant stops compilation:
//!
//! ```compile_fail
//! use ctmap::ConstMap;
//!
//! const PORTS: ConstMap<&str, u16, 1> = ConstMap::new([("http", 80)]);
//! const FTP: u16 = *PORTS.const_index("ftp");
//! ```

use core::ffi::CStr;

use crate::eq::{bytes_eq, cstr_eq, str_eq};
use crate::ConstMap;

macro_rules! impl_const_lookup {
    // Keys compared with the built-in `==`.
    (@primitive $($key:ty),+ $(,)?) => {
        $(
            impl<V, const N: usize> ConstMap<$key, V, N> {
                impl_const_lookup!(@methods $key, $key, |a, b| a == b);
            }
        )+
    };

    // Borrowed keys compared by content through an `eq` helper.
    (@borrowed $($target:ty => $eq:ident),+ $(,)?) => {
        $(
            impl<'k, V, const N: usize> ConstMap<&'k $target, V, N> {
                impl_const_lookup!(@methods &'k $target, &$target, |a, b| $eq(a, b));
            }
        )+
    };

    (@methods $key:ty, $arg:ty, |$a:ident, $b:ident| $eq:expr) => {
        /// Index of the first entry whose key equals `key`, evaluated by a
        /// bounded scan that also runs in `const` contexts.
        #[must_use]
        pub const fn const_position(&self, key: $arg) -> Option<usize> {
            let mut index = 0;
            while index < N {
                let $a = self.entries[index].0;
                let $b = key;
                if $eq {
                    return Some(index);
                }
                index += 1;
            }
            None
        }

        /// Returns the first entry whose key equals `key`, or `None`.
        #[must_use]
        pub const fn const_find(&self, key: $arg) -> Option<(&$key, &V)> {
            match self.const_position(key) {
                Some(index) => {
                    let (key, value) = &self.entries[index];
                    Some((key, value))
                }
                None => None,
            }
        }

        /// Returns `true` if the map contains `key`.
        #[inline]
        #[must_use]
        pub const fn const_contains(&self, key: $arg) -> bool {
            self.const_position(key).is_some()
        }

        /// Gets a reference to the value for `key`.
        #[must_use]
        pub const fn const_get(&self, key: $arg) -> Option<&V> {
            match self.const_position(key) {
                Some(index) => Some(&self.entries[index].1),
                None => None,
            }
        }

        /// Gets the value for `key` with no fallback.
        ///
        /// # Panics
        ///
        /// Panics if `key` is missing. Inside a constant this is a compile
        /// error.
        #[must_use]
        pub const fn const_index(&self, key: $arg) -> &V {
            match self.const_get(key) {
                Some(value) => value,
                None => panic!("key not found in ConstMap"),
            }
        }

        /// Returns `true` if any key occurs more than once.
        #[must_use]
        pub const fn has_duplicate_keys(&self) -> bool {
            let mut outer = 0;
            while outer < N {
                let mut inner = outer + 1;
                while inner < N {
                    let $a = self.entries[outer].0;
                    let $b = self.entries[inner].0;
                    if $eq {
                        return true;
                    }
                    inner += 1;
                }
                outer += 1;
            }
            false
        }

        /// Creates a map whose keys must all be distinct.
        ///
        /// # Panics
        ///
        /// Panics if a key repeats. Inside a constant this is a compile
        /// error.
        #[must_use]
        pub const fn new_unique(entries: [($key, V); N]) -> Self {
            let map = Self::new(entries);
            assert!(!map.has_duplicate_keys(), "ConstMap keys must be unique");
            map
        }
    };
}

impl_const_lookup!(@primitive
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    char, bool,
);

impl_const_lookup!(@borrowed
    str => str_eq,
    [u8] => bytes_eq,
    CStr => cstr_eq,
);

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBERS: ConstMap<&str, i32, 2> = ConstMap::new([("key1", 1), ("key2", 2)]);
    const WORDS: ConstMap<&str, &str, 3> =
        ConstMap::new([("key1", "value1"), ("key2", "value2"), ("key3", "value3")]);
    const CODES: ConstMap<u16, &str, 3> =
        ConstMap::new([(200, "ok"), (404, "not found"), (500, "server error")]);
    const C_KEYS: ConstMap<&CStr, u8, 2> = ConstMap::new([(c"key1", 1), (c"key2", 2)]);
    const BYTE_KEYS: ConstMap<&[u8], u8, 2> =
        ConstMap::new([(b"ab".as_slice(), 1), (b"abc".as_slice(), 2)]);

    // Evaluated by the compiler; a wrong answer fails the build.
    const _: () = {
        assert!(NUMBERS.len() == 2);
        assert!(!NUMBERS.is_empty());
        assert!(NUMBERS.const_contains("key1"));
        assert!(*NUMBERS.const_index("key1") == 1);
        assert!(NUMBERS.const_contains("key2"));
        assert!(*NUMBERS.const_index("key2") == 2);
        assert!(!NUMBERS.const_contains("key3"));
        assert!(NUMBERS.const_get("key3").is_none());
    };

    #[test]
    fn test_const_queries_on_str_keys() {
        assert_eq!(WORDS.const_position("key2"), Some(1));
        assert_eq!(WORDS.const_get("key2"), Some(&"value2"));
        assert_eq!(WORDS.const_find("key3"), Some((&"key3", &"value3")));
        assert_eq!(WORDS.const_find("key4"), None);
    }

    #[test]
    fn test_const_queries_on_runtime_strings() {
        let probe = std::string::String::from("key1");
        assert!(NUMBERS.const_contains(&probe));
        assert_eq!(NUMBERS.const_get(&probe), Some(&1));
    }

    #[test]
    fn test_const_queries_on_integer_keys() {
        const NOT_FOUND: &str = *CODES.const_index(404);
        assert_eq!(NOT_FOUND, "not found");
        assert!(CODES.const_contains(500));
        assert!(!CODES.const_contains(418));
        assert_eq!(CODES.const_position(200), Some(0));
    }

    #[test]
    fn test_const_queries_on_cstr_keys() {
        const SECOND: u8 = *C_KEYS.const_index(c"key2");
        assert_eq!(SECOND, 2);

        let owned = std::ffi::CString::new("key1").unwrap();
        assert_eq!(C_KEYS.const_get(&owned), Some(&1));
        assert!(!C_KEYS.const_contains(c"key"));
    }

    #[test]
    fn test_const_queries_on_byte_keys() {
        assert_eq!(BYTE_KEYS.const_get(b"abc"), Some(&2));
        assert_eq!(BYTE_KEYS.const_get(b"ab"), Some(&1));
        assert_eq!(BYTE_KEYS.const_get(b"a"), None);
    }

    #[test]
    fn test_const_matches_runtime() {
        for probe in ["key1", "key2", "key3", ""] {
            assert_eq!(NUMBERS.const_get(probe), NUMBERS.get(probe));
            assert_eq!(NUMBERS.const_contains(probe), NUMBERS.contains_key(probe));
            assert_eq!(NUMBERS.const_position(probe), NUMBERS.position(probe));
        }
    }

    #[test]
    fn test_duplicates() {
        const UNIQUE: ConstMap<char, u8, 3> =
            ConstMap::<char, u8, 3>::new_unique([('a', 1), ('b', 2), ('c', 3)]);
        assert!(!UNIQUE.has_duplicate_keys());

        let repeated = ConstMap::new([("x", 1), ("y", 2), ("x", 3)]);
        assert!(repeated.has_duplicate_keys());
        assert_eq!(repeated.const_get("x"), Some(&1));
    }

    #[test]
    #[should_panic(expected = "ConstMap keys must be unique")]
    fn test_new_unique_rejects_duplicates_at_runtime() {
        let entries = [(1u8, 'a'), (1u8, 'b')];
        let _map = ConstMap::<u8, char, 2>::new_unique(entries);
    }

    #[test]
    #[should_panic(expected = "key not found in ConstMap")]
    fn test_const_index_panics_at_runtime() {
        let probe = std::string::String::from("missing");
        let _value = NUMBERS.const_index(&probe);
    }
}

// CTMAP - ctmap
// Module: Construction macros
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Builds a [`ConstMap`](crate::ConstMap) from `key => value` pairs.
///
/// The length is inferred from the number of pairs. The expansion is a
/// `const` expression, so the macro can initialize `const` and `static`
/// items.
///
/// # Examples
///
/// ```
/// use ctmap::{const_map, ConstMap};
///
/// static COLORS: ConstMap<&str, u32, 3> = const_map! {
///     "red" => 0xff0000,
///     "green" => 0x00ff00,
///     "blue" => 0x0000ff,
/// };
///
/// assert_eq!(COLORS.get("green"), Some(&0x00ff00));
/// ```
///
/// At least one pair is required:
///
/// ```compile_fail
/// use ctmap::const_map;
///
/// let empty = const_map! {};
/// ```
#[macro_export]
macro_rules! const_map {
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::ConstMap::new([$(($key, $value)),+])
    };
}

/// Like [`const_map!`], but fails to compile in a `const` context (and
/// panics at runtime) when a key repeats.
///
/// Only available for key types with const lookups, see
/// [`ConstMap::new_unique`](crate::ConstMap::new_unique).
///
/// # Examples
///
/// ```
/// use ctmap::{const_map_unique, ConstMap};
///
/// const LEVELS: ConstMap<u8, &str, 2> = const_map_unique! {
///     u8;
///     0 => "off",
///     1 => "on",
/// };
/// assert_eq!(LEVELS.const_get(1), Some(&"on"));
/// ```
///
/// ```compile_fail
/// use ctmap::{const_map_unique, ConstMap};
///
/// const LEVELS: ConstMap<u8, &str, 2> = const_map_unique! {
///     u8;
///     0 => "off",
///     0 => "on",
/// };
/// ```
#[macro_export]
macro_rules! const_map_unique {
    ($key_ty:ty; $($key:expr => $value:expr),+ $(,)?) => {
        $crate::ConstMap::<$key_ty, _, { [$(stringify!($key)),+].len() }>::new_unique([
            $(($key, $value)),+
        ])
    };
}

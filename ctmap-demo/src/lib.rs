//! Demonstration driver for `ctmap`.
//!
//! Builds a two-entry map, runs every query against it and turns the result
//! into a process exit code. The binary in `main.rs` is a thin CLI around
//! [`exercise`].

use std::borrow::Borrow;

use anyhow::{anyhow, Context, Result};
use ctmap::{const_map, ConstMap};
use tracing::{debug, info, warn};

/// Number of entries in every demo map
pub const DEMO_LEN: usize = 2;

/// The demo map as a constant, so it can be inspected at compile time.
pub const DEMO: ConstMap<&str, i32, DEMO_LEN> = const_map! {
    "key1" => 1,
    "key2" => 2,
};

// Checked by the compiler on every build of the demo.
const _: () = {
    assert!(DEMO.len() == 2);
    assert!(!DEMO.is_empty());
    assert!(DEMO.const_contains("key1"));
    assert!(*DEMO.const_index("key1") == 1);
    assert!(DEMO.const_contains("key2"));
    assert!(*DEMO.const_index("key2") == 2);
    assert!(!DEMO.const_contains("key3"));
};

/// Shared instance of [`DEMO`] for runtime queries.
pub static DEMO_MAP: ConstMap<&str, i32, DEMO_LEN> = DEMO;

/// Outcome of running every query for one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupReport {
    /// Key that was looked up
    pub key:      String,
    /// Result of `contains_key`
    pub found:    bool,
    /// Position in construction order, if present
    pub position: Option<usize>,
    /// Value from the found-flag lookup, `0` when missing
    pub value:    i32,
    /// Number of entries visited by a full iteration
    pub visited:  usize,
}

impl LookupReport {
    /// Exit code for the process: the found value clamped to `0..=255`, or
    /// `0` when the key is missing.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if !self.found {
            return 0;
        }
        u8::try_from(self.value.clamp(0, i32::from(u8::MAX))).unwrap_or(u8::MAX)
    }
}

/// Runs `len`, `contains_key`, `position`, `get_or_default` and a full
/// iteration against `map` and records the results.
pub fn exercise<K, const N: usize>(map: &ConstMap<K, i32, N>, key: &str) -> LookupReport
where
    K: Borrow<str> + core::fmt::Debug,
{
    info!(len = map.len(), empty = map.is_empty(), "exercising map");

    let found = map.contains_key(key);
    let position = map.position(key);
    let (_, value) = map.get_or_default(key);

    let mut visited = 0;
    for (entry_key, entry_value) in map {
        debug!(key = ?entry_key, value = *entry_value, "entry");
        visited += 1;
    }

    if found {
        info!(key, value, position = ?position, "key found");
        debug!(value = map[key], "unchecked index agrees");
    } else {
        warn!(key, "key not present in map");
    }

    LookupReport {
        key: key.to_owned(),
        found,
        position,
        value,
        visited,
    }
}

/// Parses `key=value` arguments and builds a map of exactly [`DEMO_LEN`]
/// entries from them.
///
/// # Errors
///
/// Fails if an argument is malformed, a value is not an integer, a key
/// repeats, or the number of entries differs from [`DEMO_LEN`].
pub fn map_from_args(pairs: &[String]) -> Result<ConstMap<String, i32, DEMO_LEN>> {
    let entries = pairs
        .iter()
        .map(|pair| {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| anyhow!("expected KEY=VALUE, got {pair:?}"))?;
            let value = value
                .trim()
                .parse::<i32>()
                .with_context(|| format!("invalid value for key {key:?}"))?;
            Ok((key.trim().to_owned(), value))
        })
        .collect::<Result<Vec<_>>>()?;

    let map = ConstMap::<String, i32, DEMO_LEN>::try_from(entries)
        .with_context(|| format!("expected exactly {DEMO_LEN} entries"))?;

    ConstMap::try_new_unique(map.into_inner()).context("entries must use distinct keys")
}

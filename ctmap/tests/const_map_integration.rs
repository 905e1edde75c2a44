#![allow(clippy::unwrap_used, clippy::expect_used)]

// Integration tests for ConstMap
// Exercises the public API the way a downstream crate would.

use core::ffi::CStr;

use ctmap::{codes, const_map, ConstMap, Result};

const NUMBERS: ConstMap<&str, i32, 2> = const_map! {
    "key1" => 1,
    "key2" => 2,
};

const WORDS: ConstMap<&str, &str, 3> = const_map! {
    "key1" => "value1",
    "key2" => "value2",
    "key3" => "value3",
};

// Everything below is checked by the compiler.
const _: () = {
    assert!(NUMBERS.len() == 2);
    assert!(NUMBERS.const_contains("key1"));
    assert!(*NUMBERS.const_index("key1") == 1);
    assert!(NUMBERS.const_contains("key2"));
    assert!(*NUMBERS.const_index("key2") == 2);
    assert!(!NUMBERS.const_contains("key3"));
};

#[test]
fn test_numbers_scenario() {
    assert_eq!(NUMBERS.len(), 2);
    assert!(NUMBERS.contains_key("key1"));
    assert_eq!(NUMBERS.get_or_default("key1"), (true, 1));
    assert_eq!(NUMBERS.get("key1"), Some(&1));
    assert!(!NUMBERS.contains_key("key3"));
    assert_eq!(NUMBERS.get_or_default("key3"), (false, 0));
    assert_eq!(NUMBERS["key2"], 2);
}

#[test]
fn test_words_scenario() {
    let (_, value) = WORDS.find("key2").expect("key2 is present");
    assert_eq!(*value, "value2");
    assert!(!WORDS.is_empty());
    assert_eq!(WORDS.len(), 3);

    let collected: Vec<(&str, &str)> = WORDS.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(
        collected,
        vec![("key1", "value1"), ("key2", "value2"), ("key3", "value3")]
    );
}

#[test]
fn test_absent_keys() {
    for probe in ["", "key", "key4", "KEY1", "key1 "] {
        assert!(!WORDS.contains_key(probe));
        assert_eq!(WORDS.find(probe), None);
        assert_eq!(WORDS.get_or_default(probe), (false, ""));
        assert_eq!(WORDS.const_find(probe), None);
    }
}

#[test]
fn test_distinct_string_instances_compare_equal() {
    let first = String::from("key1");
    let second = String::from("key1");
    assert_ne!(first.as_ptr(), second.as_ptr());

    let map = ConstMap::new([(first.as_str(), 1), ("key2", 2)]);
    assert_eq!(map.get(second.as_str()), Some(&1));
    assert_eq!(map.const_get(&second), Some(&1));
}

#[test]
fn test_cstr_keys_compare_by_content() {
    const C_MAP: ConstMap<&CStr, i32, 2> = ConstMap::new([(c"key1", 1), (c"key2", 2)]);

    let owned = std::ffi::CString::new("key2").expect("no interior NUL");
    assert_eq!(C_MAP.const_get(&owned), Some(&2));
    assert_eq!(C_MAP.get(owned.as_c_str()), Some(&2));
    assert!(!C_MAP.const_contains(c"key3"));
}

#[test]
fn test_static_map_usable_as_static() {
    static STATUS: ConstMap<u16, &str, 3> = const_map! {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
    };

    assert_eq!(STATUS.get(&404), Some(&"Not Found"));
    assert_eq!(STATUS.const_get(500), Some(&"Internal Server Error"));
    assert_eq!(STATUS.get(&418), None);
}

#[test]
fn test_runtime_construction() -> Result<()> {
    let entries = vec![("alpha".to_string(), 1u8), ("beta".to_string(), 2u8)];

    let from_slice = ConstMap::<String, u8, 2>::try_from(entries.as_slice())?;
    assert_eq!(from_slice.get("beta"), Some(&2));

    let from_vec = ConstMap::<String, u8, 2>::try_from(entries)?;
    assert_eq!(from_slice, from_vec);

    Ok(())
}

#[test]
fn test_runtime_construction_rejects_wrong_count() {
    let entries = [("only", 1)];
    let error = ConstMap::<&str, i32, 2>::try_from(&entries[..]).unwrap_err();
    assert_eq!(error.code, codes::ENTRY_COUNT_MISMATCH);
    assert!(error.is_construction_error());
}

#[test]
fn test_duplicate_policy() {
    let first_wins = ConstMap::new([("k", 1), ("k", 2)]);
    assert_eq!(first_wins.get("k"), Some(&1));
    assert_eq!(first_wins["k"], 1);

    let error = ConstMap::try_new_unique([("k", 1), ("k", 2)]).unwrap_err();
    assert_eq!(error.code, codes::DUPLICATE_KEY);
}

#[test]
fn test_iteration_is_repeatable() {
    let first: Vec<_> = WORDS.iter().collect();
    let second: Vec<_> = (&WORDS).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(WORDS.keys().count(), 3);
    assert_eq!(WORDS.values().copied().collect::<Vec<_>>(), ["value1", "value2", "value3"]);
}

use ctmap::{const_map, ConstMap};

const NUMBERS: ConstMap<&str, i32, 2> = const_map! {
    "key1" => 1,
    "key2" => 2,
};

const _: () = {
    assert!(NUMBERS.len() == 2);
    assert!(NUMBERS.const_contains("key1"));
    assert!(*NUMBERS.const_index("key2") == 2);
    assert!(!NUMBERS.const_contains("key3"));
};

fn main() {
    println!("size: {}", NUMBERS.len());

    for key in ["key1", "key2", "key3"] {
        match NUMBERS.get(key) {
            Some(value) => println!("{key} -> {value}"),
            None => println!("{key} is not present"),
        }
    }

    let (found, value) = NUMBERS.get_or_default("key3");
    println!("key3 with found flag: ({found}, {value})");
}

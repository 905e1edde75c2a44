use ctmap::{const_map_unique, ConstMap};

static WORDS: ConstMap<&str, &str, 3> = const_map_unique! { &str;
    "key1" => "value1",
    "key2" => "value2",
    "key3" => "value3",
};

fn main() {
    if let Some((key, value)) = WORDS.find("key2") {
        println!("found {key} = {value}");
    }

    println!("empty: {}", WORDS.is_empty());
    for (key, value) in &WORDS {
        println!("{key}: {value}");
    }
}

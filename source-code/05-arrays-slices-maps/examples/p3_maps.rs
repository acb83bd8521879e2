//! Pattern 3: Maps
//! Example: HashMap basics and a Nested Lookup Table
//!
//! Run with: cargo run -p arrays-slices-maps --example p3_maps

use arrays_slices_maps::{lookup, periodic_elements};
use std::collections::HashMap;

fn main() {
    println!("=== HashMap Basics ===");
    let mut x: HashMap<String, i32> = HashMap::new();
    x.insert("key".to_string(), 10);
    println!("{:?}", x.get("key"));

    // The "comma ok" idiom becomes Option
    match x.get("key") {
        Some(value) => println!("The value: {} Present? true", value),
        None => println!("The value: - Present? false"),
    }

    x.remove("key");
    println!("after remove: {:?}", x.get("key"));
    println!("Present? {}", x.contains_key("key"));
    println!("with default: {}", x.get("key").copied().unwrap_or_default());

    println!("\n=== Elements ===");
    let elements = periodic_elements();
    for (symbol, element) in &elements {
        println!("{} -> {} -> {}", symbol, element.name, element.state);
    }

    println!("\n=== Lookup ===");
    for symbol in ["Li", "Un"] {
        if let Some(el) = lookup(&elements, symbol) {
            println!("{}: {} ({})", symbol, el.name, el.state);
        } else {
            println!("{}: not in table", symbol);
        }
    }
}

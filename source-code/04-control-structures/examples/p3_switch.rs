//! Pattern 3: match
//! Example: match as a switch statement
//!
//! Run with: cargo run -p control-structures --example p3_switch

use control_structures::{describe, size_label};

fn main() {
    println!("=== match on integers ===");
    for i in [0, 1, 2, 11] {
        println!("{}", describe(i));
    }

    println!("\n=== match with ranges and guards ===");
    for n in [-3, 0, 7, 42] {
        let label = match n {
            i32::MIN..=-1 => "negative",
            0 => "zero",
            x if x % 2 == 0 => "positive even",
            _ => "positive odd",
        };
        println!("{} is {}", n, label);
    }

    println!("\n=== if as an expression ===");
    println!("10 -> {}", size_label(10));
    println!("11 -> {}", size_label(11));
}

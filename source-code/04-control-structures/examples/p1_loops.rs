//! Pattern 1: Loops
//! Example: while, for over ranges, and loop with break
//!
//! Run with: cargo run -p control-structures --example p1_loops

use control_structures::{divisible_by, is_even};

fn main() {
    println!("=== while ===");
    let mut i = 1;
    while i <= 5 {
        println!("{}", i);
        i += 1;
    }

    println!("\n=== for over a range ===");
    for j in 1..=5 {
        println!("{}", j);
    }

    println!("\n=== loop with break ===");
    loop {
        println!("Infinite Loop");
        break;
    }

    // loop can yield a value through break
    let mut attempts = 0;
    let found = loop {
        attempts += 1;
        if attempts * attempts > 50 {
            break attempts;
        }
    };
    println!("first n with n*n > 50: {}", found);

    println!("\n=== even / odd ===");
    for k in 1..=10 {
        if is_even(k) {
            println!("{} is even", k);
        } else {
            println!("{} is odd", k);
        }
    }

    println!("\n=== divisible by 3 up to 30 ===");
    for n in divisible_by(3, 30) {
        println!("{} is divisible by 3", n);
    }
}

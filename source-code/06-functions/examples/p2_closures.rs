//! Pattern 2: Closures
//! Example: Generators that Capture State
//!
//! Run with: cargo run -p functions --example p2_closures

use functions::{even_generator, incrementer, odd_generator};

fn main() {
    println!("=== Incrementer ===");
    let mut increment = incrementer();
    for _ in 0..5 {
        println!("{}", increment());
    }

    println!("\n=== Odd Numbers ===");
    let mut next_odd = odd_generator();
    for _ in 0..5 {
        println!("Next odd number is: {}", next_odd());
    }

    println!("\n=== Even Numbers (first 10 of 100) ===");
    let mut next_even = even_generator();
    let evens: Vec<u32> = (0..100).map(|_| next_even()).collect();
    println!("{:?} ... {:?}", &evens[..10], evens.last());

    println!("\n=== Key Points ===");
    println!("1. `move` transfers the counter into the closure");
    println!("2. FnMut because calling it mutates the captured state");
    println!("3. Each generator owns its own counter");
}

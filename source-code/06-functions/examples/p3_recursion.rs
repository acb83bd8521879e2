//! Pattern 3: Recursion
//! Example: Factorial and Fibonacci
//!
//! Run with: cargo run -p functions --example p3_recursion

use functions::{factorial, fib};

fn main() {
    println!("=== Factorial ===");
    for i in [0, 1, 5, 10, 20, 21] {
        match factorial(i) {
            Some(value) => println!("Factorial of {} is {}", i, value),
            None => println!("Factorial of {} does not fit in a u64", i),
        }
    }

    println!("\n=== Fibonacci ===");
    println!("Fibonacci of 6 is: {}", fib(6));
    println!("Fibonacci of 10 is: {}", fib(10));
}

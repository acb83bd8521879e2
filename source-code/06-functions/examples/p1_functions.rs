//! Pattern 1: Functions
//! Example: Slices as Varargs, Tuple Returns, Local Closures
//!
//! Run with: cargo run -p functions --example p1_functions

use functions::{add, average, greatest, half, pair};

fn main() {
    println!("=== Average ===");
    let numbers = [90.0, 80.0, 70.0, 60.0, 50.0];
    println!("The average is: {:.2}", average(&numbers));

    println!("\n=== Multiple Return Values ===");
    let (a, b) = pair();
    println!("pair() -> ({}, {})", a, b);
    let (num, parity) = half(7);
    println!("7 is {}, half is {}", parity, num);
    let (num, parity) = half(10);
    println!("10 is {}, half is {}", parity, num);

    println!("\n=== Any Number of Arguments ===");
    println!("add(1, 2, 3, 4, 5) = {}", add(&[1, 2, 3, 4, 5]));
    println!("add(10, 20) = {}", add(&[10, 20]));
    let xs = vec![1, 2, 3];
    println!("add(xs) = {}", add(&xs));
    match greatest(&[3, 5, 2, 8, 1]) {
        Some(max) => println!("Greatest among 3, 5, 2, 8, 1 is: {}", max),
        None => println!("Nothing to compare"),
    }
    println!("greatest of nothing: {:?}", greatest(&[]));

    println!("\n=== Local Closure ===");
    let add_two = |a: i32, b: i32| a + b;
    println!("The sum is: {}", add_two(3, 4));
}

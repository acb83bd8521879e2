//! Pattern 2: if / else if / else
//! Example: FizzBuzz from 1 to 100
//!
//! Run with: cargo run -p control-structures --example p2_fizzbuzz

use control_structures::fizz_buzz_range;

fn main() {
    for line in fizz_buzz_range(1..=100) {
        println!("{}", line);
    }
}

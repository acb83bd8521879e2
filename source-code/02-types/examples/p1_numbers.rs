//! Pattern 1: Numbers
//! Example: Integer Arithmetic and Powers of Two
//!
//! Run with: cargo run -p types --example p1_numbers

use types::{compute_multiplication, largest_n_digit_binary};

fn main() {
    println!("=== Integer Arithmetic ===");
    println!("1 + 1 = {}", 1 + 1);
    println!("7 / 2 = {} (integer division)", 7 / 2);
    println!("7.0 / 2.0 = {}", 7.0 / 2.0);
    println!("7 % 2 = {}", 7 % 2);

    println!("\n=== Largest n-digit Binary Number ===");
    for n in [3, 4, 5, 8] {
        println!("{} digits -> {} ({:b})", n, largest_n_digit_binary(n), largest_n_digit_binary(n));
    }

    println!("\n=== Multiplication ===");
    println!("32132 * 42452 = {}", compute_multiplication(32132, 42452));

    println!("\n=== Overflow Is Explicit ===");
    let small: u8 = 250;
    println!("250u8.checked_add(10) = {:?}", small.checked_add(10));
    println!("250u8.wrapping_add(10) = {}", small.wrapping_add(10));
    println!("250u8.saturating_add(10) = {}", small.saturating_add(10));
}

//! Pattern 1: Fixed-size Arrays
//! Example: Indexing, Iterating, and Averaging
//!
//! Run with: cargo run -p arrays-slices-maps --example p1_arrays

use arrays_slices_maps::{compute_average, SCORES};

fn main() {
    println!("=== Zeroed Array ===");
    let mut x = [0i32; 5];
    x[4] = 100;
    println!("Array x: {:?}", x);
    println!("Length of array x: {}", x.len());

    println!("\n=== Initialized Array ===");
    let mut numbers = [10, 20, 30, 40, 50];
    println!("Array: {:?}", numbers);
    println!("First element: {}", numbers[0]);
    println!("Third element: {}", numbers[2]);
    numbers[1] = 25;
    println!("Modified Array: {:?}", numbers);

    // Out-of-range access is checked: get() returns None instead of panicking
    println!("numbers.get(10) = {:?}", numbers.get(10));

    println!("\n=== Iterate with Index ===");
    let mut total = 0.0;
    for (i, value) in SCORES.iter().enumerate() {
        total += value;
        println!("Index: {} Value: {}", i, value);
    }
    println!("Total: {}", total);
    println!("Average: {}", total / SCORES.len() as f64);

    println!("\n=== Average via a Slice ===");
    println!("Average from function: {}", compute_average(&SCORES));
    let more = vec![98.0, 93.0, 77.0, 82.0, 83.0, 100.0, 67.0, 89.0];
    println!("Average from function with Vec: {}", compute_average(&more));
}

//! Pattern 2: Slices and Vec
//! Example: Sub-slicing, Length vs Capacity, Append, and Copy
//!
//! Run with: cargo run -p arrays-slices-maps --example p2_slices

use arrays_slices_maps::{append, copy_prefix, minimum};

fn main() {
    println!("=== Sub-slices of an Array ===");
    let arr = [1.0, 2.0, 3.0, 4.0, 5.0];
    let whole = &arr[0..5];
    let middle = &arr[1..4];
    let head = &arr[..3];
    let tail = &arr[2..];
    println!("whole  {:?} len={}", whole, whole.len());
    println!("middle {:?} len={}", middle, middle.len());
    println!("head   {:?} len={}", head, head.len());
    println!("tail   {:?} len={}", tail, tail.len());

    let letters = ["a", "b", "c", "d", "e", "f"];
    println!("letters[2..5] = {:?}", &letters[2..5]);

    println!("\n=== Vec Length vs Capacity ===");
    let mut v: Vec<i32> = Vec::with_capacity(4);
    for i in 0..6 {
        v.push(i);
        println!("len={} capacity={}", v.len(), v.capacity());
    }

    println!("\n=== Append ===");
    let slice1 = vec![1, 2, 3];
    println!("Slice1 before append: {:?}", slice1);
    let slice2 = append(&slice1, &[4, 5]);
    println!("Slice2 after append: {:?}", slice2);
    let slice3 = append(&slice2, &[6, 7, 8]);
    println!("Slice3 after appending another slice: {:?}", slice3);

    println!("\n=== Copy ===");
    let source = [1, 2, 3, 4, 5];
    let mut destination = vec![0; 3];
    let copied = copy_prefix(&mut destination, &source);
    println!("Number of elements copied: {}", copied);
    println!("Destination after copy: {:?}", destination);

    println!("\n=== Minimum ===");
    let values = vec![48, 96, 86, 68, 57, 82, 63, 70, 37, 34, 83, 27, 19, 97, 9, 17];
    match minimum(&values) {
        Some(min) => println!("The minimum value is: {}", min),
        None => println!("No values"),
    }
}

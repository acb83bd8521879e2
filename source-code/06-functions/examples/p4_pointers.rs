//! Pattern 4: References and Box
//! Example: Pass by Value vs &mut, Heap Allocation with Box
//!
//! Run with: cargo run -p functions --example p4_pointers

use functions::{one, square, swap, zero, zero_ptr};

fn main() {
    println!("=== By Value vs By Reference ===");
    let mut x = 5;
    zero(x);
    println!("after zero(x): {}", x);
    zero_ptr(&mut x);
    println!("after zero_ptr(&mut x): {}", x);
    one(&mut x);
    println!("after one(&mut x): {}", x);

    println!("\n=== Box ===");
    let mut boxed: Box<i32> = Box::default();
    println!("fresh box: {}", boxed);
    one(&mut boxed);
    println!("after one(&mut boxed): {}", boxed);
    *boxed = 42;
    println!("after *boxed = 42: {}", boxed);

    println!("\n=== Square in Place ===");
    let mut y = 3.0;
    square(&mut y);
    println!("Square is: {}", y);

    println!("\n=== Swap ===");
    let (mut a, mut b) = (1, 2);
    swap(&mut a, &mut b);
    println!("After swapping, a = {} b = {}", a, b);
}

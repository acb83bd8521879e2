//! Pattern 8: Using Another Crate
//! Example: Calling into the `maths` crate from chapter 9
//!
//! Run with: cargo run -p packages --example p8_creating_packages

fn main() {
    let xs = [1.0, 2.0, 3.0, 4.0];
    println!("{:?}", xs);

    let avg = maths::average(&xs);
    println!("{}", avg);

    println!("min = {:?}, max = {:?}", maths::min(&xs), maths::max(&xs));
}

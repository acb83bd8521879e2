//! Pattern 1: A Tested Library
//! Example: Average, Min, Max
//!
//! Run with: cargo run -p maths --example p1_stats
//! Test with: cargo test -p maths

fn main() {
    let samples: [&[f64]; 3] = [&[1.0, 2.0], &[1.0, 2.0, 3.0, 4.0], &[]];

    for xs in samples {
        println!(
            "{:?}: average = {}, min = {:?}, max = {:?}",
            xs,
            maths::average(xs),
            maths::min(xs),
            maths::max(xs)
        );
    }
}

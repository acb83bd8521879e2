//! Pattern 1: Loose Parameters
//! Example: Geometry with Nothing but f64 Arguments
//!
//! Run with: cargo run -p structs-and-interfaces --example p1_free_functions

use structs_and_interfaces::{circle_area, distance, rectangle_area};

fn main() {
    let dist = distance(1.0, 2.0, 4.0, 6.0);
    let area = rectangle_area(1.0, 2.0, 4.0, 6.0);
    let circle = circle_area(0.0, 0.0, 5.0);

    println!("Distance: {:.2}", dist);
    println!("Rectangle Area: {:.2}", area);
    println!("Circle Area: {:.2}", circle);

    println!("\n=== Key Points ===");
    println!("- Eight loose f64s make it easy to swap arguments by mistake");
    println!("- The next example groups them into structs");
}

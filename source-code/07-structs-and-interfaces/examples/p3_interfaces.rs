//! Pattern 3: Traits as Interfaces
//! Example: total_area over &dyn Shape, and a Shape made of Shapes
//!
//! Run with: cargo run -p structs-and-interfaces --example p3_interfaces

use structs_and_interfaces::{total_area, Circle, MultiShape, Rectangle, Shape};

fn main() {
    println!("=== Heterogeneous Slice ===");
    let square = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    let circle = Circle::new(0.0, 0.0, 10.0);
    println!("{:.4}", total_area(&[&square, &circle]));

    println!("\n=== MultiShape ===");
    let multi = MultiShape::new(vec![
        Box::new(Circle::new(0.0, 0.0, 5.0)),
        Box::new(Rectangle::new(0.0, 0.0, 10.0, 10.0)),
    ]);
    println!("The area of multishapes: {:.4}", multi.area());
    println!("Perimeter of multishapes: {:.4}", multi.perimeter());

    // MultiShape is itself a Shape, so it can join the slice
    println!("Everything together: {:.4}", total_area(&[&square, &circle, &multi]));
}

//! Pattern 2: Structs and Methods
//! Example: Field Access, Default, Free Function vs Method
//!
//! Run with: cargo run -p structs-and-interfaces --example p2_structs_and_methods

use std::f64::consts::PI;
use structs_and_interfaces::{Circle, Rectangle, Shape};

const CIRCLE_AREA_LABEL: &str = "Circle Area";

fn circle_area(c: &Circle) -> f64 {
    PI * c.r * c.r
}

fn main() {
    println!("=== Construction ===");
    let c1 = Circle::default();
    println!("{:?}", c1);

    let mut c2 = Box::<Circle>::default();
    c2.x = 1.0;
    c2.y = 2.0;
    c2.r = 3.0;
    println!("{:?}", c2);

    let c3 = Circle { x: 0.0, y: 0.0, r: 5.0 };
    println!("{:?}", c3);
    println!("{}: {:.2}", CIRCLE_AREA_LABEL, PI * c3.r * c3.r);

    println!("\n=== Free Function Taking &Circle ===");
    let c4 = Circle::new(0.0, 0.0, 10.0);
    println!("{}: {:.2}", CIRCLE_AREA_LABEL, circle_area(&c4));

    println!("\n=== Method Call ===");
    println!("{}: {:.2}", CIRCLE_AREA_LABEL, c3.area());
    println!("{}: {:.2}", CIRCLE_AREA_LABEL, c4.area());

    println!("\n=== Rectangle ===");
    let r = Rectangle::new(0.0, 0.0, 4.0, 6.0);
    println!("{:?}", r);
    println!("Rectangle Area: {:.2}", r.area());
    let r2 = Rectangle::new(1.0, 2.0, 5.0, 8.0);
    println!("{:?}", r2);
    println!("Rectangle Area: {:.2}", r2.area());
}

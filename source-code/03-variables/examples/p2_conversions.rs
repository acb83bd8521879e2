//! Pattern 2: Unit Conversions
//! Example: Small Pure Functions over f64
//!
//! Run with: cargo run -p variables --example p2_conversions

use variables::{celsius_to_fahrenheit, fahrenheit_to_celsius, feet_to_meters, meters_to_feet};

fn main() {
    println!("=== Temperature ===");
    println!("98.6 F = {:.2} C", fahrenheit_to_celsius(98.6));
    println!("37 C = {:.2} F", celsius_to_fahrenheit(37.0));

    println!("\n=== Length ===");
    println!("5.5 ft = {:.4} m", feet_to_meters(5.5));
    println!("1.6764 m = {:.2} ft", meters_to_feet(1.6764));
}

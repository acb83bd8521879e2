//! Pattern 1: Scope and Shadowing
//! Example: Constants, Mutable Bindings, and Shadowing
//!
//! Run with: cargo run -p variables --example p1_scope_and_shadowing

use variables::{A, B, C};

fn print_global() {
    // Sees the crate constant, never main's locals
    println!("{}", variables::GLOBAL_GREETING);
}

fn main() {
    println!("=== Mutable Binding ===");
    let mut x = "Hello, World!";
    println!("{}", x);
    x = "First Rust Program";
    println!("{}", x);
    x = "Hello, Rust!";
    println!("{}", x);
    print_global();

    println!("\n=== Shadowing ===");
    let y = 5;
    let y = y + 1;
    println!("y = {}", y);

    {
        let y = "inner scope";
        println!("inside block: {}", y);
    }
    println!("after block: {}", y);

    let spaces = "   ";
    let spaces = spaces.len();
    println!("shadowed with a new type: {}", spaces);

    println!("\n=== Grouped Constants ===");
    println!("A = {}, B = {}, C = {}", A, B, C);
}

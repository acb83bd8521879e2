//! Pattern 1: First Program
//! Example: Printing, Reading stdin, and Exiting
//!
//! Run with: cargo run -p getting-started --example p1_hello_world

use getting_started::{greet, read_name};
use std::io;

struct AnnounceOnDrop(&'static str);

impl Drop for AnnounceOnDrop {
    fn drop(&mut self) {
        println!("{}", self.0);
    }
}

fn main() -> io::Result<()> {
    // process::exit skips destructors, so this never prints
    let _farewell = AnnounceOnDrop("Program has ended. This won't be run.");

    println!("Hello, World!");
    println!("Enter your name:");

    let name = read_name(io::stdin().lock())?;
    println!("{}", greet(&name));

    std::process::exit(0);
}

//! Pattern 3: Reading Input
//! Example: Parse a Number from stdin and Double It
//!
//! Run with: cargo run -p variables --example p3_read_number

use std::io::{self, BufRead};
use variables::double_input;

fn main() -> io::Result<()> {
    println!("Enter a number:");

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    match double_input(&line) {
        Ok(output) => println!("Output: {}", output),
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}

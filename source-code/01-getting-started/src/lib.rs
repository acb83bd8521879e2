//! Getting Started - Runnable Examples
//!
//! Chapter 1: printing, reading a line from stdin, and exiting.
//!
//! Run with:
//! ```bash
//! cargo run -p getting-started --example p1_hello_world
//! ```

use std::io::{self, BufRead};

/// Builds the greeting printed after the user types a name.
pub fn greet(name: &str) -> String {
    format!("Hello, {}", name.trim_end())
}

/// Reads a single line (including any trailing newline) from `reader`.
pub fn read_name<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}

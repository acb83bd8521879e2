//! Pattern 1: Standard Library Strings
//! Example: Searching, Splitting, Joining, Case, Bytes
//!
//! Run with: cargo run -p packages --example p1_strings

use packages::strings::string_facts;

fn main() {
    println!("=== str Methods ===");
    let facts = string_facts();
    let width = facts.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in facts {
        println!("{:width$}  =>  {}", label, value, width = width);
    }

    println!("\n=== Building Strings ===");
    let mut buf = String::new();
    buf.push_str("te");
    buf.push('s');
    buf += "t";
    println!("{}", buf);
}

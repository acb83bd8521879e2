//! Pattern 2: Strings and Booleans
//! Example: Length, Byte Access, Concatenation, Logic Operators
//!
//! Run with: cargo run -p types --example p2_strings_and_booleans

use types::byte_at;

fn main() {
    let hello = "Hello, World!";

    println!("=== Strings ===");
    println!("len(\"{}\") = {}", hello, hello.len());
    println!("byte at index 1 = {:?}", byte_at(hello, 1));
    println!("char at index 1 = {:?}", hello.chars().nth(1));
    println!("{}", "Hello, ".to_string() + "World!");
    println!("len(\"Nitesh Kumar\") = {}", "Nitesh Kumar".len());

    // len() counts bytes, not characters
    let accented = "héllo";
    println!("\"{}\": {} bytes, {} chars", accented, accented.len(), accented.chars().count());

    println!("\n=== Booleans ===");
    println!("true && false = {}", true && false);
    println!("true && true = {}", true && true);
    println!("true || false = {}", true || false);
    println!("false || false = {}", false || false);
    println!("!false = {}", !false);
    println!("!true = {}", !true);
}

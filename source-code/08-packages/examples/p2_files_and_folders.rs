//! Pattern 2: Files, Directories, Linked Lists
//! Example: Create, Read, List, Walk
//!
//! Run with: cargo run -p packages --example p2_files_and_folders

use packages::collections::{back_to_front, doubly_linked};
use packages::files::{list_dir, read_file, read_with_handle, walk, write_file};

fn main() -> anyhow::Result<()> {
    // Work in a scratch directory so nothing is left behind
    let scratch = std::env::temp_dir().join("fundamentals-files-demo");
    std::fs::create_dir_all(scratch.join("nested"))?;
    let path = scratch.join("test.txt");

    println!("=== Write and Read ===");
    write_file(&path, "Nitesh Kumar")?;
    println!("{}", read_with_handle(&path)?);
    println!("{}", read_file(&path)?);
    write_file(scratch.join("nested/inner.txt"), "inner")?;

    println!("\n=== List Directory ===");
    for name in list_dir(&scratch)? {
        println!("{}", name);
    }

    println!("\n=== Walk Tree ===");
    for entry in walk(&scratch)? {
        println!("{}", entry.display());
    }

    println!("\n=== Errors Are Values ===");
    if let Err(e) = read_file(scratch.join("missing.txt")) {
        println!("{}", e);
    }

    println!("\n=== Doubly Linked List ===");
    let list = doubly_linked(&[1, 2, 3]);
    for value in &list {
        println!("{}", value);
    }
    println!("reversed: {:?}", back_to_front(&list));

    std::fs::remove_dir_all(&scratch)?;
    Ok(())
}

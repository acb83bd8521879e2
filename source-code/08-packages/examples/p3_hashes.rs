//! Pattern 3: Hashes and Cryptography
//! Example: CRC-32 Checksums and SHA-256 Digests
//!
//! Run with: cargo run -p packages --example p3_hashes

use packages::hashing::{crc32, file_crc32, files_match, sha256_hex, Crc32};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    println!("=== CRC-32 ===");
    let v = crc32(b"test");
    let mut hasher = Crc32::new();
    hasher.write_all(b"test")?;
    let again = hasher.sum32();
    println!("{} == {}: {}", v, again, v == again);

    println!("\n=== Comparing Files ===");
    let dir = std::env::temp_dir().join("fundamentals-hash-demo");
    std::fs::create_dir_all(&dir)?;
    let first = dir.join("test1.txt");
    let second = dir.join("test2.txt");
    std::fs::write(&first, "hello")?;
    std::fs::write(&second, "hello")?;
    println!(
        "{} {} {}",
        file_crc32(&first)?,
        file_crc32(&second)?,
        files_match(&first, &second)?
    );
    std::fs::remove_dir_all(&dir)?;

    println!("\n=== SHA-256 ===");
    let bs1 = sha256_hex(b"test");
    let bs2 = sha256_hex(b"test");
    println!("{}\n{}", bs1, bs2);

    println!("\n=== Key Points ===");
    println!("- CRC-32 is 32 bits and fits in a u32; good for detecting accidental change");
    println!("- SHA-256 is 256 bits, so it is shown as 64 hex digits");
    println!("- Only the cryptographic hash resists deliberate collisions");
    Ok(())
}

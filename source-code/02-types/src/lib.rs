//! Types - Runnable Examples
//!
//! Chapter 2: integers, strings, and booleans.
//!
//! ```bash
//! cargo run -p types --example p1_numbers
//! cargo run -p types --example p2_strings_and_booleans
//! ```

/// Integer power by repeated multiplication. Wraps on overflow.
pub fn pow(base: u64, exp: u32) -> u64 {
    let mut result: u64 = 1;
    for _ in 0..exp {
        result = result.wrapping_mul(base);
    }
    result
}

/// The largest value representable with `n` binary digits, `2^n - 1`.
///
/// Anything past 64 digits is capped at `u64::MAX`.
pub fn largest_n_digit_binary(n: u32) -> u64 {
    match n {
        0 => 0,
        1..=63 => pow(2, n) - 1,
        _ => u64::MAX,
    }
}

pub fn compute_multiplication(a: i64, b: i64) -> i64 {
    a * b
}

/// Indexing a `&str` is not allowed, so go through its bytes.
pub fn byte_at(s: &str, index: usize) -> Option<u8> {
    s.as_bytes().get(index).copied()
}

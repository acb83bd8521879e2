//! Control Structures - Runnable Examples
//!
//! Chapter 4: `loop`, `while`, `for`, `if`/`else`, and `match`.
//!
//! ```bash
//! cargo run -p control-structures --example p1_loops
//! cargo run -p control-structures --example p2_fizzbuzz
//! cargo run -p control-structures --example p3_switch
//! ```

use std::fmt;
use std::ops::RangeInclusive;

pub fn is_even(n: u32) -> bool {
    n % 2 == 0
}

pub fn is_odd(n: u32) -> bool {
    !is_even(n)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzz {
    FizzBuzz(u32),
    Fizz(u32),
    Buzz(u32),
    Number(u32),
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FizzBuzz::FizzBuzz(n) => write!(f, "{} FizzBuzz", n),
            FizzBuzz::Fizz(n) => write!(f, "{} Fizz", n),
            FizzBuzz::Buzz(n) => write!(f, "{} Buzz", n),
            FizzBuzz::Number(n) => write!(f, "{}", n),
        }
    }
}

pub fn fizz_buzz(n: u32) -> FizzBuzz {
    if n % 3 == 0 && n % 5 == 0 {
        FizzBuzz::FizzBuzz(n)
    } else if n % 3 == 0 {
        FizzBuzz::Fizz(n)
    } else if n % 5 == 0 {
        FizzBuzz::Buzz(n)
    } else {
        FizzBuzz::Number(n)
    }
}

pub fn fizz_buzz_range(range: RangeInclusive<u32>) -> Vec<FizzBuzz> {
    range.map(fizz_buzz).collect()
}

/// Every `i` in `0..=up_to` divisible by `n`. A zero divisor yields nothing.
pub fn divisible_by(n: u32, up_to: u32) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }
    (0..=up_to).step_by(n as usize).collect()
}

pub fn describe(i: u32) -> &'static str {
    match i {
        0 => "i is zero",
        1 => "i is one",
        2 => "i is two",
        _ => "i is greater than two",
    }
}

pub fn size_label(i: i32) -> &'static str {
    if i > 10 {
        "Big"
    } else {
        "Small"
    }
}

//! Pattern 3: Select
//! Waiting on whichever channel is ready
//!
//! Run with: cargo run -p concurrency --example p3_select

use concurrency::{select_with_timeout, tick_sources, try_select, Selected};
use std::time::Duration;

fn main() {
    println!("=== Select With Timeout ===\n");
    let (c1, c2) = tick_sources(Duration::from_millis(400), Duration::from_millis(600));

    for _ in 0..6 {
        match select_with_timeout(&c1, &c2, Duration::from_millis(250)) {
            Selected::First(msg) | Selected::Second(msg) => println!("{}", msg),
            Selected::Timeout => println!("timeout"),
            Selected::Empty | Selected::Disconnected => break,
        }
    }

    println!("\n=== Select With Default ===\n");
    match try_select(&c1, &c2) {
        Selected::First(msg) | Selected::Second(msg) => println!("{}", msg),
        _ => println!("nothing ready"),
    }

    println!("\n=== Key Points ===");
    println!("1. select! blocks until one of its operations can proceed");
    println!("2. A receive on after(..) acts as a deadline");
    println!("3. A default branch turns select! into a non-blocking poll");
}

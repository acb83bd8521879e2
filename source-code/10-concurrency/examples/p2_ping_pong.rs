//! Pattern 2: Channels
//! Pinger, ponger and printer
//!
//! Run with: cargo run -p concurrency --example p2_ping_pong

use concurrency::ping_pong;
use std::time::Duration;

fn main() {
    println!("=== Ping Pong ===\n");
    let seen = ping_pong(6, Duration::from_millis(500));

    let pings = seen.iter().filter(|m| **m == "ping").count();
    println!("\n{} pings and {} pongs", pings, seen.len() - pings);

    println!("\n=== Key Points ===");
    println!("1. A zero-capacity channel makes every send wait for a receive");
    println!("2. Two producers can share one channel by cloning the Sender");
    println!("3. Dropping the Receiver makes blocked sends fail, ending the producers");
}

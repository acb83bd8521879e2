//! Pattern 1: Spawning Threads
//! Ten counters running side by side
//!
//! Run with: cargo run -p concurrency --example p1_threads
//! Set RUST_LOG=debug to see each counter finish.

use concurrency::run_counters;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Ten Counters ===\n");
    for tick in run_counters(10, 10, Duration::from_millis(250)) {
        println!("{} : {}", tick.worker, tick.step);
    }

    println!("\n=== Key Points ===");
    println!("1. Each counter runs on its own OS thread");
    println!("2. Random pauses make the output interleave differently every run");
    println!("3. Collecting from the channel ends once every sender is dropped");
}

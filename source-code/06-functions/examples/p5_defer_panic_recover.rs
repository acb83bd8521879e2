//! Pattern 5: Drop Guards, Panics, and Results
//! Example: Deferred cleanup, catch_unwind, and the Result alternative
//!
//! Run with: cargo run -p functions --example p5_defer_panic_recover

use functions::{may_panic, open_missing, recover, Deferred};

fn first() {
    println!("First function called");
}

fn second() {
    println!("Second function called");
}

fn guarded_work() {
    let _cleanup = Deferred::new(|| println!("  cleanup ran during unwind"));
    may_panic();
    println!("This line will not be executed if panic occurs");
}

fn main() -> anyhow::Result<()> {
    // Silence the default hook so recovered panics don't spam stderr
    std::panic::set_hook(Box::new(|_| {}));

    println!("=== Deferred Call ===");
    {
        let _later = Deferred::new(second);
        first();
        println!("End of block");
    }

    println!("\n=== Result Instead of Panic ===");
    match open_missing("non_existent_file.txt") {
        Ok(_) => println!("Opened unexpectedly"),
        Err(e) => println!("Expected error: {}", e),
    }

    println!("\n=== Recovering from a Panic ===");
    match recover(guarded_work) {
        Ok(()) => println!("No panic"),
        Err(msg) => println!("Recovered from panic: {}", msg),
    }

    let value = recover(|| 6 * 7);
    println!("No panic, value = {:?}", value);

    let _ = std::panic::take_hook();

    println!("\n=== Key Points ===");
    println!("1. Drop runs on scope exit, including during unwinding");
    println!("2. catch_unwind exists, but Result is the normal error path");
    println!("3. With panic = \"abort\" nothing can be recovered");
    Ok(())
}

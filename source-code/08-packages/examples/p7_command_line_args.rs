//! Pattern 7: Command-line Flags
//! Example: clap derive with a default value
//!
//! Run with: cargo run -p packages --example p7_command_line_args -- --maxp 100

use clap::Parser;
use packages::flags::{random_below, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let value = random_below(args.maxp, &mut rand::thread_rng())?;
    println!("{}", value);
    Ok(())
}

//! Command-line flags with `clap` derive.

use clap::Parser;
use rand::Rng;
use thiserror::Error;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "random", about = "Print a random number below --maxp")]
pub struct Args {
    /// Maximum number of connections
    #[arg(long, default_value_t = 10)]
    pub maxp: u32,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlagError {
    #[error("--maxp must be greater than zero")]
    ZeroBound,
}

/// A number in `0..maxp`.
pub fn random_below<R: Rng + ?Sized>(maxp: u32, rng: &mut R) -> Result<u32, FlagError> {
    if maxp == 0 {
        return Err(FlagError::ZeroBound);
    }
    Ok(rng.gen_range(0..maxp))
}

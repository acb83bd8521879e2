//! # Packages
//!
//! Chapter 8: a tour of the standard library and a handful of crates.
//!
//! ## Patterns Covered
//!
//! 1. **Strings** - searching, splitting, joining, case, bytes
//! 2. **Files** - create, read, list, walk; `LinkedList`
//! 3. **Hashing** - CRC-32 and SHA-256
//! 4. **Sorting** - ordering a `Vec` of structs by different keys
//! 5. **TCP Echo** - one framed value per connection
//! 6. **RPC** - a named remote method over the same framing
//! 7. **Flags** - `clap` derive
//! 8. **Creating Packages** - depending on the `maths` crate
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run -p packages --example p1_strings
//! cargo run -p packages --example p2_files_and_folders
//! cargo run -p packages --example p3_hashes
//! cargo run -p packages --example p4_sort_data
//! RUST_LOG=debug cargo run -p packages --example p5_tcp_echo
//! cargo run -p packages --example p6_rpc
//! cargo run -p packages --example p7_command_line_args -- --maxp 100
//! cargo run -p packages --example p8_creating_packages
//! ```
//!
//! ## Key Dependencies
//!
//! - `tokio` / `tokio-util` - async TCP and length-prefixed framing
//! - `bincode` + `serde` - binary encoding of framed values
//! - `walkdir` - recursive directory traversal
//! - `sha2` - cryptographic hashing
//! - `clap` - command-line flags
//! - `tracing` - diagnostics from the network examples

pub mod codec;
pub mod collections;
pub mod echo;
pub mod files;
pub mod flags;
pub mod hashing;
pub mod net;
pub mod rpc;
pub mod sorting;
pub mod strings;

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

//! Threads, channels and `select!`.
//!
//! - [`workers`]: one OS thread per counter, reporting back over a channel
//! - [`ping_pong`]: two producers and one consumer sharing a rendezvous channel
//! - [`multiplex`]: waiting on whichever of two channels is ready first

pub mod multiplex;
pub mod ping_pong;
pub mod workers;

pub use multiplex::{select_with_timeout, tick_sources, try_select, Selected};
pub use ping_pong::{ping_pong, pinger, ponger, printer};
pub use workers::{run_counters, Tick};

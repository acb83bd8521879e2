//! Functions - Runnable Examples
//!
//! Chapter 6: functions, closures, recursion, references, and the
//! Drop / panic / Result trio.
//!
//! ## Patterns Covered
//!
//! 1. **Functions** - slices in place of varargs, tuple returns
//! 2. **Closures** - generators that capture mutable state
//! 3. **Recursion** - factorial and Fibonacci
//! 4. **Pointers** - pass by value vs `&mut`, `Box`
//! 5. **Defer / Panic / Recover** - Drop guards, `catch_unwind`, `Result`
//!
//! ```bash
//! cargo run -p functions --example p1_functions
//! cargo run -p functions --example p2_closures
//! cargo run -p functions --example p3_recursion
//! cargo run -p functions --example p4_pointers
//! cargo run -p functions --example p5_defer_panic_recover
//! ```

pub mod basics;
pub mod closures;
pub mod deferred;
pub mod pointers;
pub mod recursion;

pub use basics::{add, average, greatest, half, pair, Parity};
pub use closures::{even_generator, incrementer, odd_generator};
pub use deferred::{may_panic, open_missing, recover, Deferred, FunctionError, Recovered};
pub use pointers::{one, square, swap, zero, zero_ptr};
pub use recursion::{factorial, fib};

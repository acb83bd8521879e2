//! Closures that own their counters.
//!
//! Each generator moves its state into the returned closure, so two
//! generators never share a count.

/// Yields 1, 2, 3, ...
pub fn incrementer() -> impl FnMut() -> u32 {
    let mut x = 0;
    move || {
        x += 1;
        x
    }
}

/// Yields 2, 4, 6, ...
pub fn even_generator() -> impl FnMut() -> u32 {
    let mut i = 0;
    move || {
        i += 2;
        i
    }
}

/// Yields 1, 3, 5, ...
pub fn odd_generator() -> impl FnMut() -> u32 {
    let mut n = 1;
    move || {
        let current = n;
        n += 2;
        current
    }
}

//! Small statistics helpers, and the tests that pin them down.
//!
//! ```
//! assert_eq!(maths::average(&[1.0, 2.0]), 1.5);
//! assert_eq!(maths::max(&[1.0, 2.0, 3.0, 4.0]), Some(4.0));
//! assert_eq!(maths::min(&[]), None);
//! ```
//!
//! Run the tests with:
//! ```bash
//! cargo test -p maths
//! ```

/// Arithmetic mean. An empty slice averages to `0.0` rather than failing.
pub fn average(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let total: f64 = xs.iter().sum();
    total / xs.len() as f64
}

/// Largest value, or `None` for an empty slice.
pub fn max(xs: &[f64]) -> Option<f64> {
    xs.iter().copied().reduce(f64::max)
}

/// Smallest value, or `None` for an empty slice.
pub fn min(xs: &[f64]) -> Option<f64> {
    xs.iter().copied().reduce(f64::min)
}

// ============================================================================
// Example: Direct Assertions
// ============================================================================


// ============================================================================
// Example: Property-Based Tests
// ============================================================================

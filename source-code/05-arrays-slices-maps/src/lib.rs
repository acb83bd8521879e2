//! Arrays, Slices & Maps - Runnable Examples
//!
//! Chapter 5: fixed-size arrays, borrowed slices, growable `Vec`s, and
//! `HashMap`/`BTreeMap`.
//!
//! ```bash
//! cargo run -p arrays-slices-maps --example p1_arrays
//! cargo run -p arrays-slices-maps --example p2_slices
//! cargo run -p arrays-slices-maps --example p3_maps
//! ```

pub mod elements;

pub use elements::{lookup, periodic_elements, Element, State};

/// The scores used across the array examples.
pub const SCORES: [f64; 5] = [98.0, 93.0, 77.0, 82.0, 83.0];

/// Mean of the values; an empty slice averages to 0.
///
/// Takes a slice, so arrays (`&scores`), `Vec`s, and sub-slices all work.
pub fn compute_average(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let total: f64 = scores.iter().sum();
    total / scores.len() as f64
}

pub fn minimum(values: &[i32]) -> Option<i32> {
    let (&first, rest) = values.split_first()?;
    let mut min = first;
    for &v in rest {
        if v < min {
            min = v;
        }
    }
    Some(min)
}

/// Returns a new vector holding `base` followed by `extra`.
pub fn append(base: &[i32], extra: &[i32]) -> Vec<i32> {
    let mut out = Vec::with_capacity(base.len() + extra.len());
    out.extend_from_slice(base);
    out.extend_from_slice(extra);
    out
}

/// Copies as many leading elements as fit and returns how many were copied.
pub fn copy_prefix(dst: &mut [i32], src: &[i32]) -> usize {
    let n = dst.len().min(src.len());
    dst[..n].copy_from_slice(&src[..n]);
    n
}

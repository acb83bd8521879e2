use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "Even"),
            Parity::Odd => write!(f, "Odd"),
        }
    }
}

/// Sums any number of values. Rust has no varargs; a slice plays that role.
pub fn add(values: &[i32]) -> i32 {
    values.iter().sum()
}

/// Integer half of `n` together with its parity.
pub fn half(n: i32) -> (i32, Parity) {
    let parity = if n % 2 == 0 { Parity::Even } else { Parity::Odd };
    (n / 2, parity)
}

pub fn greatest(values: &[i32]) -> Option<i32> {
    values.iter().copied().max()
}

/// Two return values at once.
pub fn pair() -> (i32, i32) {
    (5, 10)
}

pub fn average(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    numbers.iter().sum::<f64>() / numbers.len() as f64
}

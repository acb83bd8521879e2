//! Variables - Runnable Examples
//!
//! Chapter 3: bindings, scope, shadowing, constants, and small numeric
//! conversions.
//!
//! ```bash
//! cargo run -p variables --example p1_scope_and_shadowing
//! cargo run -p variables --example p2_conversions
//! cargo run -p variables --example p3_read_number
//! ```

use thiserror::Error;

/// Visible from every function in the crate.
pub const GLOBAL_GREETING: &str = "Global Variable";

pub const A: i32 = 5;
pub const B: i32 = 10;
pub const C: i32 = 15;

const METERS_PER_FOOT: f64 = 0.3048;

#[derive(Error, Debug, PartialEq)]
pub enum VariableError {
    #[error("no number was entered")]
    EmptyInput,
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

/// Parses a number typed by the user and doubles it.
pub fn double_input(text: &str) -> Result<f64, VariableError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(VariableError::EmptyInput);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| VariableError::NotANumber(trimmed.to_string()))?;
    Ok(value * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn temperature_conversions() {
        assert!(close(fahrenheit_to_celsius(98.6), 37.0));
        assert!(close(fahrenheit_to_celsius(32.0), 0.0));
        assert!(close(celsius_to_fahrenheit(37.0), 98.6));
        assert!(close(celsius_to_fahrenheit(-40.0), -40.0));
    }

    #[test]
    fn length_conversions() {
        assert!(close(feet_to_meters(5.5), 1.6764));
        assert!(close(meters_to_feet(1.6764), 5.5));
    }

    #[test]
    fn conversions_invert_each_other() {
        for value in [-12.5, 0.0, 3.0, 451.0] {
            assert!(close(celsius_to_fahrenheit(fahrenheit_to_celsius(value)), value));
            assert!(close(meters_to_feet(feet_to_meters(value)), value));
        }
    }

    mod double_input_tests {
        use super::super::*;

        #[test]
        fn doubles_valid_numbers() {
            assert_eq!(double_input("21"), Ok(42.0));
            assert_eq!(double_input("  1.5\n"), Ok(3.0));
            assert_eq!(double_input("-4"), Ok(-8.0));
        }

        #[test]
        fn rejects_empty_input() {
            assert_eq!(double_input("\n"), Err(VariableError::EmptyInput));
        }

        #[test]
        fn rejects_garbage() {
            let err = double_input("abc").unwrap_err();
            assert_eq!(err, VariableError::NotANumber("abc".to_string()));
            assert_eq!(err.to_string(), "'abc' is not a number");
        }
    }
}

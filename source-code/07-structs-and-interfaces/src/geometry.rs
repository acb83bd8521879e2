//! The "before" picture: every shape is a bag of loose coordinates.

use std::f64::consts::PI;

pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let a = x2 - x1;
    let b = y2 - y1;
    (a * a + b * b).sqrt()
}

pub fn rectangle_area(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let l = distance(x1, y1, x2, y1);
    let w = distance(x1, y1, x1, y2);
    l * w
}

/// The centre is accepted but unused, which is part of the problem.
pub fn circle_area(_x: f64, _y: f64, radius: f64) -> f64 {
    PI * radius * radius
}

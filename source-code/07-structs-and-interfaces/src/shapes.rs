use std::f64::consts::PI;

/// Anything with an area and a perimeter.
pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Circle { x, y, r }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.r * self.r
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.r
    }
}

/// Axis-aligned rectangle given by two opposite corners, in either order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rectangle {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Rectangle { x1, y1, x2, y2 }
    }

    fn sides(&self) -> (f64, f64) {
        ((self.x2 - self.x1).abs(), (self.y2 - self.y1).abs())
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        let (l, w) = self.sides();
        l * w
    }

    fn perimeter(&self) -> f64 {
        let (l, w) = self.sides();
        2.0 * (l + w)
    }
}

pub fn total_area(shapes: &[&dyn Shape]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

/// A shape made of other shapes.
#[derive(Default)]
pub struct MultiShape {
    pub shapes: Vec<Box<dyn Shape>>,
}

impl MultiShape {
    pub fn new(shapes: Vec<Box<dyn Shape>>) -> Self {
        MultiShape { shapes }
    }
}

impl Shape for MultiShape {
    fn area(&self) -> f64 {
        self.shapes.iter().map(|s| s.area()).sum()
    }

    fn perimeter(&self) -> f64 {
        self.shapes.iter().map(|s| s.perimeter()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn circle_measurements() {
        let c = Circle::new(0.0, 0.0, 5.0);
        assert!(close(c.area(), 25.0 * PI));
        assert!(close(c.perimeter(), 10.0 * PI));
        assert_eq!(Circle::default().area(), 0.0);
    }

    #[test]
    fn rectangle_uses_absolute_sides() {
        assert_eq!(Rectangle::new(0.0, 0.0, 4.0, 6.0).area(), 24.0);
        assert_eq!(Rectangle::new(1.0, 2.0, 5.0, 8.0).area(), 24.0);
        assert_eq!(Rectangle::new(5.0, 8.0, 1.0, 2.0).area(), 24.0);
        assert_eq!(Rectangle::new(0.0, 0.0, 4.0, 6.0).perimeter(), 20.0);
    }

    #[test]
    fn total_area_mixes_shapes() {
        let square = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let circle = Circle::new(0.0, 0.0, 10.0);
        assert!(close(total_area(&[&square, &circle]), 100.0 + 100.0 * PI));
        assert_eq!(total_area(&[]), 0.0);
    }

    #[test]
    fn multishape_sums_members() {
        let multi = MultiShape::new(vec![
            Box::new(Circle::new(0.0, 0.0, 5.0)),
            Box::new(Rectangle::new(0.0, 0.0, 10.0, 10.0)),
        ]);
        assert!(close(multi.area(), 25.0 * PI + 100.0));
        assert!(close(multi.perimeter(), 10.0 * PI + 40.0));
    }

    #[test]
    fn multishape_nests() {
        let inner = MultiShape::new(vec![Box::new(Rectangle::new(0.0, 0.0, 1.0, 1.0))]);
        let outer = MultiShape::new(vec![Box::new(inner), Box::new(Rectangle::new(0.0, 0.0, 2.0, 2.0))]);
        assert_eq!(outer.area(), 5.0);
        assert!(MultiShape::default().shapes.is_empty());
    }
}

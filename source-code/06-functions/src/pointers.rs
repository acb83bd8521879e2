//! Pass-by-value versus `&mut` borrows.

/// Receives a copy; the caller's value is untouched.
#[allow(unused_assignments)]
pub fn zero(mut x: i32) {
    x = 0;
}

pub fn zero_ptr(x: &mut i32) {
    *x = 0;
}

pub fn one(x: &mut i32) {
    *x = 1;
}

pub fn square(x: &mut f64) {
    *x *= *x;
}

pub fn swap(a: &mut i32, b: &mut i32) {
    std::mem::swap(a, b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_value_does_not_change_caller() {
        let x = 5;
        zero(x);
        assert_eq!(x, 5);
    }

    #[test]
    fn through_mut_reference() {
        let mut x = 5;
        zero_ptr(&mut x);
        assert_eq!(x, 0);
        one(&mut x);
        assert_eq!(x, 1);
    }

    #[test]
    fn boxed_value_defaults_to_zero() {
        let mut boxed: Box<i32> = Box::default();
        assert_eq!(*boxed, 0);
        one(&mut boxed);
        assert_eq!(*boxed, 1);
    }

    #[test]
    fn square_in_place() {
        let mut y = 3.0;
        square(&mut y);
        assert_eq!(y, 9.0);
    }

    #[test]
    fn swap_values() {
        let (mut a, mut b) = (1, 2);
        swap(&mut a, &mut b);
        assert_eq!((a, b), (2, 1));
    }
}

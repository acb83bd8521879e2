/// `n!`, or `None` once it no longer fits in a `u64` (past 20).
pub fn factorial(n: u64) -> Option<u64> {
    if n == 0 {
        return Some(1);
    }
    factorial(n - 1)?.checked_mul(n)
}

/// Fibonacci with `fib(0) == fib(1) == 1`.
pub fn fib(n: u32) -> u64 {
    if n <= 1 {
        return 1;
    }
    fib(n - 1) + fib(n - 2)
}

// Naive Recursive Fibonacci Benchmark (CPU-bound)
// Exponential double recursion over f64 - measures raw call overhead

use std::time::Instant;

/// Computes the n-th Fibonacci number by naive double recursion over f64.
///
/// The base case `n < 2.0` returns `n` unchanged, which covers F(0) = 0 and
/// F(1) = 1. Negative inputs fall through the same rule and come back
/// untouched; fractional inputs recurse toward fractional base cases instead
/// of 0/1. Roughly O(phi^n) calls and O(n) stack depth, so a large enough
/// `n` will blow the stack - that is the workload being measured, not a bug.
pub fn fib(n: f64) -> f64 {
    if n < 2.0 {
        return n;
    }
    fib(n - 2.0) + fib(n - 1.0)
}

/// Same naive double recursion over a natural integer index, for callers
/// that want the textbook sequence without float semantics.
pub fn fib_int(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    fib_int(n - 2) + fib_int(n - 1)
}

/// Runs `fib(n)` once and returns the result together with the wall-clock
/// seconds the call took. One scoped measurement, no timer state survives
/// the call.
pub fn fib_timed(n: f64) -> (f64, f64) {
    let start = Instant::now();
    let result = fib(n);
    let elapsed = start.elapsed();
    (result, elapsed.as_secs_f64())
}

// Naive Recursive Fibonacci Benchmark (CPU-bound)
// Single-threaded, no memoization - prints the result and elapsed seconds

use fib_bench::fib_timed;

const N: f64 = 35.0;

fn main() {
    let (result, elapsed) = fib_timed(N);

    println!("{}", result);
    println!("{}", elapsed);
}

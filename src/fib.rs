/// Largest n whose Fibonacci number fits in a `u64` (F(93) = 12200160415121876738).
pub const MAX_N: i64 = 93;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    #[error("invalid argument: n must be non-negative, got {0}")]
    Negative(i64),
    #[error("invalid argument: fib({0}) does not fit in 64 bits (max n is {MAX_N})")]
    Overflow(i64),
    #[error("invalid argument: runs must be at least 1")]
    NoRuns,
    #[error("fib({n}) mismatch: recursive gave {recursive}, iterative gave {iterative}")]
    Mismatch { n: u64, recursive: u64, iterative: u64 },
}

/// Naive recursive Fibonacci. Runs in O(φ^n); that cost is what gets measured.
#[inline(never)]
pub fn fib(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

/// Validates `n` before handing it to [`fib`], so the sum can never wrap.
pub fn fib_checked(n: i64) -> Result<u64, FibError> {
    let n = validate(n)?;
    Ok(fib(n))
}

pub fn validate(n: i64) -> Result<u64, FibError> {
    if n < 0 {
        return Err(FibError::Negative(n));
    }
    if n > MAX_N {
        return Err(FibError::Overflow(n));
    }
    Ok(n as u64)
}

/// Iterative reference, used to cross-check the recursive result.
pub fn fib_iter(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    // Stops at F(n) rather than F(n + 1) so fib_iter(MAX_N) cannot overflow.
    let mut a: u64 = 0;
    let mut b: u64 = 1;
    for _ in 1..n {
        let next = a + b;
        a = b;
        b = next;
    }
    b
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn base_cases() {
        assert_eq!(fib(0), 0);
        assert_eq!(fib(1), 1);
    }

    #[test]
    fn known_values() {
        assert_eq!(fib(2), 1);
        assert_eq!(fib(5), 5);
        assert_eq!(fib(10), 55);
        assert_eq!(fib(35), 9227465);
    }

    #[test]
    fn agrees_with_iterative_up_to_30() {
        for n in 0..=30 {
            assert_eq!(fib(n), fib_iter(n), "fib({n})");
        }
    }

    #[test]
    fn iterative_reaches_max_n() {
        assert_eq!(fib_iter(MAX_N as u64), 12200160415121876738);
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(fib_checked(-1), Err(FibError::Negative(-1)));
        assert_eq!(fib_checked(i64::MIN), Err(FibError::Negative(i64::MIN)));
    }

    #[test]
    fn rejects_overflowing_n() {
        assert_eq!(validate(MAX_N + 1), Err(FibError::Overflow(94)));
        assert_eq!(validate(MAX_N), Ok(93));
    }

    #[test]
    fn checked_matches_raw() {
        assert_eq!(fib_checked(20), Ok(6765));
    }

    quickcheck! {
        fn recursive_equals_iterative(n: u8) -> bool {
            let n = (n % 26) as u64;
            fib(n) == fib_iter(n)
        }

        fn repeated_calls_are_identical(n: u8) -> bool {
            let n = (n % 23) as u64;
            fib(n) == fib(n)
        }
    }
}

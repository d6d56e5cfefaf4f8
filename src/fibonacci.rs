//! Fibonacci sequence generator

use num_bigint::BigUint;

/// Iterator over the fibonacci sequence, starting 0, 1, 1, 2, ...
///
/// Terms are arbitrary precision, so the sequence never ends.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: BigUint,
    next: BigUint,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self {
            current: BigUint::from(0u8),
            next: BigUint::from(1u8),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let following = &self.current + &self.next;
        let next = std::mem::replace(&mut self.next, following);
        Some(std::mem::replace(&mut self.current, next))
    }
}

impl std::iter::FusedIterator for Fibonacci {}

/// First `n` fibonacci terms
pub fn fibonacci(n: usize) -> Vec<BigUint> {
    Fibonacci::new().take(n).collect()
}

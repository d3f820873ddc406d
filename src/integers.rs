//! A handful of well-known sets of integers.  They exist mostly to
//! give the set algebra something other than geometry to chew on.

use crate::set::Set;

/// Even integers.
pub fn even(i: &i64) -> bool {
    i % 2 == 0
}

/// Odd integers, negative ones included.
pub fn odd(i: &i64) -> bool {
    i % 2 != 0
}

/// Multiples of three.
pub fn multiple_of_three(i: &i64) -> bool {
    i % 3 == 0
}

/// Multiples of five.
pub fn multiple_of_five(i: &i64) -> bool {
    i % 5 == 0
}

/// Trial division by 2, 3, and then the candidates of the form 6k ± 1
/// up to the square root of `i`.
pub fn is_prime(i: &i64) -> bool {
    let i = *i;
    if i <= 1 {
        return false;
    }
    if i < 4 {
        return true;
    }
    if i % 2 == 0 {
        return false;
    }
    if i < 9 {
        return true;
    }
    if i % 3 == 0 {
        return false;
    }

    let sqrt = (i as f64).sqrt() as i64;
    let mut d = 5;
    while d <= sqrt {
        if i % d == 0 || i % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}

/// An endless iterator over the primes, as judged by `test`: 2, and
/// then every odd number from 3 upward that `test` accepts.
pub fn primes<P: Set<i64>>(test: P) -> Primes<P> {
    Primes { test, next: 2 }
}

/// See [`primes`].
#[derive(Clone, Debug)]
pub struct Primes<P> {
    test: P,
    next: i64,
}

impl<P: Set<i64>> Iterator for Primes<P> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.next == 2 {
            self.next = 3;
            return Some(2);
        }
        loop {
            let p = self.next;
            self.next += 2;
            if self.test.contains(&p) {
                return Some(p);
            }
        }
    }
}

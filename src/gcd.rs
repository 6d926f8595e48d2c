//! Greatest common divisor and least common multiple of unsigned integers

use crate::error::{Error, Result};
use num_integer::Integer;
use num_traits::{CheckedMul, Unsigned};

/// Greatest common divisor of two non-negative integers, using the Euclidean algorithm.
///
/// By convention `gcd(0, n) = n` and `gcd(m, 0) = m`, so `gcd(0, 0) = 0`.
pub fn gcd<T: Integer + Unsigned + Copy>(m: T, n: T) -> T {
    if m.is_zero() {
        return n;
    }
    if n.is_zero() {
        return m;
    }

    let (mut m, mut n) = (m, n);
    while !n.is_zero() {
        let r = m % n;
        m = n;
        n = r;
    }
    m
}

/// Greatest common divisor of a list of non-negative integers.
///
/// By convention `gcd([n]) = n`. Fails with [ZeroSize][crate::ErrorKind::ZeroSize]
/// if `ns` is empty.
pub fn gcd_all<T: Integer + Unsigned + Copy>(ns: &[T]) -> Result<T> {
    let (first, rest) = ns.split_first().ok_or_else(|| Error::zero_size("gcd_all"))?;
    Ok(rest.iter().fold(*first, |acc, &v| gcd(acc, v)))
}

/// Least common multiple of two positive integers.
///
/// # Errors
/// - [InvalidArgument][crate::ErrorKind::InvalidArgument] if either operand is zero
/// - [OutOfRange][crate::ErrorKind::OutOfRange] if the result doesn't fit in `T`
pub fn lcm<T: Integer + Unsigned + CheckedMul + Copy>(m: T, n: T) -> Result<T> {
    checked_lcm(m, n, "lcm")
}

fn checked_lcm<T: Integer + Unsigned + CheckedMul + Copy>(
    m: T,
    n: T,
    op: &'static str,
) -> Result<T> {
    if m.is_zero() || n.is_zero() {
        return Err(Error::invalid_argument(op));
    }

    // divide first so only the result itself can overflow
    (m / gcd(m, n))
        .checked_mul(&n)
        .ok_or_else(|| Error::out_of_range(op))
}

/// Least common multiple of a list of positive integers.
///
/// By convention `lcm([n]) = n`. Otherwise the list is folded pairwise with [lcm].
///
/// # Errors
/// - [ZeroSize][crate::ErrorKind::ZeroSize] if `ns` is empty
/// - [InvalidArgument][crate::ErrorKind::InvalidArgument] if a list with two or
///   more elements contains zero
/// - [OutOfRange][crate::ErrorKind::OutOfRange] if the result doesn't fit in `T`
pub fn lcm_all<T: Integer + Unsigned + CheckedMul + Copy>(ns: &[T]) -> Result<T> {
    const OP: &str = "lcm_all";
    match ns {
        [] => Err(Error::zero_size(OP)),
        [n] => Ok(*n),
        _ => {
            if ns.iter().any(|v| v.is_zero()) {
                return Err(Error::invalid_argument(OP));
            }
            ns[1..]
                .iter()
                .try_fold(ns[0], |acc, &v| checked_lcm(acc, v, OP))
        }
    }
}

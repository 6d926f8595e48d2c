//! Exact conversion between simple continued fractions and rational numbers

use super::block::Block;
use crate::error::{Error, Result};
use crate::traits::Approximation;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub};

/// Iterator of the convergents of a simple continued fraction, created by [convergents]
#[derive(Debug, Clone)]
pub struct Convergents<'a, T> {
    coeffs: std::slice::Iter<'a, T>,
    block: Block<T>,
    done: bool,
    infinite: bool, // a denominator became zero
}

impl<'a, T: Integer + Clone + CheckedAdd + CheckedMul + CheckedSub> Convergents<'a, T> {
    fn step(&mut self) -> Option<Ratio<T>> {
        let a = self.coeffs.next()?;
        let (p, q) = self.block.checked_rmove(a)?;
        if q.is_zero() {
            // only reachable with non-positive terms after the first one
            self.infinite = true;
            return None;
        }
        self.block.update(p.clone(), q.clone());

        if q < T::zero() {
            // normalize the sign here, Ratio::new negates without overflow checks
            let p = T::zero().checked_sub(&p)?;
            let q = T::zero().checked_sub(&q)?;
            Some(Ratio::new(p, q))
        } else {
            Some(Ratio::new(p, q))
        }
    }
}

impl<'a, T: Integer + Clone + CheckedAdd + CheckedMul + CheckedSub> Iterator for Convergents<'a, T> {
    type Item = Ratio<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let r = self.step();
        self.done = r.is_none();
        r
    }
}

/// Returns an iterator of the convergents `p_k / q_k` of the continued fraction `cf`.
///
/// The iterator stops when all terms are consumed, a numeric overflow happens,
/// or a denominator becomes zero (possible only with non-positive terms after the first).
pub fn convergents<T>(cf: &[T]) -> Convergents<'_, T>
where
    T: Integer + Clone + CheckedAdd + CheckedMul + CheckedSub,
{
    Convergents {
        coeffs: cf.iter(),
        block: Block::identity(),
        done: false,
        infinite: false,
    }
}

/// Rational value of the continued fraction `cf`.
///
/// Returns [Approximation::Exact] if all terms fit in the recurrence, otherwise
/// the last convergent before the overflow is returned as [Approximation::Approximated].
///
/// # Errors
/// - [ZeroSize][crate::ErrorKind::ZeroSize] if `cf` is empty
/// - [InvalidArgument][crate::ErrorKind::InvalidArgument] if the value is infinite,
///   i.e. a denominator of the recurrence becomes zero
pub fn to_rational<T>(cf: &[T]) -> Result<Approximation<Ratio<T>>>
where
    T: Integer + Clone + CheckedAdd + CheckedMul + CheckedSub,
{
    const OP: &str = "to_rational";
    if cf.is_empty() {
        return Err(Error::zero_size(OP));
    }

    let mut count = 0;
    let mut last = None;
    let mut iter = convergents(cf);
    for c in iter.by_ref() {
        count += 1;
        last = Some(c);
    }
    if iter.infinite {
        return Err(Error::invalid_argument(OP));
    }

    let last = last.ok_or_else(|| Error::out_of_range(OP))?;
    if count == cf.len() {
        Ok(Approximation::Exact(last))
    } else {
        Ok(Approximation::Approximated(last))
    }
}

/// Exact continued fraction expansion of a rational number.
///
/// The first term is the floor of `r` (negative for negative numbers), all
/// following terms are positive.
pub fn from_rational<T: Integer + Clone>(r: Ratio<T>) -> Vec<T> {
    let mut coeffs = Vec::new();
    let (mut n, mut d): (T, T) = r.into();

    loop {
        let (quo, rem) = n.div_mod_floor(&d);
        coeffs.push(quo);
        if rem.is_zero() {
            break;
        }
        n = d;
        d = rem;
    }

    coeffs
}

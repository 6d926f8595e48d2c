//! Expansion of a real number into simple continued fraction terms

use crate::error::{Error, Result};
use num_traits::{float::FloatCore, NumCast};

/// Expansion stops once the next complete quotient exceeds this value.
pub const DEFAULT_CUTOFF: f64 = 1e5;

/// Configuration of the continued fraction expansion.
///
/// The expansion of `x` repeatedly takes `a = floor(x)` and continues with
/// `x = 1 / (x - a)`. With floating point inputs, the remainder of an exact
/// rational is rarely exactly zero, so the expansion also stops when the next
/// `x` grows beyond the cutoff. A larger cutoff gives longer expansions of
/// small remainders at the cost of picking up rounding noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expander<F = f64> {
    cutoff: F,
}

impl<F: FloatCore> Default for Expander<F> {
    fn default() -> Self {
        Expander {
            cutoff: <F as NumCast>::from(DEFAULT_CUTOFF).unwrap_or_else(F::max_value),
        }
    }
}

impl<F: FloatCore> Expander<F> {
    #[inline]
    pub fn new(cutoff: F) -> Self {
        Expander { cutoff }
    }

    #[inline]
    pub fn with_cutoff(mut self, cutoff: F) -> Self {
        self.cutoff = cutoff;
        self
    }

    #[inline]
    pub fn cutoff(&self) -> F {
        self.cutoff
    }

    /// Returns a lazy iterator of the terms of `x`.
    ///
    /// Fails if `x` is not finite, or its integer part doesn't fit in `i64`.
    /// A later term that doesn't fit ends the iteration instead.
    pub fn terms(&self, x: F) -> Result<Expansion<F>> {
        self.terms_for(x, "Expander::terms")
    }

    fn terms_for(&self, x: F, op: &'static str) -> Result<Expansion<F>> {
        if !x.is_finite() {
            return Err(Error::invalid_argument(op));
        }
        if x.floor().to_i64().is_none() {
            return Err(Error::out_of_range(op));
        }

        Ok(Expansion {
            x,
            cutoff: self.cutoff,
            done: false,
        })
    }

    /// Expand `x` into at most `n` terms. The result is shorter than `n` when
    /// the expansion terminates early, which is the normal outcome for rationals.
    pub fn expand(&self, x: F, n: usize) -> Result<Vec<i64>> {
        self.expand_for(x, n, "Expander::expand")
    }

    fn expand_for(&self, x: F, n: usize, op: &'static str) -> Result<Vec<i64>> {
        if n == 0 {
            return Err(Error::out_of_range(op));
        }

        let terms: Vec<i64> = self.terms_for(x, op)?.take(n).collect();
        debug_assert!(!terms.is_empty() && terms.len() <= n);
        Ok(terms)
    }
}

/// Iterator of the terms of a continued fraction expansion, created by [Expander::terms]
#[derive(Debug, Clone)]
pub struct Expansion<F> {
    x: F, // current complete quotient
    cutoff: F,
    done: bool,
}

impl<F: FloatCore> Iterator for Expansion<F> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }

        let a = self.x.floor();
        let term = match a.to_i64() {
            Some(t) => t,
            None => {
                tracing::trace!("term out of i64 range, stopping expansion");
                self.done = true;
                return None;
            }
        };

        let next = (self.x - a).recip();
        if !next.is_finite() {
            tracing::trace!(term, "zero remainder, expansion is exact");
            self.done = true;
        } else if next > self.cutoff {
            tracing::trace!(term, "complete quotient exceeds cutoff, stopping expansion");
            self.done = true;
        } else {
            self.x = next;
        }

        Some(term)
    }
}

/// Simple continued fraction expansion of `x` with at most `n` terms.
///
/// The expansion stops before `n` terms when the remainder becomes zero or its
/// reciprocal exceeds `cut` (see [DEFAULT_CUTOFF]).
///
/// # Errors
/// - [OutOfRange][crate::ErrorKind::OutOfRange] if `n` is zero
/// - [InvalidArgument][crate::ErrorKind::InvalidArgument] if `x` is not finite
pub fn to_cont_frac<F: FloatCore>(x: F, n: usize, cut: F) -> Result<Vec<i64>> {
    Expander::new(cut).expand_for(x, n, "to_cont_frac")
}

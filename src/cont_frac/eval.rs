//! Floating point evaluation of simple continued fractions

use crate::error::{Error, Result};
use num_traits::{float::FloatCore, NumCast, ToPrimitive};

const OP: &str = "from_cont_frac";

#[inline]
fn term<T: ToPrimitive + Clone, F: FloatCore>(a: &T) -> Result<F> {
    <F as NumCast>::from(a.clone()).ok_or_else(|| Error::invalid_argument(OP))
}

/// Real value of the simple continued fraction `cf[0] + 1/(cf[1] + 1/(cf[2] + ...))`
/// truncated to the first `n` terms. If `n` is larger than the length of `cf`,
/// all terms are used.
///
/// The fraction is evaluated from the last term backwards with plain floating
/// point arithmetic. Use [to_rational][crate::to_rational] for an exact result.
///
/// # Errors
/// - [ZeroSize][crate::ErrorKind::ZeroSize] if `cf` is empty
/// - [OutOfRange][crate::ErrorKind::OutOfRange] if `n` is zero
/// - [InvalidArgument][crate::ErrorKind::InvalidArgument] if a term can't be
///   represented by `F`
pub fn from_cont_frac<T, F>(cf: &[T], n: usize) -> Result<F>
where
    T: ToPrimitive + Clone,
    F: FloatCore,
{
    if cf.is_empty() {
        return Err(Error::zero_size(OP));
    }
    if n == 0 {
        return Err(Error::out_of_range(OP));
    }
    let n = n.min(cf.len());

    if n == 1 {
        // degenerate case, integer
        return term(&cf[0]);
    }

    let mut tmp = term::<T, F>(&cf[n - 1])?.recip();
    for a in cf[1..n - 1].iter().rev() {
        tmp = (tmp + term::<T, F>(a)?).recip();
    }

    Ok(term::<T, F>(&cf[0])? + tmp)
}

/// Real value of the simple continued fraction with all terms in `cf`.
/// See [from_cont_frac].
#[inline]
pub fn eval_cont_frac<T, F>(cf: &[T]) -> Result<F>
where
    T: ToPrimitive + Clone,
    F: FloatCore,
{
    from_cont_frac(cf, cf.len().max(1))
}

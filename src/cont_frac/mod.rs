//! Conversions between real numbers and simple continued fractions
//! `a0 + 1/(a1 + 1/(a2 + ...))`
//!
//! 1. [to_cont_frac] and [Expander] expand a floating point number into its terms
//! 2. [from_cont_frac] and [eval_cont_frac] evaluate the terms back to a floating point number
//! 3. [convergents], [to_rational] and [from_rational] convert exactly between the terms and [Ratio][num_rational::Ratio]
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <http://www.numbertheory.org/continued_fractions.html>
//!

mod block;
mod eval;
mod expand;
mod rational;

pub use eval::*;
pub use expand::*;
pub use rational::*;

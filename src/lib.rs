//! Number theory primitives built on `num`: simple continued fractions,
//! gcd / lcm of unsigned integers and permutation algebra.

mod cont_frac;
pub mod error;
mod gcd;
pub mod perm;
pub mod traits;

pub use cont_frac::*;
pub use error::{Error, ErrorKind, Result};
pub use gcd::{gcd, gcd_all, lcm, lcm_all};
pub use perm::{compose, invert, Bijection, Permutations};
pub use traits::{Approximation, PermutationCheck};

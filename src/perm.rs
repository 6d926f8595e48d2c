//! Inversion and composition of permutations of `0..N`
//!
//! A permutation is stored as an index vector: position `i` holds the image of `i`.
//! Inputs are only trusted after a [PermutationCheck] accepts them. [Bijection]
//! is the default check; [Permutations::with_checker] injects another one.

use crate::error::{Error, Result};
use crate::traits::PermutationCheck;

/// Accepts vectors of length `N` where every value in `0..N` appears exactly once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bijection;

impl PermutationCheck for Bijection {
    fn is_valid(&self, perm: &[usize]) -> bool {
        let mut seen = vec![false; perm.len()];
        for &v in perm {
            match seen.get_mut(v) {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }
        true
    }
}

/// Returns true if `perm` is a permutation of `0..perm.len()`
#[inline]
pub fn is_permutation(perm: &[usize]) -> bool {
    Bijection.is_valid(perm)
}

/// The identity permutation `[0, 1, .., n-1]`
pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Permutation algebra that validates its inputs with the checker `C`
#[derive(Debug, Clone, Copy, Default)]
pub struct Permutations<C = Bijection> {
    checker: C,
}

impl Permutations<Bijection> {
    pub fn new() -> Self {
        Permutations { checker: Bijection }
    }
}

impl<C: PermutationCheck> Permutations<C> {
    pub fn with_checker(checker: C) -> Self {
        Permutations { checker }
    }

    #[inline]
    pub fn checker(&self) -> &C {
        &self.checker
    }

    fn check(&self, perm: &[usize], op: &'static str) -> Result<()> {
        if self.checker.is_valid(perm) {
            Ok(())
        } else {
            Err(Error::invalid_permutation(op))
        }
    }

    /// Inverse of `perm`, i.e. `result[perm[i]] = i`
    ///
    /// Fails with [InvalidPermutation][crate::ErrorKind::InvalidPermutation]
    /// if `perm` is rejected by the checker.
    pub fn invert(&self, perm: &[usize]) -> Result<Vec<usize>> {
        const OP: &str = "invert";
        self.check(perm, OP)?;

        let mut result = vec![0; perm.len()];
        for (i, &p) in perm.iter().enumerate() {
            // a lenient checker may let out of range indices through
            *result.get_mut(p).ok_or_else(|| Error::invalid_permutation(OP))? = i;
        }
        Ok(result)
    }

    /// Composition `perm ∘ sigma`, i.e. `result[i] = perm[sigma[i]]`.
    /// `sigma` is applied first.
    ///
    /// # Errors
    /// - [InvalidPermutation][crate::ErrorKind::InvalidPermutation] if either
    ///   input is rejected by the checker
    /// - [InvalidArgument][crate::ErrorKind::InvalidArgument] if the sizes differ
    pub fn compose(&self, perm: &[usize], sigma: &[usize]) -> Result<Vec<usize>> {
        const OP: &str = "compose";
        self.check(perm, OP)?;
        self.check(sigma, OP)?;
        if perm.len() != sigma.len() {
            return Err(Error::invalid_argument(OP));
        }

        sigma
            .iter()
            .map(|&s| perm.get(s).copied().ok_or_else(|| Error::invalid_permutation(OP)))
            .collect()
    }
}

/// Inverse of `perm`, see [Permutations::invert]
#[inline]
pub fn invert(perm: &[usize]) -> Result<Vec<usize>> {
    Permutations::new().invert(perm)
}

/// Composition `perm ∘ sigma`, see [Permutations::compose]
#[inline]
pub fn compose(perm: &[usize], sigma: &[usize]) -> Result<Vec<usize>> {
    Permutations::new().compose(perm, sigma)
}

/// Result of a conversion that may have lost precision
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the value regardless of whether it's exact
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}

/// Decides whether an index vector is a permutation of `0..N`.
///
/// [Permutations][crate::Permutations] only trusts its inputs after this check
/// passes, so the permutation algebra can be tested with any checker.
pub trait PermutationCheck {
    fn is_valid(&self, perm: &[usize]) -> bool;
}

impl<F: Fn(&[usize]) -> bool> PermutationCheck for F {
    #[inline]
    fn is_valid(&self, perm: &[usize]) -> bool {
        self(perm)
    }
}

//! Property-based tests using proptest.
//!
//! Covers: continued fraction round trips, gcd / lcm identities,
//! permutation inversion and composition.

use num_ntheory::perm::identity;
use num_ntheory::{
    compose, eval_cont_frac, from_rational, gcd, gcd_all, invert, lcm, lcm_all, to_cont_frac,
    to_rational, Approximation, DEFAULT_CUTOFF,
};
use num_rational::Ratio;
use proptest::prelude::*;

/// A random permutation of `0..n` for `n` in `0..max`
fn permutation(max: usize) -> impl Strategy<Value = Vec<usize>> {
    (0..max).prop_flat_map(|n| Just(identity(n)).prop_shuffle())
}

// ── Continued Fractions ──────────────────────────────────────────────

proptest! {
    /// p/q survives expansion and evaluation, for any term count at least
    /// as long as the expansion itself.
    #[test]
    fn cont_frac_round_trip(p in -1000i64..1000, q in 1i64..1000, extra in 0usize..8) {
        let x = p as f64 / q as f64;
        let cf = to_cont_frac(x, 64, DEFAULT_CUTOFF).unwrap();
        prop_assert!(!cf.is_empty() && cf.len() <= 64);

        let n = cf.len() + extra;
        let cf = to_cont_frac(x, n, DEFAULT_CUTOFF).unwrap();
        let y: f64 = eval_cont_frac(&cf).unwrap();
        prop_assert!((x - y).abs() <= 1e-9 * x.abs().max(1.0), "{} != {} ({:?})", x, y, cf);
    }

    /// The exact expansion of p/q converts back to p/q.
    #[test]
    fn rational_round_trip(p in -100_000i64..100_000, q in 1i64..100_000) {
        let r = Ratio::new(p, q);
        let cf = from_rational(r);
        prop_assert!(cf[1..].iter().all(|&a| a > 0));
        prop_assert_eq!(to_rational(&cf).unwrap(), Approximation::Exact(r));
    }

    /// The returned length never exceeds the requested term count.
    #[test]
    fn cont_frac_length_bound(x in -1e6f64..1e6, n in 1usize..32) {
        let cf = to_cont_frac(x, n, DEFAULT_CUTOFF).unwrap();
        prop_assert!(!cf.is_empty() && cf.len() <= n);
        prop_assert_eq!(cf[0], x.floor() as i64);
    }
}

// ── GCD / LCM ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn gcd_symmetric(m in any::<u32>(), n in any::<u32>()) {
        prop_assert_eq!(gcd(m, n), gcd(n, m));
    }

    #[test]
    fn gcd_identities(m in any::<u64>()) {
        prop_assert_eq!(gcd(0, m), m);
        prop_assert_eq!(gcd(m, 0), m);
        prop_assert_eq!(gcd(m, m), m);
    }

    /// gcd divides both operands.
    #[test]
    fn gcd_divides(m in 1u64..1_000_000, n in 1u64..1_000_000) {
        let g = gcd(m, n);
        prop_assert_eq!(m % g, 0);
        prop_assert_eq!(n % g, 0);
        prop_assert_eq!(gcd(m / g, n / g), 1);
    }

    /// lcm(m, n) * gcd(m, n) == m * n
    #[test]
    fn lcm_gcd_product(m in 1u64..1_000_000, n in 1u64..1_000_000) {
        prop_assert_eq!(lcm(m, n).unwrap() * gcd(m, n), m * n);
    }

    #[test]
    fn single_element_lists(a in any::<u32>()) {
        prop_assert_eq!(gcd_all(&[a]).unwrap(), a);
        prop_assert_eq!(lcm_all(&[a]).unwrap(), a);
    }

    /// Folding over a list agrees with the pairwise functions.
    #[test]
    fn list_fold_matches_pairwise(ns in prop::collection::vec(1u64..1000, 2..6)) {
        let g = ns[1..].iter().fold(ns[0], |acc, &v| gcd(acc, v));
        prop_assert_eq!(gcd_all(&ns).unwrap(), g);

        let l = ns[1..].iter().fold(ns[0], |acc, &v| lcm(acc, v).unwrap());
        prop_assert_eq!(lcm_all(&ns).unwrap(), l);
        prop_assert!(ns.iter().all(|&v| l % v == 0));
    }
}

// ── Permutations ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn invert_involution(p in permutation(32)) {
        prop_assert_eq!(invert(&invert(&p).unwrap()).unwrap(), p);
    }

    #[test]
    fn compose_with_inverse(p in permutation(32)) {
        let inv = invert(&p).unwrap();
        prop_assert_eq!(compose(&p, &inv).unwrap(), identity(p.len()));
        prop_assert_eq!(compose(&inv, &p).unwrap(), identity(p.len()));
    }

    /// (p ∘ s)(i) == p(s(i))
    #[test]
    fn compose_applies_sigma_first(
        (p, s) in (0usize..16).prop_flat_map(|n| {
            (Just(identity(n)).prop_shuffle(), Just(identity(n)).prop_shuffle())
        })
    ) {
        let c = compose(&p, &s).unwrap();
        for i in 0..p.len() {
            prop_assert_eq!(c[i], p[s[i]]);
        }
    }
}

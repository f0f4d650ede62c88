//! Binomial probability mass function.
//!
//! The lattice pricers weight each terminal node by the probability of
//! reaching it, which is the mass of a Binomial(n, p) distribution at the
//! node's up-move count. Binomial coefficients overflow `f64` beyond a few
//! hundred trials, so the mass is evaluated in log space:
//!
//! ```text
//! ln P(X = k) = ln n! - ln k! - ln (n-k)! + k·ln p + (n-k)·ln(1-p)
//! ```
//!
//! The log-factorials are accumulated once per table, so a full table of
//! `n + 1` masses costs O(n).

use num_traits::Float;

/// Cumulative log-factorials `ln 0!, ln 1!, ..., ln n!`.
fn log_factorials<T: Float>(n: usize) -> Vec<T> {
    let mut table = Vec::with_capacity(n + 1);
    let mut acc = T::zero();
    table.push(acc);
    for k in 1..=n {
        acc = acc + T::from(k).unwrap().ln();
        table.push(acc);
    }
    table
}

/// `count · ln_x`, treating `0 · ln 0` as zero so that p ∈ {0, 1} gives a
/// point mass instead of NaN.
#[inline]
fn weighted_log<T: Float>(count: usize, ln_x: T) -> T {
    if count == 0 {
        T::zero()
    } else {
        T::from(count).unwrap() * ln_x
    }
}

/// Probability that a Binomial(`n`, `p`) variable equals `k`.
///
/// Returns zero for `k > n`. A probability outside `[0, 1]` is not
/// rejected; it yields NaN.
///
/// # Examples
/// ```
/// use pricer_core::math::binomial::binomial_pmf;
///
/// let p = binomial_pmf(0, 4, 0.5_f64);
/// assert!((p - 0.0625).abs() < 1e-12);
/// ```
pub fn binomial_pmf<T: Float>(k: usize, n: usize, p: T) -> T {
    if k > n {
        return T::zero();
    }
    let log_fact = log_factorials::<T>(n);
    let ln_choose = log_fact[n] - log_fact[k] - log_fact[n - k];
    (ln_choose + weighted_log(k, p.ln()) + weighted_log(n - k, (T::one() - p).ln())).exp()
}

/// Full mass table `[P(X = 0), ..., P(X = n)]` for X ~ Binomial(`n`, `p`).
///
/// # Examples
/// ```
/// use pricer_core::math::binomial::binomial_pmf_table;
///
/// let table = binomial_pmf_table(3, 0.5_f64);
/// assert_eq!(table.len(), 4);
/// assert!((table[1] - 0.375).abs() < 1e-12);
/// ```
pub fn binomial_pmf_table<T: Float>(n: usize, p: T) -> Vec<T> {
    let log_fact = log_factorials::<T>(n);
    let ln_p = p.ln();
    let ln_q = (T::one() - p).ln();

    (0..=n)
        .map(|k| {
            let ln_choose = log_fact[n] - log_fact[k] - log_fact[n - k];
            (ln_choose + weighted_log(k, ln_p) + weighted_log(n - k, ln_q)).exp()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pmf_small_exact_values() {
        // Binomial(3, 0.4): 0.216, 0.432, 0.288, 0.064
        let expected = [0.216, 0.432, 0.288, 0.064];
        for (k, &e) in expected.iter().enumerate() {
            assert_relative_eq!(binomial_pmf(k, 3, 0.4_f64), e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_table_matches_pointwise() {
        let table = binomial_pmf_table(25, 0.37_f64);
        for (k, &mass) in table.iter().enumerate() {
            assert_relative_eq!(mass, binomial_pmf(k, 25, 0.37), epsilon = 1e-14);
        }
    }

    #[test]
    fn test_table_sums_to_one_large_n() {
        // C(2000, 1000) overflows f64; log space must not.
        let table = binomial_pmf_table(2000, 0.4977_f64);
        assert!(table.iter().all(|m| m.is_finite()));
        let total: f64 = table.iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_table_mean() {
        let n = 200;
        let p = 0.3_f64;
        let table = binomial_pmf_table(n, p);
        let mean: f64 = table.iter().enumerate().map(|(k, m)| k as f64 * m).sum();
        assert_relative_eq!(mean, n as f64 * p, epsilon = 1e-9);
    }

    #[test]
    fn test_symmetry_at_half() {
        let table = binomial_pmf_table(10, 0.5_f64);
        for k in 0..=10 {
            assert_relative_eq!(table[k], table[10 - k], epsilon = 1e-14);
        }
    }

    #[test]
    fn test_degenerate_probabilities() {
        let zero = binomial_pmf_table(5, 0.0_f64);
        assert_eq!(zero[0], 1.0);
        assert!(zero[1..].iter().all(|&m| m == 0.0));

        let one = binomial_pmf_table(5, 1.0_f64);
        assert_eq!(one[5], 1.0);
        assert!(one[..5].iter().all(|&m| m == 0.0));
    }

    #[test]
    fn test_k_above_n_is_zero() {
        assert_eq!(binomial_pmf(4, 3, 0.5_f64), 0.0);
    }

    #[test]
    fn test_invalid_probability_is_nan() {
        assert!(binomial_pmf(1, 3, 1.5_f64).is_nan());
    }

    #[test]
    fn test_single_trial() {
        let table = binomial_pmf_table(1, 0.25_f64);
        assert_relative_eq!(table[0], 0.75, epsilon = 1e-15);
        assert_relative_eq!(table[1], 0.25, epsilon = 1e-15);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_table_is_a_distribution(n in 1usize..600, p in 0.01f64..0.99) {
                let table = binomial_pmf_table(n, p);
                prop_assert_eq!(table.len(), n + 1);
                prop_assert!(table.iter().all(|&m| (0.0..=1.0).contains(&m)));
                let total: f64 = table.iter().sum();
                prop_assert!((total - 1.0).abs() < 1e-9);
            }
        }
    }
}

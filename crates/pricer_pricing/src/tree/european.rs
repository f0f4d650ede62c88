//! European binomial pricer.
//!
//! A European option cannot be exercised early, so its value is the
//! discounted expectation of the terminal payoff under the lattice's
//! risk-neutral measure. Terminal node `i` (with `i` down moves) is reached
//! with probability `P(X = N - i)` for X ~ Binomial(N, p), which gives an O(N)
//! sum instead of a backward induction.

use num_traits::Float;
use pricer_core::math::binomial_pmf_table;
use pricer_models::instruments::{OptionParams, PayoffType};
use pricer_models::models::BinomialLattice;

/// Prices a European option on an `steps`-step binomial lattice.
///
/// ```text
/// V = e^(-rT) · Σ_i payoff(S·u^(N-i)·d^i, K) · P(N - i; N, p)
/// ```
///
/// Inputs are not validated. Zero steps return NaN; zero volatility or zero
/// expiry give a NaN or infinite result.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionParams, PayoffType};
/// use pricer_pricing::tree::european_binomial_pricer;
///
/// let params = OptionParams::new(41.0_f64, 40.0, 1.0, 0.08, 0.3);
/// let price = european_binomial_pricer(&params, 3, PayoffType::Call);
/// assert!((price - 7.074).abs() < 1e-2);
/// ```
pub fn european_binomial_pricer<T: Float>(
    params: &OptionParams<T>,
    steps: usize,
    payoff: PayoffType,
) -> T {
    if steps == 0 {
        return T::nan();
    }
    let lattice = BinomialLattice::from_params(params, steps);
    let masses = binomial_pmf_table(steps, lattice.prob_up());
    let strike = params.strike();

    let expected = (0..=steps).fold(T::zero(), |acc, down_moves| {
        let terminal = lattice.terminal_spot(params.spot(), down_moves);
        acc + payoff.evaluate(terminal, strike) * masses[steps - down_moves]
    });

    (-params.rate() * params.expiry()).exp() * expected
}

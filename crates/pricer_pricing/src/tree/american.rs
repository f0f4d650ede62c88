//! American binomial pricer.
//!
//! Backward induction over the full lattice with an early-exercise check at
//! every node. Two buffers of length N + 1 hold the node spots and option
//! values; level `k` occupies the first `k + 1` slots and is overwritten in
//! place as the induction moves towards the root.

use num_traits::Float;
use pricer_models::instruments::{OptionParams, PayoffType};
use pricer_models::models::BinomialLattice;

/// Prices an American option on an `steps`-step binomial lattice.
///
/// At level `k` node `j` takes the discounted continuation value
/// `dpu·C[j] + dpd·C[j+1]`, rolls its spot back with `S[j] /= u`, and keeps
/// the larger of continuation and immediate exercise.
///
/// Inputs are not validated. Zero steps return NaN; zero volatility or zero
/// expiry give a NaN or infinite result.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionParams, PayoffType};
/// use pricer_pricing::tree::american_binomial_pricer;
///
/// let params = OptionParams::new(41.0_f64, 40.0, 1.0, 0.08, 0.3);
/// let put = american_binomial_pricer(&params, 3, PayoffType::Put);
/// assert!((put - 3.293).abs() < 1e-3);
/// ```
pub fn american_binomial_pricer<T: Float>(
    params: &OptionParams<T>,
    steps: usize,
    payoff: PayoffType,
) -> T {
    if steps == 0 {
        return T::nan();
    }
    let lattice = BinomialLattice::from_params(params, steps);
    let strike = params.strike();

    let discount = lattice.discount_factor(params.rate());
    let dpu = discount * lattice.prob_up();
    let dpd = discount * lattice.prob_down();
    let up = lattice.up();

    let mut spots: Vec<T> = (0..=steps)
        .map(|down_moves| lattice.terminal_spot(params.spot(), down_moves))
        .collect();
    let mut values: Vec<T> = spots.iter().map(|&s| payoff.evaluate(s, strike)).collect();

    for level in (0..steps).rev() {
        for j in 0..=level {
            let continuation = dpu * values[j] + dpd * values[j + 1];
            spots[j] = spots[j] / up;
            values[j] = continuation.max(payoff.evaluate(spots[j], strike));
        }
    }

    values[0]
}

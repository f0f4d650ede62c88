//! Binomial path simulation.
//!
//! Walks the lattice forward from spot, choosing an up or down move at each
//! step from one uniform draw. The draw `z` selects the up move when
//! `z ≥ p`, so an up move occurs with probability `1 - p`.

use pricer_models::instruments::OptionParams;
use pricer_models::models::BinomialLattice;

use crate::rng::PricerRng;

/// Market inputs for path simulation.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::paths::PathParams;
///
/// let params = PathParams::new(100.0, 0.05, 0.2, 1.0).with_dividend(0.02);
/// assert_eq!(params.dividend, 0.02);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Continuous dividend yield (q) - annualised.
    pub dividend: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Horizon (T) - in years.
    pub expiry: f64,
}

impl PathParams {
    /// Creates path parameters with zero dividend yield.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, expiry: f64) -> Self {
        Self {
            spot,
            rate,
            dividend: 0.0,
            volatility,
            expiry,
        }
    }

    /// Sets the dividend yield.
    #[inline]
    pub fn with_dividend(mut self, dividend: f64) -> Self {
        self.dividend = dividend;
        self
    }
}

impl From<&OptionParams<f64>> for PathParams {
    fn from(params: &OptionParams<f64>) -> Self {
        Self::new(
            params.spot(),
            params.rate(),
            params.volatility(),
            params.expiry(),
        )
        .with_dividend(params.dividend())
    }
}

/// Simulates one binomial path of `steps` points.
///
/// `path[0]` is the spot and each later point is the previous one times
/// `u` or `d` of a `steps`-step lattice over the horizon. `steps == 0`
/// yields an empty path; no inputs are validated.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::paths::{binomial_path, PathParams};
/// use pricer_pricing::rng::PricerRng;
///
/// let params = PathParams::new(100.0, 0.05, 0.2, 1.0);
/// let mut rng = PricerRng::from_seed(42);
/// let path = binomial_path(&params, 12, &mut rng);
/// assert_eq!(path.len(), 12);
/// assert_eq!(path[0], 100.0);
/// ```
pub fn binomial_path(params: &PathParams, steps: usize, rng: &mut PricerRng) -> Vec<f64> {
    if steps == 0 {
        return Vec::new();
    }

    let lattice = BinomialLattice::new(
        params.rate,
        params.dividend,
        params.volatility,
        params.expiry,
        steps,
    );
    let threshold = lattice.prob_up();

    // One draw per move.
    let mut draws = vec![0.0; steps - 1];
    rng.fill_uniform(&mut draws);

    let mut path = Vec::with_capacity(steps);
    let mut current = params.spot;
    path.push(current);

    for z in draws {
        current = if z >= threshold {
            current * lattice.up()
        } else {
            current * lattice.down()
        };
        path.push(current);
    }

    path
}

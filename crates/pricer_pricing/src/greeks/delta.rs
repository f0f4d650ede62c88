//! Finite-difference delta estimators on the binomial lattice.
//!
//! Both estimators take the slope of the payoff between an up-shifted and a
//! down-shifted spot:
//!
//! ```text
//! Δ ≈ (payoff(S⁺, K) - payoff(S⁻, K)) / (S⁺ - S⁻)
//! ```
//!
//! The simple estimator shifts by one lattice step (S⁺ = u·S, S⁻ = d·S); the
//! binomial estimator shifts by two (S⁺ = u²·S, S⁻ = d²·S), i.e. the outer
//! nodes of the second level, which are centred on the forward.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use pricer_models::instruments::{InstrumentError, OptionParams, PayoffType};
use pricer_models::models::BinomialLattice;

#[inline]
fn payoff_slope<T: Float>(payoff: PayoffType, strike: T, spot_up: T, spot_down: T) -> T {
    (payoff.evaluate(spot_up, strike) - payoff.evaluate(spot_down, strike)) / (spot_up - spot_down)
}

/// One-step finite-difference delta using spots u·S and d·S.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionParams, PayoffType};
/// use pricer_pricing::greeks::simple_delta;
///
/// let params = OptionParams::new(41.0_f64, 40.0, 1.0, 0.08, 0.3);
/// let delta = simple_delta(&params, 3, PayoffType::Call);
/// assert!((delta - 0.687).abs() < 1e-3);
/// ```
pub fn simple_delta<T: Float>(params: &OptionParams<T>, steps: usize, payoff: PayoffType) -> T {
    let lattice = BinomialLattice::from_params(params, steps);
    let spot = params.spot();
    payoff_slope(
        payoff,
        params.strike(),
        lattice.up() * spot,
        lattice.down() * spot,
    )
}

/// Two-step finite-difference delta using spots u²·S and d²·S.
pub fn binomial_delta<T: Float>(params: &OptionParams<T>, steps: usize, payoff: PayoffType) -> T {
    let lattice = BinomialLattice::from_params(params, steps);
    let spot = params.spot();
    let up = lattice.up();
    let down = lattice.down();
    payoff_slope(
        payoff,
        params.strike(),
        up * up * spot,
        down * down * spot,
    )
}

/// Lattice delta estimator selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeltaMethod {
    /// One-step shift, see [`simple_delta`].
    #[default]
    Simple,
    /// Two-step shift, see [`binomial_delta`].
    Binomial,
}

impl DeltaMethod {
    /// Evaluates the selected estimator.
    #[inline]
    pub fn estimate<T: Float>(&self, params: &OptionParams<T>, steps: usize, payoff: PayoffType) -> T {
        match self {
            DeltaMethod::Simple => simple_delta(params, steps, payoff),
            DeltaMethod::Binomial => binomial_delta(params, steps, payoff),
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeltaMethod::Simple => "simple",
            DeltaMethod::Binomial => "binomial",
        }
    }
}

impl fmt::Display for DeltaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeltaMethod {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(DeltaMethod::Simple),
            "binomial" => Ok(DeltaMethod::Binomial),
            other => Err(InstrumentError::InvalidParameter {
                message: format!("unknown delta method '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn textbook() -> OptionParams<f64> {
        OptionParams::new(41.0, 40.0, 1.0, 0.08, 0.3)
    }

    #[test]
    fn test_simple_delta_textbook() {
        assert_relative_eq!(simple_delta(&textbook(), 3, PayoffType::Call), 0.686992, epsilon = 1e-5);
        assert_relative_eq!(simple_delta(&textbook(), 3, PayoffType::Put), -0.313008, epsilon = 1e-5);
    }

    #[test]
    fn test_binomial_delta_textbook() {
        assert_relative_eq!(binomial_delta(&textbook(), 3, PayoffType::Call), 0.691949, epsilon = 1e-5);
    }

    #[test]
    fn test_fine_lattice_at_the_money() {
        let params = OptionParams::new(100.0, 100.0, 1.0, 0.06, 0.2);
        assert_relative_eq!(simple_delta(&params, 500, PayoffType::Call), 0.508944, epsilon = 1e-5);
        assert_relative_eq!(binomial_delta(&params, 500, PayoffType::Call), 0.511179, epsilon = 1e-5);
    }

    #[test]
    fn test_deep_in_and_out_of_the_money() {
        let itm = OptionParams::new(200.0, 100.0, 1.0, 0.05, 0.2);
        assert_relative_eq!(simple_delta(&itm, 50, PayoffType::Call), 1.0, epsilon = 1e-12);
        assert_relative_eq!(simple_delta(&itm, 50, PayoffType::Put), 0.0, epsilon = 1e-12);

        let otm = OptionParams::new(50.0, 100.0, 1.0, 0.05, 0.2);
        assert_relative_eq!(binomial_delta(&otm, 50, PayoffType::Call), 0.0, epsilon = 1e-12);
        assert_relative_eq!(binomial_delta(&otm, 50, PayoffType::Put), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_method_dispatch() {
        let params = textbook();
        assert_eq!(
            DeltaMethod::Simple.estimate(&params, 3, PayoffType::Call),
            simple_delta(&params, 3, PayoffType::Call)
        );
        assert_eq!(
            DeltaMethod::Binomial.estimate(&params, 3, PayoffType::Put),
            binomial_delta(&params, 3, PayoffType::Put)
        );
    }

    #[test]
    fn test_method_parse_and_display() {
        assert_eq!("Simple".parse::<DeltaMethod>().unwrap(), DeltaMethod::Simple);
        assert_eq!(" binomial ".parse::<DeltaMethod>().unwrap(), DeltaMethod::Binomial);
        assert!("central".parse::<DeltaMethod>().is_err());
        assert_eq!(DeltaMethod::Binomial.to_string(), "binomial");
        assert_eq!(DeltaMethod::default(), DeltaMethod::Simple);
    }

    #[test]
    fn test_zero_volatility_is_nan() {
        let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.0);
        assert!(simple_delta(&params, 10, PayoffType::Call).is_nan());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_call_minus_put_is_one(
                spot in 50.0f64..150.0,
                strike in 50.0f64..150.0,
                vol in 0.05f64..0.8,
                steps in 1usize..1000,
            ) {
                let params = OptionParams::new(spot, strike, 1.0, 0.04, vol).with_dividend(0.01);
                for method in [DeltaMethod::Simple, DeltaMethod::Binomial] {
                    let call = method.estimate(&params, steps, PayoffType::Call);
                    let put = method.estimate(&params, steps, PayoffType::Put);
                    prop_assert!(call > -1e-12 && call < 1.0 + 1e-12);
                    prop_assert!(put > -1.0 - 1e-12 && put < 1e-12);
                    prop_assert!((call - put - 1.0).abs() < 1e-9);
                }
            }
        }
    }
}

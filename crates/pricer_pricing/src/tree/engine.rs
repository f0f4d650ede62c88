//! Validated entry point for the lattice pricers.

use pricer_models::instruments::{ExerciseStyle, OptionParams, VanillaOption};
use pricer_models::models::BinomialLattice;
use tracing::{debug, warn};

use super::american::american_binomial_pricer;
use super::error::TreeError;
use super::european::european_binomial_pricer;
use crate::greeks::DeltaMethod;

/// Default number of lattice steps.
pub const DEFAULT_STEPS: usize = 500;

/// Binomial lattice engine.
///
/// Checks contract parameters and lattice geometry before handing off to
/// [`european_binomial_pricer`] or [`american_binomial_pricer`] according to
/// the option's exercise style.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{ExerciseStyle, OptionParams, PayoffType, VanillaOption};
/// use pricer_pricing::tree::BinomialTree;
///
/// let params = OptionParams::new(41.0, 40.0, 1.0, 0.08, 0.3);
/// let option = VanillaOption::new(params, PayoffType::Put, ExerciseStyle::American);
///
/// let price = BinomialTree::new(3).price(&option).unwrap();
/// assert!((price - 3.293).abs() < 1e-3);
///
/// assert!(BinomialTree::new(0).price(&option).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTree {
    steps: usize,
}

impl Default for BinomialTree {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS)
    }
}

impl BinomialTree {
    /// Creates an engine with `steps` lattice steps. Zero is rejected at pricing time.
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }

    /// Number of lattice steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Validates `params` and builds the lattice they imply.
    pub fn lattice(&self, params: &OptionParams<f64>) -> Result<BinomialLattice<f64>, TreeError> {
        if let Err(err) = params.validate() {
            warn!(error = %err, "rejected contract parameters");
            return Err(err.into());
        }

        BinomialLattice::try_new(
            params.rate(),
            params.dividend(),
            params.volatility(),
            params.expiry(),
            self.steps,
        )
        .map_err(|err| {
            warn!(error = %err, steps = self.steps, "rejected lattice");
            TreeError::from(err)
        })
    }

    /// Prices the option by exercise style.
    ///
    /// # Errors
    /// - `TreeError::Instrument` for invalid contract parameters
    /// - `TreeError::Lattice` for zero steps or a degenerate lattice
    /// - `TreeError::NonFinite` if the result is NaN or infinite
    pub fn price(&self, option: &VanillaOption<f64>) -> Result<f64, TreeError> {
        let params = option.params();
        let lattice = self.lattice(params)?;

        debug!(
            steps = self.steps,
            up = lattice.up(),
            down = lattice.down(),
            prob_up = lattice.prob_up(),
            payoff = %option.payoff_type(),
            style = %option.exercise_style(),
            "pricing on binomial lattice"
        );

        let price = match option.exercise_style() {
            ExerciseStyle::European => {
                european_binomial_pricer(params, self.steps, option.payoff_type())
            }
            ExerciseStyle::American => {
                american_binomial_pricer(params, self.steps, option.payoff_type())
            }
        };

        finite(price)
    }

    /// Finite-difference delta of the option's payoff on this lattice.
    ///
    /// The estimate depends only on the payoff, so the exercise style is ignored.
    pub fn delta(&self, option: &VanillaOption<f64>, method: DeltaMethod) -> Result<f64, TreeError> {
        let params = option.params();
        self.lattice(params)?;

        let delta = method.estimate(params, self.steps, option.payoff_type());
        debug!(steps = self.steps, method = %method, delta, "lattice delta");
        finite(delta)
    }
}

fn finite(value: f64) -> Result<f64, TreeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TreeError::NonFinite { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::instruments::{InstrumentError, PayoffType};
    use pricer_models::models::LatticeError;

    fn option(payoff: PayoffType, style: ExerciseStyle) -> VanillaOption<f64> {
        VanillaOption::new(OptionParams::new(41.0, 40.0, 1.0, 0.08, 0.3), payoff, style)
    }

    #[test]
    fn test_default_steps() {
        assert_eq!(BinomialTree::default().steps(), DEFAULT_STEPS);
    }

    #[test]
    fn test_dispatch_by_style() {
        let tree = BinomialTree::new(3);
        let european = tree
            .price(&option(PayoffType::Put, ExerciseStyle::European))
            .unwrap();
        let american = tree
            .price(&option(PayoffType::Put, ExerciseStyle::American))
            .unwrap();
        assert_relative_eq!(european, 2.998507, epsilon = 1e-5);
        assert_relative_eq!(american, 3.292948, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = BinomialTree::new(0)
            .price(&option(PayoffType::Call, ExerciseStyle::European))
            .unwrap_err();
        assert_eq!(err, TreeError::Lattice(LatticeError::ZeroSteps));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = OptionParams::new(41.0, 40.0, 1.0, 0.08, 0.0);
        let opt = VanillaOption::new(params, PayoffType::Call, ExerciseStyle::European);
        let err = BinomialTree::new(10).price(&opt).unwrap_err();
        assert!(matches!(
            err,
            TreeError::Instrument(InstrumentError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_overflowing_lattice_rejected_before_pricing() {
        let params = OptionParams::new(41.0, 40.0, 1.0, 0.0, 800.0);
        let opt = VanillaOption::new(params, PayoffType::Call, ExerciseStyle::American);
        let err = BinomialTree::new(1).price(&opt).unwrap_err();
        assert!(matches!(
            err,
            TreeError::Lattice(LatticeError::DegenerateLattice { .. })
        ));
    }

    #[test]
    fn test_negative_spot_rejected() {
        let params = OptionParams::new(-41.0, 40.0, 1.0, 0.08, 0.3);
        let opt = VanillaOption::new(params, PayoffType::Call, ExerciseStyle::American);
        assert!(BinomialTree::new(10).price(&opt).is_err());
    }

    #[test]
    fn test_delta_matches_free_function() {
        let tree = BinomialTree::new(3);
        let opt = option(PayoffType::Call, ExerciseStyle::American);
        assert_relative_eq!(
            tree.delta(&opt, DeltaMethod::Simple).unwrap(),
            0.686992,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            tree.delta(&opt, DeltaMethod::Binomial).unwrap(),
            0.691949,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_lattice_exposed() {
        let lattice = BinomialTree::new(3)
            .lattice(&OptionParams::new(41.0, 40.0, 1.0, 0.08, 0.3))
            .unwrap();
        assert_relative_eq!(lattice.prob_up(), 0.4568067, epsilon = 1e-6);
    }
}

//! Error types for the validated lattice engine.

use pricer_core::types::PricingError;
use pricer_models::instruments::InstrumentError;
use pricer_models::models::LatticeError;
use thiserror::Error;

/// Errors raised by [`BinomialTree`](super::BinomialTree).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TreeError {
    /// Contract parameters failed validation.
    #[error("Invalid contract: {0}")]
    Instrument(#[from] InstrumentError),

    /// Lattice could not be built for the parameters.
    #[error("Invalid lattice: {0}")]
    Lattice(#[from] LatticeError),

    /// The pricer returned NaN or infinity despite valid inputs.
    #[error("Non-finite result: {value}")]
    NonFinite {
        /// The offending value
        value: f64,
    },
}

impl From<TreeError> for PricingError {
    fn from(err: TreeError) -> Self {
        match err {
            TreeError::Instrument(inner) => inner.into(),
            TreeError::Lattice(inner) => inner.into(),
            TreeError::NonFinite { .. } => PricingError::NumericalInstability(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_wraps_inner() {
        let err = TreeError::from(LatticeError::ZeroSteps);
        assert_eq!(
            err.to_string(),
            "Invalid lattice: Lattice requires at least one step"
        );
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = TreeError::from(InstrumentError::InvalidSpot { spot: -1.0 }).into();
        assert!(matches!(err, PricingError::InvalidInput(_)));

        let err: PricingError = TreeError::NonFinite { value: f64::NAN }.into();
        assert!(matches!(err, PricingError::NumericalInstability(_)));
    }
}

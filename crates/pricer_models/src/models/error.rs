//! Error types for lattice construction.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Lattice construction errors.
///
/// # Examples
/// ```
/// use pricer_models::models::LatticeError;
///
/// let err = LatticeError::ZeroSteps;
/// assert_eq!(format!("{}", err), "Lattice requires at least one step");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// The lattice has no time steps.
    #[error("Lattice requires at least one step")]
    ZeroSteps,

    /// Up and down factors coincide or are not finite, so the risk-neutral
    /// probability is undefined.
    #[error("Degenerate lattice: up factor {up}, down factor {down}")]
    DegenerateLattice {
        /// Up factor
        up: f64,
        /// Down factor
        down: f64,
    },

    /// Risk-neutral up probability not strictly inside (0, 1).
    #[error("Up probability {probability} is outside (0, 1)")]
    ProbabilityOutOfRange {
        /// The offending probability
        probability: f64,
    },
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::ZeroSteps => PricingError::InvalidInput(err.to_string()),
            _ => PricingError::NumericalInstability(err.to_string()),
        }
    }
}

//! Vanilla option definitions.
//!
//! This module provides the vanilla option structure combining
//! contract parameters, payoff type, and exercise style.

use num_traits::Float;

use super::exercise::ExerciseStyle;
use super::params::OptionParams;
use super::payoff::PayoffType;

/// Vanilla option instrument.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, OptionParams, PayoffType, VanillaOption};
///
/// let params = OptionParams::new(100.0_f64, 95.0, 0.5, 0.05, 0.25);
/// let option = VanillaOption::new(params, PayoffType::Put, ExerciseStyle::American);
///
/// assert_eq!(option.payoff_type().evaluate(90.0, option.strike()), 5.0);
/// assert_eq!(option.expiry(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VanillaOption<T: Float> {
    params: OptionParams<T>,
    payoff_type: PayoffType,
    exercise_style: ExerciseStyle,
}

impl<T: Float> VanillaOption<T> {
    /// Creates a new vanilla option.
    pub fn new(params: OptionParams<T>, payoff_type: PayoffType, exercise_style: ExerciseStyle) -> Self {
        Self {
            params,
            payoff_type,
            exercise_style,
        }
    }

    /// Returns a reference to the contract parameters.
    #[inline]
    pub fn params(&self) -> &OptionParams<T> {
        &self.params
    }

    /// Returns the payoff type.
    #[inline]
    pub fn payoff_type(&self) -> PayoffType {
        self.payoff_type
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise_style(&self) -> ExerciseStyle {
        self.exercise_style
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.params.strike()
    }

    /// Returns the time to expiry.
    #[inline]
    pub fn expiry(&self) -> T {
        self.params.expiry()
    }
}

//! Contract and market parameters for vanilla option pricing.

use num_traits::Float;

use super::error::InstrumentError;

/// Scalar inputs shared by every pricer in the crate.
///
/// Construction never fails: the reference formulas accept any input and let
/// invalid values surface as NaN or infinity. Call [`OptionParams::validate`]
/// when a typed error is preferable.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionParams;
///
/// let params = OptionParams::new(41.0_f64, 40.0, 1.0, 0.08, 0.3);
/// assert_eq!(params.dividend(), 0.0);
/// assert!(params.validate().is_ok());
///
/// let with_div = params.with_dividend(0.02);
/// assert_eq!(with_div.dividend(), 0.02);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParams<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    dividend: T,
    volatility: T,
}

impl<T: Float> OptionParams<T> {
    /// Creates parameters with zero dividend yield.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (S)
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiry in years (T)
    /// * `rate` - Continuously compounded risk-free rate (r)
    /// * `volatility` - Annualised volatility (σ)
    pub fn new(spot: T, strike: T, expiry: T, rate: T, volatility: T) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            dividend: T::zero(),
            volatility,
        }
    }

    /// Returns a copy with the continuous dividend yield set.
    #[inline]
    pub fn with_dividend(mut self, dividend: T) -> Self {
        self.dividend = dividend;
        self
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend(&self) -> T {
        self.dividend
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Checks the positivity constraints on spot, strike, expiry and volatility.
    ///
    /// Rate and dividend yield may take any finite value, including negative.
    ///
    /// # Errors
    /// The first violated constraint, in the order spot, strike, expiry,
    /// volatility, then rate/dividend finiteness.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{InstrumentError, OptionParams};
    ///
    /// let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.0);
    /// assert_eq!(
    ///     params.validate(),
    ///     Err(InstrumentError::InvalidVolatility { volatility: 0.0 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), InstrumentError> {
        let zero = T::zero();
        let as_f64 = |x: T| x.to_f64().unwrap_or(f64::NAN);

        if !(self.spot > zero && self.spot.is_finite()) {
            return Err(InstrumentError::InvalidSpot {
                spot: as_f64(self.spot),
            });
        }
        if !(self.strike > zero && self.strike.is_finite()) {
            return Err(InstrumentError::InvalidStrike {
                strike: as_f64(self.strike),
            });
        }
        if !(self.expiry > zero && self.expiry.is_finite()) {
            return Err(InstrumentError::InvalidExpiry {
                expiry: as_f64(self.expiry),
            });
        }
        if !(self.volatility > zero && self.volatility.is_finite()) {
            return Err(InstrumentError::InvalidVolatility {
                volatility: as_f64(self.volatility),
            });
        }
        if !self.rate.is_finite() || !self.dividend.is_finite() {
            return Err(InstrumentError::InvalidParameter {
                message: "rate and dividend yield must be finite".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> OptionParams<f64> {
        OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2)
    }

    #[test]
    fn test_accessors() {
        let params = base().with_dividend(0.03);
        assert_eq!(params.spot(), 100.0);
        assert_eq!(params.strike(), 100.0);
        assert_eq!(params.expiry(), 1.0);
        assert_eq!(params.rate(), 0.05);
        assert_eq!(params.dividend(), 0.03);
        assert_eq!(params.volatility(), 0.2);
    }

    #[test]
    fn test_validate_ok_with_negative_rate() {
        let params = OptionParams::new(100.0_f64, 100.0, 1.0, -0.01, 0.2).with_dividend(-0.02);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_field() {
        assert!(matches!(
            OptionParams::new(0.0_f64, 100.0, 1.0, 0.05, 0.2).validate(),
            Err(InstrumentError::InvalidSpot { .. })
        ));
        assert!(matches!(
            OptionParams::new(100.0_f64, -1.0, 1.0, 0.05, 0.2).validate(),
            Err(InstrumentError::InvalidStrike { strike }) if strike == -1.0
        ));
        assert!(matches!(
            OptionParams::new(100.0_f64, 100.0, 0.0, 0.05, 0.2).validate(),
            Err(InstrumentError::InvalidExpiry { .. })
        ));
        assert!(matches!(
            OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, -0.2).validate(),
            Err(InstrumentError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            OptionParams::new(100.0_f64, 100.0, 1.0, f64::NAN, 0.2).validate(),
            Err(InstrumentError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_spot() {
        assert!(OptionParams::new(f64::NAN, 100.0, 1.0, 0.05, 0.2).validate().is_err());
    }
}

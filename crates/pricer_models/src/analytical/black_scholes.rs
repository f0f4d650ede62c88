//! Black-Scholes pricing model for European options.
//!
//! Closed-form prices and Greeks under lognormal dynamics with a continuous
//! dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Two entry points
//!
//! The free functions [`black_scholes_call`], [`black_scholes_put`] and
//! [`black_scholes_call_delta`] evaluate the formulas as written: with
//! `expiry = 0` or `volatility = 0` they divide by zero and return NaN or
//! infinity. The [`BlackScholes`] struct validates spot and volatility at
//! construction and returns intrinsic values at expiry.

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::{OptionParams, PayoffType, VanillaOption};

#[inline]
fn d1_raw<T: Float>(spot: T, strike: T, expiry: T, rate: T, dividend: T, volatility: T) -> T {
    let half = T::from(0.5).unwrap();
    let drift = (rate - dividend + half * volatility * volatility) * expiry;
    ((spot / strike).ln() + drift) / (volatility * expiry.sqrt())
}

/// Black-Scholes price of a European call.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes_call;
/// use pricer_models::instruments::OptionParams;
///
/// let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2);
/// assert!((black_scholes_call(&params) - 10.4506).abs() < 1e-3);
/// ```
pub fn black_scholes_call<T: Float>(params: &OptionParams<T>) -> T {
    let d1 = d1_raw(
        params.spot(),
        params.strike(),
        params.expiry(),
        params.rate(),
        params.dividend(),
        params.volatility(),
    );
    let d2 = d1 - params.volatility() * params.expiry().sqrt();
    let carry = (-params.dividend() * params.expiry()).exp();
    let discount = (-params.rate() * params.expiry()).exp();

    params.spot() * carry * norm_cdf(d1) - params.strike() * discount * norm_cdf(d2)
}

/// Black-Scholes price of a European put.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes_put;
/// use pricer_models::instruments::OptionParams;
///
/// let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2);
/// assert!((black_scholes_put(&params) - 5.5735).abs() < 1e-3);
/// ```
pub fn black_scholes_put<T: Float>(params: &OptionParams<T>) -> T {
    let d1 = d1_raw(
        params.spot(),
        params.strike(),
        params.expiry(),
        params.rate(),
        params.dividend(),
        params.volatility(),
    );
    let d2 = d1 - params.volatility() * params.expiry().sqrt();
    let carry = (-params.dividend() * params.expiry()).exp();
    let discount = (-params.rate() * params.expiry()).exp();

    params.strike() * discount * norm_cdf(-d2) - params.spot() * carry * norm_cdf(-d1)
}

/// Analytic call delta e^(-qτ)·N(d₁), with τ the params' expiry.
///
/// Lies in (0, e^(-qτ)) for finite, valid inputs.
pub fn black_scholes_call_delta<T: Float>(params: &OptionParams<T>) -> T {
    let tau = params.expiry();
    let d1 = d1_raw(
        params.spot(),
        params.strike(),
        tau,
        params.rate(),
        params.dividend(),
        params.volatility(),
    );
    (-params.dividend() * tau).exp() * norm_cdf(d1)
}

/// Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Continuous dividend yield (q)
    dividend: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model with zero dividend yield.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            dividend: zero,
            volatility,
        })
    }

    /// Builds the model from contract parameters, carrying their dividend yield.
    pub fn from_params(params: &OptionParams<T>) -> Result<Self, AnalyticalError> {
        Ok(Self::new(params.spot(), params.rate(), params.volatility())?
            .with_dividend(params.dividend()))
    }

    /// Returns a copy with the continuous dividend yield set.
    pub fn with_dividend(mut self, dividend: T) -> Self {
        self.dividend = dividend;
        self
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend(&self) -> T {
        self.dividend
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    #[inline]
    fn expired(expiry: T) -> bool {
        expiry <= T::from(1e-10).unwrap()
    }

    /// Computes the d1 term.
    ///
    /// Returns ±100 for an expired option depending on moneyness, zero at the money.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        if Self::expired(expiry) {
            let large = T::from(100.0).unwrap();
            return if self.spot > strike {
                large
            } else if self.spot < strike {
                -large
            } else {
                T::zero()
            };
        }

        d1_raw(
            self.spot,
            strike,
            expiry,
            self.rate,
            self.dividend,
            self.volatility,
        )
    }

    /// Computes the d2 term: d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        if Self::expired(expiry) {
            return self.d1(strike, expiry);
        }
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call price; intrinsic value at expiry.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if Self::expired(expiry) {
            return PayoffType::Call.evaluate(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let carry = (-self.dividend * expiry).exp();
        let discount = (-self.rate * expiry).exp();

        self.spot * carry * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes the European put price; intrinsic value at expiry.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if Self::expired(expiry) {
            return PayoffType::Put.evaluate(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let carry = (-self.dividend * expiry).exp();
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * carry * norm_cdf(-d1)
    }

    /// Price for the given payoff type.
    #[inline]
    pub fn price(&self, strike: T, expiry: T, payoff: PayoffType) -> T {
        match payoff {
            PayoffType::Call => self.price_call(strike, expiry),
            PayoffType::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = e^(-qT)·N(d₁)
    /// - Put Delta = e^(-qT)·(N(d₁) - 1)
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, payoff: PayoffType) -> T {
        let one = T::one();
        let zero = T::zero();

        if Self::expired(expiry) {
            return match payoff {
                PayoffType::Call if self.spot > strike => one,
                PayoffType::Put if self.spot < strike => -one,
                _ => zero,
            };
        }

        let carry = (-self.dividend * expiry).exp();
        let n_d1 = norm_cdf(self.d1(strike, expiry));

        match payoff {
            PayoffType::Call => carry * n_d1,
            PayoffType::Put => carry * (n_d1 - one),
        }
    }

    /// Computes Gamma (∂²V/∂S²): e^(-qT)·φ(d₁) / (S·σ·√T).
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        if Self::expired(expiry) {
            return T::zero();
        }

        let carry = (-self.dividend * expiry).exp();
        carry * norm_pdf(self.d1(strike, expiry)) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Computes Vega (∂V/∂σ): S·e^(-qT)·√T·φ(d₁).
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        if Self::expired(expiry) {
            return T::zero();
        }

        let carry = (-self.dividend * expiry).exp();
        self.spot * carry * expiry.sqrt() * norm_pdf(self.d1(strike, expiry))
    }

    /// Prices a European [`VanillaOption`].
    ///
    /// The option's own spot is ignored in favour of the model's.
    ///
    /// # Errors
    /// - `AnalyticalError::UnsupportedExerciseStyle` if the option is American
    pub fn price_option(&self, option: &VanillaOption<T>) -> Result<T, AnalyticalError> {
        if !option.exercise_style().is_european() {
            return Err(AnalyticalError::UnsupportedExerciseStyle {
                style: option.exercise_style().to_string(),
            });
        }

        Ok(self.price(option.strike(), option.expiry(), option.payoff_type()))
    }
}

//! Payoff type definitions.
//!
//! This module provides the call/put intrinsic-value functions used at the
//! terminal nodes of the lattice and for early-exercise comparison.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::InstrumentError;

/// Intrinsic value of a call: `max(S - K, 0)`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::call_payoff;
///
/// assert_eq!(call_payoff(110.0_f64, 100.0), 10.0);
/// assert_eq!(call_payoff(90.0_f64, 100.0), 0.0);
/// ```
#[inline]
pub fn call_payoff<T: Float>(spot: T, strike: T) -> T {
    (spot - strike).max(T::zero())
}

/// Intrinsic value of a put: `max(K - S, 0)`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::put_payoff;
///
/// assert_eq!(put_payoff(90.0_f64, 100.0), 10.0);
/// assert_eq!(put_payoff(110.0_f64, 100.0), 0.0);
/// ```
#[inline]
pub fn put_payoff<T: Float>(spot: T, strike: T) -> T {
    (strike - spot).max(T::zero())
}

/// Type of option payoff.
///
/// A closed set of variants dispatched statically; the pricers receive a
/// `PayoffType` wherever a payoff capability is needed.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
///
/// let call = PayoffType::Call;
/// assert_eq!(call.evaluate(110.0_f64, 100.0), 10.0);
///
/// let put: PayoffType = "put".parse().unwrap();
/// assert_eq!(put.evaluate(110.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffType {
    /// Evaluate the intrinsic value for given spot and strike.
    #[inline]
    pub fn evaluate<T: Float>(&self, spot: T, strike: T) -> T {
        match self {
            PayoffType::Call => call_payoff(spot, strike),
            PayoffType::Put => put_payoff(spot, strike),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffType::Call => "call",
            PayoffType::Put => "put",
        }
    }
}

impl fmt::Display for PayoffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoffType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(PayoffType::Call),
            "put" | "p" => Ok(PayoffType::Put),
            _ => Err(InstrumentError::InvalidParameter {
                message: format!("Unknown payoff type: {}. Supported: call, put", s),
            }),
        }
    }
}

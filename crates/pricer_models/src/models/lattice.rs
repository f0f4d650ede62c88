//! One-step geometry of a recombining binomial lattice.
//!
//! Over a step of length h = T/N the asset moves up by `u` or down by `d`:
//! ```text
//! u = exp((r - q)·h + σ·√h)
//! d = exp((r - q)·h - σ·√h)
//! p = (exp((r - q)·h) - d) / (u - d)
//! ```
//! The drift is absorbed into both factors, so the tree is centred on the
//! forward rather than on spot. With σ > 0 this gives d < e^((r-q)h) < u and
//! p ∈ (0, 1) for any finite rate and step size.
//!
//! A node reached after `N - i` ups and `i` downs sits at `S·u^(N-i)·d^i`.

use pricer_core::traits::Float;

use super::error::LatticeError;
use crate::instruments::OptionParams;

/// Binomial lattice factors for a fixed number of steps.
///
/// [`BinomialLattice::new`] performs no checks: a zero step count or zero
/// volatility yields infinite or NaN factors. Use
/// [`BinomialLattice::try_new`] or [`BinomialLattice::validate`] to reject
/// such inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialLattice<T: Float> {
    steps: usize,
    dt: T,
    up: T,
    down: T,
    growth: T,
    prob_up: T,
}

impl<T: Float> BinomialLattice<T> {
    /// Builds the lattice for `steps` steps over `expiry` years.
    pub fn new(rate: T, dividend: T, volatility: T, expiry: T, steps: usize) -> Self {
        let dt = expiry / T::from(steps).unwrap();
        let carry = (rate - dividend) * dt;
        let diffusion = volatility * dt.sqrt();

        let growth = carry.exp();
        let up = (carry + diffusion).exp();
        let down = (carry - diffusion).exp();
        let prob_up = (growth - down) / (up - down);

        Self {
            steps,
            dt,
            up,
            down,
            growth,
            prob_up,
        }
    }

    /// Builds the lattice from contract parameters.
    pub fn from_params(params: &OptionParams<T>, steps: usize) -> Self {
        Self::new(
            params.rate(),
            params.dividend(),
            params.volatility(),
            params.expiry(),
            steps,
        )
    }

    /// Builds the lattice and checks it is usable.
    ///
    /// # Errors
    /// - `LatticeError::ZeroSteps` if `steps == 0`
    /// - `LatticeError::DegenerateLattice` if `u == d` (zero volatility or zero expiry)
    ///   or either factor is not finite
    /// - `LatticeError::ProbabilityOutOfRange` unless `0 < p < 1`
    ///
    /// # Examples
    /// ```
    /// use pricer_models::models::{BinomialLattice, LatticeError};
    ///
    /// assert!(BinomialLattice::try_new(0.05_f64, 0.0, 0.2, 1.0, 100).is_ok());
    /// assert_eq!(
    ///     BinomialLattice::try_new(0.05_f64, 0.0, 0.2, 1.0, 0),
    ///     Err(LatticeError::ZeroSteps)
    /// );
    /// ```
    pub fn try_new(
        rate: T,
        dividend: T,
        volatility: T,
        expiry: T,
        steps: usize,
    ) -> Result<Self, LatticeError> {
        if steps == 0 {
            return Err(LatticeError::ZeroSteps);
        }
        let lattice = Self::new(rate, dividend, volatility, expiry, steps);
        lattice.validate()?;
        Ok(lattice)
    }

    /// Checks the factors describe a usable lattice.
    pub fn validate(&self) -> Result<(), LatticeError> {
        if self.steps == 0 {
            return Err(LatticeError::ZeroSteps);
        }

        if !self.up.is_finite() || !self.down.is_finite() || self.up == self.down {
            return Err(LatticeError::DegenerateLattice {
                up: self.up.to_f64().unwrap_or(f64::NAN),
                down: self.down.to_f64().unwrap_or(f64::NAN),
            });
        }

        let p = self.prob_up;
        if !p.is_finite() || p <= T::zero() || p >= T::one() {
            return Err(LatticeError::ProbabilityOutOfRange {
                probability: p.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(())
    }

    /// Number of steps N.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Step length h = T/N.
    #[inline]
    pub fn dt(&self) -> T {
        self.dt
    }

    /// Up factor u.
    #[inline]
    pub fn up(&self) -> T {
        self.up
    }

    /// Down factor d.
    #[inline]
    pub fn down(&self) -> T {
        self.down
    }

    /// One-step forward growth e^((r-q)h).
    #[inline]
    pub fn growth(&self) -> T {
        self.growth
    }

    /// Risk-neutral probability of an up move.
    #[inline]
    pub fn prob_up(&self) -> T {
        self.prob_up
    }

    /// Risk-neutral probability of a down move.
    #[inline]
    pub fn prob_down(&self) -> T {
        T::one() - self.prob_up
    }

    /// One-step discount factor e^(-r·h).
    #[inline]
    pub fn discount_factor(&self, rate: T) -> T {
        (-rate * self.dt).exp()
    }

    /// Asset level at the terminal node with `down_moves` down moves.
    #[inline]
    pub fn terminal_spot(&self, spot: T, down_moves: usize) -> T {
        let up_moves = self.steps - down_moves;
        spot * self.up.powi(up_moves as i32) * self.down.powi(down_moves as i32)
    }
}

//! # Pricer Pricing (Layer 3: Engines)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing runs the numerical engines on top of the Layer 2 models:
//! - [`tree`]: European and American binomial pricers and the validated
//!   [`tree::BinomialTree`] engine
//! - [`greeks`]: lattice finite-difference deltas and the analytic
//!   Black-Scholes call delta
//! - [`paths`]: single-path binomial simulation
//! - [`rng`]: seedable random source for simulation
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::analytical::black_scholes_call;
//! use pricer_models::instruments::{OptionParams, PayoffType};
//! use pricer_pricing::tree::european_binomial_pricer;
//!
//! let params: OptionParams<f64> = OptionParams::new(100.0, 100.0, 1.0, 0.06, 0.2);
//! let lattice = european_binomial_pricer(&params, 500, PayoffType::Call);
//! assert!((lattice - black_scholes_call(&params)).abs() < 1e-2);
//! ```

#![warn(missing_docs)]

pub mod greeks;
pub mod paths;
pub mod rng;
pub mod tree;

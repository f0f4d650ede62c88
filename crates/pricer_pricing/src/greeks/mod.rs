//! Delta estimators.
//!
//! - [`simple_delta`] and [`binomial_delta`]: lattice finite differences
//! - [`black_scholes_call_delta`]: analytic reference, re-exported from
//!   `pricer_models`

mod delta;

pub use delta::{binomial_delta, simple_delta, DeltaMethod};
pub use pricer_models::analytical::black_scholes_call_delta;

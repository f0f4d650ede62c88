//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics with a dividend yield
//! - Analytic call delta used as the reference for the lattice estimators
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{
    black_scholes_call, black_scholes_call_delta, black_scholes_put, BlackScholes,
};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;

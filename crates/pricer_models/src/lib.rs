//! # Pricer Models (L2: Business Logic)
//!
//! Vanilla option contracts, closed-form reference prices, and the binomial
//! lattice geometry.
//!
//! This crate provides:
//! - Instrument definitions (contract parameters, payoffs, exercise styles)
//! - Black-Scholes prices and Greeks for validation of the lattice engines
//! - The recombining binomial lattice shared by pricers and path simulation
//!
//! ## Design Principles
//!
//! - **Enum-based payoffs and exercise styles** for static dispatch
//! - **Unchecked free functions, checked constructors**: formulas evaluate
//!   whatever they are given; validation lives in `validate`/`try_new`
//! - **Builder pattern** for optional fields such as the dividend yield
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::black_scholes_call;
//! use pricer_models::instruments::OptionParams;
//!
//! let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.06, 0.2);
//! assert!(params.validate().is_ok());
//! assert!((black_scholes_call(&params) - 10.98955).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;

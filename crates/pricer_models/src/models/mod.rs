//! Recombining binomial lattice.
//!
//! This module provides the one-step geometry shared by the lattice pricers,
//! the finite-difference deltas and the path simulator:
//! - `BinomialLattice`: up/down factors and risk-neutral probability
//! - `LatticeError`: construction failures
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::BinomialLattice;
//!
//! let lattice = BinomialLattice::new(0.08_f64, 0.0, 0.3, 1.0, 3);
//! assert!((lattice.up() - 1.2212461).abs() < 1e-6);
//! assert!((lattice.down() - 0.8636926).abs() < 1e-6);
//! assert!((lattice.prob_up() - 0.4568067).abs() < 1e-6);
//! ```

pub mod error;
pub mod lattice;

pub use error::LatticeError;
pub use lattice::BinomialLattice;

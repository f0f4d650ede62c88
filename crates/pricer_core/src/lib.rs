//! # pricer_core: Numeric Foundation for the Lattice Pricers
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the pricing stack, providing:
//! - Generic floating-point trait re-export (`traits::Float`)
//! - Discrete distribution helpers for lattice weighting (`math::binomial`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Derive macros for the error enums
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::binomial::binomial_pmf;
//!
//! // P(X = 2) for X ~ Binomial(3, 0.5)
//! let p = binomial_pmf(2, 3, 0.5_f64);
//! assert!((p - 0.375).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;

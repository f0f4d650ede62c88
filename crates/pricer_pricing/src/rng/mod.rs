//! # Random Number Generation
//!
//! Seedable uniform generator for the binomial path simulator.
//!
//! The generator is passed explicitly to every simulation call; there is no
//! process-wide random state. A caller that needs reproducibility picks the
//! seed, and one that does not can draw it from entropy and log it.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_uniform(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;

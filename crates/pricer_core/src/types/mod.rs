//! Shared types for the pricing layers.
//!
//! - `error`: Structured error type for pricing operations
//!
//! [`PricingError`] is re-exported at this module level for convenience.

pub mod error;

pub use error::PricingError;

//! Mathematical helpers shared by the model and pricing layers.
//!
//! - [`binomial`]: Binomial probability mass function in log space

pub mod binomial;

pub use binomial::{binomial_pmf, binomial_pmf_table};

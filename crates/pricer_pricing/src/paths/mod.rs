//! Risk-neutral path simulation on the binomial lattice.

mod binomial;

pub use binomial::{binomial_path, PathParams};

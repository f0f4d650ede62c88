//! # Binomial Tree Pricers
//!
//! Vanilla option pricing on a recombining binomial lattice:
//!
//! - [`european_binomial_pricer`]: O(N) closed-form sum over terminal nodes
//! - [`american_binomial_pricer`]: O(N²) backward induction with early exercise
//! - [`BinomialTree`]: validated engine dispatching on exercise style
//!
//! The free functions are unchecked and propagate NaN or infinity for bad
//! inputs. [`BinomialTree`] rejects them with a [`TreeError`].
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{OptionParams, PayoffType};
//! use pricer_pricing::tree::{american_binomial_pricer, european_binomial_pricer};
//!
//! let params = OptionParams::new(100.0, 100.0, 1.0, 0.06, 0.2);
//! let european = european_binomial_pricer(&params, 200, PayoffType::Put);
//! let american = american_binomial_pricer(&params, 200, PayoffType::Put);
//! assert!(american > european);
//! ```

mod american;
mod engine;
mod error;
mod european;

pub use american::american_binomial_pricer;
pub use engine::{BinomialTree, DEFAULT_STEPS};
pub use error::TreeError;
pub use european::european_binomial_pricer;

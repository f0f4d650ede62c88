//! Vanilla instrument definitions.
//!
//! # Types
//!
//! - [`PayoffType`]: Call/Put intrinsic value, plus the free functions
//!   [`call_payoff`] and [`put_payoff`]
//! - [`ExerciseStyle`]: European or American exercise
//! - [`OptionParams`]: Spot, strike, expiry, rate, dividend yield, volatility
//! - [`VanillaOption`]: Parameters combined with payoff and exercise style
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{
//!     call_payoff, put_payoff, ExerciseStyle, OptionParams, PayoffType, VanillaOption,
//! };
//!
//! let params = OptionParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2);
//! let option = VanillaOption::new(params, PayoffType::Call, ExerciseStyle::European);
//! assert_eq!(option.payoff_type().evaluate(110.0, option.strike()), 10.0);
//!
//! // call - put = S - K
//! assert_eq!(call_payoff(120.0_f64, 100.0) - put_payoff(120.0, 100.0), 20.0);
//! ```

mod error;
mod exercise;
mod params;
mod payoff;
mod vanilla;

pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use params::OptionParams;
pub use payoff::{call_payoff, put_payoff, PayoffType};
pub use vanilla::VanillaOption;

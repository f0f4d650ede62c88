//! Core numeric traits.
//!
//! All pricing code in the higher layers is generic over [`Float`] so that
//! the same formulas serve `f64` and `f32` callers.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_trait_with_f64() {
        fn generic_sqrt<T: Float>(x: T) -> T {
            x.sqrt()
        }

        assert_eq!(generic_sqrt(4.0_f64), 2.0);
    }

    #[test]
    fn test_float_trait_with_f32() {
        fn generic_exp<T: Float>(x: T) -> T {
            x.exp()
        }

        assert_eq!(generic_exp(0.0_f32), 1.0);
    }
}

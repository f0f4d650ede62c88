//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable via absolute paths.

/// Test that the binomial helpers are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use pricer_core::math::binomial::{binomial_pmf, binomial_pmf_table};
    use pricer_core::math::binomial_pmf_table as reexported_table;

    let _ = binomial_pmf(1, 2, 0.5_f64);
    assert_eq!(binomial_pmf_table(4, 0.5_f64), reexported_table(4, 0.5_f64));
}

/// Test that the Float trait re-export works.
#[test]
fn test_traits_module_exports() {
    use pricer_core::traits::Float;

    fn generic_sqrt<T: Float>(x: T) -> T {
        x.sqrt()
    }
    assert_eq!(generic_sqrt(4.0_f64), 2.0);
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::PricingError as Reexported;

    let err: Reexported = PricingError::InvalidInput("spot".to_string());
    assert!(err.to_string().contains("spot"));
}

//! Gaussian probability density
//!
//! The closed-form normal PDF plus the handful of derived values the
//! sampler needs (peak height, the fixed standard-normal reference).

/// 1 / sqrt(2π)
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Mean of the reference curve
pub const STANDARD_MEAN: f64 = 0.0;

/// Sigma of the reference curve
pub const STANDARD_SIGMA: f64 = 1.0;

/// Density of `N(mean, sigma)` at `x`.
///
/// `p(x) = 1 / (sigma * sqrt(2π)) * exp(-0.5 * ((x - mean) / sigma)^2)`
///
/// `sigma` must be positive. The result is undefined (infinite or NaN) for
/// `sigma <= 0`; use [`crate::DistributionParameters`] or the validated
/// sampling functions when the input is not already known to be good.
#[inline]
pub fn density(x: f64, mean: f64, sigma: f64) -> f64 {
    debug_assert!(sigma > 0.0, "density called with sigma = {}", sigma);
    let z = (x - mean) / sigma;
    FRAC_1_SQRT_2PI / sigma * (-0.5 * z * z).exp()
}

/// Density of the standard normal `N(0, 1)` at `x`
#[inline]
pub fn standard_density(x: f64) -> f64 {
    density(x, STANDARD_MEAN, STANDARD_SIGMA)
}

/// Height of the curve at its mode, `density(mean, mean, sigma)`
#[inline]
pub fn peak_density(sigma: f64) -> f64 {
    density(0.0, 0.0, sigma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_at_zero() {
        assert!((density(0.0, 0.0, 1.0) - 0.398_942_28).abs() < 1e-8);
        assert_eq!(standard_density(0.0), FRAC_1_SQRT_2PI);
    }

    #[test]
    fn test_standard_at_one() {
        assert!((density(1.0, 0.0, 1.0) - 0.241_970_72).abs() < 1e-8);
    }

    #[test]
    fn test_symmetry() {
        let left = density(1.3 - 0.7, 1.3, 0.4);
        let right = density(1.3 + 0.7, 1.3, 0.4);
        assert!((left - right).abs() < 1e-15);
    }

    #[test]
    fn test_narrow_peak() {
        // mean=2, sigma=0.5
        assert!((density(2.0, 2.0, 0.5) - 0.797_884_56).abs() < 1e-8);
        // Four standard deviations out: exp(-8) / (0.5 * sqrt(2π))
        assert!((density(0.0, 2.0, 0.5) - 2.676_604_515e-4).abs() < 1e-12);
    }

    #[test]
    fn test_peak_density_matches_mode() {
        for sigma in [0.1, 0.5, 1.0, 2.5] {
            assert_eq!(peak_density(sigma), density(1.7, 1.7, sigma));
        }
    }

    #[test]
    fn test_far_tail_is_finite_and_non_negative() {
        let d = density(4.0, -3.0, 0.1);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }
}

//! Evenly spaced sample grids over closed intervals.
//!
//! Every grid is enumerated by index (`start + step * i`) rather than by
//! repeated addition, so the endpoint is reached exactly once the values
//! are rounded for display.

/// Decimal places used for every displayed coordinate
pub const DISPLAY_DECIMALS: i32 = 1;

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10.0_f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // -0.0 would print as "-0.0" in labels
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round to one decimal place, matching tick label precision
pub fn round_display(value: f64) -> f64 {
    round_to(value, DISPLAY_DECIMALS)
}

/// Number of grid points in `[start, end]` with the given step.
///
/// A small tolerance absorbs representation error so that e.g.
/// `[0, 0.6]` with step `0.2` yields 4 points, not 3. An unbounded span
/// yields no points.
pub fn point_count(start: f64, end: f64, step: f64) -> usize {
    if step <= 0.0 || end < start {
        return 0;
    }
    let gaps = ((end - start) / step + 1e-9).floor();
    if !gaps.is_finite() {
        return 0;
    }
    (gaps as usize).saturating_add(1)
}

/// All grid values `start + step * i` that lie in `[start, end]`, rounded
/// to one decimal
pub fn closed_range(start: f64, end: f64, step: f64) -> Vec<f64> {
    (0..point_count(start, end, step))
        .map(|i| round_display(start + step * i as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123_456, 2), 0.12);
        assert_eq!(round_to(-3.999_999_999, 1), -4.0);
        assert_eq!(round_display(0.30000000000000004), 0.3);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let value = round_display(-0.000_000_1);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_point_count() {
        assert_eq!(point_count(-4.0, 4.0, 0.1), 81);
        assert_eq!(point_count(-4.0, 4.0, 0.5), 17);
        assert_eq!(point_count(0.0, 0.6, 0.2), 4);
        assert_eq!(point_count(0.0, 0.5, 0.2), 3);
        assert_eq!(point_count(1.0, 0.0, 0.1), 0);
        assert_eq!(point_count(0.0, 1.0, 0.0), 0);
    }

    #[test]
    fn test_point_count_does_not_overflow() {
        assert_eq!(point_count(0.0, f64::INFINITY, 0.2), 0);
        assert_eq!(point_count(0.0, 1e300, 0.2), usize::MAX);
    }

    #[test]
    fn test_closed_range_hits_endpoint() {
        let values = closed_range(-4.0, 4.0, 0.1);
        assert_eq!(values.first(), Some(&-4.0));
        assert_eq!(values.last(), Some(&4.0));
        assert_eq!(values[40], 0.0);
    }
}

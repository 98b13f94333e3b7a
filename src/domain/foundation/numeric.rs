//! Numeric helpers shared by the feature builder, simulator and risk scorer.
//!
//! Every projection and score is rounded to a fixed number of decimals before
//! it leaves the pipeline. Downstream consumers compare these values exactly,
//! so rounding works on the shortest decimal representation of the value
//! (ties resolved to even) rather than on `x * 10^n`, which can drift by one
//! unit in the last place.

/// Clamps `x` into `[lo, hi]`.
///
/// NaN saturates to `hi`, so the result always lies inside the interval.
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x.is_nan() {
        return hi;
    }
    x.max(lo).min(hi)
}

/// Rounds `x` to `digits` decimal places.
///
/// Non-finite values are returned unchanged.
pub fn round_to(x: f64, digits: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{:.*}", digits, x).parse().unwrap_or(x)
}

/// Standard logistic function `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_values_inside_interval() {
        assert_eq!(clamp(0.4, 0.0, 1.0), 0.4);
        assert_eq!(clamp(0.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn clamp_pulls_out_of_range_values_to_bounds() {
        assert_eq!(clamp(-3.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(7.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(f64::INFINITY, 0.0, 72.0), 72.0);
        assert_eq!(clamp(f64::NEG_INFINITY, 0.0, 72.0), 0.0);
    }

    #[test]
    fn clamp_maps_nan_to_upper_bound() {
        assert_eq!(clamp(f64::NAN, 0.2, 2.2), 2.2);
        assert_eq!(clamp(f64::NAN, 0.0, 1.0), 1.0);
    }

    #[test]
    fn round_to_rounds_to_requested_digits() {
        assert_eq!(round_to(0.31249, 3), 0.312);
        assert_eq!(round_to(34.8123, 1), 34.8);
        assert_eq!(round_to(6.8149, 2), 6.81);
        assert_eq!(round_to(0.58333, 2), 0.58);
    }

    #[test]
    fn round_to_uses_decimal_representation() {
        // 2.675 is stored as 2.67499999..., so it rounds down.
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(0.35, 2), 0.35);
    }

    #[test]
    fn round_to_passes_non_finite_through() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn sigmoid_is_centered_at_half() {
        assert!((sigmoid(0.0) - 0.5).abs() < f64::EPSILON);
        assert!(sigmoid(10.0) > 0.9999);
        assert!(sigmoid(-10.0) < 0.0001);
    }
}

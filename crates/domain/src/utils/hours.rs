//! Hour rounding
//!
//! Estimates and dashboard totals are shown with one decimal place.

use crate::constants::HOURS_DECIMAL_PLACES;

/// Round an hour value to one decimal place, half away from zero
///
/// Non-finite input collapses to `0.0` so a bad value can never leak into a
/// total. Finite input always gives a finite result.
pub fn round_hours(hours: f64) -> f64 {
    if !hours.is_finite() {
        return 0.0;
    }
    let factor = 10_f64.powi(HOURS_DECIMAL_PLACES);
    // Already integral at this magnitude; scaling would overflow
    if hours.abs() >= f64::MAX / factor {
        return hours;
    }
    let rounded = (hours * factor).round() / factor;
    // Normalize -0.0 so serialized output never shows "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_hours_one_decimal() {
        assert_eq!(round_hours(10.0), 10.0);
        assert_eq!(round_hours(1.25), 1.3);
        assert_eq!(round_hours(0.04), 0.0);
        assert_eq!(round_hours(2.0 * 0.5), 1.0);
        assert_eq!(round_hours(3.0 * 1.1), 3.3);
    }

    #[test]
    fn test_round_hours_non_finite() {
        assert_eq!(round_hours(f64::NAN), 0.0);
        assert_eq!(round_hours(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_round_hours_stays_finite_near_max() {
        assert_eq!(round_hours(f64::MAX), f64::MAX);
        assert_eq!(round_hours(f64::MAX / 5.0), f64::MAX / 5.0);
        assert_eq!(round_hours(-f64::MAX), -f64::MAX);
        assert!(round_hours(f64::MAX / 10.0).is_finite());
    }

    #[test]
    fn test_round_hours_negative_zero() {
        assert!(round_hours(-0.01).is_sign_positive());
    }
}

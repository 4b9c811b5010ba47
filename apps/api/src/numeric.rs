//! Small numeric helpers shared by the matcher, the analyzers and the scorers.

/// Rounds the stored binary value to `places` decimals.
///
/// Goes through float formatting so the decision is made on the exact value
/// (13.05 is stored just above the midpoint and rounds up). Exact midpoints
/// round to even.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// One-decimal rounding used for every published score.
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Two-decimal rounding used for match confidences.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Clamps a score into [0, 100]. NaN collapses to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Step function over descending inclusive lower bounds.
///
/// `steps` must be ordered from the highest threshold down; the first
/// threshold `value` reaches wins, otherwise `floor`.
pub fn bucket<T: PartialOrd + Copy>(value: T, steps: &[(T, f64)], floor: f64) -> f64 {
    steps
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, score)| *score)
        .unwrap_or(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1_basic() {
        assert_eq!(round1(73.64), 73.6);
        assert_eq!(round1(74.14), 74.1);
        assert_eq!(round1(100.0), 100.0);
    }

    #[test]
    fn test_round1_uses_stored_value_not_scaled_product() {
        assert_eq!(round1(13.05), 13.1);
        assert_eq!(round1(13.35), 13.3);
        assert_eq!(round1(0.15), 0.1);
    }

    #[test]
    fn test_round1_exact_midpoints_go_to_even() {
        assert_eq!(round1(43.75), 43.8);
        assert_eq!(round1(81.25), 81.2);
    }

    #[test]
    fn test_round1_weighted_contributions() {
        assert_eq!(round1(43.5 * 30.0 / 100.0), 13.1);
        assert_eq!(round1(44.5 * 30.0 / 100.0), 13.3);
    }

    #[test]
    fn test_round2_confidence() {
        assert_eq!(round2(0.8571), 0.86);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(120.0), 100.0);
        assert_eq!(clamp_score(-3.0), 0.0);
        assert_eq!(clamp_score(f64::NAN), 0.0);
    }

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[10.0, 20.0]), 15.0);
    }

    #[test]
    fn test_bucket_picks_first_reached_threshold() {
        let steps = [(8, 100.0), (5, 85.0), (3, 70.0), (2, 55.0)];
        assert_eq!(bucket(9, &steps, 35.0), 100.0);
        assert_eq!(bucket(5, &steps, 35.0), 85.0);
        assert_eq!(bucket(2, &steps, 35.0), 55.0);
        assert_eq!(bucket(1, &steps, 35.0), 35.0);
    }
}

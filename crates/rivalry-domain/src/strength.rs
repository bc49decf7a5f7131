//! Rivalry strength to edge weight conversion
//!
//! Strength is the user-facing 1-10 rating. Weight is the graph distance
//! derived from it: a logistic curve that maps strong rivalries close to
//! 1.0 and weak ones close to 1.95.

/// Lower asymptote of the weight curve
pub const WEIGHT_LOWER: f64 = 1.0;

/// Upper asymptote of the weight curve
pub const WEIGHT_UPPER: f64 = 1.95;

/// Steepness of the logistic curve
pub const STEEPNESS: f64 = 0.7;

/// Strength at which the curve sits halfway between the asymptotes
pub const INFLECTION: f64 = 5.0;

/// Smallest strength produced by [`normalize_strengths`]
pub const MIN_NORMALIZED_STRENGTH: f64 = 0.25;

/// Convert a rivalry strength into an edge weight.
///
/// Defined for every real input; no clamping is applied.
///
/// # Examples
///
/// ```
/// use rivalry_domain::calculate_weight;
///
/// let strong = calculate_weight(9.0);
/// let weak = calculate_weight(1.0);
/// assert!(strong < weak);
/// assert!((calculate_weight(5.0) - 1.475).abs() < 1e-12);
/// ```
pub fn calculate_weight(strength: f64) -> f64 {
    WEIGHT_LOWER + (WEIGHT_UPPER - WEIGHT_LOWER) / (1.0 + (STEEPNESS * (strength - INFLECTION)).exp())
}

/// Rescale raw ratings onto the 0-10 strength range.
///
/// Each value becomes `round(40 * s / max) / 4`, i.e. snapped to quarter
/// steps, and never drops below 0.25. The caller is responsible for making
/// sure the maximum is positive; a non-positive maximum yields the floor
/// value for every entry.
pub fn normalize_strengths(raw: &[f64]) -> Vec<f64> {
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max.is_nan() || max <= 0.0 {
        return vec![MIN_NORMALIZED_STRENGTH; raw.len()];
    }

    raw.iter()
        .map(|s| ((4.0 * 10.0 * s / max).round() / 4.0).max(MIN_NORMALIZED_STRENGTH))
        .collect()
}

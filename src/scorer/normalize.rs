use super::parsers::ParsedMeasurement;
use crate::config::EventSpec;

/// Round half up. Only ever applied to non-negative point values.
#[inline(always)]
pub fn round_half_up(x: f64) -> u32 {
    if !x.is_finite() || x <= 0.0 {
        return 0;
    }
    (x + 0.5).floor() as u32
}

/// Share of the way from the worst anchor to the best, clamped to [0, 1].
///
/// `(m - worst) / (best - worst)` grows with performance in either
/// direction: for lower-is-better events `worst` is the larger anchor and
/// both numerator and denominator flip sign together.
pub fn performance_fraction(magnitude: f64, spec: &EventSpec) -> f64 {
    let fraction = (magnitude - spec.worst_raw) / (spec.best_raw - spec.worst_raw);
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0)
}

/// Points for a magnitude on the event's own scale, `0..=point_ceiling`.
pub fn normalize(magnitude: f64, spec: &EventSpec) -> u32 {
    scale_fraction(performance_fraction(magnitude, spec), spec.point_ceiling)
}

/// Fraction for a parsed field; invalid fields are 0 without touching the
/// formula.
pub fn event_fraction(measurement: &ParsedMeasurement, spec: &EventSpec) -> f64 {
    if !measurement.valid {
        return 0.0;
    }
    performance_fraction(measurement.magnitude, spec)
}

pub fn normalize_measurement(measurement: &ParsedMeasurement, spec: &EventSpec) -> u32 {
    scale_fraction(event_fraction(measurement, spec), spec.point_ceiling)
}

#[inline(always)]
pub fn scale_fraction(fraction: f64, ceiling: u32) -> u32 {
    round_half_up(fraction * ceiling as f64).min(ceiling)
}

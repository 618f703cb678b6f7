//! Threshold rule standing in for a trained failure model.

use std::fmt;

/// Predicted machine outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredictionLabel {
    /// No threshold was exceeded.
    NoFailure,
    /// At least one threshold was exceeded.
    Failure,
}

impl PredictionLabel {
    /// Numeric class code (0 or 1).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::NoFailure => 0,
            Self::Failure => 1,
        }
    }

    /// Headline shown on the result card.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::NoFailure => "No Failure Predicted",
            Self::Failure => "Failure Predicted",
        }
    }
}

impl fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())
    }
}

/// Outcome of one prediction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PredictionResult {
    /// Predicted class.
    pub label: PredictionLabel,
    /// Probability reported for the class, in `[0, 1]`.
    pub probability: f64,
}

impl PredictionResult {
    /// Probability as a whole percentage, e.g. `95`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u8 {
        // Clamped to [0, 100], so the cast cannot truncate.
        (self.probability.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Sensor readings fed to a predictor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurements {
    /// Temperature in °C.
    pub temperature_c: f64,
    /// Vibration in mm/s.
    pub vibration_mm_s: f64,
    /// Pressure in kPa.
    pub pressure_kpa: f64,
}

/// Anything that can classify a set of measurements.
pub trait FailurePredictor {
    /// Classify `input`.
    fn predict(&self, input: &Measurements) -> PredictionResult;
}

/// Fails when any reading is strictly above its threshold.
///
/// NaN readings compare false against every threshold, so they never trigger
/// a failure on their own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdRule {
    temperature_max_c: f64,
    vibration_max_mm_s: f64,
    pressure_max_kpa: f64,
    failure_probability: f64,
    nominal_probability: f64,
}

impl ThresholdRule {
    /// The deck's rule: 90 °C, 20 mm/s and 750 kPa, reporting 0.95 or 0.10.
    pub const STANDARD: Self = Self {
        temperature_max_c: 90.0,
        vibration_max_mm_s: 20.0,
        pressure_max_kpa: 750.0,
        failure_probability: 0.95,
        nominal_probability: 0.10,
    };
}

impl Default for ThresholdRule {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl FailurePredictor for ThresholdRule {
    fn predict(&self, input: &Measurements) -> PredictionResult {
        let exceeded = input.temperature_c > self.temperature_max_c
            || input.vibration_mm_s > self.vibration_max_mm_s
            || input.pressure_kpa > self.pressure_max_kpa;
        if exceeded {
            PredictionResult {
                label: PredictionLabel::Failure,
                probability: self.failure_probability,
            }
        } else {
            PredictionResult {
                label: PredictionLabel::NoFailure,
                probability: self.nominal_probability,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(temperature_c: f64, vibration_mm_s: f64, pressure_kpa: f64) -> Measurements {
        Measurements {
            temperature_c,
            vibration_mm_s,
            pressure_kpa,
        }
    }

    #[test]
    fn hot_machine_fails() {
        let result = ThresholdRule::default().predict(&readings(95.2, 18.5, 720.0));
        assert_eq!(result.label, PredictionLabel::Failure);
        assert_eq!(result.label.code(), 1);
        assert!((result.probability - 0.95).abs() < f64::EPSILON);
        assert_eq!(result.percent(), 95);
    }

    #[test]
    fn nominal_machine_passes() {
        let result = ThresholdRule::default().predict(&readings(50.0, 5.0, 500.0));
        assert_eq!(result.label, PredictionLabel::NoFailure);
        assert_eq!(result.label.code(), 0);
        assert_eq!(result.percent(), 10);
        assert_eq!(result.label.to_string(), "No Failure Predicted");
    }

    #[test]
    fn any_single_threshold_triggers_failure() {
        let rule = ThresholdRule::default();
        assert_eq!(
            rule.predict(&readings(50.0, 25.0, 500.0)).label,
            PredictionLabel::Failure
        );
        assert_eq!(
            rule.predict(&readings(50.0, 5.0, 751.0)).label,
            PredictionLabel::Failure
        );
    }

    #[test]
    fn thresholds_are_exclusive() {
        let result = ThresholdRule::default().predict(&readings(90.0, 20.0, 750.0));
        assert_eq!(result.label, PredictionLabel::NoFailure);
    }

    #[test]
    fn nan_never_exceeds_a_threshold() {
        let result = ThresholdRule::default().predict(&readings(f64::NAN, f64::NAN, f64::NAN));
        assert_eq!(result.label, PredictionLabel::NoFailure);
        let result = ThresholdRule::default().predict(&readings(f64::NAN, 30.0, f64::NAN));
        assert_eq!(result.label, PredictionLabel::Failure);
    }

    #[test]
    fn boundary_readings_are_nominal_at_every_threshold() {
        let rule = ThresholdRule::STANDARD;
        for input in [
            readings(90.0, 0.0, 0.0),
            readings(0.0, 20.0, 0.0),
            readings(0.0, 0.0, 750.0),
        ] {
            assert_eq!(rule.predict(&input).percent(), 10);
        }
        assert_eq!(rule.predict(&readings(90.1, 0.0, 0.0)).percent(), 95);
    }
}

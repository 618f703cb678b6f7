//! Deck configuration with defaults and validation.
//!
//! # Design
//! - Every field has a default so an absent config block is valid.
//! - Unknown fields are rejected to surface typos instead of ignoring them.
//! - Validation runs once at load; the rest of the crate trusts the values.
//! - Only presentation timing and label wrapping are tunable. The prediction
//!   thresholds and the scatter size are fixed in their modules.

use serde::Deserialize;
use thiserror::Error;

/// Longest artificial prediction delay accepted, in milliseconds.
pub const MAX_PREDICTION_DELAY_MS: u32 = 10_000;
/// Narrowest label wrap width accepted.
pub const MIN_LABEL_WRAP_WIDTH: usize = 4;

/// Errors raised while loading or validating [`DeckConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON payload could not be deserialized.
    #[error("deck config is not valid JSON")]
    Parse(#[from] serde_json::Error),
    /// A field carried a value outside its accepted range.
    #[error("invalid deck config field {section}.{field}: {reason}")]
    InvalidField {
        /// Section containing the field.
        section: &'static str,
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Timing of the simulated prediction.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PredictionConfig {
    /// Artificial delay before the result is shown, in milliseconds.
    pub delay_ms: u32,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self { delay_ms: 1_000 }
    }
}

/// Label settings for the chart widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Maximum characters per line for wrapped category labels.
    pub label_wrap_width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            label_wrap_width: 16,
        }
    }
}

/// Top-level deck configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    /// Prediction timing.
    pub prediction: PredictionConfig,
    /// Chart label settings.
    pub charts: ChartConfig,
}

impl DeckConfig {
    /// Parse and validate a JSON config payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidField`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let delay_ms = self.prediction.delay_ms;
        if delay_ms == 0 || delay_ms > MAX_PREDICTION_DELAY_MS {
            return Err(invalid(
                "prediction",
                "delay_ms",
                "must be between 1 and 10000",
            ));
        }
        if self.charts.label_wrap_width < MIN_LABEL_WRAP_WIDTH {
            return Err(invalid("charts", "label_wrap_width", "must be at least 4"));
        }
        Ok(())
    }
}

const fn invalid(section: &'static str, field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        section,
        field,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DeckConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.prediction.delay_ms, 1_000);
        assert_eq!(config.charts.label_wrap_width, 16);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = DeckConfig::from_json(r#"{"prediction":{"delay_ms":250}}"#)
            .expect("partial config should parse");
        assert_eq!(config.prediction.delay_ms, 250);
        assert_eq!(config.charts, ChartConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = DeckConfig::from_json(r#"{"prediction":{"humidity_max":3}}"#)
            .expect_err("unknown field should fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn fixed_dataset_and_rule_values_cannot_be_overridden() {
        for raw in [
            r#"{"charts":{"scatter_points":7}}"#,
            r#"{"prediction":{"temperature_max_c":40.0}}"#,
            r#"{"prediction":{"failure_probability":0.5}}"#,
        ] {
            let err = DeckConfig::from_json(raw).expect_err("fixed value should be rejected");
            assert!(matches!(err, ConfigError::Parse(_)), "{raw}");
        }
    }

    #[test]
    fn out_of_range_values_name_the_field() {
        let err = DeckConfig::from_json(r#"{"prediction":{"delay_ms":60000}}"#)
            .expect_err("delay above ten seconds should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "delay_ms",
                ..
            }
        ));

        let err = DeckConfig::from_json(r#"{"charts":{"label_wrap_width":2}}"#)
            .expect_err("narrow wrap width should fail");
        assert_eq!(
            err.to_string(),
            "invalid deck config field charts.label_wrap_width: must be at least 4"
        );
    }

    #[test]
    fn zero_delay_is_rejected() {
        let mut config = DeckConfig::default();
        config.prediction.delay_ms = 0;
        assert!(config.validate().is_err());
    }
}

//! Sensor reading form state.
//!
//! # Design
//! - Inputs stay as strings so partial edits ("9", "95.") survive re-renders.
//! - Conversion to numbers happens once, on submit.
//! - Empty or non-numeric fields are rejected before any prediction is scheduled.

use crate::features::prediction::rule::Measurements;
use thiserror::Error;

/// Form fields in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorField {
    /// Temperature in °C.
    Temperature,
    /// Vibration in mm/s.
    Vibration,
    /// Pressure in kPa.
    Pressure,
}

impl SensorField {
    /// Every field, in display order.
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Vibration, Self::Pressure];

    /// Input name and id.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Vibration => "vibration",
            Self::Pressure => "pressure",
        }
    }

    /// Label with units.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature (°C)",
            Self::Vibration => "Vibration (mm/s)",
            Self::Pressure => "Pressure (kPa)",
        }
    }

    /// Example value shown as the placeholder.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Temperature => "e.g., 95.2",
            Self::Vibration => "e.g., 18.5",
            Self::Pressure => "e.g., 720",
        }
    }

    /// Input step attribute.
    #[must_use]
    pub const fn step(self) -> &'static str {
        match self {
            Self::Temperature | Self::Vibration => "0.1",
            Self::Pressure => "1",
        }
    }
}

/// Validation failures for the sensor form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    /// A field was left blank.
    #[error("{label} is required")]
    Missing {
        /// Label of the blank field.
        label: &'static str,
    },
    /// A field could not be read as a finite number.
    #[error("{label} must be a number (got `{value}`)")]
    InvalidNumber {
        /// Label of the offending field.
        label: &'static str,
        /// Raw text entered.
        value: String,
    },
}

/// Raw form input, one string per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SensorReadings {
    /// Temperature text.
    pub temperature: String,
    /// Vibration text.
    pub vibration: String,
    /// Pressure text.
    pub pressure: String,
}

impl SensorReadings {
    /// Current text of `field`.
    #[must_use]
    pub fn get(&self, field: SensorField) -> &str {
        match field {
            SensorField::Temperature => &self.temperature,
            SensorField::Vibration => &self.vibration,
            SensorField::Pressure => &self.pressure,
        }
    }

    /// Replace the text of `field`.
    pub fn set(&mut self, field: SensorField, value: impl Into<String>) {
        let slot = match field {
            SensorField::Temperature => &mut self.temperature,
            SensorField::Vibration => &mut self.vibration,
            SensorField::Pressure => &mut self.pressure,
        };
        *slot = value.into();
    }

    /// Parse every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] in display order.
    pub fn parse(&self) -> Result<Measurements, FormError> {
        Ok(Measurements {
            temperature_c: parse_field(SensorField::Temperature, &self.temperature)?,
            vibration_mm_s: parse_field(SensorField::Vibration, &self.vibration)?,
            pressure_kpa: parse_field(SensorField::Pressure, &self.pressure)?,
        })
    }
}

fn parse_field(field: SensorField, value: &str) -> Result<f64, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing {
            label: field.label(),
        });
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| FormError::InvalidNumber {
            label: field.label(),
            value: trimmed.to_string(),
        })
}

//! Hardcoded fleet and model metrics shown on the KPI dashboard.

/// Confusion matrix of the simulated failure model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelMetrics {
    /// Failures correctly predicted.
    pub true_positives: u32,
    /// Healthy machines correctly predicted.
    pub true_negatives: u32,
    /// Healthy machines flagged as failing.
    pub false_positives: u32,
    /// Failures that were missed.
    pub false_negatives: u32,
}

impl ModelMetrics {
    /// Sample numbers presented in the deck.
    pub const SAMPLE: Self = Self {
        true_positives: 50,
        true_negatives: 400,
        false_positives: 5,
        false_negatives: 10,
    };

    /// Number of scored observations.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }

    /// Share of correct predictions.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.true_positives + self.true_negatives, self.total())
    }

    /// Share of actual failures that were caught.
    #[must_use]
    pub fn recall(&self) -> Option<f64> {
        ratio(
            self.true_positives,
            self.true_positives + self.false_negatives,
        )
    }

    /// Share of failure predictions that were correct.
    #[must_use]
    pub fn precision(&self) -> Option<f64> {
        ratio(
            self.true_positives,
            self.true_positives + self.false_positives,
        )
    }
}

impl Default for ModelMetrics {
    fn default() -> Self {
        Self::SAMPLE
    }
}

/// Fleet-level counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetMetrics {
    /// Machines under monitoring.
    pub total_machines: u32,
    /// Machines that failed historically.
    pub failed_machines_historical: u32,
}

impl FleetMetrics {
    /// Sample numbers presented in the deck.
    pub const SAMPLE: Self = Self {
        total_machines: 150,
        failed_machines_historical: 25,
    };

    /// Historical failure rate.
    #[must_use]
    pub fn failure_rate(&self) -> Option<f64> {
        ratio(self.failed_machines_historical, self.total_machines)
    }
}

impl Default for FleetMetrics {
    fn default() -> Self {
        Self::SAMPLE
    }
}

/// A titled figure on the KPI strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KpiTile {
    /// Caption.
    pub label: &'static str,
    /// Formatted value.
    pub value: String,
}

/// KPI tiles for the dashboard, in display order.
#[must_use]
pub fn kpi_tiles(fleet: FleetMetrics, model: ModelMetrics) -> Vec<KpiTile> {
    vec![
        KpiTile {
            label: "Machines Monitored",
            value: fleet.total_machines.to_string(),
        },
        KpiTile {
            label: "Historical Failures",
            value: fleet.failed_machines_historical.to_string(),
        },
        KpiTile {
            label: "Model Accuracy",
            value: format_rate(model.accuracy()),
        },
        KpiTile {
            label: "Failure Recall",
            value: format_rate(model.recall()),
        },
        KpiTile {
            label: "Precision",
            value: format_rate(model.precision()),
        },
    ]
}

fn ratio(numerator: u32, denominator: u32) -> Option<f64> {
    (denominator > 0).then(|| f64::from(numerator) / f64::from(denominator))
}

/// Rate as a one-decimal percentage, or `n/a` when undefined.
#[must_use]
pub fn format_rate(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.1}%", v * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_metrics_derive_rates() {
        let model = ModelMetrics::SAMPLE;
        assert_eq!(model.total(), 465);
        let accuracy = model.accuracy().expect("non-empty matrix");
        assert!((accuracy - 450.0 / 465.0).abs() < 1e-12);
        assert!((model.recall().expect("positives") - 50.0 / 60.0).abs() < 1e-12);
        assert!((model.precision().expect("predicted") - 50.0 / 55.0).abs() < 1e-12);
    }

    #[test]
    fn empty_matrix_has_no_rates() {
        let empty = ModelMetrics {
            true_positives: 0,
            true_negatives: 0,
            false_positives: 0,
            false_negatives: 0,
        };
        assert_eq!(empty.accuracy(), None);
        assert_eq!(empty.recall(), None);
    }

    #[test]
    fn tiles_format_percentages() {
        let tiles = kpi_tiles(FleetMetrics::default(), ModelMetrics::default());
        let values: Vec<_> = tiles.iter().map(|tile| tile.value.as_str()).collect();
        assert_eq!(values, vec!["150", "25", "96.8%", "83.3%", "90.9%"]);
        assert!((FleetMetrics::SAMPLE.failure_rate().expect("machines") - 25.0 / 150.0).abs() < 1e-12);
    }

    #[test]
    fn model_copy_matches_the_kpi_strip() {
        let model = ModelMetrics::SAMPLE;
        let tiles = kpi_tiles(FleetMetrics::SAMPLE, model);
        assert_eq!(format_rate(model.accuracy()), tiles[2].value);
        assert_eq!(format_rate(model.recall()), tiles[3].value);
        assert_eq!(format_rate(None), "n/a");
    }
}

//! Hardcoded and generated chart datasets.
//!
//! # Design
//! - Uptime and failure-type values are fixed sample numbers.
//! - The probability scatter is simulated telemetry: it is regenerated on every
//!   build, so each visit to the model slide shows a fresh cloud of points.
//! - Randomness is injected through a seeded [`StdRng`] so tests stay deterministic.

use crate::core::config::ChartConfig;
use crate::core::theme::{AMBER, CRIMSON, ChartStyle, RUST, SAND, SEAFOAM, TEAL};
use crate::features::charts::labels::wrap_label;
use crate::features::charts::spec::{
    AxisLabel, AxisTitles, CategoryValue, ChartKind, ChartSpec, ChartTarget, ScatterPoint, Series,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound of the operating-hours axis.
pub const MAX_OPERATING_HOURS: f64 = 2_000.0;
/// Points generated for every failure probability scatter.
pub const SCATTER_POINTS: usize = 50;

const FAILURE_TYPES: [(&str, f64, &str); 5] = [
    ("Vibration Anomaly", 45.0, TEAL),
    ("Component Overheating", 38.0, SEAFOAM),
    ("Pressure Drop", 25.0, SAND),
    ("Bearing Wear", 21.0, AMBER),
    ("Software Glitch", 15.0, RUST),
];

/// Operational uptime doughnut (91% up, 9% down).
#[must_use]
pub fn uptime_donut(style: ChartStyle) -> ChartSpec {
    ChartSpec {
        target: ChartTarget::UptimeDonut,
        kind: ChartKind::Doughnut,
        dataset_label: "Operational Uptime",
        series: Series::Categories(vec![
            CategoryValue {
                label: AxisLabel::from("Uptime"),
                value: 91.0,
                color: TEAL,
            },
            CategoryValue {
                label: AxisLabel::from("Downtime"),
                value: 9.0,
                color: SAND,
            },
        ]),
        axes: AxisTitles::default(),
        style,
    }
}

/// Predicted incidents per failure type, labels wrapped at `wrap_width`.
#[must_use]
pub fn failure_types(style: ChartStyle, wrap_width: usize) -> ChartSpec {
    let values = FAILURE_TYPES
        .iter()
        .map(|(label, value, color)| CategoryValue {
            label: wrap_label(label, wrap_width),
            value: *value,
            color: *color,
        })
        .collect();
    ChartSpec {
        target: ChartTarget::FailureTypes,
        kind: ChartKind::Bar,
        dataset_label: "Predicted Incidents (Last 30 Days)",
        series: Series::Categories(values),
        axes: AxisTitles::default(),
        style,
    }
}

/// Generate `count` simulated machine readings sorted by operating hours.
///
/// The deck always asks for [`SCATTER_POINTS`].
///
/// `x` is uniform in `[0, 2000)` and `y = u1 * (x / 2000) * 0.8 + u2 * 0.2`,
/// which keeps every probability in `[0, 1]` while trending upward with age.
pub fn scatter_points<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ScatterPoint> {
    let mut points: Vec<ScatterPoint> = (0..count)
        .map(|_| {
            let x = rng.random::<f64>() * MAX_OPERATING_HOURS;
            let spread = rng.random::<f64>();
            let noise = rng.random::<f64>();
            ScatterPoint {
                x,
                y: spread * (x / MAX_OPERATING_HOURS) * 0.8 + noise * 0.2,
            }
        })
        .collect();
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    points
}

/// Failure probability versus operating hours scatter.
#[must_use]
pub fn failure_probability(style: ChartStyle, points: Vec<ScatterPoint>) -> ChartSpec {
    ChartSpec {
        target: ChartTarget::FailureProbability,
        kind: ChartKind::Scatter,
        dataset_label: "Machine Data Points",
        series: Series::Points {
            points,
            color: CRIMSON,
        },
        axes: AxisTitles {
            x: Some("Operating Hours"),
            y: Some("Failure Probability"),
        },
        style,
    }
}

/// Builds chart specs on demand, owning the scatter random source.
#[derive(Debug)]
pub struct DatasetFactory {
    rng: StdRng,
    config: ChartConfig,
    style: ChartStyle,
}

impl DatasetFactory {
    /// Factory seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64, config: ChartConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
            style: ChartStyle::dark(),
        }
    }

    /// Build the spec for `target`. Scatter data is regenerated every call.
    pub fn build(&mut self, target: ChartTarget) -> ChartSpec {
        match target {
            ChartTarget::UptimeDonut => uptime_donut(self.style),
            ChartTarget::FailureTypes => failure_types(self.style, self.config.label_wrap_width),
            ChartTarget::FailureProbability => {
                let points = scatter_points(&mut self.rng, SCATTER_POINTS);
                failure_probability(self.style, points)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_labels(spec: &ChartSpec) -> Vec<AxisLabel> {
        match &spec.series {
            Series::Categories(values) => values.iter().map(|v| v.label.clone()).collect(),
            Series::Points { .. } => Vec::new(),
        }
    }

    #[test]
    fn scatter_has_fifty_points_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = scatter_points(&mut rng, SCATTER_POINTS);
        assert_eq!(points.len(), 50);
        for point in &points {
            assert!((0.0..=MAX_OPERATING_HOURS).contains(&point.x));
            assert!((0.0..=1.0).contains(&point.y));
        }
        assert!(points.windows(2).all(|pair| pair[0].x <= pair[1].x));
    }

    #[test]
    fn scatter_regenerates_on_each_build() {
        let mut factory = DatasetFactory::seeded(42, ChartConfig::default());
        let first = factory.build(ChartTarget::FailureProbability);
        let second = factory.build(ChartTarget::FailureProbability);
        assert_eq!(first.series.len(), 50);
        assert_eq!(second.series.len(), 50);
        assert_ne!(first.series, second.series);
    }

    #[test]
    fn fixed_datasets_are_stable() {
        let mut factory = DatasetFactory::seeded(1, ChartConfig::default());
        assert_eq!(
            factory.build(ChartTarget::UptimeDonut),
            factory.build(ChartTarget::UptimeDonut)
        );
        let bars = factory.build(ChartTarget::FailureTypes);
        assert_eq!(bars.kind, ChartKind::Bar);
        assert_eq!(bars.series.len(), 5);
    }

    #[test]
    fn failure_labels_wrap_at_configured_width() {
        let spec = failure_types(ChartStyle::dark(), 16);
        let labels = category_labels(&spec);
        assert_eq!(
            labels[1],
            AxisLabel::Lines(vec!["Component".into(), "Overheating".into()])
        );
        assert_eq!(labels[2], AxisLabel::Single("Pressure Drop".into()));
        for label in &labels {
            assert!(label.lines().iter().all(|line| line.chars().count() <= 16));
        }
    }

    #[test]
    fn scatter_axes_are_titled() {
        let spec = failure_probability(ChartStyle::dark(), Vec::new());
        assert_eq!(spec.axes.x, Some("Operating Hours"));
        assert_eq!(spec.axes.y, Some("Failure Probability"));
        assert!(spec.series.is_empty());
    }
}

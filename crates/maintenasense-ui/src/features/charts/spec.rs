//! Chart descriptors handed to a rendering backend.

use crate::core::theme::ChartStyle;
use std::fmt;

/// Fixed chart mount points in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartTarget {
    /// Operational uptime doughnut.
    UptimeDonut,
    /// Predicted incidents by failure type.
    FailureTypes,
    /// Failure probability against operating hours.
    FailureProbability,
}

impl ChartTarget {
    /// DOM id of the canvas the chart mounts on.
    #[must_use]
    pub const fn canvas_id(self) -> &'static str {
        match self {
            Self::UptimeDonut => "uptimeChart",
            Self::FailureTypes => "failureTypesChart",
            Self::FailureProbability => "probabilityChart",
        }
    }
}

impl fmt::Display for ChartTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canvas_id())
    }
}

/// Chart rendering kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// Ring chart of category shares.
    Doughnut,
    /// Vertical bars per category.
    Bar,
    /// Free x/y points.
    Scatter,
}

/// Category label, possibly wrapped over several lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxisLabel {
    /// Label that fits on one line.
    Single(String),
    /// Label split into lines.
    Lines(Vec<String>),
}

impl AxisLabel {
    /// Lines to draw, top to bottom.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Single(text) => vec![text.as_str()],
            Self::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for AxisLabel {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

/// A labelled value in a categorical series.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryValue {
    /// Category label.
    pub label: AxisLabel,
    /// Value drawn for the category.
    pub value: f64,
    /// Fill color.
    pub color: &'static str,
}

/// A point on the scatter plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPoint {
    /// Operating hours.
    pub x: f64,
    /// Failure probability.
    pub y: f64,
}

/// Data bound to a chart.
#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    /// Category/value pairs for doughnut and bar charts.
    Categories(Vec<CategoryValue>),
    /// Points for scatter charts.
    Points {
        /// Plotted points, sorted by x.
        points: Vec<ScatterPoint>,
        /// Point fill color.
        color: &'static str,
    },
}

impl Series {
    /// Number of values or points.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Categories(values) => values.len(),
            Self::Points { points, .. } => points.len(),
        }
    }

    /// True when the series has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Optional axis titles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisTitles {
    /// Horizontal axis title.
    pub x: Option<&'static str>,
    /// Vertical axis title.
    pub y: Option<&'static str>,
}

/// Everything a backend needs to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    /// Mount point.
    pub target: ChartTarget,
    /// Chart kind.
    pub kind: ChartKind,
    /// Dataset label shown in the legend.
    pub dataset_label: &'static str,
    /// Bound data.
    pub series: Series,
    /// Axis titles, if any.
    pub axes: AxisTitles,
    /// Colors and fonts.
    pub style: ChartStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_ids_are_distinct() {
        let ids: Vec<_> = [
            ChartTarget::UptimeDonut,
            ChartTarget::FailureTypes,
            ChartTarget::FailureProbability,
        ]
        .iter()
        .map(|t| t.canvas_id())
        .collect();
        assert_eq!(ids, vec!["uptimeChart", "failureTypesChart", "probabilityChart"]);
    }

    #[test]
    fn axis_label_lines() {
        assert_eq!(AxisLabel::from("Uptime").lines(), vec!["Uptime"]);
        let wrapped = AxisLabel::Lines(vec!["Bearing".into(), "Wear".into()]);
        assert_eq!(wrapped.lines(), vec!["Bearing", "Wear"]);
    }
}

//! Axis label wrapping and tooltip titles.

use crate::features::charts::spec::{AxisLabel, ScatterPoint};

/// Wrap `label` into lines of at most `max_width` characters.
///
/// Labels that already fit are returned unchanged as [`AxisLabel::Single`].
/// Longer labels are split greedily on spaces; a word wider than
/// `max_width` gets a line of its own.
#[must_use]
pub fn wrap_label(label: &str, max_width: usize) -> AxisLabel {
    if label.chars().count() <= max_width {
        return AxisLabel::Single(label.to_string());
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in label.split(' ').filter(|word| !word.is_empty()) {
        let candidate = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if candidate > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        return AxisLabel::Single(label.trim().to_string());
    }
    AxisLabel::Lines(lines)
}

/// Tooltip title for a category label; wrapped lines are joined with spaces.
#[must_use]
pub fn tooltip_title(label: &AxisLabel) -> String {
    match label {
        AxisLabel::Single(text) => text.clone(),
        AxisLabel::Lines(lines) => lines.join(" "),
    }
}

/// Tooltip for one scatter point, e.g. `Machine Data Points: (1250 h, 0.62)`.
#[must_use]
pub fn point_tooltip(dataset_label: &str, point: ScatterPoint) -> String {
    format!("{dataset_label}: ({:.0} h, {:.2})", point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_pass_through() {
        assert_eq!(
            wrap_label("Pressure Drop", 16),
            AxisLabel::Single("Pressure Drop".into())
        );
        assert_eq!(
            wrap_label("Exactly sixteen!", 16),
            AxisLabel::Single("Exactly sixteen!".into())
        );
    }

    #[test]
    fn long_labels_split_on_spaces() {
        assert_eq!(
            wrap_label("Component Overheating", 16),
            AxisLabel::Lines(vec!["Component".into(), "Overheating".into()])
        );
        assert_eq!(
            wrap_label("Vibration Anomaly", 16),
            AxisLabel::Lines(vec!["Vibration".into(), "Anomaly".into()])
        );
    }

    #[test]
    fn greedy_packing_fills_lines() {
        assert_eq!(
            wrap_label("a bb ccc dddd eeeee", 8),
            AxisLabel::Lines(vec!["a bb ccc".into(), "dddd".into(), "eeeee".into()])
        );
    }

    #[test]
    fn oversized_words_take_their_own_line() {
        assert_eq!(
            wrap_label("Electromechanical fault", 10),
            AxisLabel::Lines(vec!["Electromechanical".into(), "fault".into()])
        );
    }

    #[test]
    fn every_wrapped_line_fits_unless_single_word() {
        let label = "Predicted incidents over the last thirty days per site";
        let AxisLabel::Lines(lines) = wrap_label(label, 12) else {
            panic!("label should wrap");
        };
        assert!(lines.iter().all(|line| line.chars().count() <= 12));
        assert_eq!(lines.join(" "), label);
    }

    #[test]
    fn blank_labels_stay_single() {
        assert_eq!(wrap_label("    ", 2), AxisLabel::Single(String::new()));
        assert_eq!(wrap_label("", 2), AxisLabel::Single(String::new()));
    }

    #[test]
    fn point_tooltip_rounds_hours_and_probability() {
        let point = ScatterPoint {
            x: 1_249.6,
            y: 0.617,
        };
        assert_eq!(
            point_tooltip("Machine Data Points", point),
            "Machine Data Points: (1250 h, 0.62)"
        );
    }

    #[test]
    fn tooltip_joins_lines() {
        let wrapped = wrap_label("Component Overheating", 16);
        assert_eq!(tooltip_title(&wrapped), "Component Overheating");
        assert_eq!(tooltip_title(&AxisLabel::from("Uptime")), "Uptime");
    }
}

//! DOM-free chart geometry: plot areas, linear scales, ticks, arcs and bands.
//!
//! The canvas backend and its hover hit-testing both read from here, so a
//! tooltip always matches what was drawn.

use crate::features::charts::spec::{ChartKind, ScatterPoint};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Height reserved above the plot for the legend row.
pub const LEGEND_HEIGHT: f64 = 28.0;
/// Radius of a scatter marker; hovering within it selects the point.
pub const POINT_RADIUS: f64 = 4.0;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shrink by per-side insets, clamping to a zero-sized rectangle.
    #[must_use]
    pub fn inset(&self, insets: Insets) -> Self {
        let width = (self.width - insets.left - insets.right).max(0.0);
        let height = (self.height - insets.top - insets.bottom).max(0.0);
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width,
            height,
        }
    }
}

/// Per-side padding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    /// Top padding.
    pub top: f64,
    /// Right padding.
    pub right: f64,
    /// Bottom padding.
    pub bottom: f64,
    /// Left padding.
    pub left: f64,
}

/// Plot area for a chart of `kind` drawn on a `width` x `height` canvas.
///
/// The legend row sits above the returned rectangle; bar and scatter charts
/// also leave room for tick labels and axis titles.
#[must_use]
pub fn plot_area(kind: ChartKind, width: f64, height: f64) -> Rect {
    let frame = Rect {
        x: 0.0,
        y: LEGEND_HEIGHT,
        width,
        height: (height - LEGEND_HEIGHT).max(0.0),
    };
    let insets = match kind {
        ChartKind::Doughnut => Insets {
            top: 8.0,
            right: 8.0,
            bottom: 8.0,
            left: 8.0,
        },
        ChartKind::Bar => Insets {
            top: 8.0,
            right: 12.0,
            bottom: 44.0,
            left: 44.0,
        },
        ChartKind::Scatter => Insets {
            top: 8.0,
            right: 16.0,
            bottom: 48.0,
            left: 60.0,
        },
    };
    frame.inset(insets)
}

/// Center plus outer and inner radius of a doughnut filling `area`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Center point.
    pub center: (f64, f64),
    /// Outer radius.
    pub outer: f64,
    /// Inner (cutout) radius.
    pub inner: f64,
}

impl Ring {
    /// Largest ring that fits in `area`, with a cutout of `cutout` times the outer radius.
    #[must_use]
    pub fn fit(area: Rect, cutout: f64) -> Self {
        let outer = area.width.min(area.height) / 2.0;
        Self {
            center: area.center(),
            outer,
            inner: outer * cutout.clamp(0.0, 1.0),
        }
    }
}

/// Maps a data domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Scale from `domain` onto `range`. A zero-width domain maps to the range start.
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Pixel position of `value`.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < f64::EPSILON {
            return r0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }
}

const STEP_TOLERANCE: f64 = 1e-9;

/// Round `value` to 1, 2, 5 or 10 times a power of ten.
fn nice_step(value: f64) -> f64 {
    let exponent = value.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = value / magnitude;
    let nice = if fraction <= 1.0 + STEP_TOLERANCE {
        1.0
    } else if fraction <= 2.0 + STEP_TOLERANCE {
        2.0
    } else if fraction <= 5.0 + STEP_TOLERANCE {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Evenly spaced "nice" ticks covering `[min, max]`, starting at or below `min`.
///
/// Returns a single tick when the range is empty or not finite.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, target_count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || target_count < 2 {
        return vec![min];
    }
    let step = nice_step((max - min) / (target_count - 1) as f64);
    let start = (min / step).floor() * step;
    let mut ticks = Vec::new();
    let mut index = 0.0;
    loop {
        let tick = start + index * step;
        ticks.push(tick);
        if tick >= max - step * 1e-9 {
            break;
        }
        index += 1.0;
    }
    ticks
}

/// One doughnut segment, in radians measured clockwise from 3 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    /// Start angle.
    pub start: f64,
    /// End angle.
    pub end: f64,
}

impl ArcSegment {
    /// Angular sweep.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Doughnut segments starting at 12 o'clock, sweeps proportional to `values`.
///
/// Negative values count as zero; an all-zero input yields zero-sweep segments.
#[must_use]
pub fn doughnut_arcs(values: &[f64]) -> Vec<ArcSegment> {
    let total: f64 = values.iter().map(|value| value.max(0.0)).sum();
    let mut cursor = -FRAC_PI_2;
    values
        .iter()
        .map(|value| {
            let sweep = if total > 0.0 {
                value.max(0.0) / total * TAU
            } else {
                0.0
            };
            let segment = ArcSegment {
                start: cursor,
                end: cursor + sweep,
            };
            cursor += sweep;
            segment
        })
        .collect()
}

/// Index of the segment under `point`, if the point lies on the ring.
#[must_use]
pub fn segment_at(arcs: &[ArcSegment], ring: Ring, point: (f64, f64)) -> Option<usize> {
    let dx = point.0 - ring.center.0;
    let dy = point.1 - ring.center.1;
    let distance = dx.hypot(dy);
    if distance < ring.inner || distance > ring.outer {
        return None;
    }
    let mut angle = dy.atan2(dx);
    if angle < -FRAC_PI_2 {
        angle += TAU;
    }
    arcs.iter()
        .position(|arc| arc.sweep() > 0.0 && angle >= arc.start && angle < arc.end)
}

/// Horizontal band for one bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// Left edge of the bar.
    pub x: f64,
    /// Bar width.
    pub width: f64,
    /// Center of the category slot, used for labels.
    pub center: f64,
}

/// Split `area` into `count` equal slots; each bar fills `fill_ratio` of its slot.
#[must_use]
pub fn bands(count: usize, area: Rect, fill_ratio: f64) -> Vec<Band> {
    if count == 0 {
        return Vec::new();
    }
    let slot = area.width / count as f64;
    let width = slot * fill_ratio.clamp(0.0, 1.0);
    (0..count)
        .map(|index| {
            let center = area.x + slot * (index as f64 + 0.5);
            Band {
                x: center - width / 2.0,
                width,
                center,
            }
        })
        .collect()
}

/// Index of the band whose bar covers horizontal position `x`.
#[must_use]
pub fn band_at(bands: &[Band], x: f64) -> Option<usize> {
    bands
        .iter()
        .position(|band| x >= band.x && x <= band.x + band.width)
}

/// Pixel scales for a scatter over `[0, x_max] x [0, y_max]`, y growing upward.
#[must_use]
pub const fn scatter_scales(area: Rect, x_max: f64, y_max: f64) -> (LinearScale, LinearScale) {
    (
        LinearScale::new((0.0, x_max), (area.x, area.x + area.width)),
        LinearScale::new((0.0, y_max), (area.y + area.height, area.y)),
    )
}

/// Index of the point nearest to `cursor`, if its marker is within `radius` pixels.
#[must_use]
pub fn point_at(
    points: &[ScatterPoint],
    scales: (LinearScale, LinearScale),
    cursor: (f64, f64),
    radius: f64,
) -> Option<usize> {
    let (x, y) = scales;
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let distance = (x.map(point.x) - cursor.0).hypot(y.map(point.y) - cursor.1);
            (index, distance)
        })
        .filter(|(_, distance)| *distance <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

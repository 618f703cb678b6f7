//! Brand palette and chart styling tokens for the MaintenaSense deck.

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the shade (e.g., "teal").
    pub name: &'static str,
    /// Hex RGB value for the shade.
    pub hex: &'static str,
}

/// Collection of related tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier.
    pub id: &'static str,
    /// Ordered list of shades.
    pub shades: &'static [ColorToken],
}

impl Palette {
    /// Look up a shade by name.
    #[must_use]
    pub fn shade(&self, name: &str) -> Option<&'static str> {
        self.shades
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.hex)
    }
}

/// Deep teal used for brand surfaces and hover states.
pub const DEEP_TEAL: &str = "#005f73";
/// Primary accent teal.
pub const TEAL: &str = "#0a9396";
/// Soft seafoam used for headings.
pub const SEAFOAM: &str = "#94d2bd";
/// Sand highlight.
pub const SAND: &str = "#e9d8a6";
/// Amber warning accent.
pub const AMBER: &str = "#ee9b00";
/// Rust accent for secondary emphasis.
pub const RUST: &str = "#ca6702";
/// Crimson used for failure states.
pub const CRIMSON: &str = "#ae2012";

/// Brand palette in chart series order.
pub const BRAND: Palette = Palette {
    id: "brand",
    shades: &[
        ColorToken {
            name: "teal",
            hex: TEAL,
        },
        ColorToken {
            name: "seafoam",
            hex: SEAFOAM,
        },
        ColorToken {
            name: "sand",
            hex: SAND,
        },
        ColorToken {
            name: "amber",
            hex: AMBER,
        },
        ColorToken {
            name: "rust",
            hex: RUST,
        },
        ColorToken {
            name: "crimson",
            hex: CRIMSON,
        },
        ColorToken {
            name: "deep-teal",
            hex: DEEP_TEAL,
        },
    ],
};

/// Slate neutrals backing the dark deck surfaces.
pub const SLATE: Palette = Palette {
    id: "slate",
    shades: &[
        ColorToken {
            name: "300",
            hex: "#cbd5e1",
        },
        ColorToken {
            name: "400",
            hex: "#94a3b8",
        },
        ColorToken {
            name: "700",
            hex: "#334155",
        },
        ColorToken {
            name: "800",
            hex: "#1e293b",
        },
        ColorToken {
            name: "950",
            hex: "#020617",
        },
    ],
};

/// Colors and fonts handed to the chart renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartStyle {
    /// Legend label color.
    pub legend_text: &'static str,
    /// Axis tick and axis title color.
    pub tick_text: &'static str,
    /// Horizontal grid line color.
    pub grid: &'static str,
    /// Border drawn around bars and doughnut segments.
    pub border: &'static str,
    /// CSS font family for all chart text.
    pub font_family: &'static str,
}

impl ChartStyle {
    /// Dark deck style used on every slide.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            legend_text: "#cbd5e1",
            tick_text: "#94a3b8",
            grid: "#334155",
            border: "#1e293b",
            font_family: "Inter, sans-serif",
        }
    }

    /// Canvas font shorthand at the given pixel size.
    #[must_use]
    pub fn font(&self, px: u8) -> String {
        format!("{px}px {}", self.font_family)
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_palette_lists_series_colors_in_order() {
        assert_eq!(BRAND.shades.len(), 7);
        assert_eq!(BRAND.shades[0].hex, TEAL);
        assert_eq!(BRAND.shade("crimson"), Some(CRIMSON));
        assert_eq!(BRAND.shade("missing"), None);
    }

    #[test]
    fn chart_font_uses_family() {
        let style = ChartStyle::dark();
        assert_eq!(style.font(12), "12px Inter, sans-serif");
        assert_eq!(SLATE.shade("800"), Some(style.border));
    }
}

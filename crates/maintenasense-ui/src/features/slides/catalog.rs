//! Ordered slide catalog.

use crate::core::theme::{AMBER, DEEP_TEAL, RUST, SAND, SEAFOAM, TEAL};
use crate::features::charts::spec::ChartTarget;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stable slide identifiers in navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlideId {
    /// Title slide.
    Overview,
    /// Problem statement.
    Problem,
    /// Proposed solution and use case.
    Solution,
    /// Data lake architecture diagram.
    Architecture,
    /// Predictive model outcomes.
    Model,
    /// KPI dashboard and live prediction demo.
    Dashboard,
    /// Cybersecurity strategy.
    Cybersecurity,
    /// Future improvements.
    Future,
}

impl SlideId {
    /// String identifier used in markup and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Problem => "problem",
            Self::Solution => "solution",
            Self::Architecture => "architecture",
            Self::Model => "model",
            Self::Dashboard => "dashboard",
            Self::Cybersecurity => "cybersecurity",
            Self::Future => "future",
        }
    }

    /// Chart mount targets rendered on this slide.
    #[must_use]
    pub const fn chart_targets(self) -> &'static [ChartTarget] {
        match self {
            Self::Model => &[ChartTarget::UptimeDonut, ChartTarget::FailureProbability],
            Self::Dashboard => &[ChartTarget::FailureTypes],
            Self::Overview
            | Self::Problem
            | Self::Solution
            | Self::Architecture
            | Self::Cybersecurity
            | Self::Future => &[],
        }
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a slide id cannot be rendered.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SlideError {
    /// The id does not name any slide in the catalog.
    #[error("unknown slide id `{id}`")]
    UnknownSlide {
        /// Offending id.
        id: String,
    },
}

impl FromStr for SlideId {
    type Err = SlideError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SLIDES
            .iter()
            .map(|slide| slide.id)
            .find(|id| id.as_str() == value)
            .ok_or_else(|| SlideError::UnknownSlide {
                id: value.to_string(),
            })
    }
}

/// Lucide icons used across the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideIcon {
    /// Sparkles.
    Sparkles,
    /// Wrench.
    Wrench,
    /// Shield.
    Shield,
    /// Cog.
    Cog,
    /// Flask.
    FlaskConical,
    /// Gauge.
    GaugeCircle,
    /// Sprout.
    Sprout,
    /// Hard hat.
    HardHat,
}

impl SlideIcon {
    /// Lucide icon name.
    #[must_use]
    pub const fn lucide_name(self) -> &'static str {
        match self {
            Self::Sparkles => "sparkles",
            Self::Wrench => "wrench",
            Self::Shield => "shield",
            Self::Cog => "cog",
            Self::FlaskConical => "flask-conical",
            Self::GaugeCircle => "gauge-circle",
            Self::Sprout => "sprout",
            Self::HardHat => "hard-hat",
        }
    }

    /// Iconify CSS class (e.g. `lucide--sparkles`).
    #[must_use]
    pub fn icon_tag(self) -> String {
        format!("lucide--{}", self.lucide_name())
    }
}

/// Immutable slide metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideDescriptor {
    /// Unique slide id.
    pub id: SlideId,
    /// Title shown in the footer.
    pub title: &'static str,
    /// Slide icon.
    pub icon: SlideIcon,
    /// Accent color applied to the icon.
    pub accent: &'static str,
}

/// The deck, in navigation order.
pub const SLIDES: [SlideDescriptor; 8] = [
    SlideDescriptor {
        id: SlideId::Overview,
        title: "Project Overview",
        icon: SlideIcon::Sparkles,
        accent: SEAFOAM,
    },
    SlideDescriptor {
        id: SlideId::Problem,
        title: "Problem Statement",
        icon: SlideIcon::Wrench,
        accent: AMBER,
    },
    SlideDescriptor {
        id: SlideId::Solution,
        title: "Proposed Solution",
        icon: SlideIcon::Shield,
        accent: TEAL,
    },
    SlideDescriptor {
        id: SlideId::Architecture,
        title: "Data Architecture",
        icon: SlideIcon::Cog,
        accent: RUST,
    },
    SlideDescriptor {
        id: SlideId::Model,
        title: "Predictive Model",
        icon: SlideIcon::FlaskConical,
        accent: SEAFOAM,
    },
    SlideDescriptor {
        id: SlideId::Dashboard,
        title: "KPI Dashboard",
        icon: SlideIcon::GaugeCircle,
        accent: SAND,
    },
    SlideDescriptor {
        id: SlideId::Cybersecurity,
        title: "Cybersecurity",
        icon: SlideIcon::Shield,
        accent: TEAL,
    },
    SlideDescriptor {
        id: SlideId::Future,
        title: "Future Improvements",
        icon: SlideIcon::Sprout,
        accent: DEEP_TEAL,
    },
];

/// Descriptor at a navigation index, if in range.
#[must_use]
pub fn descriptor_at(index: usize) -> Option<&'static SlideDescriptor> {
    SLIDES.get(index)
}

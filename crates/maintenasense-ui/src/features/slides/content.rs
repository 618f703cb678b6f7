//! Static slide bodies.

use crate::components::icon::LucideIcon;
use crate::core::config::DeckConfig;
use crate::core::theme::{AMBER, CRIMSON, RUST, SAND, SEAFOAM, TEAL};
use crate::features::charts::spec::ChartTarget;
use crate::features::charts::view::ChartCanvas;
use crate::features::prediction::view::PredictionPanel;
use crate::features::slides::catalog::{SlideIcon, SlideId};
use crate::models::{FleetMetrics, ModelMetrics, format_rate, kpi_tiles};
use yew::prelude::*;

/// A titled card with an icon, used by several slides.
struct Feature {
    icon: SlideIcon,
    accent: &'static str,
    title: &'static str,
    body: &'static str,
}

static PIPELINE: [Feature; 4] = [
    Feature {
        icon: SlideIcon::Wrench,
        accent: RUST,
        title: "Sensors & Data Collection",
        body: "IoT devices, Operational systems",
    },
    Feature {
        icon: SlideIcon::Shield,
        accent: SEAFOAM,
        title: "Secure Data Lake",
        body: "Centralized storage, Scalable",
    },
    Feature {
        icon: SlideIcon::FlaskConical,
        accent: SAND,
        title: "Predictive Analytics",
        body: "Machine learning models, Insights",
    },
    Feature {
        icon: SlideIcon::Sprout,
        accent: TEAL,
        title: "Actionable Insights",
        body: "Real-time dashboard, Reporting",
    },
];

static SECURITY: [Feature; 4] = [
    Feature {
        icon: SlideIcon::Shield,
        accent: SEAFOAM,
        title: "Secure Ingestion",
        body: "Encrypt data in transit from sensors to prevent interception.",
    },
    Feature {
        icon: SlideIcon::HardHat,
        accent: AMBER,
        title: "Access Control",
        body: "Implement role-based access to limit data views to authorized personnel.",
    },
    Feature {
        icon: SlideIcon::Cog,
        accent: RUST,
        title: "Data Masking",
        body: "Anonymize or mask sensitive data to protect privacy and proprietary information.",
    },
    Feature {
        icon: SlideIcon::Wrench,
        accent: CRIMSON,
        title: "Continuous Monitoring",
        body: "Actively monitor logs and network traffic for suspicious activities.",
    },
];

static ROADMAP: [Feature; 4] = [
    Feature {
        icon: SlideIcon::HardHat,
        accent: TEAL,
        title: "Edge Computing & IoT Integration",
        body: "Deploying our models directly on edge devices to enable real-time predictions at the source of the data.",
    },
    Feature {
        icon: SlideIcon::Shield,
        accent: AMBER,
        title: "Blockchain for Data Integrity",
        body: "Using blockchain to create an immutable ledger for operational data, ensuring trust and traceability.",
    },
    Feature {
        icon: SlideIcon::FlaskConical,
        accent: SEAFOAM,
        title: "Advanced Time-Series Models",
        body: "Exploring more advanced models like LSTMs to capture complex time-based relationships in the data.",
    },
    Feature {
        icon: SlideIcon::Sprout,
        accent: RUST,
        title: "Automated Alerting",
        body: "Implementing an automated notification system to alert maintenance teams via email or SMS of high-priority failures.",
    },
];

pub(crate) fn render(id: SlideId, config: &DeckConfig) -> Html {
    match id {
        SlideId::Overview => overview(),
        SlideId::Problem => problem(),
        SlideId::Solution => solution(),
        SlideId::Architecture => architecture(),
        SlideId::Model => model(),
        SlideId::Dashboard => dashboard(config),
        SlideId::Cybersecurity => cybersecurity(),
        SlideId::Future => future(),
    }
}

fn overview() -> Html {
    html! {
        <section class="slide centered">
            <h1 class="hero pulse">{"MAINTENASENSE"}</h1>
            <p class="lead">{"AI-Powered Predictive Maintenance Platform"}</p>
            <p class="body">
                {"This project enhances manufacturing operations using advanced data analytics. \
                  By integrating technologies like edge computing and blockchain, the project \
                  improves efficiency and reduces operational bottlenecks."}
            </p>
        </section>
    }
}

fn problem() -> Html {
    html! {
        <section class="slide centered">
            <h2>{"Problem Statement"}</h2>
            <p class="body">
                {"Manufacturing firms struggle to collect and analyze data effectively, leading to \
                  inefficiencies, costly downtime, and low ROI on machinery. This reactive approach \
                  is inefficient and unreliable."}
            </p>
            <div class="card stat accent-top" style={format!("border-color: {AMBER}")}>
                <p class="figure" style={format!("color: {RUST}")}>{"42%"}</p>
                <p class="figure-caption">{"of equipment failures are preventable."}</p>
            </div>
        </section>
    }
}

fn solution() -> Html {
    html! {
        <section class="slide centered">
            <h2>{"Proposed Solution with Use Case"}</h2>
            <p class="body">
                {"Our project provides a comprehensive data analytics framework for manufacturing, \
                  using real-time operational data to predict potential machine failures before \
                  they occur."}
            </p>
            <div class="card stat">
                <h3 style={format!("color: {TEAL}")}>{"Use Case: A Manufacturing Plant"}</h3>
                <p class="muted">
                    {"By implementing our predictive maintenance solution, a manufacturing plant can \
                      shift from a reactive to a proactive strategy."}
                </p>
                <p class="small">{"A proven use case shows a"}</p>
                <p class="figure" style={format!("color: {TEAL}")}>{"30%"}</p>
                <p class="figure-caption">{"Reduction in Machine Downtime"}</p>
            </div>
        </section>
    }
}

fn architecture() -> Html {
    let last = PIPELINE.len() - 1;
    html! {
        <section class="slide centered">
            <h2>{"Data Lake Architecture Diagram"}</h2>
            <p class="body">
                {"The system is built on a modern data lake architecture, ensuring a scalable and \
                  flexible flow of information from the factory floor to actionable insights."}
            </p>
            <div class="pipeline">
                {for PIPELINE.iter().enumerate().map(|(index, stage)| html! {
                    <>
                        <div class="card stage" style={format!("border-top-color: {}", stage.accent)}>
                            <LucideIcon icon={stage.icon} class="size-12" color={Some(stage.accent)} />
                            <p class="stage-title">{stage.title}</p>
                            <p class="small muted">{stage.body}</p>
                        </div>
                        if index < last {
                            <span class="iconify lucide--arrow-right pipeline-arrow" aria-hidden="true" />
                        }
                    </>
                })}
            </div>
        </section>
    }
}

fn model() -> Html {
    let metrics = ModelMetrics::SAMPLE;
    let accuracy = format!("{} accuracy", format_rate(metrics.accuracy()));
    let recall = format!("{} recall rate", format_rate(metrics.recall()));
    html! {
        <section class="slide centered">
            <h2>{"Predictive Model Outcomes"}</h2>
            <div class="grid two">
                <div class="card accent-top" style={format!("border-top-color: {SEAFOAM}")}>
                    <h3>{"Model Accuracy and Recall"}</h3>
                    <p class="muted">
                        {"Our model achieves a "}<strong>{accuracy}</strong>
                        {" in identifying machine states and a "}<strong>{recall}</strong>
                        {" for failure detection."}
                    </p>
                    <ChartCanvas target={ChartTarget::UptimeDonut} label="Operational uptime" />
                </div>
                <div class="card accent-top" style={format!("border-top-color: {CRIMSON}")}>
                    <h3>{"Failure Probability vs. Operating Hours"}</h3>
                    <ChartCanvas
                        target={ChartTarget::FailureProbability}
                        label="Failure probability against operating hours"
                    />
                </div>
            </div>
        </section>
    }
}

fn dashboard(config: &DeckConfig) -> Html {
    let tiles = kpi_tiles(FleetMetrics::default(), ModelMetrics::default());
    html! {
        <section class="slide">
            <h2>{"KPI Dashboard & Live Demo"}</h2>
            <p class="body">
                {"The interactive dashboard gives you a clear view of key performance indicators \
                  and a live demonstration of the prediction engine."}
            </p>
            <div class="kpi-strip">
                {for tiles.into_iter().map(|tile| html! {
                    <div class="card kpi">
                        <p class="kpi-value">{tile.value}</p>
                        <p class="small muted">{tile.label}</p>
                    </div>
                })}
            </div>
            <div class="grid two">
                <div class="card accent-top" style={format!("border-top-color: {AMBER}")}>
                    <h3>{"Predicted Incidents by Failure Type"}</h3>
                    <ChartCanvas target={ChartTarget::FailureTypes} label="Predicted incidents by failure type" />
                </div>
                <PredictionPanel config={config.prediction.clone()} />
            </div>
        </section>
    }
}

fn cybersecurity() -> Html {
    html! {
        <section class="slide centered">
            <h2>{"Cybersecurity Strategy"}</h2>
            <p class="body">
                {"A comprehensive cybersecurity plan ensures the integrity and confidentiality of \
                  sensitive operational data throughout the data lifecycle."}
            </p>
            <div class="grid four">
                {for SECURITY.iter().map(|item| html! {
                    <div class="card feature accent-bottom" style={format!("border-bottom-color: {}", item.accent)}>
                        <LucideIcon icon={item.icon} class="size-16" color={Some(item.accent)} />
                        <h3>{item.title}</h3>
                        <p class="muted">{item.body}</p>
                    </div>
                })}
            </div>
        </section>
    }
}

fn future() -> Html {
    html! {
        <section class="slide centered">
            <h2>{"Future Improvements"}</h2>
            <p class="body">
                {"Our project is a foundation for further innovation in manufacturing analytics."}
            </p>
            <div class="grid two">
                {for ROADMAP.iter().map(|item| html! {
                    <div class="card roadmap accent-left" style={format!("border-left-color: {}", item.accent)}>
                        <div class="icon-badge">
                            <LucideIcon icon={item.icon} class="size-10" color={Some(item.accent)} />
                        </div>
                        <div>
                            <h3>{item.title}</h3>
                            <p class="muted">{item.body}</p>
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}

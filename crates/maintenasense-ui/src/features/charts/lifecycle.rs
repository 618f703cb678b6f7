//! Chart lifecycle: scoped acquisition and guaranteed release of chart handles.
//!
//! # Design
//! - A [`ChartScope`] owns the handles for one active slide and disposes them on drop.
//! - [`ChartLifecycle::activate`] releases the previous scope before mounting, so a
//!   mount point never has two live handles.
//! - Backends are swappable: the browser draws on canvas, tests record calls.

use crate::features::charts::datasets::DatasetFactory;
use crate::features::charts::spec::{ChartSpec, ChartTarget};
use crate::features::slides::catalog::SlideId;
use std::fmt;
use thiserror::Error;

/// Failures reported by a chart backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The mount element is not in the document.
    #[error("chart mount `{canvas_id}` not found")]
    MountMissing {
        /// Canvas id that was looked up.
        canvas_id: &'static str,
    },
    /// The backend could not create a drawing context or draw the chart.
    #[error("chart `{canvas_id}` failed to render: {message}")]
    Render {
        /// Canvas id of the failing chart.
        canvas_id: &'static str,
        /// Backend detail.
        message: String,
    },
}

/// A live chart widget that must be disposed explicitly.
pub trait ChartHandle {
    /// Release the widget's resources. Called exactly once per handle.
    fn dispose(&mut self);
}

/// Creates chart widgets from specs.
pub trait ChartBackend {
    /// Handle type returned for each mounted chart.
    type Handle: ChartHandle;

    /// Mount a chart described by `spec` on its target.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError`] when the target is missing or drawing fails.
    fn mount(&mut self, spec: &ChartSpec) -> Result<Self::Handle, ChartError>;
}

/// Handles acquired for one active slide; released on drop.
pub struct ChartScope<H: ChartHandle> {
    slide: SlideId,
    handles: Vec<(ChartTarget, H)>,
}

impl<H: ChartHandle> ChartScope<H> {
    fn new(slide: SlideId) -> Self {
        Self {
            slide,
            handles: Vec::new(),
        }
    }

    /// Slide that owns this scope.
    #[must_use]
    pub const fn slide(&self) -> SlideId {
        self.slide
    }

    /// Targets with a live handle.
    #[must_use]
    pub fn targets(&self) -> Vec<ChartTarget> {
        self.handles.iter().map(|(target, _)| *target).collect()
    }

    fn release_all(&mut self) -> usize {
        let released = self.handles.len();
        for (_, handle) in &mut self.handles {
            handle.dispose();
        }
        self.handles.clear();
        released
    }
}

impl<H: ChartHandle> Drop for ChartScope<H> {
    fn drop(&mut self) {
        self.release_all();
    }
}

/// Outcome of activating a slide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MountReport {
    /// Handles released from the previous slide.
    pub released: usize,
    /// Targets mounted for the new slide.
    pub mounted: Vec<ChartTarget>,
    /// Targets that failed to mount.
    pub failed: Vec<(ChartTarget, ChartError)>,
}

/// Owns every chart handle in the deck.
pub struct ChartLifecycle<B: ChartBackend> {
    backend: B,
    datasets: DatasetFactory,
    scope: Option<ChartScope<B::Handle>>,
}

impl<B: ChartBackend> ChartLifecycle<B> {
    /// Manager with no live charts.
    #[must_use]
    pub const fn new(backend: B, datasets: DatasetFactory) -> Self {
        Self {
            backend,
            datasets,
            scope: None,
        }
    }

    /// Release the previous slide's charts and mount the charts of `slide`.
    ///
    /// Scatter data is regenerated on every call. A failing target is reported
    /// and skipped; the remaining targets still mount.
    pub fn activate(&mut self, slide: SlideId) -> MountReport {
        let released = self.teardown();
        let mut scope = ChartScope::new(slide);
        let mut report = MountReport {
            released,
            ..MountReport::default()
        };
        for &target in slide.chart_targets() {
            let spec = self.datasets.build(target);
            match self.backend.mount(&spec) {
                Ok(handle) => {
                    scope.handles.push((target, handle));
                    report.mounted.push(target);
                }
                Err(err) => report.failed.push((target, err)),
            }
        }
        self.scope = Some(scope);
        report
    }

    /// Dispose every live handle. Returns how many were released.
    pub fn teardown(&mut self) -> usize {
        self.scope
            .take()
            .map_or(0, |mut scope| scope.release_all())
    }

    /// Slide whose charts are live, if any.
    #[must_use]
    pub fn active_slide(&self) -> Option<SlideId> {
        self.scope.as_ref().map(ChartScope::slide)
    }

    /// Targets with a live handle.
    #[must_use]
    pub fn live_targets(&self) -> Vec<ChartTarget> {
        self.scope.as_ref().map(ChartScope::targets).unwrap_or_default()
    }

    /// Backend, for inspection.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChartBackend> fmt::Debug for ChartLifecycle<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartLifecycle")
            .field("active_slide", &self.active_slide())
            .field("live_targets", &self.live_targets())
            .finish_non_exhaustive()
    }
}

impl<B: ChartBackend> Drop for ChartLifecycle<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ChartConfig;
    use crate::features::charts::spec::Series;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct Ledger {
        live: BTreeMap<ChartTarget, usize>,
        mounts: usize,
        disposals: usize,
        max_live_per_target: usize,
        scatter_sizes: Vec<usize>,
    }

    struct RecordingHandle {
        target: ChartTarget,
        ledger: Rc<RefCell<Ledger>>,
        disposed: bool,
    }

    impl ChartHandle for RecordingHandle {
        fn dispose(&mut self) {
            assert!(!self.disposed, "handle disposed twice");
            self.disposed = true;
            let mut ledger = self.ledger.borrow_mut();
            ledger.disposals += 1;
            if let Some(count) = ledger.live.get_mut(&self.target) {
                *count -= 1;
            }
        }
    }

    struct RecordingBackend {
        ledger: Rc<RefCell<Ledger>>,
        missing: Vec<ChartTarget>,
    }

    impl ChartBackend for RecordingBackend {
        type Handle = RecordingHandle;

        fn mount(&mut self, spec: &ChartSpec) -> Result<RecordingHandle, ChartError> {
            if self.missing.contains(&spec.target) {
                return Err(ChartError::MountMissing {
                    canvas_id: spec.target.canvas_id(),
                });
            }
            let mut ledger = self.ledger.borrow_mut();
            ledger.mounts += 1;
            if let Series::Points { points, .. } = &spec.series {
                ledger.scatter_sizes.push(points.len());
            }
            let live = ledger.live.entry(spec.target).or_default();
            *live += 1;
            let live = *live;
            ledger.max_live_per_target = ledger.max_live_per_target.max(live);
            Ok(RecordingHandle {
                target: spec.target,
                ledger: Rc::clone(&self.ledger),
                disposed: false,
            })
        }
    }

    fn manager(missing: Vec<ChartTarget>) -> (ChartLifecycle<RecordingBackend>, Rc<RefCell<Ledger>>) {
        let ledger = Rc::new(RefCell::new(Ledger::default()));
        let backend = RecordingBackend {
            ledger: Rc::clone(&ledger),
            missing,
        };
        let datasets = DatasetFactory::seeded(9, ChartConfig::default());
        (ChartLifecycle::new(backend, datasets), ledger)
    }

    #[test]
    fn repeated_activation_never_doubles_a_target() {
        let (mut charts, ledger) = manager(Vec::new());
        charts.activate(SlideId::Model);
        charts.activate(SlideId::Model);
        let report = charts.activate(SlideId::Model);
        assert_eq!(report.released, 2);
        assert_eq!(ledger.borrow().max_live_per_target, 1);
        assert_eq!(
            charts.live_targets(),
            vec![ChartTarget::UptimeDonut, ChartTarget::FailureProbability]
        );
    }

    #[test]
    fn slides_without_charts_release_previous_handles() {
        let (mut charts, ledger) = manager(Vec::new());
        charts.activate(SlideId::Model);
        let report = charts.activate(SlideId::Dashboard);
        assert_eq!(report.released, 2);
        assert_eq!(report.mounted, vec![ChartTarget::FailureTypes]);
        let report = charts.activate(SlideId::Cybersecurity);
        assert_eq!(report.released, 1);
        assert!(report.mounted.is_empty());
        assert!(ledger.borrow().live.values().all(|count| *count == 0));
        assert_eq!(charts.active_slide(), Some(SlideId::Cybersecurity));
    }

    #[test]
    fn teardown_disposes_every_handle_including_bars() {
        let (mut charts, ledger) = manager(Vec::new());
        charts.activate(SlideId::Dashboard);
        assert_eq!(charts.teardown(), 1);
        assert_eq!(charts.teardown(), 0);
        let ledger = ledger.borrow();
        assert_eq!(ledger.mounts, ledger.disposals);
        assert_eq!(ledger.live.get(&ChartTarget::FailureTypes), Some(&0));
    }

    #[test]
    fn dropping_the_manager_releases_handles() {
        let (mut charts, ledger) = manager(Vec::new());
        charts.activate(SlideId::Model);
        drop(charts);
        let ledger = ledger.borrow();
        assert_eq!(ledger.mounts, 2);
        assert_eq!(ledger.disposals, 2);
    }

    #[test]
    fn missing_mounts_are_reported_and_skipped() {
        let (mut charts, _ledger) = manager(vec![ChartTarget::UptimeDonut]);
        let report = charts.activate(SlideId::Model);
        assert_eq!(report.mounted, vec![ChartTarget::FailureProbability]);
        assert_eq!(
            report.failed,
            vec![(
                ChartTarget::UptimeDonut,
                ChartError::MountMissing {
                    canvas_id: "uptimeChart"
                }
            )]
        );
    }

    #[test]
    fn scatter_is_rebuilt_with_fifty_points_per_visit() {
        let (mut charts, ledger) = manager(Vec::new());
        charts.activate(SlideId::Model);
        charts.activate(SlideId::Overview);
        charts.activate(SlideId::Model);
        assert_eq!(ledger.borrow().scatter_sizes, vec![50, 50]);
        assert!(charts.backend().missing.is_empty());
    }
}

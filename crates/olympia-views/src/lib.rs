//! Chart views for the Olympic athletes dashboard

pub mod axis;
mod chart_view;
pub mod charts;
pub mod colors;
pub mod tooltip;
pub mod transition;
mod viewport;

pub use chart_view::{ChartId, ChartView, Invalidation};
pub use charts::{
    MedalsBarModel, MedalsBarView, SportLineModel, SportLineView, StatRangeModel, StatRangeView,
    WomenParticipationModel, WomenParticipationView,
};
pub use tooltip::Tooltip;
pub use viewport::Viewport;

use std::sync::Arc;

use parking_lot::RwLock;

use olympia_core::{DashboardConfig, SelectionEngine, YearRange};
use olympia_data::Dataset;

/// Context passed to views during rendering
#[derive(Clone)]
pub struct ViewerContext {
    /// The loaded records
    pub dataset: Dataset,

    /// Shared selection
    pub selection: Arc<SelectionEngine>,

    pub config: Arc<DashboardConfig>,

    /// Tooltip to paint at the end of the frame; cleared every frame
    pub tooltip: Arc<RwLock<Option<Tooltip>>>,
}

impl ViewerContext {
    pub fn new(dataset: Dataset, selection: Arc<SelectionEngine>, config: Arc<DashboardConfig>) -> Self {
        Self {
            dataset,
            selection,
            config,
            tooltip: Arc::new(RwLock::new(None)),
        }
    }

    pub fn year_range(&self) -> YearRange {
        self.config.year_range
    }

    pub fn set_tooltip(&self, tooltip: Tooltip) {
        *self.tooltip.write() = Some(tooltip);
    }

    pub(crate) fn take_tooltip(&self) -> Option<Tooltip> {
        self.tooltip.write().take()
    }
}

//! Chart abstraction - base trait for all dockable charts

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use egui::Ui;

use olympia_core::{SelectionContext, SelectionState, SelectionSubscriber};

use crate::ViewerContext;

/// The four dashboard charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartId {
    StatRange,
    WomenParticipation,
    MedalsBar,
    SportLine,
}

impl ChartId {
    /// Grid order: top-left, top-right, bottom-left, bottom-right
    pub const ALL: [ChartId; 4] = [
        ChartId::StatRange,
        ChartId::WomenParticipation,
        ChartId::MedalsBar,
        ChartId::SportLine,
    ];
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartId::StatRange => "Athlete Statistics",
            ChartId::WomenParticipation => "Women's Participation",
            ChartId::MedalsBar => "Medals by Country",
            ChartId::SportLine => "Athletes by Sport",
        };
        f.write_str(name)
    }
}

/// Base trait for all charts
pub trait ChartView: Send + Sync {
    fn id(&self) -> ChartId;

    /// Tab name
    fn display_name(&self) -> String {
        self.id().to_string()
    }

    /// Heading drawn above the chart; may depend on the selection
    fn title(&self) -> String;

    /// Draw the chart
    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui);

    /// Rebuild derived data after the selection changed
    fn on_selection_change(&mut self, ctx: &ViewerContext, selection: &SelectionState);
}

/// Flag raised whenever the selection is published
#[derive(Debug)]
pub struct Invalidation {
    dirty: AtomicBool,
}

impl Invalidation {
    /// Starts dirty so the first frame builds every chart
    pub fn new() -> Self {
        Self {
            dirty: AtomicBool::new(true),
        }
    }

    /// Clear the flag, returning whether it was set
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }
}

impl Default for Invalidation {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSubscriber for Invalidation {
    fn on_selection_change(&self, _context: &SelectionContext) {
        self.dirty.store(true, Ordering::Release);
    }
}

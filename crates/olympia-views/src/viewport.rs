//! Viewport - docks the four charts in a 2x2 grid

use std::sync::Arc;

use ahash::AHashMap;
use egui::Ui;
use egui_dock::{DockArea, DockState, NodeIndex, TabViewer};
use tracing::debug;

use crate::charts::{MedalsBarView, SportLineView, StatRangeView, WomenParticipationView};
use crate::{ChartId, ChartView, Invalidation, ViewerContext};

/// The main viewport that manages dockable charts
pub struct Viewport {
    dock_state: DockState<ChartId>,
    views: AHashMap<ChartId, Box<dyn ChartView>>,
    invalidation: Arc<Invalidation>,
}

impl Viewport {
    /// Create the dashboard grid and subscribe it to selection changes
    pub fn new(ctx: &ViewerContext) -> Self {
        let views: Vec<Box<dyn ChartView>> = vec![
            Box::new(StatRangeView::new()),
            Box::new(WomenParticipationView::new()),
            Box::new(MedalsBarView::new()),
            Box::new(SportLineView::new()),
        ];
        Self::with_views(ctx, views)
    }

    pub fn with_views(ctx: &ViewerContext, views: Vec<Box<dyn ChartView>>) -> Self {
        let invalidation = Arc::new(Invalidation::new());
        ctx.selection.add_subscriber(invalidation.clone());

        let ids: Vec<ChartId> = views.iter().map(|v| v.id()).collect();
        let views = views.into_iter().map(|v| (v.id(), v)).collect();

        Self {
            dock_state: create_grid_dock_state(&ids),
            views,
            invalidation,
        }
    }

    /// Rebuild every chart if the selection was published since the last call
    pub fn refresh(&mut self, ctx: &ViewerContext) -> bool {
        if !self.invalidation.take() {
            return false;
        }

        let context = ctx.selection.get_context();
        debug!(revision = context.revision, "Rebuilding charts");
        for view in self.views.values_mut() {
            view.on_selection_change(ctx, &context.selection);
        }
        true
    }

    /// Draw the viewport
    pub fn ui(&mut self, ui: &mut Ui, ctx: &ViewerContext) {
        self.refresh(ctx);
        ctx.take_tooltip();

        DockArea::new(&mut self.dock_state)
            .show_close_buttons(false)
            .draggable_tabs(true)
            .show_inside(
                ui,
                &mut ViewportTabViewer {
                    views: &mut self.views,
                    ctx,
                },
            );

        if let Some(tooltip) = ctx.take_tooltip() {
            tooltip.show(ui.ctx());
        }
    }

    pub fn view(&self, id: ChartId) -> Option<&dyn ChartView> {
        self.views.get(&id).map(|v| v.as_ref())
    }
}

/// Tab viewer for egui_dock
struct ViewportTabViewer<'a> {
    views: &'a mut AHashMap<ChartId, Box<dyn ChartView>>,
    ctx: &'a ViewerContext,
}

impl<'a> TabViewer for ViewportTabViewer<'a> {
    type Tab = ChartId;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        match self.views.get(tab) {
            Some(view) => view.display_name().into(),
            None => tab.to_string().into(),
        }
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        if let Some(view) = self.views.get_mut(tab) {
            view.ui(self.ctx, ui);
        }
    }

    fn on_close(&mut self, _tab: &mut Self::Tab) -> bool {
        false
    }
}

/// Lay the charts out two by two, in the order given
fn create_grid_dock_state(ids: &[ChartId]) -> DockState<ChartId> {
    let Some((&first, rest)) = ids.split_first() else {
        return DockState::new(Vec::new());
    };

    let mut dock_state = DockState::new(vec![first]);
    let surface = dock_state.main_surface_mut();

    match rest {
        [] => {}
        [right] => {
            surface.split_right(NodeIndex::root(), 0.5, vec![*right]);
        }
        [right, bottom_left, others @ ..] => {
            let [left, right_node] = surface.split_right(NodeIndex::root(), 0.5, vec![*right]);
            surface.split_below(left, 0.5, vec![*bottom_left]);
            if !others.is_empty() {
                surface.split_below(right_node, 0.5, others.to_vec());
            }
        }
    }

    dock_state
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympia_core::{DashboardConfig, SelectionEngine};
    use olympia_data::{AthleteRecord, Dataset};

    fn context() -> ViewerContext {
        let dataset = Dataset::new(vec![AthleteRecord::new(1896, "Athletics", "Greece")], "tiny.csv");
        let engine = Arc::new(SelectionEngine::new());
        engine.update_catalog(dataset.years().clone(), dataset.sports().to_vec());
        ViewerContext::new(dataset, engine, Arc::new(DashboardConfig::default()))
    }

    #[test]
    fn test_grid_holds_all_charts() {
        let state = create_grid_dock_state(&ChartId::ALL);
        let docked: Vec<ChartId> = state.main_surface().tabs().copied().collect();
        assert_eq!(docked.len(), 4);
        for id in ChartId::ALL {
            assert!(docked.contains(&id));
        }
    }

    #[test]
    fn test_refresh_only_after_publication() {
        let ctx = context();
        let mut viewport = Viewport::new(&ctx);

        assert!(viewport.refresh(&ctx));
        assert!(!viewport.refresh(&ctx));

        ctx.selection.toggle_year(1896);
        assert!(viewport.refresh(&ctx));
        assert_eq!(
            viewport.view(ChartId::MedalsBar).map(|v| v.title()).as_deref(),
            Some("Olympic Medals by Team/Country (1896-1896)")
        );
    }
}

//! The ready dashboard: controls, charts and the year animation

use std::sync::Arc;

use egui::{Context, RichText};
use tracing::{debug, info};

use olympia_core::{
    AnimationDriver, DashboardConfig, IntervalTimer, SelectionContext, SelectionEngine,
    SelectionSubscriber, SystemAnimationDriver, SystemClock, TickOutcome,
};
use olympia_data::Dataset;
use olympia_ui::{ControlsPanel, Shortcut};
use olympia_views::{colors, Viewport, ViewerContext};

/// Wakes the UI whenever the selection is published
struct RepaintSubscriber {
    ctx: Context,
}

impl SelectionSubscriber for RepaintSubscriber {
    fn on_selection_change(&self, context: &SelectionContext) {
        debug!(revision = context.revision, "Selection published, repainting");
        self.ctx.request_repaint();
    }
}

pub struct Dashboard {
    viewer: ViewerContext,
    viewport: Viewport,
    controls: ControlsPanel,
    driver: SystemAnimationDriver,

    /// Held so the engine's weak registration stays alive
    _repaint: Arc<RepaintSubscriber>,
}

impl Dashboard {
    pub fn new(dataset: Dataset, config: Arc<DashboardConfig>, egui_ctx: &Context) -> Self {
        let selection = Arc::new(SelectionEngine::new());
        selection.update_catalog(dataset.years().clone(), dataset.sports().to_vec());

        let repaint = Arc::new(RepaintSubscriber { ctx: egui_ctx.clone() });
        selection.add_subscriber(repaint.clone());

        info!(
            records = dataset.len(),
            years = dataset.years().len(),
            sports = dataset.sports().len(),
            "Dashboard ready"
        );

        let driver = AnimationDriver::new(
            IntervalTimer::new(SystemClock::new()),
            config.year_range,
            config.animation_period(),
        );
        let controls = ControlsPanel::new(config.year_range);
        let viewer = ViewerContext::new(dataset, selection, config);
        let viewport = Viewport::new(&viewer);

        Self {
            viewer,
            viewport,
            controls,
            driver,
            _repaint: repaint,
        }
    }

    pub fn viewer(&self) -> &ViewerContext {
        &self.viewer
    }

    /// Apply input and timer ticks, then draw one frame
    pub fn update(&mut self, ctx: &Context) {
        let engine = self.viewer.selection.clone();

        for shortcut in Shortcut::pressed(ctx) {
            shortcut.apply(&engine, &mut self.driver);
        }

        if let TickOutcome::Finished(year) = self.driver.poll(&engine) {
            info!(year, "Year animation reached the end of the range");
        }
        if let Some(wait) = self.driver.time_until_next_tick() {
            ctx.request_repaint_after(wait);
        }

        egui::TopBottomPanel::top("controls_panel").show(ctx, |ui| {
            self.controls.ui(ui, &self.viewer, &mut self.driver);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewport.ui(ui, &self.viewer);
        });
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        let dataset = &self.viewer.dataset;
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} athlete records from {}", dataset.len(), dataset.source_name()))
                    .small()
                    .color(colors::FOREGROUND),
            );
            if dataset.skipped_rows() > 0 {
                ui.separator();
                ui.label(
                    RichText::new(format!("{} rows skipped", dataset.skipped_rows()))
                        .small()
                        .weak(),
                );
            }
        });
    }
}

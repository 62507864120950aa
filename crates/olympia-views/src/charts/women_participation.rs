//! Share of women among athletes, per Olympic year

use std::time::Duration;

use egui::{RichText, Ui};
use egui_plot::{PlotBounds, PlotPoint, PlotUi};

use olympia_core::{DashboardConfig, SelectionState};
use olympia_data::{line_segments, women_participation_by_year, Dataset, WomenShare};

use super::year_line::{draw_year_line, LinePoint, POINT_HIT_RADIUS_PX};
use super::{draw_war_bands, heading, static_plot};
use crate::axis::{self, PlotScale, WarBand};
use crate::transition::{transition_duration, Transition};
use crate::{ChartId, ChartView, Tooltip, ViewerContext};

#[derive(Debug, Clone, PartialEq)]
pub struct WomenParticipationModel {
    pub selection: SelectionState,
    pub shares: Vec<WomenShare>,
    pub segments: Vec<Vec<WomenShare>>,
    pub x_domain: (f64, f64),
    /// Percent
    pub y_max: f64,
    pub bands: Vec<WarBand>,
    pub duration: Duration,
    /// False when no record carries the athlete's sex
    pub has_data: bool,
}

impl WomenParticipationModel {
    pub fn build(dataset: &Dataset, selection: &SelectionState, config: &DashboardConfig) -> Self {
        let shares = women_participation_by_year(dataset.records(), selection, config.year_range);
        let segments = line_segments(&shares, &config.war_periods)
            .into_iter()
            .map(<[WomenShare]>::to_vec)
            .collect();
        let max_percent = shares.iter().map(WomenShare::percent).fold(0.0, f64::max);

        Self {
            selection: selection.clone(),
            segments,
            x_domain: axis::year_domain(config.year_range, 0),
            y_max: axis::value_ceiling(max_percent).min(100.0),
            bands: axis::war_bands(&config.war_periods, 0.0, 1.0, 0.7),
            duration: transition_duration(&config.transitions, ChartId::WomenParticipation, selection),
            has_data: dataset.has_sex_data(),
            shares,
        }
    }

    pub fn title(&self) -> String {
        format!("Women's Participation ({})", self.selection.sport_label())
    }

    pub fn hit_test(&self, pointer: PlotPoint, scale: PlotScale) -> Option<&WomenShare> {
        axis::nearest_point(&self.shares, WomenShare::percent, pointer, scale, POINT_HIT_RADIUS_PX)
    }
}

/// Line of the women's share, broken at the world wars
#[derive(Default)]
pub struct WomenParticipationView {
    model: Option<WomenParticipationModel>,
}

impl WomenParticipationView {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw(
        model: &WomenParticipationModel,
        transition: &Transition,
        plot_ui: &mut PlotUi,
    ) -> (Option<WomenShare>, bool) {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [model.x_domain.0, 0.0],
            [model.x_domain.1, model.y_max],
        ));
        draw_war_bands(plot_ui, &model.bands, model.y_max);

        let scale = PlotScale::from_plot(plot_ui);
        let hovered = plot_ui
            .pointer_coordinate()
            .and_then(|pointer| model.hit_test(pointer, scale))
            .copied();

        let segments: Vec<Vec<LinePoint>> = model
            .segments
            .iter()
            .map(|segment| {
                segment
                    .iter()
                    .map(|s| LinePoint {
                        year: s.year,
                        value: s.percent(),
                    })
                    .collect()
            })
            .collect();
        draw_year_line(
            plot_ui,
            transition,
            &segments,
            model.selection.selected_year,
            hovered.map(|s| s.year),
        );

        (hovered, plot_ui.response().clicked())
    }
}

impl ChartView for WomenParticipationView {
    fn id(&self) -> ChartId {
        ChartId::WomenParticipation
    }

    fn title(&self) -> String {
        self.model
            .as_ref()
            .map(WomenParticipationModel::title)
            .unwrap_or_else(|| ChartId::WomenParticipation.to_string())
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        heading(ui, &self.title());

        let Some(model) = &self.model else {
            return;
        };

        if !model.has_data {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new(format!("{} has no athlete sex column", ctx.dataset.source_name())).weak(),
                );
            });
            return;
        }

        let egui_ctx = ui.ctx().clone();
        let transition = Transition::new(&egui_ctx, ChartId::WomenParticipation, model.duration);
        let plot = static_plot(ChartId::WomenParticipation)
            .x_axis_label("Olympic Year")
            .y_axis_label("Women (% of athletes)")
            .x_grid_spacer(axis::year_grid_spacer);

        let (hovered, clicked) = plot.show(ui, |plot_ui| Self::draw(model, &transition, plot_ui)).inner;

        if let Some(share) = hovered {
            ctx.set_tooltip(Tooltip::for_women(&model.selection, &share));
            if clicked {
                ctx.selection.toggle_year(share.year);
            }
        }
    }

    fn on_selection_change(&mut self, ctx: &ViewerContext, selection: &SelectionState) {
        self.model = Some(WomenParticipationModel::build(&ctx.dataset, selection, &ctx.config));
    }
}

//! Per-year min/avg/max of the selected statistic

use std::time::Duration;

use egui::{Color32, Ui};
use egui_plot::{Line, MarkerShape, PlotBounds, PlotPoints, PlotUi, Points};

use olympia_core::{DashboardConfig, SelectionState, Statistic};
use olympia_data::{stat_by_year, Dataset, YearStat};

use super::{draw_war_bands, heading, static_plot};
use crate::axis::{self, PlotScale, WarBand};
use crate::colors;
use crate::transition::{transition_duration, Transition};
use crate::{ChartId, ChartView, Tooltip, ViewerContext};

/// Horizontal hover reach of a year column, in pixels
const HOVER_HALF_WIDTH_PX: f64 = 12.0;
/// Vertical hover slack above and below a column, in pixels
const HOVER_SLACK_PX: f64 = 5.0;

/// Everything the stat range chart draws, derived from the selection
#[derive(Debug, Clone, PartialEq)]
pub struct StatRangeModel {
    pub statistic: Statistic,
    pub stats: Vec<YearStat>,
    pub x_domain: (f64, f64),
    /// Largest value of the statistic over the whole dataset
    pub y_max: f64,
    pub bands: Vec<WarBand>,
    pub duration: Duration,
}

impl StatRangeModel {
    pub fn build(dataset: &Dataset, selection: &SelectionState, config: &DashboardConfig) -> Self {
        let all_years = selection.is_all_years();
        Self {
            statistic: selection.statistic,
            stats: stat_by_year(dataset.records(), selection, config.year_range),
            x_domain: axis::year_domain(config.year_range, config.year_axis_padding),
            y_max: dataset.max_stat(selection.statistic).unwrap_or(1.0),
            bands: axis::war_bands(
                &config.war_periods,
                2.0,
                if all_years { 1.0 } else { 0.5 },
                if all_years { 0.7 } else { 0.3 },
            ),
            duration: transition_duration(&config.transitions, ChartId::StatRange, selection),
        }
    }

    /// The year column under the pointer
    pub fn hit_test(&self, pointer: egui_plot::PlotPoint, scale: PlotScale) -> Option<&YearStat> {
        let stat = axis::nearest_year(&self.stats, pointer.x, scale, HOVER_HALF_WIDTH_PX)?;
        let slack = HOVER_SLACK_PX * scale.y_per_px;
        (pointer.y >= stat.min - slack && pointer.y <= stat.max + slack).then_some(stat)
    }
}

/// What happened under the pointer during one frame
struct Interaction {
    hovered: Option<YearStat>,
    clicked: bool,
}

/// Range bar and min/avg/max dots for every Olympic year
#[derive(Default)]
pub struct StatRangeView {
    model: Option<StatRangeModel>,
}

impl StatRangeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> Option<&StatRangeModel> {
        self.model.as_ref()
    }

    fn draw(model: &StatRangeModel, transition: &Transition, plot_ui: &mut PlotUi) -> Interaction {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [model.x_domain.0, 0.0],
            [model.x_domain.1, model.y_max],
        ));
        draw_war_bands(plot_ui, &model.bands, model.y_max);

        // Dots are batched per colour and activity
        let mut dots: [Vec<[f64; 2]>; 6] = Default::default();
        for stat in &model.stats {
            let x = stat.year as f64;
            let min = transition.value((stat.year, "min"), stat.min);
            let avg = transition.value((stat.year, "avg"), stat.avg);
            let max = transition.value((stat.year, "max"), stat.max);
            let opacity = colors::mark_opacity(stat.is_active);

            plot_ui.line(
                Line::new(PlotPoints::new(vec![[x, min], [x, max]]))
                    .color(colors::with_opacity(colors::LIGHT_GRAY, opacity))
                    .width(11.0_f32),
            );

            let batch = if stat.is_active { 0 } else { 3 };
            dots[batch].push([x, min]);
            dots[batch + 1].push([x, avg]);
            dots[batch + 2].push([x, max]);
        }

        let styles: [(Color32, f32); 3] = [
            (colors::SECONDARY, 7.0),
            (colors::FOREGROUND, 3.0),
            (colors::PRIMARY, 7.0),
        ];
        for (i, points) in dots.into_iter().enumerate() {
            let (color, radius) = styles[i % 3];
            let opacity = colors::mark_opacity(i < 3);
            plot_ui.points(
                Points::new(PlotPoints::new(points))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(radius)
                    .color(colors::with_opacity(color, opacity)),
            );
        }

        let scale = PlotScale::from_plot(plot_ui);
        Interaction {
            hovered: plot_ui
                .pointer_coordinate()
                .and_then(|pointer| model.hit_test(pointer, scale))
                .copied(),
            clicked: plot_ui.response().clicked(),
        }
    }
}

impl ChartView for StatRangeView {
    fn id(&self) -> ChartId {
        ChartId::StatRange
    }

    fn title(&self) -> String {
        let statistic = self.model.as_ref().map(|m| m.statistic).unwrap_or_default();
        format!("Olympian {} by Year", statistic.label())
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        heading(ui, &self.title());

        let Some(model) = &self.model else {
            return;
        };

        let egui_ctx = ui.ctx().clone();
        let transition = Transition::new(&egui_ctx, ChartId::StatRange, model.duration);
        let plot = static_plot(ChartId::StatRange)
            .x_axis_label("Olympic Year")
            .y_axis_label(model.statistic.axis_label())
            .x_grid_spacer(axis::year_grid_spacer);

        let interaction = plot.show(ui, |plot_ui| Self::draw(model, &transition, plot_ui)).inner;

        if let Some(stat) = &interaction.hovered {
            ctx.set_tooltip(Tooltip::for_stat(stat));
        }
        if interaction.clicked {
            match interaction.hovered {
                Some(stat) => ctx.selection.toggle_year(stat.year),
                // Background click
                None => ctx.selection.clear_year(),
            }
        }
    }

    fn on_selection_change(&mut self, ctx: &ViewerContext, selection: &SelectionState) {
        self.model = Some(StatRangeModel::build(&ctx.dataset, selection, &ctx.config));
    }
}

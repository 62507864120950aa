//! Athletes per Olympic year for the selected sport

use std::time::Duration;

use egui::Ui;
use egui_plot::{PlotBounds, PlotPoint, PlotUi};

use olympia_core::{DashboardConfig, SelectionState};
use olympia_data::{athlete_count_by_year, line_segments, Dataset, YearCount};

use super::year_line::{draw_year_line, LinePoint, POINT_HIT_RADIUS_PX};
use super::{draw_war_bands, heading, static_plot};
use crate::axis::{self, PlotScale, WarBand};
use crate::transition::{transition_duration, Transition};
use crate::{ChartId, ChartView, Tooltip, ViewerContext};

#[derive(Debug, Clone, PartialEq)]
pub struct SportLineModel {
    pub selection: SelectionState,
    pub counts: Vec<YearCount>,
    /// Runs of `counts` that do not cross a war
    pub segments: Vec<Vec<YearCount>>,
    pub x_domain: (f64, f64),
    pub y_max: f64,
    pub bands: Vec<WarBand>,
    pub duration: Duration,
}

impl SportLineModel {
    pub fn build(dataset: &Dataset, selection: &SelectionState, config: &DashboardConfig) -> Self {
        let counts = athlete_count_by_year(dataset.records(), selection, config.year_range);
        let segments = line_segments(&counts, &config.war_periods)
            .into_iter()
            .map(<[YearCount]>::to_vec)
            .collect();
        let max_count = counts.iter().map(|c| c.count).max().unwrap_or(0);

        Self {
            selection: selection.clone(),
            segments,
            x_domain: axis::year_domain(config.year_range, 0),
            y_max: axis::value_ceiling(max_count as f64),
            bands: axis::war_bands(&config.war_periods, 0.0, 1.0, 0.7),
            duration: transition_duration(&config.transitions, ChartId::SportLine, selection),
            counts,
        }
    }

    pub fn title(&self) -> String {
        let sport = if self.selection.is_all_sports() {
            "All"
        } else {
            self.selection.sport.as_str()
        };
        format!("{} Athletes by Olympic Year", sport)
    }

    pub fn hit_test(&self, pointer: PlotPoint, scale: PlotScale) -> Option<&YearCount> {
        axis::nearest_point(&self.counts, |c| c.count as f64, pointer, scale, POINT_HIT_RADIUS_PX)
    }

    fn plotted_segments(&self) -> Vec<Vec<LinePoint>> {
        self.segments
            .iter()
            .map(|segment| {
                segment
                    .iter()
                    .map(|c| LinePoint {
                        year: c.year,
                        value: c.count as f64,
                    })
                    .collect()
            })
            .collect()
    }
}

/// Line of athlete counts, broken at the world wars
#[derive(Default)]
pub struct SportLineView {
    model: Option<SportLineModel>,
}

impl SportLineView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> Option<&SportLineModel> {
        self.model.as_ref()
    }

    fn draw(model: &SportLineModel, transition: &Transition, plot_ui: &mut PlotUi) -> (Option<YearCount>, bool) {
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

        draw_year_line(
            plot_ui,
            transition,
            &model.plotted_segments(),
            model.selection.selected_year,
            hovered.map(|c| c.year),
        );

        (hovered, plot_ui.response().clicked())
    }
}

impl ChartView for SportLineView {
    fn id(&self) -> ChartId {
        ChartId::SportLine
    }

    fn title(&self) -> String {
        self.model
            .as_ref()
            .map(SportLineModel::title)
            .unwrap_or_else(|| ChartId::SportLine.to_string())
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        heading(ui, &self.title());

        let Some(model) = &self.model else {
            return;
        };

        let egui_ctx = ui.ctx().clone();
        let transition = Transition::new(&egui_ctx, ChartId::SportLine, model.duration);
        let plot = static_plot(ChartId::SportLine)
            .x_axis_label("Olympic Year")
            .y_axis_label("Number of Athletes")
            .x_grid_spacer(axis::year_grid_spacer);

        let (hovered, clicked) = plot.show(ui, |plot_ui| Self::draw(model, &transition, plot_ui)).inner;

        if let Some(count) = hovered {
            ctx.set_tooltip(Tooltip::for_sport(&model.selection, &count));
            if clicked {
                ctx.selection.toggle_year(count.year);
            }
        }
    }

    fn on_selection_change(&mut self, ctx: &ViewerContext, selection: &SelectionState) {
        self.model = Some(SportLineModel::build(&ctx.dataset, selection, &ctx.config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympia_data::AthleteRecord;

    fn dataset() -> Dataset {
        let mut records = Vec::new();
        for (year, rowers) in [(1908, 2), (1912, 4), (1920, 3), (1924, 5)] {
            for _ in 0..rowers {
                records.push(AthleteRecord::new(year, "Rowing", "Great Britain"));
            }
        }
        records.push(AthleteRecord::new(1924, "Tennis", "France"));
        Dataset::new(records, "rowing.csv")
    }

    #[test]
    fn test_segments_break_at_war_end() {
        let model = SportLineModel::build(&dataset(), &SelectionState::default(), &DashboardConfig::default());
        let years: Vec<Vec<i32>> = model
            .segments
            .iter()
            .map(|s| s.iter().map(|c| c.year).collect())
            .collect();
        assert_eq!(years, vec![vec![1908, 1912], vec![1920, 1924]]);
        assert!((model.y_max - 6.6).abs() < 1e-9);
        assert_eq!(model.x_domain, (1896.0, 2016.0));
    }

    #[test]
    fn test_title_and_filter() {
        let config = DashboardConfig::default();
        let all = SportLineModel::build(&dataset(), &SelectionState::default(), &config);
        assert_eq!(all.title(), "All Athletes by Olympic Year");

        let tennis = SelectionState {
            sport: "Tennis".to_string(),
            ..SelectionState::default()
        };
        let model = SportLineModel::build(&dataset(), &tennis, &config);
        assert_eq!(model.title(), "Tennis Athletes by Olympic Year");
        assert_eq!(model.counts.len(), 1);
        assert_eq!(model.duration, Duration::from_millis(300));
    }

    #[test]
    fn test_point_hit_test() {
        let model = SportLineModel::build(&dataset(), &SelectionState::default(), &DashboardConfig::default());
        let scale = PlotScale {
            x_per_px: 0.5,
            y_per_px: 0.1,
        };
        let hit = model.hit_test(PlotPoint::new(1912.5, 4.2), scale);
        assert_eq!(hit.map(|c| c.year), Some(1912));
        assert!(model.hit_test(PlotPoint::new(1916.5, 4.0), scale).is_none());
    }

    #[test]
    fn test_unknown_sport_is_empty_chart() {
        let selection = SelectionState {
            sport: "Curling".to_string(),
            ..SelectionState::default()
        };
        let model = SportLineModel::build(&dataset(), &selection, &DashboardConfig::default());
        assert!(model.counts.is_empty());
        assert!(model.segments.is_empty());
        assert_eq!(model.y_max, 1.0);
    }
}

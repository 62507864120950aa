//! Medal table of the best teams, cumulative up to the selected year

use std::time::Duration;

use egui::{Align2, RichText, Ui};
use egui_plot::{Bar, BarChart, PlotBounds, PlotPoint, PlotUi, Text};

use olympia_core::{DashboardConfig, SelectionState};
use olympia_data::{medals_by_country, Dataset, MedalStandings, MedalTally};

use super::{heading, static_plot};
use crate::axis;
use crate::colors;
use crate::transition::{transition_duration, Transition};
use crate::{ChartId, ChartView, Tooltip, ViewerContext};

/// Bar thickness as a fraction of a slot
const BAR_WIDTH: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct MedalsBarModel {
    pub standings: MedalStandings,
    pub title: String,
    pub footer: String,
    /// Value axis upper bound
    pub x_max: f64,
    pub duration: Duration,
}

impl MedalsBarModel {
    pub fn build(dataset: &Dataset, selection: &SelectionState, config: &DashboardConfig) -> Self {
        let standings = medals_by_country(dataset.records(), selection.selected_year, config.top_countries);
        let start = config.year_range.start;
        let title = if selection.is_all_years() {
            format!("All-time Olympic Medals by Team/Country ({}-{})", start, config.year_range.end)
        } else {
            format!("Olympic Medals by Team/Country ({}-{})", start, selection.selected_year)
        };

        Self {
            footer: format!("Total countries with medals: {}", standings.teams_with_medals),
            x_max: axis::value_ceiling(standings.max_total() as f64),
            duration: transition_duration(&config.transitions, ChartId::MedalsBar, selection),
            standings,
            title,
        }
    }

    /// Vertical slot of the entry at `index`; the best team is on top
    pub fn slot(&self, index: usize) -> f64 {
        (self.standings.entries.len() - 1 - index) as f64
    }

    /// The bar under the pointer, with its 1-based rank
    pub fn hit_test(&self, pointer: PlotPoint) -> Option<(&MedalTally, usize)> {
        let len = self.standings.entries.len();
        let slot = pointer.y.round();
        if slot < 0.0 || slot >= len as f64 || (pointer.y - slot).abs() > BAR_WIDTH / 2.0 {
            return None;
        }

        let index = len - 1 - slot as usize;
        let entry = &self.standings.entries[index];
        (pointer.x >= 0.0 && pointer.x <= entry.total as f64).then_some((entry, index + 1))
    }

    /// Team name for each slot, bottom to top
    fn slot_labels(&self) -> Vec<String> {
        self.standings.entries.iter().rev().map(|e| e.team.clone()).collect()
    }
}

/// Horizontal bars in national colours
#[derive(Default)]
pub struct MedalsBarView {
    model: Option<MedalsBarModel>,
}

impl MedalsBarView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> Option<&MedalsBarModel> {
        self.model.as_ref()
    }

    fn draw(model: &MedalsBarModel, transition: &Transition, plot_ui: &mut PlotUi) -> Option<(MedalTally, usize)> {
        let slots = model.standings.entries.len().max(1) as f64;
        plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, -0.6], [model.x_max, slots - 0.4]));

        let mut bars = Vec::with_capacity(model.standings.entries.len());
        for (index, entry) in model.standings.entries.iter().enumerate() {
            let slot = transition.value((entry.team.as_str(), "slot"), model.slot(index));
            let total = transition.entering((entry.team.as_str(), "total"), 0.0, entry.total as f64);

            bars.push(
                Bar::new(slot, total)
                    .width(BAR_WIDTH)
                    .fill(colors::country_color(&entry.team))
                    .name(&entry.team),
            );
            plot_ui.text(
                Text::new(
                    PlotPoint::new(total + model.x_max * 0.01, slot),
                    RichText::new(entry.total.to_string()).color(colors::FOREGROUND),
                )
                .anchor(Align2::LEFT_CENTER),
            );
        }
        plot_ui.bar_chart(BarChart::new(bars).horizontal());

        plot_ui
            .pointer_coordinate()
            .and_then(|pointer| model.hit_test(pointer))
            .map(|(entry, rank)| (entry.clone(), rank))
    }
}

impl ChartView for MedalsBarView {
    fn id(&self) -> ChartId {
        ChartId::MedalsBar
    }

    fn title(&self) -> String {
        self.model
            .as_ref()
            .map(|m| m.title.clone())
            .unwrap_or_else(|| ChartId::MedalsBar.to_string())
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        heading(ui, &self.title());

        let Some(model) = &self.model else {
            return;
        };

        let labels = model.slot_labels();
        let egui_ctx = ui.ctx().clone();
        let transition = Transition::new(&egui_ctx, ChartId::MedalsBar, model.duration);
        let plot = static_plot(ChartId::MedalsBar)
            .x_axis_label("Total Medals")
            .y_grid_spacer(axis::category_grid_spacer)
            .y_axis_formatter(move |value, _, _| {
                let slot = value.round();
                if (value - slot).abs() > 1e-6 || slot < 0.0 {
                    return String::new();
                }
                labels.get(slot as usize).cloned().unwrap_or_default()
            })
            .height((ui.available_height() - 24.0).max(80.0));

        let hovered = plot.show(ui, |plot_ui| Self::draw(model, &transition, plot_ui)).inner;
        if let Some((entry, rank)) = hovered {
            ctx.set_tooltip(Tooltip::for_medals(&entry, rank));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(&model.footer).size(12.0).color(colors::FOREGROUND));
        });
    }

    fn on_selection_change(&mut self, ctx: &ViewerContext, selection: &SelectionState) {
        self.model = Some(MedalsBarModel::build(&ctx.dataset, selection, &ctx.config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympia_data::{AthleteRecord, Medal};

    fn dataset() -> Dataset {
        let medal = |year, team: &str, medal| AthleteRecord::new(year, "Athletics", team).with_medal(medal);
        Dataset::new(
            vec![
                medal(1896, "Greece", Medal::Gold),
                medal(1896, "Greece", Medal::Silver),
                medal(1900, "France", Medal::Gold),
                medal(1900, "France", Medal::Bronze),
                medal(1900, "France", Medal::Bronze),
                medal(1900, "Hungary", Medal::None),
            ],
            "medals.csv",
        )
    }

    #[test]
    fn test_titles_follow_year() {
        let config = DashboardConfig::default();
        let all = MedalsBarModel::build(&dataset(), &SelectionState::default(), &config);
        assert_eq!(all.title, "All-time Olympic Medals by Team/Country (1896-2016)");
        assert_eq!(all.footer, "Total countries with medals: 2");

        let y1896 = SelectionState {
            selected_year: 1896,
            ..SelectionState::default()
        };
        let model = MedalsBarModel::build(&dataset(), &y1896, &config);
        assert_eq!(model.title, "Olympic Medals by Team/Country (1896-1896)");
        assert_eq!(model.standings.entries[0].team, "Greece");
        assert_eq!(model.footer, "Total countries with medals: 1");
    }

    #[test]
    fn test_value_axis_and_slots() {
        let model = MedalsBarModel::build(&dataset(), &SelectionState::default(), &DashboardConfig::default());
        assert!((model.x_max - 3.3).abs() < 1e-9);
        // France, Greece, Hungary from top to bottom
        assert_eq!(model.slot(0), 2.0);
        assert_eq!(model.slot(2), 0.0);
        assert_eq!(model.slot_labels(), vec!["Hungary", "Greece", "France"]);
    }

    #[test]
    fn test_hit_test_inside_bar_only() {
        let model = MedalsBarModel::build(&dataset(), &SelectionState::default(), &DashboardConfig::default());

        let (entry, rank) = model.hit_test(PlotPoint::new(2.5, 2.1)).unwrap();
        assert_eq!((entry.team.as_str(), rank), ("France", 1));

        // Past the end of Greece's bar
        assert!(model.hit_test(PlotPoint::new(2.5, 1.0)).is_none());
        // Between slots
        assert!(model.hit_test(PlotPoint::new(1.0, 1.5)).is_none());
    }
}

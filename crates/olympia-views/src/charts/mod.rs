//! The four dashboard charts

mod medals_bar;
mod sport_line;
mod stat_range;
mod women_participation;
mod year_line;

pub use medals_bar::{MedalsBarModel, MedalsBarView};
pub use sport_line::{SportLineModel, SportLineView};
pub use stat_range::{StatRangeModel, StatRangeView};
pub use women_participation::{WomenParticipationModel, WomenParticipationView};

use egui::{Align2, RichText, Stroke, Ui};
use egui_plot::{Plot, PlotPoint, PlotPoints, PlotUi, Polygon, Text};

use crate::axis::WarBand;
use crate::colors;
use crate::ChartId;

/// A plot with fixed bounds and no pan or zoom
pub(crate) fn static_plot(chart: ChartId) -> Plot {
    Plot::new(("olympia-chart", chart))
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
}

pub(crate) fn heading(ui: &mut Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).strong().size(15.0).color(ui.visuals().strong_text_color()));
    });
}

/// Shade war periods over the full height of the plot
pub(crate) fn draw_war_bands(plot_ui: &mut PlotUi, bands: &[WarBand], y_max: f64) {
    for band in bands {
        let corners = vec![
            [band.x_min, 0.0],
            [band.x_max, 0.0],
            [band.x_max, y_max],
            [band.x_min, y_max],
        ];
        plot_ui.polygon(
            Polygon::new(PlotPoints::new(corners))
                .fill_color(colors::with_opacity(colors::LIGHT_GRAY, band.fill_opacity))
                .stroke(Stroke::NONE),
        );

        plot_ui.text(
            Text::new(
                PlotPoint::new(band.label_x, y_max),
                RichText::new(&band.label)
                    .size(12.0)
                    .color(colors::with_opacity(colors::FOREGROUND, band.label_opacity)),
            )
            .anchor(Align2::CENTER_TOP),
        );
    }
}

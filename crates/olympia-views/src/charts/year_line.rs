//! Drawing shared by the per-year line charts

use egui_plot::{Line, MarkerShape, PlotPoints, PlotUi, Points};

use olympia_core::ALL_YEARS;

use crate::colors;
use crate::transition::Transition;

/// Pointer reach of a line point, in pixels
pub(crate) const POINT_HIT_RADIUS_PX: f64 = 8.0;

/// One plotted value
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LinePoint {
    pub year: i32,
    pub value: f64,
}

/// Draw each run as its own line, then a marker for every point.
///
/// The selected year is drawn in the foreground colour at full opacity;
/// the hovered point is enlarged.
pub(crate) fn draw_year_line(
    plot_ui: &mut PlotUi,
    transition: &Transition,
    segments: &[Vec<LinePoint>],
    selected_year: i32,
    hovered_year: Option<i32>,
) {
    let animated = |p: &LinePoint| [p.year as f64, transition.value(p.year, p.value)];

    for segment in segments {
        let points: Vec<[f64; 2]> = segment.iter().map(animated).collect();
        plot_ui.line(
            Line::new(PlotPoints::new(points))
                .color(colors::PRIMARY)
                .width(3.0_f32),
        );
    }

    let mut regular = Vec::new();
    for point in segments.iter().flatten() {
        let at = animated(point);
        let selected = selected_year != ALL_YEARS && point.year == selected_year;
        let hovered = hovered_year == Some(point.year);

        if selected || hovered {
            let color = if selected { colors::FOREGROUND } else { colors::PRIMARY };
            plot_ui.points(
                Points::new(PlotPoints::new(vec![at]))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(if hovered { 7.0_f32 } else { 5.0_f32 })
                    .color(color),
            );
        } else {
            regular.push(at);
        }
    }

    plot_ui.points(
        Points::new(PlotPoints::new(regular))
            .shape(MarkerShape::Circle)
            .filled(true)
            .radius(5.0_f32)
            .color(colors::with_opacity(colors::PRIMARY, 0.7)),
    );
}

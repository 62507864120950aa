//! Year axes, value ceilings, war bands and pointer hit testing

use egui_plot::{GridInput, GridMark, PlotPoint, PlotUi};

use olympia_core::{WarPeriod, YearRange};
use olympia_data::YearKeyed;

/// Olympic cycle, used as the year tick step
pub const YEAR_TICK_STEP: i32 = 4;

/// Headroom above the largest value on count axes
pub const VALUE_HEADROOM: f64 = 1.1;

/// Year axis domain, padded on both sides
pub fn year_domain(range: YearRange, padding: i32) -> (f64, f64) {
    ((range.start - padding) as f64, (range.end + padding) as f64)
}

/// Tick years: multiples of [`YEAR_TICK_STEP`] covering `domain`
pub fn year_ticks(domain: (f64, f64)) -> Vec<i32> {
    let step = YEAR_TICK_STEP as f64;
    let mut year = (domain.0 / step).floor() as i32 * YEAR_TICK_STEP;
    let mut ticks = Vec::new();
    while year as f64 <= domain.1 {
        ticks.push(year);
        year += YEAR_TICK_STEP;
    }
    ticks
}

/// Grid spacer for year axes: one mark every Olympic cycle
pub fn year_grid_spacer(input: GridInput) -> Vec<GridMark> {
    year_ticks(input.bounds)
        .into_iter()
        .map(|year| GridMark {
            value: year as f64,
            step_size: YEAR_TICK_STEP as f64,
        })
        .collect()
}

/// Grid spacer with one mark per category slot
pub fn category_grid_spacer(input: GridInput) -> Vec<GridMark> {
    let first = input.bounds.0.ceil().max(0.0) as i64;
    let last = input.bounds.1.floor() as i64;
    (first..=last)
        .map(|slot| GridMark {
            value: slot as f64,
            step_size: 1.0,
        })
        .collect()
}

/// Upper bound of a count axis: `max × 1.1`, or 1 when there is nothing to show
pub fn value_ceiling(max: f64) -> f64 {
    if max.is_finite() && max > 0.0 {
        max * VALUE_HEADROOM
    } else {
        1.0
    }
}

/// Shaded region for one war period
#[derive(Debug, Clone, PartialEq)]
pub struct WarBand {
    pub x_min: f64,
    pub x_max: f64,
    pub label: String,
    /// Label position, the middle of the full war period
    pub label_x: f64,
    pub fill_opacity: f32,
    pub label_opacity: f32,
}

/// Bands for the given periods, narrowed by `inset` years on each side
pub fn war_bands(wars: &[WarPeriod], inset: f64, fill_opacity: f32, label_opacity: f32) -> Vec<WarBand> {
    wars.iter()
        .map(|war| WarBand {
            x_min: war.start as f64 + inset,
            x_max: war.end as f64 - inset,
            label: war.label.clone(),
            label_x: war.midpoint(),
            fill_opacity,
            label_opacity,
        })
        .collect()
}

/// Plot units covered by one screen pixel on each axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotScale {
    pub x_per_px: f64,
    pub y_per_px: f64,
}

impl PlotScale {
    pub fn from_plot(plot_ui: &PlotUi) -> Self {
        let bounds = plot_ui.plot_bounds();
        let rect = plot_ui.response().rect;
        Self {
            x_per_px: bounds.width() / rect.width().max(1.0) as f64,
            y_per_px: bounds.height() / rect.height().max(1.0) as f64,
        }
    }

    /// Screen distance between two plot positions, in pixels
    pub fn pixel_distance(&self, a: PlotPoint, b: PlotPoint) -> f64 {
        let dx = (a.x - b.x) / self.x_per_px;
        let dy = (a.y - b.y) / self.y_per_px;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The point under the pointer, if one lies within `radius_px` pixels
pub fn nearest_point<'a, T: YearKeyed>(
    points: &'a [T],
    value: impl Fn(&T) -> f64,
    pointer: PlotPoint,
    scale: PlotScale,
    radius_px: f64,
) -> Option<&'a T> {
    points
        .iter()
        .map(|p| {
            let at = PlotPoint::new(p.year() as f64, value(p));
            (p, scale.pixel_distance(at, pointer))
        })
        .filter(|(_, distance)| *distance <= radius_px)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| p)
}

/// The year column under the pointer, within `half_width_px` pixels horizontally
pub fn nearest_year<'a, T: YearKeyed>(
    points: &'a [T],
    pointer_x: f64,
    scale: PlotScale,
    half_width_px: f64,
) -> Option<&'a T> {
    points
        .iter()
        .map(|p| (p, ((p.year() as f64 - pointer_x) / scale.x_per_px).abs()))
        .filter(|(_, distance)| *distance <= half_width_px)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| p)
}

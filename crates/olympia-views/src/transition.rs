//! Animated transitions between successive renders of a chart

use std::hash::Hash;
use std::time::Duration;

use egui::{Context, Id};

use olympia_core::{SelectionState, TransitionConfig};

use crate::ChartId;

/// How long shapes take to move to their new values
pub fn transition_duration(config: &TransitionConfig, chart: ChartId, selection: &SelectionState) -> Duration {
    let ms = match chart {
        ChartId::StatRange if selection.is_dragging => config.stat_dragging_ms,
        ChartId::MedalsBar if selection.is_dragging => config.medals_dragging_ms,
        ChartId::StatRange | ChartId::MedalsBar => config.idle_ms,
        ChartId::SportLine | ChartId::WomenParticipation => config.sport_ms,
    };
    Duration::from_millis(ms)
}

/// Eases keyed values towards their targets.
///
/// A key identifies one shape across renders (a year, a team), so the
/// same shape keeps moving instead of being redrawn from scratch.
pub struct Transition<'a> {
    ctx: &'a Context,
    scope: Id,
    secs: f32,
}

impl<'a> Transition<'a> {
    pub fn new(ctx: &'a Context, chart: ChartId, duration: Duration) -> Self {
        Self {
            ctx,
            scope: Id::new(("olympia-transition", chart)),
            secs: duration.as_secs_f32(),
        }
    }

    /// Current value of the shape `key` on its way to `target`
    pub fn value(&self, key: impl Hash, target: f64) -> f64 {
        self.ctx
            .animate_value_with_time(self.scope.with(key), target as f32, self.secs) as f64
    }

    /// Like [`Transition::value`], but a shape seen for the first time
    /// starts at `from` instead of appearing at its target
    pub fn entering(&self, key: impl Hash, from: f64, target: f64) -> f64 {
        let id = self.scope.with(key);
        let seen_id = id.with("seen");

        let seen = self.ctx.data(|d| d.get_temp::<bool>(seen_id)).unwrap_or(false);
        if !seen {
            self.ctx.animate_value_with_time(id, from as f32, 0.0);
            self.ctx.data_mut(|d| d.insert_temp(seen_id, true));
        }

        self.ctx.animate_value_with_time(id, target as f32, self.secs) as f64
    }
}

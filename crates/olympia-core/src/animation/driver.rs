//! Year animation state machine

use std::time::Duration;

use tracing::{debug, info};

use super::timer::{Timer, TimerHandle};
use crate::config::YearRange;
use crate::selection::SelectionEngine;

/// Playback state of the year animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Running,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale or late tick; nothing happened
    Ignored,
    /// The slider moved but still snaps to the selected year
    Unchanged,
    /// A new Olympic year was selected
    Advanced(i32),
    /// The upper bound was reached and playback stopped
    Finished(i32),
}

/// Advances the selected year at a fixed cadence.
///
/// The driver keeps a continuous slider position which moves one year per
/// tick and is snapped to the nearest Olympic year. It stops by itself once
/// the position reaches the end of the year range.
pub struct AnimationDriver<T: Timer> {
    timer: T,
    state: PlaybackState,
    handle: Option<TimerHandle>,
    period: Duration,
    range: YearRange,
    /// Virtual slider position
    position: f64,
    /// Selected year after the last tick, used to notice outside changes
    last_year: i32,
}

impl<T: Timer> AnimationDriver<T> {
    pub fn new(timer: T, range: YearRange, period: Duration) -> Self {
        Self {
            timer,
            state: PlaybackState::Stopped,
            handle: None,
            period,
            range,
            position: range.start as f64,
            last_year: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    /// Current virtual slider position
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Start playback.
    ///
    /// Starting at or past the end of the range, or with no year selected,
    /// rewinds to the start of the range first. Any previously armed timer
    /// is cancelled.
    pub fn play(&mut self, engine: &SelectionEngine) {
        self.timer.cancel();

        let selection = engine.selection();
        if selection.is_all_years() || selection.selected_year >= self.range.end {
            engine.set_year(self.range.start as f64);
            self.position = self.range.start as f64;
        } else {
            self.position = selection.selected_year as f64;
        }
        self.last_year = engine.selection().selected_year;

        self.handle = Some(self.timer.start(self.period));
        self.state = PlaybackState::Running;
        engine.set_playing(true);

        info!(year = self.last_year, "Year animation started");
    }

    /// Stop playback; a no-op when already stopped
    pub fn pause(&mut self, engine: &SelectionEngine) {
        if self.is_running() {
            self.stop(engine);
        }
    }

    pub fn toggle(&mut self, engine: &SelectionEngine) -> PlaybackState {
        if self.is_running() {
            self.pause(engine);
        } else {
            self.play(engine);
        }
        self.state
    }

    /// Fire the timer's tick if one is due
    pub fn poll(&mut self, engine: &SelectionEngine) -> TickOutcome {
        match self.timer.poll_due() {
            Some(handle) => self.tick(handle, engine),
            None => TickOutcome::Ignored,
        }
    }

    /// Handle one tick from the timer identified by `handle`
    pub fn tick(&mut self, handle: TimerHandle, engine: &SelectionEngine) -> TickOutcome {
        if self.state != PlaybackState::Running || self.handle != Some(handle) {
            return TickOutcome::Ignored;
        }

        let selection = engine.selection();
        if selection.selected_year != self.last_year {
            // Clicked or dragged elsewhere while running
            self.position = if selection.is_all_years() {
                self.range.start as f64
            } else {
                selection.selected_year as f64
            };
        }

        let end = self.range.end as f64;
        self.position = (self.position + 1.0).min(end);

        let outcome = match engine.years().closest(self.position) {
            Some(year) if year != selection.selected_year => {
                engine.set_year(year as f64);
                debug!(year, position = self.position, "Animation advanced");
                TickOutcome::Advanced(year)
            }
            _ => TickOutcome::Unchanged,
        };
        self.last_year = engine.selection().selected_year;

        if self.position >= end {
            self.stop(engine);
            return TickOutcome::Finished(self.last_year);
        }
        outcome
    }

    /// Time until the next tick, while running
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        if self.is_running() {
            self.timer.time_until_due()
        } else {
            None
        }
    }

    fn stop(&mut self, engine: &SelectionEngine) {
        self.timer.cancel();
        self.handle = None;
        self.state = PlaybackState::Stopped;
        engine.set_playing(false);

        info!(year = self.last_year, "Year animation stopped");
    }
}

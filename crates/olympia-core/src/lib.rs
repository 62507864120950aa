//! Core functionality for the Olympic athletes dashboard
//!
//! This crate owns the shared selection, the year animation and the
//! dashboard configuration. It has no knowledge of rendering.

pub mod animation;
pub mod config;
pub mod selection;
pub mod war;

// Re-export commonly used types
pub use animation::{
    AnimationDriver, Clock, IntervalTimer, ManualClock, PlaybackState, SystemAnimationDriver,
    SystemClock, TickOutcome, Timer, TimerHandle,
};
pub use config::{ConfigError, DashboardConfig, TransitionConfig, YearRange};
pub use selection::{
    OlympicYears, SelectionContext, SelectionEngine, SelectionState, SelectionSubscriber,
    Statistic, ALL_SPORTS, ALL_YEARS,
};
pub use war::{default_war_periods, WarPeriod};

//! Timer-driven year animation

mod driver;
mod timer;

pub use driver::{AnimationDriver, PlaybackState, TickOutcome};
pub use timer::{Clock, IntervalTimer, ManualClock, SystemClock, Timer, TimerHandle};

/// Driver running on wall-clock time, as used by the application
pub type SystemAnimationDriver = AnimationDriver<IntervalTimer<SystemClock>>;

//! Clock and repeating timer used by the animation driver

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Identifies one armed timer; ticks carrying a stale handle are ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Monotonic time source
pub trait Clock: Send + Sync {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock advanced by hand, for deterministic tests and replays.
///
/// Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now_ms.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.now_ms.load(Ordering::SeqCst))
    }
}

/// A single repeating timer
pub trait Timer {
    /// Arm the timer with a fixed period, cancelling any armed timer first
    fn start(&mut self, period: Duration) -> TimerHandle;

    /// Disarm the timer. No tick is reported after this returns.
    fn cancel(&mut self);

    /// Handle of the armed timer, if any
    fn active(&self) -> Option<TimerHandle>;

    /// Report at most one due tick and schedule the next one
    fn poll_due(&mut self) -> Option<TimerHandle>;

    /// Time left until the next tick is due
    fn time_until_due(&self) -> Option<Duration>;
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    handle: TimerHandle,
    period: Duration,
    next_due: Duration,
}

/// Repeating timer polled from the event loop
pub struct IntervalTimer<C: Clock> {
    clock: C,
    next_id: u64,
    armed: Option<Armed>,
}

impl<C: Clock> IntervalTimer<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 0,
            armed: None,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> Timer for IntervalTimer<C> {
    fn start(&mut self, period: Duration) -> TimerHandle {
        self.cancel();
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.armed = Some(Armed {
            handle,
            period,
            next_due: self.clock.now() + period,
        });
        handle
    }

    fn cancel(&mut self) {
        self.armed = None;
    }

    fn active(&self) -> Option<TimerHandle> {
        self.armed.map(|a| a.handle)
    }

    fn poll_due(&mut self) -> Option<TimerHandle> {
        let now = self.clock.now();
        let armed = self.armed.as_mut()?;
        if now < armed.next_due {
            return None;
        }

        // Missed periods are dropped rather than replayed in a burst
        armed.next_due += armed.period;
        if armed.next_due <= now {
            armed.next_due = now + armed.period;
        }
        Some(armed.handle)
    }

    fn time_until_due(&self) -> Option<Duration> {
        let armed = self.armed.as_ref()?;
        Some(armed.next_due.saturating_sub(self.clock.now()))
    }
}

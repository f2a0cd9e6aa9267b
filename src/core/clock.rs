//! Per-card live clocks and the registry that owns them.
//!
//! Every clock is a tokio task that republishes the destination's wall-clock
//! time into its own `watch` channel on a fixed interval. The task is stopped
//! through a oneshot cancellation token held by its [`ClockHandle`]; dropping
//! the handle cancels as well, so a cleared registry never leaks timers.

use crate::domain::ports::TimeSource;
use crate::domain::view::LiveClock;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_CLOCK_INTERVAL: Duration = Duration::from_secs(1);
/// Shorter intervals are raised to this; a zero period would kill the task.
pub const MIN_CLOCK_INTERVAL: Duration = Duration::from_millis(100);

/// 12-hour wall-clock time with seconds, e.g. `7:05:09 PM`.
pub fn format_clock_time(now: DateTime<Utc>, zone: Tz) -> String {
    now.with_timezone(&zone).format("%-I:%M:%S %p").to_string()
}

pub struct ClockHandle {
    zone: Tz,
    cancel: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ClockHandle {
    /// Start a clock for `zone`, refreshed every `interval` (at least
    /// [`MIN_CLOCK_INTERVAL`]).
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn(zone: Tz, interval: Duration, time: Arc<dyn TimeSource>) -> (Self, LiveClock) {
        let interval = interval.max(MIN_CLOCK_INTERVAL);
        let (display_tx, display_rx) = watch::channel(format_clock_time(time.now(), zone));
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // the first tick fires immediately and the initial value is already published
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = &mut cancel_rx => break,
                    _ = ticker.tick() => {
                        display_tx.send_replace(format_clock_time(time.now(), zone));
                    }
                }
            }
            tracing::trace!("Clock for {} stopped", zone.name());
        });

        tracing::debug!("Started clock for {} every {:?}", zone.name(), interval);

        let handle = Self {
            zone,
            cancel: Some(cancel_tx),
            task,
        };
        (handle, LiveClock::new(zone, display_rx))
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.cancel.take() {
            let _ = token.send(());
        }
        self.task.abort();
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for ClockHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockHandle")
            .field("zone", &self.zone)
            .field("cancelled", &self.cancel.is_none())
            .finish()
    }
}

/// Clocks belonging to the cards currently on screen.
#[derive(Debug, Default)]
pub struct ClockRegistry {
    clocks: Vec<ClockHandle>,
}

impl ClockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handle: ClockHandle) {
        self.clocks.push(handle);
    }

    /// Spawn a clock and register it in one step. Must be called from
    /// within a tokio runtime.
    pub fn start(&mut self, zone: Tz, interval: Duration, time: Arc<dyn TimeSource>) -> LiveClock {
        let (handle, live) = ClockHandle::spawn(zone, interval, time);
        self.register(handle);
        live
    }

    /// Cancel every clock and forget it. Returns how many were running.
    pub fn clear_all(&mut self) -> usize {
        let cleared = self.clocks.len();
        for mut clock in self.clocks.drain(..) {
            clock.cancel();
        }
        if cleared > 0 {
            tracing::debug!("Cancelled {} clock(s)", cleared);
        }
        cleared
    }

    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }

    pub fn zones(&self) -> Vec<Tz> {
        self.clocks.iter().map(ClockHandle::zone).collect()
    }
}

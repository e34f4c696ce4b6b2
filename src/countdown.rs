//! Countdown to the wedding day.
//!
//! `compute` is a pure function of the target instant and the current
//! instant. `CountdownTicker` re-derives the value on a fixed cadence and
//! publishes it through a `watch` channel until the target passes or the
//! ticker is cancelled.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Shortest tick period the ticker accepts.
const MIN_TICK_PERIOD: Duration = Duration::from_millis(1);

/// Whole days, hours, minutes and seconds left until the target instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RemainingTime {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl RemainingTime {
    /// Total milliseconds represented by the whole units.
    pub fn as_millis(&self) -> i64 {
        self.days as i64 * MS_PER_DAY
            + self.hours as i64 * MS_PER_HOUR
            + self.minutes as i64 * MS_PER_MINUTE
            + self.seconds as i64 * MS_PER_SECOND
    }
}

/// Result of a countdown computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining(RemainingTime),
    /// The target instant has been reached. Terminal.
    Expired,
}

impl Countdown {
    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Expired)
    }

    pub fn remaining(&self) -> Option<RemainingTime> {
        match self {
            Countdown::Remaining(remaining) => Some(*remaining),
            Countdown::Expired => None,
        }
    }

    /// Units to show on screen. An expired countdown reads all zeros.
    pub fn display_units(&self) -> RemainingTime {
        self.remaining().unwrap_or_default()
    }
}

/// Break the time between `now` and `target` into whole units.
///
/// Works at millisecond resolution. Anything at or past the target is
/// `Expired`; negative values are never produced.
pub fn compute<A: TimeZone, B: TimeZone>(target: &DateTime<A>, now: &DateTime<B>) -> Countdown {
    let delta = target.timestamp_millis() - now.timestamp_millis();
    if delta <= 0 {
        return Countdown::Expired;
    }

    Countdown::Remaining(RemainingTime {
        days: (delta / MS_PER_DAY) as u64,
        hours: ((delta / MS_PER_HOUR) % 24) as u32,
        minutes: ((delta / MS_PER_MINUTE) % 60) as u32,
        seconds: ((delta / MS_PER_SECOND) % 60) as u32,
    })
}

/// Source of the current instant.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Repeating countdown task tied to the lifetime of its owner.
///
/// The first value is computed synchronously in `start`. After that the
/// task recomputes once per period and stops on its own after publishing
/// `Expired`. Dropping the ticker cancels the task.
pub struct CountdownTicker {
    handle: Option<JoinHandle<()>>,
    receiver: watch::Receiver<Countdown>,
}

impl CountdownTicker {
    /// Start ticking towards `target` once per `period`.
    ///
    /// A period shorter than one millisecond (including zero) is raised to
    /// one millisecond. Must be called from within a tokio runtime.
    pub fn start<C: Clock>(target: DateTime<FixedOffset>, clock: C, period: Duration) -> Self {
        let period = period.max(MIN_TICK_PERIOD);
        let clock = Arc::new(clock);
        let initial = compute(&target, &clock.now());
        let (sender, receiver) = watch::channel(initial);

        if initial.is_expired() {
            info!("Countdown target {} already reached, not ticking", target);
            return Self {
                handle: None,
                receiver,
            };
        }

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately and was covered by `initial`
            interval.tick().await;

            loop {
                interval.tick().await;
                let next = compute(&target, &clock.now());
                if sender.send(next).is_err() {
                    debug!("Countdown receivers gone, stopping ticker");
                    break;
                }
                if next.is_expired() {
                    info!("Countdown reached target {}", target);
                    break;
                }
            }
        });

        Self {
            handle: Some(handle),
            receiver,
        }
    }

    /// Latest published value.
    pub fn current(&self) -> Countdown {
        *self.receiver.borrow()
    }

    /// New receiver for observers that want change notifications.
    pub fn subscribe(&self) -> watch::Receiver<Countdown> {
        self.receiver.clone()
    }

    /// Whether the periodic task is still alive.
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Stop the periodic task. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Countdown ticker cancelled");
        }
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

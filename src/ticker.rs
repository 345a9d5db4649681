use crate::consts;
use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Named tick cadences the host may drive the engine at.
///
/// Speed only sets how often a tick fires; the game rules never see it.
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Speed {
    /// Iterate over all speeds, slowest first
    pub fn iter() -> impl Iterator<Item = Speed> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    /// Time between simulation ticks at this speed
    pub fn period(self) -> Duration {
        match self {
            Speed::Slow => consts::SLOW_TICK_PERIOD,
            Speed::Normal => consts::NORMAL_TICK_PERIOD,
            Speed::Fast => consts::FAST_TICK_PERIOD,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A cancellable periodic schedule for simulation ticks.
///
/// The host supplies the clock: it asks [`Ticker::tick_due`] with the
/// current instant and runs one engine tick per `true` answer.  The next
/// deadline is armed only when the previous one is observed, so ticks
/// cannot interleave, and a cancelled schedule fires nothing at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ticker {
    period: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    /// Create a stopped ticker at `speed`
    pub fn new(speed: Speed) -> Ticker {
        Ticker {
            period: speed.period(),
            deadline: None,
        }
    }

    /// Arm the first deadline, one period after `now`
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Stop the schedule.  Unconditional and immediate; no tick is due
    /// afterwards until the ticker is started again.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time remaining until the next tick, if one is armed.  Zero once due.
    pub fn wait(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Report whether a tick is due at `now`, arming the next deadline when
    /// it is.  Rearms from `now` rather than from the missed deadline, so
    /// ticks never pile up behind a stalled host.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Switch to `speed`.  Any armed deadline is rescheduled from `now` so
    /// the stale period cannot fire.
    pub fn set_speed(&mut self, speed: Speed, now: Instant) {
        self.period = speed.period();
        if self.deadline.is_some() {
            self.start(now);
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

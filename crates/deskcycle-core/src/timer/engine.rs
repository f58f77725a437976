//! Activity engine implementation.
//!
//! The engine is a discrete state machine over one-second ticks. It does not
//! use internal threads - the caller is responsible for invoking `tick()`
//! once per wall-clock second while the countdown is running.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     --start_standing()-->   Standing
//! Standing --tick() reaches 0-->   PushUps      (pushup reminder)
//! Standing --finish_standing()-->  PushUps
//! PushUps  --complete_pushups()--> Sitting      (session deltas emitted)
//! Sitting  --tick() reaches 0-->   Standing     (stand reminder)
//! any non-Idle --reset()-->        Idle
//! ```
//!
//! The countdown is only live in Standing and Sitting. On entry to PushUps
//! the remaining time is frozen so that `complete_pushups()` can credit the
//! standing seconds actually spent, not the configured interval.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::IntervalConfig;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityState {
    Idle,
    Standing,
    PushUps,
    Sitting,
}

/// Core activity engine.
///
/// Operates on discrete ticks -- no internal thread, no wall-clock reads
/// besides event timestamps. The caller drives it once per second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEngine {
    config: IntervalConfig,
    state: ActivityState,
    /// Remaining seconds of the current period. Frozen while in PushUps,
    /// irrelevant in Idle.
    remaining_secs: u64,
    is_running: bool,
    pushup_count: u64,
}

impl ActivityEngine {
    /// Create an idle engine with the given interval config.
    pub fn new(config: IntervalConfig) -> Self {
        Self {
            config,
            state: ActivityState::Idle,
            remaining_secs: 0,
            is_running: false,
            pushup_count: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> ActivityState {
        self.state
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn pushup_count(&self) -> u64 {
        self.pushup_count
    }

    pub fn config(&self) -> IntervalConfig {
        self.config
    }

    /// Full duration of the current period, from the live config.
    pub fn period_total_secs(&self) -> u64 {
        match self.state {
            ActivityState::Standing => self.config.standing_secs,
            ActivityState::Sitting => self.config.sitting_secs,
            ActivityState::Idle | ActivityState::PushUps => 0,
        }
    }

    /// 0.0 .. 1.0 progress within the current period, measured against the
    /// live config. Zero outside a running countdown.
    pub fn period_progress(&self) -> f64 {
        let total = self.period_total_secs();
        if !self.is_running || total == 0 {
            return 0.0;
        }
        (total.saturating_sub(self.remaining_secs)) as f64 / total as f64
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            remaining_secs: self.remaining_secs,
            total_secs: self.period_total_secs(),
            is_running: self.is_running,
            pushup_count: self.pushup_count,
            progress: self.period_progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a standing period. Valid from any state: the explicit "begin"
    /// intent from Idle, and the automatic re-entry after a sitting period.
    pub fn start_standing(&mut self) -> Event {
        self.state = ActivityState::Standing;
        self.remaining_secs = self.config.standing_secs;
        self.is_running = true;
        Event::StandingStarted {
            duration_secs: self.config.standing_secs,
            at: Utc::now(),
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `Some(Event)` when the tick fired an automatic transition:
    /// [`Event::PushupsDue`] when a standing countdown ran out,
    /// [`Event::StandingStarted`] when a sitting countdown ran out and the
    /// cycle restarted. A tick with the timer stopped is a no-op.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        if self.state != ActivityState::Standing && self.state != ActivityState::Sitting {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }
        if self.remaining_secs > 0 {
            return None;
        }
        if self.state == ActivityState::Standing {
            Some(self.enter_pushups())
        } else {
            Some(self.start_standing())
        }
    }

    /// User-initiated early exit from Standing into PushUps, without waiting
    /// for the countdown. Returns `None` unless a standing countdown is live.
    pub fn finish_standing(&mut self) -> Option<Event> {
        if self.state != ActivityState::Standing || !self.is_running {
            return None;
        }
        Some(self.enter_pushups())
    }

    pub fn add_pushup(&mut self) -> u64 {
        self.pushup_count += 1;
        self.pushup_count
    }

    /// Decrement the counter. Already at zero is a no-op, not an error.
    pub fn sub_pushup(&mut self) -> u64 {
        self.pushup_count = self.pushup_count.saturating_sub(1);
        self.pushup_count
    }

    /// Fold the finished standing period into a [`Event::SittingStarted`] and
    /// begin the sitting countdown. Valid only in PushUps.
    ///
    /// The standing delta is the configured interval minus the remaining time
    /// frozen on entry to PushUps - the seconds actually spent standing, which
    /// is less than the full interval after [`finish_standing`].
    ///
    /// [`finish_standing`]: Self::finish_standing
    pub fn complete_pushups(&mut self) -> Option<Event> {
        if self.state != ActivityState::PushUps {
            return None;
        }
        let standing_delta_secs = self.config.standing_secs.saturating_sub(self.remaining_secs);
        let pushups = self.pushup_count;
        self.pushup_count = 0;
        self.state = ActivityState::Sitting;
        self.remaining_secs = self.config.sitting_secs;
        self.is_running = true;
        Some(Event::SittingStarted {
            standing_delta_secs,
            pushups,
            at: Utc::now(),
        })
    }

    /// Back to Idle, discarding any standing time and push-ups not yet folded
    /// into a session. Returns `None` when already idle.
    pub fn reset(&mut self) -> Option<Event> {
        if self.state == ActivityState::Idle {
            return None;
        }
        self.state = ActivityState::Idle;
        self.remaining_secs = 0;
        self.is_running = false;
        self.pushup_count = 0;
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Replace the interval config. Does not touch an in-progress countdown;
    /// only future periods pick up the new durations.
    pub fn set_config(&mut self, config: IntervalConfig) {
        self.config = config;
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn enter_pushups(&mut self) -> Event {
        // remaining_secs stays frozen where the countdown stopped; it feeds
        // the standing delta in complete_pushups.
        self.state = ActivityState::PushUps;
        self.is_running = false;
        Event::PushupsDue {
            elapsed_secs: self.config.standing_secs.saturating_sub(self.remaining_secs),
            at: Utc::now(),
        }
    }
}

impl Default for ActivityEngine {
    fn default() -> Self {
        Self::new(IntervalConfig::default())
    }
}

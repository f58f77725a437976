use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::ActivityState;

/// Every state change in the engine produces an Event.
/// The rendering surface polls snapshots; transition events carry the data
/// the caller needs to act on (session deltas, reminder triggers).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A standing period began, either by explicit intent or because a
    /// sitting countdown ran out.
    StandingStarted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The standing period ended (countdown or manual finish); the engine is
    /// now waiting for push-ups to be counted.
    PushupsDue {
        /// Standing seconds actually elapsed before the switch.
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    /// Push-ups were completed and the sitting countdown started. Carries the
    /// deltas to fold into the day's session.
    SittingStarted {
        standing_delta_secs: u64,
        pushups: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: ActivityState,
        remaining_secs: u64,
        total_secs: u64,
        is_running: bool,
        pushup_count: u64,
        progress: f64,
        at: DateTime<Utc>,
    },
}

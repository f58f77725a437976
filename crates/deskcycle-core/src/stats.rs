//! Aggregate views over the session log.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::store::SessionLog;

/// All-time totals across every recorded session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTotals {
    pub total_pushups: u64,
    pub total_standing_min: u64,
    pub total_sitting_min: u64,
    pub days_tracked: usize,
}

/// One day of the weekly series, zero-filled when no session exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStat {
    /// Short `MM-DD` label for chart axes.
    pub label: String,
    pub date: NaiveDate,
    pub standing_min: u64,
    pub sitting_min: u64,
    pub pushups: u64,
}

/// Seconds to whole minutes, rounded to nearest.
fn to_minutes(secs: u64) -> u64 {
    (secs + 30) / 60
}

pub fn totals(log: &SessionLog) -> ActivityTotals {
    ActivityTotals {
        total_pushups: log.iter().map(|s| s.pushups).sum(),
        total_standing_min: to_minutes(log.iter().map(|s| s.standing_time_secs).sum()),
        total_sitting_min: to_minutes(log.iter().map(|s| s.sitting_time_secs).sum()),
        days_tracked: log.len(),
    }
}

/// The seven days ending at `today`, oldest first, one entry per day.
pub fn last_seven_days(log: &SessionLog, today: NaiveDate) -> Vec<DailyStat> {
    (0..7)
        .rev()
        .map(|back| {
            let date = today
                .checked_sub_days(Days::new(back))
                .unwrap_or(today);
            let session = log.iter().find(|s| s.date == date);
            DailyStat {
                label: date.format("%m-%d").to_string(),
                date,
                standing_min: session.map_or(0, |s| to_minutes(s.standing_time_secs)),
                sitting_min: session.map_or(0, |s| to_minutes(s.sitting_time_secs)),
                pushups: session.map_or(0, |s| s.pushups),
            }
        })
        .collect()
}

//! Interval configuration.
//!
//! A single blob persisted under the `deskTrackerSettings` key as
//! `{"standing": <secs>, "sitting": <secs>}`. Loaded once at startup and
//! overwritten wholesale on save; a malformed or missing blob falls back to
//! the defaults (25 minutes standing, 35 minutes sitting).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Shortest accepted interval, in minutes.
pub const MIN_INTERVAL_MIN: u64 = 1;
/// Longest accepted interval, in minutes.
pub const MAX_INTERVAL_MIN: u64 = 120;

/// Durations of the standing and sitting periods, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalConfig {
    #[serde(rename = "standing", default = "default_standing_secs")]
    pub standing_secs: u64,
    #[serde(rename = "sitting", default = "default_sitting_secs")]
    pub sitting_secs: u64,
}

fn default_standing_secs() -> u64 {
    25 * 60
}
fn default_sitting_secs() -> u64 {
    35 * 60
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            standing_secs: default_standing_secs(),
            sitting_secs: default_sitting_secs(),
        }
    }
}

impl IntervalConfig {
    /// Build a config from whole minutes, rejecting values outside
    /// [`MIN_INTERVAL_MIN`]..=[`MAX_INTERVAL_MIN`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn from_minutes(standing_min: u64, sitting_min: u64) -> Result<Self, ValidationError> {
        check_minutes("standing", standing_min)?;
        check_minutes("sitting", sitting_min)?;
        Ok(Self {
            standing_secs: standing_min * 60,
            sitting_secs: sitting_min * 60,
        })
    }

    /// Both periods must be strictly positive.
    pub fn is_valid(&self) -> bool {
        self.standing_secs > 0 && self.sitting_secs > 0
    }

    /// # Errors
    ///
    /// Returns a [`ValidationError`] if either period is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.is_valid() {
            return Err(ValidationError::InvalidValue {
                field: "intervals".into(),
                message: "standing and sitting durations must be positive".into(),
            });
        }
        Ok(())
    }
}

fn check_minutes(field: &str, minutes: u64) -> Result<(), ValidationError> {
    if !(MIN_INTERVAL_MIN..=MAX_INTERVAL_MIN).contains(&minutes) {
        return Err(ValidationError::InvalidValue {
            field: field.into(),
            message: format!(
                "must be between {MIN_INTERVAL_MIN} and {MAX_INTERVAL_MIN} minutes, got {minutes}"
            ),
        });
    }
    Ok(())
}

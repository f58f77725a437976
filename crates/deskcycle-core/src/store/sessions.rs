//! Day-indexed activity log and interval settings over the blob store.
//!
//! Settings live as `{"standing": secs, "sitting": secs}` under the
//! `deskTrackerSettings` key, the log as a JSON array of
//! `{date, standingTime, sittingTime, pushups}` under `deskTrackerSessions`. The whole blob is rewritten on every
//! mutation; merge semantics live in [`upsert_session`], not in the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BlobStore, Database};
use crate::config::IntervalConfig;
use crate::error::StoreError;

/// Key of the persisted interval settings blob.
pub const SETTINGS_KEY: &str = "deskTrackerSettings";
/// Key of the persisted session log blob.
pub const SESSIONS_KEY: &str = "deskTrackerSessions";

/// Aggregated activity for one calendar date. At most one per date.
///
/// `sitting_time_secs` is carried in the wire format but never incremented
/// by the engine; see DESIGN.md.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySession {
    pub date: NaiveDate,
    #[serde(rename = "standingTime")]
    pub standing_time_secs: u64,
    #[serde(rename = "sittingTime")]
    pub sitting_time_secs: u64,
    pub pushups: u64,
}

impl ActivitySession {
    /// A zeroed record for `date`.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            standing_time_secs: 0,
            sitting_time_secs: 0,
            pushups: 0,
        }
    }
}

/// Insertion-ordered collection of sessions, unique by date.
pub type SessionLog = Vec<ActivitySession>;

/// Additively merge a completed period into the record for `date`, creating
/// a zeroed record first if none exists. Pure: returns the new log.
pub fn upsert_session(
    mut log: SessionLog,
    date: NaiveDate,
    standing_delta_secs: u64,
    pushup_delta: u64,
) -> SessionLog {
    match log.iter_mut().find(|s| s.date == date) {
        Some(session) => {
            session.standing_time_secs += standing_delta_secs;
            session.pushups += pushup_delta;
        }
        None => {
            let mut session = ActivitySession::empty(date);
            session.standing_time_secs = standing_delta_secs;
            session.pushups = pushup_delta;
            log.push(session);
        }
    }
    log
}

/// Today's local calendar date, the session bucketing key.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Reads and writes the settings and session blobs through a [`BlobStore`].
///
/// Loads recover from absent or malformed blobs by falling back to defaults;
/// only writes surface errors, and those are non-fatal to the engine - the
/// next successful mutation rewrites the full blob.
pub struct SessionStore {
    blob: Box<dyn BlobStore>,
}

impl SessionStore {
    pub fn new(blob: Box<dyn BlobStore>) -> Self {
        Self { blob }
    }

    /// Store over the default on-disk database.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(Box::new(Database::open()?)))
    }

    /// Direct access to the underlying blob store, for callers that persist
    /// their own keys alongside the session data (e.g. engine state).
    pub fn blob(&self) -> &dyn BlobStore {
        &*self.blob
    }

    /// Load the interval config, falling back to defaults when the blob is
    /// absent, malformed, or holds non-positive durations.
    pub fn load_config(&self) -> IntervalConfig {
        let Ok(Some(raw)) = self.blob.get(SETTINGS_KEY) else {
            return IntervalConfig::default();
        };
        match serde_json::from_str::<IntervalConfig>(&raw) {
            Ok(config) if config.is_valid() => config,
            _ => IntervalConfig::default(),
        }
    }

    /// # Errors
    /// Returns a [`StoreError`] if the write fails.
    pub fn save_config(&self, config: &IntervalConfig) -> Result<(), StoreError> {
        let raw = serde_json::to_string(config)?;
        self.blob.set(SETTINGS_KEY, &raw)
    }

    /// Load the session log, falling back to an empty log when the blob is
    /// absent or malformed.
    pub fn load_sessions(&self) -> SessionLog {
        let Ok(Some(raw)) = self.blob.get(SESSIONS_KEY) else {
            return SessionLog::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// # Errors
    /// Returns a [`StoreError`] if the write fails.
    pub fn save_sessions(&self, log: &SessionLog) -> Result<(), StoreError> {
        let raw = serde_json::to_string(log)?;
        self.blob.set(SESSIONS_KEY, &raw)
    }

    /// Fold a completed period into the record for `date` and persist the
    /// updated log.
    ///
    /// # Errors
    /// Returns a [`StoreError`] if the write fails; the returned log is lost
    /// but the store is untouched, so the next completion re-reads and
    /// re-merges from the persisted state.
    pub fn record_completion(
        &self,
        date: NaiveDate,
        standing_delta_secs: u64,
        pushup_delta: u64,
    ) -> Result<SessionLog, StoreError> {
        let log = upsert_session(
            self.load_sessions(),
            date,
            standing_delta_secs,
            pushup_delta,
        );
        self.save_sessions(&log)?;
        Ok(log)
    }
}

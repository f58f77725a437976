//! Long-lived activity tracker: engine + store + notifications + tick source.
//!
//! The engine lives behind a `tokio::sync::Mutex` shared with the tick task.
//! Intents that begin a period install a fresh tick source while still
//! holding the engine lock, so the old task can never slip in a tick between
//! the transition and the replacement.
//!
//! The in-memory engine is the source of truth. Persistence is best-effort:
//! a failed session write is returned to the caller as an error, but the
//! transition stands, and the next successful completion rewrites the full
//! log blob.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::IntervalConfig;
use crate::error::CoreError;
use crate::events::Event;
use crate::notify::Notify;
use crate::store::{local_today, SessionLog, SessionStore};
use crate::timer::{ActivityEngine, Ticker};

pub struct ActivityTracker {
    engine: Arc<Mutex<ActivityEngine>>,
    store: SessionStore,
    notifier: Arc<dyn Notify>,
    ticker: Ticker,
}

impl ActivityTracker {
    pub fn new(engine: ActivityEngine, store: SessionStore, notifier: Arc<dyn Notify>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            store,
            notifier,
            ticker: Ticker::new(),
        }
    }

    /// Begin a standing period and install its tick source.
    pub async fn start_standing(&mut self) -> Event {
        let mut engine = self.engine.lock().await;
        let event = engine.start_standing();
        self.ticker
            .install(Arc::clone(&self.engine), Arc::clone(&self.notifier));
        event
    }

    /// Early exit from Standing into PushUps. The tick source stays in place;
    /// ticks are no-ops until the sitting countdown starts.
    pub async fn finish_standing(&self) -> Option<Event> {
        self.engine.lock().await.finish_standing()
    }

    pub async fn add_pushup(&self) -> u64 {
        self.engine.lock().await.add_pushup()
    }

    pub async fn sub_pushup(&self) -> u64 {
        self.engine.lock().await.sub_pushup()
    }

    /// Complete the push-up step: start the sitting countdown (with a fresh
    /// tick source) and fold the period's deltas into today's session.
    ///
    /// # Errors
    /// Returns an error when persisting the session fails. The in-memory
    /// transition has still been applied; callers should surface the error
    /// as a warning, not roll back.
    pub async fn complete_pushups(&mut self) -> Result<Option<Event>, CoreError> {
        let event = {
            let mut engine = self.engine.lock().await;
            let event = engine.complete_pushups();
            if event.is_some() {
                self.ticker
                    .install(Arc::clone(&self.engine), Arc::clone(&self.notifier));
            }
            event
        };
        if let Some(Event::SittingStarted {
            standing_delta_secs,
            pushups,
            ..
        }) = &event
        {
            self.store
                .record_completion(local_today(), *standing_delta_secs, *pushups)?;
        }
        Ok(event)
    }

    /// Back to Idle; cancels the tick source and discards unfolded progress.
    pub async fn reset(&mut self) -> Option<Event> {
        let mut engine = self.engine.lock().await;
        let event = engine.reset();
        self.ticker.cancel();
        event
    }

    /// Replace the interval config and persist it immediately. An in-progress
    /// countdown keeps its remaining time.
    ///
    /// # Errors
    /// Returns an error for invalid durations, or when the write fails (the
    /// in-memory config has still been replaced).
    pub async fn update_settings(&self, config: IntervalConfig) -> Result<(), CoreError> {
        config.validate()?;
        self.engine.lock().await.set_config(config);
        self.store.save_config(&config)?;
        Ok(())
    }

    /// Install a tick source for a countdown restored mid-period, unless one
    /// is already live.
    pub async fn ensure_ticking(&mut self) {
        let engine = self.engine.lock().await;
        if engine.is_running() && !self.ticker.is_live() {
            self.ticker
                .install(Arc::clone(&self.engine), Arc::clone(&self.notifier));
        }
    }

    pub async fn snapshot(&self) -> Event {
        self.engine.lock().await.snapshot()
    }

    /// Clone of the current engine state, e.g. for persisting between runs.
    pub async fn engine_state(&self) -> ActivityEngine {
        self.engine.lock().await.clone()
    }

    pub fn sessions(&self) -> SessionLog {
        self.store.load_sessions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{BufferNotifier, NotificationKind};
    use crate::store::MemoryStore;
    use std::time::Duration;

    fn tracker_with(
        config: IntervalConfig,
    ) -> (ActivityTracker, Arc<BufferNotifier>) {
        let notifier = Arc::new(BufferNotifier::new());
        let store = SessionStore::new(Box::new(MemoryStore::new()));
        let tracker = ActivityTracker::new(
            ActivityEngine::new(config),
            store,
            Arc::clone(&notifier) as Arc<dyn Notify>,
        );
        (tracker, notifier)
    }

    #[tokio::test(start_paused = true)]
    async fn standing_period_raises_one_pushup_reminder() {
        let (mut tracker, notifier) = tracker_with(IntervalConfig {
            standing_secs: 5,
            sitting_secs: 3,
        });
        tracker.start_standing().await;

        tokio::time::sleep(Duration::from_millis(5500)).await;

        let engine = tracker.engine_state().await;
        assert_eq!(engine.state(), crate::timer::ActivityState::PushUps);
        let reminders = notifier.drain();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].kind, NotificationKind::PushupReminder);
    }

    #[tokio::test(start_paused = true)]
    async fn sitting_period_raises_stand_reminder_and_restarts() {
        let (mut tracker, notifier) = tracker_with(IntervalConfig {
            standing_secs: 5,
            sitting_secs: 3,
        });
        tracker.start_standing().await;
        tokio::time::sleep(Duration::from_millis(5500)).await;
        notifier.drain();

        tracker.complete_pushups().await.unwrap();
        tokio::time::sleep(Duration::from_millis(3500)).await;

        let engine = tracker.engine_state().await;
        assert_eq!(engine.state(), crate::timer::ActivityState::Standing);
        assert_eq!(engine.remaining_secs(), 5);
        let reminders = notifier.drain();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].kind, NotificationKind::StandReminder);
    }

    #[tokio::test(start_paused = true)]
    async fn completion_records_todays_session() {
        let (mut tracker, _notifier) = tracker_with(IntervalConfig {
            standing_secs: 5,
            sitting_secs: 3,
        });
        tracker.start_standing().await;
        tokio::time::sleep(Duration::from_millis(5500)).await;
        for _ in 0..12 {
            tracker.add_pushup().await;
        }

        tracker.complete_pushups().await.unwrap();

        let log = tracker.sessions();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].date, local_today());
        assert_eq!(log[0].standing_time_secs, 5);
        assert_eq!(log[0].sitting_time_secs, 0);
        assert_eq!(log[0].pushups, 12);
        assert_eq!(tracker.engine_state().await.pushup_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_persists_nothing() {
        let (mut tracker, _notifier) = tracker_with(IntervalConfig {
            standing_secs: 5,
            sitting_secs: 3,
        });
        tracker.start_standing().await;
        tokio::time::sleep(Duration::from_millis(2500)).await;
        for _ in 0..4 {
            tracker.add_pushup().await;
        }

        tracker.reset().await;

        assert!(tracker.sessions().is_empty());
        let engine = tracker.engine_state().await;
        assert_eq!(engine.state(), crate::timer::ActivityState::Idle);
        assert_eq!(engine.pushup_count(), 0);

        // The tick source is gone; time passing changes nothing.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(tracker.engine_state().await.remaining_secs(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_completions_merge_into_one_record() {
        let (mut tracker, _notifier) = tracker_with(IntervalConfig {
            standing_secs: 4,
            sitting_secs: 2,
        });

        for pushups in [10u64, 7] {
            tracker.start_standing().await;
            tokio::time::sleep(Duration::from_millis(4500)).await;
            for _ in 0..pushups {
                tracker.add_pushup().await;
            }
            tracker.complete_pushups().await.unwrap();
        }

        let log = tracker.sessions();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].standing_time_secs, 8);
        assert_eq!(log[0].pushups, 17);
    }

    #[tokio::test(start_paused = true)]
    async fn update_settings_applies_to_future_periods() {
        let (mut tracker, _notifier) = tracker_with(IntervalConfig {
            standing_secs: 10,
            sitting_secs: 3,
        });
        tracker.start_standing().await;
        tokio::time::sleep(Duration::from_millis(2500)).await;

        tracker
            .update_settings(IntervalConfig {
                standing_secs: 60,
                sitting_secs: 90,
            })
            .await
            .unwrap();

        // In-progress countdown untouched.
        assert_eq!(tracker.engine_state().await.remaining_secs(), 8);
        tracker.finish_standing().await.unwrap();
        tracker.complete_pushups().await.unwrap();
        assert_eq!(tracker.engine_state().await.remaining_secs(), 90);

        assert!(tracker
            .update_settings(IntervalConfig {
                standing_secs: 0,
                sitting_secs: 90,
            })
            .await
            .is_err());
    }
}

//! Full-cycle integration tests over the public tracker API.

use std::sync::Arc;
use std::time::Duration;

use deskcycle_core::notify::{BufferNotifier, NotificationKind, Notify};
use deskcycle_core::store::{local_today, MemoryStore};
use deskcycle_core::{ActivityEngine, ActivityState, ActivityTracker, IntervalConfig, SessionStore};

fn tracker_with(config: IntervalConfig) -> (ActivityTracker, Arc<BufferNotifier>) {
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
async fn full_cycle_stand_pushups_sit_stand() {
    let (mut tracker, notifier) = tracker_with(IntervalConfig {
        standing_secs: 10,
        sitting_secs: 4,
    });

    tracker.start_standing().await;
    tokio::time::sleep(Duration::from_millis(10_500)).await;

    let engine = tracker.engine_state().await;
    assert_eq!(engine.state(), ActivityState::PushUps);
    assert!(!engine.is_running());
    assert_eq!(
        notifier.drain()[0].kind,
        NotificationKind::PushupReminder
    );

    for _ in 0..20 {
        tracker.add_pushup().await;
    }
    tracker.sub_pushup().await;
    tracker.complete_pushups().await.unwrap();

    let engine = tracker.engine_state().await;
    assert_eq!(engine.state(), ActivityState::Sitting);
    assert_eq!(engine.remaining_secs(), 4);

    tokio::time::sleep(Duration::from_millis(4500)).await;
    let engine = tracker.engine_state().await;
    assert_eq!(engine.state(), ActivityState::Standing);
    assert_eq!(engine.remaining_secs(), 10);
    assert_eq!(notifier.drain()[0].kind, NotificationKind::StandReminder);

    let log = tracker.sessions();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].date, local_today());
    assert_eq!(log[0].standing_time_secs, 10);
    assert_eq!(log[0].pushups, 19);
}

#[tokio::test(start_paused = true)]
async fn early_finish_credits_elapsed_standing_only() {
    let (mut tracker, notifier) = tracker_with(IntervalConfig {
        standing_secs: 10,
        sitting_secs: 4,
    });

    tracker.start_standing().await;
    // 7 of the 10 configured seconds elapse before the manual finish.
    tokio::time::sleep(Duration::from_millis(7500)).await;
    tracker.finish_standing().await.unwrap();

    // The manual path raises no reminder.
    assert!(notifier.drain().is_empty());

    tracker.complete_pushups().await.unwrap();
    let log = tracker.sessions();
    assert_eq!(log[0].standing_time_secs, 7);
    assert_eq!(log[0].sitting_time_secs, 0);
}

#[tokio::test(start_paused = true)]
async fn restart_mid_sitting_replaces_the_countdown() {
    let (mut tracker, _notifier) = tracker_with(IntervalConfig {
        standing_secs: 6,
        sitting_secs: 100,
    });

    tracker.start_standing().await;
    tokio::time::sleep(Duration::from_millis(6500)).await;
    tracker.complete_pushups().await.unwrap();
    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(tracker.engine_state().await.remaining_secs(), 98);

    // Abandon the sitting period; exactly one tick source must survive.
    tracker.start_standing().await;
    tokio::time::sleep(Duration::from_millis(3500)).await;
    let engine = tracker.engine_state().await;
    assert_eq!(engine.state(), ActivityState::Standing);
    assert_eq!(engine.remaining_secs(), 3);
}

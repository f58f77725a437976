//! Replaceable one-second tick source.
//!
//! At most one tick task is ever live: [`Ticker::install`] aborts the
//! previous task before spawning the next. Callers install while holding the
//! engine lock - the tick task needs that same lock to run, so an in-flight
//! tick can never interleave with the state transition the installation
//! accompanies, and an aborted task parked on the lock never runs again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::events::Event;
use crate::notify::{Notification, Notify};
use crate::timer::ActivityEngine;

#[derive(Default)]
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any live tick task, then spawn a fresh one that advances the
    /// engine once per second and forwards reminder notifications.
    pub fn install(&mut self, engine: Arc<Mutex<ActivityEngine>>, notifier: Arc<dyn Notify>) {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; the countdown
            // starts one full second later.
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut engine = engine.lock().await;
                match engine.tick() {
                    Some(Event::PushupsDue { .. }) => {
                        notifier.notify(&Notification::pushup_reminder());
                    }
                    Some(Event::StandingStarted { .. }) => {
                        notifier.notify(&Notification::stand_reminder());
                    }
                    _ => {}
                }
            }
        }));
    }

    /// Abort the live tick task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_live(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

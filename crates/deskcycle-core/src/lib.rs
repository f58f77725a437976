//! # Deskcycle Core Library
//!
//! Core business logic for Deskcycle, a desk-activity reminder that
//! alternates timed standing and sitting periods with a push-up counting
//! step in between, and accumulates per-day totals for later review.
//!
//! ## Architecture
//!
//! - **Activity Engine**: a discrete state machine that requires the caller
//!   to invoke `tick()` once per second; it owns no threads of its own
//! - **Tracker**: wires the engine to the tick source, the session store,
//!   and the notification channel
//! - **Storage**: a SQLite-backed key/value store of whole JSON blobs for
//!   interval settings and the day-indexed session log
//! - **Stats**: totals and a seven-day series over the session log
//!
//! ## Key Components
//!
//! - [`ActivityEngine`]: core state machine
//! - [`ActivityTracker`]: long-lived service over the engine
//! - [`SessionStore`]: settings and session persistence
//! - [`Notify`]: fire-and-forget reminder channel

pub mod config;
pub mod error;
pub mod events;
pub mod notify;
pub mod stats;
pub mod store;
pub mod timer;
pub mod tracker;

pub use config::IntervalConfig;
pub use error::{CoreError, StoreError, ValidationError};
pub use events::Event;
pub use notify::{Notification, NotificationKind, Notify};
pub use stats::{ActivityTotals, DailyStat};
pub use store::{ActivitySession, Database, SessionLog, SessionStore};
pub use timer::{ActivityEngine, ActivityState, Ticker};
pub use tracker::ActivityTracker;

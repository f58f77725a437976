use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use clap::Subcommand;
use deskcycle_core::notify::{Notification, Notify};
use deskcycle_core::{ActivityEngine, ActivityState, ActivityTracker};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Begin a standing period
    Start,
    /// Print current timer state as JSON
    Status,
    /// Finish standing early and move to push-ups
    Finish,
    /// Reset to idle state
    Reset,
    /// Attend the countdown in the foreground until the next reminder
    Run,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;
    let mut engine = super::load_engine(&store);

    match action {
        TimerAction::Start => {
            let event = engine.start_standing();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Status => {
            let snapshot = engine.snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        TimerAction::Finish => match engine.finish_standing() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => {
                eprintln!("no standing countdown in progress");
                std::process::exit(1);
            }
        },
        TimerAction::Reset => match engine.reset() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("already idle"),
        },
        TimerAction::Run => {
            let rt = tokio::runtime::Runtime::new()?;
            engine = rt.block_on(run_attended(engine))?;
        }
    }

    super::save_engine(&store, &engine)?;
    Ok(())
}

/// Prints reminders as they fire; the toast channel of the terminal surface.
struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        println!("\n{}: {}", notification.message, notification.description);
    }
}

/// Drive the live countdown, rendering it in place, and return the updated
/// engine once an automatic transition fires.
async fn run_attended(
    engine: ActivityEngine,
) -> Result<ActivityEngine, Box<dyn std::error::Error>> {
    let store = super::open_store()?;
    let mut tracker = ActivityTracker::new(engine, store, Arc::new(ConsoleNotifier));

    let last_state = {
        let state = tracker.engine_state().await.state();
        match state {
            ActivityState::Idle => {
                tracker.start_standing().await;
                ActivityState::Standing
            }
            ActivityState::PushUps => {
                println!("push-ups pending; count them and run `deskcycle pushups complete`");
                return Ok(tracker.engine_state().await);
            }
            _ => {
                tracker.ensure_ticking().await;
                state
            }
        }
    };

    loop {
        let engine = tracker.engine_state().await;
        if engine.state() != last_state {
            break;
        }
        print!(
            "\r{:<10} {}  {:>3.0}%",
            state_label(engine.state()),
            format_mmss(engine.remaining_secs()),
            engine.period_progress() * 100.0
        );
        std::io::stdout().flush()?;
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
    println!();

    Ok(tracker.engine_state().await)
}

fn state_label(state: ActivityState) -> &'static str {
    match state {
        ActivityState::Idle => "Idle",
        ActivityState::Standing => "Standing",
        ActivityState::PushUps => "Push-ups",
        ActivityState::Sitting => "Sitting",
    }
}

fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

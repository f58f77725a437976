use clap::Subcommand;
use deskcycle_core::store::local_today;
use deskcycle_core::Event;

#[derive(Subcommand)]
pub enum PushupsAction {
    /// Count one push-up
    Add,
    /// Uncount one push-up
    Sub,
    /// Print the current count
    Show,
    /// Complete push-ups, record today's session, and start sitting
    Complete,
}

pub fn run(action: PushupsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;
    let mut engine = super::load_engine(&store);

    match action {
        PushupsAction::Add => println!("{}", engine.add_pushup()),
        PushupsAction::Sub => println!("{}", engine.sub_pushup()),
        PushupsAction::Show => println!("{}", engine.pushup_count()),
        PushupsAction::Complete => match engine.complete_pushups() {
            Some(event) => {
                if let Event::SittingStarted {
                    standing_delta_secs,
                    pushups,
                    ..
                } = &event
                {
                    // In-memory state is authoritative; a failed write only
                    // warns, and the next completion rewrites the full blob.
                    if let Err(e) =
                        store.record_completion(local_today(), *standing_delta_secs, *pushups)
                    {
                        eprintln!("warning: session not persisted: {e}");
                    }
                }
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            None => {
                eprintln!("no push-up step in progress");
                std::process::exit(1);
            }
        },
    }

    super::save_engine(&store, &engine)?;
    Ok(())
}

use clap::Subcommand;
use deskcycle_core::IntervalConfig;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the persisted interval settings as JSON
    Show,
    /// Replace the interval settings (minutes, 1-120)
    Set {
        /// Standing interval in minutes
        #[arg(long)]
        standing: u64,
        /// Sitting interval in minutes
        #[arg(long)]
        sitting: u64,
    },
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;

    match action {
        SettingsAction::Show => {
            let config = store.load_config();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        SettingsAction::Set { standing, sitting } => {
            // Range-checked here, before anything reaches the engine. The
            // engine re-reads this blob on every load, so future periods
            // pick the new durations up without touching a live countdown.
            let config = IntervalConfig::from_minutes(standing, sitting)?;
            store.save_config(&config)?;
            println!("Settings saved: your interval settings have been updated.");
        }
    }
    Ok(())
}

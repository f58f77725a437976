use clap::Subcommand;
use deskcycle_core::stats;
use deskcycle_core::store::local_today;
use deskcycle_core::ActivitySession;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's session
    Today,
    /// All-time totals
    All,
    /// Last seven days, oldest first
    Week,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;
    let log = store.load_sessions();

    match action {
        StatsAction::Today => {
            let today = local_today();
            let session = log
                .iter()
                .find(|s| s.date == today)
                .cloned()
                .unwrap_or_else(|| ActivitySession::empty(today));
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        StatsAction::All => {
            let totals = stats::totals(&log);
            println!("{}", serde_json::to_string_pretty(&totals)?);
        }
        StatsAction::Week => {
            let series = stats::last_seven_days(&log, local_today());
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
    }
    Ok(())
}

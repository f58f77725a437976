pub mod pushups;
pub mod settings;
pub mod stats;
pub mod timer;

use deskcycle_core::{ActivityEngine, SessionStore};

/// Key the serialized engine state lives under between invocations.
const ENGINE_KEY: &str = "activityEngine";

pub(crate) fn open_store() -> Result<SessionStore, Box<dyn std::error::Error>> {
    Ok(SessionStore::open_default()?)
}

/// Restore the engine persisted by the previous invocation, or build a fresh
/// idle one. The interval config is re-read from the settings blob either
/// way, so a `settings set` from another invocation applies to the next
/// period; an in-progress countdown keeps its persisted remaining time.
pub(crate) fn load_engine(store: &SessionStore) -> ActivityEngine {
    let config = store.load_config();
    if let Ok(Some(json)) = store.blob().get(ENGINE_KEY) {
        if let Ok(mut engine) = serde_json::from_str::<ActivityEngine>(&json) {
            engine.set_config(config);
            return engine;
        }
    }
    ActivityEngine::new(config)
}

pub(crate) fn save_engine(
    store: &SessionStore,
    engine: &ActivityEngine,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    store.blob().set(ENGINE_KEY, &json)?;
    Ok(())
}

mod engine;
mod ticker;

pub use engine::{ActivityEngine, ActivityState};
pub use ticker::Ticker;

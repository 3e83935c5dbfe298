//! The per-tick exploration behavior: configuration, chance events, and the
//! decision state machine.

mod config;
mod controller;
mod sampler;
mod state;

pub use config::BehaviorConfig;
pub use controller::ExplorationController;
pub use sampler::EventSampler;
pub use state::Phase;

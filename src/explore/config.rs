//! Exploration behavior configuration.

use serde::{Deserialize, Serialize};

/// Tunable parameters of the per-tick behavior.
///
/// The probabilities are per-tick chances, so the useful range is small:
/// a fault chance of 0.001 breaks an agent roughly once per thousand ticks.
/// Tests override them with 0.0 or 1.0 to suppress or force an event.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Per-tick chance of a permanent hardware fault.
    #[serde(default = "default_fault_probability")]
    pub fault_probability: f64,

    /// Per-tick chance of an exploratory clockwise turn.
    #[serde(default = "default_turn_probability")]
    pub turn_probability: f64,

    /// Forward translational speed (m/s).
    #[serde(default = "default_forward_speed")]
    pub forward_speed: f32,

    /// Random seed for chance draws; 0 draws a fresh seed from entropy.
    #[serde(default)]
    pub rng_seed: u64,
}

fn default_fault_probability() -> f64 {
    0.001
}

fn default_turn_probability() -> f64 {
    0.01
}

fn default_forward_speed() -> f32 {
    1.0
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            fault_probability: default_fault_probability(),
            turn_probability: default_turn_probability(),
            forward_speed: default_forward_speed(),
            rng_seed: 0,
        }
    }
}

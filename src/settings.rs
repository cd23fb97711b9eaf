//! Simulation settings
//!
//! Loaded from JSON by the embedding driver; every field falls back to its
//! default when missing.

use serde::{Deserialize, Serialize};

use crate::consts::{FINISH_DELAY, MAX_STEP};
use crate::error::SimError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Time a decided level keeps running before it reports finished
    pub finish_delay: f32,
    /// Seed for coin spring phases
    pub seed: u64,
    /// Longest time slice handed to a single tick
    pub max_step: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            finish_delay: FINISH_DELAY,
            seed: 0,
            max_step: MAX_STEP,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Settings = serde_json::from_str(json)?;
        log::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

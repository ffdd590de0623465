//! Planner configuration.

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Controls how a collection plan picks its starting location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Seed for the start-location choice. Unset means a fresh seed
    /// from the operating system on every run.
    pub seed: Option<u64>,

    /// Start the route at this location instead of a random one.
    pub start: Option<String>,
}

impl PlannerConfig {
    pub fn with_seed(seed: u64) -> Self {
        PlannerConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn starting_at(name: impl Into<String>) -> Self {
        PlannerConfig {
            start: Some(name.into()),
            ..Default::default()
        }
    }

    /// Builds the randomness source for the start-location choice.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

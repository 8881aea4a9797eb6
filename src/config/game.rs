//! Random game configuration structures

use crate::market::Weighted;
use serde::Deserialize;

/// A single lottery outcome
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameOutcome {
    pub id: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Net multiple of the stake; -1.0 loses the whole stake
    #[serde(default = "default_payout_multiplier")]
    pub payout_multiplier: f64,
}

fn default_weight() -> f64 {
    1.0
}

fn default_payout_multiplier() -> f64 {
    -1.0
}

impl GameOutcome {
    pub fn new(id: impl Into<String>, weight: f64, payout_multiplier: f64) -> Self {
        Self {
            id: id.into(),
            weight,
            payout_multiplier,
        }
    }
}

impl Weighted for GameOutcome {
    #[inline]
    fn weight(&self) -> f64 {
        self.weight
    }
}

/// Random game configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RandomGameConfig {
    pub default_stake: f64,
    pub outcomes: Vec<GameOutcome>,
}

impl Default for RandomGameConfig {
    fn default() -> Self {
        Self {
            default_stake: 1.0,
            outcomes: Vec::new(),
        }
    }
}

//! Territory betting configuration

use serde::Deserialize;

/// Odds-shaping parameters for territory-share betting
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerritoryConfig {
    /// Odds quoted for a perfectly even split, before margin
    pub base_odds: f64,
    /// House margin subtracted from `base_odds`
    pub margin: f64,
    pub min_odds: f64,
    pub max_odds: f64,
}

impl Default for TerritoryConfig {
    fn default() -> Self {
        Self {
            base_odds: 2.0,
            margin: 0.1,
            min_odds: 1.01,
            max_odds: 100.0,
        }
    }
}

impl TerritoryConfig {
    /// Base odds after margin, floored at `min_odds`
    #[inline]
    pub fn effective_base_odds(&self) -> f64 {
        (self.base_odds - self.margin).max(self.min_odds)
    }
}

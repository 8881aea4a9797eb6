//! Sports event configuration structures

use crate::market::Weighted;
use serde::Deserialize;
use smallvec::SmallVec;

/// Outcome list for one event; most markets are two- or three-way
pub type OutcomeList = SmallVec<[BetOutcome; 3]>;

/// A bettable outcome of a sports event
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BetOutcome {
    pub id: String,
    /// Relative likelihood used for simulation and pricing
    #[serde(default = "default_true_weight")]
    pub true_weight: f64,
    /// Quoted decimal odds paid on a win
    #[serde(default = "default_decimal_odds")]
    pub decimal_odds: f64,
}

fn default_true_weight() -> f64 {
    1.0
}

fn default_decimal_odds() -> f64 {
    2.0
}

impl BetOutcome {
    pub fn new(id: impl Into<String>, true_weight: f64, decimal_odds: f64) -> Self {
        Self {
            id: id.into(),
            true_weight,
            decimal_odds,
        }
    }
}

impl Weighted for BetOutcome {
    #[inline]
    fn weight(&self) -> f64 {
        self.true_weight
    }
}

/// Sports event configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventConfig {
    pub id: String,
    #[serde(default)]
    pub outcomes: OutcomeList,
    /// Bookmaker edge as a fraction, e.g. 0.05 for a 105% book
    #[serde(default)]
    pub overround_margin: f64,
}

impl EventConfig {
    pub fn new(id: impl Into<String>, overround_margin: f64) -> Self {
        Self {
            id: id.into(),
            outcomes: SmallVec::new(),
            overround_margin,
        }
    }

    /// Builder-style outcome append
    pub fn with_outcome(mut self, outcome: BetOutcome) -> Self {
        self.outcomes.push(outcome);
        self
    }

    pub fn outcome(&self, outcome_id: &str) -> Option<&BetOutcome> {
        self.outcomes.iter().find(|o| o.id == outcome_id)
    }

    pub fn outcome_mut(&mut self, outcome_id: &str) -> Option<&mut BetOutcome> {
        self.outcomes.iter_mut().find(|o| o.id == outcome_id)
    }

    /// First outcome id that appears more than once
    pub fn duplicate_outcome(&self) -> Option<&str> {
        self.outcomes.iter().enumerate().find_map(|(i, outcome)| {
            self.outcomes[..i]
                .iter()
                .any(|earlier| earlier.id == outcome.id)
                .then_some(outcome.id.as_str())
        })
    }
}

/// Sports betting configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SportsConfig {
    pub default_stake: f64,
    pub events: Vec<EventConfig>,
}

impl Default for SportsConfig {
    fn default() -> Self {
        Self {
            default_stake: 10.0,
            events: Vec::new(),
        }
    }
}

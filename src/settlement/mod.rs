//! Settlement of random-game rounds and sports bets
//!
//! Both paths are stateless: they read an outcome collection, a stake and a
//! random source, and return the monetary result. Expected-value queries use
//! the same inputs without drawing randomness.

mod random_game;
mod sports;

pub use random_game::*;
pub use sports::*;

/// Replaces non-positive stakes with a configured default
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StakePolicy {
    pub default_stake: f64,
}

impl StakePolicy {
    pub fn new(default_stake: f64) -> Self {
        Self { default_stake }
    }

    /// `stake` if positive, otherwise the default
    #[inline]
    pub fn effective_stake(&self, stake: f64) -> f64 {
        if stake > 0.0 {
            stake
        } else {
            self.default_stake
        }
    }
}

//! Discrete-outcome random game

use crate::config::{validate_game_outcomes, validate_random_game, GameOutcome, RandomGameConfig};
use crate::diagnostics::{default_sink, reported, SharedSink};
use crate::error::Result;
use crate::market::total_weight;
use crate::settlement::{random_game_expected_value, settle_random_game, GameRound, StakePolicy};
use rand::Rng;

/// Weighted lottery with per-outcome payout multipliers
pub struct RandomGame {
    policy: StakePolicy,
    outcomes: Vec<GameOutcome>,
    sink: SharedSink,
}

impl std::fmt::Debug for RandomGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomGame")
            .field("policy", &self.policy)
            .field("outcomes", &self.outcomes)
            .finish_non_exhaustive()
    }
}

impl RandomGame {
    /// Build a game from configuration
    ///
    /// An empty outcome table is accepted; rounds on it fail with `NoOutcomes`.
    pub fn new(config: RandomGameConfig) -> Result<Self> {
        validate_random_game(&config)?;

        Ok(Self {
            policy: StakePolicy::new(config.default_stake),
            outcomes: config.outcomes,
            sink: default_sink(),
        })
    }

    /// Route failure diagnostics to `sink` instead of `tracing`
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn default_stake(&self) -> f64 {
        self.policy.default_stake
    }

    pub fn set_default_stake(&mut self, stake: f64) {
        self.policy = StakePolicy::new(stake);
    }

    pub fn outcomes(&self) -> &[GameOutcome] {
        &self.outcomes
    }

    /// Replace the outcome table; an invalid table is rejected and the current one kept
    pub fn set_outcomes(&mut self, outcomes: Vec<GameOutcome>) -> Result<()> {
        let result = validate_game_outcomes(&outcomes).map(|()| self.outcomes = outcomes);
        reported(self.sink.as_ref(), "random_game.set_outcomes", result)
    }

    pub fn total_weight(&self) -> f64 {
        total_weight(&self.outcomes)
    }

    /// Draw one outcome and settle `stake` against it
    pub fn play_round<R>(&self, stake: f64, rng: &mut R) -> Result<GameRound>
    where
        R: Rng + ?Sized,
    {
        let result = settle_random_game(&self.outcomes, stake, self.policy, rng);
        reported(self.sink.as_ref(), "random_game.play_round", result)
    }

    /// Expected net result of one round, without drawing
    pub fn expected_value(&self, stake: f64) -> Result<f64> {
        let result = random_game_expected_value(&self.outcomes, stake, self.policy);
        reported(self.sink.as_ref(), "random_game.expected_value", result)
    }
}

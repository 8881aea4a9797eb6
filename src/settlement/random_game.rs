//! Random-game settlement

use super::StakePolicy;
use crate::config::GameOutcome;
use crate::error::{BettingError, Result};
use crate::market::{probabilities, sample_outcome, total_weight};
use rand::Rng;

/// Result of one random-game round
#[derive(Debug, Clone, PartialEq)]
pub struct GameRound {
    /// Stake actually used, after default substitution
    pub stake: f64,
    /// Sampled outcome; `None` only for a void round
    pub outcome: Option<GameOutcome>,
    /// `stake * payout_multiplier`
    pub net: f64,
}

impl GameRound {
    /// Zero-valued round, used when no outcome could be drawn
    pub fn void() -> Self {
        Self {
            stake: 0.0,
            outcome: None,
            net: 0.0,
        }
    }

    pub fn outcome_id(&self) -> Option<&str> {
        self.outcome.as_ref().map(|o| o.id.as_str())
    }
}

/// Draw an outcome and settle the stake against its payout multiplier
pub fn settle_random_game<R>(
    outcomes: &[GameOutcome],
    stake: f64,
    policy: StakePolicy,
    rng: &mut R,
) -> Result<GameRound>
where
    R: Rng + ?Sized,
{
    let stake = policy.effective_stake(stake);
    let index = sample_outcome(outcomes, rng)?;
    let outcome = &outcomes[index];

    Ok(GameRound {
        stake,
        net: stake * outcome.payout_multiplier,
        outcome: Some(outcome.clone()),
    })
}

/// Expected net result of one round: `stake * Σ p_i * multiplier_i`
pub fn random_game_expected_value(
    outcomes: &[GameOutcome],
    stake: f64,
    policy: StakePolicy,
) -> Result<f64> {
    if outcomes.is_empty() {
        return Err(BettingError::NoOutcomes);
    }

    if !total_weight(outcomes).is_finite() {
        return Err(BettingError::NonFiniteWeight);
    }

    let stake = policy.effective_stake(stake);
    let probs = probabilities(outcomes).ok_or(BettingError::ZeroTotalWeight)?;

    let multiplier: f64 = outcomes
        .iter()
        .zip(probs)
        .map(|(outcome, p)| p * outcome.payout_multiplier)
        .sum();

    Ok(stake * multiplier)
}

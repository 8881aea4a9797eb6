//! Sports bet settlement and expected value

use super::StakePolicy;
use crate::config::{BetOutcome, EventConfig};
use crate::error::{BettingError, Result};
use crate::market::{binary_expected_value, probability, sample_outcome, total_weight};
use rand::Rng;

/// Result of simulating an event and settling one bet on it
#[derive(Debug, Clone, PartialEq)]
pub struct SportsSettlement {
    /// Stake actually used, after default substitution
    pub stake: f64,
    pub winning_outcome_id: String,
    pub chosen_outcome_id: String,
    pub player_won: bool,
    /// `stake * (odds - 1)` on a win, `-stake` otherwise
    pub net: f64,
}

impl SportsSettlement {
    /// Zero-valued settlement for a bet that could not be resolved
    pub fn void() -> Self {
        Self {
            stake: 0.0,
            winning_outcome_id: String::new(),
            chosen_outcome_id: String::new(),
            player_won: false,
            net: 0.0,
        }
    }
}

fn find_outcome<'a>(event: &'a EventConfig, outcome_id: &str) -> Result<&'a BetOutcome> {
    event
        .outcome(outcome_id)
        .ok_or_else(|| BettingError::OutcomeNotFound {
            event: event.id.clone(),
            outcome: outcome_id.to_string(),
        })
}

/// Simulate the true result of `event` and settle a bet on `chosen_outcome_id`
///
/// The winner is drawn by true weight before the chosen outcome is resolved,
/// so an unknown choice still consumes one draw.
pub fn settle_sports_bet<R>(
    event: &EventConfig,
    chosen_outcome_id: &str,
    stake: f64,
    policy: StakePolicy,
    rng: &mut R,
) -> Result<SportsSettlement>
where
    R: Rng + ?Sized,
{
    let stake = policy.effective_stake(stake);

    let winner = &event.outcomes[sample_outcome(&event.outcomes, rng)?];
    let chosen = find_outcome(event, chosen_outcome_id)?;

    let player_won = chosen.id == winner.id;
    let net = if player_won {
        stake * (chosen.decimal_odds - 1.0)
    } else {
        -stake
    };

    Ok(SportsSettlement {
        stake,
        winning_outcome_id: winner.id.clone(),
        chosen_outcome_id: chosen.id.clone(),
        player_won,
        net,
    })
}

/// Expected net result of a bet at the outcome's quoted odds
///
/// Uses the outcome's share of the event's true weight as the win
/// probability. Draws no randomness and mutates nothing.
pub fn sports_expected_value(
    event: &EventConfig,
    outcome_id: &str,
    stake: f64,
    policy: StakePolicy,
) -> Result<f64> {
    let stake = policy.effective_stake(stake);
    let outcome = find_outcome(event, outcome_id)?;

    let total = total_weight(&event.outcomes);
    if !total.is_finite() {
        return Err(BettingError::NonFiniteWeight);
    }
    if total <= 0.0 {
        return Err(BettingError::ZeroTotalWeight);
    }

    let p_true = probability(outcome.true_weight, total);
    Ok(binary_expected_value(stake, p_true, outcome.decimal_odds))
}

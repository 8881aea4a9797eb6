//! Fair and margin-adjusted odds for sports events
//!
//! Quoted odds are `fair_odds / (1 + overround_margin)`: the house edge is
//! applied multiplicatively, so every outcome gives up the same fraction of
//! its fair price.

use crate::config::EventConfig;
use crate::error::{BettingError, Result};
use crate::market::{book_percentage, fair_odds, margin_factor, probability, total_weight};

/// Reprice every active outcome of `event` from its true weights
///
/// With no positive weight this is a no-op returning `ZeroTotalWeight`.
/// Inactive outcomes keep their previous odds.
pub fn recalculate_fair_odds(event: &mut EventConfig) -> Result<()> {
    let total = total_weight(&event.outcomes);
    if total <= 0.0 {
        return Err(BettingError::ZeroTotalWeight);
    }
    if !total.is_finite() {
        return Err(BettingError::NonFiniteWeight);
    }

    let factor = margin_factor(event.overround_margin);

    for outcome in event.outcomes.iter_mut() {
        if !(outcome.true_weight > 0.0) {
            continue;
        }

        let p_true = outcome.true_weight / total;
        outcome.decimal_odds = fair_odds(p_true) * factor;
    }

    Ok(())
}

/// Share of the event's true weight held by `outcome_id`
pub fn true_probability(event: &EventConfig, outcome_id: &str) -> Option<f64> {
    let outcome = event.outcome(outcome_id)?;
    let total = total_weight(&event.outcomes);
    if total <= 0.0 || !total.is_finite() {
        return None;
    }
    Some(probability(outcome.true_weight, total))
}

/// Margin-free odds for `outcome_id`, or `None` if it cannot win
pub fn outcome_fair_odds(event: &EventConfig, outcome_id: &str) -> Option<f64> {
    true_probability(event, outcome_id)
        .filter(|p| *p > 0.0)
        .map(fair_odds)
}

/// Sum of implied probabilities of the event's active quoted odds
pub fn event_book_percentage(event: &EventConfig) -> f64 {
    book_percentage(
        event
            .outcomes
            .iter()
            .filter(|o| o.true_weight > 0.0)
            .map(|o| o.decimal_odds),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BetOutcome;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn coin(margin: f64) -> EventConfig {
        EventConfig::new("coin", margin)
            .with_outcome(BetOutcome::new("A", 1.0, 0.0))
            .with_outcome(BetOutcome::new("B", 1.0, 0.0))
    }

    #[test]
    fn test_even_market_without_margin() {
        let mut event = coin(0.0);
        recalculate_fair_odds(&mut event).unwrap();
        assert_eq!(event.outcome("A").unwrap().decimal_odds, 2.0);
        assert_eq!(event.outcome("B").unwrap().decimal_odds, 2.0);
        assert_eq!(outcome_fair_odds(&event, "A"), Some(2.0));
    }

    #[test]
    fn test_even_market_with_margin() {
        let mut event = coin(0.1);
        recalculate_fair_odds(&mut event).unwrap();
        for id in ["A", "B"] {
            let odds = event.outcome(id).unwrap().decimal_odds;
            assert!(approx(odds, 2.0 / 1.1));
            assert!((odds - 1.818).abs() < 1e-3);
        }
        assert_eq!(outcome_fair_odds(&event, "A"), Some(2.0));
        assert!(approx(event_book_percentage(&event), 1.1));
    }

    #[test]
    fn test_three_way_market() {
        let mut event = EventConfig::new("derby", 0.05)
            .with_outcome(BetOutcome::new("Home", 5.0, 1.8))
            .with_outcome(BetOutcome::new("Draw", 2.0, 3.5))
            .with_outcome(BetOutcome::new("Away", 3.0, 2.4));
        recalculate_fair_odds(&mut event).unwrap();

        assert!(approx(event.outcome("Home").unwrap().decimal_odds, 2.0 / 1.05));
        assert!(approx(event.outcome("Draw").unwrap().decimal_odds, 5.0 / 1.05));
        assert!(approx(event.outcome("Away").unwrap().decimal_odds, (10.0 / 3.0) / 1.05));
        assert!(approx(event_book_percentage(&event), 1.05));
    }

    #[test]
    fn test_zero_weight_is_noop() {
        let mut event = EventConfig::new("void", 0.1)
            .with_outcome(BetOutcome::new("A", 0.0, 1.7))
            .with_outcome(BetOutcome::new("B", -2.0, 2.3));
        let before = event.clone();

        assert_eq!(recalculate_fair_odds(&mut event), Err(BettingError::ZeroTotalWeight));
        assert_eq!(event, before);
    }

    #[test]
    fn test_inactive_outcome_keeps_prior_odds() {
        let mut event = coin(0.0).with_outcome(BetOutcome::new("Void", 0.0, 17.0));
        recalculate_fair_odds(&mut event).unwrap();

        assert_eq!(event.outcome("Void").unwrap().decimal_odds, 17.0);
        assert_eq!(outcome_fair_odds(&event, "Void"), None);
        assert_eq!(true_probability(&event, "Void"), Some(0.0));
        // Inactive outcomes are left out of the book
        assert!(approx(event_book_percentage(&event), 1.0));
    }

    #[test]
    fn test_true_probability() {
        let event = EventConfig::new("derby", 0.0)
            .with_outcome(BetOutcome::new("Home", 5.0, 1.8))
            .with_outcome(BetOutcome::new("Away", 5.0, 1.8));
        assert_eq!(true_probability(&event, "Home"), Some(0.5));
        assert_eq!(true_probability(&event, "Draw"), None);

        let overflowing = EventConfig::new("huge", 0.0)
            .with_outcome(BetOutcome::new("Home", 1e308, 1.8))
            .with_outcome(BetOutcome::new("Away", 1e308, 1.8));
        assert_eq!(true_probability(&overflowing, "Home"), None);
    }

    #[test]
    fn test_recalculate_idempotent() {
        let mut event = EventConfig::new("derby", 0.07)
            .with_outcome(BetOutcome::new("Home", 5.0, 1.8))
            .with_outcome(BetOutcome::new("Draw", 2.0, 3.5))
            .with_outcome(BetOutcome::new("Away", 3.0, 2.4));
        recalculate_fair_odds(&mut event).unwrap();
        let first: Vec<u64> = event.outcomes.iter().map(|o| o.decimal_odds.to_bits()).collect();
        recalculate_fair_odds(&mut event).unwrap();
        let second: Vec<u64> = event.outcomes.iter().map(|o| o.decimal_odds.to_bits()).collect();
        assert_eq!(first, second);
    }
}

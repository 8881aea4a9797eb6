//! Configuration module for wager data structures
//!
//! Configuration is owned by the host. It can be built in code, loaded from
//! JSON, or extracted from Python dicts when the `python` feature is enabled.

mod game;
#[cfg(feature = "python")]
mod python;
mod sports;
mod territory;

pub use game::*;
#[cfg(feature = "python")]
pub use python::*;
pub use sports::*;
pub use territory::*;

use crate::error::{BettingError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Complete configuration for all three betting mechanics
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BettingConfig {
    pub territory: TerritoryConfig,
    pub random_game: RandomGameConfig,
    pub sports: SportsConfig,
}

impl BettingConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: BettingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BettingError::DeserializationError(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        validate_territory(&self.territory)?;
        validate_random_game(&self.random_game)?;
        validate_sports(&self.sports)
    }
}

fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(BettingError::InvalidConfig(message()))
    }
}

pub fn validate_territory(config: &TerritoryConfig) -> Result<()> {
    let TerritoryConfig {
        base_odds,
        margin,
        min_odds,
        max_odds,
    } = *config;

    ensure(
        [base_odds, margin, min_odds, max_odds]
            .iter()
            .all(|v| v.is_finite()),
        || "territory parameters must be finite".to_string(),
    )?;
    ensure(margin >= 0.0, || format!("territory margin {} is negative", margin))?;
    ensure(min_odds > 0.0, || format!("min_odds {} must be positive", min_odds))?;
    ensure(min_odds <= max_odds, || {
        format!("min_odds {} exceeds max_odds {}", min_odds, max_odds)
    })
}

pub fn validate_random_game(config: &RandomGameConfig) -> Result<()> {
    ensure(config.default_stake.is_finite(), || {
        "random game default_stake must be finite".to_string()
    })?;

    validate_game_outcomes(&config.outcomes)
}

/// Unique ids and finite values across a random game's outcome table
pub fn validate_game_outcomes(outcomes: &[GameOutcome]) -> Result<()> {
    let mut seen = HashSet::with_capacity(outcomes.len());
    for outcome in outcomes {
        ensure(seen.insert(outcome.id.as_str()), || {
            format!("duplicate random game outcome {}", outcome.id)
        })?;
        ensure(
            outcome.weight.is_finite() && outcome.payout_multiplier.is_finite(),
            || format!("random game outcome {} has non-finite values", outcome.id),
        )?;
    }
    Ok(())
}

pub fn validate_sports(config: &SportsConfig) -> Result<()> {
    ensure(config.default_stake.is_finite(), || {
        "sports default_stake must be finite".to_string()
    })?;

    let mut seen = HashSet::with_capacity(config.events.len());
    for event in &config.events {
        if !seen.insert(event.id.as_str()) {
            return Err(BettingError::DuplicateEvent(event.id.clone()));
        }
        validate_event(event)?;
    }
    Ok(())
}

pub fn validate_event(event: &EventConfig) -> Result<()> {
    if let Some(outcome) = event.duplicate_outcome() {
        return Err(BettingError::DuplicateOutcome {
            event: event.id.clone(),
            outcome: outcome.to_string(),
        });
    }
    ensure(
        event.overround_margin.is_finite() && event.overround_margin >= 0.0,
        || {
            format!(
                "event {} overround margin {} must be a non-negative number",
                event.id, event.overround_margin
            )
        },
    )?;
    event
        .outcomes
        .iter()
        .try_for_each(|outcome| validate_bet_outcome(&event.id, outcome))
}

pub fn validate_bet_outcome(event_id: &str, outcome: &BetOutcome) -> Result<()> {
    ensure(
        outcome.true_weight.is_finite() && outcome.decimal_odds.is_finite(),
        || format!("outcome {} in event {} has non-finite values", outcome.id, event_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = BettingConfig::from_json_str("{}").unwrap();
        assert_eq!(config.territory, TerritoryConfig::default());
        assert_eq!(config.random_game.default_stake, 1.0);
        assert_eq!(config.sports.default_stake, 10.0);
        assert!(config.sports.events.is_empty());
    }

    #[test]
    fn test_outcome_field_defaults() {
        let json = r#"{
            "random_game": { "outcomes": [ { "id": "bust" } ] },
            "sports": { "events": [ { "id": "derby", "outcomes": [ { "id": "Home" } ] } ] }
        }"#;
        let config = BettingConfig::from_json_str(json).unwrap();

        let bust = &config.random_game.outcomes[0];
        assert_eq!(bust.weight, 1.0);
        assert_eq!(bust.payout_multiplier, -1.0);

        let derby = &config.sports.events[0];
        assert_eq!(derby.overround_margin, 0.0);
        assert_eq!(derby.outcomes[0].true_weight, 1.0);
        assert_eq!(derby.outcomes[0].decimal_odds, 2.0);
    }

    #[test]
    fn test_full_document() {
        let json = r#"{
            "territory": { "base_odds": 3.0, "margin": 0.2, "min_odds": 1.1, "max_odds": 50.0 },
            "random_game": {
                "default_stake": 5.0,
                "outcomes": [
                    { "id": "lose", "weight": 6.0, "payout_multiplier": -1.0 },
                    { "id": "double", "weight": 3.0, "payout_multiplier": 1.0 },
                    { "id": "jackpot", "weight": 1.0, "payout_multiplier": 5.0 }
                ]
            },
            "sports": {
                "default_stake": 20.0,
                "events": [
                    {
                        "id": "derby",
                        "overround_margin": 0.05,
                        "outcomes": [
                            { "id": "Home", "true_weight": 5.0, "decimal_odds": 1.8 },
                            { "id": "Draw", "true_weight": 2.0, "decimal_odds": 3.5 },
                            { "id": "Away", "true_weight": 3.0, "decimal_odds": 2.4 }
                        ]
                    }
                ]
            }
        }"#;
        let config = BettingConfig::from_json_str(json).unwrap();
        assert_eq!(config.territory.base_odds, 3.0);
        assert_eq!(config.random_game.outcomes.len(), 3);
        assert_eq!(config.sports.events[0].outcomes.len(), 3);
        assert_eq!(config.sports.events[0].outcome("Draw").unwrap().decimal_odds, 3.5);
    }

    #[test]
    fn test_rejects_inverted_odds_bounds() {
        let json = r#"{ "territory": { "min_odds": 10.0, "max_odds": 2.0 } }"#;
        let err = BettingConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, BettingError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_negative_margin() {
        let json = r#"{ "sports": { "events": [ { "id": "derby", "overround_margin": -0.1 } ] } }"#;
        let err = BettingConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, BettingError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_duplicate_event() {
        let json = r#"{ "sports": { "events": [ { "id": "derby" }, { "id": "derby" } ] } }"#;
        let err = BettingConfig::from_json_str(json).unwrap_err();
        assert_eq!(err, BettingError::DuplicateEvent("derby".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_outcome() {
        let json = r#"{ "sports": { "events": [
            { "id": "derby", "outcomes": [ { "id": "Home" }, { "id": "Home" } ] }
        ] } }"#;
        let err = BettingConfig::from_json_str(json).unwrap_err();
        assert_eq!(
            err,
            BettingError::DuplicateOutcome {
                event: "derby".to_string(),
                outcome: "Home".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_mistyped_value() {
        let json = r#"{ "territory": { "base_odds": "abc" } }"#;
        let err = BettingConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, BettingError::DeserializationError(_)));
    }

    #[test]
    fn test_game_outcome_table() {
        let unique = [GameOutcome::new("a", 1.0, 1.0), GameOutcome::new("b", 2.0, -1.0)];
        assert!(validate_game_outcomes(&unique).is_ok());

        let duplicated = [GameOutcome::new("a", 1.0, 1.0), GameOutcome::new("a", 2.0, -1.0)];
        assert!(matches!(
            validate_game_outcomes(&duplicated),
            Err(BettingError::InvalidConfig(_))
        ));

        let infinite = [GameOutcome::new("a", f64::INFINITY, 1.0)];
        assert!(validate_game_outcomes(&infinite).is_err());
    }

    #[test]
    fn test_bet_outcome_values() {
        assert!(validate_bet_outcome("derby", &BetOutcome::new("Home", 1.0, 2.0)).is_ok());
        assert!(validate_bet_outcome("derby", &BetOutcome::new("Home", f64::NAN, 2.0)).is_err());
        assert!(validate_bet_outcome("derby", &BetOutcome::new("Home", 1.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = BettingConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, BettingError::DeserializationError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = BettingConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, BettingError::DeserializationError(_)));
    }
}

//! Extraction of wager configuration from Python dicts or objects

use super::{
    BetOutcome, BettingConfig, EventConfig, GameOutcome, RandomGameConfig, SportsConfig,
    TerritoryConfig,
};
use crate::error::BettingError;
use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods, PyList, PyListMethods};
use pyo3::Bound;

/// Helper to get attribute from either dict or object
fn get_attr<'py>(obj: &Bound<'py, pyo3::PyAny>, name: &str) -> pyo3::PyResult<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name)?
            .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(name.to_string()))
    } else {
        obj.getattr(name)
    }
}

/// Helper to get optional attribute from either dict or object
fn get_attr_opt<'py>(obj: &Bound<'py, pyo3::PyAny>, name: &str) -> Option<Bound<'py, pyo3::PyAny>> {
    let value = if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten()
    } else {
        obj.getattr(name).ok()
    };
    value.filter(|v| !v.is_none())
}

/// Read an optional float; a present value that does not convert is an error
fn get_f64_or(obj: &Bound<'_, pyo3::PyAny>, name: &str, default: f64) -> pyo3::PyResult<f64> {
    match get_attr_opt(obj, name) {
        Some(value) => value.extract().map_err(|_| {
            BettingError::DeserializationError(format!("{} must be a number", name)).into()
        }),
        None => Ok(default),
    }
}

/// Deserialize the full betting config from a Python dict
///
/// Every section is optional and falls back to its defaults.
pub fn deserialize_betting_config(config: &Bound<'_, PyDict>) -> pyo3::PyResult<BettingConfig> {
    let config = config.as_any();

    let territory = match get_attr_opt(config, "territory") {
        Some(obj) => extract_territory(&obj)?,
        None => TerritoryConfig::default(),
    };
    let random_game = match get_attr_opt(config, "random_game") {
        Some(obj) => extract_random_game(&obj)?,
        None => RandomGameConfig::default(),
    };
    let sports = match get_attr_opt(config, "sports") {
        Some(obj) => extract_sports(&obj)?,
        None => SportsConfig::default(),
    };

    let config = BettingConfig {
        territory,
        random_game,
        sports,
    };
    config.validate()?;
    Ok(config)
}

fn extract_territory(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<TerritoryConfig> {
    let defaults = TerritoryConfig::default();
    Ok(TerritoryConfig {
        base_odds: get_f64_or(obj, "base_odds", defaults.base_odds)?,
        margin: get_f64_or(obj, "margin", defaults.margin)?,
        min_odds: get_f64_or(obj, "min_odds", defaults.min_odds)?,
        max_odds: get_f64_or(obj, "max_odds", defaults.max_odds)?,
    })
}

fn extract_random_game(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<RandomGameConfig> {
    let defaults = RandomGameConfig::default();
    let mut outcomes = Vec::new();

    if let Some(list_obj) = get_attr_opt(obj, "outcomes") {
        let list: Bound<'_, PyList> = list_obj.extract()?;
        for item in list.iter() {
            outcomes.push(extract_game_outcome(&item)?);
        }
    }

    Ok(RandomGameConfig {
        default_stake: get_f64_or(obj, "default_stake", defaults.default_stake)?,
        outcomes,
    })
}

fn extract_game_outcome(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<GameOutcome> {
    let id: String = get_attr(obj, "id")?.extract()?;
    // Support both "weight" and "probability_weight" field names
    let weight_key = if get_attr_opt(obj, "weight").is_some() {
        "weight"
    } else {
        "probability_weight"
    };
    let weight = get_f64_or(obj, weight_key, 1.0)?;
    let payout_multiplier = get_f64_or(obj, "payout_multiplier", -1.0)?;

    Ok(GameOutcome::new(id, weight, payout_multiplier))
}

fn extract_sports(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<SportsConfig> {
    let defaults = SportsConfig::default();
    let mut events = Vec::new();

    if let Some(list_obj) = get_attr_opt(obj, "events") {
        let list: Bound<'_, PyList> = list_obj.extract()?;
        for item in list.iter() {
            events.push(extract_event(&item)?);
        }
    }

    Ok(SportsConfig {
        default_stake: get_f64_or(obj, "default_stake", defaults.default_stake)?,
        events,
    })
}

fn extract_event(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<EventConfig> {
    let id: String = get_attr(obj, "id")?.extract()?;
    let mut event = EventConfig::new(id, get_f64_or(obj, "overround_margin", 0.0)?);

    if let Some(list_obj) = get_attr_opt(obj, "outcomes") {
        let list: Bound<'_, PyList> = list_obj.extract()?;
        for item in list.iter() {
            event.outcomes.push(extract_bet_outcome(&item)?);
        }
    }

    Ok(event)
}

fn extract_bet_outcome(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<BetOutcome> {
    let id: String = get_attr(obj, "id")
        .map_err(|_| BettingError::DeserializationError("outcome id missing".to_string()))?
        .extract()?;
    Ok(BetOutcome::new(
        id,
        get_f64_or(obj, "true_weight", 1.0)?,
        get_f64_or(obj, "decimal_odds", 2.0)?,
    ))
}

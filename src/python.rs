//! Python bindings
//!
//! The host calls `init_config` once; engines live in a process-wide cache
//! guarded by a read-write lock so odds recalculation never overlaps a read.

use crate::config::{deserialize_betting_config, BettingConfig};
use crate::random_game::RandomGame;
use crate::sports::SportsBook;
use crate::territory::{BetColor, ShareOddsEngine};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::sync::Arc;

// ============================================================================
// Cached Engines
// ============================================================================

/// Engines built from the cached configuration
struct CachedHouse {
    territory: ShareOddsEngine,
    random_game: RandomGame,
    sports: SportsBook,
}

impl CachedHouse {
    fn build(config: BettingConfig) -> crate::error::Result<Self> {
        Ok(Self {
            territory: ShareOddsEngine::new(config.territory)?,
            random_game: RandomGame::new(config.random_game)?,
            sports: SportsBook::new(config.sports)?,
        })
    }
}

/// Global cached engines
static CACHED_HOUSE: OnceCell<Arc<RwLock<CachedHouse>>> = OnceCell::new();

fn cached_house() -> PyResult<Arc<RwLock<CachedHouse>>> {
    CACHED_HOUSE.get().cloned().ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
            "Config not initialized. Call init_config() first.",
        )
    })
}

fn parse_color(color: &str) -> PyResult<BetColor> {
    color.parse::<BetColor>().map_err(PyErr::from)
}

// ============================================================================
// Python Functions
// ============================================================================

/// Initialize (or replace) the betting configuration
///
/// Configured quoted odds are kept as-is until a recalculation is requested.
#[pyfunction]
fn init_config(config: &Bound<'_, PyDict>) -> PyResult<()> {
    let config = deserialize_betting_config(config)?;
    let house = CachedHouse::build(config)?;

    // If already initialized, update the config
    if let Some(existing) = CACHED_HOUSE.get() {
        *existing.write() = house;
    } else {
        let _ = CACHED_HOUSE.set(Arc::new(RwLock::new(house)));
    }

    Ok(())
}

/// Check if config is initialized
#[pyfunction]
fn is_config_initialized() -> bool {
    CACHED_HOUSE.get().is_some()
}

/// Set all four block counts and recalculate territory odds
#[pyfunction]
fn set_block_counts(blue: i64, orange: i64, green: i64, purple: i64) -> PyResult<()> {
    let house = cached_house()?;
    house
        .write()
        .territory
        .set_all_block_counts(blue, orange, green, purple);
    Ok(())
}

/// Set one color's block count, optionally recalculating immediately
#[pyfunction]
#[pyo3(signature = (color, count, recalculate=true))]
fn set_block_count(color: &str, count: i64, recalculate: bool) -> PyResult<()> {
    let color = parse_color(color)?;
    let house = cached_house()?;
    let mut guard = house.write();

    if recalculate {
        guard.territory.set_block_count_and_recalculate(color, count);
    } else {
        guard.territory.set_block_count(color, count);
    }
    Ok(())
}

/// Recalculate territory shares and odds
#[pyfunction]
fn recalculate_territory() -> PyResult<()> {
    cached_house()?.write().territory.recalculate();
    Ok(())
}

/// Returns `(block_count, share, decimal_odds)` for a color
#[pyfunction]
fn territory_bet_info(color: &str) -> PyResult<(u32, f64, f64)> {
    let color = parse_color(color)?;
    let info = cached_house()?.read().territory.bet_info(color);
    Ok((info.block_count, info.share, info.decimal_odds))
}

/// Expected value of a territory stake; 0 for unpriced colors
#[pyfunction]
fn territory_expected_value(color: &str, stake: f64) -> PyResult<f64> {
    let color = parse_color(color)?;
    Ok(cached_house()?.read().territory.expected_value(color, stake))
}

/// Play one random-game round
///
/// Returns `(net, outcome_id)`; a round that cannot be drawn returns
/// `(0.0, None)` and logs a diagnostic.
#[pyfunction]
#[pyo3(signature = (stake=0.0))]
fn play_round(stake: f64) -> PyResult<(f64, Option<String>)> {
    let house = cached_house()?;
    let guard = house.read();
    let round = guard
        .random_game
        .play_round(stake, &mut rand::thread_rng())
        .unwrap_or_else(|_| crate::settlement::GameRound::void());
    Ok((round.net, round.outcome.map(|o| o.id)))
}

/// Expected value of one random-game round; 0 when no outcome can be drawn
#[pyfunction]
#[pyo3(signature = (stake=0.0))]
fn random_game_expected_value(stake: f64) -> PyResult<f64> {
    Ok(cached_house()?
        .read()
        .random_game
        .expected_value(stake)
        .unwrap_or_default())
}

/// Simulate an event and settle a bet on it
///
/// Returns `(net, winning_outcome_id, player_won)`. Unknown events or
/// outcomes settle to `(0.0, None, False)`.
#[pyfunction]
#[pyo3(signature = (event_id, chosen_outcome_id, stake=0.0))]
fn settle_sports_bet(
    event_id: &str,
    chosen_outcome_id: &str,
    stake: f64,
) -> PyResult<(f64, Option<String>, bool)> {
    let house = cached_house()?;
    let guard = house.read();
    match guard
        .sports
        .settle(event_id, chosen_outcome_id, stake, &mut rand::thread_rng())
    {
        Ok(result) => Ok((result.net, Some(result.winning_outcome_id), result.player_won)),
        Err(_) => Ok((0.0, None, false)),
    }
}

/// Expected value of a sports bet, or `None` when it cannot be computed
#[pyfunction]
#[pyo3(signature = (event_id, outcome_id, stake=0.0))]
fn sports_expected_value(event_id: &str, outcome_id: &str, stake: f64) -> PyResult<Option<f64>> {
    Ok(cached_house()?
        .read()
        .sports
        .expected_value(event_id, outcome_id, stake)
        .ok())
}

/// Recalculate quoted odds for one event
///
/// Raises `KeyError` for unknown events and `RuntimeError` when the event
/// has no positive weight.
#[pyfunction]
fn recalculate_event_odds(event_id: &str) -> PyResult<()> {
    cached_house()?
        .write()
        .sports
        .recalculate_odds(event_id)
        .map_err(PyErr::from)
}

/// Recalculate quoted odds for every event; returns how many were repriced
#[pyfunction]
fn recalculate_all_event_odds() -> PyResult<usize> {
    Ok(cached_house()?.write().sports.recalculate_all_odds())
}

/// Current quoted odds for an outcome, or `None`
#[pyfunction]
fn quoted_odds(event_id: &str, outcome_id: &str) -> PyResult<Option<f64>> {
    Ok(cached_house()?.read().sports.quoted_odds(event_id, outcome_id))
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn wager_odds_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_config, m)?)?;
    m.add_function(wrap_pyfunction!(is_config_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(set_block_counts, m)?)?;
    m.add_function(wrap_pyfunction!(set_block_count, m)?)?;
    m.add_function(wrap_pyfunction!(recalculate_territory, m)?)?;
    m.add_function(wrap_pyfunction!(territory_bet_info, m)?)?;
    m.add_function(wrap_pyfunction!(territory_expected_value, m)?)?;
    m.add_function(wrap_pyfunction!(play_round, m)?)?;
    m.add_function(wrap_pyfunction!(random_game_expected_value, m)?)?;
    m.add_function(wrap_pyfunction!(settle_sports_bet, m)?)?;
    m.add_function(wrap_pyfunction!(sports_expected_value, m)?)?;
    m.add_function(wrap_pyfunction!(recalculate_event_odds, m)?)?;
    m.add_function(wrap_pyfunction!(recalculate_all_event_odds, m)?)?;
    m.add_function(wrap_pyfunction!(quoted_odds, m)?)?;
    Ok(())
}

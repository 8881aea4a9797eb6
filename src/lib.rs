//! Wager Odds Core - odds, probability and settlement engine
//!
//! This crate prices and settles three wager mechanics:
//!
//! * territory-share betting ([`territory::ShareOddsEngine`]), where odds move
//!   inversely with a color's share of the claimed blocks;
//! * discrete-outcome random games ([`random_game::RandomGame`]);
//! * sports event betting ([`sports::SportsBook`]), where quoted odds are fair
//!   odds scaled down by the bookmaker's overround.
//!
//! Randomness is always supplied by the caller as a [`rand::Rng`]. Python
//! bindings are available behind the `python` feature.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod market;
pub mod random_game;
pub mod settlement;
pub mod sports;
pub mod territory;

#[cfg(feature = "python")]
mod python;

pub use config::{BetOutcome, BettingConfig, EventConfig, GameOutcome};
pub use error::{BettingError, ErrorCategory, Result};
pub use random_game::RandomGame;
pub use settlement::{GameRound, SportsSettlement, StakePolicy};
pub use sports::SportsBook;
pub use territory::{BetColor, ColorBetInfo, ShareOddsEngine};

//! Inverse-share odds for territory betting
//!
//! Each color's odds are anchored so an even split pays the effective base
//! odds, and scale with `average_share / share`: a color holding less of the
//! pool pays proportionally more.

use super::BetColor;
use crate::config::{validate_territory, TerritoryConfig};
use crate::error::Result;
use crate::market::binary_expected_value;

/// Block count and derived pricing for one color
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorBetInfo {
    pub block_count: u32,
    /// Fraction of all claimed blocks; 0 until recalculated
    pub share: f64,
    /// Decimal odds; 0 when the color holds no blocks
    pub decimal_odds: f64,
}

impl ColorBetInfo {
    #[inline]
    pub fn is_priced(&self) -> bool {
        self.share > 0.0 && self.decimal_odds > 0.0
    }
}

/// Share and odds engine for the four territory colors
#[derive(Debug, Clone)]
pub struct ShareOddsEngine {
    config: TerritoryConfig,
    colors: [ColorBetInfo; BetColor::COUNT],
}

impl Default for ShareOddsEngine {
    fn default() -> Self {
        Self::with_valid_config(TerritoryConfig::default())
    }
}

impl ShareOddsEngine {
    /// Create an engine; rejects non-finite parameters and `min_odds > max_odds`
    pub fn new(config: TerritoryConfig) -> Result<Self> {
        validate_territory(&config)?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: TerritoryConfig) -> Self {
        Self {
            config,
            colors: [ColorBetInfo::default(); BetColor::COUNT],
        }
    }

    pub fn config(&self) -> &TerritoryConfig {
        &self.config
    }

    /// Replace odds parameters; derived odds update on the next recalculation
    ///
    /// An invalid config is rejected and the current one kept.
    pub fn set_config(&mut self, config: TerritoryConfig) -> Result<()> {
        validate_territory(&config)?;
        self.config = config;
        Ok(())
    }

    /// Store a block count, clamping negatives to zero. Does not recalculate.
    pub fn set_block_count(&mut self, color: BetColor, count: i64) {
        self.colors[color.index()].block_count = count.clamp(0, u32::MAX as i64) as u32;
    }

    pub fn set_block_count_and_recalculate(&mut self, color: BetColor, count: i64) {
        self.set_block_count(color, count);
        self.recalculate();
    }

    /// Set every color at once and recalculate
    pub fn set_all_block_counts(&mut self, blue: i64, orange: i64, green: i64, purple: i64) {
        self.set_block_count(BetColor::Blue, blue);
        self.set_block_count(BetColor::Orange, orange);
        self.set_block_count(BetColor::Green, green);
        self.set_block_count(BetColor::Purple, purple);
        self.recalculate();
    }

    /// Recompute every color's share and odds from the current block counts
    pub fn recalculate(&mut self) {
        let total_blocks = self.total_blocks();
        let active = self.colors.iter().filter(|c| c.block_count > 0).count();

        if active == 0 || total_blocks == 0 {
            for info in &mut self.colors {
                info.share = 0.0;
                info.decimal_odds = 0.0;
            }
            return;
        }

        let total = total_blocks as f64;
        let average_share = 1.0 / active as f64;
        let base = self.config.effective_base_odds();
        let TerritoryConfig {
            min_odds, max_odds, ..
        } = self.config;

        for info in &mut self.colors {
            if info.block_count == 0 {
                info.share = 0.0;
                info.decimal_odds = 0.0;
                continue;
            }

            info.share = info.block_count as f64 / total;
            info.decimal_odds = (base * (average_share / info.share)).clamp(min_odds, max_odds);
        }
    }

    /// Sum of all block counts
    pub fn total_blocks(&self) -> u64 {
        self.colors.iter().map(|c| c.block_count as u64).sum()
    }

    #[inline]
    pub fn odds(&self, color: BetColor) -> f64 {
        self.colors[color.index()].decimal_odds
    }

    #[inline]
    pub fn share(&self, color: BetColor) -> f64 {
        self.colors[color.index()].share
    }

    #[inline]
    pub fn block_count(&self, color: BetColor) -> u32 {
        self.colors[color.index()].block_count
    }

    #[inline]
    pub fn bet_info(&self, color: BetColor) -> ColorBetInfo {
        self.colors[color.index()]
    }

    /// All colors with their current pricing, in `BetColor::ALL` order
    pub fn snapshot(&self) -> [(BetColor, ColorBetInfo); BetColor::COUNT] {
        BetColor::ALL.map(|color| (color, self.bet_info(color)))
    }

    /// Expected net result of staking on `color`, winning with probability `share`
    ///
    /// Returns 0 for a non-positive stake or an unpriced color.
    pub fn expected_value(&self, color: BetColor, stake: f64) -> f64 {
        if !(stake > 0.0) {
            return 0.0;
        }

        let info = self.bet_info(color);
        if !info.is_priced() {
            return 0.0;
        }

        binary_expected_value(stake, info.share, info.decimal_odds)
    }
}

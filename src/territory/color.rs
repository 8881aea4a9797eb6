//! Territory colors

use crate::error::BettingError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The four fixed territory colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetColor {
    Blue,
    Orange,
    Green,
    Purple,
}

impl BetColor {
    pub const COUNT: usize = 4;

    pub const ALL: [BetColor; BetColor::COUNT] = [
        BetColor::Blue,
        BetColor::Orange,
        BetColor::Green,
        BetColor::Purple,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            BetColor::Blue => 0,
            BetColor::Orange => 1,
            BetColor::Green => 2,
            BetColor::Purple => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BetColor::Blue => "blue",
            BetColor::Orange => "orange",
            BetColor::Green => "green",
            BetColor::Purple => "purple",
        }
    }
}

impl fmt::Display for BetColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BetColor {
    type Err = BettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive without allocating
        BetColor::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BettingError::UnknownColor(s.to_string()))
    }
}

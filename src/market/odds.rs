//! Weights to probabilities, fair odds and expected value

use super::Weighted;

/// Sum of the strictly positive weights in a collection
#[inline]
pub fn total_weight<T: Weighted>(items: &[T]) -> f64 {
    items
        .iter()
        .map(Weighted::weight)
        .filter(|w| *w > 0.0)
        .sum()
}

/// Normalized probability for every member, in collection order
///
/// Inactive members get 0. Returns `None` when no probability mass exists.
pub fn probabilities<T: Weighted>(items: &[T]) -> Option<Vec<f64>> {
    let total = total_weight(items);
    if total <= 0.0 || !total.is_finite() {
        return None;
    }

    Some(
        items
            .iter()
            .map(|item| {
                let w = item.weight();
                if w > 0.0 {
                    w / total
                } else {
                    0.0
                }
            })
            .collect(),
    )
}

/// Probability of a single weight within a known positive total
#[inline]
pub fn probability(weight: f64, total: f64) -> f64 {
    if weight > 0.0 && total > 0.0 {
        weight / total
    } else {
        0.0
    }
}

/// Fair decimal odds for a probability (`1 / p`), or 0 without mass
#[inline]
pub fn fair_odds(probability: f64) -> f64 {
    if probability > 0.0 {
        1.0 / probability
    } else {
        0.0
    }
}

/// Multiplicative overround factor applied to fair odds
#[inline]
pub fn margin_factor(overround_margin: f64) -> f64 {
    1.0 / (1.0 + overround_margin)
}

/// Expected net result of a single-outcome bet
///
/// `stake * (p * (odds - 1) - (1 - p))`
#[inline]
pub fn binary_expected_value(stake: f64, probability: f64, decimal_odds: f64) -> f64 {
    stake * (probability * (decimal_odds - 1.0) - (1.0 - probability))
}

/// Sum of implied probabilities (`1 / odds`) over positive odds
///
/// A fair book sums to 1.0. Anything above it is the bookmaker's edge.
pub fn book_percentage<I>(odds: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    odds.into_iter()
        .filter(|o| *o > 0.0)
        .map(|o| 1.0 / o)
        .sum()
}

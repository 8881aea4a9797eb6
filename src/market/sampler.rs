//! Weighted outcome selection

use super::{total_weight, Weighted};
use crate::error::{BettingError, Result};
use rand::Rng;

/// Select the member covering `point` on the cumulative weight line
///
/// Members are accumulated in collection order, skipping inactive ones, and
/// the first whose running total reaches `point` wins. If accumulation error
/// leaves `point` past the final total, the last active member is chosen.
/// Returns `None` only when no member is active.
#[inline]
pub fn select_at<T: Weighted>(items: &[T], point: f64) -> Option<usize> {
    let mut accumulated = 0.0;

    for (index, item) in items.iter().enumerate() {
        let weight = item.weight();
        if weight <= 0.0 || weight.is_nan() {
            continue;
        }

        accumulated += weight;
        if point <= accumulated {
            return Some(index);
        }
    }

    // Fallback to last active item
    items.iter().rposition(Weighted::is_active)
}

/// Sample one member with probability proportional to its weight
///
/// Consumes exactly one draw from `rng`, uniform over `[0, total]`.
pub fn sample_outcome<T, R>(items: &[T], rng: &mut R) -> Result<usize>
where
    T: Weighted,
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(BettingError::NoOutcomes);
    }

    let total = total_weight(items);
    if !total.is_finite() {
        return Err(BettingError::NonFiniteWeight);
    }
    if total <= 0.0 {
        return Err(BettingError::ZeroTotalWeight);
    }

    let point = rng.gen_range(0.0..=total);
    select_at(items, point).ok_or(BettingError::ZeroTotalWeight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_select_single() {
        assert_eq!(select_at(&[1.0], 0.5), Some(0));
    }

    #[test]
    fn test_select_upper_bound_picks_last_active() {
        let items = vec![1.0, 0.0, 3.0];
        assert_eq!(select_at(&items, 4.0), Some(2));
    }

    #[test]
    fn test_select_boundaries() {
        let items = vec![1.0, 0.0, 3.0];
        assert_eq!(select_at(&items, 0.0), Some(0));
        assert_eq!(select_at(&items, 1.0), Some(0));
        assert_eq!(select_at(&items, 1.000_001), Some(2));
    }

    #[test]
    fn test_select_overshoot_falls_back() {
        let items = vec![1.0, 2.0, 0.0];
        assert_eq!(select_at(&items, 3.000_000_1), Some(1));
    }

    #[test]
    fn test_select_all_inactive() {
        assert_eq!(select_at(&[0.0, -1.0], 0.0), None);
    }

    #[test]
    fn test_sample_empty() {
        let items: Vec<f64> = vec![];
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample_outcome(&items, &mut rng), Err(BettingError::NoOutcomes));
    }

    #[test]
    fn test_sample_all_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            sample_outcome(&[0.0, 0.0, -1.0], &mut rng),
            Err(BettingError::ZeroTotalWeight)
        );
    }

    #[test]
    fn test_sample_infinite_weight() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            sample_outcome(&[1.0, f64::INFINITY], &mut rng),
            Err(BettingError::NonFiniteWeight)
        );
    }

    #[test]
    fn test_sample_never_picks_inactive() {
        let items = vec![0.0, 2.0, -1.0, 1.0];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let index = sample_outcome(&items, &mut rng).unwrap();
            assert!(index == 1 || index == 3);
        }
    }

    #[test]
    fn test_sample_distribution() {
        let items = vec![1.0, 1.0];
        let mut counts = [0, 0];
        let mut rng = StdRng::seed_from_u64(1234);

        for _ in 0..1000 {
            let index = sample_outcome(&items, &mut rng).unwrap();
            counts[index] += 1;
        }

        // Both should be selected roughly equally (within 20% tolerance)
        let ratio = counts[0] as f64 / counts[1] as f64;
        assert!(ratio > 0.6 && ratio < 1.4);
    }
}

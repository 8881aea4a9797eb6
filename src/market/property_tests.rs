//! Property tests for the market module
//!
//! Property 1: Normalized probabilities sum to one
//! Property 2: Sampler always selects an active member
//! Property 3: Upper-bound draws resolve to the last active member

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::BettingError;
use crate::market::odds::{probabilities, total_weight};
use crate::market::sampler::{sample_outcome, select_at};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Weights with a mix of active and inactive members
fn mixed_weights_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![
            3 => 0.01..=100.0f64,
            1 => Just(0.0f64),
            1 => -10.0..0.0f64,
        ],
        1..=12,
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property 1: Probabilities over active members sum to 1
    #[test]
    fn prop_probabilities_sum_to_one(weights in mixed_weights_strategy()) {
        match probabilities(&weights) {
            Some(probs) => {
                let sum: f64 = probs.iter().sum();
                prop_assert!((sum - 1.0).abs() < 1e-9, "sum was {}", sum);
                for (p, w) in probs.iter().zip(&weights) {
                    if *w <= 0.0 {
                        prop_assert_eq!(*p, 0.0);
                    }
                }
            }
            None => prop_assert!(total_weight(&weights) <= 0.0),
        }
    }

    /// Property 2: Sampling selects an active member or reports failure
    #[test]
    fn prop_sample_selects_active(weights in mixed_weights_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        match sample_outcome(&weights, &mut rng) {
            Ok(index) => prop_assert!(weights[index] > 0.0),
            Err(err) => {
                prop_assert_eq!(err, BettingError::ZeroTotalWeight);
                prop_assert!(weights.iter().all(|w| *w <= 0.0));
            }
        }
    }

    /// Property 3: A draw at or beyond the total picks the last active member
    #[test]
    fn prop_upper_bound_selects_last_active(
        weights in mixed_weights_strategy(),
        overshoot in 0.0..=1e-6f64
    ) {
        let total = total_weight(&weights);
        prop_assume!(total > 0.0);

        let expected = weights.iter().rposition(|w| *w > 0.0);
        prop_assert_eq!(select_at(&weights, total + overshoot), expected);
    }

    /// Property 3.2: Every point inside the weight line resolves to an active member
    #[test]
    fn prop_select_in_range_is_active(
        weights in mixed_weights_strategy(),
        fraction in 0.0..=1.0f64
    ) {
        let total = total_weight(&weights);
        prop_assume!(total > 0.0);

        let index = select_at(&weights, fraction * total);
        prop_assert!(index.is_some());
        prop_assert!(weights[index.unwrap()] > 0.0);
    }
}

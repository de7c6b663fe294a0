//! Weight vector operators for the genetic loop.
//!
//! - **Initialization**: [`random`] draws each weight uniformly from an integer
//!   range
//! - **Crossover**: [`average`] takes the elementwise mean of two parents
//! - **Mutation**: [`mutate`] nudges individual weights by `-step`, `0` or `+step`
//!
//! # Mutation Rate
//!
//! [`mutate`] first decides, with probability `rate`, whether a weight is
//! touched at all, and then picks the delta uniformly from `{-1, 0, +1}`
//! (times `step`). One of the three outcomes is a no-op, so the chance that a
//! weight actually changes is `rate × 2/3` (1/6 for the default rate of 1/4).
//! This two-stage structure is intended.

use std::ops::RangeInclusive;

use rand::Rng;
use tactoe_evaluator::weights::Weights;

/// Draws every weight uniformly from the integer `range`.
#[expect(clippy::cast_precision_loss)]
pub fn random<R>(rng: &mut R, range: &RangeInclusive<i32>) -> Weights
where
    R: Rng + ?Sized,
{
    Weights::from_fn(|_| rng.random_range(range.clone()) as f32)
}

/// Elementwise mean of two parents.
#[must_use]
pub fn average(p1: &Weights, p2: &Weights) -> Weights {
    let (a, b) = (p1.as_array(), p2.as_array());
    Weights::from_fn(|i| f32::midpoint(a[i], b[i]))
}

/// Applies ±`step` mutation to each weight in place.
///
/// Each weight is selected with probability `rate`; a selected weight moves by
/// `-step`, `0` or `+step` with equal probability.
///
/// # Panics
///
/// Panics if `rate` is outside `[0.0, 1.0]`.
pub fn mutate<R>(weights: &mut Weights, rate: f64, step: f32, rng: &mut R)
where
    R: Rng + ?Sized,
{
    for w in weights.iter_mut() {
        if rng.random_bool(rate) {
            let direction: i8 = rng.random_range(-1..=1);
            *w += f32::from(direction) * step;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_random_stays_in_integer_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            let weights = random(&mut rng, &(-30..=30));
            for w in weights.iter() {
                assert!((-30.0..=30.0).contains(&w));
                assert!((w - w.round()).abs() < f32::EPSILON, "{w} is not integral");
            }
        }
    }

    #[test]
    fn test_random_single_value_range() {
        let mut rng = Pcg32::seed_from_u64(2);
        assert_eq!(random(&mut rng, &(4..=4)), Weights::from_array([4.0; 6]));
    }

    #[test]
    fn test_average_of_zero_and_ten_is_five() {
        let child = average(&Weights::ZERO, &Weights::from_array([10.0; 6]));
        assert_eq!(child, Weights::from_array([5.0; 6]));
    }

    #[test]
    fn test_average_keeps_fractions() {
        let p1 = Weights::from_array([1.0, -3.0, 0.0, 7.0, 2.0, -1.0]);
        let p2 = Weights::from_array([2.0, 3.0, 0.0, -4.0, 2.0, -2.0]);
        assert_eq!(
            average(&p1, &p2),
            Weights::from_array([1.5, 0.0, 0.0, 1.5, 2.0, -1.5])
        );
    }

    #[test]
    fn test_mutate_with_zero_rate_is_identity() {
        let mut rng = Pcg32::seed_from_u64(3);
        let original = Weights::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let mut weights = original;
        for _ in 0..100 {
            mutate(&mut weights, 0.0, 1.0, &mut rng);
        }
        assert_eq!(weights, original);
    }

    #[test]
    fn test_mutate_moves_by_at_most_one_step() {
        let mut rng = Pcg32::seed_from_u64(4);
        let original = Weights::from_array([0.0; 6]);
        let mut changed = 0;
        for _ in 0..200 {
            let mut weights = original;
            mutate(&mut weights, 1.0, 1.0, &mut rng);
            for w in weights.iter() {
                assert!([-1.0, 0.0, 1.0].contains(&w), "unexpected delta {w}");
                if w != 0.0 {
                    changed += 1;
                }
            }
        }
        // rate 1.0 still leaves roughly a third of the weights unchanged
        let total = 200 * 6;
        assert!(changed > total / 2, "{changed} of {total} changed");
        assert!(changed < total * 5 / 6, "{changed} of {total} changed");
    }
}

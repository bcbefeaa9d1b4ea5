//! Uniform random draws used by the encodings and the search driver.
//!
//! Every helper takes the generator explicitly. There is no process-wide
//! random state: a run is reproducible from its seed alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from system entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Draws `-1` or `+1` with equal probability.
pub fn random_sign<R: Rng>(rng: &mut R) -> i8 {
    if rng.random_bool(0.5) {
        1
    } else {
        -1
    }
}

/// Draws an index uniformly from `0..n`.
///
/// `n` must be positive.
pub fn random_index<R: Rng>(n: usize, rng: &mut R) -> usize {
    rng.random_range(0..n)
}

/// Draws a prepartition group label uniformly from `0..n`.
pub fn random_label<R: Rng>(n: usize, rng: &mut R) -> usize {
    rng.random_range(0..n)
}

/// Draws an acceptance probability uniformly from `[0, 1)`.
pub fn acceptance_draw<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(0.0..1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..100 {
            assert_eq!(random_index(1000, &mut a), random_index(1000, &mut b));
        }
    }

    #[test]
    fn test_sign_takes_both_values() {
        let mut rng = create_rng(42);
        let signs: Vec<i8> = (0..200).map(|_| random_sign(&mut rng)).collect();
        assert!(signs.iter().all(|&s| s == 1 || s == -1));
        assert!(signs.contains(&1));
        assert!(signs.contains(&-1));
    }

    #[test]
    fn test_ranges() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            assert!(random_index(5, &mut rng) < 5);
            assert!(random_label(3, &mut rng) < 3);
            let u = acceptance_draw(&mut rng);
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_single_slot_always_zero() {
        let mut rng = create_rng(1);
        for _ in 0..20 {
            assert_eq!(random_index(1, &mut rng), 0);
            assert_eq!(random_label(1, &mut rng), 0);
        }
    }
}

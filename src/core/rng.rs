//! Deterministic random number generation for simulations.
//!
//! The guess engine itself never draws random numbers; this is used by
//! `sim` to pick target words reproducibly.
//!
//! ```
//! use peek_guess::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.sample_indices(12, 4), b.sample_indices(12, 4));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG. Same seed, same sequence.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick up to `count` distinct indices below `len`, in ascending order.
    pub fn sample_indices(&mut self, len: usize, count: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut self.inner);
        indices.truncate(count.min(len));
        indices.sort_unstable();
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..20 {
            assert_eq!(rng1.sample_indices(100, 10), rng2.sample_indices(100, 10));
        }
    }

    #[test]
    fn test_sample_indices() {
        let mut rng = GameRng::new(42);

        let picked = rng.sample_indices(12, 5);
        assert_eq!(picked.len(), 5);
        assert!(picked.windows(2).all(|w| w[0] < w[1]));
        assert!(picked.iter().all(|&i| i < 12));

        assert_eq!(rng.sample_indices(3, 10), vec![0, 1, 2]);
        assert!(rng.sample_indices(0, 3).is_empty());
    }
}

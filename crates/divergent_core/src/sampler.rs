//! Per-request pseudo-random selection
//!
//! Every request owns its own [`Sampler`]. With a seed the output is fully
//! reproducible: same seed, same inputs, same prompt text.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub struct Sampler {
    rng: StdRng,
    seed: Option<u64>,
}

impl Sampler {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Up to `amount` distinct items in random order. Short or empty input is not an error.
    pub fn sample<T: Clone>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        let amount = amount.min(items.len());
        items
            .choose_multiple(&mut self.rng, amount)
            .cloned()
            .collect()
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let items: Vec<u32> = (0..50).collect();
        let mut a = Sampler::seeded(42);
        let mut b = Sampler::seeded(42);
        assert_eq!(a.sample(&items, 5), b.sample(&items, 5));
        assert_eq!(a.choose(&items), b.choose(&items));
    }

    #[test]
    fn test_sample_is_distinct_and_bounded() {
        let items = vec!["a", "b", "c"];
        let mut sampler = Sampler::seeded(7);
        let mut picked = sampler.sample(&items, 10);
        assert_eq!(picked.len(), 3);
        picked.sort();
        assert_eq!(picked, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<String> = Vec::new();
        let mut sampler = Sampler::default();
        assert!(sampler.sample(&items, 3).is_empty());
        assert!(sampler.choose(&items).is_none());
        assert_eq!(sampler.seed(), None);
    }
}

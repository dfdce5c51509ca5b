use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable randomness owned by a session, so a seed replays the same bot
/// names and fallback moves.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random<T>(&mut self) -> T
    where
        rand::distr::StandardUniform: rand::distr::Distribution<T>,
    {
        self.rng.random()
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..items.len());
        items.get(idx)
    }
}

impl std::fmt::Debug for SessionRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRng").field("seed", &self.seed).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(99);
        let mut b = SessionRng::new(99);

        let seq_a: Vec<u32> = (0..8).map(|_| a.random_range(0..100)).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.random_range(0..100)).collect();

        assert_eq!(seq_a, seq_b);
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn test_choose_empty_returns_none() {
        let mut rng = SessionRng::new(1);
        let empty: [u8; 0] = [];

        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_choose_single_item() {
        let mut rng = SessionRng::from_random();

        assert_eq!(rng.choose(&[5]), Some(&5));
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

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

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.random_range(0..=i);
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_same_shuffle() {
        let mut first: Vec<u32> = (0..20).collect();
        let mut second: Vec<u32> = (0..20).collect();

        SessionRng::new(12345).shuffle(&mut first);
        SessionRng::new(12345).shuffle(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_reproduces_random_shuffle() {
        let mut rng = SessionRng::from_random();
        let seed = rng.seed();

        let mut first: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut first);

        let mut second: Vec<u32> = (0..20).collect();
        SessionRng::new(seed).shuffle(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut items: Vec<u32> = (0..50).collect();
        SessionRng::from_random().shuffle(&mut items);

        items.sort_unstable();
        assert_eq!(items, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_of_empty_and_single_slices() {
        let mut rng = SessionRng::new(7);

        let mut empty: Vec<u32> = Vec::new();
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![42]);
    }
}

//! Cryptographically sourced shuffle and uniform pick.
//!
//! Participants must not be able to predict or steer a draw, so the default
//! source is the operating system RNG. Any other source has to be a
//! [`CryptoRng`] too; tests use a seeded ChaCha stream.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

/// Tag space per element when shuffling. Collisions are rare enough at chat
/// sizes that the stable sort's tie-break does not matter in practice.
pub const TAG_RESOLUTION: u64 = 64;

#[derive(Debug, Clone)]
pub struct FairRandom<R = OsRng> {
    rng: R,
}

impl FairRandom<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for FairRandom<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> FairRandom<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Tag every element with an independent value in `[0, n * 64)` and sort by tag.
    pub fn shuffle<T>(&mut self, items: Vec<T>) -> Vec<T> {
        if items.len() < 2 {
            return items;
        }

        let bound = items.len() as u64 * TAG_RESOLUTION;
        let mut tagged: Vec<(u64, T)> = items
            .into_iter()
            .map(|item| (self.rng.gen_range(0..bound), item))
            .collect();

        // sort_by_key is stable
        tagged.sort_by_key(|(tag, _)| *tag);
        tagged.into_iter().map(|(_, item)| item).collect()
    }

    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.pick_index(items.len()).map(|index| &items[index])
    }

    /// Face of a fair six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn seeded(seed: u64) -> FairRandom<ChaCha20Rng> {
        FairRandom::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut random = seeded(1);
        let items: Vec<u32> = (0..40).collect();

        let mut shuffled = random.shuffle(items.clone());
        assert_eq!(shuffled.len(), items.len());
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn test_small_inputs() {
        let mut random = seeded(2);
        assert!(random.shuffle(Vec::<u8>::new()).is_empty());
        assert_eq!(random.shuffle(vec!['x']), vec!['x']);
        assert_eq!(random.pick::<u8>(&[]), None);
        assert_eq!(random.pick(&["only"]), Some(&"only"));
    }

    #[test]
    fn test_pick_is_roughly_uniform() {
        let mut random = seeded(3);
        let items = ["a", "b", "c"];
        let mut counts = [0u32; 3];

        for _ in 0..30_000 {
            let index = random.pick_index(items.len()).unwrap();
            counts[index] += 1;
        }

        for count in counts {
            assert!((9_000..=11_000).contains(&count), "skewed: {:?}", counts);
        }
    }

    #[test]
    fn test_shuffle_front_is_roughly_uniform() {
        let mut random = seeded(4);
        let mut counts = [0u32; 4];

        for _ in 0..20_000 {
            let shuffled = random.shuffle(vec![0usize, 1, 2, 3]);
            counts[shuffled[0]] += 1;
        }

        for count in counts {
            assert!((4_400..=5_600).contains(&count), "skewed: {:?}", counts);
        }
    }

    #[test]
    fn test_die_faces() {
        let mut random = seeded(5);
        let mut seen = [false; 6];

        for _ in 0..600 {
            let face = random.roll_die();
            assert!((1..=6).contains(&face));
            seen[usize::from(face - 1)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}

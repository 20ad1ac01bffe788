//! Shuffle primitive with an injectable random source.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Small seeded RNG (splitmix64) for reproducible sampling.
///
/// Not cryptographically secure; it exists so callers and tests can replay an
/// exact sampling run by injecting the same seed. The process-wide default
/// used by the convenience wrappers is [`rand::rng`].
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    /// Create a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(0x9E3779B97F4A7C15);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let value = self.next_u64_internal();
            let bytes = value.to_le_bytes();
            let remaining = dest.len() - offset;
            let copy_len = remaining.min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

/// Return a uniformly random permutation of `items` drawn from `rng`.
///
/// Fisher-Yates via [`SliceRandom::shuffle`]. The input is never mutated;
/// empty and single-element slices come back unchanged.
pub fn shuffled_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut result = items.to_vec();
    result.shuffle(rng);
    result
}

/// [`shuffled_with`] over the process-default generator.
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    shuffled_with(items, &mut rand::rng())
}

/// Return the identity-start permutation `0..len` shuffled by `rng`.
///
/// Used by the option shuffler, which needs the permutation itself to remap
/// correct-answer indices.
pub fn shuffled_indices<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

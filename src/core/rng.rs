//! Deterministic random number generation for word blanking.
//!
//! ```
//! use passage_mem::core::WordRng;
//!
//! let mut a = WordRng::new(42);
//! let mut b = WordRng::new(42);
//!
//! // Same seed, same sequence
//! assert_eq!(a.gen_index(10), b.gen_index(10));
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used to pick which word to blank next.
///
/// Uses ChaCha8 so a seed reproduces the same blanking order on every
/// platform.
#[derive(Clone, Debug)]
pub struct WordRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl WordRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the system clock (nanoseconds since the epoch).
    #[must_use]
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(nanos)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniformly random index in `0..len`.
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

impl RngCore for WordRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

//! Coherent noise sources for elevation synthesis

use noise::{NoiseFn, Simplex};

/// 2D coherent noise contract consumed by the elevation field
///
/// Implementations return values in approximately `[-1, 1]` and are
/// deterministic for a constructed instance.
pub trait NoiseSource {
    /// Sample the field at `(x, y)`
    fn sample2(&self, x: f64, y: f64) -> f64;
}

/// Default noise source backed by simplex noise
pub struct SimplexNoise {
    inner: Simplex,
    seed: u32,
}

impl SimplexNoise {
    /// Create a source with an explicit seed
    pub fn new(seed: u32) -> Self {
        Self {
            inner: Simplex::new(seed),
            seed,
        }
    }

    /// Create an entropy-seeded source
    ///
    /// Seeding is independent of any generator seed label; two instances
    /// produce unrelated fields.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this instance was constructed with
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseSource for SimplexNoise {
    fn sample2(&self, x: f64, y: f64) -> f64 {
        self.inner.get([x, y])
    }
}

//! A seeded generator handle bundling an RNG with its configuration.
//!
//! Same seed, same call sequence, same output. The RNG is a
//! `ChaCha8Rng`, whose stream is stable across platforms and releases.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vecgen_core::{AllocError, ConfigError, GenConfig, RegisterName, Vector, LANES};

use crate::unique;

/// Seeded source of directed test inputs.
///
/// Generic over the RNG so callers can supply their own; [`Generator::new`]
/// builds the default `ChaCha8Rng`-backed generator.
#[derive(Clone, Debug)]
pub struct Generator<R = ChaCha8Rng> {
    config: GenConfig,
    rng: R,
}

impl Generator<ChaCha8Rng> {
    /// Validate `config` and seed a `ChaCha8Rng` from `config.seed`.
    pub fn new(config: GenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::debug!(seed = config.seed, "seeding generator");
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self { config, rng })
    }

    /// Default configuration with the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            config: GenConfig::with_seed(seed),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Generator<R> {
    /// Wrap a caller-supplied RNG. `config.seed` is ignored.
    pub fn from_rng(config: GenConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Mutable access to the underlying RNG.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// See [`unique::allocate_unique_registers`].
    pub fn unique_registers(
        &mut self,
        prefix: &str,
        count: usize,
    ) -> Result<Vec<RegisterName>, AllocError> {
        unique::allocate_unique_registers(&mut self.rng, &self.config, prefix, count)
    }

    /// See [`unique::allocate_unique_scalar_values`].
    pub fn unique_scalars(&mut self, count: usize) -> Result<Vec<u32>, AllocError> {
        unique::allocate_unique_scalar_values(&mut self.rng, &self.config, count)
    }

    /// See [`unique::allocate_random_vector_value`].
    pub fn random_vector(&mut self) -> Vector {
        unique::allocate_random_vector_value(&mut self.rng)
    }

    /// See [`unique::shuffle_indices`].
    pub fn shuffled_indices(&mut self) -> [usize; LANES] {
        unique::shuffle_indices(&mut self.rng)
    }
}

//! The generation algorithm.

use super::{GenerationConfig, GenerationError};
use crate::charset::{class_alphabet, master_pool};
use crate::sampler::{EntropySource, SamplerStats, SecureSampler};
use rand_core::OsRng;
use zeroize::Zeroizing;

/// Generates passwords from a secure source.
///
/// The generator keeps no state between calls apart from the source
/// itself and its draw counters.
pub struct PasswordGenerator<S = OsRng> {
    sampler: SecureSampler<S>,
}

impl PasswordGenerator<OsRng> {
    /// Creates a generator backed by the operating system CSPRNG.
    pub fn from_os_entropy() -> Self {
        Self {
            sampler: SecureSampler::from_os_entropy(),
        }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::from_os_entropy()
    }
}

impl<S: EntropySource> PasswordGenerator<S> {
    /// Creates a generator drawing from `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            sampler: SecureSampler::new(source),
        }
    }

    /// Generates one password of exactly `config.length` characters.
    ///
    /// The output holds at least one character of every effective
    /// required class, unless there are more such classes than
    /// characters; the surplus is then dropped after shuffling.
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<String, GenerationError> {
        Self::check(config)?;
        self.generate_unchecked(config, &master_pool(config))
    }

    /// Generates `count` independent passwords for the same config.
    pub fn generate_many(
        &mut self,
        config: &GenerationConfig,
        count: usize,
    ) -> Result<Vec<String>, GenerationError> {
        Self::check(config)?;
        let pool = master_pool(config);
        (0..count)
            .map(|_| self.generate_unchecked(config, &pool))
            .collect()
    }

    /// Returns the sampler's draw counters.
    pub fn stats(&self) -> SamplerStats {
        self.sampler.stats()
    }

    fn check(config: &GenerationConfig) -> Result<(), GenerationError> {
        config.validate().inspect_err(|e| {
            tracing::debug!(error = %e, length = config.length, "Rejected generation config");
        })
    }

    fn generate_unchecked(
        &mut self,
        config: &GenerationConfig,
        pool: &[char],
    ) -> Result<String, GenerationError> {
        let required = config.effective_required();
        let mut out: Zeroizing<Vec<char>> =
            Zeroizing::new(Vec::with_capacity(config.length.max(required.len())));

        for &class in &required {
            let alphabet = class_alphabet(config, class);
            out.push(self.sampler.choose(&alphabet)?);
        }

        while out.len() < config.length {
            out.push(self.sampler.choose(pool)?);
        }

        self.sampler.shuffle(out.as_mut_slice())?;

        tracing::debug!(
            length = config.length,
            pool_size = pool.len(),
            required = required.len(),
            "Generated password"
        );

        Ok(out.iter().take(config.length).collect())
    }
}

/// Generates one password using the operating system CSPRNG.
pub fn generate(config: &GenerationConfig) -> Result<String, GenerationError> {
    PasswordGenerator::from_os_entropy().generate(config)
}

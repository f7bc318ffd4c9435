//! Rejection sampling and shuffling.
//!
//! # Bias model
//!
//! A 32-bit draw reduced with `x % n` favours small residues whenever
//! `n` does not divide the sample space. The sampler computes
//!
//! ```text
//! limit = MAX_U32 - (MAX_U32 mod n)
//! ```
//!
//! and redraws every `x >= limit`, so each residue is backed by exactly
//! the same number of accepted draws. The rejection probability per draw
//! is always below one half.

use super::EntropySource;
use rand_core::OsRng;
use thiserror::Error;

const MAX_U32: u32 = u32::MAX;

/// Errors that can occur while sampling.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// Bound is zero or exceeds the 32-bit sample space.
    #[error("sample bound must be a positive integer no larger than {max}, got {got}", max = u32::MAX)]
    InvalidArgument {
        /// The rejected bound.
        got: usize,
    },
    /// The platform facility reported an error.
    #[error("secure random source failed: {0}")]
    Source(String),
}

/// Draw counters for a single sampler instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplerStats {
    /// 32-bit values pulled from the source.
    pub draws: u64,
    /// Values discarded by rejection sampling.
    pub rejections: u64,
}

/// Uniform integer sampler over a secure byte source.
///
/// Each sampler owns its source and its counters; nothing is shared
/// between instances.
pub struct SecureSampler<S> {
    source: S,
    stats: SamplerStats,
}

impl SecureSampler<OsRng> {
    /// Creates a sampler backed by the operating system CSPRNG.
    pub fn from_os_entropy() -> Self {
        Self::new(OsRng)
    }
}

impl<S: EntropySource> SecureSampler<S> {
    /// Wraps an arbitrary secure source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            stats: SamplerStats::default(),
        }
    }

    /// Returns a uniformly distributed integer in `[0, n)`.
    ///
    /// Fails with [`SamplerError::InvalidArgument`] when `n` is zero or
    /// does not fit the 32-bit sample space.
    pub fn sample_below(&mut self, n: usize) -> Result<usize, SamplerError> {
        let bound = u32::try_from(n)
            .ok()
            .filter(|&b| b > 0)
            .ok_or(SamplerError::InvalidArgument { got: n })?;

        let limit = MAX_U32 - (MAX_U32 % bound);

        loop {
            let x = self.next_u32()?;
            if x < limit {
                return Ok((x % bound) as usize);
            }

            self.stats.rejections += 1;
            tracing::trace!(bound, limit, "Rejected out-of-range draw");
        }
    }

    /// Picks one element uniformly from a non-empty slice.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Result<T, SamplerError> {
        let index = self.sample_below(items.len())?;
        Ok(items[index])
    }

    /// Shuffles `items` in place (Fisher–Yates).
    ///
    /// Every swap index comes from [`Self::sample_below`], so all
    /// permutations are equally likely.
    pub fn shuffle<T>(&mut self, items: &mut [T]) -> Result<(), SamplerError> {
        for i in (1..items.len()).rev() {
            let j = self.sample_below(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }

    /// Returns the draw counters.
    pub fn stats(&self) -> SamplerStats {
        self.stats
    }

    /// Consumes the sampler and returns its source.
    pub fn into_inner(self) -> S {
        self.source
    }

    fn next_u32(&mut self) -> Result<u32, SamplerError> {
        let mut buf = [0u8; 4];
        self.source.fill_secure(&mut buf)?;
        self.stats.draws += 1;
        Ok(u32::from_le_bytes(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::{CryptoRng, RngCore, SeedableRng};
    use std::collections::VecDeque;
    use std::num::NonZeroU32;

    /// Replays a fixed list of 32-bit values.
    struct ScriptedSource {
        values: VecDeque<u32>,
    }

    impl ScriptedSource {
        fn new(values: &[u32]) -> Self {
            Self {
                values: values.iter().copied().collect(),
            }
        }
    }

    impl RngCore for ScriptedSource {
        fn next_u32(&mut self) -> u32 {
            self.values.pop_front().expect("script exhausted")
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(4) {
                let bytes = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ScriptedSource {}

    /// Always fails, like an unavailable platform facility.
    struct BrokenSource;

    impl RngCore for BrokenSource {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            let code = NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap();
            Err(rand_core::Error::from(code))
        }
    }

    impl CryptoRng for BrokenSource {}

    fn seeded(seed: u64) -> SecureSampler<ChaCha20Rng> {
        SecureSampler::new(ChaCha20Rng::seed_from_u64(seed))
    }

    fn chi_square(counts: &[u64], trials: u64) -> f64 {
        let expected = trials as f64 / counts.len() as f64;
        counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum()
    }

    #[test]
    fn test_zero_bound_rejected() {
        let mut sampler = seeded(1);
        assert!(matches!(
            sampler.sample_below(0),
            Err(SamplerError::InvalidArgument { got: 0 })
        ));
        assert_eq!(sampler.stats().draws, 0);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_bound_beyond_sample_space_rejected() {
        let mut sampler = seeded(1);
        let too_big = u32::MAX as usize + 1;
        assert!(matches!(
            sampler.sample_below(too_big),
            Err(SamplerError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_bound_one_always_zero() {
        let mut sampler = seeded(2);
        for _ in 0..100 {
            assert_eq!(sampler.sample_below(1).unwrap(), 0);
        }
    }

    #[test]
    fn test_values_stay_in_range() {
        let mut sampler = seeded(3);
        for n in [2usize, 3, 7, 10, 26, 94, 1000] {
            for _ in 0..500 {
                assert!(sampler.sample_below(n).unwrap() < n);
            }
        }
    }

    #[test]
    fn test_draw_at_limit_is_redrawn() {
        // n = 10: MAX % 10 = 5, so limit = MAX - 5 and the top six values are rejected
        let limit = u32::MAX - 5;
        let source = ScriptedSource::new(&[u32::MAX, limit, 13]);
        let mut sampler = SecureSampler::new(source);

        assert_eq!(sampler.sample_below(10).unwrap(), 3);
        assert_eq!(
            sampler.stats(),
            SamplerStats {
                draws: 3,
                rejections: 2
            }
        );
    }

    #[test]
    fn test_draw_below_limit_accepted() {
        let limit = u32::MAX - 5;
        let source = ScriptedSource::new(&[limit - 1]);
        let mut sampler = SecureSampler::new(source);

        assert_eq!(sampler.sample_below(10).unwrap(), ((limit - 1) % 10) as usize);
        assert_eq!(sampler.stats().rejections, 0);
    }

    #[test]
    fn test_source_failure_surfaces() {
        let mut sampler = SecureSampler::new(BrokenSource);
        assert!(matches!(
            sampler.sample_below(10),
            Err(SamplerError::Source(_))
        ));
    }

    #[test]
    fn test_uniform_distribution() {
        const TRIALS: u64 = 100_000;

        for (seed, n) in [(11u64, 7usize), (12, 10), (13, 26)] {
            let mut sampler = seeded(seed);
            let mut counts = vec![0u64; n];
            for _ in 0..TRIALS {
                counts[sampler.sample_below(n).unwrap()] += 1;
            }

            // Generous bound: df + 8 standard deviations of the chi-square
            let df = (n - 1) as f64;
            let bound = df + 8.0 * (2.0 * df).sqrt();
            let stat = chi_square(&counts, TRIALS);
            assert!(stat < bound, "n={n}: chi-square {stat:.2} >= {bound:.2}");
        }
    }

    #[test]
    fn test_choose_returns_member() {
        let mut sampler = seeded(4);
        let items = ['x', 'y', 'z'];
        for _ in 0..50 {
            assert!(items.contains(&sampler.choose(&items).unwrap()));
        }
    }

    #[test]
    fn test_choose_empty_slice_fails() {
        let mut sampler = seeded(4);
        let empty: [char; 0] = [];
        assert!(sampler.choose(&empty).is_err());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut sampler = seeded(5);
        let mut items: Vec<u32> = (0..100).collect();
        sampler.shuffle(&mut items).unwrap();

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn test_shuffle_spreads_first_element() {
        // The element starting at index 0 should land everywhere
        let mut sampler = seeded(6);
        let mut seen = [0u32; 4];
        for _ in 0..4000 {
            let mut items = [0u8, 1, 2, 3];
            sampler.shuffle(&mut items).unwrap();
            let pos = items.iter().position(|&v| v == 0).unwrap();
            seen[pos] += 1;
        }
        assert!(seen.iter().all(|&c| c > 800), "positions: {seen:?}");
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut sampler = seeded(7);
        let mut empty: [u8; 0] = [];
        sampler.shuffle(&mut empty).unwrap();

        let mut single = [9u8];
        sampler.shuffle(&mut single).unwrap();
        assert_eq!(single, [9]);
        assert_eq!(sampler.stats().draws, 0);
    }

    #[test]
    fn test_into_inner_returns_advanced_source() {
        let mut sampler = SecureSampler::new(ScriptedSource::new(&[5, 6, 7]));
        assert_eq!(sampler.sample_below(10).unwrap(), 5);

        let mut source = sampler.into_inner();
        assert_eq!(source.next_u32(), 6);
        assert_eq!(source.next_u32(), 7);
    }
}

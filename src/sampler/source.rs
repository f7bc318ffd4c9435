//! Secure byte source abstraction.
//!
//! The sampling algorithm only needs one thing from the platform:
//! a way to fill a buffer with cryptographically secure bytes.
//! Keeping the seam that narrow lets a target bind its own
//! facility without touching the algorithm.

use super::SamplerError;
use rand_core::{CryptoRng, RngCore};

/// A cryptographically secure source of random bytes.
pub trait EntropySource {
    /// Fills `dest` entirely with secure random bytes.
    fn fill_secure(&mut self, dest: &mut [u8]) -> Result<(), SamplerError>;
}

/// Every CSPRNG from the `rand_core` ecosystem is a valid source:
/// `OsRng` for production, `ChaCha20Rng` for seeded runs.
impl<R> EntropySource for R
where
    R: RngCore + CryptoRng,
{
    fn fill_secure(&mut self, dest: &mut [u8]) -> Result<(), SamplerError> {
        self.try_fill_bytes(dest)
            .map_err(|e| SamplerError::Source(e.to_string()))
    }
}

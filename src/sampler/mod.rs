//! Unbiased sampling over a cryptographically secure source.
//!
//! The sampler turns raw random bytes into uniformly distributed
//! indices. It never uses plain modulo reduction: out-of-range
//! draws are rejected and redrawn.

mod source;
mod uniform;

pub use source::EntropySource;
pub use uniform::{SamplerError, SamplerStats, SecureSampler};

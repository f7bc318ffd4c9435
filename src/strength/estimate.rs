//! Entropy estimate and derived strength report.

use crate::charset::pool_size;
use crate::generator::GenerationConfig;
use serde::Serialize;
use std::fmt;

/// Entropy at which the strength meter is full.
pub const METER_CAP_BITS: u32 = 128;

/// Returns `round(length * log2(pool_size))`, or 0 if either input is 0.
pub fn estimate_entropy_bits(length: usize, pool_size: usize) -> u32 {
    if length == 0 || pool_size == 0 {
        return 0;
    }
    (length as f64 * (pool_size as f64).log2()).round() as u32
}

/// Coarse strength bucket for an entropy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthRating {
    /// 35 bits or fewer.
    Weak,
    /// 36 to 59 bits.
    Fair,
    /// 60 to 127 bits.
    Strong,
    /// 128 bits and up.
    VeryStrong,
}

impl StrengthRating {
    /// Buckets an entropy estimate.
    pub fn from_bits(bits: u32) -> Self {
        match bits {
            0..=35 => StrengthRating::Weak,
            36..=59 => StrengthRating::Fair,
            60..=127 => StrengthRating::Strong,
            _ => StrengthRating::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrengthRating::Weak => "Weak",
            StrengthRating::Fair => "Fair",
            StrengthRating::Strong => "Strong",
            StrengthRating::VeryStrong => "Very Strong",
        })
    }
}

/// Pool size and strength derived from a config.
///
/// Cheap enough to rebuild on every config change; callers should
/// not cache it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthReport {
    /// Distinct characters in the master pool.
    pub pool_size: usize,
    /// Rounded entropy estimate for the configured length.
    pub entropy_bits: u32,
    /// Bucket for `entropy_bits`.
    pub rating: StrengthRating,
}

impl StrengthReport {
    /// Recomputes the report for `config`.
    ///
    /// Does not validate the config: an invalid config simply yields
    /// a zero pool or zero bits.
    pub fn for_config(config: &GenerationConfig) -> Self {
        let pool_size = pool_size(config);
        let entropy_bits = estimate_entropy_bits(config.length, pool_size);
        Self {
            pool_size,
            entropy_bits,
            rating: StrengthRating::from_bits(entropy_bits),
        }
    }

    /// Meter fill in `[0, 1]`, saturating at [`METER_CAP_BITS`].
    pub fn meter_fraction(&self) -> f64 {
        f64::from(self.entropy_bits.min(METER_CAP_BITS)) / f64::from(METER_CAP_BITS)
    }

    /// True when the config cannot produce anything.
    pub fn is_empty(&self) -> bool {
        self.pool_size == 0
    }
}

//! Strength estimation.
//!
//! Entropy figures here are upper bounds that assume every character
//! is drawn independently and uniformly from the pool. The category
//! guarantee makes real output slightly less uniform; that bias is
//! not modelled.

mod estimate;

pub use estimate::{estimate_entropy_bits, StrengthRating, StrengthReport, METER_CAP_BITS};

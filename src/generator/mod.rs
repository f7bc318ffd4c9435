//! Password generation.
//!
//! Builds the master pool for a configuration, injects one character
//! per required class, fills the rest from the pool and shuffles the
//! result with the secure sampler.

mod config;
mod engine;

pub use config::{GenerationConfig, GenerationError};
pub use engine::{generate, PasswordGenerator};

//! Secure Password Generation Library
//!
//! Generates passwords from selectable character classes using a
//! cryptographically secure random source, and estimates their
//! strength.
//!
//! # Architecture
//!
//! ```text
//! GenerationConfig → charset (pool) → generator → password
//!                                        ↑
//!                     sampler (rejection sampling, shuffle)
//!
//! GenerationConfig → strength (pool size, entropy bits)
//! ```
//!
//! # Design Principles
//!
//! - **No modulo bias**: every index comes from rejection sampling
//! - **Fail fast**: configs are validated before any random draw
//! - **Stateless**: nothing survives a call except the entropy source
//! - **Swappable source**: any `RngCore + CryptoRng` can back the sampler
//!
//! # Example
//!
//! ```
//! use secure_passgen::{generate, CharacterClass, GenerationConfig, StrengthReport};
//!
//! let config = GenerationConfig::default().enable(CharacterClass::Symbol);
//!
//! let password = generate(&config).unwrap();
//! assert_eq!(password.chars().count(), config.length);
//!
//! let report = StrengthReport::for_config(&config);
//! println!("{} bits ({})", report.entropy_bits, report.rating);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod charset;
pub mod config;
pub mod display;
pub mod generator;
pub mod metrics;
pub mod sampler;
pub mod strength;

// Re-export commonly used types at crate root
pub use charset::{alphabet_for, master_pool, pool_size, CharacterClass};
pub use config::{ConfigError, DisplayConfig, FileConfig};
pub use generator::{generate, GenerationConfig, GenerationError, PasswordGenerator};
pub use sampler::{EntropySource, SamplerError, SecureSampler};
pub use strength::{estimate_entropy_bits, StrengthRating, StrengthReport};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Prometheus metrics for generation activity.
//!
//! Counters describe how much work the engine did, never what it
//! produced. Metrics are encoded in Prometheus text format; there is
//! no HTTP exporter.
//!
//! # Metrics Exposed
//!
//! - `passgen_passwords_generated_total` - Passwords produced
//! - `passgen_generation_errors_total` - Rejected generation requests
//! - `passgen_sampler_draws_total` - 32-bit values pulled from the source
//! - `passgen_sampler_rejections_total` - Draws discarded by rejection sampling
//! - `passgen_entropy_bits` - Entropy estimate of the current config
//! - `passgen_pool_size` - Pool size of the current config
//!
//! # Example
//!
//! ```
//! use secure_passgen::metrics::{MetricsRegistry, MetricsSnapshot};
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//!
//! let snapshot = MetricsSnapshot {
//!     passwords_generated: 3,
//!     generation_errors: 0,
//!     sampler_draws: 120,
//!     sampler_rejections: 1,
//!     entropy_bits: 93,
//!     pool_size: 56,
//! };
//!
//! registry.update(&snapshot);
//! assert!(registry.encode().unwrap().contains("passgen_pool_size 56"));
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry, MetricsSnapshot};

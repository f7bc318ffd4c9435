//! Metrics collection and registry.

use crate::sampler::SamplerStats;
use crate::strength::StrengthReport;
use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Registration or encoding failed.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// A snapshot of engine activity for metrics update.
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    /// Passwords produced so far.
    pub passwords_generated: u64,
    /// Generation requests rejected so far.
    pub generation_errors: u64,
    /// 32-bit draws pulled from the source.
    pub sampler_draws: u64,
    /// Draws discarded by rejection sampling.
    pub sampler_rejections: u64,
    /// Entropy estimate of the current config.
    pub entropy_bits: u32,
    /// Pool size of the current config.
    pub pool_size: usize,
}

impl MetricsSnapshot {
    /// Creates a snapshot from sampler counters and the current report.
    pub fn from_components(
        stats: SamplerStats,
        report: &StrengthReport,
        passwords_generated: u64,
        generation_errors: u64,
    ) -> Self {
        Self {
            passwords_generated,
            generation_errors,
            sampler_draws: stats.draws,
            sampler_rejections: stats.rejections,
            entropy_bits: report.entropy_bits,
            pool_size: report.pool_size,
        }
    }
}

/// Prometheus registry for generation metrics.
pub struct MetricsRegistry {
    registry: Registry,

    passwords_generated: IntCounter,
    generation_errors: IntCounter,
    sampler_draws: IntCounter,
    sampler_rejections: IntCounter,

    entropy_bits: IntGauge,
    pool_size: IntGauge,
}

impl MetricsRegistry {
    /// Creates a new registry with all metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let passwords_generated = IntCounter::new(
            "passgen_passwords_generated_total",
            "Total number of passwords generated",
        )?;
        let generation_errors = IntCounter::new(
            "passgen_generation_errors_total",
            "Total number of rejected generation requests",
        )?;
        let sampler_draws = IntCounter::new(
            "passgen_sampler_draws_total",
            "Total 32-bit values drawn from the secure source",
        )?;
        let sampler_rejections = IntCounter::new(
            "passgen_sampler_rejections_total",
            "Total draws discarded by rejection sampling",
        )?;
        let entropy_bits = IntGauge::new(
            "passgen_entropy_bits",
            "Entropy estimate of the current configuration in bits",
        )?;
        let pool_size = IntGauge::new(
            "passgen_pool_size",
            "Character pool size of the current configuration",
        )?;

        registry.register(Box::new(passwords_generated.clone()))?;
        registry.register(Box::new(generation_errors.clone()))?;
        registry.register(Box::new(sampler_draws.clone()))?;
        registry.register(Box::new(sampler_rejections.clone()))?;
        registry.register(Box::new(entropy_bits.clone()))?;
        registry.register(Box::new(pool_size.clone()))?;

        Ok(Self {
            registry,
            passwords_generated,
            generation_errors,
            sampler_draws,
            sampler_rejections,
            entropy_bits,
            pool_size,
        })
    }

    /// Updates all metrics from a snapshot.
    ///
    /// Counters only move forward: each is raised to the snapshot value.
    pub fn update(&self, snapshot: &MetricsSnapshot) {
        advance(&self.passwords_generated, snapshot.passwords_generated);
        advance(&self.generation_errors, snapshot.generation_errors);
        advance(&self.sampler_draws, snapshot.sampler_draws);
        advance(&self.sampler_rejections, snapshot.sampler_rejections);

        self.entropy_bits.set(i64::from(snapshot.entropy_bits));
        self.pool_size.set(snapshot.pool_size as i64);
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn advance(counter: &IntCounter, target: u64) {
    let current = counter.get();
    if target > current {
        counter.inc_by(target - current);
    }
}

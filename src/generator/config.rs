//! Generation configuration and validation.

use crate::charset::{class_alphabet, pool_size, CharacterClass};
use crate::sampler::SamplerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors that can occur during password generation.
///
/// Configuration errors are detected before any random draw.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Length outside `MIN_LENGTH..=MAX_LENGTH`.
    #[error(
        "length must be an integer between {min} and {max}, got {got}",
        min = GenerationConfig::MIN_LENGTH,
        max = GenerationConfig::MAX_LENGTH
    )]
    InvalidLength {
        /// The rejected length.
        got: usize,
    },
    /// No class contributes to the pool.
    #[error("enable at least one character class")]
    NoClassEnabled,
    /// Every enabled alphabet filtered down to nothing.
    #[error("character pool is empty after removing ambiguous characters")]
    EmptyPool,
    /// The secure source failed mid-generation.
    #[error(transparent)]
    Sampler(#[from] SamplerError),
}

/// Parameters for a single generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Exact number of characters to produce.
    pub length: usize,
    /// Classes contributing to the pool.
    pub enabled: BTreeSet<CharacterClass>,
    /// Drop look-alike glyphs from every alphabet.
    pub avoid_ambiguous: bool,
    /// Classes guaranteed at least one character.
    /// `None` means every enabled class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<BTreeSet<CharacterClass>>,
    /// Replacement alphabet for the symbol class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_symbols: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            enabled: [
                CharacterClass::Lowercase,
                CharacterClass::Uppercase,
                CharacterClass::Digit,
            ]
            .into_iter()
            .collect(),
            avoid_ambiguous: true,
            required: None,
            custom_symbols: None,
        }
    }
}

impl GenerationConfig {
    /// Shortest accepted password.
    pub const MIN_LENGTH: usize = 1;
    /// Longest accepted password.
    pub const MAX_LENGTH: usize = 1024;
    /// Length used when none is configured.
    pub const DEFAULT_LENGTH: usize = 16;

    /// Creates a config with exactly the given classes enabled.
    ///
    /// Ambiguous characters are kept; every enabled class is required.
    pub fn with_classes(length: usize, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        Self {
            length,
            enabled: classes.into_iter().collect(),
            avoid_ambiguous: false,
            required: None,
            custom_symbols: None,
        }
    }

    /// Sets the length without validating it.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Adds a class to the pool.
    pub fn enable(mut self, class: CharacterClass) -> Self {
        self.enabled.insert(class);
        self
    }

    /// Removes a class from the pool.
    pub fn disable(mut self, class: CharacterClass) -> Self {
        self.enabled.remove(&class);
        self
    }

    /// Toggles look-alike filtering.
    pub fn avoid_ambiguous(mut self, avoid: bool) -> Self {
        self.avoid_ambiguous = avoid;
        self
    }

    /// Replaces the required set.
    pub fn require(mut self, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        self.required = Some(classes.into_iter().collect());
        self
    }

    /// Replaces the symbol alphabet.
    pub fn with_custom_symbols(mut self, symbols: impl Into<String>) -> Self {
        self.custom_symbols = Some(symbols.into());
        self
    }

    /// Returns true if `class` contributes to the pool.
    #[inline]
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.enabled.contains(&class)
    }

    /// Returns the required set as configured, defaulting to the enabled set.
    pub fn required_classes(&self) -> &BTreeSet<CharacterClass> {
        self.required.as_ref().unwrap_or(&self.enabled)
    }

    /// Classes that will actually receive a guaranteed character.
    ///
    /// Required classes that are not enabled, or whose alphabet is empty
    /// after filtering, are skipped. Returned in pool order.
    pub fn effective_required(&self) -> Vec<CharacterClass> {
        self.required_classes()
            .iter()
            .copied()
            .filter(|&class| self.is_enabled(class))
            .filter(|&class| !class_alphabet(self, class).is_empty())
            .collect()
    }

    /// Checks the config in order: length, enabled classes, pool size.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&self.length) {
            return Err(GenerationError::InvalidLength { got: self.length });
        }
        if self.enabled.is_empty() {
            return Err(GenerationError::NoClassEnabled);
        }
        if pool_size(self) == 0 {
            return Err(GenerationError::EmptyPool);
        }
        Ok(())
    }
}

//! Master pool construction for a generation config.

use super::class::{alphabet_for, filter_alphabet, CharacterClass};
use crate::generator::GenerationConfig;

/// Returns the effective alphabet of `class` under `config`.
///
/// Honours the custom symbol alphabet when one is configured.
/// Does not check whether the class is enabled.
pub fn class_alphabet(config: &GenerationConfig, class: CharacterClass) -> Vec<char> {
    match (class, config.custom_symbols.as_deref()) {
        (CharacterClass::Symbol, Some(custom)) => filter_alphabet(custom, config.avoid_ambiguous),
        _ => alphabet_for(class, config.avoid_ambiguous),
    }
}

/// Concatenates the alphabets of all enabled classes in pool order.
///
/// Characters present in more than one alphabet appear once per
/// alphabet and are drawn proportionally more often.
pub fn master_pool(config: &GenerationConfig) -> Vec<char> {
    config
        .enabled
        .iter()
        .flat_map(|&class| class_alphabet(config, class))
        .collect()
}

/// Total number of pool entries for `config`.
///
/// Zero when no class is enabled or filtering emptied every alphabet.
pub fn pool_size(config: &GenerationConfig) -> usize {
    config
        .enabled
        .iter()
        .map(|&class| class_alphabet(config, class).len())
        .sum()
}

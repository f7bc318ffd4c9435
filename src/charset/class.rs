//! Character class definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = r#"!@#$%^&*()-_=+[{]}\|;:'",<.>/?"#;

/// Glyphs easily confused with one another in common fonts.
pub const AMBIGUOUS: &[char] = &[
    'O', '0', 'o', 'I', 'l', '1', '|', '{', '}', '[', ']', '(', ')', '<', '>',
];

/// A selectable class of characters.
///
/// Variant order is the fixed pool order: lowercase, uppercase,
/// digit, symbol. Sets of classes iterate in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    /// `a-z`
    Lowercase,
    /// `A-Z`
    Uppercase,
    /// `0-9`
    Digit,
    /// Printable ASCII punctuation.
    Symbol,
}

impl CharacterClass {
    /// All classes in pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// Returns the unfiltered alphabet.
    pub fn base_alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Returns the configuration name of the class.
    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown character class name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown character class '{0}' (expected lowercase, uppercase, digit or symbol)")]
pub struct ParseClassError(String);

impl FromStr for CharacterClass {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lowercase" | "lower" => Ok(CharacterClass::Lowercase),
            "uppercase" | "upper" => Ok(CharacterClass::Uppercase),
            "digit" | "digits" => Ok(CharacterClass::Digit),
            "symbol" | "symbols" => Ok(CharacterClass::Symbol),
            _ => Err(ParseClassError(s.to_string())),
        }
    }
}

/// Returns true if `c` is in the ambiguous set.
#[inline]
pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(&c)
}

/// Returns the effective alphabet of a built-in class.
///
/// With `avoid_ambiguous`, every ambiguous glyph is removed and the
/// remaining characters keep their relative order.
pub fn alphabet_for(class: CharacterClass, avoid_ambiguous: bool) -> Vec<char> {
    filter_alphabet(class.base_alphabet(), avoid_ambiguous)
}

pub(crate) fn filter_alphabet(alphabet: &str, avoid_ambiguous: bool) -> Vec<char> {
    alphabet
        .chars()
        .filter(|&c| !(avoid_ambiguous && is_ambiguous(c)))
        .collect()
}

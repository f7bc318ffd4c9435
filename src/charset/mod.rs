//! Character classes and pool construction.
//!
//! Each class maps to a fixed, ordered alphabet. Pools are rebuilt
//! from these alphabets on every request; nothing is cached.

mod class;
mod pool;

pub use class::{alphabet_for, is_ambiguous, CharacterClass, ParseClassError, AMBIGUOUS};
pub use pool::{class_alphabet, master_pool, pool_size};

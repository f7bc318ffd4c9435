//! Presentation helpers for interface consumers.
//!
//! Theme state is resolved once by the entry point and passed down
//! explicitly; nothing here reads ambient state on load.

mod meter;
mod theme;

pub use meter::render_meter;
pub use theme::{prefers_dark_from_colorfgbg, system_prefers_dark, Theme, ThemePreference, ThemeState};

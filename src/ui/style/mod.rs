//! Colour themes for the terminal UI.

mod builtins;
mod theme;

pub use builtins::{DEFAULT_THEME, by_name, default_theme, names};
pub use theme::Theme;

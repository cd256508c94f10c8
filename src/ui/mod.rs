//! Interactive terminal UI for `formsmith`.
//!
//! The [`builder`] module exposes the public-facing [`TemplateUi`] builder. The
//! remaining submodules implement the event loop, input handling, rendering
//! and the widgets/style definitions behind the two screens.

mod actions;
mod builder;
pub mod components;
mod mouse;
mod outcome;
pub mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::TemplateUi;
pub use outcome::TemplateOutcome;
pub use state::{App, Focus, PeopleOptions, Screen, UnknownScreen};

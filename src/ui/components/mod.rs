//! UI building blocks shared across rendering and state modules.

/// Modal dialog for picking catalog sections.
pub mod dialog;
/// Single-line text fields.
pub mod input;
/// Draggable people table.
pub mod people;
/// The template form: name, sections table and submit button.
pub mod sections;
/// Header and separator helpers shared by every table.
pub mod table;
/// Screen tabs and the key hint line.
pub mod tabs;

pub use dialog::render_dialog;
pub use input::TextInput;
pub use people::render_people;
pub use sections::render_template;
pub use tabs::{render_help, render_tabs};

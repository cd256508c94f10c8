//! Terminal editor for composing templates from a catalog of sections.
//!
//! The domain model lives in `formsmith-core`; this crate adds the terminal
//! UI, the platform directories and file-backed logging. The command line
//! front-end and layered configuration live with the binary.

pub mod app_dirs;
pub mod logging;
pub mod ui;

pub use formsmith_core::{Catalog, SelectionEntry, SelectionList, TemplatePayload};
pub use ui::style::Theme;
pub use ui::{PeopleOptions, Screen, TemplateOutcome, TemplateUi};

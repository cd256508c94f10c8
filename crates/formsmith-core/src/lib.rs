//! State models and reducers behind the `formsmith` template creator.
//!
//! Nothing in this crate touches the terminal. The interactive front-end and
//! the tests drive exactly the same transitions, so every invariant on the
//! selection list and the drag controller can be checked without rendering.

pub mod catalog;
pub mod checked;
pub mod error;
pub mod payload;
pub mod people;
pub mod reorder;
pub mod selection;
pub mod template;

pub use catalog::{Available, Catalog};
pub use checked::CheckedSet;
pub use error::SubmitError;
pub use payload::TemplatePayload;
pub use people::{PersonRecord, PersonStatus, UserId, generate_people, random_seed};
pub use reorder::{DragController, DragState, Keyed, Reorder, move_by_key};
pub use selection::{Direction, SelectionEntry, SelectionList};
pub use template::{AddDialog, DialogState, TemplateAction, TemplateForm};

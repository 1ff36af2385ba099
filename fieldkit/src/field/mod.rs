//! The field state machine.
//!
//! One [`Field`] per rendered input control. The field owns the
//! error/focus/masking state, runs the validation dispatcher on input
//! changes, and notifies collaborators through [`FieldHooks`]. State is
//! behind `Arc`s, so clones are handles onto the same field.
//!
//! [`FieldHooks`]: crate::hooks::FieldHooks

mod events;
mod state;

pub use events::Verification;
pub use state::{Field, FieldConfig, FieldId, FieldSnapshot};

//! Field validation and verification engine for event-driven UIs.
//!
//! A [`Field`](field::Field) classifies user input against a validation
//! mode, accumulates per-rule pass/fail state for password strength,
//! drives an asynchronous phone-normalization step, and surfaces
//! error/focus/masking state to rendering collaborators through narrow
//! callback and snapshot contracts. Rendering, navigation, and platform
//! keyboards stay outside.

pub mod field;
pub mod hooks;
pub mod phone;
pub mod state;
pub mod theme;
pub mod validation;

pub mod prelude {
    pub use crate::field::{Field, FieldConfig, FieldId, FieldSnapshot, Verification};
    pub use crate::hooks::FieldHooks;
    pub use crate::phone::{NormalizeError, NormalizeOptions, NormalizedPhone, PhoneNormalizer};
    pub use crate::state::State;
    pub use crate::theme::FieldPalette;
    pub use crate::validation::{
        Form, FormResult, KeyboardHint, Outcome, PasswordRule, RuleRegistry, RuleReport,
        ValidationMode,
    };
}

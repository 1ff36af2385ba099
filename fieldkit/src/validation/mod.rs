//! Validation for field input.
//!
//! Splits into a pure dispatcher ([`validate`]) that classifies a raw
//! string per [`ValidationMode`], a password rule registry with per-rule
//! accumulation ([`RuleRegistry`], [`RuleReport`]), and a form-level
//! aggregator ([`Form`]) for pre-submit checks.
//!
//! # Example
//!
//! ```ignore
//! use fieldkit::validation::{validate, ValidationContext, ValidationMode, RuleRegistry};
//!
//! let rules = RuleRegistry::strict();
//! let cx = ValidationContext { rules: &rules, compare: None };
//! let outcome = validate(ValidationMode::Password, "hunter2", cx);
//! ```

mod dispatch;
mod form;
mod mode;
mod outcome;
mod rules;

pub use dispatch::{CompareSource, ValidationContext, email_is_valid, username_is_valid, validate};
pub use form::{FieldIssue, Form, FormResult};
pub use mode::{KeyboardHint, ValidationMode};
pub use outcome::Outcome;
pub use rules::{PasswordRule, RuleRegistry, RuleReport};

//! Pre-submit aggregation over a set of fields.
//!
//! A screen collects its fields into a [`Form`] and checks them before
//! acting on a submit event. The check reads each field's current error
//! state; it never re-runs validators, so it reflects exactly what the
//! user sees.

use crate::field::{Field, FieldId};

/// One field that failed the form check.
#[derive(Debug, Clone)]
pub struct FieldIssue {
    /// Name given at registration (from the `.field()` call).
    pub name: String,
    /// Field ID, for focusing.
    pub field_id: FieldId,
}

/// Result of checking a form.
#[derive(Debug, Clone, Default)]
pub enum FormResult {
    /// Every registered field is error-free.
    #[default]
    Valid,
    /// One or more fields currently report an error.
    Invalid(Vec<FieldIssue>),
}

impl FormResult {
    /// Check if every field passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The failing fields, in registration order.
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            Self::Valid => &[],
            Self::Invalid(issues) => issues,
        }
    }

    /// The first failing field (for focusing).
    pub fn first_invalid(&self) -> Option<&FieldIssue> {
        self.issues().first()
    }
}

/// Builder collecting fields for a pre-submit check.
///
/// # Example
///
/// ```ignore
/// let result = Form::new()
///     .field(&email, "email")
///     .field(&password, "password")
///     .check();
///
/// if let Some(issue) = result.first_invalid() {
///     focus(issue.field_id);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<(String, Field)>,
}

impl Form {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field under a name.
    pub fn field(mut self, field: &Field, name: impl Into<String>) -> Self {
        self.fields.push((name.into(), field.clone()));
        self
    }

    /// Check every registered field's current error state.
    ///
    /// Re-checkable: the form holds handles, not snapshots, so a later
    /// call reflects intervening input changes.
    pub fn check(&self) -> FormResult {
        let issues: Vec<FieldIssue> = self
            .fields
            .iter()
            .filter(|(_, field)| field.has_error())
            .map(|(name, field)| FieldIssue {
                name: name.clone(),
                field_id: field.id(),
            })
            .collect();

        if issues.is_empty() {
            FormResult::Valid
        } else {
            FormResult::Invalid(issues)
        }
    }
}

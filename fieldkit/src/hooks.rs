//! Collaborator callbacks invoked by the field state machine.
//!
//! All hooks are fire-and-forget notifications: the field never consumes a
//! return value, and a missing hook is simply skipped. Hooks are stored as
//! `Arc` closures so a `Field` stays cheap to clone.

use std::sync::Arc;

/// Hook receiving a text payload (`on_change_text`, `on_submit`).
pub type TextHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Hook receiving the aggregate error flag (`on_error_check`).
pub type FlagHook = Arc<dyn Fn(bool) + Send + Sync>;

/// Hook receiving no payload (`on_focus`, `on_blur`).
pub type UnitHook = Arc<dyn Fn() + Send + Sync>;

/// The callback contract between a field and its rendering collaborator.
///
/// # Example
///
/// ```ignore
/// let hooks = FieldHooks::new()
///     .on_change_text(|text| println!("typed: {text}"))
///     .on_error_check(|err| println!("error: {err}"));
/// let field = Field::with_hooks(FieldConfig::new(ValidationMode::Email), hooks);
/// ```
#[derive(Default, Clone)]
pub struct FieldHooks {
    on_change_text: Option<TextHook>,
    on_error_check: Option<FlagHook>,
    on_focus: Option<UnitHook>,
    on_blur: Option<UnitHook>,
    on_submit: Option<TextHook>,
}

impl FieldHooks {
    /// Create an empty hook set
    pub fn new() -> Self {
        Self::default()
    }

    /// Notified on every accepted input change, including canonicalized
    /// replacement text from phone verification.
    pub fn on_change_text(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_change_text = Some(Arc::new(f));
        self
    }

    /// Notified with the aggregate error flag after each validation.
    pub fn on_error_check(mut self, f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_error_check = Some(Arc::new(f));
        self
    }

    /// Notified when the field gains focus.
    pub fn on_focus(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_focus = Some(Arc::new(f));
        self
    }

    /// Notified when the field loses focus.
    pub fn on_blur(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_blur = Some(Arc::new(f));
        self
    }

    /// Receives the submitted text verbatim.
    pub fn on_submit(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_submit = Some(Arc::new(f));
        self
    }

    pub(crate) fn fire_change_text(&self, text: &str) {
        if let Some(hook) = &self.on_change_text {
            hook(text);
        }
    }

    pub(crate) fn fire_error_check(&self, has_error: bool) {
        if let Some(hook) = &self.on_error_check {
            hook(has_error);
        }
    }

    pub(crate) fn fire_focus(&self) {
        if let Some(hook) = &self.on_focus {
            hook();
        }
    }

    pub(crate) fn fire_blur(&self) {
        if let Some(hook) = &self.on_blur {
            hook();
        }
    }

    pub(crate) fn fire_submit(&self, text: &str) {
        if let Some(hook) = &self.on_submit {
            hook(text);
        }
    }
}

impl std::fmt::Debug for FieldHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldHooks")
            .field("on_change_text", &self.on_change_text.is_some())
            .field("on_error_check", &self.on_error_check.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

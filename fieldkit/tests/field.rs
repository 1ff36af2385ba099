//! Tests for the field state machine.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use fieldkit::field::{Field, FieldConfig};
use fieldkit::hooks::FieldHooks;
use fieldkit::state::State;
use fieldkit::validation::{PasswordRule, RuleRegistry, RuleReport, ValidationMode};

/// Records every `on_error_check` and `on_change_text` notification.
#[derive(Default, Clone)]
struct Recorder {
    errors: Arc<Mutex<Vec<bool>>>,
    texts: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn hooks(&self) -> FieldHooks {
        let errors = Arc::clone(&self.errors);
        let texts = Arc::clone(&self.texts);
        FieldHooks::new()
            .on_error_check(move |has_error| errors.lock().unwrap().push(has_error))
            .on_change_text(move |text| texts.lock().unwrap().push(text.to_string()))
    }

    fn errors(&self) -> Vec<bool> {
        self.errors.lock().unwrap().clone()
    }

    fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[test]
fn test_short_password_flags_seed_rule() {
    let recorder = Recorder::default();
    let field = Field::with_hooks(
        FieldConfig::new(ValidationMode::Password)
            .masked()
            .rules(RuleRegistry::new().min_length(8)),
        recorder.hooks(),
    );

    field.handle_change("abc");

    assert!(field.has_error());
    assert!(field.rule_report().is_violated(PasswordRule::TooShort));
    assert_eq!(recorder.errors(), vec![true]);
    assert_eq!(recorder.texts(), vec!["abc"]);
}

#[test]
fn test_empty_input_resets_regardless_of_previous_state() {
    let recorder = Recorder::default();
    let field = Field::with_hooks(
        FieldConfig::new(ValidationMode::Password).rules(RuleRegistry::strict()),
        recorder.hooks(),
    );

    field.handle_change("abc");
    assert!(field.has_error());

    field.handle_change("");
    assert!(!field.has_error());
    assert_eq!(field.rule_report(), RuleReport::seeded());
    assert_eq!(recorder.errors(), vec![true, false]);
}

#[test]
fn test_valid_email_clears_error() {
    let recorder = Recorder::default();
    let field = Field::with_hooks(
        FieldConfig::new(ValidationMode::Email),
        recorder.hooks(),
    );

    field.handle_change("user@");
    assert!(field.has_error());
    field.handle_change("user@example.com");
    assert!(!field.has_error());
    assert_eq!(recorder.errors(), vec![true, false]);
}

#[test]
fn test_none_mode_reports_nothing() {
    let recorder = Recorder::default();
    let field = Field::with_hooks(FieldConfig::new(ValidationMode::None), recorder.hooks());

    field.handle_change("anything at all");

    assert!(!field.has_error());
    // the raw value still propagates, but no error notification fires
    assert_eq!(recorder.texts(), vec!["anything at all"]);
    assert!(recorder.errors().is_empty());
}

#[test]
fn test_confirm_password_follows_state_cell() {
    let primary = State::new("Secret1".to_string());
    let field = Field::new(
        FieldConfig::new(ValidationMode::ConfirmPassword).confirms(primary.source()),
    );

    field.handle_change("Secret1");
    assert!(!field.has_error());

    field.handle_change("Secret2");
    assert!(field.has_error());

    // changing the cell flips the outcome on the next change, no remount
    primary.update(|v| *v = "Secret2".to_string());
    field.handle_change("Secret2");
    assert!(!field.has_error());
}

#[test]
fn test_confirm_password_without_source_is_permanent_failure() {
    let field = Field::new(FieldConfig::new(ValidationMode::ConfirmPassword));
    field.handle_change("anything");
    assert!(field.has_error());
    field.handle_change("something else");
    assert!(field.has_error());
}

#[test]
fn test_error_detail_requires_error_and_clears_on_change() {
    let field = Field::new(FieldConfig::new(ValidationMode::Email));

    // clean field: toggle is a no-op
    assert!(!field.toggle_error_detail());

    field.handle_change("broken");
    assert!(field.has_error());
    assert!(field.toggle_error_detail());
    assert!(field.show_error_detail());

    // next input change closes the detail even if the error persists
    field.handle_change("still-broken");
    assert!(field.has_error());
    assert!(!field.show_error_detail());
}

#[test]
fn test_error_detail_closes_when_error_clears() {
    let field = Field::new(FieldConfig::new(ValidationMode::Email));
    field.handle_change("broken");
    field.toggle_error_detail();

    field.handle_change("user@example.com");
    assert!(!field.has_error());
    assert!(!field.show_error_detail());
}

#[test]
fn test_obscure_toggle_is_orthogonal_to_validation() {
    let field = Field::new(FieldConfig::new(ValidationMode::Password).masked());
    assert!(field.is_obscured());

    field.handle_change("abc");
    let before = field.snapshot();

    assert!(!field.toggle_obscured());
    assert!(field.toggle_obscured());

    let after = field.snapshot();
    assert_eq!(before.has_error, after.has_error);
    assert_eq!(before.rule_report, after.rule_report);
}

#[test]
fn test_unmasked_field_never_obscures() {
    let field = Field::new(FieldConfig::new(ValidationMode::Email));
    assert!(!field.is_obscured());
    assert!(!field.toggle_obscured());
}

#[test]
fn test_focus_and_blur_notify_collaborators() {
    let focus_count = Arc::new(AtomicUsize::new(0));
    let blur_count = Arc::new(AtomicUsize::new(0));
    let focus_clone = Arc::clone(&focus_count);
    let blur_clone = Arc::clone(&blur_count);

    let field = Field::with_hooks(
        FieldConfig::new(ValidationMode::Username),
        FieldHooks::new()
            .on_focus(move || {
                focus_clone.fetch_add(1, Ordering::SeqCst);
            })
            .on_blur(move || {
                blur_clone.fetch_add(1, Ordering::SeqCst);
            }),
    );

    field.handle_focus();
    assert!(field.is_focused());
    field.handle_blur();
    assert!(!field.is_focused());
    assert_eq!(focus_count.load(Ordering::SeqCst), 1);
    assert_eq!(blur_count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_submit_forwards_without_touching_validation() {
    let submitted = Arc::new(Mutex::new(Vec::<String>::new()));
    let submitted_clone = Arc::clone(&submitted);

    let field = Field::with_hooks(
        FieldConfig::new(ValidationMode::Email),
        FieldHooks::new().on_submit(move |text| submitted_clone.lock().unwrap().push(text.into())),
    );

    field.handle_change("broken");
    field.handle_submit("broken");

    assert_eq!(submitted.lock().unwrap().as_slice(), ["broken"]);
    assert!(field.has_error());
}

#[test]
fn test_dirty_tracking_follows_mutations() {
    let field = Field::new(FieldConfig::new(ValidationMode::Email));
    assert!(!field.is_dirty());

    field.handle_change("user@example.com");
    assert!(field.is_dirty());

    field.clear_dirty();
    assert!(!field.is_dirty());

    field.handle_focus();
    assert!(field.is_dirty());
}

#[test]
fn test_retired_field_ignores_events() {
    let recorder = Recorder::default();
    let field = Field::with_hooks(FieldConfig::new(ValidationMode::Email), recorder.hooks());

    field.handle_change("broken");
    field.retire();
    field.handle_change("user@example.com");

    assert!(field.has_error());
    assert_eq!(recorder.errors(), vec![true]);
    assert_eq!(recorder.texts(), vec!["broken"]);
}

//! Tests for palette resolution.

use fieldkit::field::{Field, FieldConfig, FieldSnapshot};
use fieldkit::theme::FieldPalette;
use fieldkit::validation::ValidationMode;

const PALETTE: FieldPalette<&str> = FieldPalette {
    idle: "idle",
    focused: "focused",
    error: "error",
};

#[test]
fn test_error_wins_over_focus() {
    let snapshot = FieldSnapshot {
        has_error: true,
        is_focused: true,
        ..Default::default()
    };
    assert_eq!(PALETTE.resolve(&snapshot), "error");
}

#[test]
fn test_focus_wins_over_idle() {
    let snapshot = FieldSnapshot {
        is_focused: true,
        ..Default::default()
    };
    assert_eq!(PALETTE.resolve(&snapshot), "focused");
}

#[test]
fn test_idle_by_default() {
    assert_eq!(PALETTE.resolve(&FieldSnapshot::default()), "idle");
}

#[test]
fn test_resolution_follows_live_field_state() {
    let palette = FieldPalette::new("idle", "focused", "error");
    assert_eq!(palette, PALETTE);

    let field = Field::new(FieldConfig::new(ValidationMode::Email));

    assert_eq!(PALETTE.resolve(&field.snapshot()), "idle");

    field.handle_focus();
    assert_eq!(PALETTE.resolve(&field.snapshot()), "focused");

    field.handle_change("broken");
    assert_eq!(PALETTE.resolve(&field.snapshot()), "error");

    field.handle_change("user@example.com");
    assert_eq!(PALETTE.resolve(&field.snapshot()), "focused");
}

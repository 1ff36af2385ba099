//! Color resolution for field rendering.
//!
//! The engine never consults a theme store; the rendering collaborator
//! injects a read-only palette snapshot at render time and asks it to
//! resolve against the field's current state.

use crate::field::FieldSnapshot;

/// Read-only color snapshot for one field.
///
/// Generic over the consumer's color type; the engine only picks slots.
/// An accent override (e.g. a highlighted search field) is expressed by
/// passing a palette with a different `focused` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPalette<C> {
    /// Border color for a blurred, error-free field.
    pub idle: C,
    /// Border color while focused.
    pub focused: C,
    /// Border color while the field reports an error.
    pub error: C,
}

impl<C: Copy> FieldPalette<C> {
    /// Create a palette from its three slots.
    pub fn new(idle: C, focused: C, error: C) -> Self {
        Self {
            idle,
            focused,
            error,
        }
    }

    /// Resolve the border color for the given field state.
    ///
    /// Error wins over focus wins over idle.
    pub fn resolve(&self, snapshot: &FieldSnapshot) -> C {
        if snapshot.has_error {
            self.error
        } else if snapshot.is_focused {
            self.focused
        } else {
            self.idle
        }
    }
}

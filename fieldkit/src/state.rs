use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::CompareSource;

/// Shared value cell with interior mutability.
///
/// `State<T>` is the data contract between a field and the surrounding
/// application state: cheap to clone, safe to hand across async task
/// boundaries, readable at any time. A confirm-password field typically
/// compares against a `State<String>` owned by the screen that also owns
/// the primary password field.
///
/// # Example
///
/// ```ignore
/// let password = State::new(String::new());
/// let confirm = Field::new(
///     FieldConfig::new(ValidationMode::ConfirmPassword).confirms(password.source()),
/// );
///
/// password.set("Secret1".to_string());
/// confirm.handle_change("Secret1"); // passes
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Create a new cell holding the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Replace the current value
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Update the value in place
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the value has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl State<String> {
    /// Wrap this cell as a comparison source for a confirm-password field.
    ///
    /// The source reads the cell at validation time, so later `set` calls
    /// change the comparison outcome without reconfiguring the field.
    pub fn source(&self) -> CompareSource {
        let cell = self.clone();
        Arc::new(move || cell.get())
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

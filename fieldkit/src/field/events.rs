//! Event entry points for the field state machine.
//!
//! The rendering collaborator forwards its platform events here; every
//! handler runs synchronously except the phone leg, which hands back a
//! [`Verification`] token for the event loop to drive.

use std::sync::Arc;

use log::{debug, warn};

use crate::phone::{NormalizeOptions, NormalizedPhone, PhoneNormalizer};
use crate::validation::{Outcome, ValidationContext, ValidationMode, validate};

use super::Field;

impl Field {
    /// Handle an input change.
    ///
    /// Propagates the raw value to `on_change_text`, closes the error
    /// detail, then runs the field's validator. Synchronous outcomes are
    /// applied immediately and reported through `on_error_check`; an
    /// empty value always resets to the no-error, seeded state instead.
    ///
    /// For phone fields the returned [`Verification`] must be driven
    /// (`run().await` or [`Field::handle_change_detached`]); until it
    /// resolves, observable state is unchanged.
    pub fn handle_change(&self, value: &str) -> Option<Verification> {
        if self.is_retired() {
            return None;
        }
        self.hooks().fire_change_text(value);
        let generation = self.begin_change();

        if self.mode() == ValidationMode::None {
            return None;
        }

        if value.is_empty() {
            if self.apply_reset() {
                self.hooks().fire_error_check(false);
            }
            return None;
        }

        let config = self.config();
        let cx = ValidationContext {
            rules: &config.rules,
            compare: config.compare.as_ref(),
        };

        match validate(self.mode(), value, cx) {
            Outcome::Pending => match &config.normalizer {
                Some(normalizer) => Some(Verification {
                    field: self.clone(),
                    value: value.to_owned(),
                    generation,
                    normalizer: Arc::clone(normalizer),
                    options: config.normalize_options,
                }),
                None => {
                    warn!("phone field {} has no normalizer, failing validation", self.id());
                    if self.apply_flag(true) {
                        self.hooks().fire_error_check(true);
                    }
                    None
                }
            },
            Outcome::Rules(report) => {
                let has_error = report.any_violated();
                if self.apply_report(report) {
                    self.hooks().fire_error_check(has_error);
                }
                None
            }
            outcome => {
                if let Some(has_error) = outcome.has_error()
                    && self.apply_flag(has_error)
                {
                    self.hooks().fire_error_check(has_error);
                }
                None
            }
        }
    }

    /// Handle an input change, detaching any async verification onto the
    /// tokio runtime. Callers must be inside a runtime.
    pub fn handle_change_detached(&self, value: &str) {
        if let Some(verification) = self.handle_change(value) {
            tokio::spawn(verification.run());
        }
    }

    /// Handle the field gaining focus.
    pub fn handle_focus(&self) {
        if self.is_retired() {
            return;
        }
        self.set_focus_flag(true);
        self.hooks().fire_focus();
    }

    /// Handle the field losing focus.
    pub fn handle_blur(&self) {
        if self.is_retired() {
            return;
        }
        self.set_focus_flag(false);
        self.hooks().fire_blur();
    }

    /// Forward a submit event verbatim. Validation state is untouched.
    pub fn handle_submit(&self, text: &str) {
        if self.is_retired() {
            return;
        }
        self.hooks().fire_submit(text);
    }
}

/// An in-flight phone verification, tagged with the value and generation
/// it was dispatched under.
///
/// There is no cancellation: a superseding input change bumps the field's
/// generation and this token's resolution is discarded on apply. Driving
/// it after the field retired is likewise a no-op.
pub struct Verification {
    field: Field,
    value: String,
    generation: u64,
    normalizer: Arc<dyn PhoneNormalizer>,
    options: NormalizeOptions,
}

impl Verification {
    /// The value this verification was dispatched for.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Call the normalization service and apply the resolution.
    ///
    /// A service failure resolves as invalid; it is never retried and
    /// never escapes as an error. On success the canonical number is
    /// pushed through `on_change_text` before `on_error_check` fires.
    pub async fn run(self) {
        let verdict = match self.normalizer.normalize(&self.value, self.options).await {
            Ok(verdict) => verdict,
            Err(err) => {
                warn!(
                    "phone normalization failed for field {}: {err}",
                    self.field.id()
                );
                NormalizedPhone::invalid()
            }
        };

        let has_error = !verdict.is_valid;
        if !self.field.apply_resolution(self.generation, has_error) {
            debug!(
                "discarding superseded phone resolution for field {}",
                self.field.id()
            );
            return;
        }

        if verdict.is_valid
            && let Some(number) = verdict.phone_number
        {
            self.field.hooks().fire_change_text(&number);
        }
        self.field.hooks().fire_error_check(has_error);
    }
}

impl std::fmt::Debug for Verification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verification")
            .field("field", &self.field.id())
            .field("value", &self.value)
            .field("generation", &self.generation)
            .finish()
    }
}

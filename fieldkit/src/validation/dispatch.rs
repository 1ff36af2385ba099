//! Mode dispatch: one raw string in, one [`Outcome`] out.
//!
//! Every arm is pure and synchronous except [`ValidationMode::Phone`],
//! which only signals [`Outcome::Pending`]; the field state machine owns
//! the async leg (see [`crate::field::Verification`]).

use std::sync::{Arc, LazyLock};

use log::warn;
use regex::Regex;

use super::mode::ValidationMode;
use super::outcome::Outcome;
use super::rules::RuleRegistry;

/// Supplies the comparison value for confirm-password fields.
///
/// Called synchronously at validation time; the supplier's current value
/// decides the outcome, so no field remount is needed when it changes.
pub type CompareSource = Arc<dyn Fn() -> String + Send + Sync>;

/// Usernames: 3-30 chars, alphanumeric plus underscore and dash.
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,30}$").expect("invalid username pattern"));

/// Everything the dispatcher may consult besides the value itself.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Password rule set.
    pub rules: &'a RuleRegistry,
    /// Comparison source for confirm-password mode.
    pub compare: Option<&'a CompareSource>,
}

/// Run the validator for `mode` against `value`.
///
/// A confirm-password field without a comparison source is treated as
/// permanently failing rather than crashing.
pub fn validate(mode: ValidationMode, value: &str, cx: ValidationContext<'_>) -> Outcome {
    match mode {
        ValidationMode::None => Outcome::Skipped,
        ValidationMode::Email => email_is_valid(value).into(),
        ValidationMode::Username => username_is_valid(value).into(),
        ValidationMode::ConfirmPassword => match cx.compare {
            Some(source) => (value == source()).into(),
            None => {
                warn!("confirm-password field has no comparison source, failing validation");
                Outcome::Fail
            }
        },
        ValidationMode::Password => Outcome::Rules(cx.rules.evaluate(value)),
        ValidationMode::Phone => Outcome::Pending,
    }
}

/// Structural email-format check.
pub fn email_is_valid(value: &str) -> bool {
    email_address::EmailAddress::is_valid(value)
}

/// Username character/length constraints.
pub fn username_is_valid(value: &str) -> bool {
    USERNAME_RE.is_match(value)
}

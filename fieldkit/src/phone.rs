//! Phone-number normalization contract.
//!
//! Phone fields delegate to an external normalization service. The service
//! is injected per field as an `Arc<dyn PhoneNormalizer>`; the engine never
//! ships an implementation of its own. Failures are absorbed at the field
//! boundary: a rejected or failed call counts as an invalid number, nothing
//! is retried.

use async_trait::async_trait;
use thiserror::Error;

/// Options forwarded to the normalization service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Require an unambiguous country-prefix match.
    pub strict_detection: bool,
    /// Reject numbers whose prefix is not a mobile prefix.
    pub validate_mobile_prefix: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            strict_detection: true,
            validate_mobile_prefix: true,
        }
    }
}

/// Service verdict for one input value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedPhone {
    /// Whether the input parsed as a valid number.
    pub is_valid: bool,
    /// Canonical form, present only on success.
    pub phone_number: Option<String>,
}

impl NormalizedPhone {
    /// A valid verdict carrying the canonical number
    pub fn valid(phone_number: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            phone_number: Some(phone_number.into()),
        }
    }

    /// An invalid verdict
    pub fn invalid() -> Self {
        Self::default()
    }
}

/// Error type for normalization service failures
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct NormalizeError {
    /// Error message
    pub message: String,
}

impl NormalizeError {
    /// Create a new normalization error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for NormalizeError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for NormalizeError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// External phone-number normalization service.
///
/// One call is made per input-change event on a phone field. The call is
/// not cancellable; a superseded result is discarded when it resolves.
#[async_trait]
pub trait PhoneNormalizer: Send + Sync {
    /// Normalize `value`, returning validity and the canonical form.
    async fn normalize(
        &self,
        value: &str,
        options: NormalizeOptions,
    ) -> Result<NormalizedPhone, NormalizeError>;
}

use super::rules::RuleReport;

/// Result of running a field's validator against one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No validator configured; never an error.
    Skipped,
    /// Boolean validator accepted the value.
    Pass,
    /// Boolean validator rejected the value.
    Fail,
    /// Password mode: per-rule violation report.
    Rules(RuleReport),
    /// Asynchronous validation dispatched; resolution outstanding.
    Pending,
}

impl Outcome {
    /// Check if the outcome is still outstanding
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Aggregate error flag, or `None` while pending.
    ///
    /// `Skipped` maps to no error: a field without a validator is never
    /// flagged.
    pub fn has_error(&self) -> Option<bool> {
        match self {
            Self::Skipped | Self::Pass => Some(false),
            Self::Fail => Some(true),
            Self::Rules(report) => Some(report.any_violated()),
            Self::Pending => None,
        }
    }

    /// The rule report, if this outcome carries one.
    pub fn rule_report(&self) -> Option<&RuleReport> {
        match self {
            Self::Rules(report) => Some(report),
            _ => None,
        }
    }
}

/// Convert a boolean validity into a pass/fail outcome.
impl From<bool> for Outcome {
    fn from(is_valid: bool) -> Self {
        if is_valid { Self::Pass } else { Self::Fail }
    }
}

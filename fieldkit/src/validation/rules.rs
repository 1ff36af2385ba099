//! Password rule registry and per-rule result accumulation.
//!
//! Rules are statically enumerated; each carries an `active` flag in the
//! registry. An inactive rule is still evaluated into the report as
//! satisfied, so a rendering collaborator can show a stable checklist, but
//! it never contributes to the aggregate failure.

/// One password strength rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    /// Below the registry's minimum length.
    TooShort,
    /// No lowercase letter present.
    NoLowercase,
    /// No uppercase letter present.
    NoUppercase,
    /// No digit present.
    NoDigit,
    /// No special (non-alphanumeric) character present.
    NoSpecial,
}

impl PasswordRule {
    /// Every defined rule, in report order.
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::TooShort,
        PasswordRule::NoLowercase,
        PasswordRule::NoUppercase,
        PasswordRule::NoDigit,
        PasswordRule::NoSpecial,
    ];

    /// The rule seeding a fresh report as deficient (see [`RuleReport::seeded`]).
    pub const SEED: PasswordRule = PasswordRule::TooShort;

    /// Human-readable description for rule checklists.
    pub fn description(&self) -> &'static str {
        match self {
            Self::TooShort => "Minimum length not met",
            Self::NoLowercase => "Include a lowercase letter",
            Self::NoUppercase => "Include an uppercase letter",
            Self::NoDigit => "Include a number",
            Self::NoSpecial => "Include a special character",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::TooShort => 0,
            Self::NoLowercase => 1,
            Self::NoUppercase => 2,
            Self::NoDigit => 3,
            Self::NoSpecial => 4,
        }
    }

    /// Evaluate this rule alone against `value`. Pure; rules never
    /// short-circuit each other.
    fn violated(self, value: &str, min_length: usize) -> bool {
        match self {
            Self::TooShort => value.chars().count() < min_length,
            Self::NoLowercase => !value.chars().any(|c| c.is_lowercase()),
            Self::NoUppercase => !value.chars().any(|c| c.is_uppercase()),
            Self::NoDigit => !value.chars().any(|c| c.is_numeric()),
            Self::NoSpecial => value.chars().all(|c| c.is_alphanumeric()),
        }
    }
}

/// Which rules participate in password validation, and with what length
/// threshold.
///
/// The default registry activates only the seed rule at threshold 8.
/// Builder methods follow the consuming style:
///
/// ```ignore
/// let rules = RuleRegistry::new()
///     .activate(PasswordRule::NoDigit)
///     .min_length(10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRegistry {
    active: [bool; PasswordRule::ALL.len()],
    min_length: usize,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        let mut active = [false; PasswordRule::ALL.len()];
        active[PasswordRule::SEED.index()] = true;
        Self {
            active,
            min_length: 8,
        }
    }
}

impl RuleRegistry {
    /// Registry with only the seed rule active, threshold 8.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every defined rule active.
    pub fn strict() -> Self {
        Self {
            active: [true; PasswordRule::ALL.len()],
            min_length: 8,
        }
    }

    /// Activate a rule.
    pub fn activate(mut self, rule: PasswordRule) -> Self {
        self.active[rule.index()] = true;
        self
    }

    /// Deactivate a rule. An inactive rule reports satisfied and never
    /// contributes to aggregate failure.
    pub fn deactivate(mut self, rule: PasswordRule) -> Self {
        self.active[rule.index()] = false;
        self
    }

    /// Set the minimum-length threshold.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Whether a rule participates in validation.
    pub fn is_active(&self, rule: PasswordRule) -> bool {
        self.active[rule.index()]
    }

    /// The current minimum-length threshold.
    pub fn threshold(&self) -> usize {
        self.min_length
    }

    /// Evaluate every defined rule against `value`.
    ///
    /// Each rule is checked independently; inactive rules are forced to
    /// satisfied in the resulting report.
    pub fn evaluate(&self, value: &str) -> RuleReport {
        let mut violations = [false; PasswordRule::ALL.len()];
        for rule in PasswordRule::ALL {
            violations[rule.index()] =
                self.active[rule.index()] && rule.violated(value, self.min_length);
        }
        RuleReport { violations }
    }
}

/// Per-rule violation state for one evaluated value.
///
/// Each evaluation replaces the previous report wholesale; reports are
/// never merged across input changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleReport {
    violations: [bool; PasswordRule::ALL.len()],
}

impl RuleReport {
    /// The "not yet evaluated" report: the seed rule violated, everything
    /// else satisfied. Distinct from a report where all rules passed.
    pub fn seeded() -> Self {
        let mut violations = [false; PasswordRule::ALL.len()];
        violations[PasswordRule::SEED.index()] = true;
        Self { violations }
    }

    /// Whether a specific rule is violated.
    pub fn is_violated(&self, rule: PasswordRule) -> bool {
        self.violations[rule.index()]
    }

    /// Aggregate failure: true iff any rule in the report is violated.
    pub fn any_violated(&self) -> bool {
        self.violations.iter().any(|&v| v)
    }

    /// The violated rules, in report order.
    pub fn violations(&self) -> impl Iterator<Item = PasswordRule> + '_ {
        PasswordRule::ALL
            .into_iter()
            .filter(|rule| self.is_violated(*rule))
    }

    /// Every rule with its violation flag, for checklist rendering.
    pub fn entries(&self) -> impl Iterator<Item = (PasswordRule, bool)> + '_ {
        PasswordRule::ALL
            .into_iter()
            .map(|rule| (rule, self.is_violated(rule)))
    }
}

impl Default for RuleReport {
    fn default() -> Self {
        Self::seeded()
    }
}

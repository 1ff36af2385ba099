use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::hooks::FieldHooks;
use crate::phone::{NormalizeOptions, PhoneNormalizer};
use crate::validation::{CompareSource, RuleRegistry, RuleReport, ValidationMode};

/// Unique identifier for a Field instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

/// Static configuration for one field.
///
/// Built once when the field mounts; the field keeps it immutable for its
/// lifetime. Builder methods follow the consuming style:
///
/// ```ignore
/// let config = FieldConfig::new(ValidationMode::Password)
///     .masked()
///     .rules(RuleRegistry::strict());
/// ```
pub struct FieldConfig {
    pub(crate) mode: ValidationMode,
    pub(crate) masked: bool,
    pub(crate) rules: RuleRegistry,
    pub(crate) compare: Option<CompareSource>,
    pub(crate) normalizer: Option<Arc<dyn PhoneNormalizer>>,
    pub(crate) normalize_options: NormalizeOptions,
}

impl FieldConfig {
    /// Create a config for the given validation mode.
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            masked: false,
            rules: RuleRegistry::default(),
            compare: None,
            normalizer: None,
            normalize_options: NormalizeOptions::default(),
        }
    }

    /// Mask the field's input. Masked fields start obscured and expose
    /// the reveal toggle.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Replace the password rule set.
    pub fn rules(mut self, rules: RuleRegistry) -> Self {
        self.rules = rules;
        self
    }

    /// Set the comparison source for confirm-password mode.
    pub fn confirms(mut self, source: CompareSource) -> Self {
        self.compare = Some(source);
        self
    }

    /// Inject the phone normalization service.
    pub fn normalizer(mut self, normalizer: Arc<dyn PhoneNormalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Override the options forwarded to the normalization service.
    pub fn normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize_options = options;
        self
    }
}

impl std::fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldConfig")
            .field("mode", &self.mode)
            .field("masked", &self.masked)
            .field("rules", &self.rules)
            .field("compare", &self.compare.is_some())
            .field("normalizer", &self.normalizer.is_some())
            .field("normalize_options", &self.normalize_options)
            .finish()
    }
}

/// Internal state for a Field
#[derive(Debug)]
struct FieldInner {
    /// Aggregate error flag
    has_error: bool,
    /// Whether the field currently has focus
    focused: bool,
    /// Whether masked input is currently hidden
    obscured: bool,
    /// Whether the error detail popup is open
    show_error_detail: bool,
    /// Per-rule result of the last password evaluation
    rule_report: RuleReport,
    /// Tag for the most recent input change; stale async resolutions
    /// carry an older tag and are discarded
    generation: u64,
    /// Set at unmount; all further mutation is refused
    retired: bool,
}

/// Observable state for rendering collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSnapshot {
    /// Aggregate error flag.
    pub has_error: bool,
    /// Whether the field currently has focus.
    pub is_focused: bool,
    /// Whether masked input is currently hidden.
    pub is_obscured: bool,
    /// Whether the error detail popup is open.
    pub show_error_detail: bool,
    /// Per-rule result of the last password evaluation.
    pub rule_report: RuleReport,
}

/// A validated text field, decoupled from rendering.
///
/// `Field` owns the error/focus/masking state for one input control and
/// reacts to the events the rendering collaborator forwards to it:
/// input changes, focus and blur, submit, and the two toggles. Validation
/// results surface through [`FieldHooks`] and through [`FieldSnapshot`]
/// reads.
///
/// Cloning a `Field` shares the underlying state; clones are how the
/// async verification leg and form aggregation keep a handle on the same
/// field.
pub struct Field {
    /// Unique identifier for this field instance
    id: FieldId,
    /// Immutable configuration
    config: Arc<FieldConfig>,
    /// Collaborator callbacks
    hooks: Arc<FieldHooks>,
    /// Internal state
    inner: Arc<RwLock<FieldInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Field {
    /// Create a field with no hooks attached.
    pub fn new(config: FieldConfig) -> Self {
        Self::with_hooks(config, FieldHooks::new())
    }

    /// Create a field with collaborator hooks.
    pub fn with_hooks(config: FieldConfig, hooks: FieldHooks) -> Self {
        let inner = FieldInner {
            has_error: false,
            focused: false,
            obscured: config.masked,
            show_error_detail: false,
            rule_report: RuleReport::seeded(),
            generation: 0,
            retired: false,
        };
        Self {
            id: FieldId::new(),
            config: Arc::new(config),
            hooks: Arc::new(hooks),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this field
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// The field's validation mode
    pub fn mode(&self) -> ValidationMode {
        self.config.mode
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Aggregate error flag
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.has_error)
            .unwrap_or(false)
    }

    /// Whether the field currently has focus
    pub fn is_focused(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.focused)
            .unwrap_or(false)
    }

    /// Whether masked input is currently hidden
    pub fn is_obscured(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.obscured)
            .unwrap_or(false)
    }

    /// Whether the error detail popup is open
    pub fn show_error_detail(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.show_error_detail)
            .unwrap_or(false)
    }

    /// Per-rule result of the last password evaluation
    pub fn rule_report(&self) -> RuleReport {
        self.inner
            .read()
            .map(|guard| guard.rule_report)
            .unwrap_or_default()
    }

    /// Consistent snapshot of all observable state
    pub fn snapshot(&self) -> FieldSnapshot {
        self.inner
            .read()
            .map(|guard| FieldSnapshot {
                has_error: guard.has_error,
                is_focused: guard.focused,
                is_obscured: guard.obscured,
                show_error_detail: guard.show_error_detail,
                rule_report: guard.rule_report,
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Toggles
    // -------------------------------------------------------------------------

    /// Flip the mask-reveal toggle; returns the new obscured state.
    ///
    /// No-op on unmasked fields. Never affects validation state.
    pub fn toggle_obscured(&self) -> bool {
        if !self.config.masked {
            return false;
        }
        if let Ok(mut guard) = self.inner.write() {
            if guard.retired {
                return guard.obscured;
            }
            guard.obscured = !guard.obscured;
            self.dirty.store(true, Ordering::SeqCst);
            guard.obscured
        } else {
            false
        }
    }

    /// Flip error-detail visibility; returns the new state.
    ///
    /// Only meaningful while the field has an error; otherwise detail
    /// stays hidden.
    pub fn toggle_error_detail(&self) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if guard.retired {
                return guard.show_error_detail;
            }
            guard.show_error_detail = guard.has_error && !guard.show_error_detail;
            self.dirty.store(true, Ordering::SeqCst);
            guard.show_error_detail
        } else {
            false
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Mark the field unmounted.
    ///
    /// A retired field refuses all further state mutation; in particular,
    /// any still-pending phone verification resolves as a no-op.
    pub fn retire(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.retired = true;
        }
    }

    /// Whether the field has been retired
    pub fn is_retired(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.retired)
            .unwrap_or(true)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if observable state changed since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Mutation primitives (event handlers in events.rs drive these)
    // -------------------------------------------------------------------------

    pub(crate) fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub(crate) fn hooks(&self) -> &FieldHooks {
        &self.hooks
    }

    /// Start handling an input change: advance the generation so any
    /// in-flight verification becomes stale, and close the error detail.
    /// Returns the new generation.
    pub(crate) fn begin_change(&self) -> u64 {
        if let Ok(mut guard) = self.inner.write() {
            if guard.retired {
                return guard.generation;
            }
            guard.generation += 1;
            guard.show_error_detail = false;
            self.dirty.store(true, Ordering::SeqCst);
            guard.generation
        } else {
            0
        }
    }

    /// Reset to the empty-input state: no error, seeded rule report.
    /// Returns false if the field is retired.
    pub(crate) fn apply_reset(&self) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if guard.retired {
                return false;
            }
            guard.has_error = false;
            guard.show_error_detail = false;
            guard.rule_report = RuleReport::seeded();
            self.dirty.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Apply a boolean validation outcome. Returns false if the field is
    /// retired.
    pub(crate) fn apply_flag(&self, has_error: bool) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if guard.retired {
                return false;
            }
            guard.has_error = has_error;
            if !has_error {
                guard.show_error_detail = false;
            }
            self.dirty.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Replace the rule report and derive the aggregate flag from it.
    /// Returns false if the field is retired.
    pub(crate) fn apply_report(&self, report: RuleReport) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if guard.retired {
                return false;
            }
            guard.rule_report = report;
            guard.has_error = report.any_violated();
            if !guard.has_error {
                guard.show_error_detail = false;
            }
            self.dirty.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Apply an async resolution tagged with the generation it was
    /// dispatched under. Returns false, leaving state untouched, when the
    /// tag is stale or the field is retired.
    pub(crate) fn apply_resolution(&self, generation: u64, has_error: bool) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if guard.retired || guard.generation != generation {
                return false;
            }
            guard.has_error = has_error;
            if !has_error {
                guard.show_error_detail = false;
            }
            self.dirty.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    pub(crate) fn set_focus_flag(&self, focused: bool) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.retired {
                return;
            }
            guard.focused = focused;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }
}

impl Clone for Field {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            config: Arc::clone(&self.config),
            hooks: Arc::clone(&self.hooks),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

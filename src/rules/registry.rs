use std::collections::BTreeSet;

use crate::error::{DarkGuardError, Result};

use super::{
    BrokenFile, Criticality, HasExtension, HasOnlyOnePeriod, InvalidUtf8, NoControlChars,
    NoDupedNames, NoExtraneousFiles, NoHiddenFiles, NoSpaces, NoSpecialFiles, NoUtf8,
    NonzeroFilesize, RestrictiveNaming, Rule, RuleSpec, StartsWithAlpha, ValidDscFilename,
    ValidWindowsFilename, Validator, broken_file_spec,
};

/// Names of rules skipped for one run.
///
/// Only [`RuleRegistry::skip`] can add names, and it refuses critical rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipList {
    names: BTreeSet<String>,
}

impl SkipList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Catalog of every rule known to an audit.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    validators: Vec<Validator>,
}

impl RuleRegistry {
    /// An empty registry, for building a rule set from scratch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard rule set. Content deduplication and the path length
    /// limit need run-specific settings and are registered by the caller.
    #[must_use]
    pub fn with_defaults() -> Self {
        let builtins = [
            Validator::new(broken_file_spec(), BrokenFile),
            Validator::new(
                RuleSpec::new("valid-windows-filename").with_criticality(Criticality::Critical),
                ValidWindowsFilename,
            ),
            Validator::new(RuleSpec::new("no-duped-names"), NoDupedNames::new()),
            Validator::new(
                RuleSpec::new("invalid-utf8").with_criticality(Criticality::High),
                InvalidUtf8,
            ),
            Validator::new(RuleSpec::new("no-utf8"), NoUtf8),
            Validator::new(RuleSpec::new("no-spaces"), NoSpaces),
            Validator::new(RuleSpec::new("starts-with-alpha"), StartsWithAlpha),
            Validator::new(RuleSpec::new("has-only-one-period"), HasOnlyOnePeriod),
            Validator::new(RuleSpec::new("no-hidden-files"), NoHiddenFiles),
            Validator::new(RuleSpec::new("has-extension"), HasExtension),
            Validator::new(RuleSpec::new("nonzero-filesize"), NonzeroFilesize),
            Validator::new(RuleSpec::new("no-special-files"), NoSpecialFiles),
            Validator::new(RuleSpec::new("no-control-chars"), NoControlChars),
            Validator::new(RuleSpec::new("valid-dsc-filename"), ValidDscFilename),
            Validator::new(RuleSpec::new("no-extraneous-files"), NoExtraneousFiles),
            Validator::new(
                RuleSpec::new("restrictive-naming")
                    .with_priority(100)
                    .with_skip_on_previous_failures(true),
                RestrictiveNaming::new(),
            ),
        ];

        Self {
            validators: Vec::from(builtins),
        }
    }

    /// Add a rule to the catalog.
    ///
    /// # Errors
    /// Returns `DuplicateRule` if a rule with the same name already exists.
    pub fn register(&mut self, validator: Validator) -> Result<()> {
        if self.contains(validator.name()) {
            return Err(DarkGuardError::DuplicateRule(validator.name().to_string()));
        }
        tracing::debug!(
            target: "dark_guard::rules",
            rule = validator.name(),
            criticality = %validator.spec().criticality(),
            priority = validator.spec().priority(),
            "registered rule"
        );
        self.validators.push(validator);
        Ok(())
    }

    /// Register a Normal-tier rule with default priority and chaining.
    ///
    /// # Errors
    /// Returns `DuplicateRule` if the name is taken.
    pub fn register_rule(&mut self, name: &str, rule: impl Rule + 'static) -> Result<()> {
        self.register(Validator::new(RuleSpec::new(name), rule))
    }

    /// # Errors
    /// Returns `DuplicateRule` if the name is taken.
    pub fn register_with_criticality(
        &mut self,
        name: &str,
        rule: impl Rule + 'static,
        criticality: Criticality,
    ) -> Result<()> {
        self.register(Validator::new(
            RuleSpec::new(name).with_criticality(criticality),
            rule,
        ))
    }

    /// Register a rule with every ordering and chaining knob set explicitly.
    ///
    /// # Errors
    /// Returns `DuplicateRule` if the name is taken.
    pub fn register_custom(
        &mut self,
        name: &str,
        rule: impl Rule + 'static,
        criticality: Criticality,
        priority: i8,
        skip_on_previous_failures: bool,
        stop_on_failure: bool,
    ) -> Result<()> {
        self.register(Validator::new(
            RuleSpec::new(name)
                .with_criticality(criticality)
                .with_priority(priority)
                .with_skip_on_previous_failures(skip_on_previous_failures)
                .with_stop_on_failure(stop_on_failure),
            rule,
        ))
    }

    /// Remove every rule, including the built-in ones.
    pub fn clear(&mut self) {
        self.validators.clear();
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleSpec> {
        self.validators
            .iter()
            .map(Validator::spec)
            .find(|spec| spec.name() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Mark `name` as skipped in `skips`.
    ///
    /// Returns false for unknown names and for critical rules, which can
    /// never be skipped.
    pub fn skip(&self, skips: &mut SkipList, name: &str) -> bool {
        match self.get(name) {
            Some(spec) if !spec.is_critical() => {
                skips.names.insert(name.to_string());
                true
            }
            _ => false,
        }
    }

    /// Returns true if `name` was skipped and no longer is.
    pub fn unskip(&self, skips: &mut SkipList, name: &str) -> bool {
        skips.names.remove(name)
    }

    /// Rules not skipped in `skips`, in chain order.
    #[must_use]
    pub fn ordered_active(&self, skips: &SkipList) -> Vec<&RuleSpec> {
        let mut specs: Vec<_> = self
            .validators
            .iter()
            .map(Validator::spec)
            .filter(|spec| is_active(spec, skips))
            .collect();
        specs.sort_by(|a, b| a.run_order(b));
        specs
    }

    /// Mutable view of the active rules, in chain order.
    pub fn ordered_active_mut(&mut self, skips: &SkipList) -> Vec<&mut Validator> {
        let mut validators: Vec<_> = self
            .validators
            .iter_mut()
            .filter(|v| is_active(v.spec(), skips))
            .collect();
        validators.sort_by(|a, b| a.spec().run_order(b.spec()));
        validators
    }
}

fn is_active(spec: &RuleSpec, skips: &SkipList) -> bool {
    spec.is_critical() || !skips.contains(spec.name())
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

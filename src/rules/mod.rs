//! Rules, their run-order metadata, and the per-entry rule chain.
//!
//! A rule is a named predicate over one entry's relative path and metadata.
//! Each rule carries a [`RuleSpec`] that decides where it runs in the chain
//! and how a failure affects the rules after it.

mod content;
mod entry;
mod naming;
mod path;
mod registry;
mod unicode;
mod windows;

pub use content::{ContentDedup, DigestIndex, SharedDigestIndex};
pub use entry::{NoSpecialFiles, NonzeroFilesize};
pub(crate) use entry::BrokenFile;
pub use naming::{
    HasExtension, HasOnlyOnePeriod, NoControlChars, NoExtraneousFiles, NoHiddenFiles, NoSpaces,
    RestrictiveNaming, StartsWithAlpha, ValidDscFilename,
};
pub use path::{NoDupedNames, PathLimit};
pub use registry::{RuleRegistry, SkipList};
pub use unicode::{InvalidUtf8, NoUtf8};
pub use windows::ValidWindowsFilename;

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::scanner::EntryInfo;

pub const BROKEN_FILE: &str = "broken-file";
pub const NO_DUPED_CONTENT: &str = "no-duped-content";
pub const PATH_LIMIT: &str = "path-limit";

/// How important a rule is. Stricter tiers sort first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criticality {
    /// Required for the archive filesystem to work; never skippable.
    Critical,
    High,
    #[default]
    Normal,
    Low,
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Normal => "Normal",
            Self::Low => "Low",
        };
        f.write_str(name)
    }
}

/// Human-readable description of what is wrong with one entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Violation {
    message: String,
}

impl Violation {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Predicate run against each entry of the tree.
pub trait Rule {
    /// Check one entry.
    ///
    /// # Errors
    /// Returns the violation when the entry breaks the rule.
    fn check(&mut self, path: &str, entry: &EntryInfo) -> Result<(), Violation>;
}

impl<F> Rule for F
where
    F: FnMut(&str, &EntryInfo) -> Result<(), Violation>,
{
    fn check(&mut self, path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        self(path, entry)
    }
}

/// Identity and run-order metadata of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSpec {
    name: String,
    criticality: Criticality,
    priority: i8,
    /// Don't run when an earlier rule already failed this entry.
    skip_on_previous_failures: bool,
    /// When this rule fails, no later rule runs against the entry.
    stop_on_failure: bool,
}

impl RuleSpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            criticality: Criticality::Normal,
            priority: 0,
            skip_on_previous_failures: false,
            stop_on_failure: false,
        }
    }

    #[must_use]
    pub const fn with_criticality(mut self, criticality: Criticality) -> Self {
        self.criticality = criticality;
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub const fn with_skip_on_previous_failures(mut self, skip: bool) -> Self {
        self.skip_on_previous_failures = skip;
        self
    }

    #[must_use]
    pub const fn with_stop_on_failure(mut self, stop: bool) -> Self {
        self.stop_on_failure = stop;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn criticality(&self) -> Criticality {
        self.criticality
    }

    #[must_use]
    pub const fn priority(&self) -> i8 {
        self.priority
    }

    #[must_use]
    pub const fn skips_on_previous_failures(&self) -> bool {
        self.skip_on_previous_failures
    }

    #[must_use]
    pub const fn stops_on_failure(&self) -> bool {
        self.stop_on_failure
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.criticality == Criticality::Critical
    }

    /// Whether a quick run should still keep this rule: anything stricter
    /// than Low, or any rule that can stop the chain.
    #[must_use]
    pub fn is_important(&self) -> bool {
        self.criticality < Criticality::Low || self.stop_on_failure
    }

    /// Chain order: priority, then criticality, then name.
    #[must_use]
    pub fn run_order(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.criticality.cmp(&other.criticality))
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// A registered rule: its spec plus the predicate implementing it.
pub struct Validator {
    spec: RuleSpec,
    rule: Box<dyn Rule>,
}

impl Validator {
    #[must_use]
    pub fn new(spec: RuleSpec, rule: impl Rule + 'static) -> Self {
        Self {
            spec,
            rule: Box::new(rule),
        }
    }

    #[must_use]
    pub const fn spec(&self) -> &RuleSpec {
        &self.spec
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.spec.name()
    }

    /// Run the predicate against one entry.
    ///
    /// # Errors
    /// Returns the violation the rule reported.
    pub fn check(&mut self, path: &str, entry: &EntryInfo) -> Result<(), Violation> {
        self.rule.check(path, entry)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// A rule paired with the violation it reported for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub rule: RuleSpec,
    pub violation: Violation,
}

impl Failure {
    #[must_use]
    pub const fn new(rule: RuleSpec, violation: Violation) -> Self {
        Self { rule, violation }
    }

    #[must_use]
    pub fn rule_name(&self) -> &str {
        self.rule.name()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.violation.message()
    }

    /// Synthesized for entries the traversal could not read.
    #[must_use]
    pub fn broken_file(err: &std::io::Error) -> Self {
        Self::new(
            broken_file_spec(),
            Violation::new(format!("critical error: {err}")),
        )
    }
}

#[must_use]
pub fn broken_file_spec() -> RuleSpec {
    RuleSpec::new(BROKEN_FILE)
        .with_criticality(Criticality::Critical)
        .with_priority(i8::MIN)
}

#[derive(Default)]
struct ChainState {
    failures: Vec<Failure>,
    halted: bool,
}

/// Run `validators` (already in chain order) against one entry.
///
/// A rule is not executed when the chain was halted by an earlier
/// stop-on-failure rule, or when it skips on previous failures and the entry
/// already has one.
pub fn run_chain<'a, I>(validators: I, path: &str, entry: &EntryInfo) -> Vec<Failure>
where
    I: IntoIterator<Item = &'a mut Validator>,
{
    validators
        .into_iter()
        .fold(ChainState::default(), |mut state, validator| {
            if state.halted {
                return state;
            }
            if validator.spec.skip_on_previous_failures && !state.failures.is_empty() {
                return state;
            }
            if let Err(violation) = validator.check(path, entry) {
                state.halted = validator.spec.stop_on_failure;
                state
                    .failures
                    .push(Failure::new(validator.spec.clone(), violation));
            }
            state
        })
        .failures
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

//! The audit engine: walks a tree and runs the active rule chain on every
//! entry below the root.

use std::path::Path;

use crate::error::{DarkGuardError, Result};
use crate::rules::{Failure, RuleRegistry, RuleSpec, SkipList, run_chain};
use crate::scanner::{EntryInfo, TreeTraverser, WalkDirTraverser};

/// Counts from one `validate_tree` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    /// Entries judged, root excluded.
    pub entries: usize,
    /// Entries handed to the sink.
    pub failed_entries: usize,
    /// Failures across all entries.
    pub failures: usize,
}

/// Runs a registry's rules over a tree.
///
/// Owns the rules and the run's skip list, nothing about individual files.
pub struct Engine {
    registry: RuleRegistry,
    skips: SkipList,
    traverser: Box<dyn TreeTraverser>,
}

impl Engine {
    /// Engine over the real filesystem.
    #[must_use]
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            skips: SkipList::new(),
            traverser: Box::new(WalkDirTraverser::new()),
        }
    }

    #[must_use]
    pub fn with_traverser(mut self, traverser: impl TreeTraverser + 'static) -> Self {
        self.traverser = Box::new(traverser);
        self
    }

    #[must_use]
    pub const fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// For registering run-specific rules before the walk starts.
    pub const fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    #[must_use]
    pub const fn skips(&self) -> &SkipList {
        &self.skips
    }

    /// Skip the named rule for this run.
    ///
    /// Returns false if the name is unknown or the rule is critical.
    pub fn skip(&mut self, name: &str) -> bool {
        self.registry.skip(&mut self.skips, name)
    }

    /// Skip every named rule, collecting the names that were refused.
    ///
    /// # Errors
    /// Returns `InvalidSkip` listing every unknown or critical name.
    pub fn skip_all_of<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        let invalid: Vec<String> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !self.skip(name))
            .map(str::to_string)
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(DarkGuardError::InvalidSkip(invalid))
        }
    }

    /// Returns true if the rule had been skipped.
    pub fn unskip(&mut self, name: &str) -> bool {
        self.registry.unskip(&mut self.skips, name)
    }

    /// Skip every rule that can be skipped; critical rules stay.
    ///
    /// Meant for building a run up from nothing with `unskip`.
    pub fn skip_all(&mut self) {
        let names: Vec<String> = self
            .registered_validators()
            .into_iter()
            .map(|spec| spec.name().to_string())
            .collect();
        for name in names {
            self.skip(&name);
        }
    }

    /// Quick mode: drop every rule that is not important.
    pub fn skip_unimportant(&mut self) {
        let names: Vec<String> = self
            .validators()
            .into_iter()
            .filter(|spec| !spec.is_important())
            .map(|spec| spec.name().to_string())
            .collect();
        for name in names {
            self.skip(&name);
        }
    }

    /// The rules that will run, in chain order.
    #[must_use]
    pub fn validators(&self) -> Vec<&RuleSpec> {
        self.registry.ordered_active(&self.skips)
    }

    /// Every registered rule in chain order, skipped or not.
    #[must_use]
    pub fn registered_validators(&self) -> Vec<&RuleSpec> {
        self.registry.ordered_active(&SkipList::new())
    }

    /// Run the rule chain against one entry.
    pub fn validate(&mut self, path: &str, entry: &EntryInfo) -> Vec<Failure> {
        run_chain(self.registry.ordered_active_mut(&self.skips), path, entry)
    }

    /// Validate everything under `root`, calling `sink` once per entry that
    /// has failures, in traversal order.
    ///
    /// The root itself is not judged. Entries the traversal cannot read get
    /// a single `broken-file` failure and the walk carries on.
    ///
    /// # Errors
    /// Returns an error before any traversal if the root is missing,
    /// unreadable, or not a directory.
    pub fn validate_tree<F>(&mut self, root: &Path, mut sink: F) -> Result<TreeSummary>
    where
        F: FnMut(&str, Vec<Failure>),
    {
        let Self {
            registry,
            skips,
            traverser,
        } = self;

        let root = traverser.resolve_root(root)?;
        let mut summary = TreeSummary::default();

        tracing::info!(
            target: "dark_guard::engine",
            root = %root.display(),
            rules = registry.ordered_active(skips).len(),
            skipped = skips.len(),
            "validating tree"
        );

        traverser.traverse(&root, &mut |path: &Path, entry: std::io::Result<EntryInfo>| {
            let relative = relative_path(&root, path);

            let failures = match entry {
                Err(err) => {
                    tracing::warn!(
                        target: "dark_guard::engine",
                        path = %relative,
                        error = %err,
                        "unreadable entry"
                    );
                    vec![Failure::broken_file(&err)]
                }
                Ok(_) if path == root.as_path() => return,
                Ok(info) => {
                    let info = info.with_relative_path(path.strip_prefix(&root).unwrap_or(path));
                    run_chain(registry.ordered_active_mut(skips), &relative, &info)
                }
            };

            summary.entries += 1;
            if failures.is_empty() {
                return;
            }

            tracing::debug!(
                target: "dark_guard::engine",
                path = %relative,
                failures = failures.len(),
                "entry failed validation"
            );
            summary.failed_entries += 1;
            summary.failures += failures.len();
            sink(&relative, failures);
        });

        tracing::info!(
            target: "dark_guard::engine",
            entries = summary.entries,
            failed_entries = summary.failed_entries,
            failures = summary.failures,
            "validation finished"
        );

        Ok(summary)
    }
}

/// Display form of `path` relative to `root`, `/`-separated and lossily
/// decoded. Rules that touch the disk use the entry's exact relative path.
///
/// Paths outside the root (only possible for traversal errors) are kept whole.
fn relative_path(root: &Path, path: &Path) -> String {
    let Ok(relative) = path.strip_prefix(root) else {
        return path.to_string_lossy().into_owned();
    };
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    parts.join("/")
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .field("skips", &self.skips)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

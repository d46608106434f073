use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::checksum::Algorithm;
use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::engine::Engine;
use crate::error::{DarkGuardError, Result};
use crate::output::{
    AuditReport, ColorMode, OutputFormat, ScanProgress, formatter_for, print_error, print_warning,
    write_manifest,
};
use crate::rules::{
    ContentDedup, Criticality, NO_DUPED_CONTENT, PATH_LIMIT, PathLimit, RuleRegistry,
    SharedDigestIndex,
};
use crate::scanner::{EntryInfo, TreeTraverser, VisitFn, WalkDirTraverser, resolve_directory};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

use super::load_config;

/// Settings for one run after merging the config file with CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub skip: Vec<String>,
    pub quick: bool,
    pub path_limit: Option<usize>,
    pub checksum: bool,
    pub algorithm: Algorithm,
    pub manifest: Option<PathBuf>,
    pub format: OutputFormat,
}

impl CheckOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            skip: config.rules.skip.clone(),
            quick: config.rules.quick,
            path_limit: config.rules.path_limit,
            checksum: config.checksum.enabled,
            algorithm: config.checksum.algorithm,
            manifest: config.checksum.manifest.clone(),
            format: config.output.format,
        }
    }

    /// CLI values win over config values; skip lists are unioned.
    #[must_use]
    pub fn with_check_args(mut self, args: &CheckArgs) -> Self {
        self.add_skips(&args.skip);
        self.quick |= args.quick;
        self.path_limit = args.path_limit.or(self.path_limit);
        self.checksum = args.checksum_override().unwrap_or(self.checksum);
        self.algorithm = args.algorithm.unwrap_or(self.algorithm);
        self.manifest = args.sha_output.clone().or(self.manifest);
        self.format = args.format.unwrap_or(self.format);
        self
    }

    pub(crate) fn add_skips(&mut self, names: &[String]) {
        for name in names {
            if !self.skip.contains(name) {
                self.skip.push(name.clone());
            }
        }
    }

    /// Content hashing runs only in full, checksummed runs.
    #[must_use]
    pub const fn hashes_content(&self) -> bool {
        self.checksum && !self.quick
    }

    /// # Errors
    /// Returns `Usage` when quick mode is combined with a digest manifest.
    pub fn validate(&self) -> Result<()> {
        if self.quick && self.manifest.is_some() {
            return Err(DarkGuardError::Usage(
                "Cannot combine --quick and --sha-output".to_string(),
            ));
        }
        Ok(())
    }
}

/// Build the engine for a run rooted at `root` (already resolved).
///
/// Returns the engine together with the digest index the dedup rule fills.
///
/// # Errors
/// Returns `InvalidSkip` if any skip name is unknown or critical.
pub fn build_engine(options: &CheckOptions, root: &Path) -> Result<(Engine, SharedDigestIndex)> {
    let mut registry = RuleRegistry::with_defaults();
    if let Some(max) = options.path_limit {
        registry.register_with_criticality(PATH_LIMIT, PathLimit::new(max), Criticality::High)?;
    }

    let dedup = ContentDedup::new(root, options.algorithm.hasher());
    let digests = dedup.index();
    registry.register_with_criticality(NO_DUPED_CONTENT, dedup, Criticality::High)?;

    let mut engine = Engine::new(registry);
    if options.quick {
        engine.skip_unimportant();
    }
    if !options.hashes_content() {
        engine.skip(NO_DUPED_CONTENT);
    }
    engine.skip_all_of(&options.skip)?;

    Ok((engine, digests))
}

/// Counts every visited entry on a progress spinner.
pub struct ProgressTraverser<T> {
    inner: T,
    progress: ScanProgress,
}

impl<T: TreeTraverser> ProgressTraverser<T> {
    #[must_use]
    pub const fn new(inner: T, progress: ScanProgress) -> Self {
        Self { inner, progress }
    }
}

impl<T: TreeTraverser> TreeTraverser for ProgressTraverser<T> {
    fn resolve_root(&self, root: &Path) -> Result<PathBuf> {
        self.inner.resolve_root(root)
    }

    fn traverse(&self, root: &Path, visit: &mut VisitFn<'_>) {
        self.inner
            .traverse(root, &mut |path: &Path, entry: io::Result<EntryInfo>| {
                self.progress.inc();
                visit(path, entry);
            });
    }
}

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Run an audit and write its report.
///
/// # Errors
/// Returns an error for configuration problems, an invalid root or skip
/// list, conflicting flags, or a report that cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Configuration, then CLI overrides
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let options = CheckOptions::from_config(&config).with_check_args(args);
    options.validate()?;

    // 2. The root must be a directory before anything is walked
    let root = resolve_directory(&args.path)?;

    // 3. Rules and skips
    let (engine, digests) = build_engine(&options, &root)?;
    let progress = ScanProgress::new(cli.quiet);
    let mut engine =
        engine.with_traverser(ProgressTraverser::new(WalkDirTraverser::new(), progress.clone()));

    // 4. Walk
    let mut report = AuditReport::new(engine.validators().into_iter().cloned().collect())
        .with_columns(engine.registered_validators().into_iter().cloned().collect());
    let summary = engine.validate_tree(&root, |path, failures| report.record(path, failures));
    progress.finish();
    report.set_entries(summary?.entries);

    // 5. Report
    let color_mode = ColorMode::from(cli.color);
    let output = formatter_for(options.format, color_mode).format(&report)?;
    write_output(args.output.as_deref(), &output)?;

    // 6. Digest manifest
    if let Some(manifest) = &options.manifest {
        if options.hashes_content() {
            write_manifest_file(manifest, &digests)?;
        } else {
            print_warning(
                &format!("Not writing {}: checksums are disabled", manifest.display()),
                Some("Drop --no-checksum to record file digests"),
                color_mode,
            );
        }
    }

    tracing::info!(
        target: "dark_guard::commands::check",
        entries = report.entries(),
        failed_entries = report.files().len(),
        failures = report.failure_count(),
        duplicates = digests.borrow().duplicate_count(),
        "check finished"
    );

    if report.has_failures() {
        Ok(EXIT_VIOLATIONS_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

fn write_manifest_file(path: &Path, digests: &SharedDigestIndex) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_manifest(&digests.borrow(), &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

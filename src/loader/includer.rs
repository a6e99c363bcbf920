use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::containment::ContainmentSet;
use super::exclusions::ExclusionSet;
use super::ledger::LoadLedger;
use super::sanitize::sanitize;
use super::script::ScriptLoader;
use super::target::{IncludeTarget, Predicate, PredicateSpec};
use super::walker::{walk, FileEntry};
use crate::utils::{Result, SelkieError};

/// Directory-scoped conditional file loader.
///
/// Owns a base directory, an optional global predicate, an exclusion list,
/// two containment sets and the ledger of loaded files. Discovery walks one
/// or more subdirectories for files with the loader's extension; admission
/// runs exclusion, then the active predicate, then hands the file to the
/// [`ScriptLoader`] and records it. Loading the same path twice is the
/// loader's concern, not re-checked here.
///
/// Instances are independent and single-owner; callers serialize concurrent
/// use themselves.
pub struct FileIncluder<L> {
    base_dir: PathBuf,
    loader: L,
    global_predicate: Option<Predicate>,
    exclusions: ExclusionSet,
    allowed_roots: ContainmentSet,
    whitelist: ContainmentSet,
    ledger: LoadLedger,
}

impl<L: ScriptLoader> FileIncluder<L> {
    /// Create an includer rooted at `base_dir`.
    ///
    /// Fails if the path is empty or not an existing directory. The default
    /// exclusion list contains `index.<ext>` for the loader's extension.
    pub fn new(base_dir: impl AsRef<Path>, loader: L) -> Result<Self> {
        let base_dir = validate_dir(base_dir.as_ref())?;

        let mut exclusions = ExclusionSet::default();
        exclusions.add(&format!("index.{}", loader.extension()))?;

        Ok(Self {
            base_dir,
            loader,
            global_predicate: None,
            exclusions,
            allowed_roots: ContainmentSet::default(),
            whitelist: ContainmentSet::default(),
            ledger: LoadLedger::default(),
        })
    }

    /// Create an includer with an explicit global predicate and exclusion
    /// list in place of the defaults.
    pub fn with_settings<I, S>(
        base_dir: impl AsRef<Path>,
        loader: L,
        global_predicate: Option<Predicate>,
        excluded: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut includer = Self::new(base_dir, loader)?;
        includer.global_predicate = global_predicate;
        includer.exclusions.replace(excluded)?;
        Ok(includer)
    }

    /// Variant that accepts a file path and roots the includer at its
    /// containing directory.
    pub fn from_file(path: impl AsRef<Path>, loader: L) -> Result<Self> {
        let path = path.as_ref();
        let parent = path.parent().ok_or_else(|| {
            SelkieError::InvalidConfig(format!(
                "{} has no containing directory",
                path.display()
            ))
        })?;
        Self::new(parent, loader)
    }

    /// Discover, filter and load files for `target`.
    ///
    /// Targets process in the order supplied. A whitelist miss skips its
    /// target silently; an allowed-roots miss aborts the call with
    /// [`SelkieError::UnauthorizedDirectory`], leaving loads already
    /// performed for earlier targets in the ledger.
    pub fn include(&mut self, target: IncludeTarget, recursive: bool) -> Result<()> {
        for (name, spec) in target.into_pairs() {
            self.include_one(&name, &spec, recursive)?;
        }
        Ok(())
    }

    fn include_one(&mut self, name: &str, spec: &PredicateSpec, recursive: bool) -> Result<()> {
        let dir = self.resolve_target(name);

        // A directory that has not been created yet is a no-op, independent
        // of containment.
        if !dir.is_dir() {
            debug!("target not present, nothing to include: {}", dir.display());
            return Ok(());
        }

        // Allowed roots are checked first: a directory outside both sets is
        // a violation, not a silent whitelist miss.
        if !self.allowed_roots.permits(&dir) {
            return Err(SelkieError::UnauthorizedDirectory(dir.display().to_string()));
        }

        if !self.whitelist.permits(&dir) {
            debug!("whitelist miss, skipping: {}", dir.display());
            return Ok(());
        }

        let entries: Vec<FileEntry> = walk(&dir, self.loader.extension(), recursive).collect();
        for entry in entries {
            if self.exclusions.contains(&entry.name) {
                debug!("excluded by name, skipping: {}", entry.name);
                continue;
            }

            let admitted = match spec {
                PredicateSpec::Inherit => self
                    .global_predicate
                    .as_ref()
                    .is_none_or(|predicate| predicate(&entry.path)),
                PredicateSpec::None => true,
                PredicateSpec::Custom(predicate) => predicate(&entry.path),
            };
            if !admitted {
                debug!("rejected by predicate, skipping: {}", entry.path.display());
                continue;
            }

            self.loader.load(&entry.path).map_err(|e| {
                SelkieError::LoadError(format!("{}: {e:#}", entry.path.display()))
            })?;
            self.ledger.record(entry.path);
        }

        Ok(())
    }

    fn resolve_target(&self, name: &str) -> PathBuf {
        let cleaned = sanitize(name);
        // Targets are relative by definition; a leading separator would make
        // join discard the base directory.
        let relative = cleaned.trim_start_matches('/');
        if relative.is_empty() {
            self.base_dir.clone()
        } else {
            self.base_dir.join(relative)
        }
    }

    /// Replace the base directory. The new path must exist and be a
    /// directory.
    pub fn set_base_dir(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.base_dir = validate_dir(path.as_ref())?;
        Ok(())
    }

    /// Replace the global predicate. `None` clears it.
    pub fn set_callback(&mut self, predicate: Option<Predicate>) {
        self.global_predicate = predicate;
    }

    /// Replace the exclusion list wholesale.
    pub fn set_excluded<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclusions.replace(names)
    }

    /// Add one excluded filename. Duplicates are ignored.
    pub fn add_exclusion(&mut self, name: &str) -> Result<()> {
        self.exclusions.add(name)
    }

    /// Add several excluded filenames. Duplicates are ignored.
    pub fn add_exclusions<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.exclusions.add(name.as_ref())?;
        }
        Ok(())
    }

    /// Register a directory below which scanning is authorized.
    ///
    /// Once at least one root is registered, including a target outside
    /// every root fails with [`SelkieError::UnauthorizedDirectory`].
    pub fn add_allowed_root(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let canonical = validate_dir(path.as_ref())?;
        self.allowed_roots.add(canonical);
        Ok(())
    }

    /// Register a whitelist root.
    ///
    /// Unlike allowed roots the path is not validated here, and a miss at
    /// include time skips the target silently instead of failing.
    pub fn add_to_whitelist(&mut self, path: impl AsRef<Path>) {
        let cleaned = PathBuf::from(sanitize(&path.as_ref().to_string_lossy()));
        let root = fs::canonicalize(&cleaned).unwrap_or(cleaned);
        self.whitelist.add(root);
    }

    /// Every file loaded so far, in load order.
    pub fn files(&self) -> &[PathBuf] {
        self.ledger.all()
    }

    /// The current exclusion list.
    pub fn excluded(&self) -> &[String] {
        self.exclusions.names()
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Write the ledger as text to `<base_dir>/<name>`, or a generated
    /// `.txt` name when `name` is empty. Returns the path written.
    pub fn dump_files(&self, name: &str) -> Result<PathBuf> {
        self.ledger.dump(&self.base_dir, name)
    }
}

fn validate_dir(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(SelkieError::InvalidConfig(
            "base directory must not be empty".to_string(),
        ));
    }
    if !path.is_dir() {
        return Err(SelkieError::InvalidConfig(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    Ok(fs::canonicalize(path)?)
}

/// Run an include and report any failure through `on_error` instead of
/// propagating it.
pub fn include_or_report<L: ScriptLoader>(
    includer: &mut FileIncluder<L>,
    target: IncludeTarget,
    recursive: bool,
    on_error: Option<&dyn Fn(&SelkieError)>,
) {
    if let Err(err) = includer.include(target, recursive) {
        warn!("include failed: {err}");
        if let Some(handler) = on_error {
            handler(&err);
        }
    }
}

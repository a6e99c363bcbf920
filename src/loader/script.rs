use anyhow::Result;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Host loading primitive that admitted files are handed to.
///
/// Loading executes the file's top-level effects in the host environment.
/// Implementations must make loading idempotent per canonical path: loading
/// the same path a second time is a no-op after the first success. Wrap a
/// loader that cannot guarantee this itself in [`DedupLoader`].
pub trait ScriptLoader: Send {
    /// The file extension this loader accepts, without the dot.
    fn extension(&self) -> &str;

    /// Execute the file's load effect.
    fn load(&mut self, path: &Path) -> Result<()>;
}

/// Process-wide record of canonical paths that already loaded successfully.
static LOADED_PATHS: Lazy<Mutex<HashSet<PathBuf>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Adds the load-once guarantee to a loader that lacks one.
///
/// The loaded-path set is process-wide, so includers sharing a process also
/// share the guarantee, matching "require once" host semantics.
pub struct DedupLoader<L> {
    inner: L,
}

impl<L: ScriptLoader> DedupLoader<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<L: ScriptLoader> ScriptLoader for DedupLoader<L> {
    fn extension(&self) -> &str {
        self.inner.extension()
    }

    fn load(&mut self, path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        if LOADED_PATHS.lock().contains(&canonical) {
            debug!("already loaded, skipping: {}", canonical.display());
            return Ok(());
        }

        self.inner.load(&canonical)?;
        LOADED_PATHS.lock().insert(canonical);
        Ok(())
    }
}

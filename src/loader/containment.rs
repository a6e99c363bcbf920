use std::fs;
use std::path::{Path, PathBuf};

/// A set of allowed root directories used to restrict which directories may
/// be scanned.
///
/// An empty set permits every directory; containment is opt-in. A non-empty
/// set permits a directory only when its canonical form equals, or is a
/// descendant of, some member.
#[derive(Debug, Default, Clone)]
pub struct ContainmentSet {
    roots: Vec<PathBuf>,
}

impl ContainmentSet {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Add a root. Adding a root already present leaves the set unchanged.
    pub fn add(&mut self, root: PathBuf) {
        if !self.roots.contains(&root) {
            self.roots.push(root);
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Decide whether `dir` may be scanned.
    ///
    /// The comparison runs on the canonical (symlink-resolved) form of `dir`,
    /// so members should be canonical too. A directory that cannot be
    /// resolved is never permitted; callers check for existence first.
    pub fn permits(&self, dir: &Path) -> bool {
        if self.roots.is_empty() {
            return true;
        }

        let canonical = match fs::canonicalize(dir) {
            Ok(canonical) => canonical,
            Err(_) => return false,
        };

        self.roots.iter().any(|root| canonical.starts_with(root))
    }
}

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A discovered candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full resolved path.
    pub path: PathBuf,
    /// Bare filename.
    pub name: String,
}

/// Enumerate regular files carrying `extension` beneath `dir`.
///
/// The flat strategy yields only direct children; the recursive strategy
/// yields descendants at any depth. A directory that does not exist yields
/// an empty sequence rather than an error: including from a directory that
/// has not been created yet is a no-op. Entries are sorted lexicographically
/// by path, so callers see a deterministic order.
pub fn walk(dir: &Path, extension: &str, recursive: bool) -> impl Iterator<Item = FileEntry> {
    if !dir.is_dir() {
        debug!("directory not present, nothing to walk: {}", dir.display());
    }

    let extension = extension.to_string();
    let mut builder = WalkBuilder::new(dir);
    builder
        .standard_filters(false)
        .sort_by_file_path(|a, b| a.cmp(b));
    if !recursive {
        builder.max_depth(Some(1));
    }

    builder
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .filter(move |entry| {
            entry.path().extension().and_then(|e| e.to_str()) == Some(extension.as_str())
        })
        .map(|entry| FileEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
        })
}

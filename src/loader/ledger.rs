use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::utils::{Result, SelkieError};

/// Ordered, append-only record of every file actually loaded.
#[derive(Debug, Default, Clone)]
pub struct LoadLedger {
    paths: Vec<PathBuf>,
}

impl LoadLedger {
    pub fn record(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    pub fn all(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Write the ledger as human-readable text under `base_dir` and return
    /// the path written.
    ///
    /// A supplied name must end in `.txt`; an empty name gets a generated
    /// one. The output is a debugging aid and is not meant to be parsed
    /// back.
    pub fn dump(&self, base_dir: &Path, name: &str) -> Result<PathBuf> {
        let file_name = if name.is_empty() {
            format!("selkie-dump-{}.txt", Uuid::new_v4())
        } else if name.contains('/') || name.contains('\\') {
            // the dump always lands directly under base_dir
            return Err(SelkieError::DumpError(format!(
                "dump file name must be a bare file name, got {name:?}"
            )));
        } else if name.ends_with(".txt") {
            name.to_string()
        } else {
            return Err(SelkieError::DumpError(format!(
                "dump file name must end in .txt, got {name:?}"
            )));
        };

        let destination = base_dir.join(file_name);

        let mut text = format!(
            "# selkie load ledger, generated {}\n# {} file(s) loaded\n",
            Local::now().to_rfc3339(),
            self.paths.len()
        );
        for path in &self.paths {
            text.push_str(&path.display().to_string());
            text.push('\n');
        }

        fs::write(&destination, text).map_err(|e| {
            SelkieError::DumpError(format!("cannot write {}: {}", destination.display(), e))
        })?;

        Ok(destination)
    }
}

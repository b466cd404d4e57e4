//! JSON file word-count store

use crate::store::traits::{CountStore, StoreResult};
use crate::store::WordCounts;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Word-count store backed by a pretty-printed JSON object on disk
#[derive(Debug, Clone)]
pub struct JsonCountStore {
    path: PathBuf,
}

impl JsonCountStore {
    /// Creates a store for the JSON file at `path`
    ///
    /// The file is not touched until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing JSON file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CountStore for JsonCountStore {
    fn load(&self) -> WordCounts {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "No word-count store yet, starting empty"
                );
                return WordCounts::new();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Word-count store unreadable, starting empty"
                );
                return WordCounts::new();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(counts) => counts,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Word-count store corrupt, starting empty"
                );
                WordCounts::new()
            }
        }
    }

    fn save(&mut self, counts: &WordCounts) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write to temp file first, then rename (atomic)
        let temp_path = self.temp_path();
        {
            let mut writer = BufWriter::new(File::create(&temp_path)?);
            serde_json::to_writer_pretty(&mut writer, counts)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), words = counts.len(), "Word counts saved");
        Ok(())
    }
}

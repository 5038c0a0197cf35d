//! Directory-backed storage: one file per key.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::StorageBackend;
use crate::error::{PersistenceError, Result};

/// Stores each key as a file inside `dir`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that backs `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
        if !valid {
            return Err(PersistenceError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io {
                operation: "read",
                path,
                source: e,
            }),
        }
    }

    /// Uses atomic write (temp file + rename) so a crash never leaves a
    /// half-written catalog behind. The temp file is removed again when any
    /// step fails.
    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: self.dir.clone(),
            source: e,
        })?;

        let result = write_temp(&temp_path, value).and_then(|()| {
            fs::rename(&temp_path, &path).map_err(|e| PersistenceError::AtomicWriteFailed {
                temp_path: temp_path.clone(),
                target_path: path.clone(),
                source: e,
            })
        });
        if result.is_err()
            && let Err(e) = fs::remove_file(&temp_path)
            && e.kind() != ErrorKind::NotFound
        {
            tracing::warn!(path = %temp_path.display(), error = %e, "could not remove temp file");
        }
        result?;

        tracing::debug!(key, path = %path.display(), "wrote storage key");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, path = %path.display(), "removed storage key");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::Io {
                operation: "remove",
                path,
                source: e,
            }),
        }
    }
}

fn write_temp(temp_path: &Path, value: &str) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.write_all(value.as_bytes())
        .map_err(|e| PersistenceError::Io {
            operation: "write",
            path: temp_path.to_path_buf(),
            source: e,
        })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })
}

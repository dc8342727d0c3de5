//! File-based cache backend for persistent storage.

use crate::backend::CacheBackend;
use crate::error::StoreResult;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// A file-based cache backend.
///
/// Each key maps to one file under a root directory, so a blob survives
/// process restarts. Writes go through a temporary file and a rename, which
/// keeps a crashed write from leaving a half-written blob behind.
///
/// # Example
///
/// ```no_run
/// use filmoteka_store::{CacheBackend, FileBackend};
/// use std::path::Path;
///
/// let backend = FileBackend::open(Path::new("/var/lib/filmoteka")).unwrap();
/// backend.set("films-store-key", "{}").unwrap();
/// ```
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Opens a backend rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            root: dir.to_path_buf(),
        })
    }

    /// Returns the root directory of this backend.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys come from the cache layer, not from entity data, so a flat
        // mapping with a fixed extension is enough.
        self.root.join(format!("{}.json", key))
    }
}

impl CacheBackend for FileBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_get_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        assert!(backend.get("absent").unwrap().is_none());
    }

    #[test]
    fn file_set_then_get() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.set("k", "first").unwrap();
        backend.set("k", "second").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn file_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let backend = FileBackend::open(dir.path()).unwrap();
            backend.set("k", "persisted").unwrap();
        }
        let backend = FileBackend::open(dir.path()).unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn file_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.set("k", "v").unwrap();
        backend.remove("k").unwrap();
        backend.remove("k").unwrap();
        assert!(backend.get("k").unwrap().is_none());
    }

    #[test]
    fn file_creates_missing_root() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let backend = FileBackend::open(&nested).unwrap();
        backend.set("k", "v").unwrap();
        assert!(nested.join("k.json").exists());
    }
}

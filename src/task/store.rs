//! Task storage - JSON file persistence

use fs2::FileExt;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::error::Result;
use super::model::Task;

pub struct Store {
    path: PathBuf,
}

/// Exclusive hold on a store's lock file, released on drop
pub struct StoreLock {
    file: File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            debug!("Failed to release task store lock: {}", e);
        }
    }
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        with_suffix(&self.path, ".bak")
    }

    pub fn lock_path(&self) -> PathBuf {
        with_suffix(&self.path, ".lock")
    }

    /// Block until this process holds the store exclusively
    ///
    /// Creates `<file>.lock` but not its directory; writers call
    /// [`Store::create_parent_dir`] first.
    pub fn lock(&self) -> Result<StoreLock> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())?;
        file.lock_exclusive()?;
        debug!("Locked task store {}", self.path.display());
        Ok(StoreLock { file })
    }

    /// Read the persisted collection
    ///
    /// A missing file is an empty collection. So is content that does not
    /// parse: it is logged and then overwritten by the next save, with the
    /// previous bytes kept in the `.bak` file.
    pub fn load(&self) -> Result<Vec<Task>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Vec<Task>>(&content) {
            Ok(tasks) => {
                debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
                Ok(tasks)
            }
            Err(e) => {
                if !content.trim_ascii().is_empty() {
                    warn!("Ignoring unreadable task file {}: {}", self.path.display(), e);
                }
                Ok(Vec::new())
            }
        }
    }

    /// Replace the persisted collection
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        self.create_parent_dir()?;

        if self.path.exists() {
            if let Err(e) = fs::copy(&self.path, self.backup_path()) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let mut content = serde_json::to_string_pretty(tasks)?;
        content.push('\n');

        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    pub fn create_parent_dir(&self) -> Result<()> {
        let parent = self.parent_dir();
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

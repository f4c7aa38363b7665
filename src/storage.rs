//! Storage layer for tick
//!
//! The task list persists as a single JSON snapshot, `tasks.json`, inside
//! the data directory. The snapshot is the full collection, rewritten on
//! every mutation; there is no merge and no partial write.
//!
//! Directory resolution order:
//! 1. `--dir` flag / `TICK_DIR` env
//! 2. `storage.dir` from the config file
//! 3. the platform data directory (via `directories`)

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::task::Task;

/// File name of the task snapshot inside the data directory
pub const TASKS_FILE: &str = "tasks.json";

/// File name of the persisted id counter
pub const NEXT_ID_FILE: &str = "next_id";

/// Storage manager for the task snapshot
#[derive(Debug, Clone)]
pub struct Storage {
    /// Directory holding the snapshot
    data_dir: PathBuf,
}

impl Storage {
    /// Create a storage manager rooted at the given directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Resolve the data directory from flag, config, or platform default
    pub fn resolve(dir: Option<PathBuf>, config: &Config) -> Result<Self> {
        if let Some(dir) = dir {
            return Ok(Self::new(dir));
        }
        if let Some(dir) = &config.storage.dir {
            return Ok(Self::new(dir.clone()));
        }
        let dirs = ProjectDirs::from("", "", "tick").ok_or(Error::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    /// Directory holding the snapshot
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path to the task snapshot
    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILE)
    }

    /// Read the task snapshot.
    ///
    /// A missing file means "no tasks yet". A file that fails to parse is a
    /// loud error rather than a silent reset.
    pub fn read_tasks(&self) -> Result<Vec<Task>> {
        let path = self.tasks_file();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|err| Error::SnapshotMalformed {
            path,
            reason: err.to_string(),
        })
    }

    /// Write the task snapshot (full replace, atomic), even when empty.
    pub fn write_tasks(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        self.write_atomic(&self.tasks_file(), json.as_bytes())
    }

    /// Path to the persisted id counter
    pub fn next_id_file(&self) -> PathBuf {
        self.data_dir.join(NEXT_ID_FILE)
    }

    /// Read the persisted id counter. Missing or unreadable means "derive
    /// from the snapshot".
    pub fn read_next_id(&self) -> Option<u64> {
        fs::read_to_string(self.next_id_file())
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
    }

    /// Write the id counter alongside the snapshot.
    pub fn write_next_id(&self, next_id: u64) -> Result<()> {
        self.write_atomic(&self.next_id_file(), next_id.to_string().as_bytes())
    }

    /// Write data atomically using temp file + rename, so a reader never
    /// sees a partial snapshot.
    fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;

        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated home for one test: its own data dir and config file, so the
/// binary never touches the real platform directories.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        fs::create_dir_all(dir.path().join("data"))?;
        // An empty config parses to all defaults.
        fs::write(dir.path().join("tick.toml"), "")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.path().join("tick.toml")
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir().join("tasks.json")
    }

    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) -> std::io::Result<()> {
        fs::write(self.config_file(), contents)
    }

    #[allow(dead_code)]
    pub fn read_snapshot(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.tasks_file()).expect("snapshot exists");
        serde_json::from_str(&raw).expect("snapshot parses")
    }
}

pub fn tick_cmd(home: &TestHome) -> Command {
    let mut cmd = Command::cargo_bin("tick").expect("tick binary builds");
    cmd.env("TICK_DIR", home.data_dir());
    cmd.env("TICK_CONFIG", home.config_file());
    cmd.current_dir(home.path());
    cmd
}

// Common test utilities shared across acceptance tests
//
// Each test gets an isolated workspace: its own temp directory, its own HOME
// (so no global config leaks in), and a fake toolchain script that records
// every invocation instead of touching a real toolchain.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_TOOLCHAIN: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_TOOLCHAIN_LOG"
pwd -P >> "$FAKE_TOOLCHAIN_LOG.cwd"
echo "fake toolchain output: $*"
case "$1" in
  mod) exit "${FAKE_MOD_EXIT:-0}" ;;
  install) exit "${FAKE_INSTALL_EXIT:-0}" ;;
  test) exit "${FAKE_TEST_EXIT:-0}" ;;
esac
exit 0
"#;

pub struct TestWorkspace {
    temp_dir: TempDir,
    toolchain: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let bin_dir = temp_dir.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        fs::create_dir_all(temp_dir.path().join("project")).expect("Failed to create project dir");
        fs::create_dir_all(temp_dir.path().join("home")).expect("Failed to create home dir");

        let toolchain = bin_dir.join("fakego");
        fs::write(&toolchain, FAKE_TOOLCHAIN).expect("Failed to write fake toolchain");
        fs::set_permissions(&toolchain, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake toolchain executable");

        Self {
            temp_dir,
            toolchain,
        }
    }

    pub fn project(&self) -> PathBuf {
        self.temp_dir.path().join("project")
    }

    pub fn toolchain(&self) -> &Path {
        &self.toolchain
    }

    fn log_path(&self) -> PathBuf {
        self.temp_dir.path().join("calls.log")
    }

    /// tasker command running inside the project dir with the fake toolchain
    pub fn tasker(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tasker"));
        cmd.current_dir(self.project())
            .env("HOME", self.temp_dir.path().join("home"))
            .env("FAKE_TOOLCHAIN_LOG", self.log_path())
            .env("TASKER_TOOLCHAIN", &self.toolchain)
            .env("TASKER_LOG_FORMAT", "compact")
            .env_remove("TASKER_CONFIG")
            .env_remove("TASKER_DIR")
            .env_remove("TASKER_VERBOSE");
        cmd
    }

    /// Arguments of every fake toolchain call, in order
    pub fn calls(&self) -> Vec<String> {
        read_lines(&self.log_path())
    }

    /// Working directory of every fake toolchain call, in order
    pub fn call_dirs(&self) -> Vec<String> {
        read_lines(&self.temp_dir.path().join("calls.log.cwd"))
    }

    /// `$HOME/.config/tasker/config.toml` for the isolated HOME
    pub fn write_global_config(&self, content: &str) -> PathBuf {
        let dir = self.temp_dir.path().join("home").join(".config").join("tasker");
        fs::create_dir_all(&dir).expect("Failed to create global config dir");
        let path = dir.join("config.toml");
        fs::write(&path, content).expect("Failed to write global config");
        path
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.project().join("tasker.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

//! Shared harness for `extkit` integration tests.
//!
//! Every test gets its own temp directory holding the settings file and the
//! log directory, wired in through `EXTKIT_CONFIG_PATH` / `EXTKIT_LOG_DIR` so
//! nothing touches the real user config.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use rstest::fixture;
use tempfile::TempDir;

pub const DEFAULT_SCOPE: &str = "extension-kit";

pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("config.toml")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root().join("logs")
    }

    /// `extkit` with isolated settings/log locations and no color or log noise.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_extkit"));
        cmd.env("EXTKIT_CONFIG_PATH", self.config_path())
            .env("EXTKIT_LOG_DIR", self.log_dir())
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run `extkit <args>` and return its output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }

    /// Run `extkit <args>` and assert it succeeded.
    pub fn run_ok(&self, args: &[&str]) -> Output {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "extkit {args:?} failed:\nstderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    /// Contents of a channel's log, empty when it was never written.
    pub fn channel_log(&self, scope: &str) -> String {
        std::fs::read_to_string(self.log_dir().join(format!("{scope}.log"))).unwrap_or_default()
    }

    pub fn config_contents(&self) -> String {
        std::fs::read_to_string(self.config_path()).unwrap_or_default()
    }
}

#[fixture]
pub fn env() -> TestEnv {
    TestEnv::new()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

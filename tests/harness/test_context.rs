//! Shared testing harness for `rezgo` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    settings_file: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty payload folder and no
    /// release path fallback.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let payload = root.path().join("payload");
        fs::create_dir_all(&payload).expect("Failed to create payload directory");

        let settings_file = root.path().join("rezgo.toml");
        let ctx = Self { root, settings_file };
        ctx.write_settings("");
        ctx
    }

    /// Temp directory root.
    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path below the temp directory root.
    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Bundled payload folder used by the CLI under test.
    pub(crate) fn payload_dir(&self) -> PathBuf {
        self.path("payload")
    }

    /// Replace the settings file; `extra` is appended after the fixed test keys.
    pub(crate) fn write_settings(&self, extra: &str) {
        let content = format!(
            "payload_dir = '{}'\ndefault_release_path = ''\n{}",
            self.payload_dir().display(),
            extra
        );
        fs::write(&self.settings_file, content).expect("Failed to write settings file");
    }

    pub(crate) fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    /// Build a command for invoking the compiled `rezgo` binary with the test settings.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("rezgo").expect("Failed to locate rezgo binary");
        cmd.current_dir(self.root())
            .env_remove("UTGTOOLS")
            .env_remove("GITHUB_TOKEN")
            .env("RUST_LOG", "off")
            .arg("--config")
            .arg(&self.settings_file);
        cmd
    }

    /// Build a command without the `--config` argument.
    pub(crate) fn bare_cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("rezgo").expect("Failed to locate rezgo binary");
        cmd.current_dir(self.root()).env_remove("UTGTOOLS").env("RUST_LOG", "off");
        cmd
    }

    /// Create `{dir}/core` with a few files, as left by an installation.
    pub(crate) fn populate_toolset(&self, dir: &str) -> PathBuf {
        let toolset = self.path(dir);
        let core = toolset.join("core");
        fs::create_dir_all(core.join("python")).expect("Failed to create python folder");
        fs::create_dir_all(core.join("rez/packages")).expect("Failed to create packages folder");
        fs::write(core.join("python/python.exe"), "MZ").expect("Failed to write interpreter");
        fs::write(core.join("rez/rezconfig.py"), "local_packages_path = r\"T:\\core\"\n")
            .expect("Failed to write rezconfig");
        toolset
    }
}

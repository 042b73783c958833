//! TestWorld pattern for declarative integration test setup.
//!
//! Every world gets its own temp directory with a private data dir, so
//! tests never see the developer's config or `RECIPEBOX_PATH`.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use recipebox_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_catalog("mine.json", &fixtures::sample_catalog());
///
/// let result = world.run(&["--catalog", "mine.json", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".recipebox");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Root of the world; commands run here, so relative paths land inside it.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a catalog JSON file relative to the world root.
    pub fn with_catalog(self, name: &str, catalog: &serde_json::Value) -> Self {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create catalog dir");
        }
        let json = serde_json::to_string_pretty(catalog).expect("Failed to encode catalog");
        std::fs::write(&path, json).expect("Failed to write catalog");
        self
    }

    /// Write `config.toml` into the data dir.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    pub fn read_file(&self, relative: impl AsRef<Path>) -> Result<String> {
        Ok(std::fs::read_to_string(self.path(relative))?)
    }

    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RECIPEBOX_PATH").env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    #[allow(deprecated)]
    fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("recipebox")
            .map_err(|e| anyhow::anyhow!("Failed to find recipebox binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Execute the CLI with the given arguments.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args);
        Ok(CliResult::from_output(cmd.output()?))
    }

    /// Execute the CLI feeding `stdin`, e.g. a scripted `shell` session.
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args).write_stdin(stdin.to_string());
        Ok(CliResult::from_output(cmd.output()?))
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    fn from_output(output: std::process::Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as a single JSON document.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Parse stdout as a stream of JSON documents, one per shell response.
    pub fn json_stream(&self) -> Result<Vec<serde_json::Value>> {
        serde_json::Deserializer::from_str(&self.stdout)
            .into_iter::<serde_json::Value>()
            .map(|v| v.map_err(Into::into))
            .collect()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

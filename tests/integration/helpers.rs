//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch working directory for one CLI invocation
pub struct TestDir {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestDir {
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Write a file relative to the directory
  pub fn write_file(&self, path: &str, content: &str) -> Result<PathBuf> {
    let full = self.path.join(path);
    if let Some(parent) = full.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&full, content)?;
    Ok(full)
  }

  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }
}

/// Run semrel-config with exactly `env` as its environment
pub fn run_semrel(cwd: &Path, env: &[(&str, &str)], args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_semrel-config");

  Command::new(bin)
    .current_dir(cwd)
    .env_clear()
    .envs(env.iter().copied())
    .args(args)
    .output()
    .context("Failed to run semrel-config")
}

/// Run semrel-config and fail unless it exits successfully
pub fn run_semrel_ok(cwd: &Path, env: &[(&str, &str)], args: &[&str]) -> Result<Output> {
  let output = run_semrel(cwd, env, args)?;

  if !output.status.success() {
    anyhow::bail!(
      "semrel-config {} failed\nstdout: {}\nstderr: {}",
      args.join(" "),
      String::from_utf8_lossy(&output.stdout),
      String::from_utf8_lossy(&output.stderr)
    );
  }

  Ok(output)
}

pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}

//! Integration tests for `semrel-config write`

use crate::helpers::*;
use anyhow::Result;
use serde_json::Value;

#[test]
fn test_write_dry_run_by_default() -> Result<()> {
  let dir = TestDir::new()?;
  let output = run_semrel_ok(&dir.path, &[], &["write"])?;

  assert!(stdout(&output).contains("Dry run"));
  assert!(!dir.file_exists(".releaserc.json"));
  Ok(())
}

#[test]
fn test_write_apply_creates_releaserc() -> Result<()> {
  let dir = TestDir::new()?;
  run_semrel_ok(
    &dir.path,
    &[("REPO_URL", "git@github.com:acme/widgets.git")],
    &["write", "--apply"],
  )?;

  let value: Value = serde_json::from_str(&dir.read_file(".releaserc.json")?)?;
  assert_eq!(value["repositoryUrl"], "git@github.com:acme/widgets.git");
  assert_eq!(
    value["plugins"][3][1]["message"],
    "chore(release): ${nextRelease.version} [skip ci]\n\n${nextRelease.notes}"
  );
  Ok(())
}

#[test]
fn test_write_to_custom_output() -> Result<()> {
  let dir = TestDir::new()?;
  run_semrel_ok(&dir.path, &[], &["write", "--apply", "--output", "config/release.json"])?;
  assert!(dir.file_exists("config/release.json"));
  Ok(())
}

#[test]
fn test_write_refuses_invalid_configuration() -> Result<()> {
  let dir = TestDir::new()?;
  let output = run_semrel(&dir.path, &[("DEFAULT_BRANCH", "no spaces allowed")], &["write", "--apply"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(stderr(&output).contains("branches"));
  assert!(!dir.file_exists(".releaserc.json"));
  Ok(())
}

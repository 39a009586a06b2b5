//! Integration tests for `semrel-config check`

use crate::helpers::*;
use anyhow::Result;
use serde_json::Value;

#[test]
fn test_check_defaults_pass_with_warning() -> Result<()> {
  let dir = TestDir::new()?;
  let output = run_semrel_ok(&dir.path, &[], &["check"])?;
  let out = stdout(&output);

  assert!(out.contains("repository-url"));
  assert!(out.contains("Summary: 4/5 checks passed"));
  Ok(())
}

#[test]
fn test_check_strict_fails_on_warning() -> Result<()> {
  let dir = TestDir::new()?;
  let output = run_semrel(&dir.path, &[("CHANGELOG_FILE", "HISTORY.md")], &["check", "--strict"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(stderr(&output).contains("changelog-assets"));
  Ok(())
}

#[test]
fn test_check_json_output() -> Result<()> {
  let dir = TestDir::new()?;
  let output = run_semrel_ok(
    &dir.path,
    &[("REPO_URL", "https://example.com/r.git")],
    &["check", "--json"],
  )?;
  let results: Vec<Value> = serde_json::from_str(&stdout(&output))?;

  assert_eq!(results.len(), 5);
  assert!(results.iter().all(|r| r["passed"] == true));
  assert_eq!(results[0]["check_name"], "branches");
  Ok(())
}

#[test]
fn test_check_against_matching_file() -> Result<()> {
  let dir = TestDir::new()?;
  let env = [("REPO_URL", "https://example.com/r.git")];
  run_semrel_ok(&dir.path, &env, &["write", "--apply"])?;

  let output = run_semrel_ok(&dir.path, &env, &["check", "--against", ".releaserc.json"])?;
  assert!(stdout(&output).contains("matches the environment"));
  Ok(())
}

#[test]
fn test_check_against_detects_drift() -> Result<()> {
  let dir = TestDir::new()?;
  run_semrel_ok(&dir.path, &[], &["write", "--apply"])?;

  let output = run_semrel(
    &dir.path,
    &[("DEFAULT_BRANCH", "next")],
    &["check", "--against", ".releaserc.json"],
  )?;
  assert_eq!(output.status.code(), Some(3));
  let out = stdout(&output);
  assert!(out.contains("-    \"main\""));
  assert!(out.contains("+    \"next\""));
  Ok(())
}

#[test]
fn test_check_against_malformed_file() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_file(".releaserc.json", "{ not json")?;

  let output = run_semrel(&dir.path, &[], &["check", "--against", ".releaserc.json"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(stdout(&output).contains("Malformed release config"));
  Ok(())
}

//! Integration tests for `semrel-config show`

use crate::helpers::*;
use anyhow::Result;
use serde_json::{Value, json};

#[test]
fn test_show_json_with_empty_env() -> Result<()> {
  let dir = TestDir::new()?;
  let output = run_semrel_ok(&dir.path, &[], &["show", "--json"])?;
  let value: Value = serde_json::from_str(&stdout(&output))?;

  assert_eq!(value["branches"], json!(["main"]));
  assert!(value.get("repositoryUrl").is_none());
  assert_eq!(value["plugins"][2][1]["changelogFile"], "CHANGELOG.md");
  assert_eq!(value["plugins"].as_array().map(Vec::len), Some(5));
  Ok(())
}

#[test]
fn test_show_json_full_scenario() -> Result<()> {
  let dir = TestDir::new()?;
  let env = [
    ("DEFAULT_BRANCH", "next"),
    ("REPO_URL", "https://example.com/r.git"),
    ("CHANGELOG_FILE", "HISTORY.md"),
  ];
  let output = run_semrel_ok(&dir.path, &env, &["show", "--json"])?;
  let value: Value = serde_json::from_str(&stdout(&output))?;

  assert_eq!(value["branches"], json!(["next"]));
  assert_eq!(value["repositoryUrl"], "https://example.com/r.git");
  assert_eq!(value["plugins"][2], json!(["@semantic-release/changelog", { "changelogFile": "HISTORY.md" }]));
  assert_eq!(value["plugins"][3][1]["assets"], json!(["CHANGELOG.md", "package.json"]));
  assert_eq!(value["plugins"][4], "@semantic-release/github");
  Ok(())
}

#[test]
fn test_set_overrides_environment() -> Result<()> {
  let dir = TestDir::new()?;
  let output = run_semrel_ok(
    &dir.path,
    &[("DEFAULT_BRANCH", "next")],
    &["show", "--json", "--set", "DEFAULT_BRANCH=beta"],
  )?;
  let value: Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(value["branches"], json!(["beta"]));
  Ok(())
}

#[test]
fn test_invalid_override_is_user_error() -> Result<()> {
  let dir = TestDir::new()?;
  let output = run_semrel(&dir.path, &[], &["show", "--set", "NOEQUALS"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("KEY=VALUE"));
  Ok(())
}

#[test]
fn test_show_summary() -> Result<()> {
  let dir = TestDir::new()?;
  let output = run_semrel_ok(&dir.path, &[("DEFAULT_BRANCH", "release")], &["show"])?;
  let out = stdout(&output);
  assert!(out.contains("Branches:    release"));
  assert!(out.contains("3. @semantic-release/changelog"));
  assert!(out.contains("[skip ci]"));
  Ok(())
}

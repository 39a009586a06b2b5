//! Integration tests for `semrel-config preview`

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_preview_inline_notes() -> Result<()> {
  let dir = TestDir::new()?;
  let output = run_semrel_ok(&dir.path, &[], &["preview", "1.4.0", "--notes", "* add widgets"])?;
  assert_eq!(stdout(&output), "chore(release): 1.4.0 [skip ci]\n\n* add widgets\n");
  Ok(())
}

#[test]
fn test_preview_notes_file() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_file("NOTES.md", "### Bug Fixes\n\n* stop crashing\n")?;

  let output = run_semrel_ok(&dir.path, &[], &["preview", "v2.0.1", "--notes-file", "NOTES.md"])?;
  let out = stdout(&output);
  assert!(out.starts_with("chore(release): 2.0.1 [skip ci]\n\n### Bug Fixes"));
  Ok(())
}

#[test]
fn test_preview_rejects_bad_version() -> Result<()> {
  let dir = TestDir::new()?;
  let output = run_semrel(&dir.path, &[], &["preview", "latest"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Invalid version 'latest'"));
  Ok(())
}

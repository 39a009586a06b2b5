//! Write the engine config file

use std::fs;
use std::path::{Path, PathBuf};

use crate::checks::{CheckContext, create_default_runner};
use crate::core::config::ReleaseConfiguration;
use crate::core::error::{ResultExt, SemrelError, SemrelResult, ValidationError};
use crate::core::releaserc::{RELEASERC_FILE, ReleaseRc};

/// Write `.releaserc.json` (dry-run unless `apply`)
///
/// Refuses to write when any check reports an error.
pub fn run_write(config: &ReleaseConfiguration, output: Option<PathBuf>, apply: bool) -> SemrelResult<()> {
  let path = output.unwrap_or_else(|| PathBuf::from(RELEASERC_FILE));

  let ctx = CheckContext {
    config: config.clone(),
    against: None,
  };
  let failed: Vec<String> = create_default_runner()
    .run_all(&ctx)
    .into_iter()
    .filter(|r| r.is_blocking(false))
    .map(|r| r.check_name)
    .collect();
  if !failed.is_empty() {
    return Err(SemrelError::Validation(ValidationError::ChecksFailed { failed }));
  }

  let content = ReleaseRc::from(config).to_json_pretty()?;

  if !apply {
    println!("🔍 Dry run: would write {}\n", path.display());
    print!("{}", content);
    println!("\n💡 Re-run with --apply to write the file");
    return Ok(());
  }

  write_file(&path, &content)?;
  tracing::info!(path = %path.display(), bytes = content.len(), "wrote release config");
  println!("✅ Wrote {}", path.display());
  Ok(())
}

fn write_file(path: &Path, content: &str) -> SemrelResult<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create directory {}", parent.display()))?;
  }
  fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

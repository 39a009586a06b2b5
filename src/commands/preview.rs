//! Preview the release commit message

use std::fs;
use std::path::PathBuf;

use semver::Version;

use crate::core::config::ReleaseConfiguration;
use crate::core::error::{ConfigError, ResultExt, SemrelError, SemrelResult};

/// Where the release notes for the preview come from
#[derive(Debug, Clone)]
pub enum NotesSource {
  Inline(String),
  File(PathBuf),
  None,
}

/// Render the commit message the git stage would create for `version`
pub fn run_preview(config: &ReleaseConfiguration, version: &str, notes: NotesSource) -> SemrelResult<()> {
  let message = render_preview(config, version, notes)?;
  println!("{}", message);
  Ok(())
}

/// Build the preview message; the version must be valid semver
pub fn render_preview(config: &ReleaseConfiguration, version: &str, notes: NotesSource) -> SemrelResult<String> {
  let version = parse_version(version)?;

  let notes = match notes {
    NotesSource::Inline(text) => text,
    NotesSource::File(path) => {
      fs::read_to_string(&path).with_context(|| format!("Failed to read release notes from {}", path.display()))?
    }
    NotesSource::None => String::new(),
  };

  Ok(
    config
      .commit_message_template
      .render(&version.to_string(), notes.trim_end()),
  )
}

fn parse_version(raw: &str) -> SemrelResult<Version> {
  let trimmed = raw.strip_prefix('v').unwrap_or(raw);
  Version::parse(trimmed).map_err(|e| {
    SemrelError::Config(ConfigError::InvalidVersion {
      raw: raw.to_string(),
      reason: e.to_string(),
    })
  })
}

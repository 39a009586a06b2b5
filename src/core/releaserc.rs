//! Engine config codec (`.releaserc.json`)
//!
//! The engine reads `{ branches, repositoryUrl, plugins }`, where a plugin is
//! either its bare name or a `[name, { options }]` pair.

use crate::core::config::ReleaseConfiguration;
use crate::core::error::{ConfigError, SemrelError, SemrelResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Default file name the engine picks up from the repository root
pub const RELEASERC_FILE: &str = ".releaserc.json";

/// Engine-facing configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRc {
  pub branches: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub repository_url: Option<String>,
  #[serde(default)]
  pub plugins: Vec<PluginSpec>,
  /// Engine options this tool does not produce (`dryRun`, `tagFormat`, ...)
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// One plugin entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginSpec {
  Bare(String),
  Configured(String, Map<String, Value>),
}

impl From<&ReleaseConfiguration> for ReleaseRc {
  fn from(config: &ReleaseConfiguration) -> Self {
    let plugins = config
      .pipeline
      .iter()
      .map(|stage| match stage.parameters() {
        Some(params) => PluginSpec::Configured(stage.name().to_string(), params),
        None => PluginSpec::Bare(stage.name().to_string()),
      })
      .collect();

    Self {
      branches: config.branches.clone(),
      repository_url: Some(config.repository_url.clone()).filter(|url| !url.is_empty()),
      plugins,
      extra: Map::new(),
    }
  }
}

impl ReleaseRc {
  /// Parse an existing engine config; `path` is only used for error messages
  ///
  /// An empty `repositoryUrl` reads as absent, the same as the resolver emits it.
  pub fn parse(content: &str, path: &Path) -> SemrelResult<Self> {
    let mut rc: Self = serde_json::from_str(content).map_err(|e| {
      SemrelError::Config(ConfigError::MalformedReleaserc {
        path: path.to_path_buf(),
        reason: e.to_string(),
      })
    })?;
    rc.repository_url = rc.repository_url.filter(|url| !url.is_empty());
    Ok(rc)
  }

  /// Pretty JSON with a trailing newline
  pub fn to_json_pretty(&self) -> SemrelResult<String> {
    let mut out = serde_json::to_string_pretty(self)?;
    out.push('\n');
    Ok(out)
  }
}

/// Unified line diff from `existing` to `resolved`; empty when they match
pub fn diff(existing: &ReleaseRc, resolved: &ReleaseRc) -> SemrelResult<String> {
  if existing == resolved {
    return Ok(String::new());
  }

  let old = existing.to_json_pretty()?;
  let new = resolved.to_json_pretty()?;
  let text_diff = TextDiff::from_lines(&old, &new);

  let mut out = String::new();
  for change in text_diff.iter_all_changes() {
    let sign = match change.tag() {
      ChangeTag::Delete => "-",
      ChangeTag::Insert => "+",
      ChangeTag::Equal => " ",
    };
    out.push_str(sign);
    out.push_str(change.value());
    if change.missing_newline() {
      out.push('\n');
    }
  }
  Ok(out)
}

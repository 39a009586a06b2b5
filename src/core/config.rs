//! Release configuration record
//!
//! `ReleaseConfiguration` is built once by the resolver and never mutated.
//! The pipeline is a fixed, ordered list of `Stage`s; each stage names an
//! external engine plugin and carries its own typed parameters.

use crate::core::template::CommitMessageTemplate;
use serde_json::{Map, Value};
use std::fmt;

/// Branch used when `DEFAULT_BRANCH` is unset or empty
pub const DEFAULT_BRANCH_NAME: &str = "main";
/// Changelog path used when `CHANGELOG_FILE` is unset or empty
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";
/// Files committed by the git stage
pub const GIT_ASSETS: [&str; 2] = ["CHANGELOG.md", "package.json"];

/// Resolved release configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfiguration {
  /// Branches eligible to trigger a release (never empty)
  pub branches: Vec<String>,
  /// Remote repository location; empty when unset
  pub repository_url: String,
  /// Ordered processing stages
  pub pipeline: Vec<Stage>,
  /// Template for the release commit message
  pub commit_message_template: CommitMessageTemplate,
}

impl ReleaseConfiguration {
  /// Find the first stage of the given kind
  pub fn stage(&self, kind: StageKind) -> Option<&Stage> {
    self.pipeline.iter().find(|s| s.kind() == kind)
  }

  /// Position of the first stage of the given kind
  pub fn position(&self, kind: StageKind) -> Option<usize> {
    self.pipeline.iter().position(|s| s.kind() == kind)
  }

  /// Changelog path configured on the changelog stage
  pub fn changelog_file(&self) -> Option<&str> {
    match self.stage(StageKind::Changelog)? {
      Stage::Changelog(params) => Some(params.changelog_file.as_str()),
      _ => None,
    }
  }

  /// Assets committed by the git stage
  pub fn git_assets(&self) -> Option<&[String]> {
    match self.stage(StageKind::Git)? {
      Stage::Git(params) => Some(params.assets.as_slice()),
      _ => None,
    }
  }
}

/// Parameters of the changelog stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogParams {
  pub changelog_file: String,
}

/// Parameters of the git-commit stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitParams {
  pub assets: Vec<String>,
  pub message: CommitMessageTemplate,
}

/// One step of the release pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
  /// Determine the release type from commit messages
  CommitAnalyzer,
  /// Generate release notes for the next release
  ReleaseNotesGenerator,
  /// Write release notes into the changelog file
  Changelog(ChangelogParams),
  /// Commit release assets and push
  Git(GitParams),
  /// Publish a release on the hosting service
  Github,
}

/// Parameter-free discriminant of `Stage`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
  CommitAnalyzer,
  ReleaseNotesGenerator,
  Changelog,
  Git,
  Github,
}

impl StageKind {
  /// Plugin identifier understood by the release engine
  pub fn plugin_name(self) -> &'static str {
    match self {
      StageKind::CommitAnalyzer => "@semantic-release/commit-analyzer",
      StageKind::ReleaseNotesGenerator => "@semantic-release/release-notes-generator",
      StageKind::Changelog => "@semantic-release/changelog",
      StageKind::Git => "@semantic-release/git",
      StageKind::Github => "@semantic-release/github",
    }
  }
}

impl fmt::Display for StageKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.plugin_name())
  }
}

impl Stage {
  pub fn kind(&self) -> StageKind {
    match self {
      Stage::CommitAnalyzer => StageKind::CommitAnalyzer,
      Stage::ReleaseNotesGenerator => StageKind::ReleaseNotesGenerator,
      Stage::Changelog(_) => StageKind::Changelog,
      Stage::Git(_) => StageKind::Git,
      Stage::Github => StageKind::Github,
    }
  }

  /// Plugin identifier understood by the release engine
  pub fn name(&self) -> &'static str {
    self.kind().plugin_name()
  }

  /// Stage parameters in the engine's shape, `None` for parameterless stages
  ///
  /// Templates are emitted in engine syntax.
  pub fn parameters(&self) -> Option<Map<String, Value>> {
    let mut map = Map::new();
    match self {
      Stage::CommitAnalyzer | Stage::ReleaseNotesGenerator | Stage::Github => return None,
      Stage::Changelog(params) => {
        map.insert("changelogFile".into(), Value::String(params.changelog_file.clone()));
      }
      Stage::Git(params) => {
        map.insert(
          "assets".into(),
          Value::Array(params.assets.iter().cloned().map(Value::String).collect()),
        );
        map.insert("message".into(), Value::String(params.message.to_engine_syntax()));
      }
    }
    Some(map)
  }
}

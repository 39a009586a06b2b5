//! Configuration resolver
//!
//! Turns an environment mapping into a `ReleaseConfiguration`. Never fails:
//! missing or empty variables fall back to defaults, and `REPO_URL` falls back
//! to an empty string.

use crate::core::config::{
  ChangelogParams, DEFAULT_BRANCH_NAME, DEFAULT_CHANGELOG_FILE, GIT_ASSETS, GitParams, ReleaseConfiguration, Stage,
};
use crate::core::env::{self, EnvSource};
use crate::core::template::CommitMessageTemplate;

/// Resolve the release configuration from `env`
pub fn resolve(env: &impl EnvSource) -> ReleaseConfiguration {
  let branch = env::non_empty(env, env::DEFAULT_BRANCH).unwrap_or_else(|| {
    tracing::debug!(default = DEFAULT_BRANCH_NAME, "{} unset, using default branch", env::DEFAULT_BRANCH);
    DEFAULT_BRANCH_NAME.to_string()
  });

  let repository_url = env.var(env::REPO_URL).unwrap_or_else(|| {
    tracing::debug!("{} unset, leaving repository URL empty", env::REPO_URL);
    String::new()
  });

  let changelog_file = env::non_empty(env, env::CHANGELOG_FILE).unwrap_or_else(|| {
    tracing::debug!(
      default = DEFAULT_CHANGELOG_FILE,
      "{} unset, using default changelog path",
      env::CHANGELOG_FILE
    );
    DEFAULT_CHANGELOG_FILE.to_string()
  });

  let template = CommitMessageTemplate::default();

  let pipeline = vec![
    Stage::CommitAnalyzer,
    Stage::ReleaseNotesGenerator,
    Stage::Changelog(ChangelogParams { changelog_file }),
    Stage::Git(GitParams {
      assets: GIT_ASSETS.iter().map(|s| s.to_string()).collect(),
      message: template.clone(),
    }),
    Stage::Github,
  ];

  ReleaseConfiguration {
    branches: vec![branch],
    repository_url,
    pipeline,
    commit_message_template: template,
  }
}

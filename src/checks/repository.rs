//! Repository URL checks

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::env::REPO_URL;
use crate::core::error::SemrelResult;
use crate::utils;

/// Validates the repository URL handed to the engine
///
/// An empty URL is allowed (the engine falls back to the git remote) but is
/// reported as a warning.
pub struct RepositoryUrlCheck;

impl Check for RepositoryUrlCheck {
  fn name(&self) -> &str {
    "repository-url"
  }

  fn description(&self) -> &str {
    "Validates the remote repository URL format"
  }

  fn run(&self, ctx: &CheckContext) -> SemrelResult<CheckResult> {
    let url = &ctx.config.repository_url;

    if url.is_empty() {
      return Ok(CheckResult::warning(
        self.name(),
        format!("{} is not set; the release engine will use the local git remote", REPO_URL),
        Some(format!("Export {}=git@github.com:<owner>/<repo>.git in CI", REPO_URL)),
      ));
    }

    if utils::is_valid_remote_url(url) {
      let kind = if utils::is_local_path(url) { "local path" } else { "remote" };
      Ok(CheckResult::pass(self.name(), format!("{} ({})", url, kind)))
    } else {
      Ok(CheckResult::error(
        self.name(),
        format!("Invalid repository URL: '{}'", url),
        Some("Use an ssh (git@host:owner/repo.git) or https URL"),
      ))
    }
  }
}

//! Changelog asset checks

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::env::CHANGELOG_FILE;
use crate::core::error::SemrelResult;

/// Warns when the changelog the engine writes is not among the git assets
///
/// The git stage commits a fixed asset list, so a custom `CHANGELOG_FILE`
/// is written but never committed.
pub struct ChangelogAssetsCheck;

impl Check for ChangelogAssetsCheck {
  fn name(&self) -> &str {
    "changelog-assets"
  }

  fn description(&self) -> &str {
    "Validates the changelog file is committed by the git stage"
  }

  fn run(&self, ctx: &CheckContext) -> SemrelResult<CheckResult> {
    let (Some(changelog), Some(assets)) = (ctx.config.changelog_file(), ctx.config.git_assets()) else {
      return Ok(CheckResult::pass(self.name(), "No changelog or git stage, nothing to compare"));
    };

    if assets.iter().any(|a| a == changelog) {
      Ok(CheckResult::pass(self.name(), format!("{} is committed with the release", changelog)))
    } else {
      Ok(
        CheckResult::warning(
          self.name(),
          format!(
            "{} is written by the changelog stage but the git stage commits only {}",
            changelog,
            assets.join(", ")
          ),
          Some(format!("Unset {} or commit the file in a later step", CHANGELOG_FILE)),
        )
        .with_details(serde_json::json!({ "changelogFile": changelog, "assets": assets })),
      )
    }
  }
}

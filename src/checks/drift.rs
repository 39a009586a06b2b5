//! Drift between a checked-in engine config and the resolved record

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::{ResultExt, SemrelResult};
use crate::core::releaserc::{self, ReleaseRc};
use std::fs;

/// Compares an existing `.releaserc.json` with the resolved configuration
pub struct DriftCheck;

impl Check for DriftCheck {
  fn name(&self) -> &str {
    "drift"
  }

  fn description(&self) -> &str {
    "Compares a checked-in release config with the resolved one"
  }

  fn requires_file(&self) -> bool {
    true
  }

  fn run(&self, ctx: &CheckContext) -> SemrelResult<CheckResult> {
    let Some(path) = ctx.against.as_deref() else {
      return Ok(CheckResult::pass(self.name(), "No file to compare against"));
    };

    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let existing = ReleaseRc::parse(&content, path)?;
    let resolved = ReleaseRc::from(&ctx.config);
    let diff = releaserc::diff(&existing, &resolved)?;

    if diff.is_empty() {
      Ok(CheckResult::pass(self.name(), format!("{} matches the environment", path.display())))
    } else {
      Ok(
        CheckResult::error(
          self.name(),
          format!("{} differs from the resolved configuration:\n{}", path.display(), diff),
          Some("Run `semrel-config write --apply` to regenerate it"),
        )
        .with_details(serde_json::json!({ "path": path, "diff": diff })),
      )
    }
  }
}

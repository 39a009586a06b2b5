//! Release branch checks

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::SemrelResult;

/// Validates that release branches exist and are legal git ref names
pub struct BranchesCheck;

impl Check for BranchesCheck {
  fn name(&self) -> &str {
    "branches"
  }

  fn description(&self) -> &str {
    "Validates release branch names"
  }

  fn run(&self, ctx: &CheckContext) -> SemrelResult<CheckResult> {
    let branches = &ctx.config.branches;
    if branches.is_empty() {
      return Ok(CheckResult::error(
        self.name(),
        "No release branches configured",
        Some("Set DEFAULT_BRANCH or leave it unset to release from 'main'"),
      ));
    }

    let issues: Vec<String> = branches
      .iter()
      .filter_map(|b| invalid_ref_reason(b).map(|reason| format!("'{}': {}", b, reason)))
      .collect();

    if issues.is_empty() {
      Ok(CheckResult::pass(self.name(), format!("Releasing from {}", branches.join(", "))))
    } else {
      Ok(CheckResult::error(
        self.name(),
        format!("Invalid branch name:\n{}", issues.join("\n")),
        Some("Use a name git accepts, e.g. main, next or release/1.x"),
      ))
    }
  }
}

/// Why git would reject `name` as a branch, following `git check-ref-format`
fn invalid_ref_reason(name: &str) -> Option<&'static str> {
  if name.starts_with('-') {
    return Some("starts with '-'");
  }
  if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
    return Some("contains whitespace or control characters");
  }
  if name.chars().any(|c| matches!(c, '~' | '^' | ':' | '?' | '*' | '[' | '\\')) {
    return Some("contains one of ~ ^ : ? * [ \\");
  }
  if name.contains("..") || name.contains("@{") || name.contains("//") {
    return Some("contains '..', '@{' or '//'");
  }
  if name == "@" {
    return Some("is '@'");
  }
  if name.starts_with('/') || name.ends_with('/') || name.ends_with('.') || name.ends_with(".lock") {
    return Some("starts or ends with '/', or ends with '.' or '.lock'");
  }
  if name.split('/').any(|part| part.starts_with('.')) {
    return Some("has a path component starting with '.'");
  }
  None
}

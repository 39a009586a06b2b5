//! Commit message template checks

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::SemrelResult;
use crate::core::template::Placeholder;

/// Marker that keeps CI from re-running on the release commit
const SKIP_CI: &str = "[skip ci]";

/// Validates the release commit message template
pub struct CommitTemplateCheck;

impl Check for CommitTemplateCheck {
  fn name(&self) -> &str {
    "commit-template"
  }

  fn description(&self) -> &str {
    "Validates commit message placeholders"
  }

  fn run(&self, ctx: &CheckContext) -> SemrelResult<CheckResult> {
    let template = &ctx.config.commit_message_template;

    let missing: Vec<_> = Placeholder::ALL
      .into_iter()
      .filter(|p| !template.contains(*p))
      .map(|p| format!("{{{}}}", p.name()))
      .collect();
    if !missing.is_empty() {
      return Ok(CheckResult::error(
        self.name(),
        format!("Commit message template is missing {}", missing.join(" and ")),
        Some("Include both {version} and {notes} in the template"),
      ));
    }

    let unknown = template.unknown_placeholders();
    if !unknown.is_empty() {
      return Ok(CheckResult::warning(
        self.name(),
        format!("Unknown placeholders left verbatim: {}", unknown.join(", ")),
        Some("Only {version} and {notes} are filled in by the release engine"),
      ));
    }

    if !template.as_str().contains(SKIP_CI) {
      return Ok(CheckResult::warning(
        self.name(),
        format!("Commit message lacks {}; the release commit will trigger CI again", SKIP_CI),
        Some(format!("Append {} to the header line", SKIP_CI)),
      ));
    }

    Ok(CheckResult::pass(self.name(), "Template has {version} and {notes}"))
  }
}

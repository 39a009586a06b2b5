//! Pipeline ordering checks

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::config::{ReleaseConfiguration, StageKind};
use crate::core::error::SemrelResult;
use std::collections::HashSet;

/// Validates stage uniqueness and the ordering the engine depends on
pub struct PipelineOrderCheck;

/// `(before, after)` pairs: `before` produces something `after` consumes
const ORDERING: [(StageKind, StageKind); 3] = [
  (StageKind::CommitAnalyzer, StageKind::ReleaseNotesGenerator),
  (StageKind::ReleaseNotesGenerator, StageKind::Changelog),
  (StageKind::Changelog, StageKind::Git),
];

impl Check for PipelineOrderCheck {
  fn name(&self) -> &str {
    "pipeline-order"
  }

  fn description(&self) -> &str {
    "Validates plugin uniqueness and ordering"
  }

  fn run(&self, ctx: &CheckContext) -> SemrelResult<CheckResult> {
    let issues = pipeline_issues(&ctx.config);

    if issues.is_empty() {
      let names: Vec<_> = ctx.config.pipeline.iter().map(|s| s.name()).collect();
      Ok(
        CheckResult::pass(self.name(), format!("{} stages in order", ctx.config.pipeline.len()))
          .with_details(serde_json::json!({ "plugins": names })),
      )
    } else {
      Ok(CheckResult::error(
        self.name(),
        format!("Pipeline problems:\n{}", issues.join("\n")),
        Some("Keep commit-analyzer first and changelog before git"),
      ))
    }
  }
}

fn pipeline_issues(config: &ReleaseConfiguration) -> Vec<String> {
  let mut issues = Vec::new();

  let mut seen = HashSet::new();
  for stage in &config.pipeline {
    if !seen.insert(stage.kind()) {
      issues.push(format!("{} appears more than once", stage.name()));
    }
  }

  if config.pipeline.first().map(|s| s.kind()) != Some(StageKind::CommitAnalyzer) {
    issues.push(format!("{} must be the first stage", StageKind::CommitAnalyzer));
  }

  for (before, after) in ORDERING {
    if let (Some(b), Some(a)) = (config.position(before), config.position(after))
      && b > a
    {
      issues.push(format!("{} must run before {}", before, after));
    }
  }

  issues
}

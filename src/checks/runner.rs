//! Check runner for executing configuration checks

use super::trait_def::{Check, CheckContext, CheckResult};
use std::sync::Arc;

/// Check runner that executes multiple checks in registration order
pub struct CheckRunner {
  checks: Vec<Arc<dyn Check>>,
}

impl CheckRunner {
  /// Create a new check runner
  pub fn new() -> Self {
    Self { checks: Vec::new() }
  }

  /// Add a check to the runner
  pub fn add_check(&mut self, check: Arc<dyn Check>) {
    self.checks.push(check);
  }

  /// Run all applicable checks and collect results
  pub fn run_all(&self, ctx: &CheckContext) -> Vec<CheckResult> {
    let mut results = Vec::new();

    for check in &self.checks {
      if check.requires_file() && ctx.against.is_none() {
        continue;
      }

      tracing::debug!(check = check.name(), "running check");
      match check.run(ctx) {
        Ok(result) => results.push(result),
        Err(err) => {
          // A check that cannot run counts as a failure
          results.push(CheckResult::error(
            check.name(),
            format!("Check failed to run: {}", err),
            Some("Run with --verbose for more details"),
          ));
        }
      }
    }

    results
  }

  /// Get all registered checks
  pub fn checks(&self) -> &[Arc<dyn Check>] {
    &self.checks
  }
}

impl Default for CheckRunner {
  fn default() -> Self {
    Self::new()
  }
}

/// Create a runner with all built-in checks
pub fn create_default_runner() -> CheckRunner {
  let mut runner = CheckRunner::new();

  runner.add_check(Arc::new(super::branches::BranchesCheck));
  runner.add_check(Arc::new(super::repository::RepositoryUrlCheck));
  runner.add_check(Arc::new(super::pipeline::PipelineOrderCheck));
  runner.add_check(Arc::new(super::assets::ChangelogAssetsCheck));
  runner.add_check(Arc::new(super::template::CommitTemplateCheck));
  runner.add_check(Arc::new(super::drift::DriftCheck));

  runner
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::error::{SemrelError, SemrelResult};
  use crate::core::resolver::resolve;
  use std::collections::HashMap;

  struct Broken;

  impl Check for Broken {
    fn name(&self) -> &str {
      "broken"
    }

    fn description(&self) -> &str {
      "Always errors"
    }

    fn run(&self, _ctx: &CheckContext) -> SemrelResult<CheckResult> {
      Err(SemrelError::message("boom"))
    }
  }

  fn ctx(against: Option<std::path::PathBuf>) -> CheckContext {
    CheckContext {
      config: resolve(&HashMap::<String, String>::new()),
      against,
    }
  }

  #[test]
  fn test_failing_check_becomes_error_result() {
    let mut runner = CheckRunner::new();
    runner.add_check(Arc::new(Broken));
    let results = runner.run_all(&ctx(None));
    assert_eq!(results.len(), 1);
    assert!(!results[0].passed);
    assert!(results[0].message.contains("boom"));
  }

  #[test]
  fn test_drift_skipped_without_file() {
    let runner = create_default_runner();
    let results = runner.run_all(&ctx(None));
    assert_eq!(results.len(), runner.checks().len() - 1);
    assert!(results.iter().all(|r| r.check_name != "drift"));
  }

  #[test]
  fn test_default_config_has_no_errors() {
    let results = create_default_runner().run_all(&ctx(None));
    assert!(results.iter().all(|r| !r.is_blocking(false)));
    // the only complaint about the defaults is the missing repository URL
    let warned: Vec<_> = results.iter().filter(|r| !r.passed).map(|r| r.check_name.as_str()).collect();
    assert_eq!(warned, vec!["repository-url"]);
  }
}

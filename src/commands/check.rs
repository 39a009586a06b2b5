//! Check command: validate the resolved configuration
//!
//! Runs all checks and reports any issues found.

use std::path::PathBuf;

use crate::checks::{CheckContext, CheckResult, Severity, create_default_runner};
use crate::core::config::ReleaseConfiguration;
use crate::core::error::{SemrelError, SemrelResult, ValidationError};

/// Run the checks; returns a validation error when any check blocks
pub fn run_check(
  config: &ReleaseConfiguration,
  against: Option<PathBuf>,
  strict: bool,
  json: bool,
) -> SemrelResult<()> {
  let ctx = CheckContext {
    config: config.clone(),
    against,
  };

  let runner = create_default_runner();
  let results = runner.run_all(&ctx);

  if json {
    let json_output = serde_json::to_string_pretty(&results)
      .map_err(|e| SemrelError::message(format!("Failed to serialize JSON: {}", e)))?;
    println!("{}", json_output);
  } else {
    println!("🩺 Checking release configuration...\n");

    println!("📋 Registered checks:");
    for check in runner.checks() {
      println!("   • {}: {}", check.name(), check.description());
    }
    println!();

    for result in &results {
      print_result(result);
    }

    let passed_count = results.iter().filter(|r| r.passed).count();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Summary: {}/{} checks passed", passed_count, results.len());
  }

  let failed: Vec<String> = results
    .iter()
    .filter(|r| r.is_blocking(strict))
    .map(|r| r.check_name.clone())
    .collect();

  if !failed.is_empty() {
    return Err(SemrelError::Validation(ValidationError::ChecksFailed { failed }));
  }

  if !json {
    if results.iter().any(|r| !r.passed) {
      println!("\n⚠️  Some warnings found. Consider addressing them.");
    } else {
      println!("\n✨ All checks passed!");
    }
  }

  Ok(())
}

fn print_result(result: &CheckResult) {
  let icon = match (result.passed, result.severity) {
    (true, _) => "✅",
    (false, Severity::Warning) => "⚠️ ",
    (false, _) => "❌",
  };
  println!("{} {}: {}", icon, result.check_name, result.message);

  if !result.passed
    && let Some(ref suggestion) = result.suggestion
  {
    println!("   💡 Fix: {}", suggestion);
  }
  println!();
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::resolver::resolve;
  use std::collections::HashMap;

  fn config(pairs: &[(&str, &str)]) -> ReleaseConfiguration {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    resolve(&env)
  }

  #[test]
  fn test_warnings_pass_unless_strict() {
    // defaults warn about the missing repository URL
    assert!(run_check(&config(&[]), None, false, true).is_ok());

    let err = run_check(&config(&[]), None, true, true).unwrap_err();
    assert!(err.to_string().contains("repository-url"));
  }

  #[test]
  fn test_complete_config_passes_strict() {
    let config = config(&[("REPO_URL", "git@github.com:acme/widgets.git")]);
    assert!(run_check(&config, None, true, false).is_ok());
  }

  #[test]
  fn test_errors_fail_without_strict() {
    let config = config(&[("REPO_URL", "nonsense value")]);
    let err = run_check(&config, None, false, true).unwrap_err();
    assert_eq!(err.exit_code().as_i32(), 3);
  }
}

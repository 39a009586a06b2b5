//! Check trait abstraction for configuration validation
//!
//! The resolver never rejects its input. Validation lives here, one level up:
//! each check inspects a resolved `ReleaseConfiguration` and reports a
//! `CheckResult`.

use crate::core::config::ReleaseConfiguration;
use crate::core::error::SemrelResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Severity level for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
  /// Informational message (not an issue)
  Info,
  /// Warning (non-blocking, but should be addressed)
  Warning,
  /// Error (blocking, must be fixed)
  Error,
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Severity::Info => write!(f, "INFO"),
      Severity::Warning => write!(f, "WARN"),
      Severity::Error => write!(f, "ERROR"),
    }
  }
}

/// Result of running a check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
  /// Name of the check that ran
  pub check_name: String,
  /// Whether the check passed
  pub passed: bool,
  /// Severity level (if failed)
  pub severity: Severity,
  /// Human-readable message
  pub message: String,
  /// Optional suggested fix
  pub suggestion: Option<String>,
  /// Additional metadata (for JSON output)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}

impl CheckResult {
  /// Create a passing check result
  pub fn pass(check_name: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      check_name: check_name.into(),
      passed: true,
      severity: Severity::Info,
      message: message.into(),
      suggestion: None,
      details: None,
    }
  }

  /// Create a failing check result with error severity
  pub fn error(
    check_name: impl Into<String>,
    message: impl Into<String>,
    suggestion: Option<impl Into<String>>,
  ) -> Self {
    Self {
      check_name: check_name.into(),
      passed: false,
      severity: Severity::Error,
      message: message.into(),
      suggestion: suggestion.map(|s| s.into()),
      details: None,
    }
  }

  /// Create a failing check result with warning severity
  pub fn warning(
    check_name: impl Into<String>,
    message: impl Into<String>,
    suggestion: Option<impl Into<String>>,
  ) -> Self {
    Self {
      check_name: check_name.into(),
      passed: false,
      severity: Severity::Warning,
      message: message.into(),
      suggestion: suggestion.map(|s| s.into()),
      details: None,
    }
  }

  /// Add details to the check result
  pub fn with_details(mut self, details: serde_json::Value) -> Self {
    self.details = Some(details);
    self
  }

  /// Whether this result should fail the run
  ///
  /// Errors always fail; warnings fail only in strict mode.
  pub fn is_blocking(&self, strict: bool) -> bool {
    !self.passed && (self.severity == Severity::Error || (strict && self.severity == Severity::Warning))
  }
}

/// Context passed to checks
#[derive(Debug, Clone)]
pub struct CheckContext {
  /// The resolved configuration under test
  pub config: ReleaseConfiguration,
  /// Existing engine config to compare against (drift check)
  pub against: Option<PathBuf>,
}

/// Configuration check
///
/// # Example
///
/// ```rust,ignore
/// struct NoPrereleaseBranches;
///
/// impl Check for NoPrereleaseBranches {
///   fn name(&self) -> &str {
///     "no-prerelease"
///   }
///
///   fn description(&self) -> &str {
///     "Rejects beta branches"
///   }
///
///   fn run(&self, ctx: &CheckContext) -> SemrelResult<CheckResult> {
///     if ctx.config.branches.iter().any(|b| b == "beta") {
///       Ok(CheckResult::error(self.name(), "beta is not allowed", None::<String>))
///     } else {
///       Ok(CheckResult::pass(self.name(), "ok"))
///     }
///   }
/// }
/// ```
pub trait Check: Send + Sync {
  /// Unique name for this check (kebab-case)
  fn name(&self) -> &str;

  /// Human-readable description of what this check validates
  fn description(&self) -> &str;

  /// Run the check and return a result
  fn run(&self, ctx: &CheckContext) -> SemrelResult<CheckResult>;

  /// Whether this check only applies when comparing against a file
  fn requires_file(&self) -> bool {
    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_blocking_rules() {
    let pass = CheckResult::pass("a", "ok");
    let warn = CheckResult::warning("b", "hmm", Some("fix"));
    let err = CheckResult::error("c", "bad", None::<String>);

    assert!(!pass.is_blocking(true));
    assert!(!warn.is_blocking(false));
    assert!(warn.is_blocking(true));
    assert!(err.is_blocking(false));
  }

  #[test]
  fn test_details_serialize_only_when_set() {
    let plain = serde_json::to_value(CheckResult::pass("a", "ok")).unwrap();
    assert!(plain.get("details").is_none());

    let detailed = CheckResult::pass("a", "ok").with_details(serde_json::json!({"n": 1}));
    let value = serde_json::to_value(detailed).unwrap();
    assert_eq!(value["details"]["n"], 1);
    assert_eq!(value["severity"], "Info");
  }
}

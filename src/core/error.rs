//! Error types for semrel-config with contextual messages and exit codes
//!
//! The resolver itself never fails. Everything above it (file I/O, drift
//! parsing, CLI arguments, failed checks) reports through `SemrelError`, which
//! carries a category, an exit code and an optional help line.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for semrel-config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (invalid args, malformed files)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// Validation failure (checks failed)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for semrel-config
#[derive(Debug)]
pub enum SemrelError {
  /// Problems with user-supplied configuration input
  Config(ConfigError),

  /// Checks on the resolved configuration failed
  Validation(ValidationError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl SemrelError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    SemrelError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  ///
  /// I/O errors are folded into a message so the context is not lost.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      SemrelError::Message { message, context, help } => SemrelError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      SemrelError::Io(err) => SemrelError::Message {
        message: ctx_str,
        context: Some(format!("I/O error: {}", err)),
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      SemrelError::Config(_) => ExitCode::User,
      SemrelError::Validation(_) => ExitCode::Validation,
      SemrelError::Io(_) => ExitCode::System,
      SemrelError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      SemrelError::Config(e) => e.help_message(),
      SemrelError::Validation(e) => e.help_message(),
      SemrelError::Message { help, .. } => help.clone(),
      SemrelError::Io(_) => None,
    }
  }
}

impl fmt::Display for SemrelError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SemrelError::Config(e) => write!(f, "{}", e),
      SemrelError::Validation(e) => write!(f, "{}", e),
      SemrelError::Io(e) => write!(f, "I/O error: {}", e),
      SemrelError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for SemrelError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      SemrelError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for SemrelError {
  fn from(err: io::Error) -> Self {
    SemrelError::Io(err)
  }
}

impl From<String> for SemrelError {
  fn from(msg: String) -> Self {
    SemrelError::message(msg)
  }
}

impl From<&str> for SemrelError {
  fn from(msg: &str) -> Self {
    SemrelError::message(msg)
  }
}

impl From<serde_json::Error> for SemrelError {
  fn from(err: serde_json::Error) -> Self {
    SemrelError::message(format!("JSON error: {}", err))
  }
}

/// Errors in configuration input supplied by the user
#[derive(Debug)]
pub enum ConfigError {
  /// `--set` argument without `=` or with an empty key
  InvalidOverride { raw: String },

  /// Existing engine config file could not be parsed
  MalformedReleaserc { path: PathBuf, reason: String },

  /// Preview version is not valid semver
  InvalidVersion { raw: String, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::InvalidOverride { .. } => {
        Some("Overrides use the form KEY=VALUE, e.g. --set DEFAULT_BRANCH=next".to_string())
      }
      ConfigError::MalformedReleaserc { .. } => Some(
        "Regenerate the file with `semrel-config write --apply`, or fix the JSON by hand.".to_string(),
      ),
      ConfigError::InvalidVersion { .. } => Some("Use a semantic version such as 1.4.0 or v2.0.0-rc.1".to_string()),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::InvalidOverride { raw } => {
        write!(f, "Invalid override '{}': expected KEY=VALUE", raw)
      }
      ConfigError::MalformedReleaserc { path, reason } => {
        write!(f, "Malformed release config at {}: {}", path.display(), reason)
      }
      ConfigError::InvalidVersion { raw, reason } => {
        write!(f, "Invalid version '{}': {}", raw, reason)
      }
    }
  }
}

/// Validation errors raised when checks on the resolved record fail
#[derive(Debug)]
pub enum ValidationError {
  /// One or more checks failed
  ChecksFailed { failed: Vec<String> },
}

impl ValidationError {
  fn help_message(&self) -> Option<String> {
    match self {
      ValidationError::ChecksFailed { .. } => {
        Some("Run `semrel-config check` to see each failing check and its suggested fix.".to_string())
      }
    }
  }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ValidationError::ChecksFailed { failed } => {
        write!(f, "Configuration checks failed: {}", failed.join(", "))
      }
    }
  }
}

/// Result type alias for semrel-config
pub type SemrelResult<T> = Result<T, SemrelError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> SemrelResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> SemrelResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<SemrelError>,
{
  fn context(self, ctx: impl Into<String>) -> SemrelResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> SemrelResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &SemrelError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}

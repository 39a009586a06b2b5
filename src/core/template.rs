//! Commit message template for the release commit
//!
//! Templates use `{version}` and `{notes}` placeholders. The release engine
//! fills them at execution time using its own `${nextRelease.*}` syntax, so
//! the template is translated when the engine config is written. `render`
//! exists only for local previews.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid"));

/// Placeholders the release engine knows how to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
  /// Next release version, e.g. `1.4.0`
  Version,
  /// Release notes generated for the next release
  Notes,
}

impl Placeholder {
  /// All known placeholders
  pub const ALL: [Placeholder; 2] = [Placeholder::Version, Placeholder::Notes];

  /// Name as written inside braces
  pub fn name(self) -> &'static str {
    match self {
      Placeholder::Version => "version",
      Placeholder::Notes => "notes",
    }
  }

  /// Engine expression this placeholder maps to
  pub fn engine_expr(self) -> &'static str {
    match self {
      Placeholder::Version => "${nextRelease.version}",
      Placeholder::Notes => "${nextRelease.notes}",
    }
  }

  fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|p| p.name() == name)
  }
}

/// Template for the commit created by the git stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessageTemplate {
  raw: String,
}

impl CommitMessageTemplate {
  /// Header line of the default release commit
  pub const DEFAULT_HEADER: &'static str = "chore(release): {version} [skip ci]";

  /// Wrap a raw template string
  pub fn new(raw: impl Into<String>) -> Self {
    Self { raw: raw.into() }
  }

  /// The template as written, with `{...}` placeholders
  pub fn as_str(&self) -> &str {
    &self.raw
  }

  /// Known placeholders in order of appearance (repeats included)
  pub fn placeholders(&self) -> Vec<Placeholder> {
    PLACEHOLDER_RE
      .captures_iter(&self.raw)
      .filter_map(|c| Placeholder::from_name(&c[1]))
      .collect()
  }

  /// Whether the template references `placeholder` at least once
  pub fn contains(&self, placeholder: Placeholder) -> bool {
    self.placeholders().contains(&placeholder)
  }

  /// Brace tokens that are not known placeholders
  pub fn unknown_placeholders(&self) -> Vec<String> {
    PLACEHOLDER_RE
      .captures_iter(&self.raw)
      .filter(|c| Placeholder::from_name(&c[1]).is_none())
      .map(|c| c[1].to_string())
      .collect()
  }

  /// Translate into the engine's template syntax
  ///
  /// Unknown tokens are left untouched.
  pub fn to_engine_syntax(&self) -> String {
    self.substitute(|p| p.engine_expr().to_string())
  }

  /// Fill the placeholders locally
  pub fn render(&self, version: &str, notes: &str) -> String {
    self.substitute(|p| match p {
      Placeholder::Version => version.to_string(),
      Placeholder::Notes => notes.to_string(),
    })
  }

  fn substitute(&self, mut value: impl FnMut(Placeholder) -> String) -> String {
    PLACEHOLDER_RE
      .replace_all(&self.raw, |c: &regex::Captures<'_>| match Placeholder::from_name(&c[1]) {
        Some(p) => value(p),
        None => c[0].to_string(),
      })
      .into_owned()
  }
}

impl Default for CommitMessageTemplate {
  fn default() -> Self {
    Self::new(format!("{}\n\n{{notes}}", Self::DEFAULT_HEADER))
  }
}

impl fmt::Display for CommitMessageTemplate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.raw)
  }
}

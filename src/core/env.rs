//! Environment sources for the resolver
//!
//! The resolver only ever sees an `EnvSource`. The CLI takes one snapshot of
//! the process environment at startup and layers `--set` overrides on top.

use crate::core::error::{ConfigError, SemrelError, SemrelResult};
use std::collections::{BTreeMap, HashMap};

/// Branch name eligible to trigger a release
pub const DEFAULT_BRANCH: &str = "DEFAULT_BRANCH";
/// Remote repository location
pub const REPO_URL: &str = "REPO_URL";
/// Path written by the changelog stage
pub const CHANGELOG_FILE: &str = "CHANGELOG_FILE";

/// A read-only mapping from variable name to string value
pub trait EnvSource {
  /// Look up a variable; `None` when unset
  fn var(&self, key: &str) -> Option<String>;
}

impl EnvSource for HashMap<String, String> {
  fn var(&self, key: &str) -> Option<String> {
    self.get(key).cloned()
  }
}

impl EnvSource for BTreeMap<String, String> {
  fn var(&self, key: &str) -> Option<String> {
    self.get(key).cloned()
  }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
  fn var(&self, key: &str) -> Option<String> {
    (**self).var(key)
  }
}

/// Look up a variable, treating an empty value the same as an unset one
pub fn non_empty(env: &impl EnvSource, key: &str) -> Option<String> {
  env.var(key).filter(|v| !v.is_empty())
}

/// Snapshot of the process environment
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv {
  vars: BTreeMap<String, String>,
}

impl ProcessEnv {
  /// Capture the current process environment
  ///
  /// Entries whose name or value is not valid UTF-8 are skipped.
  pub fn snapshot() -> Self {
    let vars = std::env::vars_os()
      .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
      .collect();
    Self { vars }
  }
}

impl EnvSource for ProcessEnv {
  fn var(&self, key: &str) -> Option<String> {
    self.vars.get(key).cloned()
  }
}

/// A base environment with `KEY=VALUE` overrides applied on top
#[derive(Debug, Clone)]
pub struct Overrides<E> {
  base: E,
  overrides: BTreeMap<String, String>,
}

impl<E: EnvSource> Overrides<E> {
  /// Layer overrides over `base`; later pairs win over earlier ones
  pub fn new(base: E, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
    Self {
      base,
      overrides: pairs.into_iter().collect(),
    }
  }
}

impl<E: EnvSource> EnvSource for Overrides<E> {
  fn var(&self, key: &str) -> Option<String> {
    self.overrides.get(key).cloned().or_else(|| self.base.var(key))
  }
}

/// Parse a `KEY=VALUE` override; the value may be empty or contain `=`
pub fn parse_key_val(s: &str) -> SemrelResult<(String, String)> {
  match s.split_once('=') {
    Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
    _ => Err(SemrelError::Config(ConfigError::InvalidOverride { raw: s.to_string() })),
  }
}

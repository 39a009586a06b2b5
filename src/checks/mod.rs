//! Validation of resolved release configurations
//!
//! All checks implement the `Check` trait and run against a resolved
//! `ReleaseConfiguration`. The resolver itself never fails; this module is
//! where a configuration can be judged unusable.
//!
//! # Built-in Checks
//!
//! - **branches**: release branches exist and are valid git ref names
//! - **repository-url**: the remote URL is set and well formed
//! - **pipeline-order**: plugins are unique and ordered as the engine needs
//! - **changelog-assets**: the changelog file is committed by the git stage
//! - **commit-template**: the commit message has `{version}` and `{notes}`
//! - **drift**: a checked-in `.releaserc.json` matches (only with `--against`)

mod assets;
mod branches;
mod drift;
mod pipeline;
mod repository;
mod runner;
mod template;
mod trait_def;

pub use runner::create_default_runner;
pub use trait_def::{CheckContext, CheckResult, Severity};

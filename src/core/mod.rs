//! Core of semrel-config
//!
//! - **config**: the `ReleaseConfiguration` record and its stages
//! - **env**: environment sources injected into the resolver
//! - **error**: error types with exit codes and help messages
//! - **releaserc**: the engine's `.releaserc.json` shape
//! - **resolver**: environment to `ReleaseConfiguration`
//! - **template**: the release commit message template

pub mod config;
pub mod env;
pub mod error;
pub mod releaserc;
pub mod resolver;
pub mod template;

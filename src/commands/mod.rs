//! CLI commands for semrel-config
//!
//! - **show**: print the resolved configuration
//! - **write**: write `.releaserc.json` for the release engine
//! - **check**: validate the resolved configuration
//! - **preview**: render the release commit message
//!
//! All commands take the `ReleaseConfiguration` resolved once in `main`.

pub mod check;
pub mod preview;
pub mod show;
pub mod write;

pub use check::run_check;
pub use preview::{NotesSource, run_preview};
pub use show::run_show;
pub use write::run_write;

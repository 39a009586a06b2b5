//! Show the resolved release configuration

use crate::core::config::ReleaseConfiguration;
use crate::core::error::SemrelResult;
use crate::core::releaserc::ReleaseRc;

/// Print the resolved configuration, either as a summary or as engine JSON
pub fn run_show(config: &ReleaseConfiguration, json: bool) -> SemrelResult<()> {
  if json {
    print!("{}", ReleaseRc::from(config).to_json_pretty()?);
  } else {
    print!("{}", render_summary(config));
  }
  Ok(())
}

/// Human-readable summary
pub fn render_summary(config: &ReleaseConfiguration) -> String {
  let mut out = String::new();
  out.push_str("📦 Release configuration\n\n");
  out.push_str(&format!("   Branches:    {}\n", config.branches.join(", ")));

  let repository = if config.repository_url.is_empty() {
    "(unset, engine uses the git remote)"
  } else {
    config.repository_url.as_str()
  };
  out.push_str(&format!("   Repository:  {}\n\n", repository));

  out.push_str("🔧 Pipeline:\n");
  for (idx, stage) in config.pipeline.iter().enumerate() {
    out.push_str(&format!("   {}. {}\n", idx + 1, stage.name()));
    if let Some(params) = stage.parameters() {
      for (key, value) in params {
        // message is shown below in its readable form
        if key == "message" {
          continue;
        }
        out.push_str(&format!("      {} = {}\n", key, value));
      }
    }
  }

  out.push_str("\n📝 Commit message:\n");
  for line in config.commit_message_template.as_str().lines() {
    out.push_str(&format!("   {}\n", line));
  }
  out
}

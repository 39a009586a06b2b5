mod checks;
mod commands;
mod core;
mod utils;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use core::env::{Overrides, ProcessEnv, parse_key_val};
use core::error::{SemrelError, print_error};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "SEMREL_CONFIG_LOG";

/// Resolve semantic-release configuration from the environment
#[derive(Parser)]
#[command(name = "semrel-config")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Override an environment variable (KEY=VALUE, repeatable)
  #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
  overrides: Vec<String>,

  /// Enable debug logging on stderr
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show the resolved release configuration
  Show {
    /// Output the engine config as JSON
    #[arg(long)]
    json: bool,
  },

  /// Write the engine config file (.releaserc.json)
  Write {
    /// Destination path (default: ./.releaserc.json)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Actually write the file (default: dry-run mode showing content)
    #[arg(long)]
    apply: bool,
  },

  /// Validate the resolved configuration
  Check {
    /// Compare against an existing engine config file
    #[arg(long, value_name = "PATH")]
    against: Option<PathBuf>,
    /// Treat warnings as errors (exit code 3)
    #[arg(long)]
    strict: bool,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Render the release commit message for a version
  Preview {
    /// Version of the release (e.g. 1.4.0 or v1.4.0)
    #[arg(value_name = "SEMVER")]
    release_version: String,
    /// Release notes text
    #[arg(long, conflicts_with = "notes_file")]
    notes: Option<String>,
    /// Read release notes from a file
    #[arg(long, value_name = "PATH")]
    notes_file: Option<PathBuf>,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn init_logging(verbose: bool) {
  let default = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  if let Err(err) = run(cli) {
    handle_error(err);
  }
}

fn run(cli: Cli) -> Result<(), SemrelError> {
  let overrides = cli
    .overrides
    .iter()
    .map(|raw| parse_key_val(raw))
    .collect::<Result<Vec<_>, _>>()?;

  // Snapshot once; nothing below reads the process environment again
  let env = Overrides::new(ProcessEnv::snapshot(), overrides);
  let config = core::resolver::resolve(&env);
  tracing::debug!(
    branches = ?config.branches,
    stages = config.pipeline.len(),
    "resolved release configuration"
  );

  match cli.command {
    Commands::Show { json } => commands::run_show(&config, json),
    Commands::Write { output, apply } => commands::run_write(&config, output, apply),
    Commands::Check { against, strict, json } => commands::run_check(&config, against, strict, json),
    Commands::Preview {
      release_version,
      notes,
      notes_file,
    } => {
      let notes = match (notes, notes_file) {
        (Some(text), _) => commands::NotesSource::Inline(text),
        (None, Some(path)) => commands::NotesSource::File(path),
        (None, None) => commands::NotesSource::None,
      };
      commands::run_preview(&config, &release_version, notes)
    }
  }
}

fn handle_error(err: SemrelError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}

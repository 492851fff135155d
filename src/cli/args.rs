//! Command-line argument parsing.

use thiserror::Error;

use crate::config::DashConfig;
use crate::models::Selection;

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Fetch once and print to stdout, no TUI
    Snapshot(Selection),
    /// Run the TUI application (default)
    RunTui,
}

/// Parsed arguments: the command plus config overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    pub api_url: Option<String>,
    pub days: Option<u32>,
}

impl CliArgs {
    /// Overlay the flags on a loaded config. Flags win over file and env.
    pub fn apply_to(&self, mut config: DashConfig) -> DashConfig {
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(days) = self.days {
            config.timeline_days = days;
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("unknown argument '{0}'")]
    Unknown(String),
}

pub const USAGE: &str = "\
Usage: covidash [OPTIONS]

Options:
  --snapshot [global|ISO]  Print current stats and the top 10 countries, then exit
  --api-url URL            Statistics API base URL (default: https://disease.sh)
  --days N                 Days of history for the graph (default: 120)
  -V, --version            Print version
  -h, --help               Print this help

Environment:
  COVIDASH_API_URL, COVIDASH_TIMEOUT_SECS, COVIDASH_TIMELINE_DAYS, COVIDASH_LOG";

/// Parse command-line arguments, program name first.
///
/// ```
/// use covidash::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["covidash".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs {
        command: CliCommand::RunTui,
        api_url: None,
        days: None,
    };

    // Skip the program name
    let mut args = args.skip(1).peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(with_command(parsed, CliCommand::Version)),
            "--help" | "-h" => return Ok(with_command(parsed, CliCommand::Help)),
            "--snapshot" => {
                let selection = match args.next_if(|next| !next.starts_with('-')) {
                    Some(raw) => Selection::parse(&raw).map_err(|_| ArgsError::InvalidValue {
                        flag: "--snapshot",
                        value: raw,
                    })?,
                    None => Selection::Global,
                };
                parsed.command = CliCommand::Snapshot(selection);
            }
            "--api-url" => {
                let url = args.next().ok_or(ArgsError::MissingValue("--api-url"))?;
                parsed.api_url = Some(url);
            }
            "--days" => {
                let raw = args.next().ok_or(ArgsError::MissingValue("--days"))?;
                let days = raw.parse().map_err(|_| ArgsError::InvalidValue {
                    flag: "--days",
                    value: raw,
                })?;
                parsed.days = Some(days);
            }
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(parsed)
}

fn with_command(mut parsed: CliArgs, command: CliCommand) -> CliArgs {
    parsed.command = command;
    parsed
}
